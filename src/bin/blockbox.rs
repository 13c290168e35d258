use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::Context;
    use blockbox::{
        build::{build_incremental_aabb, parse_position_list},
        io::{parse_json_file, parse_ron_file, read_text_file, write_json_file},
        voxel::{IncrementalAabb, PositionSet, PositionSetAabb, Region},
    };
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    #[command(about = "Voxel position sets with incremental bounding boxes", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the size and bounding box of a stored incremental AABB
        Inspect {
            /// Path to the JSON file holding the incremental AABB
            path: PathBuf,
        },
        /// Build an incremental AABB from a list of positions and store it
        Build {
            /// Path to RON file with the region to create the AABB for
            #[arg(short, long)]
            region: PathBuf,
            /// Path to text file with whitespace- or comma-separated `x y z`
            /// triples
            #[arg(short, long)]
            positions: PathBuf,
            /// Path where the JSON file should be written
            #[arg(short, long)]
            output: PathBuf,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Inspect { path } => {
                let aabb: IncrementalAabb = parse_json_file(&path)?;
                print_summary(&aabb);
                Ok(())
            }
            Command::Build {
                region: region_path,
                positions: positions_path,
                output,
            } => {
                let region: Region = parse_ron_file(&region_path)?;

                let text = read_text_file(&positions_path)
                    .with_context(|| format!("Could not read {}", positions_path.display()))?;
                let positions = parse_position_list(&text).with_context(|| {
                    format!("Invalid position list in {}", positions_path.display())
                })?;

                let aabb = build_incremental_aabb(region, positions)?;
                write_json_file(&aabb, &output)?;

                print_summary(&aabb);
                Ok(())
            }
        }
    }

    fn print_summary(aabb: &IncrementalAabb) {
        let region = aabb.region();
        println!(
            "Region: center {:?}, extents {:?}",
            region.center, region.extents
        );
        println!("Positions: {}", aabb.len());
        match aabb.bounding_box() {
            Some(bounding_box) => println!("Bounding box: {bounding_box}"),
            None => println!("Bounding box: none"),
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
