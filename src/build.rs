//! Building incremental bounding boxes from plain position lists.

use anyhow::{Context, Result, bail};
use blockbox_voxel::{IncrementalAabb, PositionSet, Region, VoxelPosition};

/// Parses a list of voxel positions given as integer `x y z` triples. The
/// integers may be separated by any mix of whitespace and commas, and lines
/// starting with `#` are ignored.
///
/// # Errors
/// Returns an error if any token is not an `i32`, or if the number of
/// integers is not a multiple of three.
pub fn parse_position_list(text: &str) -> Result<Vec<VoxelPosition>> {
    let coords = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .with_context(|| format!("Invalid coordinate `{token}`"))
        })
        .collect::<Result<Vec<_>>>()?;

    if coords.len() % 3 != 0 {
        bail!(
            "Expected a whole number of x y z triples, got {} coordinates",
            coords.len()
        );
    }

    Ok(coords
        .chunks_exact(3)
        .map(|triple| [triple[0], triple[1], triple[2]])
        .collect())
}

/// Creates an [`IncrementalAabb`] for the given region holding the given
/// positions. Repeated positions are only stored once.
///
/// # Errors
/// Returns an error if any region extent is larger than
/// [`Region::MAX_EXTENT`], or if any position cannot be stored in the
/// region.
pub fn build_incremental_aabb(
    region: Region,
    positions: impl IntoIterator<Item = VoxelPosition>,
) -> Result<IncrementalAabb> {
    let mut aabb = IncrementalAabb::try_new(region)
        .with_context(|| format!("Invalid region {region:?}"))?;
    blockbox_log::with_timing_info_logging!(
        "Inserting positions into region {:?}", region;
        positions.into_iter().try_for_each(|position| {
            aabb.add(position)
                .map(drop)
                .with_context(|| format!("Could not insert position {position:?}"))
        })
    )?;
    Ok(aabb)
}
