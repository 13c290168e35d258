//! Logging macros.

/// Evaluates the expression and logs how long it took at the info level. The
/// clock is only read when info logging is enabled.
#[macro_export]
macro_rules! with_timing_info_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        if $crate::log_enabled!($crate::Level::Info) {
            let _start_time = ::std::time::Instant::now();
            let _result = $expression;
            let _duration = _start_time.elapsed();
            $crate::info!(
                concat!($message, " took {:.2} ms")$(,$arg)*,
                _duration.as_secs_f64() * 1e3,
            );
            _result
        } else {
            $expression
        }
    }};
}

/// Evaluates the expression between a `Begin` and a timed `Done` trace
/// message. The clock is only read when trace logging is enabled.
#[macro_export]
macro_rules! with_trace_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        if $crate::log_enabled!($crate::Level::Trace) {
            $crate::trace!(concat!("Begin: ", $message)$(,$arg)*);
            let _start_time = ::std::time::Instant::now();
            let _result = $expression;
            let _duration = _start_time.elapsed();
            $crate::trace!(
                concat!("({:.2} ms) Done: ", $message),
                _duration.as_secs_f64() * 1e3
                $(,$arg)*
            );
            _result
        } else {
            $expression
        }
    }};
}

#[cfg(test)]
mod tests {
    use log::{LevelFilter, Log, Metadata, Record};
    use std::sync::{Mutex, Once};

    struct CapturingLogger {
        messages: Mutex<Vec<String>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("{}", record.args()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        messages: Mutex::new(Vec::new()),
    };
    static INIT: Once = Once::new();

    fn logged_messages_containing(needle: &str) -> Vec<String> {
        LOGGER
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|message| message.contains(needle))
            .cloned()
            .collect()
    }

    // Tests only inspect messages containing their own text
    fn run_with_level<T>(level: LevelFilter, f: impl FnOnce() -> T) -> T {
        INIT.call_once(|| log::set_logger(&LOGGER).unwrap());
        static LEVEL_LOCK: Mutex<()> = Mutex::new(());
        let _guard = LEVEL_LOCK.lock().unwrap();
        log::set_max_level(level);
        f()
    }

    #[test]
    fn timing_info_logging_returns_value_and_logs_duration() {
        let mut evaluations = 0;
        let value = run_with_level(LevelFilter::Info, || {
            with_timing_info_logging!("Summing {} numbers", 3; {
                evaluations += 1;
                1 + 2 + 3
            })
        });
        assert_eq!(value, 6);
        assert_eq!(evaluations, 1);

        let messages = logged_messages_containing("Summing 3 numbers");
        assert_eq!(messages.len(), 1);
        assert!(messages[0].ends_with(" ms"));
    }

    #[test]
    fn timing_info_logging_evaluates_once_when_info_is_disabled() {
        let mut evaluations = 0;
        let value = run_with_level(LevelFilter::Warn, || {
            with_timing_info_logging!("Quietly multiplying"; {
                evaluations += 1;
                6 * 7
            })
        });
        assert_eq!(value, 42);
        assert_eq!(evaluations, 1);
        assert!(logged_messages_containing("Quietly multiplying").is_empty());
    }

    #[test]
    fn trace_logging_brackets_expression_with_begin_and_done() {
        let value = run_with_level(LevelFilter::Trace, || {
            with_trace_logging!("Rebuilding {}", "trackers"; "rebuilt")
        });
        assert_eq!(value, "rebuilt");

        let messages = logged_messages_containing("Rebuilding trackers");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "Begin: Rebuilding trackers");
        assert!(messages[1].ends_with("Done: Rebuilding trackers"));
    }
}
