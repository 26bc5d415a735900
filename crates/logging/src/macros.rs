//! crates/logging/src/macros.rs
//! Variadic call sites for the severity methods of a leveled logger.
//!
//! Each macro takes the logger followed by any number of [`Display`](core::fmt::Display)
//! arguments and expands to the matching method call. The expansion evaluates
//! to the method's `io::Result<()>`.

/// Logs the arguments at `error` severity.
///
/// # Example
/// ```
/// use logging::{LeveledLogger, log_error};
/// use logging_sink::RecordingSink;
///
/// let mut logger = LeveledLogger::new("info", RecordingSink::new());
/// log_error!(logger, "transfer failed:", 23)?;
/// assert_eq!(logger.sink().rendered(), ["[ERROR] transfer failed: 23"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $logger.error(&[$(&$item as &dyn ::std::fmt::Display),*])
    };
}

/// Logs the arguments at `warning` severity.
///
/// # Example
/// ```ignore
/// log_warning!(logger, "disk usage at", percent, "%")?;
/// ```
#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $logger.warning(&[$(&$item as &dyn ::std::fmt::Display),*])
    };
}

/// Logs the arguments at `info` severity.
///
/// # Example
/// ```ignore
/// log_info!(logger, "listening on", addr)?;
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $logger.info(&[$(&$item as &dyn ::std::fmt::Display),*])
    };
}

/// Logs the arguments at `verbose` severity.
///
/// # Example
/// ```ignore
/// log_verbose!(logger, "scanned", count, "entries")?;
/// ```
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $logger.verbose(&[$(&$item as &dyn ::std::fmt::Display),*])
    };
}

/// Logs the arguments at `debug` severity.
///
/// # Example
/// ```ignore
/// log_debug!(logger, "state =", state)?;
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $item:expr)* $(,)?) => {
        $logger.debug(&[$(&$item as &dyn ::std::fmt::Display),*])
    };
}
