#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Leveled console logging.
//!
//! This crate re-exports the workspace's two libraries under one name:
//!
//! - [`logging`] holds [`LeveledLogger`], [`SeverityLevel`],
//!   [`DecorationConfig`], [`LoggerConfig`], the `log_*!` macros, and the
//!   tracing bridge.
//! - [`logging_sink`] holds the [`Sink`] trait with its console, writer, and
//!   recording implementations.
//!
//! ```no_run
//! use leveled_logger::{ConsoleSink, DecorationConfig, LeveledLogger, log_info};
//!
//! let decoration = DecorationConfig::builder()
//!     .prefix(|| "backup".to_owned())
//!     .left_separator(">")
//!     .build();
//! let mut logger = LeveledLogger::with_decoration("info", decoration, ConsoleSink::console());
//!
//! log_info!(logger, "copied", 42, "files")?;
//! logger.debug(&[&"only shown at debug"])?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub use logging;
pub use logging_sink;

pub use logging::{
    Decoration, DecorationBuilder, DecorationConfig, Hook, LeveledLogger, LoggerConfig,
    ParseSeverityLevelError, Producer, SINK_TARGET, SeverityLevel, TRACING_TARGET, TracingSink,
    log_debug, log_error, log_info, log_verbose, log_warning,
};
pub use logging_sink::{
    Channel, ConsoleSink, LineMode, RecordedLine, RecordingSink, Sink, WriterSink, render_parts,
};

#[cfg(feature = "subscriber")]
pub use logging::{LeveledLayer, SharedLogger, init_tracing, try_init_tracing};
