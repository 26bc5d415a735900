#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides a leveled logger: an object holding a severity threshold
//! that filters calls by severity, decorates surviving calls with a prefix, a
//! `[LEVEL]` tag, and a suffix, and forwards them to an injected
//! [`Sink`](logging_sink::Sink).
//!
//! # Design
//!
//! - [`SeverityLevel`] is the ordered vocabulary `none < error < warning <
//!   info < verbose < debug`. A threshold admits every severity at or below
//!   it; `none` admits nothing.
//! - [`DecorationConfig`] holds the prefix and suffix producers, their
//!   separators, and optional hooks observing each line around the sink write.
//! - [`LeveledLogger`] owns the threshold, the decoration, and the sink. Level
//!   names are resolved case-insensitively and unknown names fall back to
//!   `info`.
//! - [`LoggerConfig`] is the plain-data form of a logger, deserializable when
//!   the `serde` feature is enabled.
//! - [`TracingSink`] and, with the `subscriber` feature, [`LeveledLayer`]
//!   connect the logger to the `tracing` ecosystem in either direction.
//!
//! # Invariants
//!
//! - The sink receives nothing when the threshold excludes the severity or
//!   when no message items are supplied.
//! - Producers and hooks only run for calls that reach the sink.
//! - Verbose lines share the info channel; every other severity has its own.
//!
//! # Errors
//!
//! Severity methods return the sink's [`std::io::Error`] unchanged. Unknown
//! level names are never an error; [`ParseSeverityLevelError`] only surfaces
//! through the strict [`FromStr`](std::str::FromStr) implementation.
//!
//! # Examples
//!
//! ```
//! use logging::{DecorationConfig, LeveledLogger, log_info};
//! use logging_sink::RecordingSink;
//!
//! let decoration = DecorationConfig::builder()
//!     .prefix(|| "sync".to_owned())
//!     .left_separator(":")
//!     .build();
//! let mut logger = LeveledLogger::with_decoration("warning", decoration, RecordingSink::new());
//!
//! logger.warning(&[&"retrying in", &5, &"s"])?;
//! log_info!(logger, "not shown at warning")?;
//!
//! assert_eq!(logger.sink().rendered(), ["sync : [WARNING] retrying in 5 s"]);
//! # Ok::<(), std::io::Error>(())
//! ```

#[macro_use]
mod macros;

mod config;
mod decoration;
mod levels;
mod logger;
mod tracing_bridge;

pub use config::LoggerConfig;
pub use decoration::{Decoration, DecorationBuilder, DecorationConfig, Hook, Producer};
pub use levels::{ParseSeverityLevelError, SeverityLevel};
pub use logger::LeveledLogger;
pub use logging_sink::{Channel, Sink};
pub use tracing_bridge::{SINK_TARGET, TRACING_TARGET, TracingSink};

#[cfg(feature = "subscriber")]
pub use tracing_bridge::{LeveledLayer, SharedLogger, init_tracing, try_init_tracing};
