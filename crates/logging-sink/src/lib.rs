#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` defines the output capability the leveled logger writes
//! into. A sink exposes four [`Channel`]s (error, warn, info, debug), each
//! accepting an ordered sequence of printable parts that end up space-joined
//! on a single line.
//!
//! # Design
//!
//! The [`Sink`] trait is the seam. [`WriterSink`] is the console-shaped
//! implementation: it owns an output writer for the info and debug channels and
//! an error writer for the error and warn channels, and it renders every line
//! into a reused scratch buffer before handing it to the writer in one call.
//! [`RecordingSink`] keeps every call in memory so callers can assert on what
//! would have been printed.
//!
//! # Invariants
//!
//! - Parts are joined by exactly one ASCII space.
//! - Trailing parts that render empty are dropped with their separators, so
//!   an empty trailing part never leaves a stray space. Whitespace inside the
//!   parts is written as given.
//! - `LineMode::WithNewline` terminates every line with `\n`.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{Channel, Sink, WriterSink};
//!
//! let mut sink = WriterSink::new(Vec::new(), Vec::new());
//! sink.write_parts(Channel::Info, &[&"[INFO]", &"ready", &42])?;
//! sink.write_parts(Channel::Warn, &[&"[WARNING]", &"disk", &""])?;
//!
//! let (out, err) = sink.into_writers();
//! assert_eq!(out, b"[INFO] ready 42\n");
//! assert_eq!(err, b"[WARNING] disk\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod channel;
mod line_mode;
mod sink;

pub use channel::Channel;
pub use line_mode::LineMode;
pub use sink::{ConsoleSink, RecordedLine, RecordingSink, Sink, WriterSink, render_parts};
