use std::fmt;
use std::io;

use crate::line_mode::LineMode;

mod constructors;
mod writing;

/// Streaming sink that renders lines into a pair of [`std::io::Write`] targets.
///
/// The info and debug channels go to the output writer, error and warn go to
/// the error writer. Each line is rendered into a reused scratch [`String`] and
/// written with a single `write_all`, so concurrent writers on the same stream
/// never interleave inside a line. The configured [`LineMode`] decides whether
/// a newline follows.
///
/// # Examples
///
/// Collect output into in-memory buffers:
///
/// ```
/// use logging_sink::{Channel, Sink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new(), Vec::new());
/// sink.write_parts(Channel::Error, &[&"[ERROR]", &"partial transfer"])?;
///
/// assert_eq!(sink.err_ref(), b"[ERROR] partial transfer\n");
/// assert!(sink.out_ref().is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Render without a trailing newline:
///
/// ```
/// use logging_sink::{Channel, LineMode, Sink, WriterSink};
///
/// let mut sink = WriterSink::with_line_mode(Vec::new(), Vec::new(), LineMode::WithoutNewline);
/// sink.write_parts(Channel::Info, &[&"[INFO]", &"ready"])?;
///
/// let (out, _) = sink.into_writers();
/// assert_eq!(out, b"[INFO] ready".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct WriterSink<O, E> {
    out: O,
    err: E,
    scratch: String,
    line_mode: LineMode,
}

/// The process console: standard output for info/debug, standard error for error/warn.
pub type ConsoleSink = WriterSink<io::Stdout, io::Stderr>;

impl<O, E> fmt::Debug for WriterSink<O, E>
where
    O: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("out", &self.out)
            .field("err", &self.err)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
