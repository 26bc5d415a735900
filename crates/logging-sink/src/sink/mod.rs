//! crates/logging-sink/src/sink/mod.rs
//! The sink capability and its implementations.

use std::fmt::{self, Write as _};
use std::io;

use crate::channel::Channel;

mod recording;
mod writer_sink;

pub use recording::{RecordedLine, RecordingSink};
pub use writer_sink::{ConsoleSink, WriterSink};

/// Destination for the lines produced by a leveled logger.
///
/// A sink receives the final, already decorated sequence of parts together
/// with the [`Channel`] they belong to. Stringifying and joining the parts is
/// the sink's job; callers never pre-render them.
pub trait Sink {
    /// Writes `parts` as one line on `channel`.
    fn write_parts(&mut self, channel: Channel, parts: &[&dyn fmt::Display]) -> io::Result<()>;

    /// Flushes buffered output. Sinks without buffering keep the default no-op.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S> Sink for &mut S
where
    S: Sink + ?Sized,
{
    fn write_parts(&mut self, channel: Channel, parts: &[&dyn fmt::Display]) -> io::Result<()> {
        (**self).write_parts(channel, parts)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    fn write_parts(&mut self, channel: Channel, parts: &[&dyn fmt::Display]) -> io::Result<()> {
        (**self).write_parts(channel, parts)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Renders `parts` into `buffer`, replacing its previous contents.
///
/// Parts are joined by a single space. Trailing parts that render empty are
/// dropped together with their separators; whitespace produced by the parts
/// themselves is kept. The buffer keeps its allocation so callers can reuse it
/// across lines.
///
/// # Examples
///
/// ```
/// use logging_sink::render_parts;
///
/// let mut line = String::new();
/// render_parts(&mut line, &[&"[INFO]", &"hello", &""])?;
/// assert_eq!(line, "[INFO] hello");
/// # Ok::<(), std::fmt::Error>(())
/// ```
pub fn render_parts(buffer: &mut String, parts: &[&dyn fmt::Display]) -> fmt::Result {
    buffer.clear();
    let mut content_end = 0;
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            buffer.push(' ');
        }
        let start = buffer.len();
        write!(buffer, "{part}")?;
        if buffer.len() > start {
            content_end = buffer.len();
        }
    }
    buffer.truncate(content_end);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_with_single_spaces() {
        let mut line = String::new();
        render_parts(&mut line, &[&"a", &1, &'c']).expect("render succeeds");
        assert_eq!(line, "a 1 c");
    }

    #[test]
    fn render_drops_trailing_empty_part() {
        let mut line = String::new();
        render_parts(&mut line, &[&"[WARNING]", &"x", &"y", &""]).expect("render succeeds");
        assert_eq!(line, "[WARNING] x y");
    }

    #[test]
    fn render_keeps_whitespace_of_last_item() {
        let mut line = String::new();
        render_parts(&mut line, &[&"[INFO]", &"table:\n", &"  ", &""]).expect("render succeeds");
        assert_eq!(line, "[INFO] table:\n   ");
    }

    #[test]
    fn render_of_only_empty_parts_is_empty() {
        let mut line = String::from("stale");
        render_parts(&mut line, &[&"", &""]).expect("render succeeds");
        assert!(line.is_empty());
    }

    #[test]
    fn render_keeps_inner_empty_parts() {
        let mut line = String::new();
        render_parts(&mut line, &[&"a", &"", &"b"]).expect("render succeeds");
        assert_eq!(line, "a  b");
    }

    #[test]
    fn render_replaces_previous_contents() {
        let mut line = String::from("stale text");
        render_parts(&mut line, &[&"fresh"]).expect("render succeeds");
        assert_eq!(line, "fresh");
    }

    #[test]
    fn mutable_reference_forwards_to_inner_sink() {
        fn write_through<S: Sink>(mut sink: S) {
            sink.write_parts(Channel::Debug, &[&"[DEBUG]", &"x"])
                .expect("write succeeds");
        }

        let mut recording = RecordingSink::new();
        write_through(&mut recording);
        assert_eq!(recording.len(), 1);
    }

    #[test]
    fn boxed_sink_forwards_to_inner_sink() {
        let mut boxed: Box<dyn Sink> = Box::new(RecordingSink::new());
        boxed
            .write_parts(Channel::Info, &[&"[INFO]", &"boxed"])
            .expect("write succeeds");
        boxed.flush().expect("flush succeeds");
    }
}
