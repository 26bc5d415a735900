use std::fmt;
use std::io;

use super::Sink;
use crate::channel::Channel;

/// A single call captured by a [`RecordingSink`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordedLine {
    /// Channel the line was written to.
    pub channel: Channel,
    /// Every part, stringified in order.
    pub parts: Vec<String>,
}

impl RecordedLine {
    /// Renders the line the way [`WriterSink`](crate::WriterSink) would, without the newline.
    #[must_use]
    pub fn render(&self) -> String {
        let end = self
            .parts
            .iter()
            .rposition(|part| !part.is_empty())
            .map_or(0, |last| last + 1);
        self.parts[..end].join(" ")
    }
}

/// In-memory sink that keeps every line it receives.
///
/// Useful as a test double: hand it to a logger, then inspect which channel
/// each line landed on and which parts it was made of.
///
/// ```
/// use logging_sink::{Channel, RecordingSink, Sink};
///
/// let mut sink = RecordingSink::new();
/// sink.write_parts(Channel::Error, &[&"[ERROR]", &"boom", &""])?;
///
/// assert_eq!(sink.lines()[0].channel, Channel::Error);
/// assert_eq!(sink.lines()[0].parts, ["[ERROR]", "boom", ""]);
/// assert_eq!(sink.rendered(), ["[ERROR] boom"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    lines: Vec<RecordedLine>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Returns every recorded line in write order.
    #[must_use]
    pub fn lines(&self) -> &[RecordedLine] {
        &self.lines
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders every recorded line.
    #[must_use]
    pub fn rendered(&self) -> Vec<String> {
        self.lines.iter().map(RecordedLine::render).collect()
    }

    /// Iterates over the lines written to `channel`.
    pub fn on_channel(&self, channel: Channel) -> impl Iterator<Item = &RecordedLine> + '_ {
        self.lines.iter().filter(move |line| line.channel == channel)
    }

    /// Removes and returns every recorded line.
    pub fn take(&mut self) -> Vec<RecordedLine> {
        std::mem::take(&mut self.lines)
    }
}

impl Sink for RecordingSink {
    fn write_parts(&mut self, channel: Channel, parts: &[&dyn fmt::Display]) -> io::Result<()> {
        self.lines.push(RecordedLine {
            channel,
            parts: parts.iter().map(ToString::to_string).collect(),
        });
        Ok(())
    }
}
