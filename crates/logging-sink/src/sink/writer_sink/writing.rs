use std::fmt;
use std::io::{self, Write};

use super::WriterSink;
use crate::channel::Channel;
use crate::sink::{Sink, render_parts};

impl<O, E> Sink for WriterSink<O, E>
where
    O: Write,
    E: Write,
{
    fn write_parts(&mut self, channel: Channel, parts: &[&dyn fmt::Display]) -> io::Result<()> {
        render_parts(&mut self.scratch, parts).map_err(io::Error::other)?;
        if self.line_mode.append_newline() {
            self.scratch.push('\n');
        }

        let writer: &mut dyn Write = if channel.is_diagnostic() {
            &mut self.err
        } else {
            &mut self.out
        };
        writer.write_all(self.scratch.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
