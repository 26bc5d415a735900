use std::io;

use super::{ConsoleSink, WriterSink};
use crate::line_mode::LineMode;

impl<O, E> WriterSink<O, E> {
    /// Creates a sink that appends a newline after each rendered line.
    #[must_use]
    pub fn new(out: O, err: E) -> Self {
        Self::with_line_mode(out, err, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(out: O, err: E, line_mode: LineMode) -> Self {
        Self::with_parts(out, err, String::new(), line_mode)
    }

    /// Creates a sink from an explicit scratch buffer and [`LineMode`].
    ///
    /// Passing a scratch buffer that already owns capacity lets callers recycle
    /// the allocation from a previous sink obtained through
    /// [`into_parts`](Self::into_parts).
    #[must_use]
    pub fn with_parts(out: O, err: E, scratch: String, line_mode: LineMode) -> Self {
        Self {
            out,
            err,
            scratch,
            line_mode,
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the output writer (info and debug channels).
    #[must_use]
    pub fn out_ref(&self) -> &O {
        &self.out
    }

    /// Borrows the error writer (error and warn channels).
    #[must_use]
    pub fn err_ref(&self) -> &E {
        &self.err
    }

    /// Mutably borrows the output writer.
    pub fn out_mut(&mut self) -> &mut O {
        &mut self.out
    }

    /// Mutably borrows the error writer.
    pub fn err_mut(&mut self) -> &mut E {
        &mut self.err
    }

    /// Consumes the sink and returns the output and error writers.
    #[must_use]
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Consumes the sink and returns both writers, the scratch buffer, and the line mode.
    #[must_use]
    pub fn into_parts(self) -> (O, E, String, LineMode) {
        (self.out, self.err, self.scratch, self.line_mode)
    }
}

impl ConsoleSink {
    /// Creates a sink bound to the process's standard output and standard error.
    #[must_use]
    pub fn console() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O, E> Default for WriterSink<O, E>
where
    O: Default,
    E: Default,
{
    fn default() -> Self {
        Self::new(O::default(), E::default())
    }
}
