//! crates/logging-sink/src/channel.rs
//! Output channels exposed by a sink.

use std::fmt;

/// One of the four console-like streams a [`Sink`](crate::Sink) accepts lines on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Channel {
    /// Error output (`console.error` equivalent).
    Error,
    /// Warning output (`console.warn` equivalent).
    Warn,
    /// Informational output (`console.info` equivalent).
    Info,
    /// Debug output (`console.debug` equivalent).
    Debug,
}

impl Channel {
    /// Every channel, ordered from most to least severe.
    pub const ALL: [Channel; 4] = [
        Channel::Error,
        Channel::Warn,
        Channel::Info,
        Channel::Debug,
    ];

    /// Returns the lowercase channel name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Error => "error",
            Channel::Warn => "warn",
            Channel::Info => "info",
            Channel::Debug => "debug",
        }
    }

    /// Reports whether the channel belongs on the diagnostic (stderr) stream.
    ///
    /// Error and warn lines go to the diagnostic stream, info and debug lines
    /// go to regular output, the same split a JavaScript console makes.
    #[must_use]
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Channel::Error | Channel::Warn)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
