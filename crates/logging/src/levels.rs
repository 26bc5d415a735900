//! crates/logging/src/levels.rs
//! Severity levels and the level name vocabulary.

use std::fmt;
use std::str::FromStr;

use logging_sink::Channel;
use thiserror::Error;

/// Ordered severity threshold.
///
/// Higher numeric values are more verbose. [`SeverityLevel::None`] disables
/// all output when used as a threshold and is never emitted as a message
/// severity.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum SeverityLevel {
    /// Logging disabled.
    None = 0,
    /// Errors only.
    Error = 1,
    /// Warnings and errors.
    Warning = 2,
    /// Informational messages and above.
    #[default]
    Info = 3,
    /// Verbose progress messages and above.
    Verbose = 4,
    /// Everything, including debug output.
    Debug = 5,
}

/// Error returned when a severity level name is not part of the vocabulary.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity level name: \"{invalid_name}\"")]
pub struct ParseSeverityLevelError {
    invalid_name: String,
}

impl ParseSeverityLevelError {
    /// Creates a parse error that records the rejected name.
    #[must_use]
    pub fn new(invalid_name: &str) -> Self {
        Self {
            invalid_name: invalid_name.to_owned(),
        }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn invalid_name(&self) -> &str {
        &self.invalid_name
    }
}

impl SeverityLevel {
    /// Every level in ascending numeric order.
    pub const ALL: [SeverityLevel; 6] = [
        SeverityLevel::None,
        SeverityLevel::Error,
        SeverityLevel::Warning,
        SeverityLevel::Info,
        SeverityLevel::Verbose,
        SeverityLevel::Debug,
    ];

    /// Lowest level a logger threshold may take.
    pub const MIN: SeverityLevel = SeverityLevel::None;

    /// Highest level a logger threshold may take.
    pub const MAX: SeverityLevel = SeverityLevel::Debug;

    /// Returns the numeric value of the level.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Looks a level up by its numeric value.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Verbose),
            5 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
        }
    }

    /// Returns the uppercase name used inside the `[TAG]` of an emitted line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
        }
    }

    /// Returns the sink channel messages of this severity are written to.
    ///
    /// Verbose shares the info channel. [`SeverityLevel::None`] has no channel.
    #[must_use]
    pub const fn channel(self) -> Option<Channel> {
        match self {
            Self::None => None,
            Self::Error => Some(Channel::Error),
            Self::Warning => Some(Channel::Warn),
            Self::Info | Self::Verbose => Some(Channel::Info),
            Self::Debug => Some(Channel::Debug),
        }
    }

    /// Reports whether a message of `severity` passes this threshold.
    ///
    /// A threshold of `None` lets nothing through, and a `None` message never
    /// passes.
    #[must_use]
    pub const fn allows(self, severity: SeverityLevel) -> bool {
        !matches!(self, Self::None)
            && !matches!(severity, Self::None)
            && severity.as_u8() <= self.as_u8()
    }

    /// Parses a level name, falling back to [`SeverityLevel::Info`] for anything unknown.
    ///
    /// ```
    /// use logging::SeverityLevel;
    ///
    /// assert_eq!(SeverityLevel::parse_lenient("DEBUG"), SeverityLevel::Debug);
    /// assert_eq!(SeverityLevel::parse_lenient("bogus"), SeverityLevel::Info);
    /// ```
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeverityLevel {
    type Err = ParseSeverityLevelError;

    /// Matches `name` case-insensitively against the level vocabulary.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseSeverityLevelError::new(name))
    }
}

impl From<SeverityLevel> for u8 {
    fn from(level: SeverityLevel) -> Self {
        level.as_u8()
    }
}

#[cfg(test)]
mod tests;
