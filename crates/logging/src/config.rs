//! crates/logging/src/config.rs
//! Plain-data logger configuration that host applications can deserialize.

use crate::decoration::DecorationConfig;
use crate::levels::SeverityLevel;
use crate::logger::LeveledLogger;

/// Serializable description of a [`LeveledLogger`].
///
/// Prefix and suffix are static text here; they become constant producers when
/// the configuration is turned into a [`DecorationConfig`]. Every field has a
/// default, so a partial document is accepted.
///
/// ```
/// use logging::LoggerConfig;
/// use logging_sink::RecordingSink;
///
/// let config = LoggerConfig {
///     level: "VERBOSE".to_owned(),
///     prefix: Some("worker-1".to_owned()),
///     left_separator: Some(">".to_owned()),
///     ..LoggerConfig::default()
/// };
///
/// let mut logger = config.build(RecordingSink::new());
/// logger.verbose(&[&"ready"])?;
/// assert_eq!(logger.sink().rendered(), ["worker-1 > [VERBOSE] ready"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Level name, matched case-insensitively. Unknown names mean `info`.
    pub level: String,
    /// Static prefix text.
    pub prefix: Option<String>,
    /// Static suffix text.
    pub suffix: Option<String>,
    /// Separator between prefix and tag.
    pub left_separator: Option<String>,
    /// Separator between message and suffix.
    pub right_separator: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: SeverityLevel::Info.name().to_owned(),
            prefix: None,
            suffix: None,
            left_separator: None,
            right_separator: None,
        }
    }
}

impl LoggerConfig {
    /// Returns a default configuration at the given level name.
    #[must_use]
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }

    /// Resolves the configured level name, using `info` for unknown names.
    #[must_use]
    pub fn severity(&self) -> SeverityLevel {
        SeverityLevel::parse_lenient(&self.level)
    }

    /// Converts the decoration fields into a [`DecorationConfig`].
    #[must_use]
    pub fn into_decoration(self) -> DecorationConfig {
        let mut builder = DecorationConfig::builder();
        if let Some(prefix) = self.prefix {
            builder = builder.prefix(move || prefix.clone());
        }
        if let Some(suffix) = self.suffix {
            builder = builder.suffix(move || suffix.clone());
        }
        if let Some(separator) = self.left_separator {
            builder = builder.left_separator(separator);
        }
        if let Some(separator) = self.right_separator {
            builder = builder.right_separator(separator);
        }
        builder.build()
    }

    /// Builds a logger writing to `sink`.
    #[must_use]
    pub fn build<S>(self, sink: S) -> LeveledLogger<S> {
        let level = self.level.clone();
        LeveledLogger::with_decoration(&level, self.into_decoration(), sink)
    }
}
