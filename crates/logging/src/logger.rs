//! crates/logging/src/logger.rs
//! The leveled logger: threshold management and per-severity emission.

use std::fmt;
use std::io;

use logging_sink::Sink;

use crate::decoration::DecorationConfig;
use crate::levels::{ParseSeverityLevelError, SeverityLevel};
use crate::tracing_bridge::LEVEL_TARGET;

/// Filters calls by severity and forwards decorated lines to a [`Sink`].
///
/// The logger owns its threshold, its [`DecorationConfig`], and its sink.
/// Level names are accepted case-insensitively; anything outside the
/// vocabulary is coerced to `info` instead of being rejected.
///
/// Severity methods take the message items as a slice of [`fmt::Display`]
/// values. The [`log_info!`](crate::log_info) family of macros builds that
/// slice from a plain argument list.
///
/// # Examples
///
/// ```
/// use logging::{DecorationConfig, LeveledLogger};
/// use logging_sink::RecordingSink;
///
/// let decoration = DecorationConfig::builder()
///     .prefix(|| "APP".to_owned())
///     .left_separator("-")
///     .build();
/// let mut logger = LeveledLogger::with_decoration("info", decoration, RecordingSink::new());
///
/// logger.info(&[&"hello"])?;
/// logger.debug(&[&"filtered out"])?;
///
/// assert_eq!(logger.sink().rendered(), ["APP - [INFO] hello"]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LeveledLogger<S> {
    current_level: SeverityLevel,
    min_level: SeverityLevel,
    max_level: SeverityLevel,
    decoration: DecorationConfig,
    sink: S,
}

impl<S> LeveledLogger<S> {
    /// Creates an undecorated logger at the level called `level_name`.
    #[must_use]
    pub fn new(level_name: &str, sink: S) -> Self {
        Self::with_decoration(level_name, DecorationConfig::default(), sink)
    }

    /// Creates a logger at the level called `level_name` with the given decoration.
    ///
    /// Unknown level names produce an `info` logger.
    #[must_use]
    pub fn with_decoration(level_name: &str, decoration: DecorationConfig, sink: S) -> Self {
        Self::with_level(resolve_level_name(level_name), decoration, sink)
    }

    /// Creates a logger from an already typed level.
    #[must_use]
    pub fn with_level(level: SeverityLevel, decoration: DecorationConfig, sink: S) -> Self {
        let mut logger = Self {
            current_level: SeverityLevel::Info,
            min_level: SeverityLevel::MIN,
            max_level: SeverityLevel::MAX,
            decoration,
            sink,
        };
        logger.set_level(level);
        logger
    }

    /// Sets the threshold by name. Unknown names select `info`.
    pub fn set_level_name(&mut self, level_name: &str) -> &mut Self {
        self.set_level(resolve_level_name(level_name))
    }

    /// Sets the threshold. Levels outside the logger's bounds select `info`.
    pub fn set_level(&mut self, level: SeverityLevel) -> &mut Self {
        let level = if (self.min_level..=self.max_level).contains(&level) {
            level
        } else {
            SeverityLevel::Info
        };
        tracing::trace!(
            target: LEVEL_TARGET,
            from = %self.current_level,
            to = %level,
            "severity threshold changed"
        );
        self.current_level = level;
        self
    }

    /// Returns the active threshold.
    #[must_use]
    pub const fn level(&self) -> SeverityLevel {
        self.current_level
    }

    /// Returns the canonical name of the active threshold.
    #[must_use]
    pub const fn level_name(&self) -> &'static str {
        self.current_level.name()
    }

    /// Silences every severity method until the level is set again.
    pub fn disable_logging(&mut self) -> &mut Self {
        self.set_level(SeverityLevel::None)
    }

    /// Same as [`disable_logging`](Self::disable_logging).
    pub fn set_level_none(&mut self) -> &mut Self {
        self.set_level(SeverityLevel::None)
    }

    /// Sets the threshold to **info**.
    ///
    /// This has always selected `info` rather than `error`, and callers rely
    /// on it. Use `set_level(SeverityLevel::Error)` for an errors-only logger.
    pub fn set_level_error(&mut self) -> &mut Self {
        // TODO: confirm with product owners whether this should select `error`.
        self.set_level(SeverityLevel::Info)
    }

    /// Sets the threshold to `warning`.
    pub fn set_level_warning(&mut self) -> &mut Self {
        self.set_level(SeverityLevel::Warning)
    }

    /// Sets the threshold to `info`.
    pub fn set_level_info(&mut self) -> &mut Self {
        self.set_level(SeverityLevel::Info)
    }

    /// Sets the threshold to `verbose`.
    pub fn set_level_verbose(&mut self) -> &mut Self {
        self.set_level(SeverityLevel::Verbose)
    }

    /// Sets the threshold to `debug`.
    pub fn set_level_debug(&mut self) -> &mut Self {
        self.set_level(SeverityLevel::Debug)
    }

    /// Reports whether a message of `severity` would be emitted right now.
    #[must_use]
    pub const fn is_enabled(&self, severity: SeverityLevel) -> bool {
        self.current_level.allows(severity)
    }

    /// Borrows the decoration configuration.
    #[must_use]
    pub const fn decoration(&self) -> &DecorationConfig {
        &self.decoration
    }

    /// Borrows the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the logger and returns its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S> LeveledLogger<S>
where
    S: Sink,
{
    /// Emits `items` at `severity` if the threshold allows it.
    ///
    /// An empty `items` slice is a no-op, as is a `None` severity. Otherwise
    /// the sink receives `[left, tag, items.., right]` on the severity's
    /// channel, with `left` left out when empty. Sink failures are returned
    /// unchanged; the `after_logging` hook only runs after a successful write.
    pub fn log(&mut self, severity: SeverityLevel, items: &[&dyn fmt::Display]) -> io::Result<()> {
        if items.is_empty() || !self.is_enabled(severity) {
            return Ok(());
        }
        let Some(channel) = severity.channel() else {
            return Ok(());
        };

        let decoration = self.decoration.decorate(severity);
        let mut parts: Vec<&dyn fmt::Display> = Vec::with_capacity(items.len() + 3);
        if !decoration.left.is_empty() {
            parts.push(&decoration.left);
        }
        parts.push(&decoration.tag);
        parts.extend_from_slice(items);
        parts.push(&decoration.right);

        self.decoration.before_logging(&parts);
        self.sink.write_parts(channel, &parts)?;
        self.decoration.after_logging(&parts);
        Ok(())
    }

    /// Emits on the error channel when the threshold is `error` or above.
    pub fn error(&mut self, items: &[&dyn fmt::Display]) -> io::Result<()> {
        self.log(SeverityLevel::Error, items)
    }

    /// Emits on the warn channel when the threshold is `warning` or above.
    pub fn warning(&mut self, items: &[&dyn fmt::Display]) -> io::Result<()> {
        self.log(SeverityLevel::Warning, items)
    }

    /// Emits on the info channel when the threshold is `info` or above.
    pub fn info(&mut self, items: &[&dyn fmt::Display]) -> io::Result<()> {
        self.log(SeverityLevel::Info, items)
    }

    /// Emits on the info channel when the threshold is `verbose` or above.
    pub fn verbose(&mut self, items: &[&dyn fmt::Display]) -> io::Result<()> {
        self.log(SeverityLevel::Verbose, items)
    }

    /// Emits on the debug channel when the threshold is `debug`.
    pub fn debug(&mut self, items: &[&dyn fmt::Display]) -> io::Result<()> {
        self.log(SeverityLevel::Debug, items)
    }

    /// Flushes the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl<S> fmt::Debug for LeveledLogger<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledLogger")
            .field("level", &self.current_level)
            .field("decoration", &self.decoration)
            .field("sink", &self.sink)
            .finish()
    }
}

fn resolve_level_name(level_name: &str) -> SeverityLevel {
    level_name
        .parse()
        .unwrap_or_else(|error: ParseSeverityLevelError| {
            tracing::debug!(
                target: LEVEL_TARGET,
                requested = error.invalid_name(),
                "unknown severity level name, using info"
            );
            SeverityLevel::Info
        })
}
