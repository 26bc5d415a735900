//! crates/logging/src/decoration.rs
//! Prefix, suffix, and tag decoration wrapped around every emitted line.

use std::fmt;

use crate::levels::SeverityLevel;

/// Zero-argument text producer evaluated on every emitted line.
pub type Producer = Box<dyn Fn() -> String + Send + Sync>;

/// Callback observing the final parts of a line around the sink write.
pub type Hook = Box<dyn Fn(&[&dyn fmt::Display]) + Send + Sync>;

/// Decoration applied by a [`LeveledLogger`](crate::LeveledLogger).
///
/// Missing producers are replaced by a no-op producing the empty string, and
/// missing separators default to the empty string. The configuration cannot
/// change once built.
///
/// # Examples
///
/// ```
/// use logging::{DecorationConfig, SeverityLevel};
///
/// let decoration = DecorationConfig::builder()
///     .prefix(|| "APP".to_owned())
///     .left_separator("-")
///     .build();
///
/// let parts = decoration.decorate(SeverityLevel::Info);
/// assert_eq!(parts.left, "APP -");
/// assert_eq!(parts.tag, "[INFO]");
/// assert_eq!(parts.right, "");
/// ```
pub struct DecorationConfig {
    prefix: Producer,
    suffix: Producer,
    left_separator: String,
    right_separator: String,
    before_logging: Option<Hook>,
    after_logging: Option<Hook>,
}

/// Strings computed for one emitted line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Decoration {
    /// Prefix and left separator, trimmed. Empty when there is no prefix.
    pub left: String,
    /// `[LEVEL]` tag.
    pub tag: String,
    /// Right separator and suffix, trimmed. Empty when there is no suffix.
    pub right: String,
}

fn empty_text() -> String {
    String::new()
}

impl DecorationConfig {
    /// Returns a configuration with no prefix, suffix, separators, or hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> DecorationBuilder {
        DecorationBuilder::default()
    }

    /// Separator placed between the prefix and the tag.
    #[must_use]
    pub fn left_separator(&self) -> &str {
        &self.left_separator
    }

    /// Separator placed between the message and the suffix.
    #[must_use]
    pub fn right_separator(&self) -> &str {
        &self.right_separator
    }

    /// Computes the decoration strings for one line at `level`.
    ///
    /// Both producers run on every call. A separator only shows up next to a
    /// non-empty prefix or suffix. A panicking producer unwinds through this
    /// method unchanged.
    #[must_use]
    pub fn decorate(&self, level: SeverityLevel) -> Decoration {
        let prefix = (self.prefix)();
        let suffix = (self.suffix)();
        let left_separator = if prefix.is_empty() {
            ""
        } else {
            self.left_separator.as_str()
        };
        let right_separator = if suffix.is_empty() {
            ""
        } else {
            self.right_separator.as_str()
        };

        Decoration {
            left: format!("{prefix} {left_separator}").trim().to_owned(),
            tag: format!("[{}]", level.label()),
            right: format!("{right_separator} {suffix}").trim().to_owned(),
        }
    }

    pub(crate) fn before_logging(&self, parts: &[&dyn fmt::Display]) {
        if let Some(hook) = &self.before_logging {
            hook(parts);
        }
    }

    pub(crate) fn after_logging(&self, parts: &[&dyn fmt::Display]) {
        if let Some(hook) = &self.after_logging {
            hook(parts);
        }
    }
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DecorationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecorationConfig")
            .field("left_separator", &self.left_separator)
            .field("right_separator", &self.right_separator)
            .field("before_logging", &self.before_logging.is_some())
            .field("after_logging", &self.after_logging.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`DecorationConfig`].
#[derive(Default)]
pub struct DecorationBuilder {
    prefix: Option<Producer>,
    suffix: Option<Producer>,
    left_separator: Option<String>,
    right_separator: Option<String>,
    before_logging: Option<Hook>,
    after_logging: Option<Hook>,
}

impl DecorationBuilder {
    /// Sets the producer whose output is printed before the tag.
    pub fn prefix<F>(mut self, prefix: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.prefix = Some(Box::new(prefix));
        self
    }

    /// Sets the producer whose output is printed after the message.
    pub fn suffix<F>(mut self, suffix: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.suffix = Some(Box::new(suffix));
        self
    }

    /// Sets the separator between prefix and tag. Ignored while the prefix is empty.
    pub fn left_separator(mut self, separator: impl Into<String>) -> Self {
        self.left_separator = Some(separator.into());
        self
    }

    /// Sets the separator between message and suffix. Ignored while the suffix is empty.
    pub fn right_separator(mut self, separator: impl Into<String>) -> Self {
        self.right_separator = Some(separator.into());
        self
    }

    /// Registers a hook that sees the final parts right before the sink write.
    pub fn before_logging<F>(mut self, hook: F) -> Self
    where
        F: Fn(&[&dyn fmt::Display]) + Send + Sync + 'static,
    {
        self.before_logging = Some(Box::new(hook));
        self
    }

    /// Registers a hook that sees the final parts after a successful sink write.
    pub fn after_logging<F>(mut self, hook: F) -> Self
    where
        F: Fn(&[&dyn fmt::Display]) + Send + Sync + 'static,
    {
        self.after_logging = Some(Box::new(hook));
        self
    }

    /// Finishes the configuration, filling in empty defaults.
    #[must_use]
    pub fn build(self) -> DecorationConfig {
        DecorationConfig {
            prefix: self.prefix.unwrap_or_else(|| Box::new(empty_text) as Producer),
            suffix: self.suffix.unwrap_or_else(|| Box::new(empty_text) as Producer),
            left_separator: self.left_separator.unwrap_or_default(),
            right_separator: self.right_separator.unwrap_or_default(),
            before_logging: self.before_logging,
            after_logging: self.after_logging,
        }
    }
}

impl fmt::Debug for DecorationBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecorationBuilder")
            .field("prefix", &self.prefix.is_some())
            .field("suffix", &self.suffix.is_some())
            .field("left_separator", &self.left_separator)
            .field("right_separator", &self.right_separator)
            .finish_non_exhaustive()
    }
}
