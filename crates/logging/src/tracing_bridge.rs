//! crates/logging/src/tracing_bridge.rs
//! Bridges between the tracing crate and the leveled logger.
//!
//! Two directions are supported:
//!
//! - [`TracingSink`] is a [`Sink`] that turns every rendered line into a
//!   `tracing` event, so a leveled logger can feed an existing subscriber.
//! - `LeveledLayer` (feature `subscriber`) is a tracing-subscriber layer that
//!   routes `tracing` events into a shared [`LeveledLogger`](crate::LeveledLogger), applying its
//!   threshold and decoration to the standard `error!`..`trace!` macros.
//!
//! Events emitted by this crate itself use targets below [`TRACING_TARGET`];
//! the layer ignores them so the two bridges can be combined without feedback.

use std::fmt;
use std::io;

use logging_sink::{Channel, Sink, render_parts};

/// Root target of every event this crate emits.
pub const TRACING_TARGET: &str = "leveled_logger";

/// Target of the diagnostics emitted on level changes and name coercion.
pub(crate) const LEVEL_TARGET: &str = "leveled_logger::level";

/// Target of the events produced by [`TracingSink`].
pub const SINK_TARGET: &str = "leveled_logger::sink";

/// A [`Sink`] that forwards each line to `tracing` at the matching level.
///
/// Error lines become `ERROR` events, warn lines `WARN`, info lines `INFO`,
/// and debug lines `DEBUG`, all under [`SINK_TARGET`].
#[derive(Clone, Debug, Default)]
pub struct TracingSink {
    scratch: String,
}

impl TracingSink {
    /// Creates a sink with an empty scratch buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scratch: String::new(),
        }
    }
}

impl Sink for TracingSink {
    fn write_parts(&mut self, channel: Channel, parts: &[&dyn fmt::Display]) -> io::Result<()> {
        render_parts(&mut self.scratch, parts).map_err(io::Error::other)?;
        let line = self.scratch.as_str();
        match channel {
            Channel::Error => tracing::error!(target: SINK_TARGET, "{line}"),
            Channel::Warn => tracing::warn!(target: SINK_TARGET, "{line}"),
            Channel::Info => tracing::info!(target: SINK_TARGET, "{line}"),
            Channel::Debug => tracing::debug!(target: SINK_TARGET, "{line}"),
        }
        Ok(())
    }
}

#[cfg(feature = "subscriber")]
pub use layer::{LeveledLayer, SharedLogger, init_tracing, try_init_tracing};

#[cfg(feature = "subscriber")]
mod layer {
    use std::cell::Cell;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use logging_sink::Sink;
    use tracing::{Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

    use super::TRACING_TARGET;
    use crate::levels::SeverityLevel;
    use crate::logger::LeveledLogger;

    /// A leveled logger shared between a [`LeveledLayer`] and the application.
    pub type SharedLogger<S> = Arc<Mutex<LeveledLogger<S>>>;

    /// A tracing layer that writes events through a [`LeveledLogger`].
    ///
    /// The event's `message` field becomes the first item, and every other
    /// field follows as a `name=value` item. Whether anything is written is
    /// decided by the logger's threshold, so changing the level through the
    /// shared handle takes effect on the next event.
    ///
    /// Events raised on the same thread while the layer is writing (from a
    /// prefix or suffix producer, a hook, or the sink) are dropped. A producer
    /// panic propagates to the event that triggered it and leaves the logger
    /// usable for later events.
    pub struct LeveledLayer<S> {
        logger: SharedLogger<S>,
    }

    impl<S> LeveledLayer<S> {
        /// Wraps `logger` in a new shared handle.
        #[must_use]
        pub fn new(logger: LeveledLogger<S>) -> Self {
            Self::from_shared(Arc::new(Mutex::new(logger)))
        }

        /// Uses an existing shared handle.
        #[must_use]
        pub const fn from_shared(logger: SharedLogger<S>) -> Self {
            Self { logger }
        }

        /// Returns another handle to the logger this layer writes through.
        #[must_use]
        pub fn shared(&self) -> SharedLogger<S> {
            Arc::clone(&self.logger)
        }

        /// Locks the logger, clearing the poison left by a panicking producer.
        ///
        /// `LeveledLogger::log` holds no partially updated state across the
        /// producer calls, so the logger behind a poisoned lock is intact.
        fn lock_logger(&self) -> MutexGuard<'_, LeveledLogger<S>> {
            self.logger.lock().unwrap_or_else(|poisoned| {
                self.logger.clear_poison();
                poisoned.into_inner()
            })
        }

        /// Maps a tracing level to the severity it is logged at.
        pub(crate) fn severity_for(level: &Level) -> SeverityLevel {
            match *level {
                Level::ERROR => SeverityLevel::Error,
                Level::WARN => SeverityLevel::Warning,
                Level::INFO => SeverityLevel::Info,
                Level::DEBUG => SeverityLevel::Verbose,
                _ => SeverityLevel::Debug,
            }
        }
    }

    impl<S, Sub> Layer<Sub> for LeveledLayer<S>
    where
        S: Sink + Send + 'static,
        Sub: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, Sub>) {
            let metadata = event.metadata();
            if metadata.target().starts_with(TRACING_TARGET) {
                return;
            }

            let Some(_writing) = WritingGuard::enter() else {
                return;
            };

            let severity = Self::severity_for(metadata.level());
            let mut logger = self.lock_logger();
            if !logger.is_enabled(severity) {
                return;
            }

            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);
            let mut items: Vec<&dyn fmt::Display> = Vec::with_capacity(visitor.fields.len() + 1);
            if let Some(message) = &visitor.message {
                items.push(message);
            }
            items.extend(visitor.fields.iter().map(|field| field as &dyn fmt::Display));

            // Layers cannot report failures; a broken sink loses the event.
            let _ = logger.log(severity, &items);
        }
    }

    thread_local! {
        static WRITING: Cell<bool> = const { Cell::new(false) };
    }

    /// Marks the current thread as writing through a layer until dropped.
    struct WritingGuard;

    impl WritingGuard {
        /// Returns `None` when the thread is already inside a layer write.
        fn enter() -> Option<Self> {
            WRITING.with(|writing| (!writing.replace(true)).then_some(Self))
        }
    }

    impl Drop for WritingGuard {
        fn drop(&mut self) {
            WRITING.with(|writing| writing.set(false));
        }
    }


    /// Visitor collecting the message and the remaining fields of an event.
    #[derive(Default)]
    struct EventVisitor {
        message: Option<String>,
        fields: Vec<String>,
    }

    impl tracing::field::Visit for EventVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.message = Some(format!("{value:?}"));
            } else {
                self.fields.push(format!("{}={value:?}", field.name()));
            }
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                self.message = Some(value.to_owned());
            } else {
                self.fields.push(format!("{}={value}", field.name()));
            }
        }
    }

    /// Installs a [`LeveledLayer`] as the global default subscriber.
    ///
    /// Returns the shared handle so the application can keep adjusting the
    /// logger's level.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been installed. Use
    /// [`try_init_tracing`] to handle that case.
    pub fn init_tracing<S>(logger: LeveledLogger<S>) -> SharedLogger<S>
    where
        S: Sink + Send + 'static,
    {
        let layer = LeveledLayer::new(logger);
        let shared = layer.shared();
        tracing_subscriber::registry().with(layer).init();
        shared
    }

    /// Installs a [`LeveledLayer`] as the global default subscriber, if none is set yet.
    pub fn try_init_tracing<S>(logger: LeveledLogger<S>) -> Result<SharedLogger<S>, TryInitError>
    where
        S: Sink + Send + 'static,
    {
        let layer = LeveledLayer::new(logger);
        let shared = layer.shared();
        tracing_subscriber::registry().with(layer).try_init()?;
        Ok(shared)
    }
}
