//! Installs the leveled layer as the process-wide tracing subscriber.
//!
//! Kept in its own test binary because a global subscriber can only be set once.

#![cfg(feature = "subscriber")]

use leveled_logger::{DecorationConfig, LeveledLogger, RecordingSink, init_tracing, try_init_tracing};

/// Verifies tracing macros are filtered and decorated by the shared logger.
#[test]
fn tracing_macros_flow_through_leveled_logger() {
    let decoration = DecorationConfig::builder()
        .prefix(|| "daemon".to_owned())
        .left_separator(":")
        .build();
    let shared = init_tracing(LeveledLogger::with_decoration(
        "info",
        decoration,
        RecordingSink::new(),
    ));

    tracing::error!(code = 23, "transfer aborted");
    tracing::debug!("not at info");
    shared.lock().expect("lock").set_level_verbose();
    tracing::debug!("now visible");
    tracing::trace!("still hidden");

    {
        let logger = shared.lock().expect("lock");
        assert_eq!(
            logger.sink().rendered(),
            [
                "daemon : [ERROR] transfer aborted code=23",
                "daemon : [VERBOSE] now visible",
            ]
        );
    }

    let second = try_init_tracing(LeveledLogger::new("debug", RecordingSink::new()));
    assert!(second.is_err());
}
