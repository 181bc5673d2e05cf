//! Property-based tests for lm_log using proptest

use lm_log::backends::{Backend, MemoryTransport};
use lm_log::prelude::*;
use proptest::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Error),
        Just(Severity::Warn),
        Just(Severity::Info),
        Just(Severity::Debug),
    ]
}

fn any_level_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("ERR"), Just("WARN"), Just("INFO"), Just("DEBUG")]
}

/// Numeric rank of a severity, loudest first
fn rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 0,
        Severity::Warn => 1,
        Severity::Info => 2,
        Severity::Debug => 3,
    }
}

fn rank_of_name(name: &str) -> u8 {
    match name.to_ascii_uppercase().as_str() {
        "ERR" => 0,
        "WARN" => 1,
        "INFO" => 2,
        _ => 3,
    }
}

// ============================================================================
// Level mask
// ============================================================================

proptest! {
    /// A level name enables exactly itself and everything louder
    #[test]
    fn test_level_name_is_cumulative(name in any_level_name(), severity in any_severity(), lower in any::<bool>()) {
        let input = if lower { name.to_lowercase() } else { name.to_string() };
        let mask = LevelMask::from_name(&input).expect("known level");

        prop_assert_eq!(mask.enables(severity), rank(severity) <= rank_of_name(name));
    }

    /// Unknown names never change the mask
    #[test]
    fn test_unknown_names_leave_mask(name in "[a-zA-Z]{1,8}", start in any_level_name()) {
        prop_assume!(LevelMask::from_name(&name).is_none());

        let logger = Logger::builder().level(start).expect("known level").build();
        let before = logger.level_mask();
        let err = logger.set_level(&name).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgs);
        prop_assert_eq!(logger.level_mask(), before);
    }

    /// Masked severities never reach the backend
    #[test]
    fn test_masked_events_are_not_written(
        name in any_level_name(),
        events in proptest::collection::vec(any_severity(), 0..40)
    ) {
        let capture = MemoryTransport::new();
        let logger = Logger::builder()
            .level(name)
            .expect("known level")
            .backend(Backend::custom(capture.clone()))
            .build();

        for severity in &events {
            logger.log(None, None, *severity, format_args!("event"));
        }

        let expected = events.iter().filter(|s| logger.enabled(**s)).count();
        prop_assert_eq!(capture.len(), expected);
        prop_assert_eq!(logger.metrics().filtered_count() as usize, events.len() - expected);
    }
}

// ============================================================================
// Line composition
// ============================================================================

proptest! {
    /// Every emitted line is the tag, the message and exactly one newline
    #[test]
    fn test_line_layout(severity in any_severity(), message in "[^\n]{0,64}") {
        let capture = MemoryTransport::new();
        let logger = Logger::builder()
            .levels(LevelMask::all())
            .show_location(false)
            .backend(Backend::custom(capture.clone()))
            .build();

        logger.log(None, None, severity, format_args!("{}", message));

        let records = capture.records();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(&records[0].message, &format!("{} {}\n", severity.tag(), message));
        prop_assert_eq!(records[0].priority, severity.priority());
    }
}

// ============================================================================
// Journal location parsing
// ============================================================================

#[cfg(feature = "journal")]
mod journal_location {
    use lm_log::backends::journal::split_location;
    use proptest::prelude::*;

    proptest! {
        /// `file:line` tokens split at the first colon
        #[test]
        fn test_split_location_with_colon(file in "[a-z/_.]{0,20}", line in "[0-9:]{0,8}") {
            let token = format!("{}:{}", file, line);
            prop_assert_eq!(split_location(&token), (file.as_str(), line.as_str()));
        }

        /// Tokens without a colon keep the whole token and report line 0
        #[test]
        fn test_split_location_without_colon(token in "[^:]{0,30}") {
            prop_assert_eq!(split_location(&token), (token.as_str(), "0"));
        }
    }
}
