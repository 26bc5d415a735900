use super::*;
use proptest::prelude::*;

mod ordering {
    use super::*;

    #[test]
    fn numeric_values_follow_declaration_order() {
        let values: Vec<u8> = SeverityLevel::ALL.iter().map(|l| l.as_u8()).collect();
        assert_eq!(values, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn ord_matches_numeric_value() {
        assert!(SeverityLevel::None < SeverityLevel::Error);
        assert!(SeverityLevel::Error < SeverityLevel::Warning);
        assert!(SeverityLevel::Warning < SeverityLevel::Info);
        assert!(SeverityLevel::Info < SeverityLevel::Verbose);
        assert!(SeverityLevel::Verbose < SeverityLevel::Debug);
        assert_eq!(SeverityLevel::MIN, SeverityLevel::None);
        assert_eq!(SeverityLevel::MAX, SeverityLevel::Debug);
    }

    #[test]
    fn from_u8_inverts_as_u8() {
        for level in SeverityLevel::ALL {
            assert_eq!(SeverityLevel::from_u8(level.as_u8()), Some(level));
        }
        assert_eq!(SeverityLevel::from_u8(6), None);
        assert_eq!(SeverityLevel::from_u8(42), None);
    }

    #[test]
    fn default_is_info() {
        assert_eq!(SeverityLevel::default(), SeverityLevel::Info);
    }
}

mod names {
    use super::*;

    #[test]
    fn canonical_names_and_labels() {
        let names: Vec<_> = SeverityLevel::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(names, ["none", "error", "warning", "info", "verbose", "debug"]);

        for level in SeverityLevel::ALL {
            assert_eq!(level.label(), level.name().to_ascii_uppercase());
            assert_eq!(level.to_string(), level.name());
        }
    }

    #[test]
    fn from_str_ignores_case() {
        assert_eq!("Warning".parse::<SeverityLevel>(), Ok(SeverityLevel::Warning));
        assert_eq!("VERBOSE".parse::<SeverityLevel>(), Ok(SeverityLevel::Verbose));
        assert_eq!("none".parse::<SeverityLevel>(), Ok(SeverityLevel::None));
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let error = "warn".parse::<SeverityLevel>().expect_err("not in vocabulary");
        assert_eq!(error.invalid_name(), "warn");
        assert_eq!(error.to_string(), "unknown severity level name: \"warn\"");
    }

    #[test]
    fn from_str_does_not_trim() {
        assert!(" info".parse::<SeverityLevel>().is_err());
        assert!("".parse::<SeverityLevel>().is_err());
    }

    #[test]
    fn parse_lenient_falls_back_to_info() {
        assert_eq!(SeverityLevel::parse_lenient("bogus"), SeverityLevel::Info);
        assert_eq!(SeverityLevel::parse_lenient("42"), SeverityLevel::Info);
        assert_eq!(SeverityLevel::parse_lenient("dEbUg"), SeverityLevel::Debug);
    }
}

mod filtering {
    use super::*;

    #[test]
    fn none_threshold_allows_nothing() {
        for severity in SeverityLevel::ALL {
            assert!(!SeverityLevel::None.allows(severity));
        }
    }

    #[test]
    fn none_severity_is_never_allowed() {
        for threshold in SeverityLevel::ALL {
            assert!(!threshold.allows(SeverityLevel::None));
        }
    }

    #[test]
    fn verbose_threshold_excludes_debug() {
        let threshold = SeverityLevel::Verbose;
        assert!(threshold.allows(SeverityLevel::Error));
        assert!(threshold.allows(SeverityLevel::Warning));
        assert!(threshold.allows(SeverityLevel::Info));
        assert!(threshold.allows(SeverityLevel::Verbose));
        assert!(!threshold.allows(SeverityLevel::Debug));
    }

    #[test]
    fn channels_follow_console_methods() {
        assert_eq!(SeverityLevel::None.channel(), None);
        assert_eq!(SeverityLevel::Error.channel(), Some(Channel::Error));
        assert_eq!(SeverityLevel::Warning.channel(), Some(Channel::Warn));
        assert_eq!(SeverityLevel::Info.channel(), Some(Channel::Info));
        assert_eq!(SeverityLevel::Verbose.channel(), Some(Channel::Info));
        assert_eq!(SeverityLevel::Debug.channel(), Some(Channel::Debug));
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&SeverityLevel::Verbose).expect("serialize");
        assert_eq!(json, "\"verbose\"");

        let level: SeverityLevel = serde_json::from_str("\"warning\"").expect("deserialize");
        assert_eq!(level, SeverityLevel::Warning);
    }
}

fn any_level() -> impl Strategy<Value = SeverityLevel> {
    proptest::sample::select(SeverityLevel::ALL.to_vec())
}

proptest! {
    #[test]
    fn any_casing_of_a_known_name_parses(level in any_level(), mask in proptest::collection::vec(any::<bool>(), 7)) {
        let mixed: String = level
            .name()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(mixed.parse::<SeverityLevel>(), Ok(level));
    }

    #[test]
    fn unknown_names_fall_back_to_info(name in "[a-z]{0,12}") {
        prop_assume!(SeverityLevel::ALL.iter().all(|l| l.name() != name));
        prop_assert_eq!(SeverityLevel::parse_lenient(&name), SeverityLevel::Info);
    }

    #[test]
    fn allows_matches_numeric_comparison(threshold in any_level(), severity in any_level()) {
        let expected = threshold.as_u8() != 0 && severity.as_u8() != 0 && severity.as_u8() <= threshold.as_u8();
        prop_assert_eq!(threshold.allows(severity), expected);
    }
}
