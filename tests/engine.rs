use namegauge::config::EngineConfig;
use namegauge::engine::text::normalize;
use namegauge::engine::{NameGauge, evaluate_name, require_name};

mod normalization {
    use super::*;

    #[test]
    fn idempotent_over_assorted_inputs() {
        let samples = [
            "",
            "   ",
            "Zest",
            "  Lantern \t Ridge  ",
            "a  b   c",
            "Ωμέγα   Σήμα",
            "tabs\tand\nnewlines",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn evaluation_reports_the_normalized_name() {
        let report = evaluate_name("  Synergy   Solutions  Group  Labs ");
        assert_eq!(report.normalized_name, "Synergy Solutions Group Labs");
    }
}

mod signal_properties {
    use super::*;

    #[test]
    fn caution_count_stays_in_range_and_matches_flags() {
        let samples = [
            "",
            "Zest",
            "Zoox",
            "Lantern Ridge",
            "Quiet Labs",
            "Synergy Solutions Group Labs",
            "Qixel Jaqtz Studio Collective Hub",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        ];
        for s in samples {
            let signals = evaluate_name(s).signals;
            let expected = [signals.long, signals.spelling, signals.generic, signals.trendy]
                .iter()
                .filter(|flag| **flag)
                .count();
            assert_eq!(usize::from(signals.caution_count()), expected, "for {s:?}");
            assert!(signals.caution_count() <= 4);
        }
    }

    #[test]
    fn short_and_long_never_overlap_at_threshold_edges() {
        let samples = [
            "one two",                       // 2 words, short side
            "one two three",                 // 3 words, neither
            "one two three four",            // exactly 4 words
            "aaaaaaaaa bbbbbbbb",            // exactly 18 chars, 2 words
            "aaaaaaaaa bbbbbbbbb",           // 19 chars
            "aaaaaaaaaaaaa bbbbbbbbbbbbbb",  // exactly 28 chars
            "",                              // empty, short side
        ];
        for s in samples {
            let signals = evaluate_name(s).signals;
            assert!(
                !(signals.short && signals.long),
                "{s:?} classified as both short and long"
            );
        }
    }

    #[test]
    fn empty_input_yields_only_the_short_signal() {
        let signals = evaluate_name("   ").signals;
        assert!(signals.short);
        assert!(!signals.long && !signals.imagery && !signals.generic);
        assert!(!signals.spelling && !signals.trendy);
    }
}

mod judgments {
    use super::*;

    #[test]
    fn lantern_ridge_reads_as_imagery() {
        let report = evaluate_name("Lantern Ridge");
        assert!(report.signals.imagery);
        assert!(!report.signals.generic);
        assert_eq!(report.signals.caution_count(), 0);

        assert!(report.memorability.contains("easy to remember"));
        assert!(report.memorability.contains("visual language"));
        assert!(report.clarity.contains("general sense of tone"));
        assert!(report.gutcheck.contains("structurally sound"));
    }

    #[test]
    fn synergy_solutions_group_labs_collects_cautions() {
        let report = evaluate_name("Synergy Solutions Group Labs");
        assert!(report.signals.long);
        assert!(report.signals.generic);
        assert!(report.signals.trendy);
        assert!(report.signals.caution_count() >= 3);

        assert!(report.memorability.contains("harder to remember"));
        assert!(report.practical.contains("commonly used"));
        assert!(report.practical.contains("currently popular pattern"));
        assert!(report.gutcheck.contains("mix of strengths and trade-offs"));
    }

    #[test]
    fn doubled_letters_surface_in_the_practical_judgment() {
        let report = evaluate_name("Zoox");
        assert!(report.signals.spelling);
        assert!(report.practical.contains("difficult to spell"));
    }

    #[test]
    fn clean_short_name_gets_the_reassuring_tier() {
        let report = evaluate_name("Zest");
        assert_eq!(report.signals.caution_count(), 0);
        assert!(report.practical.contains("no obvious structural concerns"));
        assert!(report.gutcheck.contains("likely workable in most contexts"));
    }
}

mod input_validation {
    use super::*;

    #[test]
    fn empty_name_is_a_validation_error_not_an_evaluation() {
        assert!(require_name("", "name").is_err());
        assert!(require_name("   \t\n ", "name").is_err());
    }

    #[test]
    fn error_message_names_the_missing_slot() {
        let err = require_name("", "name B").unwrap_err();
        assert!(err.to_string().contains("name B"));
    }
}

mod alternative_vocabularies {
    use super::*;

    #[test]
    fn injected_imagery_vocabulary_drives_detection() {
        let config = EngineConfig {
            imagery_words: vec!["comet".into()],
            ..EngineConfig::default()
        };
        let engine = NameGauge::new(&config).unwrap();

        assert!(engine.evaluate("Comet Trail").signals.imagery);
        // default vocabulary no longer applies
        assert!(!engine.evaluate("Lantern Ridge").signals.imagery);
    }

    #[test]
    fn injected_trend_suffixes_drive_detection() {
        let config = EngineConfig {
            trend_suffixes: vec!["verse".into()],
            ..EngineConfig::default()
        };
        let engine = NameGauge::new(&config).unwrap();

        assert!(engine.evaluate("Otterverse").signals.trendy);
        assert!(!engine.evaluate("Quiet Labs").signals.trendy);
    }

    #[test]
    fn invalid_cluster_pattern_fails_at_construction() {
        let config = EngineConfig {
            spelling_patterns: vec!["(unclosed".into()],
            ..EngineConfig::default()
        };
        assert!(NameGauge::new(&config).is_err());
    }

    #[test]
    fn overlapping_thresholds_fail_at_construction() {
        let config = EngineConfig {
            long_char_threshold: 12,
            ..EngineConfig::default()
        };
        assert!(NameGauge::new(&config).is_err());
    }
}
