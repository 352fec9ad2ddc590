//! Property-based tests for the detection engine.
//!
//! Inputs are stitched together from ABAP-like fragments so the matchers actually fire,
//! plus fully arbitrary strings for the never-panics property.

use crate::engine::Detector;
use crate::policy::OverlapPolicy;
use crate::test_support::detector_with;
use legacyscan_types::Category;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("SELECT * FROM s066 WHERE kunnr = lv_kunnr.".to_string()),
        Just("select single * from S067 into @data(ls).".to_string()),
        Just("UPDATE vkmi SET x = 'Y'.".to_string()),
        Just("SELECT SINGLE FOR UPDATE vkmi WHERE x = 'Y'.".to_string()),
        Just("DELETE FROM vakcr.".to_string()),
        Just("CALL TRANSACTION 'VKM3'.".to_string()),
        Just("call transaction\n  vkm5 .".to_string()),
        Just("CALL TRANSACTION 'VKM2' AND SKIP FIRST SCREEN.".to_string()),
        Just("SUBMIT rvkred04 AND RETURN.".to_string()),
        Just("CREATE OBJECT lo TYPE cl_cred_val_log.".to_string()),
        Just("CLEAR: s066-klimk.".to_string()),
        Just("lv = s067-oeikw.".to_string()),
        Just("\" SD_VKMLOG_SHOW was used here".to_string()),
        Just("WRITE 'Prüfung'.".to_string()),
        Just("SELECT * FROM mara INTO TABLE lt.".to_string()),
        "[a-zA-Z_ ]{0,12}".prop_map(|s| s),
    ]
}

fn arb_program() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_fragment(), 0..8),
        prop::collection::vec(prop_oneof![Just(" "), Just("\n"), Just("\n  ")], 8),
    )
        .prop_map(|(fragments, seps)| {
            let mut text = String::new();
            for (i, f) in fragments.iter().enumerate() {
                text.push_str(f);
                text.push_str(seps[i % seps.len()]);
            }
            text
        })
}

fn arb_detector() -> impl Strategy<Value = Detector> {
    (any::<bool>(), 0usize..3).prop_map(|(bare, overlap)| {
        detector_with(|cfg| {
            if bare {
                cfg.bare_mentions.extend(Category::ALL);
            }
            cfg.overlap = match overlap {
                0 => OverlapPolicy::ExactSpan,
                1 => OverlapPolicy::Contained,
                _ => OverlapPolicy::Overlapping,
            };
        })
    })
}

proptest! {
    #[test]
    fn findings_are_sorted_and_spans_unique(d in arb_detector(), text in arb_program()) {
        let findings = d.detect(&text);
        prop_assert!(findings.windows(2).all(|w| w[0].span.start <= w[1].span.start));
        let spans: HashSet<_> = findings.iter().map(|f| f.span.clone()).collect();
        prop_assert_eq!(spans.len(), findings.len());
    }

    #[test]
    fn every_finding_is_a_catalog_entry(d in arb_detector(), text in arb_program()) {
        for f in d.detect(&text) {
            let entry = d.catalog().lookup(&f.target_name);
            prop_assert!(entry.is_some());
            let entry = entry.unwrap();
            prop_assert_eq!(&entry.name, &f.target_name);
            prop_assert_eq!(entry.category, f.category);
            prop_assert_eq!(f.ambiguous, entry.remediation.is_none());
            prop_assert_eq!(&f.suggested_remediation, &entry.remediation);
            prop_assert_eq!(f.target_type.is_some(), f.category == Category::Table);
        }
    }

    #[test]
    fn spans_slice_the_text_and_match_snippets(d in arb_detector(), text in arb_program()) {
        for f in d.detect(&text) {
            prop_assert!(f.span.start < f.span.end);
            let slice = text.get(f.span.clone());
            prop_assert!(slice.is_some());
            prop_assert_eq!(slice.unwrap().trim(), f.snippet.as_str());
        }
    }

    #[test]
    fn detection_is_deterministic(d in arb_detector(), text in arb_program()) {
        prop_assert_eq!(d.detect(&text), d.detect(&text));
    }

    #[test]
    fn arbitrary_text_never_panics(d in arb_detector(), text in any::<String>()) {
        let _ = d.detect(&text);
    }
}
