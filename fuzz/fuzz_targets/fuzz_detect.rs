//! Fuzz target for usage detection.
//!
//! Goal: `detect` should **never panic**, and its output invariants hold for any text
//! under any overlap policy.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_detect
//! ```

#![no_main]

use arbitrary::Arbitrary;
use legacyscan_catalog::Catalog;
use legacyscan_domain::{Detector, EffectiveConfig, OverlapPolicy, format};
use legacyscan_types::Category;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    bare_mentions: bool,
    overlap: u8,
}

fuzz_target!(|input: Input| {
    let mut cfg = EffectiveConfig::default();
    if input.bare_mentions {
        cfg.bare_mentions.extend(Category::ALL);
    }
    cfg.overlap = match input.overlap % 3 {
        0 => OverlapPolicy::ExactSpan,
        1 => OverlapPolicy::Contained,
        _ => OverlapPolicy::Overlapping,
    };
    let catalog = Catalog::credit_management().expect("built-in catalog");
    let detector = Detector::new(Arc::new(catalog), &cfg);

    let findings = detector.detect(&input.text);
    for pair in findings.windows(2) {
        assert!(pair[0].span.start <= pair[1].span.start);
    }
    for f in &findings {
        assert!(input.text.get(f.span.clone()).is_some());
        assert!(detector.catalog().lookup(&f.target_name).is_some());
    }

    let records = format::to_records(&findings, &input.text);
    let chars = input.text.chars().count();
    assert!(records.iter().all(|r| r.end_char_in_unit <= chars));
});
