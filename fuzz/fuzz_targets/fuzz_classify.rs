#![no_main]

use libfuzzer_sys::fuzz_target;
use mimesniff::domain::services::{MismatchEvaluator, classify};

fuzz_target!(|data: &[u8]| {
    let detected = classify(data);
    assert_eq!(detected, classify(data));

    let declared = std::str::from_utf8(data).unwrap_or("");
    let report = MismatchEvaluator::default().evaluate(declared, detected.mime());
    assert_eq!(report.is_match, report.issue.is_empty());
});
