//! Domain layer unit tests
//!
//! Tests for media types, the classification pipeline and the mismatch
//! evaluator.

use mimesniff::domain::entities::{Classification, MediaType};
use mimesniff::domain::services::{
    Classifier, MatchPolicy, MismatchEvaluator, SIGNATURE_RULES, SignatureMatcher, classify,
};
use proptest::prelude::*;
use rstest::*;

const PNG: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

// ============================================================================
// MediaType Tests
// ============================================================================

#[rstest]
#[case(MediaType::Png, "image/png", "png")]
#[case(MediaType::Jpeg, "image/jpeg", "jpg")]
#[case(MediaType::Gif, "image/gif", "gif")]
#[case(MediaType::Pdf, "application/pdf", "pdf")]
#[case(MediaType::Zip, "application/zip", "zip")]
#[case(MediaType::Mp4, "video/mp4", "mp4")]
#[case(MediaType::WebP, "image/webp", "webp")]
#[case(MediaType::PlainText, "text/plain", "txt")]
fn test_media_type_strings(
    #[case] media_type: MediaType,
    #[case] mime: &str,
    #[case] extension: &str,
) {
    assert_eq!(media_type.mime(), mime);
    assert_eq!(media_type.extension(), extension);
}

// ============================================================================
// Classification Tests
// ============================================================================

#[rstest]
#[case(&PNG, "image/png")]
#[case(&[0xFF, 0xD8, 0xFF, 0x00], "image/jpeg")]
#[case(b"GIF87a\x01\x00", "image/gif")]
#[case(b"%PDF-1.7\n%\xE2\xE3\xCF\xD3", "application/pdf")]
#[case(b"PK\x03\x04\x14\x00\x06\x00", "application/zip")]
#[case(b"\x00\x00\x00\x20ftypisom\x00\x00\x02\x00", "video/mp4")]
#[case(b"RIFF\x1a\x04\x00\x00WEBPVP8L", "image/webp")]
#[case(&[0x00; 10], "")]
#[case(&[0x01, 0x02, 0x03, 0x04, 0x05], "")]
fn test_classify_prefix(#[case] prefix: &[u8], #[case] expected: &str) {
    assert_eq!(classify(prefix).mime(), expected);
}

#[rstest]
fn test_classify_plain_text() {
    let text = "hello world ".repeat(6);
    assert_eq!(
        classify(&text.as_bytes()[..64]),
        Classification::Known(MediaType::PlainText)
    );
}

#[rstest]
fn test_png_priority_over_every_other_rule() {
    for rule in SIGNATURE_RULES.iter().skip(1) {
        let mut data = PNG.to_vec();
        data.resize(rule.span().max(PNG.len()), 0);
        for segment in rule.segments().iter().filter(|s| s.offset() >= PNG.len()) {
            data[segment.offset()..segment.end()].copy_from_slice(segment.pattern());
        }
        assert_eq!(classify(&data).media_type(), Some(MediaType::Png));
    }
}

#[rstest]
fn test_rule_table_order() {
    let order: Vec<MediaType> = SignatureMatcher::default()
        .rules()
        .iter()
        .map(|r| r.media_type())
        .collect();
    assert_eq!(
        order,
        vec![
            MediaType::Png,
            MediaType::Jpeg,
            MediaType::Gif,
            MediaType::Pdf,
            MediaType::Zip,
            MediaType::Mp4,
            MediaType::WebP,
        ]
    );
}

// ============================================================================
// MismatchEvaluator Tests
// ============================================================================

#[fixture]
fn exact() -> MismatchEvaluator {
    MismatchEvaluator::default()
}

#[rstest]
fn test_mismatch_names_both_types(exact: MismatchEvaluator) {
    let report = exact.evaluate("image/jpeg", "image/png");
    assert!(!report.is_match);
    assert!(report.issue.contains("image/jpeg"));
    assert!(report.issue.contains("image/png"));
}

#[rstest]
#[case("image/jpeg")]
#[case("")]
#[case("application/x-anything")]
fn test_unknown_detection_always_matches(exact: MismatchEvaluator, #[case] declared: &str) {
    let report = exact.evaluate(declared, "");
    assert!(report.is_match);
    assert!(report.issue.is_empty());
}

#[rstest]
fn test_identical_types_match(exact: MismatchEvaluator) {
    assert!(exact.evaluate("image/jpeg", "image/jpeg").is_match);
}

#[rstest]
fn test_parameters_ignored(exact: MismatchEvaluator) {
    assert!(exact.evaluate("text/plain; charset=utf-8", "text/plain").is_match);
    assert!(exact.evaluate("TEXT/PLAIN", "text/plain").is_match);
}

#[rstest]
#[case(MatchPolicy::Exact, false)]
#[case(MatchPolicy::PrefixTolerant, true)]
fn test_partial_prefix_by_policy(#[case] policy: MatchPolicy, #[case] expected: bool) {
    let report = MismatchEvaluator::new(policy).evaluate("image/jp", "image/jpeg");
    assert_eq!(report.is_match, expected);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn short_prefixes_are_unknown(data in proptest::collection::vec(any::<u8>(), 0..4)) {
        prop_assert_eq!(classify(&data), Classification::Unknown);
    }

    #[test]
    fn classification_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let classifier = Classifier::default();
        prop_assert_eq!(classifier.classify(&data), classifier.classify(&data));
    }

    #[test]
    fn unknown_never_mismatches(declared in "[a-z]{0,8}(/[a-z0-9.+-]{1,12})?") {
        prop_assert!(MismatchEvaluator::default().evaluate(&declared, "").is_match);
    }
}
