//! Signature matcher service
//!
//! Tries an ordered table of magic-number rules against a byte prefix.
//! The first rule whose byte ranges all match wins.

use crate::domain::entities::{Classification, MediaType, Segment, SignatureRule};

/// Prefixes shorter than this are never classified
pub const MIN_PREFIX_LEN: usize = 4;

/// Built-in rules in priority order
///
/// PNG comes first: its 8-byte signature is the longest and no other
/// pattern is a prefix of it.
pub static SIGNATURE_RULES: [SignatureRule; 7] = [
    // 89 50 4E 47 0D 0A 1A 0A
    SignatureRule::new(
        MediaType::Png,
        &[Segment::new(0, &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])],
    ),
    // FF D8 FF, followed by any APPn marker
    SignatureRule::new(MediaType::Jpeg, &[Segment::new(0, &[0xFF, 0xD8, 0xFF])]),
    // "GIF8", covers GIF87a and GIF89a
    SignatureRule::new(MediaType::Gif, &[Segment::new(0, b"GIF8")]),
    // "%PDF"
    SignatureRule::new(MediaType::Pdf, &[Segment::new(0, b"%PDF")]),
    // PK 03 04, local file header of any ZIP-based format
    SignatureRule::new(MediaType::Zip, &[Segment::new(0, &[0x50, 0x4B, 0x03, 0x04])]),
    // box size (4 bytes) then "ftyp"
    SignatureRule::new(MediaType::Mp4, &[Segment::new(4, b"ftyp")]),
    // "RIFF" <size> "WEBP"
    SignatureRule::new(
        MediaType::WebP,
        &[Segment::new(0, b"RIFF"), Segment::new(8, b"WEBP")],
    ),
];

/// Matches byte prefixes against an ordered rule table
///
/// # Example
///
/// ```
/// use mimesniff::domain::entities::{Classification, MediaType};
/// use mimesniff::domain::services::SignatureMatcher;
///
/// let matcher = SignatureMatcher::default();
/// let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
/// assert_eq!(matcher.classify(&png), Classification::Known(MediaType::Png));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SignatureMatcher {
    rules: &'static [SignatureRule],
}

impl SignatureMatcher {
    /// Creates a matcher over a custom rule table, tried in slice order
    pub fn new(rules: &'static [SignatureRule]) -> Self {
        Self { rules }
    }

    /// Returns the rule table in priority order
    pub fn rules(&self) -> &'static [SignatureRule] {
        self.rules
    }

    /// Largest span of any rule, i.e. the prefix length needed for every
    /// rule to be evaluated
    pub fn required_prefix_len(&self) -> usize {
        self.rules
            .iter()
            .map(SignatureRule::span)
            .max()
            .unwrap_or(MIN_PREFIX_LEN)
            .max(MIN_PREFIX_LEN)
    }

    /// Returns the first rule matching `prefix`
    ///
    /// Rules whose span exceeds the prefix are skipped, not treated as
    /// errors.
    pub fn find_match(&self, prefix: &[u8]) -> Option<&'static SignatureRule> {
        if prefix.len() < MIN_PREFIX_LEN {
            return None;
        }
        self.rules.iter().find(|rule| rule.matches(prefix))
    }

    /// Classifies `prefix` by signature alone
    pub fn classify(&self, prefix: &[u8]) -> Classification {
        self.find_match(prefix)
            .map(|rule| Classification::Known(rule.media_type()))
            .unwrap_or_default()
    }
}

impl Default for SignatureMatcher {
    fn default() -> Self {
        Self::new(&SIGNATURE_RULES)
    }
}
