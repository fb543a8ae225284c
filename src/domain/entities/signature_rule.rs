//! Signature rule entity
//!
//! A signature rule is a set of magic byte ranges, each at a fixed offset,
//! that together identify one media type. Most rules have a single range at
//! offset 0; container formats such as WebP need two disjoint ranges.

use super::MediaType;

/// One exact byte range that must appear at `offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    offset: usize,
    pattern: &'static [u8],
}

impl Segment {
    pub const fn new(offset: usize, pattern: &'static [u8]) -> Self {
        Self { offset, pattern }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn pattern(&self) -> &'static [u8] {
        self.pattern
    }

    /// First byte past the end of this range
    pub const fn end(&self) -> usize {
        self.offset + self.pattern.len()
    }

    fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..self.end()) == Some(self.pattern)
    }
}

/// A magic-number rule mapping byte ranges to a media type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRule {
    /// The media type this rule identifies
    media_type: MediaType,
    /// Byte ranges that must all match
    segments: &'static [Segment],
}

impl SignatureRule {
    /// Creates a rule from its byte ranges
    pub const fn new(media_type: MediaType, segments: &'static [Segment]) -> Self {
        Self {
            media_type,
            segments,
        }
    }

    /// Returns the media type this rule identifies
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Returns the MIME string this rule produces
    pub fn mime(&self) -> &'static str {
        self.media_type.mime()
    }

    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Number of leading bytes a prefix needs before this rule can match
    pub const fn span(&self) -> usize {
        let mut span = 0;
        let mut i = 0;
        while i < self.segments.len() {
            let end = self.segments[i].end();
            if end > span {
                span = end;
            }
            i += 1;
        }
        span
    }

    /// Checks whether every segment of this rule matches `data`
    ///
    /// A prefix shorter than the rule's span never matches.
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.span() {
            return false;
        }
        self.segments.iter().all(|segment| segment.matches(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIFF_WEBP: SignatureRule = SignatureRule::new(
        MediaType::WebP,
        &[Segment::new(0, b"RIFF"), Segment::new(8, b"WEBP")],
    );

    #[test]
    fn span_covers_furthest_segment() {
        assert_eq!(RIFF_WEBP.span(), 12);
        const FTYP: SignatureRule =
            SignatureRule::new(MediaType::Mp4, &[Segment::new(4, b"ftyp")]);
        assert_eq!(FTYP.span(), 8);
    }

    #[test]
    fn every_segment_must_match() {
        assert!(RIFF_WEBP.matches(b"RIFF\x10\x00\x00\x00WEBPVP8 "));
        assert!(!RIFF_WEBP.matches(b"RIFF\x10\x00\x00\x00WAVEfmt "));
    }

    #[test]
    fn short_data_is_skipped_not_indexed() {
        assert!(!RIFF_WEBP.matches(b"RIFF\x10\x00\x00\x00WEB"));
        assert!(!RIFF_WEBP.matches(b""));
    }
}
