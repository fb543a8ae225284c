//! Heuristic plain-text detection
//!
//! A coarse fallback for prefixes no signature recognised. It catches
//! obviously textual uploads (CSV, logs, source code) and makes no attempt
//! at encoding detection.

use crate::domain::entities::{Classification, MediaType};

/// Number of leading bytes inspected
pub const TEXT_SAMPLE_LEN: usize = 64;

/// Printable share that must be exceeded to call a sample text
pub const PRINTABLE_THRESHOLD: f64 = 0.9;

/// Tab, LF, CR or printable ASCII
fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x09 | 0x0A | 0x0D | 0x20..=0x7E)
}

/// Classifies a prefix as `text/plain` or unknown
#[derive(Debug, Clone, Copy)]
pub struct TextHeuristic {
    sample_len: usize,
    threshold: f64,
}

impl TextHeuristic {
    pub fn new(sample_len: usize, threshold: f64) -> Self {
        Self {
            sample_len,
            threshold,
        }
    }

    /// Returns true if the sampled prefix looks like printable text
    ///
    /// A NUL byte anywhere in the sample marks it as binary, whatever came
    /// before it. An empty sample is never text.
    pub fn looks_like_text(&self, prefix: &[u8]) -> bool {
        let sample = &prefix[..prefix.len().min(self.sample_len)];
        if sample.is_empty() {
            return false;
        }

        let mut printable = 0usize;
        for &byte in sample {
            if byte == 0x00 {
                return false;
            }
            if is_printable(byte) {
                printable += 1;
            }
        }

        printable as f64 / sample.len() as f64 > self.threshold
    }

    pub fn classify(&self, prefix: &[u8]) -> Classification {
        if self.looks_like_text(prefix) {
            Classification::Known(MediaType::PlainText)
        } else {
            Classification::Unknown
        }
    }
}

impl Default for TextHeuristic {
    fn default() -> Self {
        Self::new(TEXT_SAMPLE_LEN, PRINTABLE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_words_are_text() {
        let text = "hello world ".repeat(6);
        assert!(TextHeuristic::default().looks_like_text(text.as_bytes()));
    }

    #[test]
    fn nul_after_text_is_binary() {
        let mut data = b"name,age\nalice,30\n".to_vec();
        data.push(0x00);
        assert!(!TextHeuristic::default().looks_like_text(&data));
    }

    #[test]
    fn nul_past_sample_window_is_ignored() {
        let mut data = vec![b'a'; TEXT_SAMPLE_LEN];
        data.push(0x00);
        assert!(TextHeuristic::default().looks_like_text(&data));
    }

    #[test]
    fn exactly_ninety_percent_is_not_enough() {
        // 9 printable of 10 is 0.9, which does not exceed the threshold
        let mut data = vec![b'x'; 9];
        data.push(0x80);
        assert!(!TextHeuristic::default().looks_like_text(&data));

        let mut data = vec![b'x'; 19];
        data.push(0x80);
        assert!(TextHeuristic::default().looks_like_text(&data));
    }

    #[test]
    fn empty_is_unknown() {
        assert_eq!(TextHeuristic::default().classify(&[]), Classification::Unknown);
    }
}
