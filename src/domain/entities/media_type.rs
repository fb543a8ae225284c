//! Media type entity
//!
//! The closed set of media types the classification pipeline can produce,
//! and the classification result that wraps one of them or reports unknown.

use serde::{Serialize, Serializer};
use std::fmt;

/// Media types that the sniffer can detect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
    /// GIF image (87a or 89a)
    Gif,
    /// PDF document
    Pdf,
    /// ZIP container (also docx, xlsx, pptx, jar, ...)
    Zip,
    /// ISO base media file with an `ftyp` box
    Mp4,
    /// WebP image in a RIFF container
    WebP,
    /// Mostly printable ASCII text
    PlainText,
}

impl MediaType {
    /// Returns the canonical MIME string
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Png => "image/png",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Gif => "image/gif",
            MediaType::Pdf => "application/pdf",
            MediaType::Zip => "application/zip",
            MediaType::Mp4 => "video/mp4",
            MediaType::WebP => "image/webp",
            MediaType::PlainText => "text/plain",
        }
    }

    /// Returns the typical file extension for this media type
    pub fn extension(&self) -> &'static str {
        match self {
            MediaType::Png => "png",
            MediaType::Jpeg => "jpg",
            MediaType::Gif => "gif",
            MediaType::Pdf => "pdf",
            MediaType::Zip => "zip",
            MediaType::Mp4 => "mp4",
            MediaType::WebP => "webp",
            MediaType::PlainText => "txt",
        }
    }

    /// Returns a human-readable name for this media type
    pub fn name(&self) -> &'static str {
        match self {
            MediaType::Png => "PNG Image",
            MediaType::Jpeg => "JPEG Image",
            MediaType::Gif => "GIF Image",
            MediaType::Pdf => "PDF Document",
            MediaType::Zip => "ZIP Archive",
            MediaType::Mp4 => "MP4 Video",
            MediaType::WebP => "WebP Image",
            MediaType::PlainText => "Plain Text",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Outcome of classifying a byte prefix
///
/// `Unknown` is a normal outcome, not an error. It renders as the empty
/// string wherever a MIME string is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    /// A signature or the text heuristic identified the content
    Known(MediaType),
    /// Nothing matched
    #[default]
    Unknown,
}

impl Classification {
    /// Returns the MIME string, or `""` when unknown
    pub fn mime(&self) -> &'static str {
        match self {
            Classification::Known(media_type) => media_type.mime(),
            Classification::Unknown => "",
        }
    }

    /// Returns the detected media type, if any
    pub fn media_type(&self) -> Option<MediaType> {
        match self {
            Classification::Known(media_type) => Some(*media_type),
            Classification::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Classification::Known(_))
    }
}

impl From<MediaType> for Classification {
    fn from(media_type: MediaType) -> Self {
        Classification::Known(media_type)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Known(media_type) => write!(f, "{}", media_type),
            Classification::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.mime())
    }
}
