//! Supported file types for model-facing attachments.
//!
//! The supported universe is a closed set of nine MIME types partitioned into
//! three disjoint groups (image, document, text). Every lookup table here is
//! static and immutable; the queries below are pure functions over them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Content category for a supported file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileContentCategory {
    Image,
    Document,
    Text,
}

/// A supported attachment MIME type.
///
/// Serializes as its canonical MIME string (e.g. `"image/jpeg"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum FileType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/gif")]
    Gif,
    #[serde(rename = "image/webp")]
    Webp,
    #[serde(rename = "application/pdf")]
    Pdf,
    #[serde(rename = "text/plain")]
    Plain,
    #[serde(rename = "text/csv")]
    Csv,
    #[serde(rename = "text/html")]
    Html,
    #[serde(rename = "text/markdown")]
    Markdown,
}

/// Image group.
pub const IMAGE_TYPES: [FileType; 4] = [FileType::Jpeg, FileType::Png, FileType::Gif, FileType::Webp];

/// Document group.
pub const DOCUMENT_TYPES: [FileType; 1] = [FileType::Pdf];

/// Text group.
pub const TEXT_TYPES: [FileType; 4] = [FileType::Plain, FileType::Csv, FileType::Html, FileType::Markdown];

/// Every supported type, in declaration order: images, then document, then text.
pub const ALL_FILE_TYPES: [FileType; 9] = [
    FileType::Jpeg,
    FileType::Png,
    FileType::Gif,
    FileType::Webp,
    FileType::Pdf,
    FileType::Plain,
    FileType::Csv,
    FileType::Html,
    FileType::Markdown,
];

impl FileType {
    /// Canonical MIME string for this type.
    pub const fn mime(self) -> &'static str {
        match self {
            FileType::Jpeg => "image/jpeg",
            FileType::Png => "image/png",
            FileType::Gif => "image/gif",
            FileType::Webp => "image/webp",
            FileType::Pdf => "application/pdf",
            FileType::Plain => "text/plain",
            FileType::Csv => "text/csv",
            FileType::Html => "text/html",
            FileType::Markdown => "text/markdown",
        }
    }

    /// Accepted filename extensions, preferred form first. Never empty.
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            FileType::Jpeg => &[".jpg", ".jpeg"],
            FileType::Png => &[".png"],
            FileType::Gif => &[".gif"],
            FileType::Webp => &[".webp"],
            FileType::Pdf => &[".pdf"],
            FileType::Plain => &[".txt"],
            FileType::Csv => &[".csv"],
            FileType::Html => &[".html", ".htm"],
            FileType::Markdown => &[".md", ".markdown"],
        }
    }

    /// Curated short label for display (e.g. "JPEG", "WebP").
    pub const fn label(self) -> &'static str {
        match self {
            FileType::Jpeg => "JPEG",
            FileType::Png => "PNG",
            FileType::Gif => "GIF",
            FileType::Webp => "WebP",
            FileType::Pdf => "PDF",
            FileType::Plain => "Text",
            FileType::Csv => "CSV",
            FileType::Html => "HTML",
            FileType::Markdown => "Markdown",
        }
    }

    /// Content category of this type's group.
    pub const fn category(self) -> FileContentCategory {
        match self {
            FileType::Jpeg | FileType::Png | FileType::Gif | FileType::Webp => {
                FileContentCategory::Image
            }
            FileType::Pdf => FileContentCategory::Document,
            FileType::Plain | FileType::Csv | FileType::Html | FileType::Markdown => {
                FileContentCategory::Text
            }
        }
    }

    /// Look up a supported type by exact MIME string match.
    pub fn from_mime(mime: &str) -> Option<FileType> {
        ALL_FILE_TYPES.iter().copied().find(|t| t.mime() == mime)
    }
}

/// True iff `mime` exactly matches a member of the image group.
pub fn is_image_type(mime: &str) -> bool {
    IMAGE_TYPES.iter().any(|t| t.mime() == mime)
}

/// True iff `mime` exactly matches a member of the document group.
pub fn is_document_type(mime: &str) -> bool {
    DOCUMENT_TYPES.iter().any(|t| t.mime() == mime)
}

/// True iff `mime` exactly matches a member of the text group.
pub fn is_text_type(mime: &str) -> bool {
    TEXT_TYPES.iter().any(|t| t.mime() == mime)
}

/// True iff `mime` matches any supported group.
pub fn is_supported_type(mime: &str) -> bool {
    is_image_type(mime) || is_document_type(mime) || is_text_type(mime)
}

/// Content category for a MIME string, or `None` if unsupported.
///
/// Groups are checked image, then document, then text. The groups are disjoint,
/// so check order has no observable effect today; it would become an implicit
/// priority rule if overlapping types were ever added.
pub fn content_category(mime: &str) -> Option<FileContentCategory> {
    if is_image_type(mime) {
        Some(FileContentCategory::Image)
    } else if is_document_type(mime) {
        Some(FileContentCategory::Document)
    } else if is_text_type(mime) {
        Some(FileContentCategory::Text)
    } else {
        None
    }
}

/// All supported MIME strings in declaration order.
///
/// Returns a fresh, independently owned vector on every call.
pub fn supported_types() -> Vec<&'static str> {
    ALL_FILE_TYPES.iter().map(|t| t.mime()).collect()
}

/// Build a MIME-to-extensions lookup for a subset of the supported types.
pub fn accepted_types_record(types: &[FileType]) -> HashMap<&'static str, Vec<&'static str>> {
    types
        .iter()
        .map(|t| (t.mime(), t.extensions().to_vec()))
        .collect()
}

/// Human-readable rejection message naming the offending type and the full
/// supported list.
pub fn unsupported_type_error(mime: &str) -> String {
    format!(
        "Unsupported file type: {}. Supported types: {}",
        mime,
        supported_types().join(", ")
    )
}

/// Short display label for a MIME string.
///
/// Supported types get their curated label; any other `type/subtype` string
/// falls back to the uppercased subtype; anything without a subtype (including
/// the empty string) gets the literal `"FILE"`.
pub fn file_type_label(mime: &str) -> String {
    if let Some(file_type) = FileType::from_mime(mime) {
        return file_type.label().to_string();
    }
    match mime.split_once('/') {
        Some((_, subtype)) if !subtype.is_empty() => subtype.to_uppercase(),
        _ => "FILE".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_cover_all_types_without_overlap() {
        let mut grouped: Vec<FileType> = Vec::new();
        grouped.extend_from_slice(&IMAGE_TYPES);
        grouped.extend_from_slice(&DOCUMENT_TYPES);
        grouped.extend_from_slice(&TEXT_TYPES);
        assert_eq!(grouped.len(), ALL_FILE_TYPES.len());
        for t in ALL_FILE_TYPES {
            assert_eq!(grouped.iter().filter(|g| **g == t).count(), 1);
        }
    }

    #[test]
    fn test_category_consistent_with_group_predicates() {
        for t in ALL_FILE_TYPES {
            let mime = t.mime();
            let category = content_category(mime).expect("supported type must classify");
            assert_eq!(category, t.category());
            let matches = [
                (is_image_type(mime), FileContentCategory::Image),
                (is_document_type(mime), FileContentCategory::Document),
                (is_text_type(mime), FileContentCategory::Text),
            ];
            assert_eq!(matches.iter().filter(|(hit, _)| *hit).count(), 1);
            let (_, expected) = matches
                .iter()
                .find(|(hit, _)| *hit)
                .expect("exactly one group matched");
            assert_eq!(category, *expected);
        }
    }

    #[test]
    fn test_every_type_has_extensions() {
        for t in ALL_FILE_TYPES {
            assert!(!t.extensions().is_empty(), "{} has no extensions", t.mime());
        }
    }

    #[test]
    fn test_from_mime_inverts_mime() {
        for t in ALL_FILE_TYPES {
            assert_eq!(FileType::from_mime(t.mime()), Some(t));
        }
        assert_eq!(FileType::from_mime("application/json"), None);
        assert_eq!(FileType::from_mime("IMAGE/JPEG"), None);
    }

    #[test]
    fn test_supported_types_returns_independent_copies() {
        let mut first = supported_types();
        first.clear();
        assert_eq!(supported_types().len(), ALL_FILE_TYPES.len());
        assert_eq!(supported_types()[0], "image/jpeg");
        assert_eq!(supported_types()[8], "text/markdown");
    }

    #[test]
    fn test_accepted_types_record() {
        assert!(accepted_types_record(&[]).is_empty());

        let record = accepted_types_record(&ALL_FILE_TYPES);
        assert_eq!(record.len(), ALL_FILE_TYPES.len());
        assert_eq!(record["image/jpeg"], vec![".jpg", ".jpeg"]);
        assert_eq!(record["text/markdown"], vec![".md", ".markdown"]);
    }

    #[test]
    fn test_unsupported_type_error_names_type_and_list() {
        let message = unsupported_type_error("application/json");
        assert!(message.contains("application/json"));
        assert!(message.contains("image/jpeg"));
        assert!(message.contains("text/markdown"));
    }

    #[test]
    fn test_file_type_label() {
        assert_eq!(file_type_label("application/pdf"), "PDF");
        assert_eq!(file_type_label("image/webp"), "WebP");
        assert_eq!(file_type_label("text/markdown"), "Markdown");
        assert_eq!(file_type_label("video/mp4"), "MP4");
        assert_eq!(file_type_label("audio/ogg"), "OGG");
        assert_eq!(file_type_label(""), "FILE");
        assert_eq!(file_type_label("foo/"), "FILE");
        assert_eq!(file_type_label("no-subtype"), "FILE");
    }

    #[test]
    fn test_serde_uses_mime_strings() {
        let json = serde_json::to_string(&FileType::Jpeg).unwrap();
        assert_eq!(json, "\"image/jpeg\"");
        let back: FileType = serde_json::from_str("\"text/csv\"").unwrap();
        assert_eq!(back, FileType::Csv);
    }
}
