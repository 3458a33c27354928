//! Parsing of `data:` URLs into structured attachment data.
//!
//! The parser accepts `data:<mime>;base64,<payload>` strings for the supported
//! file-type universe and decodes text payloads to UTF-8. Every rejection path
//! returns `None`; there is exactly one success shape.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::file_type::{content_category, FileContentCategory};

/// Standard-alphabet engine that accepts payloads with or without padding.
const BASE64_TEXT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Structured result of parsing a data URL.
///
/// `text_content` is populated only for the text category; image and document
/// payloads stay base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParsedFileData {
    pub category: FileContentCategory,
    pub mime_type: String,
    pub base64_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
}

/// Parse a `data:<mime>;base64,<payload>` string.
///
/// Returns `None` for anything that is not a well-formed data URL carrying a
/// supported MIME type and a non-empty payload. The payload is returned exactly
/// as transported; its base64 alphabet and padding are not validated here. For
/// text types the payload is additionally decoded to UTF-8, and a payload that
/// fails to decode rejects the whole URL.
pub fn parse_data_url(url: &str) -> Option<ParsedFileData> {
    let rest = url.strip_prefix("data:")?;

    let (media_section, payload) = rest.split_once(',')?;
    if payload.is_empty() {
        debug!("data URL has no payload");
        return None;
    }

    let mime_type = match media_section.split(';').next() {
        Some(mime) if !mime.is_empty() => mime,
        _ => {
            debug!("data URL has no MIME type");
            return None;
        }
    };

    let category = match content_category(mime_type) {
        Some(category) => category,
        None => {
            debug!(mime_type, "unsupported MIME type in data URL");
            return None;
        }
    };

    let text_content = if category == FileContentCategory::Text {
        match decode_base64_text(payload) {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(mime_type, error = %err, "failed to decode text payload");
                return None;
            }
        }
    } else {
        None
    };

    Some(ParsedFileData {
        category,
        mime_type: mime_type.to_string(),
        base64_data: payload.to_string(),
        text_content,
    })
}

/// Decode a base64 payload to a UTF-8 string.
///
/// Uses the standard alphabet and accepts both padded and unpadded input.
/// Empty input decodes to an empty string. Invalid base64 or invalid UTF-8 is
/// reported as an error rather than producing partially garbled output.
pub fn decode_base64_text(payload: &str) -> Result<String, AppError> {
    let bytes = BASE64_TEXT.decode(payload)?;
    Ok(String::from_utf8(bytes)?)
}
