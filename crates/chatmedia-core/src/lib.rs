//! Chatmedia Core Library
//!
//! This crate provides the stateless helpers shared by the provider
//! integration layer: the supported file-type universe, data-URL parsing,
//! date arithmetic and formatting, and order-insensitive structural equality.
//! Everything here is a pure function over its arguments backed by static
//! lookup tables; there is no I/O and no shared mutable state.

pub mod compare;
pub mod data_url;
pub mod datetime;
pub mod error;
pub mod file_type;

// Re-export commonly used types
pub use compare::{deep_equal, sorted_arrays_equal};
pub use data_url::{decode_base64_text, parse_data_url, ParsedFileData};
pub use datetime::{
    add_days, diff_in_days, is_same_day, is_within_range, parse_date, to_date_string,
    to_display_string, IntoUtcDate,
};
pub use error::AppError;
pub use file_type::{
    accepted_types_record, content_category, file_type_label, is_document_type, is_image_type,
    is_supported_type, is_text_type, supported_types, unsupported_type_error, FileContentCategory,
    FileType, ALL_FILE_TYPES, DOCUMENT_TYPES, IMAGE_TYPES, TEXT_TYPES,
};
