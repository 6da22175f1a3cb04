//! Library item types.
//!
//! Only articles are composed of blocks; every other item type is a plain
//! catalogue entry pointing at a file.

use crate::error::CoreError;

pub const ITEM_TYPE_ARTICLE: &str = "article";
pub const ITEM_TYPE_BOOK: &str = "book";
pub const ITEM_TYPE_REPORT: &str = "report";
pub const ITEM_TYPE_VIDEO: &str = "video";

/// All valid library item types.
pub const VALID_ITEM_TYPES: &[&str] = &[
    ITEM_TYPE_ARTICLE,
    ITEM_TYPE_BOOK,
    ITEM_TYPE_REPORT,
    ITEM_TYPE_VIDEO,
];

/// Validate a library item type against the known set.
pub fn validate_item_type(item_type: &str) -> Result<(), CoreError> {
    if !VALID_ITEM_TYPES.contains(&item_type) {
        return Err(CoreError::Validation(format!(
            "Invalid library item type '{}'. Valid types: {}",
            item_type,
            VALID_ITEM_TYPES.join(", ")
        )));
    }
    Ok(())
}

/// Whether items of this type own a page of blocks.
pub fn has_page(item_type: &str) -> bool {
    item_type == ITEM_TYPE_ARTICLE
}
