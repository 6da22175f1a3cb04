//! Shared query parameter types for API handlers.

use serde::Deserialize;
use sitecms_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

/// Query parameters for page and content list endpoints
/// (`?published_only=&limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub published_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListParams {
    /// Limit clamped to `1..=MAX_LIST_LIMIT`.
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT)
    }

    /// Offset clamped to be non-negative.
    pub fn offset(&self) -> i64 {
        clamp_offset(self.offset)
    }
}

/// Query parameters for the menu tree (`?visible_only=`).
#[derive(Debug, Deserialize)]
pub struct VisibleOnlyParams {
    #[serde(default)]
    pub visible_only: bool,
}
