//! Library item model and DTOs.
//!
//! Only `article` items own a page of blocks.

use serde::{Deserialize, Serialize};
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::page::{CreatePage, PageTree, UpdatePage};

/// A row from the `library_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LibraryItem {
    pub id: DbId,
    pub item_type: String,
    pub title: String,
    pub author: Option<String>,
    pub file_path: Option<String>,
    pub page_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A library item with its page tree, if it is an article.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryItemDetail {
    #[serde(flatten)]
    pub item: LibraryItem,
    pub page: Option<PageTree>,
}

/// DTO for creating a library item. `page` is required for articles and
/// rejected for every other item type.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLibraryItem {
    pub item_type: String,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub author: Option<String>,
    pub file_path: Option<String>,
    #[validate(nested)]
    pub page: Option<CreatePage>,
}

/// DTO for updating a library item. The item type cannot change.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLibraryItem {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub author: Option<String>,
    pub file_path: Option<String>,
    #[validate(nested)]
    pub page: Option<UpdatePage>,
}

/// Query params for listing library items.
#[derive(Debug, Deserialize)]
pub struct LibraryListParams {
    pub item_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
