//! News entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::page::{CreatePage, UpdatePage};

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct News {
    pub id: DbId,
    pub page_id: DbId,
    pub preview_image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a news item together with its page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNews {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: CreatePage,
    pub preview_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for updating a news item and its page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNews {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: UpdatePage,
    pub preview_image: Option<String>,
    pub tags: Option<Vec<String>>,
}
