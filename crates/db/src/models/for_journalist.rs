//! "For journalists" press material model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::page::{CreatePage, UpdatePage};

/// A row from the `for_journalist` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ForJournalist {
    pub id: DbId,
    pub page_id: DbId,
    pub preview_image: Option<String>,
    /// Press-section labels this material is listed under.
    pub sections: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateForJournalist {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: CreatePage,
    pub preview_image: Option<String>,
    #[serde(default)]
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateForJournalist {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: UpdatePage,
    pub preview_image: Option<String>,
    pub sections: Option<Vec<String>>,
}
