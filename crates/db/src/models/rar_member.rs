//! RAR member organisation model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::page::{CreatePage, UpdatePage};

/// A row from the `rar_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RarMember {
    pub id: DbId,
    pub page_id: DbId,
    pub logo: Option<String>,
    pub website: Option<String>,
    /// Free-form contact details (phones, emails, address), stored as given.
    pub contacts: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRarMember {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: CreatePage,
    pub logo: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub contacts: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRarMember {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: UpdatePage,
    pub logo: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub contacts: Option<serde_json::Value>,
}
