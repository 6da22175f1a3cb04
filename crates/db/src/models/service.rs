//! Service entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::page::{CreatePage, UpdatePage};

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub page_id: DbId,
    pub preview_image: Option<String>,
    pub short_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service together with its page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateService {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: CreatePage,
    pub preview_image: Option<String>,
    #[validate(length(max = 1000))]
    pub short_description: Option<String>,
}

/// DTO for updating a service and its page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateService {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: UpdatePage,
    pub preview_image: Option<String>,
    #[validate(length(max = 1000))]
    pub short_description: Option<String>,
}
