//! Legislative monitoring ("monitoring zakon") entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::page::{CreatePage, UpdatePage};

/// A row from the `monitoring_zakon` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonitoringZakon {
    pub id: DbId,
    pub page_id: DbId,
    pub preview_image: Option<String>,
    /// Link to the published legal act.
    pub source_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMonitoringZakon {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: CreatePage,
    pub preview_image: Option<String>,
    #[validate(url)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMonitoringZakon {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: UpdatePage,
    pub preview_image: Option<String>,
    #[validate(url)]
    pub source_url: Option<String>,
}
