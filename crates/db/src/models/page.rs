//! Page entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::blocks::{materialize, BlockNode, BlocksPayload};
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::block::Block;

/// A row from the `pages` table.
///
/// `updated_at` doubles as the page version: it moves on every page update
/// and every block replace.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub published_at: Option<Timestamp>,
    pub is_draft: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A page together with its materialized block tree.
#[derive(Debug, Clone, Serialize)]
pub struct PageTree {
    #[serde(flatten)]
    pub page: Page,
    pub blocks: Vec<BlockNode>,
}

impl PageTree {
    /// Assemble the block rows of `page` into an ordered tree.
    pub fn assemble(page: Page, blocks: Vec<Block>) -> Self {
        let records = blocks.into_iter().map(Into::into).collect();
        Self {
            page,
            blocks: materialize(records),
        }
    }
}

/// DTO for creating a page. Content wrappers flatten this into their own
/// create DTO, so the same fields sit at the top level of every body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePage {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Generated from the title if `None`.
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    pub published_at: Option<Timestamp>,
    /// Defaults to `true`.
    pub is_draft: Option<bool>,
    /// Native JSON array or a stringified one.
    #[serde(default)]
    pub blocks: Option<BlocksPayload>,
}

/// DTO for updating a page. All fields are optional; `blocks`, when
/// present, replaces every block of the page.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePage {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    pub published_at: Option<Timestamp>,
    pub is_draft: Option<bool>,
    #[serde(default)]
    pub blocks: Option<BlocksPayload>,
}

/// Body of `PUT /pages/{id}/blocks`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceBlocks {
    pub blocks: BlocksPayload,
}
