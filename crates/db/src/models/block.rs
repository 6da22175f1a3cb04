//! Block row model.

use serde::Serialize;
use sitecms_core::blocks::BlockRecord;
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `blocks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Block {
    pub id: DbId,
    pub block_type: String,
    pub content: serde_json::Value,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub parent_block_id: Option<DbId>,
    pub page_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Block> for BlockRecord {
    fn from(block: Block) -> Self {
        BlockRecord {
            id: block.id,
            block_type: block.block_type,
            content: block.content,
            order: block.order,
            parent_block_id: block.parent_block_id,
        }
    }
}
