//! Block tree assembler.
//!
//! Read side: [`materialize`] turns the flat block rows of one page into an
//! ordered nested tree. Write side: [`plan`] turns a nested submission into a
//! flat list of rows to insert, parents ahead of their children, so the
//! repository can do a full replace of a page's blocks.
//!
//! Block `content` is an opaque JSON document. Nothing here inspects or
//! rewrites it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tree::{self, TreeItem, TreeNode};
use crate::types::DbId;

/// Maximum length of a block type tag (e.g. `TX01`, `IMG01`).
pub const MAX_BLOCK_TYPE_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Write side
// ---------------------------------------------------------------------------

/// A block descriptor as submitted by an editor client.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlockInput {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default = "empty_document")]
    pub content: Value,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub children: Vec<BlockInput>,
}

fn empty_document() -> Value {
    Value::Object(serde_json::Map::new())
}

/// The `blocks` field of a create/update body.
///
/// Clients send either a JSON array or the same array stringified (the
/// multipart form convention).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlocksPayload {
    List(Vec<BlockInput>),
    Encoded(String),
}

impl BlocksPayload {
    /// Decode into block descriptors.
    ///
    /// An encoded payload that is not a JSON block array is returned as an
    /// error; callers treat it as an empty list.
    pub fn decode(self) -> Result<Vec<BlockInput>, serde_json::Error> {
        match self {
            BlocksPayload::List(blocks) => Ok(blocks),
            BlocksPayload::Encoded(raw) => serde_json::from_str(&raw),
        }
    }
}

/// One row to insert during a full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedBlock {
    pub block_type: String,
    pub content: Value,
    pub order: i32,
    /// Index of the parent within the plan. `None` for a root block.
    pub parent: Option<usize>,
}

/// Flatten a submitted tree into insert order.
///
/// Pre-order traversal: every parent precedes its children. A missing
/// `order` defaults to the descriptor's index among its siblings.
pub fn plan(inputs: &[BlockInput]) -> Vec<PlannedBlock> {
    let mut out = Vec::new();
    plan_level(inputs, None, &mut out);
    out
}

fn plan_level(inputs: &[BlockInput], parent: Option<usize>, out: &mut Vec<PlannedBlock>) {
    for (idx, input) in inputs.iter().enumerate() {
        let slot = out.len();
        out.push(PlannedBlock {
            block_type: input.block_type.clone(),
            content: input.content.clone(),
            order: input.order.unwrap_or(idx as i32),
            parent,
        });
        plan_level(&input.children, Some(slot), out);
    }
}

/// Check block type tags. Content is never validated.
pub fn validate_inputs(inputs: &[BlockInput]) -> Result<(), crate::error::CoreError> {
    for input in inputs {
        let tag = input.block_type.trim();
        if tag.is_empty() {
            return Err(crate::error::CoreError::Validation(
                "Block type must not be empty".into(),
            ));
        }
        if tag.len() > MAX_BLOCK_TYPE_LEN {
            return Err(crate::error::CoreError::Validation(format!(
                "Block type must be at most {MAX_BLOCK_TYPE_LEN} characters"
            )));
        }
        validate_inputs(&input.children)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read side
// ---------------------------------------------------------------------------

/// A persisted block, as needed for tree assembly and API output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockRecord {
    pub id: DbId,
    #[serde(rename = "type")]
    pub block_type: String,
    pub content: Value,
    pub order: i32,
    pub parent_block_id: Option<DbId>,
}

impl TreeItem for BlockRecord {
    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.parent_block_id
    }

    fn position(&self) -> i32 {
        self.order
    }
}

/// A materialized block with its ordered children.
pub type BlockNode = TreeNode<BlockRecord>;

/// Build the ordered block tree of one page from its flat rows.
///
/// `records` must hold the page's root blocks and all their descendants, in
/// fetch order. Siblings are sorted by `order` ascending; ties keep fetch
/// order.
pub fn materialize(records: Vec<BlockRecord>) -> Vec<BlockNode> {
    tree::assemble(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
