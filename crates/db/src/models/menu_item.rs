//! Menu item model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::tree::{TreeItem, TreeNode};
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `menu_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuItem {
    pub id: DbId,
    pub title: String,
    pub url: Option<String>,
    pub parent_id: Option<DbId>,
    pub sort_order: i32,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TreeItem for MenuItem {
    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.parent_id
    }

    fn position(&self) -> i32 {
        self.sort_order
    }
}

/// A menu item with its ordered sub-items.
pub type MenuNode = TreeNode<MenuItem>;

/// DTO for creating a menu item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuItem {
    pub title: String,
    #[validate(length(max = 2048))]
    pub url: Option<String>,
    pub parent_id: Option<DbId>,
    pub sort_order: Option<i32>,
    pub is_visible: Option<bool>,
}

/// DTO for updating a menu item.
///
/// `parent_id` distinguishes "absent" (keep) from `null` (move to the top
/// level).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMenuItem {
    pub title: Option<String>,
    #[validate(length(max = 2048))]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<DbId>>,
    pub sort_order: Option<i32>,
    pub is_visible: Option<bool>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<DbId>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<DbId>::deserialize(deserializer).map(Some)
}
