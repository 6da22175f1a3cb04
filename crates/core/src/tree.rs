//! Generic assembly of parent-referencing rows into ordered trees.
//!
//! Rows are grouped by parent id in a single pass (an arena keyed by id),
//! then each sibling group is sorted by its position with a stable sort, so
//! rows sharing a position keep the order in which they were fetched.
//! Used for page blocks and for the site menu.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::DbId;

/// A row that knows its own id, its parent and its position among siblings.
pub trait TreeItem {
    fn id(&self) -> DbId;
    fn parent_id(&self) -> Option<DbId>;
    fn position(&self) -> i32;
}

/// A node of an assembled tree.
///
/// Serializes as the item's own fields plus a `children` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode<T> {
    #[serde(flatten)]
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Number of levels in this subtree, counting the node itself.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    /// Total number of nodes in this subtree, counting the node itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// Assemble flat rows into a forest ordered by position at every level.
///
/// A row whose parent is not among `items` is treated as a root. Rows that
/// cannot be reached from any root (a parent cycle) are dropped.
pub fn assemble<T: TreeItem>(items: Vec<T>) -> Vec<TreeNode<T>> {
    let known: HashSet<DbId> = items.iter().map(T::id).collect();

    let mut groups: HashMap<Option<DbId>, Vec<T>> = HashMap::new();
    for item in items {
        let parent = item.parent_id().filter(|p| known.contains(p));
        groups.entry(parent).or_default().push(item);
    }

    build_level(None, &mut groups)
}

fn build_level<T: TreeItem>(
    parent: Option<DbId>,
    groups: &mut HashMap<Option<DbId>, Vec<T>>,
) -> Vec<TreeNode<T>> {
    let Some(mut level) = groups.remove(&parent) else {
        return Vec::new();
    };
    level.sort_by_key(T::position);

    level
        .into_iter()
        .map(|item| {
            let children = build_level(Some(item.id()), groups);
            TreeNode { item, children }
        })
        .collect()
}

/// Maximum depth across a forest (0 for an empty forest).
pub fn forest_depth<T>(forest: &[TreeNode<T>]) -> usize {
    forest.iter().map(TreeNode::depth).max().unwrap_or(0)
}

/// Whether re-parenting `id` under `new_parent` would make `id` its own ancestor.
///
/// Walks the parent chain upwards from `new_parent` using the current rows.
pub fn would_create_cycle<T: TreeItem>(items: &[T], id: DbId, new_parent: DbId) -> bool {
    let parents: HashMap<DbId, Option<DbId>> =
        items.iter().map(|i| (i.id(), i.parent_id())).collect();

    let mut seen = HashSet::new();
    let mut cursor = Some(new_parent);
    while let Some(current) = cursor {
        if current == id {
            return true;
        }
        // Existing data already loops; stop rather than spin.
        if !seen.insert(current) {
            return false;
        }
        cursor = parents.get(&current).copied().flatten();
    }
    false
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
