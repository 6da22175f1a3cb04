//! Site menu rules.

use crate::error::CoreError;
use crate::tree::{would_create_cycle, TreeItem};
use crate::types::DbId;

/// Maximum length of a menu item title.
pub const MAX_MENU_TITLE_LEN: usize = 100;

/// Validate a menu item title (non-empty, <= 100 chars).
pub fn validate_menu_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Menu title must not be empty".into()));
    }
    if title.chars().count() > MAX_MENU_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Menu title must be at most {MAX_MENU_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate moving menu item `id` under `new_parent`.
///
/// The parent must exist among `items` and must not be `id` itself or one of
/// its descendants.
pub fn validate_reparent<T: TreeItem>(
    items: &[T],
    id: DbId,
    new_parent: DbId,
) -> Result<(), CoreError> {
    if !items.iter().any(|i| i.id() == new_parent) {
        return Err(CoreError::Validation(format!(
            "Parent menu item {new_parent} does not exist"
        )));
    }
    if would_create_cycle(items, id, new_parent) {
        return Err(CoreError::Validation(
            "A menu item cannot be moved under itself or one of its descendants".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(DbId, Option<DbId>);

    impl TreeItem for Item {
        fn id(&self) -> DbId {
            self.0
        }
        fn parent_id(&self) -> Option<DbId> {
            self.1
        }
        fn position(&self) -> i32 {
            0
        }
    }

    #[test]
    fn title_rules() {
        assert!(validate_menu_title("About").is_ok());
        assert!(validate_menu_title("").is_err());
        assert!(validate_menu_title(&"x".repeat(101)).is_err());
    }

    #[test]
    fn reparent_to_missing_parent_rejected() {
        let items = vec![Item(1, None)];
        assert!(validate_reparent(&items, 1, 42).is_err());
    }

    #[test]
    fn reparent_under_descendant_rejected() {
        let items = vec![Item(1, None), Item(2, Some(1)), Item(3, Some(2))];
        assert!(validate_reparent(&items, 1, 3).is_err());
    }

    #[test]
    fn reparent_to_other_branch_allowed() {
        let items = vec![Item(1, None), Item(2, None), Item(3, Some(1))];
        assert!(validate_reparent(&items, 3, 2).is_ok());
    }
}
