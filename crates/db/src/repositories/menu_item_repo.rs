//! Repository for the `menu_items` table.

use sitecms_core::types::DbId;
use sqlx::PgPool;

use crate::models::menu_item::{CreateMenuItem, MenuItem, UpdateMenuItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, url, parent_id, sort_order, is_visible, created_at, updated_at";

/// Provides CRUD operations for the site menu.
pub struct MenuItemRepo;

impl MenuItemRepo {
    /// Insert a new menu item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMenuItem) -> Result<MenuItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_items (title, url, parent_id, sort_order, is_visible)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.parent_id)
            .bind(input.sort_order)
            .bind(input.is_visible)
            .fetch_one(pool)
            .await
    }

    /// Find a menu item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_items WHERE id = $1");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every menu item in id order, ready for tree assembly.
    pub async fn list_all(pool: &PgPool, visible_only: bool) -> Result<Vec<MenuItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM menu_items
             WHERE ($1::BOOL = false OR is_visible = true)
             ORDER BY id"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(visible_only)
            .fetch_all(pool)
            .await
    }

    /// Update a menu item. Only non-`None` fields are applied; an explicit
    /// `parent_id: null` moves the item to the top level.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMenuItem,
    ) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_items SET
                title = COALESCE($2, title),
                url = COALESCE($3, url),
                parent_id = CASE WHEN $4::BOOL THEN $5 ELSE parent_id END,
                sort_order = COALESCE($6, sort_order),
                is_visible = COALESCE($7, is_visible)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.parent_id.is_some())
            .bind(input.parent_id.flatten())
            .bind(input.sort_order)
            .bind(input.is_visible)
            .fetch_optional(pool)
            .await
    }

    /// Delete a menu item and its whole subtree.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
