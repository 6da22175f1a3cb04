//! Repository for the `library_items` table.

use sitecms_core::blocks::BlockInput;
use sitecms_core::types::DbId;
use sqlx::PgPool;

use crate::models::library_item::{
    CreateLibraryItem, LibraryItem, LibraryItemDetail, UpdateLibraryItem,
};
use crate::repositories::PageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, item_type, title, author, file_path, page_id, created_at, updated_at";

/// Provides CRUD operations for library items.
pub struct LibraryItemRepo;

impl LibraryItemRepo {
    /// Create a library item in one transaction.
    ///
    /// When `page_slug` is given and the input carries a page, the page and
    /// its blocks are inserted first and linked to the item.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLibraryItem,
        page_slug: Option<&str>,
        blocks: &[BlockInput],
    ) -> Result<LibraryItemDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let page = match (&input.page, page_slug) {
            (Some(page), Some(slug)) => {
                Some(PageRepo::insert_with_blocks(&mut tx, page, slug, blocks).await?)
            }
            _ => None,
        };

        let query = format!(
            "INSERT INTO library_items (item_type, title, author, file_path, page_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, LibraryItem>(&query)
            .bind(&input.item_type)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.file_path)
            .bind(page.as_ref().map(|p| p.page.id))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(LibraryItemDetail { item, page })
    }

    /// Find a library item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LibraryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM library_items WHERE id = $1");
        sqlx::query_as::<_, LibraryItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the article owning a page.
    pub async fn find_by_page_id(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Option<LibraryItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM library_items WHERE page_id = $1");
        sqlx::query_as::<_, LibraryItem>(&query)
            .bind(page_id)
            .fetch_optional(pool)
            .await
    }

    /// List library items, newest first, optionally restricted to one type.
    pub async fn list(
        pool: &PgPool,
        item_type: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LibraryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM library_items
             WHERE ($1::TEXT IS NULL OR item_type = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, LibraryItem>(&query)
            .bind(item_type)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update item fields. Only non-`None` fields are applied; the page is
    /// updated separately through [`PageRepo`].
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLibraryItem,
    ) -> Result<Option<LibraryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE library_items SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                file_path = COALESCE($4, file_path)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LibraryItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.file_path)
            .fetch_optional(pool)
            .await
    }

    /// Delete a library item together with its page, if it has one.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed: Option<Option<DbId>> =
            sqlx::query_scalar("DELETE FROM library_items WHERE id = $1 RETURNING page_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(page_id) = removed else {
            return Ok(false);
        };
        if let Some(page_id) = page_id {
            sqlx::query("DELETE FROM pages WHERE id = $1")
                .bind(page_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
