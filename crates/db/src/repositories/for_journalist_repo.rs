//! Repository for the `for_journalist` table.

use sitecms_core::blocks::BlockInput;
use sitecms_core::types::DbId;
use sqlx::PgPool;

use crate::models::content::ContentItem;
use crate::models::for_journalist::{CreateForJournalist, ForJournalist, UpdateForJournalist};
use crate::repositories::page_repo::{PAGE_DATE_ORDER, PUBLISHED_PAGE_FILTER};
use crate::repositories::PageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, page_id, preview_image, sections, created_at, updated_at";

/// Provides CRUD operations for press materials.
pub struct ForJournalistRepo;

impl ForJournalistRepo {
    /// Create a press material, its page and its blocks in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateForJournalist,
        slug: &str,
        blocks: &[BlockInput],
    ) -> Result<ContentItem<ForJournalist>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let page = PageRepo::insert_with_blocks(&mut tx, &input.page, slug, blocks).await?;

        let query = format!(
            "INSERT INTO for_journalist (page_id, preview_image, sections)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, ForJournalist>(&query)
            .bind(page.page.id)
            .bind(&input.preview_image)
            .bind(&input.sections)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ContentItem { item, page })
    }

    /// Find a press material by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ForJournalist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM for_journalist WHERE id = $1");
        sqlx::query_as::<_, ForJournalist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the item owning a page.
    pub async fn find_by_page_id(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Option<ForJournalist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM for_journalist WHERE page_id = $1");
        sqlx::query_as::<_, ForJournalist>(&query)
            .bind(page_id)
            .fetch_optional(pool)
            .await
    }

    /// List press materials, newest first.
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ForJournalist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM for_journalist
             WHERE {PUBLISHED_PAGE_FILTER}
             ORDER BY {PAGE_DATE_ORDER}
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ForJournalist>(&query)
            .bind(published_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update wrapper-specific fields. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateForJournalist,
    ) -> Result<Option<ForJournalist>, sqlx::Error> {
        let query = format!(
            "UPDATE for_journalist SET
                preview_image = COALESCE($2, preview_image),
                sections = COALESCE($3, sections)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ForJournalist>(&query)
            .bind(id)
            .bind(&input.preview_image)
            .bind(&input.sections)
            .fetch_optional(pool)
            .await
    }

    /// Delete a press material by deleting its page (the row cascades with it).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM pages WHERE id = (SELECT page_id FROM for_journalist WHERE id = $1)",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
