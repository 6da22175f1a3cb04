//! Repository for the `news` table.

use sitecms_core::blocks::BlockInput;
use sitecms_core::types::DbId;
use sqlx::PgPool;

use crate::models::content::ContentItem;
use crate::models::news::{CreateNews, News, UpdateNews};
use crate::repositories::page_repo::{PAGE_DATE_ORDER, PUBLISHED_PAGE_FILTER};
use crate::repositories::PageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, page_id, preview_image, tags, created_at, updated_at";

/// Provides CRUD operations for news items.
pub struct NewsRepo;

impl NewsRepo {
    /// Create a news item, its page and its blocks in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNews,
        slug: &str,
        blocks: &[BlockInput],
    ) -> Result<ContentItem<News>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let page = PageRepo::insert_with_blocks(&mut tx, &input.page, slug, blocks).await?;

        let query = format!(
            "INSERT INTO news (page_id, preview_image, tags)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, News>(&query)
            .bind(page.page.id)
            .bind(&input.preview_image)
            .bind(&input.tags)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ContentItem { item, page })
    }

    /// Find a news item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<News>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the news item owning a page.
    pub async fn find_by_page_id(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Option<News>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE page_id = $1");
        sqlx::query_as::<_, News>(&query)
            .bind(page_id)
            .fetch_optional(pool)
            .await
    }

    /// List news items, newest first.
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<News>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news
             WHERE {PUBLISHED_PAGE_FILTER}
             ORDER BY {PAGE_DATE_ORDER}
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(published_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update news-specific fields. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNews,
    ) -> Result<Option<News>, sqlx::Error> {
        let query = format!(
            "UPDATE news SET
                preview_image = COALESCE($2, preview_image),
                tags = COALESCE($3, tags)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .bind(&input.preview_image)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete a news item by deleting its page (the row cascades with it).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM pages WHERE id = (SELECT page_id FROM news WHERE id = $1)",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
