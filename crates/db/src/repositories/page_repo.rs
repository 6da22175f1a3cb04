//! Repository for the `pages` table.

use std::collections::HashMap;

use sitecms_core::blocks::BlockInput;
use sitecms_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::content::ContentSummary;
use crate::models::page::{CreatePage, Page, PageTree, UpdatePage};
use crate::repositories::BlockRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, title, published_at, is_draft, created_at, updated_at";

/// Filter for content wrapper tables on `$1::BOOL` ("published only").
///
/// A page counts as published once it is not a draft and its publication
/// time has passed.
pub(crate) const PUBLISHED_PAGE_FILTER: &str = "($1::BOOL = false OR page_id IN (
        SELECT id FROM pages WHERE is_draft = false AND published_at <= NOW()
    ))";

/// Newest-first ordering of content wrapper rows by their page dates.
pub(crate) const PAGE_DATE_ORDER: &str = "(SELECT COALESCE(p.published_at, p.created_at) \
    FROM pages p WHERE p.id = page_id) DESC, id DESC";

/// Provides CRUD operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// Insert a page row.
    pub async fn insert(
        conn: &mut PgConnection,
        input: &CreatePage,
        slug: &str,
    ) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (slug, title, published_at, is_draft)
             VALUES ($1, $2, $3, COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(input.published_at)
            .bind(input.is_draft)
            .fetch_one(&mut *conn)
            .await
    }

    /// Insert a page and its block tree on an existing connection or
    /// transaction.
    pub async fn insert_with_blocks(
        conn: &mut PgConnection,
        input: &CreatePage,
        slug: &str,
        blocks: &[BlockInput],
    ) -> Result<PageTree, sqlx::Error> {
        let page = Self::insert(conn, input, slug).await?;
        let rows = BlockRepo::insert_tree(conn, page.id, blocks).await?;
        Ok(PageTree::assemble(page, rows))
    }

    /// Create a page and its block tree in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePage,
        slug: &str,
        blocks: &[BlockInput],
    ) -> Result<PageTree, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let tree = Self::insert_with_blocks(&mut tx, input, slug, blocks).await?;
        tx.commit().await?;
        Ok(tree)
    }

    /// Find a page by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a page by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Fetch several pages at once, keyed by id.
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<HashMap<DbId, Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = ANY($1)");
        let pages = sqlx::query_as::<_, Page>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(pages.into_iter().map(|p| (p.id, p)).collect())
    }

    /// Load a page with its materialized block tree.
    pub async fn load_tree(pool: &PgPool, page: Page) -> Result<PageTree, sqlx::Error> {
        let blocks = BlockRepo::list_for_page(pool, page.id).await?;
        Ok(PageTree::assemble(page, blocks))
    }

    /// Find a page by ID and load its block tree.
    pub async fn find_tree_by_id(pool: &PgPool, id: DbId) -> Result<Option<PageTree>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(page) => Ok(Some(Self::load_tree(pool, page).await?)),
            None => Ok(None),
        }
    }

    /// List pages, newest first.
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE ($1::BOOL = false OR (is_draft = false AND published_at <= NOW()))
             ORDER BY COALESCE(published_at, created_at) DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(published_only)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update page fields. Only non-`None` fields are applied; the version
    /// (`updated_at`) moves even when nothing else changes.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                published_at = COALESCE($4, published_at),
                is_draft = COALESCE($5, is_draft)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(input.published_at)
            .bind(input.is_draft)
            .fetch_optional(pool)
            .await
    }

    /// Bump the page version after its blocks changed.
    pub async fn touch(conn: &mut PgConnection, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE pages SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Delete a page. Blocks and any owning content wrapper go with it.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Pair content wrapper rows with their pages for list responses.
    pub async fn attach_summaries<T>(
        pool: &PgPool,
        items: Vec<T>,
        page_id: impl Fn(&T) -> DbId,
    ) -> Result<Vec<ContentSummary<T>>, sqlx::Error> {
        let ids: Vec<DbId> = items.iter().map(&page_id).collect();
        let mut pages = Self::find_by_ids(pool, &ids).await?;

        Ok(items
            .into_iter()
            .filter_map(|item| {
                let page = pages.remove(&page_id(&item))?;
                Some(ContentSummary { item, page })
            })
            .collect())
    }
}
