//! Repository for the `rar_members` table.

use sitecms_core::blocks::BlockInput;
use sitecms_core::types::DbId;
use sqlx::PgPool;

use crate::models::content::ContentItem;
use crate::models::rar_member::{CreateRarMember, RarMember, UpdateRarMember};
use crate::repositories::page_repo::{PAGE_DATE_ORDER, PUBLISHED_PAGE_FILTER};
use crate::repositories::PageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, page_id, logo, website, contacts, created_at, updated_at";

/// Provides CRUD operations for RAR members.
pub struct RarMemberRepo;

impl RarMemberRepo {
    /// Create a RAR member, its page and its blocks in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRarMember,
        slug: &str,
        blocks: &[BlockInput],
    ) -> Result<ContentItem<RarMember>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let page = PageRepo::insert_with_blocks(&mut tx, &input.page, slug, blocks).await?;

        let query = format!(
            "INSERT INTO rar_members (page_id, logo, website, contacts)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, RarMember>(&query)
            .bind(page.page.id)
            .bind(&input.logo)
            .bind(&input.website)
            .bind(input.contacts.clone().unwrap_or_else(|| serde_json::json!({})))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ContentItem { item, page })
    }

    /// Find a RAR member by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RarMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rar_members WHERE id = $1");
        sqlx::query_as::<_, RarMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the item owning a page.
    pub async fn find_by_page_id(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Option<RarMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rar_members WHERE page_id = $1");
        sqlx::query_as::<_, RarMember>(&query)
            .bind(page_id)
            .fetch_optional(pool)
            .await
    }

    /// List RAR members, newest first.
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RarMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rar_members
             WHERE {PUBLISHED_PAGE_FILTER}
             ORDER BY {PAGE_DATE_ORDER}
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, RarMember>(&query)
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
        input: &UpdateRarMember,
    ) -> Result<Option<RarMember>, sqlx::Error> {
        let query = format!(
            "UPDATE rar_members SET
                logo = COALESCE($2, logo),
                website = COALESCE($3, website),
                contacts = COALESCE($4, contacts)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RarMember>(&query)
            .bind(id)
            .bind(&input.logo)
            .bind(&input.website)
            .bind(&input.contacts)
            .fetch_optional(pool)
            .await
    }

    /// Delete a RAR member by deleting its page (the row cascades with it).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM pages WHERE id = (SELECT page_id FROM rar_members WHERE id = $1)",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
