//! Repository for the `blocks` table.
//!
//! Blocks are never updated in place. Every write is a full replace: all
//! blocks of the page are deleted and the submitted tree is inserted fresh,
//! so block ids change on every save.

use sitecms_core::blocks::{plan, BlockInput};
use sitecms_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::block::Block;
use crate::repositories::PageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, block_type, content, sort_order, parent_block_id, page_id, created_at, updated_at";

/// How a full replace is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplaceMode {
    /// Delete and inserts run as separate auto-committed statements. A
    /// failure part-way leaves the page with fewer (possibly zero) blocks.
    #[default]
    AutoCommit,
    /// Delete and inserts run in one transaction.
    Transactional,
}

impl ReplaceMode {
    pub fn from_flag(transactional: bool) -> Self {
        if transactional {
            Self::Transactional
        } else {
            Self::AutoCommit
        }
    }
}

/// Provides block tree persistence.
pub struct BlockRepo;

impl BlockRepo {
    /// Fetch every block of a page: its root blocks and all descendants.
    ///
    /// Rows come back in id order, which is insert order, so siblings that
    /// share an `order` value materialize deterministically.
    pub async fn list_for_page(pool: &PgPool, page_id: DbId) -> Result<Vec<Block>, sqlx::Error> {
        let query = format!(
            "WITH RECURSIVE tree AS (
                SELECT * FROM blocks WHERE page_id = $1
                UNION ALL
                SELECT child.* FROM blocks child
                JOIN tree ON child.parent_block_id = tree.id
             )
             SELECT {COLUMNS} FROM tree ORDER BY id"
        );
        sqlx::query_as::<_, Block>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a submitted tree under a page, parents before children.
    ///
    /// Returns the inserted rows in insert order.
    pub async fn insert_tree(
        conn: &mut PgConnection,
        page_id: DbId,
        inputs: &[BlockInput],
    ) -> Result<Vec<Block>, sqlx::Error> {
        let planned = plan(inputs);
        let query = format!(
            "INSERT INTO blocks (block_type, content, sort_order, parent_block_id, page_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );

        let mut inserted: Vec<Block> = Vec::with_capacity(planned.len());
        for block in &planned {
            // A planned parent always precedes its children.
            let parent_block_id = block.parent.map(|idx| inserted[idx].id);
            let owner_page = if parent_block_id.is_some() {
                None
            } else {
                Some(page_id)
            };

            let row = sqlx::query_as::<_, Block>(&query)
                .bind(&block.block_type)
                .bind(&block.content)
                .bind(block.order)
                .bind(parent_block_id)
                .bind(owner_page)
                .fetch_one(&mut *conn)
                .await?;
            inserted.push(row);
        }

        Ok(inserted)
    }

    /// Delete every block of a page. Descendants go with their root via the
    /// `parent_block_id` cascade. Returns the number of root rows deleted.
    pub async fn delete_for_page(
        conn: &mut PgConnection,
        page_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blocks WHERE page_id = $1")
            .bind(page_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Replace all blocks of a page with the submitted tree and bump the
    /// page version.
    pub async fn replace_for_page(
        pool: &PgPool,
        page_id: DbId,
        inputs: &[BlockInput],
        mode: ReplaceMode,
    ) -> Result<Vec<Block>, sqlx::Error> {
        let blocks = match mode {
            ReplaceMode::AutoCommit => {
                let mut conn = pool.acquire().await?;
                Self::replace_inner(&mut conn, page_id, inputs).await?
            }
            ReplaceMode::Transactional => {
                let mut tx = pool.begin().await?;
                let blocks = Self::replace_inner(&mut tx, page_id, inputs).await?;
                tx.commit().await?;
                blocks
            }
        };

        tracing::debug!(page_id, block_count = blocks.len(), ?mode, "Blocks replaced");
        Ok(blocks)
    }

    async fn replace_inner(
        conn: &mut PgConnection,
        page_id: DbId,
        inputs: &[BlockInput],
    ) -> Result<Vec<Block>, sqlx::Error> {
        Self::delete_for_page(conn, page_id).await?;
        let blocks = Self::insert_tree(conn, page_id, inputs).await?;
        PageRepo::touch(conn, page_id).await?;
        Ok(blocks)
    }
}
