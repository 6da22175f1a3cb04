//! Page plumbing shared by the page handlers and every content wrapper.

use sitecms_core::blocks::{validate_inputs, BlockInput, BlocksPayload};
use sitecms_core::error::CoreError;
use sitecms_core::slug::{resolve_slug, validate_slug, validate_title};
use sitecms_core::types::DbId;
use sitecms_db::models::page::{CreatePage, PageTree, UpdatePage};
use sitecms_db::repositories::{BlockRepo, PageRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Decode and check a `blocks` field.
///
/// `None` (field absent) stays `None`. A stringified payload that does not
/// parse is treated as an empty block list.
pub fn decode_blocks(payload: Option<&BlocksPayload>) -> AppResult<Option<Vec<BlockInput>>> {
    let Some(payload) = payload else {
        return Ok(None);
    };
    let blocks = match payload.clone().decode() {
        Ok(blocks) => blocks,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed blocks payload, treating as empty");
            Vec::new()
        }
    };
    validate_inputs(&blocks)?;
    Ok(Some(blocks))
}

/// A validated page ready to insert.
pub struct NewPage {
    pub slug: String,
    pub blocks: Vec<BlockInput>,
}

/// Validate the page part of a create body and resolve its slug.
pub fn prepare_new_page(input: &CreatePage) -> AppResult<NewPage> {
    validate_title(&input.title)?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let blocks = decode_blocks(input.blocks.as_ref())?.unwrap_or_default();
    Ok(NewPage { slug, blocks })
}

/// Validate the page part of an update body and decode its blocks.
///
/// Runs before any write so a rejected update leaves everything unchanged.
/// `None` means the body carries no `blocks` field.
pub fn prepare_page_update(input: &UpdatePage) -> AppResult<Option<Vec<BlockInput>>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    decode_blocks(input.blocks.as_ref())
}

/// Apply a prepared update to an existing page.
///
/// The page row is written first so a slug conflict aborts before blocks are
/// touched. A block replace then bumps the version again, so the page is
/// re-read for the response.
pub async fn apply_page_update(
    state: &AppState,
    page_id: DbId,
    input: &UpdatePage,
    blocks: Option<Vec<BlockInput>>,
) -> AppResult<PageTree> {
    let page = PageRepo::update(&state.pool, page_id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id: page_id,
        }))?;

    let Some(blocks) = blocks else {
        return Ok(PageRepo::load_tree(&state.pool, page).await?);
    };
    BlockRepo::replace_for_page(&state.pool, page_id, &blocks, state.config.replace_mode())
        .await?;
    load_owned_page(state, page_id).await
}

/// Load the page owned by a content wrapper.
///
/// The foreign key guarantees the page exists; a miss means the row was
/// deleted concurrently.
pub async fn load_owned_page(state: &AppState, page_id: DbId) -> AppResult<PageTree> {
    PageRepo::find_tree_by_id(&state.pool, page_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id: page_id,
        }))
}

/// Resolve a slug to a page id, or 404.
pub async fn page_id_for_slug(state: &AppState, slug: &str) -> AppResult<DbId> {
    let page = PageRepo::find_by_slug(&state.pool, slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::SlugNotFound {
                entity: "Page",
                slug: slug.to_string(),
            })
        })?;
    Ok(page.id)
}
