//! Handlers for the `/pages` resource.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Json;
use sitecms_core::blocks::{materialize, BlockNode};
use sitecms_core::error::CoreError;
use sitecms_core::types::DbId;
use sitecms_db::models::page::{CreatePage, Page, PageTree, ReplaceBlocks, UpdatePage};
use sitecms_db::repositories::{BlockRepo, PageRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::etag::conditional_json;
use crate::handlers::content::{
    apply_page_update, decode_blocks, prepare_new_page, prepare_page_update,
};
use crate::query::ListParams;
use crate::state::AppState;

fn page_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Page", id })
}

async fn ensure_page_exists(state: &AppState, id: DbId) -> AppResult<Page> {
    PageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| page_not_found(id))
}

/// POST /api/v1/pages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePage>,
) -> AppResult<(StatusCode, Json<PageTree>)> {
    input.validate()?;
    let new_page = prepare_new_page(&input)?;

    let tree = PageRepo::create(&state.pool, &input, &new_page.slug, &new_page.blocks).await?;
    tracing::info!(page_id = tree.page.id, slug = %tree.page.slug, "Page created");
    Ok((StatusCode::CREATED, Json(tree)))
}

/// GET /api/v1/pages
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Page>>> {
    let pages = PageRepo::list(
        &state.pool,
        params.published_only,
        params.limit(),
        params.offset(),
    )
    .await?;
    Ok(Json(pages))
}

/// GET /api/v1/pages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let tree = PageRepo::find_tree_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| page_not_found(id))?;
    let page = tree.page.clone();
    Ok(conditional_json(&headers, &page, tree))
}

/// GET /api/v1/pages/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let page = PageRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::SlugNotFound {
            entity: "Page",
            slug,
        }))?;
    let tree = PageRepo::load_tree(&state.pool, page).await?;
    let page = tree.page.clone();
    Ok(conditional_json(&headers, &page, tree))
}

/// PUT/PATCH /api/v1/pages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePage>,
) -> AppResult<Json<PageTree>> {
    input.validate()?;
    let blocks = prepare_page_update(&input)?;
    ensure_page_exists(&state, id).await?;

    let tree = apply_page_update(&state, id, &input, blocks).await?;
    tracing::info!(page_id = id, "Page updated");
    Ok(Json(tree))
}

/// DELETE /api/v1/pages/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PageRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(page_id = id, "Page deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(page_not_found(id))
    }
}

/// GET /api/v1/pages/{id}/blocks
pub async fn get_blocks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<BlockNode>>> {
    ensure_page_exists(&state, id).await?;
    let rows = BlockRepo::list_for_page(&state.pool, id).await?;
    Ok(Json(materialize(rows.into_iter().map(Into::into).collect())))
}

/// PUT /api/v1/pages/{id}/blocks
///
/// Full replace: every existing block of the page is deleted and the
/// submitted tree inserted in its place.
pub async fn replace_blocks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceBlocks>,
) -> AppResult<Json<Vec<BlockNode>>> {
    let blocks = decode_blocks(Some(&input.blocks))?.unwrap_or_default();
    ensure_page_exists(&state, id).await?;

    let rows =
        BlockRepo::replace_for_page(&state.pool, id, &blocks, state.config.replace_mode()).await?;
    Ok(Json(materialize(rows.into_iter().map(Into::into).collect())))
}
