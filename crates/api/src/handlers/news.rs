//! Handlers for the `/news` resource.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Json;
use sitecms_core::error::CoreError;
use sitecms_core::types::DbId;
use sitecms_db::models::content::{ContentItem, ContentSummary};
use sitecms_db::models::news::{CreateNews, News, UpdateNews};
use sitecms_db::repositories::{NewsRepo, PageRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::etag::conditional_json;
use crate::handlers::content::{
    apply_page_update, load_owned_page, page_id_for_slug, prepare_new_page, prepare_page_update,
};
use crate::query::ListParams;
use crate::state::AppState;

const ENTITY: &str = "News";

/// POST /api/v1/news
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNews>,
) -> AppResult<(StatusCode, Json<ContentItem<News>>)> {
    input.validate()?;
    let new_page = prepare_new_page(&input.page)?;

    let created = NewsRepo::create(&state.pool, &input, &new_page.slug, &new_page.blocks).await?;
    tracing::info!(
        news_id = created.item.id,
        page_id = created.page.page.id,
        "News item created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/news
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ContentSummary<News>>>> {
    let items = NewsRepo::list(
        &state.pool,
        params.published_only,
        params.limit(),
        params.offset(),
    )
    .await?;
    let summaries = PageRepo::attach_summaries(&state.pool, items, |i| i.page_id).await?;
    Ok(Json(summaries))
}

/// GET /api/v1/news/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let item = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    let page = load_owned_page(&state, item.page_id).await?;
    let version = page.page.clone();
    Ok(conditional_json(&headers, &version, ContentItem { item, page }))
}

/// GET /api/v1/news/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let page_id = page_id_for_slug(&state, &slug).await?;
    let item = NewsRepo::find_by_page_id(&state.pool, page_id)
        .await?
        .ok_or(AppError::Core(CoreError::SlugNotFound {
            entity: ENTITY,
            slug,
        }))?;
    let page = load_owned_page(&state, page_id).await?;
    let version = page.page.clone();
    Ok(conditional_json(&headers, &version, ContentItem { item, page }))
}

/// PUT/PATCH /api/v1/news/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNews>,
) -> AppResult<Json<ContentItem<News>>> {
    input.validate()?;
    let blocks = prepare_page_update(&input.page)?;
    let existing = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    let page = apply_page_update(&state, existing.page_id, &input.page, blocks).await?;
    let item = NewsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(news_id = id, page_id = item.page_id, "News item updated");
    Ok(Json(ContentItem { item, page }))
}

/// DELETE /api/v1/news/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = NewsRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(news_id = id, "News item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }
}
