//! Handlers for the `/library` resource.
//!
//! Articles carry a page of blocks; books, reports and videos are plain
//! catalogue entries.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use sitecms_core::error::CoreError;
use sitecms_core::library::{has_page, validate_item_type};
use sitecms_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use sitecms_core::types::DbId;
use sitecms_db::models::library_item::{
    CreateLibraryItem, LibraryItem, LibraryItemDetail, LibraryListParams, UpdateLibraryItem,
};
use sitecms_db::repositories::LibraryItemRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::etag::conditional_json;
use crate::handlers::content::{
    apply_page_update, load_owned_page, page_id_for_slug, prepare_new_page, prepare_page_update,
};
use crate::state::AppState;

const ENTITY: &str = "Library item";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// Only articles own a page; a page on any other type is a malformed request.
fn page_not_allowed(item_type: &str) -> AppError {
    AppError::BadRequest(format!("Library items of type '{item_type}' cannot have a page"))
}

/// Detail response; articles get an ETag from their page version.
fn detail_response(headers: &HeaderMap, detail: LibraryItemDetail) -> Response {
    match &detail.page {
        Some(page) => {
            let version = page.page.clone();
            conditional_json(headers, &version, detail)
        }
        None => Json(detail).into_response(),
    }
}

/// POST /api/v1/library
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLibraryItem>,
) -> AppResult<(StatusCode, Json<LibraryItemDetail>)> {
    input.validate()?;
    validate_item_type(&input.item_type)?;

    let new_page = match (has_page(&input.item_type), &input.page) {
        (true, Some(page)) => Some(prepare_new_page(page)?),
        (true, None) => {
            return Err(AppError::Core(CoreError::Validation(
                "An article requires a page".into(),
            )))
        }
        (false, Some(_)) => return Err(page_not_allowed(&input.item_type)),
        (false, None) => None,
    };

    let (slug, blocks) = match &new_page {
        Some(p) => (Some(p.slug.as_str()), p.blocks.as_slice()),
        None => (None, &[][..]),
    };
    let created = LibraryItemRepo::create(&state.pool, &input, slug, blocks).await?;
    tracing::info!(
        library_item_id = created.item.id,
        item_type = %created.item.item_type,
        "Library item created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/library
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LibraryListParams>,
) -> AppResult<Json<Vec<LibraryItem>>> {
    if let Some(item_type) = &params.item_type {
        validate_item_type(item_type)?;
    }
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let items =
        LibraryItemRepo::list(&state.pool, params.item_type.as_deref(), limit, offset).await?;
    Ok(Json(items))
}

/// GET /api/v1/library/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let item = LibraryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let page = match item.page_id {
        Some(page_id) => Some(load_owned_page(&state, page_id).await?),
        None => None,
    };
    Ok(detail_response(&headers, LibraryItemDetail { item, page }))
}

/// GET /api/v1/library/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let page_id = page_id_for_slug(&state, &slug).await?;
    let item = LibraryItemRepo::find_by_page_id(&state.pool, page_id)
        .await?
        .ok_or(AppError::Core(CoreError::SlugNotFound {
            entity: ENTITY,
            slug,
        }))?;
    let page = load_owned_page(&state, page_id).await?;
    Ok(detail_response(
        &headers,
        LibraryItemDetail {
            item,
            page: Some(page),
        },
    ))
}

/// PUT/PATCH /api/v1/library/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLibraryItem>,
) -> AppResult<Json<LibraryItemDetail>> {
    input.validate()?;
    let blocks = match &input.page {
        Some(update) => prepare_page_update(update)?,
        None => None,
    };
    let existing = LibraryItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if input.page.is_some() && existing.page_id.is_none() {
        return Err(page_not_allowed(&existing.item_type));
    }

    let page = match (existing.page_id, &input.page) {
        (Some(page_id), Some(update)) => {
            Some(apply_page_update(&state, page_id, update, blocks).await?)
        }
        (Some(page_id), None) => Some(load_owned_page(&state, page_id).await?),
        (None, _) => None,
    };
    let item = LibraryItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(library_item_id = id, "Library item updated");
    Ok(Json(LibraryItemDetail { item, page }))
}

/// DELETE /api/v1/library/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LibraryItemRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(library_item_id = id, "Library item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
