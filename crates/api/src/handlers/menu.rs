//! Handlers for the `/menu` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sitecms_core::error::CoreError;
use sitecms_core::menu::{validate_menu_title, validate_reparent};
use sitecms_core::tree;
use sitecms_core::types::DbId;
use sitecms_db::models::menu_item::{CreateMenuItem, MenuItem, MenuNode, UpdateMenuItem};
use sitecms_db::repositories::MenuItemRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::VisibleOnlyParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Menu item",
        id,
    })
}

/// GET /api/v1/menu
///
/// The whole menu as a nested tree, siblings ordered by `sort_order`.
/// With `visible_only`, hidden items and everything below them are left out.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<VisibleOnlyParams>,
) -> AppResult<Json<Vec<MenuNode>>> {
    let items = MenuItemRepo::list_all(&state.pool, params.visible_only).await?;
    let mut forest = tree::assemble(items);
    if params.visible_only {
        // Children of a hidden item are promoted to roots by `assemble`;
        // keep only real top-level items.
        forest.retain(|node| node.item.parent_id.is_none());
    }
    Ok(Json(forest))
}

/// POST /api/v1/menu
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMenuItem>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    input.validate()?;
    validate_menu_title(&input.title)?;
    if let Some(parent_id) = input.parent_id {
        if MenuItemRepo::find_by_id(&state.pool, parent_id).await?.is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Parent menu item {parent_id} does not exist"
            ))));
        }
    }

    let item = MenuItemRepo::create(&state.pool, &input).await?;
    tracing::info!(menu_item_id = item.id, parent_id = ?item.parent_id, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/menu/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MenuItem>> {
    let item = MenuItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// PUT/PATCH /api/v1/menu/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMenuItem>,
) -> AppResult<Json<MenuItem>> {
    input.validate()?;
    if let Some(title) = &input.title {
        validate_menu_title(title)?;
    }
    if MenuItemRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    if let Some(Some(new_parent)) = input.parent_id {
        let items = MenuItemRepo::list_all(&state.pool, false).await?;
        validate_reparent(&items, id, new_parent)?;
    }

    let item = MenuItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(menu_item_id = id, "Menu item updated");
    Ok(Json(item))
}

/// DELETE /api/v1/menu/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MenuItemRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(menu_item_id = id, "Menu item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
