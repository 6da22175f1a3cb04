//! Route definitions for the `/menu` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

/// Routes mounted at `/menu`.
///
/// ```text
/// GET    /                 -> list (nested tree)
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// PATCH  /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::list).post(menu::create))
        .route(
            "/{id}",
            get(menu::get_by_id)
                .put(menu::update)
                .patch(menu::update)
                .delete(menu::delete),
        )
}
