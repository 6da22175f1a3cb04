//! Route definitions for the `/pages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at `/pages`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /slug/{slug}      -> get_by_slug
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// PATCH  /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/blocks      -> get_blocks
/// PUT    /{id}/blocks      -> replace_blocks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list).post(pages::create))
        .route("/slug/{slug}", get(pages::get_by_slug))
        .route(
            "/{id}",
            get(pages::get_by_id)
                .put(pages::update)
                .patch(pages::update)
                .delete(pages::delete),
        )
        .route(
            "/{id}/blocks",
            get(pages::get_blocks).put(pages::replace_blocks),
        )
}
