//! Route definitions for the content wrapper resources.
//!
//! Every wrapper exposes the same surface:
//!
//! ```text
//! GET    /                 -> list
//! POST   /                 -> create
//! GET    /slug/{slug}      -> get_by_slug
//! GET    /{id}             -> get_by_id
//! PUT    /{id}             -> update
//! PATCH  /{id}             -> update
//! DELETE /{id}             -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{
    for_journalist, library, monitoring_zakon, news, projects, rar_members, services,
};
use crate::state::AppState;

/// Build the standard wrapper router from a handler module.
macro_rules! content_router {
    ($handlers:ident) => {
        Router::new()
            .route("/", get($handlers::list).post($handlers::create))
            .route("/slug/{slug}", get($handlers::get_by_slug))
            .route(
                "/{id}",
                get($handlers::get_by_id)
                    .put($handlers::update)
                    .patch($handlers::update)
                    .delete($handlers::delete),
            )
    };
}

/// Routes mounted at `/news`.
pub fn news_router() -> Router<AppState> {
    content_router!(news)
}

/// Routes mounted at `/projects`.
pub fn projects_router() -> Router<AppState> {
    content_router!(projects)
}

/// Routes mounted at `/services`.
pub fn services_router() -> Router<AppState> {
    content_router!(services)
}

/// Routes mounted at `/monitoring-zakon`.
pub fn monitoring_zakon_router() -> Router<AppState> {
    content_router!(monitoring_zakon)
}

/// Routes mounted at `/rar-members`.
pub fn rar_members_router() -> Router<AppState> {
    content_router!(rar_members)
}

/// Routes mounted at `/for-journalist`.
pub fn for_journalist_router() -> Router<AppState> {
    content_router!(for_journalist)
}

/// Routes mounted at `/library`. `GET /` also accepts `?item_type=`.
pub fn library_router() -> Router<AppState> {
    content_router!(library)
}
