pub mod content;
pub mod health;
pub mod menu;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pages                                      list, create
/// /pages/slug/{slug}                          get by slug
/// /pages/{id}                                 get, update, delete
/// /pages/{id}/blocks                          get tree, full replace
///
/// /news                                       list, create
/// /news/slug/{slug}                           get by page slug
/// /news/{id}                                  get, update, delete
///
/// /projects, /services, /monitoring-zakon,
/// /rar-members, /for-journalist, /library     same surface as /news
///
/// /menu                                       nested tree, create
/// /menu/{id}                                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pages", pages::router())
        .nest("/news", content::news_router())
        .nest("/projects", content::projects_router())
        .nest("/services", content::services_router())
        .nest("/monitoring-zakon", content::monitoring_zakon_router())
        .nest("/rar-members", content::rar_members_router())
        .nest("/for-journalist", content::for_journalist_router())
        .nest("/library", content::library_router())
        .nest("/menu", menu::router())
}
