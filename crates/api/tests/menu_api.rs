//! HTTP-level integration tests for `/api/v1/menu`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_item(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/menu", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_menu_returns_nested_tree(pool: PgPool) {
    let about = create_item(&pool, json!({ "title": "About", "sort_order": 1 })).await;
    create_item(&pool, json!({ "title": "Home", "url": "/", "sort_order": 0 })).await;
    create_item(&pool, json!({ "title": "Team", "parent_id": about })).await;

    let response = get(common::build_test_app(pool), "/api/v1/menu").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["title"], "Home");
    assert_eq!(json[1]["title"], "About");
    assert_eq!(json[1]["children"][0]["title"], "Team");
    assert_eq!(json[1]["children"][0]["children"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_visible_only_drops_hidden_subtrees(pool: PgPool) {
    let hidden = create_item(&pool, json!({ "title": "Hidden", "is_visible": false })).await;
    create_item(&pool, json!({ "title": "Under hidden", "parent_id": hidden })).await;
    create_item(&pool, json!({ "title": "Shown" })).await;

    let response = get(common::build_test_app(pool), "/api/v1/menu?visible_only=true").await;
    let json = body_json(response).await;
    let roots = json.as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["title"], "Shown");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_missing_parent_returns_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/menu",
        json!({ "title": "Lost", "parent_id": 999999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reparent_under_descendant_rejected(pool: PgPool) {
    let root = create_item(&pool, json!({ "title": "Root" })).await;
    let child = create_item(&pool, json!({ "title": "Child", "parent_id": root })).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/menu/{root}"),
        json!({ "parent_id": child }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/menu/{child}"),
        json!({ "parent_id": null, "title": "Promoted" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["parent_id"], serde_json::Value::Null);
    assert_eq!(json["title"], "Promoted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_menu_item(pool: PgPool) {
    let root = create_item(&pool, json!({ "title": "Root" })).await;
    create_item(&pool, json!({ "title": "Child", "parent_id": root })).await;

    let uri = format!("/api/v1/menu/{root}");
    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool.clone()), "/api/v1/menu").await;
    assert_eq!(body_json(response).await, json!([]));

    let response = delete(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
