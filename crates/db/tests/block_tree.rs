//! Integration tests for block tree persistence: full replace and
//! materialization against a real database.

use serde_json::{json, Value};
use sitecms_core::blocks::{BlockInput, BlockNode};
use sitecms_core::types::DbId;
use sitecms_db::models::page::{CreatePage, PageTree};
use sitecms_db::repositories::{BlockRepo, PageRepo, ReplaceMode};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_page(title: &str) -> CreatePage {
    CreatePage {
        title: title.to_string(),
        slug: None,
        published_at: None,
        is_draft: None,
        blocks: None,
    }
}

fn blocks(value: Value) -> Vec<BlockInput> {
    serde_json::from_value(value).unwrap()
}

async fn create_page(pool: &PgPool, slug: &str) -> DbId {
    PageRepo::create(pool, &new_page(slug), slug, &[])
        .await
        .unwrap()
        .page
        .id
}

async fn load(pool: &PgPool, page_id: DbId) -> PageTree {
    PageRepo::find_tree_by_id(pool, page_id)
        .await
        .unwrap()
        .unwrap()
}

/// Structural view of a tree: everything except ids.
fn shape(nodes: &[BlockNode]) -> Value {
    Value::Array(
        nodes
            .iter()
            .map(|n| {
                json!({
                    "type": n.item.block_type,
                    "content": n.item.content,
                    "order": n.item.order,
                    "children": shape(&n.children),
                })
            })
            .collect(),
    )
}

fn collect_ids(nodes: &[BlockNode], out: &mut Vec<DbId>) {
    for n in nodes {
        out.push(n.item.id);
        collect_ids(&n.children, out);
    }
}

async fn block_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blocks")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

fn nested_submission() -> Vec<BlockInput> {
    blocks(json!([
        { "type": "COL01", "content": { "cols": 2 }, "order": 0, "children": [
            { "type": "TX01", "content": { "html": "<p>left</p>" }, "order": 0, "children": [
                { "type": "IMG01", "content": { "src": "a.png" }, "order": 0 }
            ]},
            { "type": "TX01", "content": { "html": "<p>right</p>" }, "order": 1 }
        ]},
        { "type": "TX01", "content": { "html": "<p>footer</p>" }, "order": 1 }
    ]))
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_round_trip_preserves_order_at_every_depth(pool: PgPool) {
    let page_id = create_page(&pool, "round-trip").await;
    BlockRepo::replace_for_page(&pool, page_id, &nested_submission(), ReplaceMode::AutoCommit)
        .await
        .unwrap();

    let tree = load(&pool, page_id).await;
    assert_eq!(
        shape(&tree.blocks),
        json!([
            { "type": "COL01", "content": { "cols": 2 }, "order": 0, "children": [
                { "type": "TX01", "content": { "html": "<p>left</p>" }, "order": 0, "children": [
                    { "type": "IMG01", "content": { "src": "a.png" }, "order": 0, "children": [] }
                ]},
                { "type": "TX01", "content": { "html": "<p>right</p>" }, "order": 1, "children": [] }
            ]},
            { "type": "TX01", "content": { "html": "<p>footer</p>" }, "order": 1, "children": [] }
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_roots_reordered_by_order_field(pool: PgPool) {
    let page_id = create_page(&pool, "reorder").await;
    let submitted = blocks(json!([
        { "type": "TX01", "content": { "html": "<p>A</p>" }, "order": 1 },
        { "type": "TX01", "content": { "html": "<p>B</p>" }, "order": 0 }
    ]));
    BlockRepo::replace_for_page(&pool, page_id, &submitted, ReplaceMode::AutoCommit)
        .await
        .unwrap();

    let tree = load(&pool, page_id).await;
    let html: Vec<_> = tree.blocks.iter().map(|n| n.item.content["html"].clone()).collect();
    assert_eq!(html, vec![json!("<p>B</p>"), json!("<p>A</p>")]);
    assert!(tree.blocks.iter().all(|n| n.children.is_empty()));
}

// ---------------------------------------------------------------------------
// Full replace
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_twice_yields_new_ids_same_shape(pool: PgPool) {
    let page_id = create_page(&pool, "idempotent").await;
    let submission = nested_submission();

    BlockRepo::replace_for_page(&pool, page_id, &submission, ReplaceMode::AutoCommit)
        .await
        .unwrap();
    let first = load(&pool, page_id).await;

    BlockRepo::replace_for_page(&pool, page_id, &submission, ReplaceMode::AutoCommit)
        .await
        .unwrap();
    let second = load(&pool, page_id).await;

    assert_eq!(shape(&first.blocks), shape(&second.blocks));

    let (mut a, mut b) = (Vec::new(), Vec::new());
    collect_ids(&first.blocks, &mut a);
    collect_ids(&second.blocks, &mut b);
    assert_eq!(a.len(), 5);
    assert!(a.iter().all(|id| !b.contains(id)));

    // Nothing from the first save lingers.
    assert_eq!(block_count(&pool).await, 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_depth_and_parent_chain_preserved(pool: PgPool) {
    let page_id = create_page(&pool, "depth").await;
    let rows =
        BlockRepo::replace_for_page(&pool, page_id, &nested_submission(), ReplaceMode::AutoCommit)
            .await
            .unwrap();

    // Roots carry the page, descendants only their parent.
    for row in &rows {
        assert_ne!(row.page_id.is_some(), row.parent_block_id.is_some());
    }

    let tree = load(&pool, page_id).await;
    assert_eq!(sitecms_core::tree::forest_depth(&tree.blocks), 3);

    let col = &tree.blocks[0];
    let left = &col.children[0];
    let img = &left.children[0];
    assert_eq!(col.item.parent_block_id, None);
    assert_eq!(left.item.parent_block_id, Some(col.item.id));
    assert_eq!(img.item.parent_block_id, Some(left.item.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_order_defaults_to_submission_index(pool: PgPool) {
    let page_id = create_page(&pool, "default-order").await;
    let submitted = blocks(json!([
        { "type": "A" },
        { "type": "B" },
        { "type": "C" }
    ]));
    BlockRepo::replace_for_page(&pool, page_id, &submitted, ReplaceMode::AutoCommit)
        .await
        .unwrap();

    let tree = load(&pool, page_id).await;
    let got: Vec<_> = tree
        .blocks
        .iter()
        .map(|n| (n.item.block_type.as_str(), n.item.order))
        .collect();
    assert_eq!(got, vec![("A", 0), ("B", 1), ("C", 2)]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_replace_removes_every_block(pool: PgPool) {
    let page_id = create_page(&pool, "empty").await;
    BlockRepo::replace_for_page(&pool, page_id, &nested_submission(), ReplaceMode::AutoCommit)
        .await
        .unwrap();

    let rows = BlockRepo::replace_for_page(&pool, page_id, &[], ReplaceMode::AutoCommit)
        .await
        .unwrap();
    assert!(rows.is_empty());
    assert!(load(&pool, page_id).await.blocks.is_empty());
    assert_eq!(block_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_content_passed_through_untouched(pool: PgPool) {
    let page_id = create_page(&pool, "opaque").await;
    let submitted = blocks(json!([
        { "type": "TX01", "content": { "arbitrary": { "nested": 1 } } }
    ]));
    BlockRepo::replace_for_page(&pool, page_id, &submitted, ReplaceMode::AutoCommit)
        .await
        .unwrap();

    let tree = load(&pool, page_id).await;
    assert_eq!(tree.blocks[0].item.content, json!({ "arbitrary": { "nested": 1 } }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_transactional_replace_matches_auto_commit(pool: PgPool) {
    let a = create_page(&pool, "auto").await;
    let b = create_page(&pool, "tx").await;
    BlockRepo::replace_for_page(&pool, a, &nested_submission(), ReplaceMode::AutoCommit)
        .await
        .unwrap();
    BlockRepo::replace_for_page(&pool, b, &nested_submission(), ReplaceMode::Transactional)
        .await
        .unwrap();

    assert_eq!(
        shape(&load(&pool, a).await.blocks),
        shape(&load(&pool, b).await.blocks)
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_bumps_page_version(pool: PgPool) {
    let page_id = create_page(&pool, "version").await;
    let before = load(&pool, page_id).await.page.updated_at;

    BlockRepo::replace_for_page(&pool, page_id, &nested_submission(), ReplaceMode::AutoCommit)
        .await
        .unwrap();

    let after = load(&pool, page_id).await.page.updated_at;
    assert!(after > before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blocks_of_other_pages_untouched(pool: PgPool) {
    let a = create_page(&pool, "page-a").await;
    let b = create_page(&pool, "page-b").await;
    BlockRepo::replace_for_page(&pool, a, &nested_submission(), ReplaceMode::AutoCommit)
        .await
        .unwrap();
    BlockRepo::replace_for_page(&pool, b, &nested_submission(), ReplaceMode::AutoCommit)
        .await
        .unwrap();

    BlockRepo::replace_for_page(&pool, a, &[], ReplaceMode::AutoCommit)
        .await
        .unwrap();
    assert_eq!(load(&pool, b).await.blocks.len(), 2);
    assert_eq!(block_count(&pool).await, 5);
}

// ---------------------------------------------------------------------------
// Cascade
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_delete_cascades_to_all_descendants(pool: PgPool) {
    let page_id = create_page(&pool, "cascade").await;
    BlockRepo::replace_for_page(&pool, page_id, &nested_submission(), ReplaceMode::AutoCommit)
        .await
        .unwrap();
    assert_eq!(block_count(&pool).await, 5);

    assert!(PageRepo::delete(&pool, page_id).await.unwrap());
    assert_eq!(block_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_blocks_in_one_call(pool: PgPool) {
    let input = new_page("With blocks");
    let tree = PageRepo::create(&pool, &input, "with-blocks", &nested_submission())
        .await
        .unwrap();
    assert_eq!(tree.page.slug, "with-blocks");
    assert!(tree.page.is_draft);
    assert_eq!(tree.blocks.len(), 2);
    assert_eq!(shape(&tree.blocks), shape(&load(&pool, tree.page.id).await.blocks));
}
