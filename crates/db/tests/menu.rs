//! Integration tests for the menu tree.

use sitecms_core::tree;
use sitecms_db::models::menu_item::{CreateMenuItem, UpdateMenuItem};
use sitecms_db::repositories::MenuItemRepo;
use sqlx::PgPool;

fn item(title: &str, parent_id: Option<i64>, sort_order: i32) -> CreateMenuItem {
    CreateMenuItem {
        title: title.to_string(),
        url: Some(format!("/{}", title.to_lowercase())),
        parent_id,
        sort_order: Some(sort_order),
        is_visible: None,
    }
}

fn no_changes() -> UpdateMenuItem {
    UpdateMenuItem {
        title: None,
        url: None,
        parent_id: None,
        sort_order: None,
        is_visible: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_menu_tree_assembled_in_sort_order(pool: PgPool) {
    let about = MenuItemRepo::create(&pool, &item("About", None, 1)).await.unwrap();
    let home = MenuItemRepo::create(&pool, &item("Home", None, 0)).await.unwrap();
    MenuItemRepo::create(&pool, &item("Team", Some(about.id), 1)).await.unwrap();
    MenuItemRepo::create(&pool, &item("History", Some(about.id), 0)).await.unwrap();

    let items = MenuItemRepo::list_all(&pool, false).await.unwrap();
    let forest = tree::assemble(items);

    let roots: Vec<_> = forest.iter().map(|n| n.item.id).collect();
    assert_eq!(roots, vec![home.id, about.id]);
    let children: Vec<_> = forest[1].children.iter().map(|n| n.item.title.as_str()).collect();
    assert_eq!(children, vec!["History", "Team"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_parent_explicit_null_moves_to_top(pool: PgPool) {
    let root = MenuItemRepo::create(&pool, &item("Root", None, 0)).await.unwrap();
    let child = MenuItemRepo::create(&pool, &item("Child", Some(root.id), 0)).await.unwrap();

    // Absent parent_id keeps the current parent.
    let kept = MenuItemRepo::update(&pool, child.id, &no_changes())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.parent_id, Some(root.id));

    let moved = MenuItemRepo::update(
        &pool,
        child.id,
        &UpdateMenuItem {
            parent_id: Some(None),
            ..no_changes()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(moved.parent_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_subtree(pool: PgPool) {
    let root = MenuItemRepo::create(&pool, &item("Root", None, 0)).await.unwrap();
    let child = MenuItemRepo::create(&pool, &item("Child", Some(root.id), 0)).await.unwrap();
    MenuItemRepo::create(&pool, &item("Leaf", Some(child.id), 0)).await.unwrap();

    assert!(MenuItemRepo::delete(&pool, root.id).await.unwrap());
    assert!(MenuItemRepo::list_all(&pool, false).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_visible_only_filters_hidden_items(pool: PgPool) {
    MenuItemRepo::create(&pool, &item("Shown", None, 0)).await.unwrap();
    let hidden = CreateMenuItem {
        is_visible: Some(false),
        ..item("Hidden", None, 1)
    };
    MenuItemRepo::create(&pool, &hidden).await.unwrap();

    let visible = MenuItemRepo::list_all(&pool, true).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Shown");
}
