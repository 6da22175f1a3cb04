//! Response shapes shared by every content wrapper (news, projects, ...).

use serde::Serialize;

use crate::models::page::{Page, PageTree};

/// A content wrapper with its page and full block tree.
///
/// Serializes as `{...wrapper fields, page: {...page fields, blocks: [...]}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ContentItem<T> {
    #[serde(flatten)]
    pub item: T,
    pub page: PageTree,
}

/// A content wrapper with its page metadata only, for list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ContentSummary<T> {
    #[serde(flatten)]
    pub item: T,
    pub page: Page,
}
