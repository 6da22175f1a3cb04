//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Page-level helpers that
//! must share a transaction take `&mut PgConnection` instead.

pub mod block_repo;
pub mod for_journalist_repo;
pub mod library_item_repo;
pub mod menu_item_repo;
pub mod monitoring_zakon_repo;
pub mod news_repo;
pub mod page_repo;
pub mod project_repo;
pub mod rar_member_repo;
pub mod service_repo;

pub use block_repo::{BlockRepo, ReplaceMode};
pub use for_journalist_repo::ForJournalistRepo;
pub use library_item_repo::LibraryItemRepo;
pub use menu_item_repo::MenuItemRepo;
pub use monitoring_zakon_repo::MonitoringZakonRepo;
pub use news_repo::NewsRepo;
pub use page_repo::PageRepo;
pub use project_repo::ProjectRepo;
pub use rar_member_repo::RarMemberRepo;
pub use service_repo::ServiceRepo;
