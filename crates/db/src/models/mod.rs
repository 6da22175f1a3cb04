//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod block;
pub mod content;
pub mod for_journalist;
pub mod library_item;
pub mod menu_item;
pub mod monitoring_zakon;
pub mod news;
pub mod page;
pub mod project;
pub mod rar_member;
pub mod service;
