//! Domain logic for the site content backend.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these types and functions.

pub mod blocks;
pub mod error;
pub mod library;
pub mod menu;
pub mod pagination;
pub mod slug;
pub mod tree;
pub mod types;
