pub mod content;
pub mod for_journalist;
pub mod library;
pub mod menu;
pub mod monitoring_zakon;
pub mod news;
pub mod pages;
pub mod projects;
pub mod rar_members;
pub mod services;
