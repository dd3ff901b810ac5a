//! Quran API - A read-only REST aggregator
//!
//! Republishes Quran text, translations, and tafsir from three upstream
//! data providers, merged into a unified JSON shape and cached per request
//! path.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
