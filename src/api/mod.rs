//! API Module
//!
//! HTTP handlers, caching middleware, and routing for the aggregator.
//!
//! # Endpoints
//! - `GET /` - Informational service index
//! - `GET /surah` - All surah summaries
//! - `GET /surah/:surah` - Full surah with ayahs and tafsir
//! - `GET /surah/:surah/:ayah` - Single ayah
//! - `GET /juz/:juz` - Verse range of one juz
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Response cache statistics

pub mod caching;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
