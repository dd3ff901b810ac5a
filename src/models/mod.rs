//! Domain and response models for the aggregator API
//!
//! `quran` holds the read-only domain snapshots assembled per request,
//! `responses` the HTTP-facing envelope and informational bodies.

pub mod quran;
pub mod responses;

// Re-export commonly used types
pub use quran::{corrected_revelation, Ayah, Juz, Surah, SurahSummary, TafsirText};
pub use responses::{ApiResponse, HealthResponse, ServiceInfo, StatsResponse};
