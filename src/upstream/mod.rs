//! Upstream Module
//!
//! Client and wire types for the three opaque data providers: Quran
//! text/metadata/audio, official translation + per-ayah tafsir, and
//! supplementary surah-level tafsir.

mod client;
pub mod types;

pub use client::{AyahTafsir, UpstreamClient};
