//! Raw upstream DTOs
//!
//! Wire shapes of the three data providers. Every field that can be absent
//! is `#[serde(default)]` so schema drift degrades to empty values instead
//! of failing the whole request.

use serde::Deserialize;

// == Provider Envelope ==
/// The `{ code, status, data }` envelope every provider wraps its payload in.
/// Only `data` is consumed; a missing `data` is treated as an upstream failure
/// by the client.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

// == Quran Provider ==
/// A surah as returned by the Quran text provider, both as a list row
/// (empty `ayahs`) and as an edition detail.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSurah {
    #[serde(default)]
    pub number: u16,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub english_name: String,
    #[serde(default)]
    pub english_name_translation: String,
    #[serde(default)]
    pub revelation_type: String,
    #[serde(default)]
    pub number_of_ayahs: u16,
    #[serde(default)]
    pub ayahs: Vec<CloudAyah>,
}

/// One verse inside a surah or juz payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudAyah {
    #[serde(default)]
    pub number_in_surah: u16,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub audio: Option<String>,
    /// Back-reference present in juz payloads only
    #[serde(default)]
    pub surah: Option<CloudSurahRef>,
}

/// Minimal surah back-reference attached to juz verses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSurahRef {
    #[serde(default)]
    pub number: u16,
}

/// A juz edition with its ordered verse range.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudJuz {
    #[serde(default)]
    pub ayahs: Vec<CloudAyah>,
}

// == Translation / Tafsir Provider ==
/// Per-ayah translation and tafsir row from the official provider.
#[derive(Debug, Deserialize)]
pub struct TafsirRow {
    #[serde(default)]
    pub ayah: u16,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub tafsir: Option<TafsirPayload>,
}

/// Short/long tafsir bodies, either of which the provider may omit.
#[derive(Debug, Deserialize)]
pub struct TafsirPayload {
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
}

// == Surah Tafsir Provider ==
/// Surah-level payload of the supplementary tafsir provider.
#[derive(Debug, Deserialize)]
pub struct SurahTafsir {
    #[serde(default)]
    pub description: Option<String>,
}
