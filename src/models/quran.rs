//! Quran domain model
//!
//! Read-only snapshots assembled per request from upstream data. Field names
//! serialize as camelCase to keep the public wire format stable.

use serde::Serialize;

// == Revelation Place Overrides ==
/// Known data-quality patch: the primary provider reports Surah 13 (Ar-Ra'd)
/// and Surah 55 (Ar-Rahman) as Meccan, while Sahih International data lists
/// both as Medinan. The override is consulted after every upstream fetch.
pub const REVELATION_OVERRIDES: [(u16, &str); 2] = [(13, "Medinan"), (55, "Medinan")];

/// Returns the corrected revelation place for a surah.
///
/// Falls back to the upstream-reported value when no override exists.
pub fn corrected_revelation(number: u16, upstream: String) -> String {
    REVELATION_OVERRIDES
        .iter()
        .find(|(n, _)| *n == number)
        .map(|(_, place)| place.to_string())
        .unwrap_or(upstream)
}

// == Surah Summary ==
/// One row of the surah list: metadata without verse bodies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahSummary {
    /// Surah number, 1..=114
    pub number: u16,
    /// Arabic name
    pub name: String,
    /// Latin transliteration of the name
    pub transliteration: String,
    /// English translation of the name
    pub translation: String,
    /// Revelation place, "Meccan" or "Medinan" (after correction)
    pub revelation: String,
    /// Number of ayahs in the surah
    pub number_of_ayahs: u16,
}

// == Surah ==
/// A full surah with its ordered ayah sequence.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u16,
    pub name: String,
    pub transliteration: String,
    pub translation: String,
    pub revelation: String,
    pub number_of_ayahs: u16,
    /// Surah-level tafsir description from the supplementary provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tafsir: Option<String>,
    /// Ordered by ayah number within the surah
    pub ayahs: Vec<Ayah>,
}

// == Ayah ==
/// A single verse with its translation and optional tafsir/audio.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    /// Number of the surah this ayah belongs to
    pub surah: u16,
    /// Ayah number within the surah
    pub number: u16,
    /// Arabic text
    pub arab: String,
    /// Translation text, empty when the provider has none
    pub translation: String,
    /// Recitation audio URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    /// Per-ayah exegesis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tafsir: Option<TafsirText>,
}

// == Tafsir Text ==
/// Short and long form exegesis for one ayah.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TafsirText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

impl TafsirText {
    /// Returns None when both forms are absent so the ayah serializes
    /// without an empty tafsir object.
    pub fn from_parts(short: Option<String>, long: Option<String>) -> Option<Self> {
        if short.is_none() && long.is_none() {
            None
        } else {
            Some(Self { short, long })
        }
    }
}

// == Juz ==
/// One of the 30 recitation sections, possibly straddling multiple surahs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Juz {
    /// Juz number, 1..=30
    pub number: u16,
    /// Ordered verse sequence for the whole section
    pub ayahs: Vec<Ayah>,
}
