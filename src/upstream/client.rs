//! Upstream Client Module
//!
//! Outbound HTTP calls to the three data providers, with mapping from the
//! raw provider DTOs into the internal domain representations. One shared
//! `reqwest` client with a fixed per-call timeout; calls are never retried.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{Ayah, Juz, Surah, SurahSummary, TafsirText};
use crate::upstream::types::{CloudJuz, CloudSurah, Envelope, SurahTafsir, TafsirRow};

/// Edition pair requested from the Quran provider for surah details:
/// Arabic text plus a recitation audio URL per ayah.
const SURAH_EDITIONS: &str = "quran-uthmani,ar.alafasy";

/// Edition pair requested for juz ranges: Arabic text plus translation.
const JUZ_EDITIONS: &str = "quran-uthmani,id.indonesian";

// == Ayah Tafsir ==
/// Per-ayah translation and tafsir, keyed by ayah number during merging.
#[derive(Debug, Clone)]
pub struct AyahTafsir {
    pub ayah: u16,
    pub translation: String,
    pub tafsir: Option<TafsirText>,
}

// == Upstream Client ==
/// HTTP client for the three upstream data providers.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    quran_base: String,
    tafsir_base: String,
    surah_tafsir_base: String,
}

impl UpstreamClient {
    // == Constructor ==
    /// Creates a client with the configured base URLs and per-call timeout.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout))
            .build()
            .context("building upstream HTTP client")?;

        Ok(Self {
            http,
            quran_base: config.quran_api_url.trim_end_matches('/').to_string(),
            tafsir_base: config.tafsir_api_url.trim_end_matches('/').to_string(),
            surah_tafsir_base: config.surah_tafsir_api_url.trim_end_matches('/').to_string(),
        })
    }

    // == Surah List ==
    /// Fetches the full surah list (metadata only, no verse bodies).
    pub async fn surah_list(&self) -> Result<Vec<SurahSummary>> {
        let url = format!("{}/surah", self.quran_base);
        let rows: Vec<CloudSurah> = self.get_data(&url).await?;
        Ok(rows.into_iter().map(summary_from_cloud).collect())
    }

    // == Surah Detail ==
    /// Fetches one surah's Arabic text and per-ayah audio.
    ///
    /// Translations and tafsir are merged in later by the handler; the
    /// returned ayahs carry empty translations.
    pub async fn surah_with_audio(&self, number: u16) -> Result<Surah> {
        let url = format!(
            "{}/surah/{}/editions/{}",
            self.quran_base, number, SURAH_EDITIONS
        );
        let editions: Vec<CloudSurah> = self.get_data(&url).await?;
        let mut editions = editions.into_iter();
        let text = editions
            .next()
            .ok_or_else(|| ApiError::Upstream(format!("{} returned no editions", url)))?;
        Ok(surah_from_editions(text, editions.next()))
    }

    // == Juz ==
    /// Fetches one juz's verse range with Arabic text and translation.
    pub async fn juz(&self, number: u16) -> Result<Juz> {
        let url = format!("{}/juz/{}/editions/{}", self.quran_base, number, JUZ_EDITIONS);
        let editions: Vec<CloudJuz> = self.get_data(&url).await?;
        let mut editions = editions.into_iter();
        let arab = editions
            .next()
            .ok_or_else(|| ApiError::Upstream(format!("{} returned no editions", url)))?;
        Ok(juz_from_editions(number, arab, editions.next()))
    }

    // == Per-Ayah Tafsir ==
    /// Fetches translation and tafsir rows for every ayah of a surah.
    pub async fn tafsir_rows(&self, surah: u16) -> Result<Vec<AyahTafsir>> {
        let url = format!("{}/quran-tafsir/{}", self.tafsir_base, surah);
        let rows: Vec<TafsirRow> = self.get_data(&url).await?;
        Ok(rows
            .into_iter()
            .map(|row| AyahTafsir {
                ayah: row.ayah,
                translation: row.translation,
                tafsir: row
                    .tafsir
                    .and_then(|t| TafsirText::from_parts(t.short, t.long)),
            })
            .collect())
    }

    // == Surah-Level Tafsir ==
    /// Fetches the supplementary surah-level tafsir description.
    ///
    /// A payload without a description degrades to None rather than failing.
    pub async fn surah_tafsir(&self, number: u16) -> Result<Option<String>> {
        let url = format!("{}/surah/{}", self.surah_tafsir_base, number);
        let data: SurahTafsir = self.get_data(&url).await?;
        Ok(data.description)
    }

    // == Fetch Helper ==
    /// Issues a GET, unwraps the provider envelope, and maps every failure
    /// mode (network error, timeout, non-2xx, missing data) to an upstream
    /// error.
    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "upstream request");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream(format!("{} returned {}", url, status)));
        }
        let envelope: Envelope<T> = response.json().await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Upstream(format!("{} returned no data", url)))
    }
}

// == Mapping Helpers ==

fn summary_from_cloud(row: CloudSurah) -> SurahSummary {
    SurahSummary {
        number: row.number,
        name: row.name,
        transliteration: row.english_name,
        translation: row.english_name_translation,
        revelation: row.revelation_type,
        number_of_ayahs: row.number_of_ayahs,
    }
}

/// Merges the text edition with the audio edition of the same surah.
///
/// Audio is matched per ayah number; a missing or short audio edition just
/// leaves those ayahs without audio.
fn surah_from_editions(text: CloudSurah, audio: Option<CloudSurah>) -> Surah {
    let audio_by_ayah: HashMap<u16, String> = audio
        .map(|edition| {
            edition
                .ayahs
                .into_iter()
                .filter_map(|a| a.audio.map(|url| (a.number_in_surah, url)))
                .collect()
        })
        .unwrap_or_default();

    let number = text.number;
    let ayahs: Vec<Ayah> = text
        .ayahs
        .into_iter()
        .map(|a| Ayah {
            surah: number,
            number: a.number_in_surah,
            arab: a.text,
            translation: String::new(),
            audio: audio_by_ayah.get(&a.number_in_surah).cloned(),
            tafsir: None,
        })
        .collect();

    let number_of_ayahs = if text.number_of_ayahs > 0 {
        text.number_of_ayahs
    } else {
        ayahs.len() as u16
    };

    Surah {
        number,
        name: text.name,
        transliteration: text.english_name,
        translation: text.english_name_translation,
        revelation: text.revelation_type,
        number_of_ayahs,
        tafsir: None,
        ayahs,
    }
}

/// Merges the Arabic edition with the translation edition of a juz.
///
/// The two editions cover the identical verse range, so translations are
/// matched positionally; a missing or short translation edition leaves the
/// remaining ayahs with empty translations.
fn juz_from_editions(number: u16, arab: CloudJuz, translation: Option<CloudJuz>) -> Juz {
    let translations: Vec<String> = translation
        .map(|edition| edition.ayahs.into_iter().map(|a| a.text).collect())
        .unwrap_or_default();

    let ayahs = arab
        .ayahs
        .into_iter()
        .enumerate()
        .map(|(i, a)| Ayah {
            surah: a.surah.map(|s| s.number).unwrap_or_default(),
            number: a.number_in_surah,
            arab: a.text,
            translation: translations.get(i).cloned().unwrap_or_default(),
            audio: a.audio,
            tafsir: None,
        })
        .collect();

    Juz { number, ayahs }
}
