//! API Handlers
//!
//! Aggregation handlers for each route. Every handler is a pure function of
//! its validated path parameters plus upstream state: one or more provider
//! calls, cross-source reconciliation, then a typed response envelope.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::Uri,
    Json,
};
use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    corrected_revelation, ApiResponse, Ayah, HealthResponse, Juz, ServiceInfo, StatsResponse,
    Surah, SurahSummary,
};
use crate::upstream::UpstreamClient;

/// Number of surahs in the Quran.
pub const SURAH_COUNT: u16 = 114;

/// Number of juz sections in the Quran.
pub const JUZ_COUNT: u16 = 30;

/// Application state shared across all handlers.
///
/// Holds the response cache and the upstream client; both are injected here
/// once at startup rather than reached through globals.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<CacheStore>>,
    /// Shared client for the three data providers
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            cache: Arc::new(RwLock::new(CacheStore::new(config.cache_ttl))),
            upstream: Arc::new(UpstreamClient::new(config)?),
        })
    }
}

// == Validation ==
/// Parses a raw path parameter and checks it against an inclusive 1..=max
/// range. Non-numeric and out-of-range identifiers both surface as 404.
fn parse_in_range(raw: &str, max: u16, what: &str) -> Result<u16> {
    let number: u16 = raw
        .parse()
        .map_err(|_| ApiError::Validation(format!("{} '{}' is not a number", what, raw)))?;
    if number < 1 || number > max {
        return Err(ApiError::Validation(format!(
            "{} must be between 1 and {}",
            what, max
        )));
    }
    Ok(number)
}

/// Handler for GET /surah
///
/// Fetches the full surah list from the primary provider, applies the
/// revelation-place correction, and returns summaries ordered by number.
pub async fn get_all_surah(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SurahSummary>>>> {
    let mut list = state.upstream.surah_list().await?;
    for surah in &mut list {
        surah.revelation =
            corrected_revelation(surah.number, std::mem::take(&mut surah.revelation));
    }
    list.sort_by_key(|s| s.number);
    Ok(Json(ApiResponse::ok(list)))
}

/// Handler for GET /surah/:surah
///
/// Returns the full surah with its ayah sequence, per-ayah translation and
/// tafsir merged in, and the surah-level tafsir description.
pub async fn get_surah(
    State(state): State<AppState>,
    Path(surah): Path<String>,
) -> Result<Json<ApiResponse<Surah>>> {
    let number = parse_in_range(&surah, SURAH_COUNT, "Surah number")?;
    let surah = fetch_full_surah(&state, number).await?;
    Ok(Json(ApiResponse::ok(surah)))
}

/// Handler for GET /surah/:surah/:ayah
///
/// Validates the ayah index against the surah's real verse count, then
/// returns that single verse with its translation and tafsir.
pub async fn get_ayah_from_surah(
    State(state): State<AppState>,
    Path((surah, ayah)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Ayah>>> {
    let surah_number = parse_in_range(&surah, SURAH_COUNT, "Surah number")?;
    let ayah_number: u16 = ayah
        .parse()
        .map_err(|_| ApiError::Validation(format!("Ayah number '{}' is not a number", ayah)))?;

    let full = fetch_full_surah(&state, surah_number).await?;
    if ayah_number < 1 || ayah_number > full.number_of_ayahs {
        return Err(ApiError::Validation(format!(
            "Ayah number must be between 1 and {} for surah {}",
            full.number_of_ayahs, surah_number
        )));
    }

    let ayah = full
        .ayahs
        .into_iter()
        .find(|a| a.number == ayah_number)
        .ok_or_else(|| {
            ApiError::Validation(format!(
                "Ayah {} not found in surah {}",
                ayah_number, surah_number
            ))
        })?;

    Ok(Json(ApiResponse::ok(ayah)))
}

/// Handler for GET /juz/:juz
///
/// Returns the ordered verse range of one juz, tagged with the juz number.
pub async fn get_juz(
    State(state): State<AppState>,
    Path(juz): Path<String>,
) -> Result<Json<ApiResponse<Juz>>> {
    let number = parse_in_range(&juz, JUZ_COUNT, "Juz number")?;
    let juz = state.upstream.juz(number).await?;
    Ok(Json(ApiResponse::ok(juz)))
}

/// Assembles a complete surah from the three providers.
///
/// The text/audio, per-ayah tafsir, and surah-level tafsir calls run
/// concurrently; any provider failure fails the whole request. Missing
/// tafsir rows for individual ayahs degrade to empty values.
async fn fetch_full_surah(state: &AppState, number: u16) -> Result<Surah> {
    let (surah, rows, description) = tokio::join!(
        state.upstream.surah_with_audio(number),
        state.upstream.tafsir_rows(number),
        state.upstream.surah_tafsir(number),
    );

    let mut surah = surah?;
    surah.tafsir = description?;

    let mut by_ayah: HashMap<u16, _> = rows?.into_iter().map(|row| (row.ayah, row)).collect();
    for ayah in &mut surah.ayahs {
        if let Some(row) = by_ayah.remove(&ayah.number) {
            ayah.translation = row.translation;
            ayah.tafsir = row.tafsir;
        }
    }

    surah.revelation = corrected_revelation(surah.number, std::mem::take(&mut surah.revelation));
    Ok(surah)
}

/// Handler for GET /
///
/// Returns the informational service index: endpoints and data sources.
pub async fn service_info_handler() -> Json<ApiResponse<ServiceInfo>> {
    Json(ApiResponse::ok(ServiceInfo::new()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /stats
///
/// Returns current response cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.expirations,
        cache.len(),
    ))
}

/// Fallback handler for any unmatched method/path.
///
/// Echoes the requested path in the error message.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_range_accepts_bounds() {
        assert_eq!(parse_in_range("1", SURAH_COUNT, "Surah number").unwrap(), 1);
        assert_eq!(
            parse_in_range("114", SURAH_COUNT, "Surah number").unwrap(),
            114
        );
        assert_eq!(parse_in_range("30", JUZ_COUNT, "Juz number").unwrap(), 30);
    }

    #[test]
    fn test_parse_in_range_rejects_out_of_range() {
        assert!(parse_in_range("0", SURAH_COUNT, "Surah number").is_err());
        assert!(parse_in_range("115", SURAH_COUNT, "Surah number").is_err());
        assert!(parse_in_range("31", JUZ_COUNT, "Juz number").is_err());
    }

    #[test]
    fn test_parse_in_range_rejects_non_numeric() {
        let err = parse_in_range("abc", SURAH_COUNT, "Surah number").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        let err = parse_in_range("-3", JUZ_COUNT, "Juz number").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_app_state_from_config() {
        let state = AppState::from_config(&Config::default()).unwrap();
        assert!(state.cache.blocking_read().is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler_starts_empty() {
        let state = AppState::from_config(&Config::default()).unwrap();
        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
