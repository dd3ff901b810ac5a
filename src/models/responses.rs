//! Response DTOs for the aggregator API
//!
//! Defines the uniform response envelope and the bodies of the
//! informational endpoints.

use serde::Serialize;

/// Uniform response envelope for every route.
///
/// `code` mirrors the HTTP status, `status` carries its canonical reason,
/// `data` is present only on success and `message` only when there is
/// something to say.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub code: u16,
    /// Canonical reason phrase for the status
    pub status: String,
    /// Human-readable note, mostly used by error responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a 200 OK envelope around a payload.
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            status: "OK".to_string(),
            message: None,
            data: Some(data),
        }
    }
}

/// Body of the informational index page (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Short description of what the service does
    pub description: String,
    /// Available endpoints
    pub endpoints: Vec<EndpointInfo>,
    /// Upstream data sources
    pub sources: Vec<SourceInfo>,
}

/// One routable endpoint, as listed on the index page.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

/// One upstream data source, as listed on the index page.
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub name: String,
    pub provides: String,
}

impl ServiceInfo {
    /// Builds the static service index.
    pub fn new() -> Self {
        let endpoint = |method: &str, path: &str, description: &str| EndpointInfo {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        };
        let source = |name: &str, provides: &str| SourceInfo {
            name: name.to_string(),
            provides: provides.to_string(),
        };

        Self {
            name: "Quran API".to_string(),
            description: "RESTful API service for accessing the Holy Quran: \
                          verses, chapters, translations, and tafsir"
                .to_string(),
            endpoints: vec![
                endpoint("GET", "/surah", "List all 114 surahs with their basic information"),
                endpoint("GET", "/surah/{surah}", "A specific surah with all its verses and tafsir"),
                endpoint("GET", "/surah/{surah}/{ayah}", "A single verse with translation and tafsir"),
                endpoint("GET", "/juz/{juz}", "All verses of one of the 30 juz sections"),
            ],
            sources: vec![
                source("api.alquran.cloud", "Quran text, verse metadata, audio recitations"),
                source("quran.kemenag.go.id", "Official Indonesian translations and per-ayah tafsir"),
                source("Al-Quran-ID-API", "Indonesian tafsir for each surah"),
            ],
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving
    pub status: String,
    /// ISO 8601 timestamp of the check
    pub timestamp: String,
}

impl HealthResponse {
    /// Stamps a healthy status with the current time.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Body of the cache stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups answered from a stored body
    pub hits: u64,
    /// Lookups that fell through to a handler
    pub misses: u64,
    /// Entries dropped after their TTL elapsed
    pub expirations: u64,
    /// Responses currently cached
    pub total_entries: usize,
    /// hits / (hits + misses), 0.0 before any lookup
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Combines the cache counters with the current entry count.
    pub fn new(hits: u64, misses: u64, expirations: u64, total_entries: usize) -> Self {
        let lookups = hits + misses;
        Self {
            hits,
            misses,
            expirations,
            total_entries,
            hit_rate: if lookups > 0 {
                hits as f64 / lookups as f64
            } else {
                0.0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_serialize() {
        let resp = ApiResponse::ok(vec![1, 2, 3]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"code\":200"));
        assert!(json.contains("\"status\":\"OK\""));
        assert!(json.contains("\"data\":[1,2,3]"));
        assert!(!json.contains("message"));
    }

    #[test]
    fn test_service_info_lists_all_endpoints() {
        let info = ServiceInfo::new();
        assert_eq!(info.endpoints.len(), 4);
        assert_eq!(info.sources.len(), 3);
        assert!(info.endpoints.iter().any(|e| e.path == "/juz/{juz}"));
    }

    #[test]
    fn test_health_body_carries_status_and_timestamp() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_stats_hit_rate_is_derived() {
        let resp = StatsResponse::new(80, 20, 5, 100);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);

        let idle = StatsResponse::new(0, 0, 0, 0);
        assert_eq!(idle.hit_rate, 0.0);
    }
}
