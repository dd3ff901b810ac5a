//! Configuration Module
//!
//! Server configuration loaded from environment variables, every knob with
//! a usable default. The upstream base URLs are overridable so tests can
//! point the client at local mock servers.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (`SERVER_PORT`, default 3000)
    pub server_port: u16,
    /// TTL in seconds for cached response bodies (`CACHE_TTL`, default
    /// 86400, matching the outward `s-maxage`)
    pub cache_ttl: u64,
    /// Seconds between expired-entry sweeps (`CLEANUP_INTERVAL`, default 300)
    pub cleanup_interval: u64,
    /// Timeout in seconds per upstream HTTP call (`UPSTREAM_TIMEOUT`,
    /// default 10)
    pub upstream_timeout: u64,
    /// Base URL of the Quran text/metadata/audio provider (`QURAN_API_URL`)
    pub quran_api_url: String,
    /// Base URL of the translation + per-ayah tafsir provider
    /// (`TAFSIR_API_URL`)
    pub tafsir_api_url: String,
    /// Base URL of the supplementary surah-level tafsir provider
    /// (`SURAH_TAFSIR_API_URL`)
    pub surah_tafsir_api_url: String,
}

/// Reads an environment variable, falling back to `default` when the
/// variable is unset or unparsable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Loads the configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            server_port: env_or("SERVER_PORT", 3000),
            cache_ttl: env_or("CACHE_TTL", 86_400),
            cleanup_interval: env_or("CLEANUP_INTERVAL", 300),
            upstream_timeout: env_or("UPSTREAM_TIMEOUT", 10),
            quran_api_url: env_or("QURAN_API_URL", "https://api.alquran.cloud/v1".to_string()),
            tafsir_api_url: env_or(
                "TAFSIR_API_URL",
                "https://web-api.qurankemenag.net".to_string(),
            ),
            surah_tafsir_api_url: env_or(
                "SURAH_TAFSIR_API_URL",
                "https://quran-api-id.vercel.app".to_string(),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: 86_400,
            cleanup_interval: 300,
            upstream_timeout: 10,
            quran_api_url: "https://api.alquran.cloud/v1".to_string(),
            tafsir_api_url: "https://web-api.qurankemenag.net".to_string(),
            surah_tafsir_api_url: "https://quran-api-id.vercel.app".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_ttl_default_matches_outward_s_maxage() {
        assert_eq!(Config::default().cache_ttl, 86_400);
    }

    #[test]
    fn test_env_or_falls_back_on_unset_or_garbage() {
        env::remove_var("QURAN_API_TEST_UNSET");
        assert_eq!(env_or("QURAN_API_TEST_UNSET", 42u64), 42);

        env::set_var("QURAN_API_TEST_GARBAGE", "not-a-number");
        assert_eq!(env_or("QURAN_API_TEST_GARBAGE", 7u16), 7);
        env::remove_var("QURAN_API_TEST_GARBAGE");
    }

    #[test]
    fn test_from_env_defaults() {
        for name in [
            "SERVER_PORT",
            "CACHE_TTL",
            "CLEANUP_INTERVAL",
            "UPSTREAM_TIMEOUT",
            "QURAN_API_URL",
            "TAFSIR_API_URL",
            "SURAH_TAFSIR_API_URL",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_timeout, 10);
        assert_eq!(config.quran_api_url, "https://api.alquran.cloud/v1");
        assert!(config.tafsir_api_url.starts_with("https://"));
    }
}
