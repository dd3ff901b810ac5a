//! API Routes
//!
//! Configures the Axum router with all aggregator endpoints.

use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::caching::cache_layer;
use super::handlers::{
    get_all_surah, get_ayah_from_surah, get_juz, get_surah, health_handler, route_not_found,
    service_info_handler, stats_handler, AppState,
};

/// `Cache-Control` sent on every response, cache hits and errors included.
/// The `s-maxage` mirrors the default response cache TTL.
const CACHE_CONTROL_VALUE: &str = "public, max-age=0, s-maxage=86400, stale-while-revalidate";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Informational service index
/// - `GET /surah` - All 114 surah summaries (cached)
/// - `GET /surah/:surah` - Full surah with ayahs and tafsir (cached)
/// - `GET /surah/:surah/:ayah` - Single ayah (cached)
/// - `GET /juz/:juz` - Verse range of one juz (cached)
/// - `GET /health` - Health check endpoint
/// - `GET /stats` - Response cache statistics
/// - anything else - 404 echoing the requested path
///
/// # Middleware
/// - Caching: memoizes the four data routes by normalized path
/// - Cache-Control: CDN-facing header on every response
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The four data routes sit behind the caching middleware; the
    // informational endpoints are always computed fresh. Non-GET methods on
    // known paths fall through to the same 404 as unknown paths.
    let cached = Router::new()
        .route("/surah", get(get_all_surah).fallback(route_not_found))
        .route("/surah/:surah", get(get_surah).fallback(route_not_found))
        .route(
            "/surah/:surah/:ayah",
            get(get_ayah_from_surah).fallback(route_not_found),
        )
        .route("/juz/:juz", get(get_juz).fallback(route_not_found))
        .route_layer(middleware::from_fn_with_state(state.clone(), cache_layer));

    Router::new()
        .route("/", get(service_info_handler).fallback(route_not_found))
        .route("/health", get(health_handler).fallback(route_not_found))
        .route("/stats", get(stats_handler).fallback(route_not_found))
        .merge(cached)
        .fallback(route_not_found)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VALUE),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
