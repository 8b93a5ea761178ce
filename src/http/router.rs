//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Manifest upload + job management
        .route("/uploads", post(handlers::upload_manifest))
        .route("/jobs/{job_id}", get(handlers::get_job_status))
        .route("/jobs/{job_id}/logs", get(handlers::stream_job_logs))
        // Records and pricing
        .route("/records", get(handlers::list_records))
        .route("/records/{record_id}/segmentation", get(handlers::get_segmentation))
        .route("/records/{record_id}/price", get(handlers::get_price))
        .route("/records/{record_id}/conversion", post(handlers::convert_record))
        .route("/records/{record_id}/rate-selection", post(handlers::select_rate))
        // Route intelligence
        .route("/routes/alternatives", get(handlers::get_alternatives))
        .route("/transit-rates/{rate_id}/options", get(handlers::get_transit_options))
        // Registry snapshots
        .route(
            "/registries/airport-codes",
            get(handlers::list_airport_codes).put(handlers::replace_airport_codes),
        )
        .route(
            "/registries/flights",
            get(handlers::list_flights).put(handlers::replace_flights),
        )
        .route(
            "/registries/sector-rates",
            get(handlers::list_sector_rates).put(handlers::replace_sector_rates),
        )
        .route(
            "/registries/transit-rates",
            get(handlers::list_transit_rates).put(handlers::replace_transit_rates),
        )
        .route(
            "/registries/customers",
            get(handlers::list_customers).put(handlers::replace_customers),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Allow large manifest payloads during uploads.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
