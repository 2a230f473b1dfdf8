//! HTTP surface for the benchmark report
//!
//! Serves the landing page, the report page and a small JSON API, all backed
//! by one shared ReportService.

pub mod handlers;
pub mod pages;
pub mod service;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use service::ReportService;

pub fn router(service: Arc<ReportService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(handlers::landing))
        .route("/report", get(handlers::report_page))
        // API
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/benchmarks", get(handlers::get_benchmarks))
        .route("/api/v1/report", get(handlers::get_report))
        .route("/api/v1/encode", post(handlers::encode_input))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
