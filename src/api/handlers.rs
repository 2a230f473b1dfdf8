//! REST and page handlers
//!
//! These handlers use the shared ReportService.

use axum::{
    extract::{rejection::JsonRejection, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::pages;
use super::service::ReportService;
use crate::benchmarks::Benchmarks;
use crate::codec;
use crate::insights::{DerivedReport, ReportVariant};
use crate::models::BenchmarkInput;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub input: BenchmarkInput,
    pub variant: ReportVariant,
    pub report: DerivedReport,
    pub report_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeResponse {
    pub query: String,
    pub report_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Report variant carried alongside the input fields; the first `variant`
/// wins like every other report key
fn requested_variant(query: &str) -> Result<Option<ReportVariant>, ApiError> {
    match codec::query_value(query, "variant").as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(bad_request),
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub type AppState = Arc<ReportService>;

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /
pub async fn landing() -> Html<String> {
    Html(pages::landing_page())
}

/// GET /report
pub async fn report_page(
    State(service): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, ApiError> {
    let query = query.unwrap_or_default();
    let variant = requested_variant(&query)?;
    let report = service.report_for_query(&query, variant);
    Ok(Html(pages::report_page(&report, service.benchmarks())))
}

/// GET /api/v1/benchmarks
pub async fn get_benchmarks(State(service): State<AppState>) -> Json<Benchmarks> {
    Json(*service.benchmarks())
}

/// GET /api/v1/report
pub async fn get_report(
    State(service): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ReportResponse>, ApiError> {
    let query = query.unwrap_or_default();
    let variant = requested_variant(&query)?;
    let report = service.report_for_query(&query, variant);
    let report_url = codec::report_url(&report.input);
    Ok(Json(ReportResponse {
        input: report.input,
        variant: report.variant,
        report: report.derived,
        report_url,
    }))
}

/// POST /api/v1/encode
pub async fn encode_input(
    payload: Result<Json<BenchmarkInput>, JsonRejection>,
) -> Result<Json<EncodeResponse>, ApiError> {
    let Json(input) = payload.map_err(|e| bad_request(e.body_text()))?;
    Ok(Json(EncodeResponse {
        query: codec::encode(&input),
        report_url: codec::report_url(&input),
    }))
}
