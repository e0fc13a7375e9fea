//! Axum route handlers for the Jobs API.

use axum::Json;
use chrono::Local;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::jobs::analytics::summarize;
use crate::jobs::export::export_jobs;
use crate::jobs::extract::ApiJson;
use crate::jobs::filters::FILTER_OPTIONS;
use crate::jobs::models::{
    AnalyticsRequest, AnalyticsSummary, ExportEnvelope, ExportRequest, FilterOptions,
    SearchRequest, SearchResponse,
};
use crate::jobs::search::run_search;

/// GET /api/jobs/filters
pub async fn handle_filters() -> Json<FilterOptions> {
    Json(FILTER_OPTIONS)
}

/// POST /api/jobs/search
///
/// Returns up to three sample listings templated from the search term.
pub async fn handle_search(
    ApiJson(request): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let response = run_search(request);
    info!(
        search_term = response.search_parameters.search_term.as_deref().unwrap_or(""),
        results = response.total_results,
        "Served sample search"
    );
    Ok(Json(response))
}

/// POST /api/jobs/analytics
pub async fn handle_analytics(
    ApiJson(request): ApiJson<AnalyticsRequest>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let summary = summarize(&request.jobs);
    debug!(
        total_jobs = summary.total_jobs,
        locations = summary.locations.len(),
        companies = summary.companies.len(),
        "Computed job analytics"
    );
    Ok(Json(summary))
}

/// POST /api/jobs/export
///
/// 400 on empty input or an unknown format; the payload is returned inline.
pub async fn handle_export(
    ApiJson(request): ApiJson<ExportRequest>,
) -> Result<Json<ExportEnvelope>, AppError> {
    let envelope = export_jobs(&request.jobs, &request.format, Local::now())?;
    info!(
        jobs = request.jobs.len(),
        format = envelope.content_type,
        filename = %envelope.filename,
        "Exported jobs"
    );
    Ok(Json(envelope))
}
