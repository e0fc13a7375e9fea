use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A job record as supplied by the client. The server never interprets these
/// beyond counting a couple of fields and re-serializing them, so they stay
/// untyped. Key order is preserved end to end.
pub type JobRecord = serde_json::Map<String, serde_json::Value>;

/// A synthesized job listing returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_min: u32,
    pub salary_max: u32,
    pub job_type: String,
    pub is_remote: bool,
    pub posted_date: String,
    pub source: String,
    pub url: String,
    pub description: String,
}

/// Selectable search parameters offered to the front-end.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FilterOptions {
    pub job_types: &'static [&'static str],
    pub sources: &'static [&'static str],
    /// Recency windows in hours: 1 day, 3 days, 1 week, 1 month.
    pub hours_old_options: &'static [u32],
    pub results_options: &'static [u32],
}

// ────────────────────────────────────────────────────────────────────────────
// Search
// ────────────────────────────────────────────────────────────────────────────

/// Search request body. Missing fields take their defaults; explicit `null`
/// is kept as `None` so it can be echoed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    #[serde(default = "default_blank")]
    pub search_term: Option<String>,
    #[serde(default = "default_blank")]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default = "default_not_remote")]
    pub is_remote: Option<bool>,
    #[serde(default = "default_results_wanted")]
    pub results_wanted: u64,
    /// Only echoed back, so any JSON value is accepted.
    #[serde(default)]
    pub hours_old: Option<serde_json::Value>,
    #[serde(default = "default_sources")]
    pub sources: Option<Vec<String>>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search_term: default_blank(),
            location: default_blank(),
            job_type: None,
            is_remote: default_not_remote(),
            results_wanted: default_results_wanted(),
            hours_old: None,
            sources: default_sources(),
        }
    }
}

fn default_blank() -> Option<String> {
    Some(String::new())
}

fn default_not_remote() -> Option<bool> {
    Some(false)
}

fn default_results_wanted() -> u64 {
    10
}

fn default_sources() -> Option<Vec<String>> {
    Some(vec!["indeed".to_string()])
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub jobs: Vec<JobListing>,
    pub total_results: usize,
    /// Seconds. Constant placeholder, no search actually runs.
    pub search_time: f64,
    pub search_parameters: SearchRequest,
}

// ────────────────────────────────────────────────────────────────────────────
// Analytics
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyticsRequest {
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
}

/// Placeholder salary figures. Not derived from the request.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SalaryStats {
    pub min_salary: u32,
    pub max_salary: u32,
    pub avg_min_salary: u32,
    pub avg_max_salary: u32,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub total_jobs: usize,
    pub sources: BTreeMap<String, usize>,
    pub job_types: BTreeMap<String, usize>,
    pub locations: BTreeMap<String, usize>,
    pub companies: BTreeMap<String, usize>,
    pub salary_stats: SalaryStats,
}

// ────────────────────────────────────────────────────────────────────────────
// Export
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Case-insensitive lookup; `None` for anything other than csv/json.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Serialized export returned inline instead of as a file download.
#[derive(Debug, Serialize)]
pub struct ExportEnvelope {
    pub data: String,
    pub filename: String,
    pub content_type: &'static str,
}
