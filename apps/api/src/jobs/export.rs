//! Export — re-serializes client job records as CSV or pretty JSON.
//!
//! The result is returned inline in an [`ExportEnvelope`] so the browser can
//! build the download itself.

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::errors::AppError;
use crate::jobs::models::{ExportEnvelope, ExportFormat, JobRecord};

/// Validates the request and produces the export envelope.
///
/// Empty input is rejected before the format is looked at.
pub fn export_jobs(
    jobs: &[JobRecord],
    raw_format: &str,
    now: DateTime<Local>,
) -> Result<ExportEnvelope, AppError> {
    if jobs.is_empty() {
        return Err(AppError::Validation("No jobs data provided".to_string()));
    }

    let format = ExportFormat::parse(raw_format).ok_or_else(|| {
        AppError::Validation("Unsupported format. Use csv or json".to_string())
    })?;

    let data = match format {
        ExportFormat::Csv => to_csv(jobs)?,
        ExportFormat::Json => to_json(jobs)?,
    };

    Ok(ExportEnvelope {
        data,
        filename: export_filename(format, now),
        content_type: format.content_type(),
    })
}

/// `jobs_export_YYYYMMDD_HHMMSS.<ext>`
pub fn export_filename(format: ExportFormat, now: DateTime<Local>) -> String {
    format!(
        "jobs_export_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Pretty JSON with two-space indent and every non-ASCII character written
/// as a `\uXXXX` escape, so the payload is plain ASCII.
pub fn to_json(jobs: &[JobRecord]) -> Result<String, AppError> {
    let pretty = serde_json::to_string_pretty(jobs)?;
    Ok(escape_non_ascii(&pretty))
}

/// Non-ASCII characters only occur inside string literals of serialized
/// JSON, so escaping them in place keeps the document valid.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

/// Header is the union of keys across records in first-seen order; records
/// missing a column get an empty cell.
pub fn to_csv(jobs: &[JobRecord]) -> Result<String, AppError> {
    let headers = column_union(jobs);

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(&headers)?;
    for job in jobs {
        writer.write_record(
            headers
                .iter()
                .map(|h| job.get(h.as_str()).map(cell_text).unwrap_or_default()),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush failed: {}", e.error())))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV is not UTF-8: {e}")))
}

fn column_union(jobs: &[JobRecord]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for key in jobs.iter().flat_map(|job| job.keys()) {
        if !headers.iter().any(|h| h == key) {
            headers.push(key.clone());
        }
    }
    headers
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
