use std::collections::BTreeMap;

use serde_json::Value;

use crate::jobs::models::{AnalyticsSummary, JobRecord, SalaryStats};

/// Bucket for records that have no usable value for a counted field.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Fixed salary figures reported for every request.
// TODO: derive from salary_min/salary_max once the front-end sends real listings.
pub const PLACEHOLDER_SALARY_STATS: SalaryStats = SalaryStats {
    min_salary: 80_000,
    max_salary: 180_000,
    avg_min_salary: 100_000,
    avg_max_salary: 150_000,
};

/// Counts jobs per location and per company in a single pass.
pub fn summarize(jobs: &[JobRecord]) -> AnalyticsSummary {
    let total = jobs.len();

    let (locations, companies) = jobs.iter().fold(
        (BTreeMap::<String, usize>::new(), BTreeMap::<String, usize>::new()),
        |(mut locations, mut companies), job| {
            *locations.entry(bucket_key(job, "location")).or_insert(0) += 1;
            *companies.entry(bucket_key(job, "company")).or_insert(0) += 1;
            (locations, companies)
        },
    );

    AnalyticsSummary {
        total_jobs: total,
        sources: BTreeMap::from([("demo".to_string(), total)]),
        job_types: BTreeMap::from([("fulltime".to_string(), total)]),
        locations,
        companies,
        salary_stats: PLACEHOLDER_SALARY_STATS,
    }
}

/// Key a record is counted under for `field`. Strings are used verbatim,
/// other JSON values by their compact text.
fn bucket_key(job: &JobRecord, field: &str) -> String {
    match job.get(field) {
        None | Some(Value::Null) => UNKNOWN_BUCKET.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
