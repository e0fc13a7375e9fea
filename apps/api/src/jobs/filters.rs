use crate::jobs::models::FilterOptions;

/// The fixed set of filter choices the search form offers.
pub const FILTER_OPTIONS: FilterOptions = FilterOptions {
    job_types: &["fulltime", "parttime", "contract", "internship"],
    sources: &["linkedin", "indeed", "glassdoor", "ziprecruiter", "google"],
    hours_old_options: &[24, 72, 168, 720],
    results_options: &[10, 20, 50, 100],
};
