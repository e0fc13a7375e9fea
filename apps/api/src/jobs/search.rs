//! Canned search — templates three sample listings from the request.
//!
//! No job board is queried. The listings exist so the front-end has
//! realistic-looking data to render, filter and export.

use crate::jobs::models::{JobListing, SearchRequest, SearchResponse};

/// Reported elapsed time for every search, in seconds.
pub const SEARCH_TIME_SECS: f64 = 0.5;

/// Static parts of one sample listing. Text fields are filled from the request.
struct Template {
    company: &'static str,
    default_location: Option<&'static str>,
    salary_min: u32,
    salary_max: u32,
    always_remote: bool,
    posted_date: &'static str,
}

const TEMPLATES: [Template; 3] = [
    Template {
        company: "Tech Corp",
        default_location: Some("San Francisco, CA"),
        salary_min: 120_000,
        salary_max: 180_000,
        always_remote: false,
        posted_date: "2025-09-10",
    },
    Template {
        company: "StartupXYZ",
        default_location: None,
        salary_min: 100_000,
        salary_max: 150_000,
        always_remote: true,
        posted_date: "2025-09-11",
    },
    Template {
        company: "BigTech Inc",
        default_location: Some("New York, NY"),
        salary_min: 80_000,
        salary_max: 120_000,
        always_remote: false,
        posted_date: "2025-09-12",
    },
];

/// Builds the sample listings for `request`, truncated to `results_wanted`.
pub fn sample_jobs(request: &SearchRequest) -> Vec<JobListing> {
    let term = request.search_term.as_deref().unwrap_or("");
    let titled = if term.is_empty() {
        "Developer".to_string()
    } else {
        title_case(term)
    };
    let location = request.location.as_deref().unwrap_or("");
    let job_type = request
        .job_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("fulltime");
    let source = request
        .sources
        .as_deref()
        .and_then(|s| s.first())
        .map(String::as_str)
        .unwrap_or("demo");

    let limit = usize::try_from(request.results_wanted).unwrap_or(usize::MAX);

    TEMPLATES
        .iter()
        .enumerate()
        .take(limit)
        .map(|(i, template)| {
            let n = i + 1;
            let (title, description) = match n {
                1 => (
                    format!("Senior {titled}"),
                    format!(
                        "We are looking for a skilled {} to join our team. This is a great opportunity to work with cutting-edge technology and make a real impact.",
                        or_default(term, "professional")
                    ),
                ),
                2 => (
                    format!("{titled} - Remote"),
                    format!(
                        "Remote {} with flexible hours and great benefits. Join our innovative team!",
                        or_default(term, "position")
                    ),
                ),
                _ => (
                    format!("Junior {titled}"),
                    format!(
                        "Entry-level {} perfect for recent graduates. Excellent mentorship and growth opportunities.",
                        or_default(term, "position")
                    ),
                ),
            };

            let location = match template.default_location {
                Some(fallback) => or_default(location, fallback),
                None => "Remote",
            };

            JobListing {
                id: format!("demo_{n}"),
                title,
                company: template.company.to_string(),
                location: location.to_string(),
                salary_min: template.salary_min,
                salary_max: template.salary_max,
                job_type: job_type.to_string(),
                is_remote: template.always_remote || request.is_remote.unwrap_or(false),
                posted_date: template.posted_date.to_string(),
                source: source.to_string(),
                url: format!("https://example.com/job{n}"),
                description,
            }
        })
        .collect()
}

/// Runs the canned search and wraps the result with an echo of the inputs.
pub fn run_search(request: SearchRequest) -> SearchResponse {
    let jobs = sample_jobs(&request);
    SearchResponse {
        total_results: jobs.len(),
        jobs,
        search_time: SEARCH_TIME_SECS,
        search_parameters: request,
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
/// `"rust engineer"` becomes `"Rust Engineer"`, `"c++ dev"` becomes `"C++ Dev"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(term: &str, results_wanted: u64) -> SearchRequest {
        SearchRequest {
            search_term: Some(term.to_string()),
            results_wanted,
            ..SearchRequest::default()
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("engineer"), "Engineer");
        assert_eq!(title_case("rust ENGINEER"), "Rust Engineer");
        assert_eq!(title_case("full-stack dev"), "Full-Stack Dev");
        assert_eq!(title_case("3d artist"), "3D Artist");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_engineer_first_title() {
        let jobs = sample_jobs(&request("engineer", 10));
        assert_eq!(jobs[0].title, "Senior Engineer");
        assert_eq!(jobs[1].title, "Engineer - Remote");
        assert_eq!(jobs[2].title, "Junior Engineer");
    }

    #[test]
    fn test_truncates_to_results_wanted() {
        for wanted in 0..3u64 {
            assert_eq!(sample_jobs(&request("x", wanted)).len(), wanted as usize);
        }
        assert_eq!(sample_jobs(&request("x", 3)).len(), 3);
        assert_eq!(sample_jobs(&request("x", 100)).len(), 3);
        assert_eq!(sample_jobs(&request("x", u64::MAX)).len(), 3);
    }

    #[test]
    fn test_defaults_without_term() {
        let jobs = sample_jobs(&SearchRequest::default());
        assert_eq!(jobs[0].title, "Senior Developer");
        assert_eq!(jobs[0].location, "San Francisco, CA");
        assert_eq!(jobs[2].location, "New York, NY");
        assert!(jobs[0].description.contains("a skilled professional"));
        assert!(jobs[1].description.starts_with("Remote position"));
        assert_eq!(jobs[0].source, "indeed");
        assert_eq!(jobs[0].job_type, "fulltime");
    }

    #[test]
    fn test_null_search_term_uses_default_title() {
        let req = SearchRequest {
            search_term: None,
            ..SearchRequest::default()
        };
        assert_eq!(sample_jobs(&req)[0].title, "Senior Developer");
    }

    #[test]
    fn test_location_and_remote_flags() {
        let req = SearchRequest {
            location: Some("Berlin".to_string()),
            is_remote: None,
            ..SearchRequest::default()
        };
        let jobs = sample_jobs(&req);
        assert_eq!(jobs[0].location, "Berlin");
        assert_eq!(jobs[1].location, "Remote");
        assert_eq!(jobs[2].location, "Berlin");
        assert!(!jobs[0].is_remote);
        assert!(jobs[1].is_remote);
    }

    #[test]
    fn test_empty_sources_fall_back_to_demo() {
        let req = SearchRequest {
            sources: Some(Vec::new()),
            ..SearchRequest::default()
        };
        assert!(sample_jobs(&req).iter().all(|j| j.source == "demo"));

        let req = SearchRequest {
            sources: Some(vec!["linkedin".to_string(), "google".to_string()]),
            ..SearchRequest::default()
        };
        assert!(sample_jobs(&req).iter().all(|j| j.source == "linkedin"));
    }

    #[test]
    fn test_run_search_echoes_parameters() {
        let req = request("rust", 2);
        let response = run_search(req.clone());
        assert_eq!(response.total_results, 2);
        assert_eq!(response.search_time, SEARCH_TIME_SECS);
        assert_eq!(response.search_parameters, req);
    }
}
