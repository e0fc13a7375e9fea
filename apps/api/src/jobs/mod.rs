// Job-search demo API.
// Implements: filter options, canned search, naive analytics, CSV/JSON export.
// Everything is computed from constants or the request body; nothing is stored.

pub mod analytics;
pub mod export;
pub mod extract;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod search;
