// Application layer - Fetch, decode and render use cases
pub mod currency;
pub mod dashboard_renderer;
pub mod dashboard_service;
pub mod errors;
pub mod summary_fetcher;
pub mod summary_parser;
pub mod view_targets;
