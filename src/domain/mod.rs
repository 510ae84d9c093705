// Domain layer - Summary payload and chart models
pub mod chart;
pub mod summary;
