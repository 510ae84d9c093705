// Presentation layer - HTTP surface over the hosted view
pub mod app_state;
pub mod handlers;
