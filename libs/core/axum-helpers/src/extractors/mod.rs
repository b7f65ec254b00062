//! Custom extractors for Axum handlers.

pub mod query;

pub use query::ApiQuery;
