//! PostgreSQL connection management for the demo service.
//!
//! Wraps SeaORM with environment-driven pool configuration, startup retry
//! with exponential backoff, migration running and a `SELECT 1` probe used
//! by the readiness endpoint.
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use database::common::RetryConfig;
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, Some(RetryConfig::new())).await?;
//! postgres::run_migrations::<Migrator>(&db, "demo_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
