//! Application state management.
//!
//! This module defines the shared state built once at startup:
//! - Configuration
//! - PostgreSQL connection pool
//! - Message channel for the queue path (NATS, or unavailable)

use messaging::MessageChannel;
use messaging::nats::NatsChannel;
use std::sync::Arc;

/// Shared application state.
///
/// Cloning is cheap: the pool and the channel are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Channel the queue producer publishes to
    pub channel: Arc<dyn MessageChannel>,
    /// NATS connection, if one was established (flushed on shutdown)
    pub nats: Option<NatsChannel>,
}

impl AppState {
    pub fn new(
        config: crate::config::Config,
        db: database::postgres::DatabaseConnection,
        nats: Option<NatsChannel>,
    ) -> Self {
        let channel: Arc<dyn MessageChannel> = match &nats {
            Some(nats) => Arc::new(nats.clone()),
            None => Arc::new(messaging::UnavailableChannel),
        };

        Self {
            config,
            db,
            channel,
            nats,
        }
    }
}
