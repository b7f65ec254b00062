//! Demo Domain
//!
//! Synthetic event records written either directly to PostgreSQL or through
//! a message queue, and read back as the 20 most recent.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (POST/GET /demo, GET /)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌───────────────┐
//! │   Service   │────▶│ QueueProducer │  ← queue path (useQueue=true)
//! └──────┬──────┘     └───────────────┘
//!        │ direct path
//! ┌──────▼──────┐
//! │ Repository  │  ← Persistence port (trait + Postgres + in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← NewRecord, StoredRecord, entity
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_demo::{handlers, DemoService, InMemoryDemoRepository};
//! use messaging::{QueueProducer, UnavailableChannel};
//!
//! let producer = QueueProducer::new(Arc::new(UnavailableChannel), "demo.records");
//! let service = DemoService::new(InMemoryDemoRepository::new(), producer);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DemoError, DemoResult};
pub use generator::{FixedRecordGenerator, RandomRecordGenerator, RecordGenerator};
pub use models::{GREETING, NewRecord, OrderKey, StoredRecord, TOP_N};
pub use postgres::PgDemoRepository;
pub use repository::{DemoRepository, InMemoryDemoRepository};
pub use service::DemoService;
