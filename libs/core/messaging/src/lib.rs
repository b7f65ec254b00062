//! Message hand-off for the asynchronous ingestion path.
//!
//! A [`QueueProducer`] serializes a message to JSON and passes it to a
//! [`MessageChannel`]. The channel is opaque at-least-once delivery; the
//! consumer that eventually persists messages runs elsewhere.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────────────────┐
//! │   Service    │────▶│ QueueProducer │────▶│ dyn MessageChannel        │
//! │ (enqueue)    │     │ (JSON, logs + │     │  NatsChannel (JetStream)  │
//! └──────────────┘     │  swallows)    │     │  UnavailableChannel       │
//!                      └───────────────┘     │  Recording/FailingChannel │
//!                                            └───────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use messaging::{QueueConfig, QueueProducer, nats::NatsChannel};
//!
//! let config = QueueConfig::from_env()?;
//! let channel = Arc::new(NatsChannel::connect(&config).await?);
//! let producer = QueueProducer::new(channel, &config.destination);
//!
//! producer.enqueue(&record).await; // never fails
//! ```

mod channel;
mod config;
mod error;
mod producer;

#[cfg(feature = "nats")]
pub mod nats;

pub use channel::{FailingChannel, MessageChannel, RecordingChannel, UnavailableChannel};
pub use config::QueueConfig;
pub use error::ChannelError;
pub use producer::QueueProducer;
