//! NATS JetStream backend.
//!
//! ```text
//! ┌───────────────┐  publish   ┌──────────────────────┐
//! │ QueueProducer │──────────▶│ JetStream stream     │──▶ consumer (out of process)
//! │ (NatsChannel) │◀──────────│ subjects: [dest]     │
//! └───────────────┘    ack     └──────────────────────┘
//! ```
//!
//! A send only returns once JetStream has acknowledged the message, so a
//! successful send means the message is durably stored.

mod channel;

pub use channel::NatsChannel;
