//! Error types for message hand-off.

use thiserror::Error;

/// Error raised while handing a message to a channel.
///
/// The queue producer never propagates these to its callers; they surface
/// only in logs and the `queue_send_failures_total` counter.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Payload could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The broker rejected the message or the connection failed mid-send
    #[error("transport error: {0}")]
    Transport(String),

    /// No broker connection was established at startup
    #[error("message channel unavailable")]
    Unavailable,
}

impl ChannelError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Short label used for the `reason` metric dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            ChannelError::Serialization(_) => "serialization",
            ChannelError::Transport(_) => "transport",
            ChannelError::Unavailable => "unavailable",
        }
    }
}
