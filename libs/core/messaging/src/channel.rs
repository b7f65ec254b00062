//! Message channel trait and in-process channels.

use crate::error::ChannelError;
use async_trait::async_trait;
use std::sync::Mutex;

/// Opaque at-least-once delivery channel.
///
/// Implementations hand `payload` to the broker under `destination` and
/// return once the broker has accepted it. No ordering is guaranteed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send(&self, destination: &str, payload: Vec<u8>) -> Result<(), ChannelError>;

    /// Channel name for logs.
    fn name(&self) -> &'static str;
}

/// Channel used when no broker connection could be established.
///
/// Every send fails with [`ChannelError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct UnavailableChannel;

#[async_trait]
impl MessageChannel for UnavailableChannel {
    async fn send(&self, _destination: &str, _payload: Vec<u8>) -> Result<(), ChannelError> {
        Err(ChannelError::Unavailable)
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

/// A channel that always fails with a transport error (for testing).
#[derive(Debug, Clone)]
pub struct FailingChannel {
    error_message: String,
}

impl FailingChannel {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }
}

#[async_trait]
impl MessageChannel for FailingChannel {
    async fn send(&self, _destination: &str, _payload: Vec<u8>) -> Result<(), ChannelError> {
        Err(ChannelError::transport(&self.error_message))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A channel that keeps every message in memory (for testing).
#[derive(Debug, Default)]
pub struct RecordingChannel {
    sent: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far as `(destination, payload)` pairs.
    pub fn sent(&self) -> Vec<(String, Vec<u8>)> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl MessageChannel for RecordingChannel {
    async fn send(&self, destination: &str, payload: Vec<u8>) -> Result<(), ChannelError> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((destination.to_string(), payload));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_channel_rejects() {
        let result = UnavailableChannel.send("demo.records", b"{}".to_vec()).await;
        assert!(matches!(result, Err(ChannelError::Unavailable)));
    }

    #[tokio::test]
    async fn test_failing_channel_reports_message() {
        let channel = FailingChannel::new("broker down");
        let err = channel.send("demo.records", vec![]).await.unwrap_err();
        assert!(err.to_string().contains("broker down"));
    }

    #[tokio::test]
    async fn test_recording_channel_keeps_order() {
        let channel = RecordingChannel::new();
        channel.send("a", b"1".to_vec()).await.unwrap();
        channel.send("b", b"2".to_vec()).await.unwrap();

        let sent = channel.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], ("a".to_string(), b"1".to_vec()));
        assert_eq!(sent[1].0, "b");
    }
}
