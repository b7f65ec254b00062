//! Fire-and-forget queue producer.

use crate::channel::MessageChannel;
use crate::error::ChannelError;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

/// Serializes messages as JSON and hands them to a [`MessageChannel`].
///
/// [`enqueue`](Self::enqueue) never fails: serialization and transport
/// errors are logged, counted in `queue_send_failures_total` and dropped.
#[derive(Clone)]
pub struct QueueProducer {
    channel: Arc<dyn MessageChannel>,
    destination: String,
}

impl QueueProducer {
    pub fn new(channel: Arc<dyn MessageChannel>, destination: impl Into<String>) -> Self {
        Self {
            channel,
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Serialize and send, returning the failure to the caller.
    pub async fn publish<T>(&self, message: &T) -> Result<(), ChannelError>
    where
        T: Serialize + Sync,
    {
        let payload = serde_json::to_vec(message)?;
        self.channel.send(&self.destination, payload).await
    }

    /// Serialize and send, swallowing any failure.
    pub async fn enqueue<T>(&self, message: &T)
    where
        T: Serialize + Sync,
    {
        match self.publish(message).await {
            Ok(()) => {
                debug!(destination = %self.destination, "Message enqueued");
            }
            Err(e) => {
                error!(
                    destination = %self.destination,
                    channel = self.channel.name(),
                    reason = e.reason(),
                    error = %e,
                    "Failed to enqueue message, dropping it"
                );
                metrics::counter!(
                    "queue_send_failures_total",
                    "destination" => self.destination.clone(),
                    "reason" => e.reason()
                )
                .increment(1);
            }
        }
    }
}

impl std::fmt::Debug for QueueProducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueProducer")
            .field("channel", &self.channel.name())
            .field("destination", &self.destination)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{FailingChannel, MockMessageChannel, RecordingChannel, UnavailableChannel};
    use chrono::NaiveDate;
    use mockall::predicate::*;
    use serde::Serialize;
    use std::collections::HashMap;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Event {
        event_id: i64,
        user_id: i64,
        created_at: chrono::NaiveDateTime,
    }

    fn sample() -> Event {
        Event {
            event_id: 5,
            user_id: 9,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_micro_opt(12, 30, 0, 250_000)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_enqueue_sends_json_to_destination() {
        let channel = Arc::new(RecordingChannel::new());
        let producer = QueueProducer::new(channel.clone(), "demo.records");

        producer.enqueue(&sample()).await;

        let sent = channel.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "demo.records");

        let body: serde_json::Value = serde_json::from_slice(&sent[0].1).unwrap();
        assert_eq!(body["eventId"], 5);
        assert_eq!(body["userId"], 9);
        assert_eq!(body["createdAt"], "2024-03-01T12:30:00.250");
    }

    #[tokio::test]
    async fn test_enqueue_swallows_transport_failure() {
        let producer = QueueProducer::new(Arc::new(FailingChannel::new("broker down")), "demo.records");

        // Must not panic or propagate
        producer.enqueue(&sample()).await;

        let err = producer.publish(&sample()).await.unwrap_err();
        assert!(matches!(err, ChannelError::Transport(_)));
    }

    #[tokio::test]
    async fn test_enqueue_swallows_unavailable_channel() {
        let producer = QueueProducer::new(Arc::new(UnavailableChannel), "demo.records");

        producer.enqueue(&sample()).await;

        assert!(matches!(
            producer.publish(&sample()).await,
            Err(ChannelError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn test_serialization_failure_never_reaches_channel() {
        let mut channel = MockMessageChannel::new();
        channel.expect_send().times(0);
        channel.expect_name().return_const("mock");

        let producer = QueueProducer::new(Arc::new(channel), "demo.records");

        // JSON object keys must be strings
        let unserializable: HashMap<(i32, i32), i32> = [((1, 2), 3)].into();
        producer.enqueue(&unserializable).await;

        let err = producer.publish(&unserializable).await.unwrap_err();
        assert_eq!(err.reason(), "serialization");
    }

    #[tokio::test]
    async fn test_publish_uses_configured_destination() {
        let mut channel = MockMessageChannel::new();
        channel
            .expect_send()
            .with(function(|d: &str| d == "custom.subject"), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let producer = QueueProducer::new(Arc::new(channel), "custom.subject");

        assert_eq!(producer.destination(), "custom.subject");
        producer.publish(&sample()).await.unwrap();
    }
}
