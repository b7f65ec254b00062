use crate::channel::MessageChannel;
use crate::config::QueueConfig;
use crate::error::ChannelError;
use async_nats::jetstream::{self, Context};
use async_nats::{Client, ConnectOptions};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// [`MessageChannel`] publishing to NATS JetStream.
#[derive(Clone)]
pub struct NatsChannel {
    client: Client,
    jetstream: Context,
}

impl NatsChannel {
    /// Connect to `config.nats_url` and provision the stream.
    pub async fn connect(config: &QueueConfig) -> Result<Self, ChannelError> {
        let client = ConnectOptions::new()
            .name("demo-api")
            .connection_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(config.nats_url.as_str())
            .await
            .map_err(|e| ChannelError::transport(format!("connect {}: {e}", config.nats_url)))?;

        info!(url = %config.nats_url, "Connected to NATS");

        Self::from_client(client, config).await
    }

    /// Wrap an existing client, creating the stream for `config.destination`
    /// if it does not exist yet.
    pub async fn from_client(client: Client, config: &QueueConfig) -> Result<Self, ChannelError> {
        let jetstream = jetstream::new(client.clone());

        jetstream
            .get_or_create_stream(jetstream::stream::Config {
                name: config.stream_name.clone(),
                subjects: vec![config.destination.clone()],
                ..Default::default()
            })
            .await
            .map_err(|e| {
                ChannelError::transport(format!("provision stream {}: {e}", config.stream_name))
            })?;

        info!(
            stream = %config.stream_name,
            subject = %config.destination,
            "JetStream stream ready"
        );

        Ok(Self { client, jetstream })
    }

    /// Flush buffered publishes to the server.
    pub async fn flush(&self) -> Result<(), ChannelError> {
        self.client
            .flush()
            .await
            .map_err(|e| ChannelError::transport(e.to_string()))
    }
}

#[async_trait]
impl MessageChannel for NatsChannel {
    async fn send(&self, destination: &str, payload: Vec<u8>) -> Result<(), ChannelError> {
        let ack = self
            .jetstream
            .publish(destination.to_string(), payload.into())
            .await
            .map_err(|e| ChannelError::transport(e.to_string()))?
            .await
            .map_err(|e| ChannelError::transport(e.to_string()))?;

        debug!(
            stream = %ack.stream,
            sequence = ack.sequence,
            destination,
            "Message acknowledged"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "nats"
    }
}
