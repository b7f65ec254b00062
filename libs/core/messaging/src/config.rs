//! Queue connection settings.

use core_config::{ConfigError, FromEnv, env_or_default, env_parse};

/// Where and how the producer publishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    pub nats_url: String,
    /// Subject messages are published to
    pub destination: String,
    /// JetStream stream capturing `destination`
    pub stream_name: String,
    pub connect_timeout_secs: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            nats_url: "nats://127.0.0.1:4222".to_string(),
            destination: "demo.records".to_string(),
            stream_name: "DEMO_RECORDS".to_string(),
            connect_timeout_secs: 5,
        }
    }
}

impl QueueConfig {
    pub fn new(nats_url: impl Into<String>) -> Self {
        Self {
            nats_url: nats_url.into(),
            ..Default::default()
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn with_stream_name(mut self, stream_name: impl Into<String>) -> Self {
        self.stream_name = stream_name.into();
        self
    }
}

/// - `NATS_URL` (default: nats://127.0.0.1:4222)
/// - `QUEUE_DESTINATION` (default: demo.records)
/// - `QUEUE_STREAM` (default: DEMO_RECORDS)
/// - `NATS_CONNECT_TIMEOUT_SECS` (default: 5)
impl FromEnv for QueueConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            nats_url: env_or_default("NATS_URL", &defaults.nats_url),
            destination: env_or_default("QUEUE_DESTINATION", &defaults.destination),
            stream_name: env_or_default("QUEUE_STREAM", &defaults.stream_name),
            connect_timeout_secs: env_parse("NATS_CONNECT_TIMEOUT_SECS", "5")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_config_from_env_defaults() {
        temp_env::with_vars_unset(
            [
                "NATS_URL",
                "QUEUE_DESTINATION",
                "QUEUE_STREAM",
                "NATS_CONNECT_TIMEOUT_SECS",
            ],
            || {
                assert_eq!(QueueConfig::from_env().unwrap(), QueueConfig::default());
            },
        );
    }

    #[test]
    fn test_queue_config_from_env_overrides() {
        temp_env::with_vars(
            [
                ("NATS_URL", Some("nats://broker:4222")),
                ("QUEUE_DESTINATION", Some("ingest.events")),
                ("QUEUE_STREAM", Some("INGEST")),
                ("NATS_CONNECT_TIMEOUT_SECS", Some("2")),
            ],
            || {
                let config = QueueConfig::from_env().unwrap();
                assert_eq!(config.nats_url, "nats://broker:4222");
                assert_eq!(config.destination, "ingest.events");
                assert_eq!(config.stream_name, "INGEST");
                assert_eq!(config.connect_timeout_secs, 2);
            },
        );
    }

    #[test]
    fn test_queue_config_invalid_timeout() {
        temp_env::with_var("NATS_CONNECT_TIMEOUT_SECS", Some("soon"), || {
            let err = QueueConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("NATS_CONNECT_TIMEOUT_SECS"));
        });
    }

    #[test]
    fn test_queue_config_builders() {
        let config = QueueConfig::new("nats://localhost:4222")
            .with_destination("x.y")
            .with_stream_name("XY");
        assert_eq!(config.destination, "x.y");
        assert_eq!(config.stream_name, "XY");
        assert_eq!(config.connect_timeout_secs, 5);
    }
}
