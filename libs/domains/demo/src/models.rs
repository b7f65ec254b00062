use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::{IntoParams, ToSchema};

/// Number of records returned by a list request.
pub const TOP_N: usize = 20;

/// Plain-text body of the greeting endpoint.
pub const GREETING: &str = "Welcome to AWS-Database-Queue";

/// One observed (event, user) occurrence, before it has been stored.
///
/// This is also the queue message body: `createdAt` serializes as an
/// ISO-8601 timestamp without timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    #[schema(minimum = 1, maximum = 30000)]
    pub event_id: i64,
    #[schema(minimum = 1, maximum = 1000)]
    pub user_id: i64,
    #[schema(value_type = String, example = "2024-03-01T12:30:00.250")]
    pub created_at: NaiveDateTime,
}

/// A record with its database-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    #[schema(value_type = String, example = "2024-03-01T12:30:00.250")]
    pub created_at: NaiveDateTime,
}

impl StoredRecord {
    pub fn new(id: i64, record: NewRecord) -> Self {
        Self {
            id,
            event_id: record.event_id,
            user_id: record.user_id,
            created_at: record.created_at,
        }
    }
}

/// Sort key for top-N scans. Both orderings are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKey {
    /// Newest identity first
    Id,
    /// Newest timestamp first, ties by identity
    CreatedAt,
}

impl OrderKey {
    pub fn from_flag(order_by_timestamp: bool) -> Self {
        if order_by_timestamp {
            OrderKey::CreatedAt
        } else {
            OrderKey::Id
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKey::Id => "id",
            OrderKey::CreatedAt => "created_at",
        }
    }
}

/// Write path chosen for a create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestPath {
    Direct,
    Queue,
}

impl IngestPath {
    pub fn from_flag(use_queue: bool) -> Self {
        if use_queue {
            IngestPath::Queue
        } else {
            IngestPath::Direct
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IngestPath::Direct => "direct",
            IngestPath::Queue => "queue",
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct CreateParams {
    /// Hand the record to the message queue instead of writing it directly
    pub use_queue: bool,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListParams {
    /// Order by creation time instead of identity (default: false)
    #[serde(default, deserialize_with = "empty_as_none")]
    pub order_by_timestamp: Option<bool>,
}

/// `?flag=` reads as absent; anything else must parse as a bool.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<bool>().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
}

impl CreatedResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
