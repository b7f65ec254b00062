use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{DemoError, DemoResult};
use crate::models::{NewRecord, OrderKey, StoredRecord};

/// Persistence port for demo records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DemoRepository: Send + Sync {
    /// Store a record, failing with [`DemoError::Duplicate`] if its
    /// `(event_id, user_id)` pair already exists.
    async fn insert(&self, record: NewRecord) -> DemoResult<StoredRecord>;

    /// At most `n` records, descending by `order`.
    async fn list_top_n(&self, n: usize, order: OrderKey) -> DemoResult<Vec<StoredRecord>>;
}

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: Vec<StoredRecord>,
}

/// In-memory implementation of DemoRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryDemoRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryDemoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DemoRepository for InMemoryDemoRepository {
    async fn insert(&self, record: NewRecord) -> DemoResult<StoredRecord> {
        // Check and insert under one write lock
        let mut table = self.table.write().await;

        let exists = table
            .rows
            .iter()
            .any(|r| r.event_id == record.event_id && r.user_id == record.user_id);

        if exists {
            return Err(DemoError::Duplicate {
                event_id: record.event_id,
                user_id: record.user_id,
            });
        }

        table.next_id += 1;
        let stored = StoredRecord::new(table.next_id, record);
        table.rows.push(stored.clone());

        tracing::info!(record_id = stored.id, "Inserted record");
        Ok(stored)
    }

    async fn list_top_n(&self, n: usize, order: OrderKey) -> DemoResult<Vec<StoredRecord>> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();

        match order {
            OrderKey::Id => rows.sort_by(|a, b| b.id.cmp(&a.id)),
            OrderKey::CreatedAt => rows.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            }),
        }

        rows.truncate(n);
        Ok(rows)
    }
}
