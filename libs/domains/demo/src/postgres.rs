use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, SqlErr,
};

use crate::{
    entity,
    error::{DemoError, DemoResult},
    models::{NewRecord, OrderKey, StoredRecord},
    repository::DemoRepository,
};

/// PostgreSQL implementation of [`DemoRepository`].
///
/// Uniqueness of `(event_id, user_id)` is enforced by the
/// `uq_demo_event_user` index; racing inserts leave exactly one row.
#[derive(Clone)]
pub struct PgDemoRepository {
    db: DatabaseConnection,
}

impl PgDemoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn insert_error(err: DbErr, record: &NewRecord) -> DemoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DemoError::Duplicate {
            event_id: record.event_id,
            user_id: record.user_id,
        },
        _ => DemoError::Database(err),
    }
}

#[async_trait]
impl DemoRepository for PgDemoRepository {
    async fn insert(&self, record: NewRecord) -> DemoResult<StoredRecord> {
        let active_model: entity::ActiveModel = record.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(e, &record))?;

        tracing::info!(
            record_id = model.id,
            event_id = model.event_id,
            user_id = model.user_id,
            "Inserted record"
        );
        Ok(model.into())
    }

    async fn list_top_n(&self, n: usize, order: OrderKey) -> DemoResult<Vec<StoredRecord>> {
        let mut query = entity::Entity::find();

        query = match order {
            OrderKey::Id => query.order_by_desc(entity::Column::Id),
            OrderKey::CreatedAt => query
                .order_by_desc(entity::Column::CreatedAt)
                .order_by_desc(entity::Column::Id),
        };

        let models = query.limit(n as u64).all(&self.db).await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
