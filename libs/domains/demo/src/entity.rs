use crate::models::{NewRecord, StoredRecord};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the `demo` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "demo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// OpenAPI tag for the demo endpoints
pub const TAG: &str = "demo";

impl From<Model> for StoredRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}

// Identity is assigned by the database
impl From<NewRecord> for ActiveModel {
    fn from(record: NewRecord) -> Self {
        ActiveModel {
            id: NotSet,
            event_id: Set(record.event_id),
            user_id: Set(record.user_id),
            created_at: Set(record.created_at),
        }
    }
}
