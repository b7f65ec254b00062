use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Demo::Table)
                    .if_not_exists()
                    .col(
                        big_integer(Demo::Id)
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(Demo::EventId))
                    .col(big_integer(Demo::UserId))
                    .col(timestamp(Demo::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // A user records a given event at most once
        manager
            .create_index(
                Index::create()
                    .name("uq_demo_event_user")
                    .table(Demo::Table)
                    .col(Demo::EventId)
                    .col(Demo::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_demo_created_at")
                    .table(Demo::Table)
                    .col((Demo::CreatedAt, IndexOrder::Desc))
                    .col((Demo::Id, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Demo::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Demo {
    Table,
    Id,
    EventId,
    UserId,
    CreatedAt,
}
