use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing order: newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_query_created_at")
                    .table(ContactQuery::Table)
                    .col(ContactQuery::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Status filter
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_query_status")
                    .table(ContactQuery::Table)
                    .col(ContactQuery::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contact_query_created_at").table(ContactQuery::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_query_status").table(ContactQuery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactQuery { Table, CreatedAt, Status }
