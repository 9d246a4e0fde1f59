//! Create `contact_query` table.
//! Stores contact-form submissions and their review status.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactQuery::Table)
                    .if_not_exists()
                    .col(uuid(ContactQuery::Id).primary_key())
                    .col(string_len(ContactQuery::Name, 256).not_null())
                    .col(string_len(ContactQuery::Email, 320).not_null())
                    .col(string_len(ContactQuery::Mobile, 64).not_null())
                    .col(text(ContactQuery::Message).not_null())
                    .col(string_len(ContactQuery::Status, 16).not_null().default("pending"))
                    .col(timestamp_with_time_zone(ContactQuery::CreatedAt).not_null())
                    .check(Expr::col(ContactQuery::Status).is_in(["pending", "under review", "solved"]))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContactQuery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ContactQuery {
    Table,
    Id,
    Name,
    Email,
    Mobile,
    Message,
    Status,
    CreatedAt,
}
