//! Create `leads` table.
//! Write-only from the site: one row per contact form submission.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(uuid(Leads::Id).primary_key())
                    .col(text(Leads::Name).not_null())
                    .col(string_len(Leads::Email, 320).not_null())
                    .col(text_null(Leads::Phone))
                    .col(text_null(Leads::Company))
                    .col(text_null(Leads::Message))
                    .col(timestamp_with_time_zone(Leads::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Leads::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Leads { Table, Id, Name, Email, Phone, Company, Message, CreatedAt }
