//! Create `service_categories` table.
//!
//! Groups services for listings and navigation menus.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceCategories::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceCategories::Id))
                    .col(string_len(ServiceCategories::Name, 128).not_null())
                    .col(string_len(ServiceCategories::Slug, 128).unique_key().not_null())
                    .col(
                        timestamp_with_time_zone(ServiceCategories::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceCategories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceCategories { Table, Id, Name, Slug, CreatedAt }
