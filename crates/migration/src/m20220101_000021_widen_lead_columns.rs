//! Free-text lead fields: name, phone and company become `text`.
//! Databases created with the earlier bounded `varchar` columns are widened in place.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Leads::Table)
                    .modify_column(ColumnDef::new(Leads::Name).text().not_null())
                    .modify_column(ColumnDef::new(Leads::Phone).text().null())
                    .modify_column(ColumnDef::new(Leads::Company).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Leads::Table)
                    .modify_column(ColumnDef::new(Leads::Name).string_len(256).not_null())
                    .modify_column(ColumnDef::new(Leads::Phone).string_len(64).null())
                    .modify_column(ColumnDef::new(Leads::Company).string_len(256).null())
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Leads { Table, Name, Phone, Company }
