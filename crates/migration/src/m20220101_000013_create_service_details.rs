//! Create `service_details` table.
//!
//! Optional 1:1 extension of a service. `benefits` and `process` hold JSON
//! arrays of objects, `related_services` a JSON array of service ids.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceDetails::Id))
                    .col(integer(ServiceDetails::ServiceId).unique_key().not_null())
                    .col(json_binary(ServiceDetails::Benefits).not_null())
                    .col(json_binary(ServiceDetails::Process).not_null())
                    .col(json_binary(ServiceDetails::RelatedServices).not_null())
                    .col(
                        timestamp_with_time_zone(ServiceDetails::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_details_service")
                            .from(ServiceDetails::Table, ServiceDetails::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceDetails::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceDetails {
    Table,
    Id,
    ServiceId,
    Benefits,
    Process,
    RelatedServices,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Services { Table, Id }
