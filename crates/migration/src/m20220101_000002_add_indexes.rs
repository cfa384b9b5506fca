use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Services: category filter + title ordering
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_services_category_title")
                    .table(Services::Table)
                    .col(Services::CategoryId)
                    .col(Services::Title)
                    .to_owned(),
            )
            .await?;

        // Categories: name ordering
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_service_categories_name")
                    .table(ServiceCategories::Table)
                    .col(ServiceCategories::Name)
                    .to_owned(),
            )
            .await?;

        // Leads: newest first when exported by the admin tooling
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_leads_created_at")
                    .table(Leads::Table)
                    .col(Leads::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_category_title").table(Services::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_categories_name").table(ServiceCategories::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_leads_created_at").table(Leads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services { Table, CategoryId, Title }

#[derive(DeriveIden)]
enum ServiceCategories { Table, Name }

#[derive(DeriveIden)]
enum Leads { Table, CreatedAt }
