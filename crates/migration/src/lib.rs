//! Migrator registering the site tables in dependency order.
//! Indexes come after the tables, the default catalog seed last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000011_create_service_category;
mod m20220101_000012_create_service;
mod m20220101_000013_create_service_details;
mod m20220101_000014_create_lead;
mod m20220101_000002_add_indexes;
mod m20220101_000020_seed_default_catalog;
mod m20220101_000021_widen_lead_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000011_create_service_category::Migration),
            Box::new(m20220101_000012_create_service::Migration),
            Box::new(m20220101_000013_create_service_details::Migration),
            Box::new(m20220101_000014_create_lead::Migration),
            Box::new(m20220101_000002_add_indexes::Migration),
            // Seed needs every table and the unique slug indexes
            Box::new(m20220101_000020_seed_default_catalog::Migration),
            Box::new(m20220101_000021_widen_lead_columns::Migration),
        ]
    }
}
