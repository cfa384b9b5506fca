use crate::db::{connect_with_config, DatabaseConfig};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::{Duration, Instant};
use anyhow::Result;

use super::db_or_skip;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let start = Instant::now();
    let Some(db) = db_or_skip().await else { return Ok(()) };
    println!("Database connection established in {:?}", start.elapsed());

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// Test connection with custom pool configuration
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if db_or_skip().await.is_none() { return Ok(()); }

    let mut config = DatabaseConfig::from_env();
    config.max_connections = 3;
    config.min_connections = 1;
    config.connect_timeout = Duration::from_secs(10);

    let db = connect_with_config(&config).await?;
    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT current_database()".to_string());
    assert!(db.query_one(stmt).await?.is_some());
    Ok(())
}

/// All site tables exist after migrations
#[tokio::test]
async fn test_site_tables_exist() -> Result<()> {
    let Some(db) = db_or_skip().await else { return Ok(()) };
    for table in ["services", "service_categories", "service_details", "leads"] {
        let stmt = Statement::from_string(
            DatabaseBackend::Postgres,
            format!("SELECT to_regclass('public.{table}') IS NOT NULL AS present"),
        );
        let row = db.query_one(stmt).await?.expect("one row");
        let present: bool = row.try_get("", "present")?;
        assert!(present, "table {table} missing");
    }
    Ok(())
}
