use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use common::env::ensure_frontend;
use configs::AppConfig;
use migration::MigratorTrait;
use service::content::repo::seaorm::SeaOrmContentRepository;
use service::leads::repo::seaorm::SeaOrmLeadRepository;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", cfg.server.host, cfg.server.port);
    raw.parse().map_err(|_| StartupError::BindAddr(raw))
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(signal = "ctrl_c", "shutdown requested"),
        _ = terminate => info!(signal = "sigterm", "shutdown requested"),
    }
}

/// Connect, migrate and serve until `shutdown` resolves. In-flight requests,
/// lead inserts included, finish before this returns.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    ensure_frontend(&cfg.site.frontend_dir).await;

    let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
    let db = models::db::connect_with_config(&db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if cfg.database.run_migrations {
        if let Err(e) = migration::Migrator::up(&db, None).await {
            error!(error = %e, "migrations failed");
            return Err(StartupError::Migration(e.to_string()).into());
        }
        info!("migrations applied");
    }

    let state = ServerState::new(
        Arc::new(SeaOrmContentRepository { db: db.clone() }),
        Arc::new(SeaOrmLeadRepository { db: db.clone() }),
    )
    .with_nav_limit(cfg.site.nav_services_per_category);

    let app: Router = routes::build_router(state, build_cors(), &cfg.site.frontend_dir);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, frontend_dir = %cfg.site.frontend_dir, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

    info!("connections drained; closing database pool");
    if let Err(e) = db.close().await {
        error!(error = %e, "database pool did not close cleanly");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 3000;
        assert_eq!(bind_addr(&cfg).unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn bad_host_is_a_startup_error() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::BindAddr(_))));
    }

    #[tokio::test]
    async fn run_returns_once_shutdown_resolves() -> anyhow::Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let Ok(url) = std::env::var("DATABASE_URL") else { return Ok(()) };

        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        cfg.database.url = url;
        cfg.site.frontend_dir = "/nonexistent-frontend-for-tests".into();

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(run(cfg, async move { let _ = rx.await; }));
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        let _ = tx.send(());

        let joined = tokio::time::timeout(std::time::Duration::from_secs(30), handle).await?;
        joined??;
        Ok(())
    }
}
