use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = configs::AppConfig::load_lenient();
    let instance = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "site", event = "panic", %instance, message = %info, "unhandled panic");
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "site", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = "site",
        event = "start",
        %instance,
        version,
        host = %cfg.server.host,
        port = cfg.server.port,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        frontend_dir = %cfg.site.frontend_dir,
        migrations = cfg.database.run_migrations,
        "consultancy site starting"
    );

    match rt.block_on(server::run(cfg, server::shutdown_signal())) {
        Ok(()) => {
            info!(service = "site", event = "stop", %instance, "site stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "site", event = "run_failed", %instance, error = %e, "site failed");
            ExitCode::FAILURE
        }
    }
}
