use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "cidades_api";

/// Worker count from `config.toml`, else `TOKIO_WORKER_THREADS`, else tokio's default.
fn worker_threads() -> Option<usize> {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.server.worker_threads,
        Err(_) => std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse().ok()),
    }
}

fn install_panic_hook(instance: Uuid, pid: u32) {
    std::panic::set_hook(Box::new(move |panic| {
        error!(service = SERVICE, event = "panic", %instance, pid, message = %panic, "unhandled panic");
    }));
}

fn build_runtime(workers: Option<usize>) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(n) = workers {
        builder.worker_threads(n);
    }
    builder.build()
}

fn main() -> ExitCode {
    // .env before the subscriber so RUST_LOG / LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Uuid::new_v4();
    let pid = std::process::id();
    install_panic_hook(instance, pid);

    let workers = worker_threads();
    let rt = match build_runtime(workers) {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "cannot build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %instance,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        workers = workers.unwrap_or_default(),
        "starting"
    );

    // server::run returns once Ctrl+C has drained in-flight requests
    match rt.block_on(server::run()) {
        Ok(()) => {
            info!(service = SERVICE, event = "stop", %instance, pid, "stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = SERVICE, event = "run_failed", error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
