use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};

use flowmind_api as api;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = api::config::load_config().context("failed to load configuration")?;
    api::config::init_tracing(cfg.log_level(), cfg.log_json);

    if cfg.rng_seed.is_some() {
        if cfg.is_production() {
            warn!("rng_seed is set in production; generated values will repeat across restarts");
        } else {
            info!("Deterministic random source enabled (rng_seed set)");
        }
    }

    let addr = cfg.bind_address();
    let state = api::AppState::new(cfg);
    let app = api::app_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("🚀 FlowMind AI Backend listening on http://{}", addr);
    info!("📊 Health check: http://{}/api/health", addr);
    info!("🧠 AI insights: http://{}/api/ai/insights", addr);
    info!("📚 API docs: http://{}/swagger-ui", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
