use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use backend_application::AppState;
use backend_interfaces_http::build_router;

use crate::context::AppContext;

fn build_router_with_layers(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}

pub async fn run_standalone(config_path: Option<PathBuf>) -> Result<()> {
    let context = AppContext::new(config_path.as_deref()).await?;
    let state = context.state;

    let addr: SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on {}", addr);

    serve(listener, state, shutdown_signal()).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests for at
/// most the configured grace period. Exceeding it is an error.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let grace = state.config.shutdown_grace();
    let app = build_router_with_layers(state);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("server task failed")??;
            return Err(anyhow!("server stopped before a shutdown was requested"));
        }
        _ = shutdown => {}
    }

    info!(grace_seconds = grace.as_secs(), "shutting down server");
    let _ = stop_tx.send(());

    match timeout(grace, &mut server).await {
        Ok(joined) => {
            joined.context("server task failed")??;
            info!("server exited");
            Ok(())
        }
        Err(_) => {
            server.abort();
            Err(anyhow!(
                "server forced to shutdown: requests still in flight after {}s",
                grace.as_secs()
            ))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for ctrl-c: {}", err);
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
                warn!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received interrupt signal"),
        _ = terminate => info!("received terminate signal"),
    }
}
