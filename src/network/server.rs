//! HTTP Server
//!
//! Binds the listener and serves the API until shutdown.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::{create_router, AppState};
use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;

/// HTTP server for Learnboard
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
    shutdown: Arc<Notify>,
}

impl Server {
    /// Create a new server with the given config and engine
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self {
            config,
            engine,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Router serving this server's engine as the configured identity
    pub fn router(&self) -> axum::Router {
        create_router(AppState::new(Arc::clone(&self.engine), self.config.user_id))
    }

    /// Bind the configured address and serve until Ctrl+C or `shutdown()`
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        self.serve(listener, ctrl_c()).await
    }

    /// Serve on an already-bound listener until `signal` resolves or
    /// `shutdown()` is called
    pub async fn serve<F>(&self, listener: TcpListener, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!("Listening on http://{}", addr);

        let notify = Arc::clone(&self.shutdown);
        let stop = async move {
            tokio::select! {
                _ = signal => tracing::info!("Received shutdown signal"),
                _ = notify.notified() => tracing::info!("Shutdown requested"),
            }
        };

        axum::serve(listener, self.router())
            .with_graceful_shutdown(stop)
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Signal the server to shutdown gracefully
    ///
    /// Safe to call before `serve` starts; the request is remembered.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
