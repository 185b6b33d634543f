//! Companion HTTP server for browsing and playing generated audio

mod audio_files;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use narrate_config::Config;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use audio_files::list_audio_files;
pub use error::ServerError;

/// File server with the player page, the audio listing, and the audio files
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Audio is served from `output_directory` under `/output`; every other
    /// path falls through to the static player page directory.
    pub fn new(config: &Config) -> Self {
        let output_directory = config.output_directory().to_path_buf();
        let static_directory = config.server.static_directory();

        tracing::debug!(
            output = %output_directory.display(),
            assets = %static_directory.display(),
            "building file server"
        );

        let audio_state = Arc::new(audio_files::AudioFilesState {
            output_directory: output_directory.clone(),
        });

        let router = Router::new()
            .route("/api/audio-files", get(audio_files::list_handler))
            .with_state(audio_state)
            .nest_service("/output", ServeDir::new(output_directory))
            .fallback_service(ServeDir::new(static_directory))
            .layer(TraceLayer::new_for_http());

        Self {
            router,
            listen_address: config.server.listen_address(),
        }
    }

    /// Override the configured listen address
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "serving audio player at http://{local_addr}");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
