//! HTTP API for the skein knitting community backend.
//!
//! - [`Config`] - TOML configuration with platform-directory lookup
//! - [`router`] - Axum router with the calculator and catalog endpoints
//! - [`serve`] - Bind and run the server until Ctrl+C
//!
//! ```ignore
//! use skein_server::{Config, serve};
//!
//! #[tokio::main]
//! async fn main() -> skein_types::Result<()> {
//!     let config = Config::load(None)?;
//!     serve(&config).await
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/skein-community/skein/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod routes;
mod forms;

pub use config::{Config, EstimatorConfig, ServerConfig};
pub use routes::{AppState, router};

use tokio::net::TcpListener;
use tracing::{info, warn};

use skein_types::Result;

/// Runs the API server described by `config` until Ctrl+C is received.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the listener cannot
/// be bound.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.socket_addr()?;
    let estimator = config.estimator()?;
    let app = router(AppState::new(estimator), &config.server.cors_origins);

    let listener = TcpListener::bind(addr).await?;
    info!(
        address = %listener.local_addr()?,
        safety_margin = estimator.safety_margin(),
        skein_grams = estimator.skein_grams(),
        "skein API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("skein API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
