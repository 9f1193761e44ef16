//! Serve command implementation.

use anyhow::{Context, Result};
use skein_lib::prelude::*;
use std::path::Path;

/// Load configuration and run the API server until Ctrl+C.
pub(crate) async fn serve(config_path: Option<&Path>, address: Option<String>) -> Result<()> {
    let mut config = Config::load(config_path).context("Failed to load configuration")?;
    if let Some(address) = address {
        config.server.address = address;
        config.validate().context("Invalid --address")?;
    }

    skein_lib::serve(&config)
        .await
        .with_context(|| format!("Server on {} failed", config.server.address))
}
