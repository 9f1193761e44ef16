//! Estimate command implementation.

use anyhow::{Context, Result};
use skein_lib::prelude::*;
use std::path::Path;
use tracing::debug;

/// Estimate yarn for a project and print the result.
pub(crate) fn estimate(
    config: Option<&Path>,
    pattern_type: &str,
    size: &str,
    yarn_weight: &str,
    gauge: Option<i64>,
    json: bool,
) -> Result<()> {
    let estimator = Config::load(config)
        .context("Failed to load configuration")?
        .estimator()?;

    let request = EstimationRequest::parse(pattern_type, size, yarn_weight, gauge)
        .context("Invalid project description")?;
    debug!(
        pattern_type = %request.pattern_type(),
        size = %request.size(),
        yarn_weight = %request.yarn_weight(),
        gauge = %request.gauge(),
        "estimating"
    );

    let result = estimator.estimate(&request)?;
    println!("{}", render(&estimator, &result, json)?);
    Ok(())
}

fn render(estimator: &YarnEstimator, result: &EstimationResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }
    Ok(estimator.format_result(result))
}
