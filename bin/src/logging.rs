use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// `RUST_LOG` wins when set. Otherwise `quiet` logs warnings only and each
/// `verbose` step raises the level from info to debug to trace.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, quiet)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // A subscriber may already be installed (e.g. by tests)
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}

fn default_directives(verbose: u8, quiet: bool) -> String {
    if quiet {
        return "skein=warn".to_string();
    }
    match verbose {
        0 => "skein=info".to_string(),
        1 => "skein=debug,tower_http=debug".to_string(),
        _ => "skein=trace,tower_http=trace".to_string(),
    }
}
