// ABOUTME: Logging setup for the cotai binary
// ABOUTME: tracing-subscriber with RUST_LOG filtering, defaulting to warnings

/// Install the global subscriber. Call once, from `main`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false) // Don't show module paths in logs
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
