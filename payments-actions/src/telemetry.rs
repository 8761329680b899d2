use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static INIT: Once = Once::new();

/// Logs go to stderr; stdout is reserved for the explorer link.
pub fn setup_telemetry() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let stderr_layer = fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(env_filter);

        if let Err(e) = tracing_subscriber::registry().with(stderr_layer).try_init() {
            eprintln!("Warning: failed to initialise logging: {}", e);
        }
    });
}
