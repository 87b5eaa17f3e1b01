use std::env;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const ENV: &str = "SOLAST_LOG";

/// Installs a stderr subscriber filtered by `SOLAST_LOG`. Logging stays off when the
/// variable is unset.
pub(crate) fn init_tracing() {
    let Ok(filter) = env::var(ENV) else {
        return;
    };
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let result = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(layer)
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
    }
}
