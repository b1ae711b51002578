pub mod check;
pub mod config;
pub mod extract;
pub mod models;
pub mod risk;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding the library.
/// Filter comes from `RUST_LOG` when set, otherwise the crate default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("VitalCheck starting v{}", config::APP_VERSION);
}
