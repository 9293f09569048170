use std::sync::Once;

/// Initialize tracing output. Call once from the host shell; repeated calls
/// are no-ops. The filter defaults to `livecast_core=debug` and can be
/// overridden with `RUST_LOG`.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "livecast_core=debug".parse().unwrap()),
            )
            .with_ansi(false)
            .init();
    });
}
