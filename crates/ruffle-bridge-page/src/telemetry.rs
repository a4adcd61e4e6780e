//! Logging setup.
//!
//! Native hosts and tests get a fmt subscriber filtered by `RUST_LOG`. In the
//! browser, events go to the developer console through `tracing-wasm`. Calling
//! `init` more than once is a no-op.

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt().with_env_filter(EnvFilter::from_default_env()).try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(tracing::Level::INFO)
                .build(),
        );
    });
}
