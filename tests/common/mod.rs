//! Shared test setup.
//!
//! With the `tracing` feature on, `init_tracing()` installs a formatting
//! subscriber filtered by `RUST_LOG` (default `warn`), so the heap's cut and
//! consolidation events show up in test output:
//!
//! ```bash
//! RUST_LOG=fibonacci_heap=trace cargo test --features tracing --test stress_tests
//! ```

#![allow(dead_code)]

#[cfg(feature = "tracing")]
use std::sync::Once;

#[cfg(feature = "tracing")]
static INIT: Once = Once::new();

/// Installs the test subscriber once per test binary.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// No subscriber without the `tracing` feature; the heap emits nothing.
#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {}
