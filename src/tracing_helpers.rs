//! Zero-cost logging helpers.
//!
//! When the `tracing` feature is enabled, these macros forward to the `tracing` crate.
//! When disabled (default), they expand to nothing.
//!
//! The crate never installs a subscriber. The integration tests do, through
//! `tests/common/mod.rs`:
//!
//! ```bash
//! # Run the stress tests with consolidation/cut events visible
//! RUST_LOG=fibonacci_heap=trace cargo test --features tracing --test stress_tests
//! ```

#![allow(unused_macros, unused_imports)]

/// Trace-level event (cuts, links). No-op without the `tracing` feature.
#[cfg(feature = "tracing")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

/// Debug-level event (consolidation passes). No-op without the `tracing` feature.
#[cfg(feature = "tracing")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_log;
pub(crate) use trace_log;
