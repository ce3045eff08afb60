//! Quill Resolve - multi-pass declaration resolution
//!
//! Resolution binds type and name references to declarations and settles
//! every declaration, in as many passes as forward references require.
//!
//! # Protocol
//!
//! Every node resolves through [`Resolver::resolve`], which returns a
//! [`Response`]:
//! - `Ok`: the node is done; calling again does nothing.
//! - `Pending`: a dependency is not ready; the next pass retries.
//!
//! Hard errors are not a response. They are reported to the run's
//! diagnostic queue, the run is marked failed, and the pass continues so that
//! independent errors surface together.
//!
//! # Passes
//!
//! [`Resolver::run`] repeats full walks until one completes with nothing
//! pending, or until [`ResolverConfig::max_passes`] is spent. Nodes still
//! pending then become one unresolved-reference error each.
//!
//! # Registration
//!
//! Enumerators are registered while the tree is built, with [`add_element`],
//! which computes implicit values from the enum's increment rule.

mod config;
mod register;
mod resolve;
mod resolver;
mod response;
mod stack;
mod trail;

#[cfg(test)]
mod test_support;

use std::sync::Once;

pub use config::{ResolverConfig, MAX_PASSES_ENV};
pub use register::add_element;
pub use resolver::{PendingNode, ResolutionOutcome, ResolutionStatus, Resolver};
pub use response::Response;
pub use stack::ensure_sufficient_stack;
pub use trail::{Trail, TrailGuard};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=quill_resolve=debug`,
/// or `=trace` to see individual deferrals.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
