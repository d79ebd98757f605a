//! Checks over a materialized C-family translation unit.
//!
//! The centerpiece is [`UnnecessaryValueParam`]
//! (`performance-unnecessary-value-param`): it finds parameters of
//! expensive-to-copy type that are passed by value but never need their
//! own copy, and proposes either turning them into const references or
//! moving from their single use. The analysis runs in five stages, one
//! module each:
//!
//! 1. [`references`](unnecessary_value_param::references): every use of the
//!    parameter in the body
//! 2. [`classify`](unnecessary_value_param::classify): how each use treats
//!    the value, and whether it repeats
//! 3. [`decision`](unnecessary_value_param::decision): none, const
//!    reference, or move
//! 4. [`gate`](unnecessary_value_param::gate): whether an edit may be
//!    attached, or the finding stays report-only
//! 5. [`fixes`](unnecessary_value_param::fixes): the concrete edits across
//!    every redeclaration
//!
//! [`DeleteNullPointer`] (`readability-delete-null-pointer`) is a small
//! independent check sharing only the reporting plumbing.
//!
//! # Tracing
//!
//! Decisions and safety-gate denials are logged at `debug`, per-reference
//! classification at `trace`. Call [`init_tracing`] from a driver and set
//! `RUST_LOG=tidy_checks=debug` to see them.

use std::sync::Once;

mod check;
pub mod delete_null_pointer;
pub mod includes;
mod options;
mod registry;
mod type_cost;
pub mod unnecessary_value_param;

#[cfg(test)]
mod test_helpers;

pub use check::{Check, CheckContext};
pub use delete_null_pointer::DeleteNullPointer;
pub use includes::{IncludeInserter, IncludeStyle};
pub use options::{CheckOptions, OptionError};
pub use registry::CheckRegistry;
pub use type_cost::{PoolTypeCost, TypeCost};
pub use unnecessary_value_param::UnnecessaryValueParam;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debugging.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tidy_checks=debug` or `RUST_LOG=tidy_checks=trace`.
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
