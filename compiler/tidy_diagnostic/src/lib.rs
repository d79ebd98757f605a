//! Findings reported by the tidy checks.
//!
//! A check never touches source text. It describes what it found as a
//! [`Diagnostic`] and, when a rewrite is safe, attaches the [`TextEdit`]s
//! that would perform it. Whatever applies edits (an editor integration, a
//! `--fix` driver) lives outside this workspace.
//!
//! Diagnostics flow into a [`DiagnosticSink`]. A plain `Vec<Diagnostic>`
//! is enough for tests; drivers use a [`DiagnosticQueue`] to get a stable,
//! de-duplicated order across checks.

mod check_code;
mod diagnostic;
pub mod fixes;
pub mod queue;
mod sink;

pub use check_code::CheckCode;
pub use diagnostic::{Diagnostic, Severity};
pub use fixes::TextEdit;
pub use queue::DiagnosticQueue;
pub use sink::DiagnosticSink;
