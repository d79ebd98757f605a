//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Checks report in traversal order, which depends on how the front end
//! laid out its arenas. The queue gives drivers a stable order instead:
//! by file, then by primary location, then by check. Exact duplicates
//! (e.g. the same finding reported through two registrations of a check)
//! are dropped.

use rustc_hash::FxHashSet;

use crate::{Diagnostic, DiagnosticSink};

/// Collects diagnostics until flushed.
#[derive(Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    /// Number of diagnostics queued (before deduplication).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, sorted and deduplicated.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        // Stable sort keeps report order for findings at the same location.
        diagnostics.sort_by(|a, b| {
            (a.file, a.span.start, a.code).cmp(&(b.file, b.span.start, b.code))
        });

        let mut seen = FxHashSet::default();
        diagnostics.retain(|d| seen.insert(d.clone()));
        diagnostics
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
