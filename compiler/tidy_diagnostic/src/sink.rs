use crate::Diagnostic;

/// Destination for diagnostics produced by a check.
///
/// Checks take `&mut dyn DiagnosticSink` so a driver can route findings
/// wherever it likes without the checks knowing.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
