use std::fmt;

use tidy_ir::{FileId, Span};

use crate::{CheckCode, TextEdit};

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// One finding, with the edits that would fix it.
///
/// An empty `edits` list means the finding is report-only: the check
/// decided the rewrite could not be applied safely.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Which check produced this.
    pub code: CheckCode,
    pub severity: Severity,
    /// File the primary location lives in.
    pub file: FileId,
    /// Primary location.
    pub span: Span,
    pub message: String,
    /// Edits in the order they were synthesized. Each names its own file,
    /// which need not be `file` (e.g. a forward declaration in a header).
    pub edits: Vec<TextEdit>,
}

impl Diagnostic {
    fn new_with_severity(code: CheckCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            file: FileId::MAIN,
            span: Span::DUMMY,
            message: String::new(),
            edits: Vec::new(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: CheckCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Create a new note diagnostic.
    pub fn note(code: CheckCode) -> Self {
        Self::new_with_severity(code, Severity::Note)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the primary location.
    pub fn at(mut self, file: FileId, span: Span) -> Self {
        self.file = file;
        self.span = span;
        self
    }

    /// Attach one edit.
    pub fn with_edit(mut self, edit: TextEdit) -> Self {
        self.edits.push(edit);
        self
    }

    /// Attach several edits.
    pub fn with_edits(mut self, edits: impl IntoIterator<Item = TextEdit>) -> Self {
        self.edits.extend(edits);
        self
    }

    /// Whether an automatic fix is attached.
    pub fn has_fix(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Whether this is a warning (vs a note).
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        write!(
            f,
            "\n  --> {:?} {}..{}",
            self.file, self.span.start, self.span.end
        )?;

        for edit in &self.edits {
            write!(f, "\n  = fix: {edit}")?;
        }

        Ok(())
    }
}
