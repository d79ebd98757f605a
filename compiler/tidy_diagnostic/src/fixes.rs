//! Text edits attached to diagnostics.
//!
//! An edit replaces the half-open byte range `span` of the original source
//! with `new_text`. Insertions use an empty span, deletions an empty text.
//! Offsets always refer to the unmodified source, so several edits of one
//! diagnostic can be applied together as long as they do not overlap.
//!
//! Every edit names the file it applies to. A single finding may touch
//! several files, e.g. a definition and its forward declaration in a header.

use std::fmt;

use tidy_ir::{FileId, Span};

/// A single text substitution.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextEdit {
    /// File the span refers to.
    pub file: FileId,
    /// The span to replace (empty for insertion).
    pub span: Span,
    /// The replacement text (empty for deletion).
    pub new_text: String,
}

impl TextEdit {
    /// Insert `text` at byte offset `at`.
    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        TextEdit {
            file: FileId::MAIN,
            span: Span::point(at),
            new_text: text.into(),
        }
    }

    /// Delete the text covered by `span`.
    pub fn delete(span: Span) -> Self {
        TextEdit {
            file: FileId::MAIN,
            span,
            new_text: String::new(),
        }
    }

    /// Replace the text covered by `span` with `text`.
    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        TextEdit {
            file: FileId::MAIN,
            span,
            new_text: text.into(),
        }
    }

    /// Retarget the edit to `file` (edits default to [`FileId::MAIN`]).
    #[must_use]
    pub fn in_file(mut self, file: FileId) -> Self {
        self.file = file;
        self
    }

    /// Check if this is a pure insertion.
    pub fn is_insert(&self) -> bool {
        self.span.is_empty() && !self.new_text.is_empty()
    }

    /// Check if this is a pure deletion.
    pub fn is_delete(&self) -> bool {
        !self.span.is_empty() && self.new_text.is_empty()
    }

    /// Apply the edits targeting `file` to that file's `source`.
    ///
    /// Edits are applied back to front so earlier offsets stay valid;
    /// insertions at the same offset keep their relative order. Returns
    /// `None` if two edits overlap or one falls outside `source`.
    pub fn apply_all(file: FileId, source: &str, edits: &[TextEdit]) -> Option<String> {
        let mut sorted: Vec<&TextEdit> = edits.iter().filter(|e| e.file == file).collect();
        sorted.sort_by_key(|e| (e.span.start, e.span.end));

        for pair in sorted.windows(2) {
            if pair[0].span.end > pair[1].span.start {
                return None;
            }
        }

        let mut out = source.to_owned();
        for edit in sorted.iter().rev() {
            let range = edit.span.to_range();
            if range.end > out.len()
                || !out.is_char_boundary(range.start)
                || !out.is_char_boundary(range.end)
            {
                return None;
            }
            out.replace_range(range, &edit.new_text);
        }
        Some(out)
    }
}

impl fmt::Display for TextEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = (self.span.start, self.span.end);
        if self.is_insert() {
            write!(f, "insert {:?} at {start}", self.new_text)
        } else if self.is_delete() {
            write!(f, "delete {start}..{end}")
        } else {
            write!(f, "replace {start}..{end} with {:?}", self.new_text)
        }
    }
}

#[cfg(test)]
mod tests;
