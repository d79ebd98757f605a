use rustc_hash::{FxHashMap, FxHashSet};

use tidy_diagnostic::TextEdit;
use tidy_ir::{FileId, TranslationUnit};

use super::{IncludeSorter, IncludeStyle};

/// Adds `#include` directives at most once per header and file.
///
/// The set of headers per file is seeded lazily from the file's existing
/// directives and grows with every insertion handed out, so a second
/// request for the same header in the same file yields nothing. Call
/// [`reset`](Self::reset) before moving on to another translation unit.
#[derive(Debug)]
pub struct IncludeInserter {
    style: IncludeStyle,
    present: FxHashMap<FileId, FxHashSet<String>>,
}

impl IncludeInserter {
    pub fn new(style: IncludeStyle) -> Self {
        IncludeInserter {
            style,
            present: FxHashMap::default(),
        }
    }

    pub fn style(&self) -> IncludeStyle {
        self.style
    }

    /// Forget everything inserted so far.
    pub fn reset(&mut self) {
        self.present.clear();
    }

    /// The edit including `header` in `file`, or `None` if the file already
    /// includes it or an earlier call already inserted it.
    ///
    /// # Panics
    /// Panics if `file` does not belong to `tu`.
    pub fn insertion(
        &mut self,
        tu: &TranslationUnit,
        file: FileId,
        header: &str,
        angled: bool,
    ) -> Option<TextEdit> {
        let source = tu.file(file);
        let present = self.present.entry(file).or_insert_with(|| {
            source
                .includes
                .iter()
                .map(|d| d.header.clone())
                .collect()
        });
        if !present.insert(header.to_owned()) {
            tracing::trace!(header, file = file.index(), "include already present");
            return None;
        }
        let edit = IncludeSorter::new(self.style, source).insertion(header, angled);
        Some(edit.in_file(file))
    }
}
