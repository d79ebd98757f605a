use tidy_diagnostic::TextEdit;
use tidy_ir::{IncludeDirective, SourceFile};

use super::IncludeStyle;

/// Category of an included header.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IncludeKind {
    /// The header belonging to this file (`foo.h` for `foo.cc`).
    MainHeader,
    /// `<stdio.h>` and friends.
    CSystem,
    /// `<vector>` and friends.
    CxxSystem,
    /// Project headers.
    NonSystem,
}

const TEST_SUFFIXES: [&str; 4] = ["_test-inl", "_unittest", "_test", "-inl"];

/// File name without directories and without the last extension.
fn stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}

fn strip_test_suffix(stem: &str) -> &str {
    TEST_SUFFIXES
        .iter()
        .find_map(|suffix| stem.strip_suffix(suffix))
        .unwrap_or(stem)
}

/// Classify `header` as included from the file at `file_path`.
pub fn classify_include(file_path: &str, header: &str, angled: bool) -> IncludeKind {
    if angled {
        return if header.ends_with(".h") {
            IncludeKind::CSystem
        } else {
            IncludeKind::CxxSystem
        };
    }
    let header_stem = strip_test_suffix(stem(header));
    if !header_stem.is_empty() && header_stem == strip_test_suffix(stem(file_path)) {
        IncludeKind::MainHeader
    } else {
        IncludeKind::NonSystem
    }
}

/// The include blocks of one file, grouped per style.
pub struct IncludeSorter<'f> {
    style: IncludeStyle,
    path: &'f str,
    /// Directives per block, in source order.
    blocks: Vec<Vec<&'f IncludeDirective>>,
}

impl<'f> IncludeSorter<'f> {
    /// Group the directives of `file`.
    pub fn new(style: IncludeStyle, file: &'f SourceFile) -> Self {
        let mut blocks = vec![Vec::new(); style.block_count()];
        for directive in &file.includes {
            let kind = classify_include(&file.path, &directive.header, directive.angled);
            blocks[style.block_of(kind)].push(directive);
        }
        IncludeSorter {
            style,
            path: &file.path,
            blocks,
        }
    }

    /// The edit adding `#include` of `header` to this file.
    ///
    /// Offsets refer to the file; the caller sets the edit's file.
    pub fn insertion(&self, header: &str, angled: bool) -> TextEdit {
        let line = if angled {
            format!("#include <{header}>")
        } else {
            format!("#include \"{header}\"")
        };
        let block = self
            .style
            .block_of(classify_include(self.path, header, angled));

        if let Some(last) = self.blocks[block].last() {
            // Directive spans exclude the trailing newline.
            return match self.blocks[block]
                .iter()
                .find(|d| self.style.sorts_before(header, &d.header))
            {
                Some(next) => TextEdit::insert(next.span.start, format!("{line}\n")),
                None => TextEdit::insert(last.span.end, format!("\n{line}")),
            };
        }

        if let Some(first) = self.blocks[block + 1..].iter().find_map(|b| b.first()) {
            return TextEdit::insert(first.span.start, format!("{line}\n\n"));
        }

        if let Some(last) = self.blocks[..block].iter().rev().find_map(|b| b.last()) {
            return TextEdit::insert(last.span.end, format!("\n\n{line}"));
        }

        TextEdit::insert(0, format!("{line}\n"))
    }
}
