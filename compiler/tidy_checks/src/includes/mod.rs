//! `#include` insertion.
//!
//! The move rewrite needs `<utility>`. When the file does not include it
//! yet, the rewrite carries one more edit adding the directive where the
//! project's include style wants it. [`IncludeSorter`] knows where a new
//! directive goes in one file; [`IncludeInserter`] remembers what was
//! already added so each header is inserted at most once per file.

mod inserter;
mod sorter;

use std::fmt;
use std::str::FromStr;

pub use inserter::IncludeInserter;
pub use sorter::{classify_include, IncludeKind, IncludeSorter};

use crate::OptionError;

/// Grouping and ordering convention for include blocks.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum IncludeStyle {
    /// Main header, project headers, then system headers; case-insensitive
    /// order within a block.
    #[default]
    Llvm,
    /// Main header, C system, C++ standard library, then project headers;
    /// byte-wise order within a block.
    Google,
}

impl IncludeStyle {
    /// Configuration spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            IncludeStyle::Llvm => "llvm",
            IncludeStyle::Google => "google",
        }
    }

    /// Position of the block holding headers of `kind`.
    pub fn block_of(self, kind: IncludeKind) -> usize {
        match (self, kind) {
            (_, IncludeKind::MainHeader) => 0,
            (IncludeStyle::Llvm, IncludeKind::NonSystem)
            | (IncludeStyle::Google, IncludeKind::CSystem) => 1,
            (IncludeStyle::Llvm, IncludeKind::CSystem | IncludeKind::CxxSystem)
            | (IncludeStyle::Google, IncludeKind::CxxSystem) => 2,
            (IncludeStyle::Google, IncludeKind::NonSystem) => 3,
        }
    }

    /// Number of blocks this style distinguishes.
    pub fn block_count(self) -> usize {
        match self {
            IncludeStyle::Llvm => 3,
            IncludeStyle::Google => 4,
        }
    }

    /// Whether header `a` sorts strictly before `b` within one block.
    pub fn sorts_before(self, a: &str, b: &str) -> bool {
        match self {
            IncludeStyle::Llvm => {
                let a = a.bytes().map(|c| c.to_ascii_lowercase());
                let b = b.bytes().map(|c| c.to_ascii_lowercase());
                a.lt(b)
            }
            IncludeStyle::Google => a < b,
        }
    }
}

impl FromStr for IncludeStyle {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "llvm" => Ok(IncludeStyle::Llvm),
            "google" => Ok(IncludeStyle::Google),
            _ => Err(OptionError::InvalidValue {
                option: "IncludeStyle".to_owned(),
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for IncludeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
