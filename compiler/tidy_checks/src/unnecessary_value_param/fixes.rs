//! Fix synthesis.

use tidy_diagnostic::TextEdit;
use tidy_ir::{FileId, TranslationUnit};

use super::candidates::FunctionCandidate;
use super::classify::Reference;

/// Edits turning parameter `index` into a const reference in every
/// redeclaration of the candidate.
///
/// Constness is checked per redeclaration: `void f(const T t)` may be
/// forward-declared as `void f(T t)`. A redeclaration with too few
/// parameters is skipped.
pub fn const_reference_edits(
    tu: &TranslationUnit,
    candidate: &FunctionCandidate,
    index: usize,
) -> Vec<TextEdit> {
    let types = tu.types();
    let mut edits = Vec::with_capacity(candidate.redeclarations.len() * 2);

    for &redecl in &candidate.redeclarations {
        let decl = tu.function(redecl);
        let Some(&var) = decl.params.get(index) else {
            tracing::warn!(
                function = redecl.raw(),
                index,
                params = decl.params.len(),
                "redeclaration has too few parameters, skipping its edit",
            );
            continue;
        };
        let param = tu.var(var);
        edits.push(TextEdit::insert(param.type_span.end, "&").in_file(decl.file));
        if !types.canonical(param.ty).is_const {
            edits.push(TextEdit::insert(param.type_span.start, "const ").in_file(decl.file));
        }
    }

    edits
}

/// Edits wrapping `reference` in `std::move(...)`, plus the `<utility>`
/// include if one is needed.
pub fn move_edits(reference: &Reference, file: FileId, include: Option<TextEdit>) -> Vec<TextEdit> {
    let mut edits = vec![
        TextEdit::insert(reference.span.start, "std::move(").in_file(file),
        TextEdit::insert(reference.span.end, ")").in_file(file),
    ];
    edits.extend(include);
    edits
}
