//! Safety gate.
//!
//! Whether a finding may carry edits, or must stay report-only. The gate
//! is independent of which rewrite was chosen, except that a move only
//! touches the use site and so ignores the signature-level checks.

use rustc_hash::FxHashSet;

use tidy_ir::ast::{DeclTarget, ExprKind};
use tidy_ir::{EntityId, TranslationUnit};

use super::candidates::{FunctionCandidate, ParameterCandidate};
use super::classify::Reference;

/// Why an edit is withheld.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Denial {
    /// The parameter declaration comes from a macro expansion.
    MacroParameter,
    /// Changing the signature could break overriders.
    VirtualMethod,
    /// The function's address may flow into a function pointer whose type
    /// would stop matching.
    EscapingReference,
    /// The moved-from use comes from a macro expansion.
    MacroReference,
}

impl Denial {
    pub fn as_str(self) -> &'static str {
        match self {
            Denial::MacroParameter => "parameter declared in a macro expansion",
            Denial::VirtualMethod => "function takes part in virtual dispatch",
            Denial::EscapingReference => "function is referenced outside a call",
            Denial::MacroReference => "use site is in a macro expansion",
        }
    }
}

/// Why a const-reference rewrite of `param` may not be applied, if it may not.
pub fn const_reference_denial(
    tu: &TranslationUnit,
    candidate: &FunctionCandidate,
    param: &ParameterCandidate,
) -> Option<Denial> {
    let denial = if tu.var(param.var).from_macro {
        Some(Denial::MacroParameter)
    } else if candidate.is_virtual {
        Some(Denial::VirtualMethod)
    } else if candidate.has_escaping_reference {
        Some(Denial::EscapingReference)
    } else {
        None
    };
    if let Some(denial) = denial {
        tracing::debug!(
            function = candidate.function.raw(),
            param = param.index,
            reason = denial.as_str(),
            "const reference fix denied",
        );
    }
    denial
}

/// Why a move rewrite of `reference` may not be applied, if it may not.
pub fn move_denial(reference: &Reference) -> Option<Denial> {
    if reference.from_macro {
        tracing::debug!(
            expr = reference.expr.raw(),
            reason = Denial::MacroReference.as_str(),
            "move fix denied",
        );
        return Some(Denial::MacroReference);
    }
    None
}

/// Entities named anywhere in `tu` other than as the callee of a call.
///
/// The callee is found through parentheses and implicit casts, so
/// `(f)(x)` is a call while `g(f)` and `&f` are escapes.
pub fn escaping_entities(tu: &TranslationUnit) -> FxHashSet<EntityId> {
    let callees: FxHashSet<_> = tu
        .exprs()
        .filter_map(|(_, expr)| match &expr.kind {
            ExprKind::Call { callee, .. } => Some(tu.ignore_parens_and_casts(*callee)),
            _ => None,
        })
        .collect();

    tu.exprs()
        .filter_map(|(id, expr)| match expr.kind {
            ExprKind::DeclRef(DeclTarget::Function(f)) if !callees.contains(&id) => {
                Some(tu.function(f).entity)
            }
            _ => None,
        })
        .collect()
}

/// Whether `entity` is named outside callee position anywhere in `tu`.
pub fn is_referenced_outside_call(tu: &TranslationUnit, entity: EntityId) -> bool {
    escaping_entities(tu).contains(&entity)
}

#[cfg(test)]
mod tests;
