//! Rewrite decision.
//!
//! With every reference classified, a parameter is left alone if any use
//! needs its own copy. Otherwise, a non-const parameter whose single use
//! copies it into a new object (outside any loop) is better moved from;
//! everything else becomes a const reference.

use smallvec::SmallVec;

use tidy_ir::ExprId;

use super::candidates::ParameterCandidate;
use super::classify::{Reference, UsageKind};

/// All references to one parameter, and the ones a const reference serves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsageReport {
    references: SmallVec<[Reference; 4]>,
    const_compatible: SmallVec<[ExprId; 4]>,
}

impl UsageReport {
    pub fn new(references: impl IntoIterator<Item = Reference>) -> Self {
        let references: SmallVec<[Reference; 4]> = references.into_iter().collect();
        let const_compatible = references
            .iter()
            .filter(|r| r.usage.is_const_compatible())
            .map(|r| r.expr)
            .collect();
        UsageReport {
            references,
            const_compatible,
        }
    }

    /// The classified references, in source order.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Every reference.
    pub fn all(&self) -> impl Iterator<Item = ExprId> + '_ {
        self.references.iter().map(|r| r.expr)
    }

    /// The references usable through a const reference.
    pub fn const_compatible(&self) -> &[ExprId] {
        &self.const_compatible
    }

    /// Whether every reference is const-compatible.
    pub fn only_const_uses(&self) -> bool {
        self.all().all(|e| self.const_compatible.contains(&e))
    }
}

/// What to suggest for one parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RewriteDecision {
    /// The parameter needs its copy.
    None,
    /// Pass by const reference; `already_const` only changes the wording.
    SuggestConstReference { already_const: bool },
    /// Move from the single use instead of copying.
    SuggestMove(Reference),
}

/// Decide the rewrite for `param` given its usage.
pub fn decide(param: &ParameterCandidate, report: &UsageReport) -> RewriteDecision {
    if !param.expensive || !report.only_const_uses() {
        return RewriteDecision::None;
    }

    if let [single] = report.references() {
        // Moving inside a loop would leave the parameter moved-from on the
        // next iteration.
        let movable = match single.usage {
            UsageKind::CopyCtorArgument => param.non_trivial_move_ctor,
            UsageKind::CopyAssignArgument => param.non_trivial_move_assign,
            _ => false,
        };
        if !param.is_const && !single.inside_repetition && movable {
            return RewriteDecision::SuggestMove(*single);
        }
    }

    RewriteDecision::SuggestConstReference {
        already_const: param.is_const,
    }
}
