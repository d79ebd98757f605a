//! Candidate selection.
//!
//! A function is analyzed once, through its definition: it must have a
//! body, must not be an instantiation of a template (the template itself is
//! what the user wrote), and must not be marked `override` or `final` on
//! any of its declarations. Its candidate parameters are the by-value
//! parameters whose canonical type is expensive to copy.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use tidy_ir::{EntityId, FunctionFlags, FunctionId, QualType, StmtId, TranslationUnit, VarId};

use super::gate;
use crate::TypeCost;

/// One parameter worth analyzing.
///
/// Identity across redeclarations is `index`: a forward declaration may
/// name the parameter differently or leave it unnamed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParameterCandidate {
    /// Zero-based position in the parameter list.
    pub index: usize,
    /// The parameter as declared by the definition.
    pub var: VarId,
    /// Declared type in the definition.
    pub ty: QualType,
    /// Whether the definition's parameter is const after canonicalization.
    pub is_const: bool,
    pub expensive: bool,
    pub non_trivial_move_ctor: bool,
    pub non_trivial_move_assign: bool,
}

/// A function definition under analysis.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionCandidate {
    /// The definition.
    pub function: FunctionId,
    pub entity: EntityId,
    pub body: StmtId,
    /// Every declaration of the entity, definition included, in source order.
    pub redeclarations: Vec<FunctionId>,
    /// Some declaration takes part in virtual dispatch.
    pub is_virtual: bool,
    /// The function is named somewhere other than as a callee.
    pub has_escaping_reference: bool,
    pub params: SmallVec<[ParameterCandidate; 4]>,
}

impl FunctionCandidate {
    /// Build the candidate for `function`, or `None` if the function does
    /// not qualify or has no candidate parameter.
    pub fn from_definition(
        tu: &TranslationUnit,
        type_cost: &dyn TypeCost,
        function: FunctionId,
        has_escaping_reference: bool,
    ) -> Option<Self> {
        let decl = tu.function(function);
        let body = decl.body?;
        if decl.flags.contains(FunctionFlags::TEMPLATE_INSTANTIATION) {
            return None;
        }

        let redeclarations = tu.redeclarations(decl.entity).to_vec();
        let flags = redeclarations
            .iter()
            .fold(decl.flags, |acc, &r| acc | tu.function(r).flags);
        if flags.intersects(FunctionFlags::OVERRIDE | FunctionFlags::FINAL) {
            return None;
        }

        let types = tu.types();
        let params: SmallVec<[ParameterCandidate; 4]> = decl
            .params
            .iter()
            .enumerate()
            .filter_map(|(index, &var)| {
                let ty = tu.var(var).ty;
                let canonical = types.canonical(ty);
                if types.is_reference(canonical) || !type_cost.is_expensive_to_copy(canonical) {
                    return None;
                }
                Some(ParameterCandidate {
                    index,
                    var,
                    ty,
                    is_const: canonical.is_const,
                    expensive: true,
                    non_trivial_move_ctor: type_cost.has_non_trivial_move_constructor(canonical),
                    non_trivial_move_assign: type_cost.has_non_trivial_move_assignment(canonical),
                })
            })
            .collect();
        if params.is_empty() {
            return None;
        }

        Some(FunctionCandidate {
            function,
            entity: decl.entity,
            body,
            redeclarations,
            is_virtual: flags.contains(FunctionFlags::VIRTUAL),
            has_escaping_reference,
            params,
        })
    }
}

/// Every candidate of `tu`, one per function entity, in declaration order.
pub fn select_candidates(tu: &TranslationUnit, type_cost: &dyn TypeCost) -> Vec<FunctionCandidate> {
    let escaping = gate::escaping_entities(tu);
    let mut seen = FxHashSet::default();
    let mut candidates = Vec::new();

    for (id, decl) in tu.functions() {
        if !decl.is_definition() || !seen.insert(decl.entity) {
            continue;
        }
        let escapes = escaping.contains(&decl.entity);
        if let Some(candidate) = FunctionCandidate::from_definition(tu, type_cost, id, escapes) {
            candidates.push(candidate);
        }
    }

    tracing::debug!(candidates = candidates.len(), "selected candidate functions");
    candidates
}
