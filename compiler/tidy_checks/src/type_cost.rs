//! Type cost predicate.
//!
//! Decides which parameter types are worth flagging at all. Copy cost is a
//! property of the canonical type: typedefs are looked through and top-level
//! `const` never changes the answer.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use tidy_ir::{QualType, RecordFlags, TypeId, TypeKind, TypePool};

/// Copy and move cost of types.
pub trait TypeCost {
    /// Whether copying a value of `ty` is expensive enough to avoid.
    fn is_expensive_to_copy(&self, ty: QualType) -> bool;

    /// Whether moving from `ty` runs user code (so a move is cheaper than
    /// a copy, and worth suggesting).
    fn has_non_trivial_move_constructor(&self, ty: QualType) -> bool;

    /// Same as [`has_non_trivial_move_constructor`](Self::has_non_trivial_move_constructor)
    /// for move assignment.
    fn has_non_trivial_move_assignment(&self, ty: QualType) -> bool;
}

/// [`TypeCost`] over the facts recorded in a [`TypePool`].
///
/// - Records are expensive unless trivially copyable. Incomplete records
///   cannot be judged and count as cheap.
/// - Builtins and pointers are cheap.
/// - References are never copied, so never expensive.
/// - Dependent types cannot be decided before instantiation and count as
///   cheap.
///
/// # Interior Mutability
///
/// The expensive-to-copy answer is cached per canonical type behind a
/// `RefCell`, because the trait takes `&self`.
pub struct PoolTypeCost<'pool> {
    pool: &'pool TypePool,
    cache: RefCell<FxHashMap<TypeId, bool>>,
}

impl<'pool> PoolTypeCost<'pool> {
    /// Create a cost predicate over `pool`.
    pub fn new(pool: &'pool TypePool) -> Self {
        PoolTypeCost {
            pool,
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &'pool TypePool {
        self.pool
    }

    fn expensive_by_kind(&self, ty: TypeId) -> bool {
        match self.pool.kind(ty) {
            TypeKind::Record { flags, .. } => {
                !flags.intersects(RecordFlags::TRIVIALLY_COPYABLE | RecordFlags::INCOMPLETE)
            }
            TypeKind::Builtin(_)
            | TypeKind::Pointer(_)
            | TypeKind::LValueReference(_)
            | TypeKind::RValueReference(_)
            | TypeKind::Dependent(_) => false,
            // Canonical types never are typedefs; resolve anyway.
            TypeKind::Typedef { underlying, .. } => self.is_expensive_to_copy(*underlying),
        }
    }

    fn record_has(&self, ty: QualType, flag: RecordFlags) -> bool {
        self.pool
            .record_flags(ty)
            .is_some_and(|flags| flags.contains(flag))
    }
}

impl TypeCost for PoolTypeCost<'_> {
    fn is_expensive_to_copy(&self, ty: QualType) -> bool {
        let canonical = self.pool.canonical(ty).ty;

        if let Some(&cached) = self.cache.borrow().get(&canonical) {
            return cached;
        }

        let result = self.expensive_by_kind(canonical);
        self.cache.borrow_mut().insert(canonical, result);
        result
    }

    fn has_non_trivial_move_constructor(&self, ty: QualType) -> bool {
        self.record_has(ty, RecordFlags::NON_TRIVIAL_MOVE_CTOR)
    }

    fn has_non_trivial_move_assignment(&self, ty: QualType) -> bool {
        self.record_has(ty, RecordFlags::NON_TRIVIAL_MOVE_ASSIGN)
    }
}
