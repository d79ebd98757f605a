//! Type pool.
//!
//! Types are interned once per translation unit and referred to by
//! [`TypeId`]. Top-level `const` lives on [`QualType`] rather than in the
//! pool, so `Widget` and `const Widget` share one pool entry and compare
//! equal after [`TypePool::canonical`] drops the qualifier.

use bitflags::bitflags;
use rustc_hash::FxHashMap;

use crate::{Name, TypeId};

bitflags! {
    /// Special-member facts about a record type, computed by the front end.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct RecordFlags: u8 {
        /// Copying is a bitwise copy (no user-provided copy operations,
        /// trivially copyable members and bases).
        const TRIVIALLY_COPYABLE = 1 << 0;
        /// The move constructor is user-provided or calls one that is.
        const NON_TRIVIAL_MOVE_CTOR = 1 << 1;
        /// The move assignment operator is user-provided or calls one that is.
        const NON_TRIVIAL_MOVE_ASSIGN = 1 << 2;
        /// Only forward-declared; size and special members are unknown.
        const INCOMPLETE = 1 << 3;
    }
}

/// Built-in scalar types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinKind {
    Void,
    Bool,
    Char,
    Int,
    Long,
    Float,
    Double,
    NullPtr,
}

/// A type with its top-level const qualifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualType {
    pub ty: TypeId,
    pub is_const: bool,
}

impl QualType {
    /// Unqualified type.
    #[inline]
    pub const fn new(ty: TypeId) -> Self {
        QualType {
            ty,
            is_const: false,
        }
    }

    /// Const-qualified type.
    #[inline]
    pub const fn constant(ty: TypeId) -> Self {
        QualType { ty, is_const: true }
    }

    /// Same type with the const qualifier added.
    #[inline]
    #[must_use]
    pub const fn with_const(self) -> Self {
        QualType {
            ty: self.ty,
            is_const: true,
        }
    }
}

/// Structural kind of a pool entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Builtin(BuiltinKind),
    /// Class, struct or union, identified by its qualified name.
    Record { name: Name, flags: RecordFlags },
    Pointer(QualType),
    LValueReference(QualType),
    RValueReference(QualType),
    /// Alias sugar; [`TypePool::canonical`] looks through it.
    Typedef { name: Name, underlying: QualType },
    /// A template parameter or a type depending on one.
    Dependent(Name),
}

/// Interning pool for [`TypeKind`]s.
#[derive(Debug, Default)]
pub struct TypePool {
    kinds: Vec<TypeKind>,
    dedup: FxHashMap<TypeKind, TypeId>,
}

impl TypePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a type kind, returning the existing id for duplicates.
    pub fn intern(&mut self, kind: TypeKind) -> TypeId {
        if let Some(&id) = self.dedup.get(&kind) {
            return id;
        }
        let id = TypeId::next(self.kinds.len());
        self.kinds.push(kind.clone());
        self.dedup.insert(kind, id);
        id
    }

    /// Intern a built-in type.
    pub fn builtin(&mut self, kind: BuiltinKind) -> TypeId {
        self.intern(TypeKind::Builtin(kind))
    }

    /// Intern a record type.
    pub fn record(&mut self, name: Name, flags: RecordFlags) -> TypeId {
        self.intern(TypeKind::Record { name, flags })
    }

    /// Intern a pointer type.
    pub fn pointer_to(&mut self, pointee: QualType) -> TypeId {
        self.intern(TypeKind::Pointer(pointee))
    }

    /// Intern an lvalue reference type.
    pub fn lvalue_ref_to(&mut self, pointee: QualType) -> TypeId {
        self.intern(TypeKind::LValueReference(pointee))
    }

    /// Intern an rvalue reference type.
    pub fn rvalue_ref_to(&mut self, pointee: QualType) -> TypeId {
        self.intern(TypeKind::RValueReference(pointee))
    }

    /// Intern a typedef.
    pub fn typedef(&mut self, name: Name, underlying: QualType) -> TypeId {
        self.intern(TypeKind::Typedef { name, underlying })
    }

    /// Look up a type kind.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this pool.
    pub fn kind(&self, id: TypeId) -> &TypeKind {
        &self.kinds[id.index()]
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Strip typedef sugar, accumulating const qualifiers on the way down.
    pub fn canonical(&self, qt: QualType) -> QualType {
        let mut current = qt;
        while let TypeKind::Typedef { underlying, .. } = self.kind(current.ty) {
            current = QualType {
                ty: underlying.ty,
                is_const: current.is_const || underlying.is_const,
            };
        }
        current
    }

    /// Whether both types name the same canonical type, ignoring top-level const.
    pub fn same_unqualified(&self, a: QualType, b: QualType) -> bool {
        self.canonical(a).ty == self.canonical(b).ty
    }

    /// Whether the canonical type is an lvalue or rvalue reference.
    pub fn is_reference(&self, qt: QualType) -> bool {
        matches!(
            self.kind(self.canonical(qt).ty),
            TypeKind::LValueReference(_) | TypeKind::RValueReference(_)
        )
    }

    /// Whether the canonical type is a pointer.
    pub fn is_pointer(&self, qt: QualType) -> bool {
        matches!(self.kind(self.canonical(qt).ty), TypeKind::Pointer(_))
    }

    /// Pointee of a canonical reference or pointer type.
    pub fn pointee(&self, qt: QualType) -> Option<QualType> {
        match self.kind(self.canonical(qt).ty) {
            TypeKind::Pointer(p) | TypeKind::LValueReference(p) | TypeKind::RValueReference(p) => {
                Some(self.canonical(*p))
            }
            _ => None,
        }
    }

    /// Whether `qt` is an lvalue reference to a const-qualified type.
    pub fn is_const_lvalue_ref(&self, qt: QualType) -> bool {
        match self.kind(self.canonical(qt).ty) {
            TypeKind::LValueReference(p) => self.canonical(*p).is_const,
            _ => false,
        }
    }

    /// Record flags of the canonical type, if it is a record.
    pub fn record_flags(&self, qt: QualType) -> Option<RecordFlags> {
        match self.kind(self.canonical(qt).ty) {
            TypeKind::Record { flags, .. } => Some(*flags),
            _ => None,
        }
    }
}
