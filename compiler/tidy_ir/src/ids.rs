//! Arena indices for the translation unit.
//!
//! Nodes never own their children: every edge is a `u32` index into one of
//! the [`TranslationUnit`](crate::TranslationUnit) arenas. Equality is an
//! integer compare, which is what the checks rely on when they collect
//! references into sets.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create from a raw arena index.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the raw `u32` value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Get the index as `usize` (for indexing into `Vec`s).
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Id of the next element pushed onto an arena of `len` elements.
            ///
            /// # Panics
            /// Panics if the arena outgrows `u32` indices.
            #[inline]
            pub(crate) fn next(len: usize) -> Self {
                Self(u32::try_from(len).unwrap_or_else(|_| {
                    panic!(concat!(stringify!($name), " arena exceeded u32::MAX entries"))
                }))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(
    /// Index into the expression arena.
    ExprId
);
define_id!(
    /// Index into the statement arena.
    StmtId
);
define_id!(
    /// Index into the variable arena (parameters and locals).
    VarId
);
define_id!(
    /// Index into the function declaration arena. One per declaration,
    /// so a forward declaration and its definition have distinct ids.
    FunctionId
);
define_id!(
    /// Identity of a logical function shared by all of its redeclarations.
    EntityId
);
define_id!(
    /// Index into the type pool.
    TypeId
);

/// Index of a source file within the translation unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct FileId(u32);

impl FileId {
    /// The main file of a translation unit is always registered first.
    pub const MAIN: FileId = FileId(0);

    /// Create from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the index as `usize`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn next(len: usize) -> Self {
        Self(u32::try_from(len).unwrap_or_else(|_| panic!("FileId arena exceeded u32::MAX")))
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

/// Any node that can appear in a function body.
///
/// Variables are nodes too: a local's initializer hangs off its `VarDecl`,
/// so the parent of an initializer expression is `NodeId::Var`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeId {
    Stmt(StmtId),
    Expr(ExprId),
    Var(VarId),
}
