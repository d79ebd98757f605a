//! Tidy IR - the tree model the checks analyze.
//!
//! This crate contains the materialized form of one C-family translation
//! unit, as handed over by an external parsing front end:
//! - Spans for source locations
//! - Names for interned identifiers
//! - A type pool with canonicalization and const qualifiers
//! - Expression, statement and declaration arenas
//! - A visitor and a parent map for upward context queries
//! - A builder front ends use to populate all of the above
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`, types are `TypeId(u32)`
//! - **Flatten Everything**: no `Box<Expr>`; children are `ExprId(u32)` indices
//! - **Identity by Index**: two references are the same reference iff their
//!   ids are equal, which keeps set-based reasoning in the checks trivial

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod builder;
mod ids;
mod interner;
mod name;
mod parent_map;
mod span;
mod types;
pub mod visitor;

pub use ast::{
    AssignKind, BinaryOp, CastKind, CtorKind, DeclTarget, Expr, ExprKind, FunctionDecl,
    FunctionFlags, IncludeDirective, SourceFile, Stmt, StmtKind, TranslationUnit, UnaryOp,
    VarDecl, VarKind,
};
pub use builder::TranslationUnitBuilder;
pub use ids::{EntityId, ExprId, FileId, FunctionId, NodeId, StmtId, TypeId, VarId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use parent_map::{Ancestors, ParentMap};
pub use span::{Span, SpanError};
pub use types::{BuiltinKind, QualType, RecordFlags, TypeKind, TypePool};
