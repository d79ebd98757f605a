//! Syntax tree of one translation unit.
//!
//! All nodes live in flat arenas owned by [`TranslationUnit`] and refer to
//! each other by index. The tree is immutable once the
//! [`TranslationUnitBuilder`](crate::TranslationUnitBuilder) finishes it.

mod decl;
mod expr;
mod stmt;

pub use decl::{FunctionDecl, FunctionFlags, IncludeDirective, SourceFile, VarDecl, VarKind};
pub use expr::{AssignKind, BinaryOp, CastKind, CtorKind, DeclTarget, Expr, ExprKind, UnaryOp};
pub use stmt::{Stmt, StmtKind};

use crate::{
    EntityId, ExprId, FileId, FunctionId, Name, StmtId, StringInterner, TypePool, VarId,
};

/// A fully materialized translation unit.
#[derive(Debug)]
pub struct TranslationUnit {
    pub(crate) exprs: Vec<Expr>,
    pub(crate) stmts: Vec<Stmt>,
    pub(crate) vars: Vec<VarDecl>,
    pub(crate) functions: Vec<FunctionDecl>,
    /// Redeclarations per entity, in source order.
    pub(crate) entities: Vec<Vec<FunctionId>>,
    pub(crate) files: Vec<SourceFile>,
    pub(crate) types: TypePool,
    pub(crate) interner: StringInterner,
}

impl TranslationUnit {
    /// Look up an expression.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this translation unit.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Look up a statement.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this translation unit.
    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Look up a variable declaration.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this translation unit.
    #[inline]
    pub fn var(&self, id: VarId) -> &VarDecl {
        &self.vars[id.index()]
    }

    /// Look up a function declaration.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this translation unit.
    #[inline]
    pub fn function(&self, id: FunctionId) -> &FunctionDecl {
        &self.functions[id.index()]
    }

    /// Look up a source file.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this translation unit.
    #[inline]
    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.index()]
    }

    /// All function declarations with their ids.
    pub fn functions(&self) -> impl Iterator<Item = (FunctionId, &FunctionDecl)> {
        self.functions
            .iter()
            .enumerate()
            .map(|(i, f)| (FunctionId::next(i), f))
    }

    /// All expressions with their ids.
    pub fn exprs(&self) -> impl Iterator<Item = (ExprId, &Expr)> {
        self.exprs
            .iter()
            .enumerate()
            .map(|(i, e)| (ExprId::next(i), e))
    }

    /// Every declaration of `entity` (forward declarations and the
    /// definition) in source order.
    pub fn redeclarations(&self, entity: EntityId) -> &[FunctionId] {
        self.entities.get(entity.index()).map_or(&[], Vec::as_slice)
    }

    /// The type pool.
    #[inline]
    pub fn types(&self) -> &TypePool {
        &self.types
    }

    /// Resolve an interned identifier.
    #[inline]
    pub fn name(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Skip parentheses and implicit casts.
    pub fn ignore_parens_and_casts(&self, mut id: ExprId) -> ExprId {
        loop {
            match &self.expr(id).kind {
                ExprKind::Paren(inner) | ExprKind::ImplicitCast { operand: inner, .. } => {
                    id = *inner;
                }
                _ => return id,
            }
        }
    }

    /// The variable an expression names, looking through parentheses and
    /// implicit casts.
    pub fn referenced_var(&self, id: ExprId) -> Option<VarId> {
        match self.expr(self.ignore_parens_and_casts(id)).kind {
            ExprKind::DeclRef(DeclTarget::Var(var)) => Some(var),
            _ => None,
        }
    }
}
