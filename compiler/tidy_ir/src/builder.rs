//! Incremental construction of a [`TranslationUnit`].
//!
//! Front ends translate their own tree into this model bottom-up: parameters
//! first, then body expressions and statements, then the function that owns
//! them. Redeclarations of one function share an [`EntityId`] obtained from
//! [`TranslationUnitBuilder::new_entity`].

use crate::ast::{
    DeclTarget, Expr, ExprKind, FunctionDecl, IncludeDirective, SourceFile, Stmt, StmtKind,
    TranslationUnit, VarDecl, VarKind,
};
use crate::{
    BuiltinKind, EntityId, ExprId, FileId, FunctionId, Name, QualType, Span, StmtId,
    StringInterner, TypePool, VarId,
};

/// Builder for an immutable [`TranslationUnit`].
#[derive(Debug)]
pub struct TranslationUnitBuilder {
    tu: TranslationUnit,
    void: QualType,
}

impl TranslationUnitBuilder {
    /// Start a translation unit whose main file is `main_path` ([`FileId::MAIN`]).
    pub fn new(main_path: impl Into<String>) -> Self {
        let mut types = TypePool::new();
        let void = QualType::new(types.builtin(BuiltinKind::Void));
        let mut builder = TranslationUnitBuilder {
            tu: TranslationUnit {
                exprs: Vec::new(),
                stmts: Vec::new(),
                vars: Vec::new(),
                functions: Vec::new(),
                entities: Vec::new(),
                files: Vec::new(),
                types,
                interner: StringInterner::new(),
            },
            void,
        };
        builder.add_file(main_path);
        builder
    }

    /// Intern an identifier.
    pub fn intern(&mut self, s: &str) -> Name {
        self.tu.interner.intern(s)
    }

    /// The `void` type, used for expressions whose value is discarded.
    pub fn void(&self) -> QualType {
        self.void
    }

    /// The type pool.
    pub fn types(&self) -> &TypePool {
        &self.tu.types
    }

    /// Mutable access to the type pool.
    pub fn types_mut(&mut self) -> &mut TypePool {
        &mut self.tu.types
    }

    /// Register another source file (usually a header).
    pub fn add_file(&mut self, path: impl Into<String>) -> FileId {
        let id = FileId::next(self.tu.files.len());
        self.tu.files.push(SourceFile {
            path: path.into(),
            includes: Vec::new(),
        });
        id
    }

    /// Record an `#include` directive seen in `file`.
    ///
    /// # Panics
    /// Panics if `file` was not registered with this builder.
    pub fn add_include(&mut self, file: FileId, header: impl Into<String>, angled: bool, span: Span) {
        self.tu.files[file.index()].includes.push(IncludeDirective {
            header: header.into(),
            angled,
            span,
        });
    }

    /// Append an expression.
    pub fn expr(&mut self, kind: ExprKind, span: Span, ty: QualType) -> ExprId {
        self.push_expr(kind, span, ty, false)
    }

    /// Append an expression produced by a macro expansion.
    pub fn macro_expr(&mut self, kind: ExprKind, span: Span, ty: QualType) -> ExprId {
        self.push_expr(kind, span, ty, true)
    }

    fn push_expr(&mut self, kind: ExprKind, span: Span, ty: QualType, from_macro: bool) -> ExprId {
        let id = ExprId::next(self.tu.exprs.len());
        self.tu.exprs.push(Expr {
            kind,
            span,
            ty,
            from_macro,
        });
        id
    }

    /// Append a reference to a variable, typed with its declared type.
    ///
    /// # Panics
    /// Panics if `var` was not created by this builder.
    pub fn var_ref(&mut self, var: VarId, span: Span) -> ExprId {
        let ty = self.tu.vars[var.index()].ty;
        self.expr(ExprKind::DeclRef(DeclTarget::Var(var)), span, ty)
    }

    /// Append a reference to a function declaration.
    ///
    /// # Panics
    /// Panics if `function` was not created by this builder.
    pub fn function_ref(&mut self, function: FunctionId, span: Span) -> ExprId {
        let ty = self.tu.functions[function.index()].return_type;
        self.expr(ExprKind::DeclRef(DeclTarget::Function(function)), span, ty)
    }

    /// Append a statement.
    pub fn stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        let id = StmtId::next(self.tu.stmts.len());
        self.tu.stmts.push(Stmt { kind, span });
        id
    }

    /// Declare a named parameter.
    pub fn param(&mut self, name: &str, ty: QualType, type_span: Span, name_span: Span) -> VarId {
        let name = self.intern(name);
        self.push_var(VarKind::Param, name, ty, type_span, name_span, None)
    }

    /// Declare an unnamed parameter.
    pub fn unnamed_param(&mut self, ty: QualType, type_span: Span) -> VarId {
        self.push_var(
            VarKind::Param,
            Name::EMPTY,
            ty,
            type_span,
            type_span.end_point(),
            None,
        )
    }

    /// Declare a local variable.
    pub fn local(
        &mut self,
        name: &str,
        ty: QualType,
        type_span: Span,
        name_span: Span,
        init: Option<ExprId>,
    ) -> VarId {
        let name = self.intern(name);
        self.push_var(VarKind::Local, name, ty, type_span, name_span, init)
    }

    fn push_var(
        &mut self,
        kind: VarKind,
        name: Name,
        ty: QualType,
        type_span: Span,
        name_span: Span,
        init: Option<ExprId>,
    ) -> VarId {
        let id = VarId::next(self.tu.vars.len());
        self.tu.vars.push(VarDecl {
            kind,
            name,
            ty,
            type_span,
            name_span,
            init,
            from_macro: false,
        });
        id
    }

    /// Mutable access to a variable, e.g. to mark it as macro-expanded.
    ///
    /// # Panics
    /// Panics if `var` was not created by this builder.
    pub fn var_mut(&mut self, var: VarId) -> &mut VarDecl {
        &mut self.tu.vars[var.index()]
    }

    /// Allocate an identity for a new logical function.
    pub fn new_entity(&mut self) -> EntityId {
        let id = EntityId::next(self.tu.entities.len());
        self.tu.entities.push(Vec::new());
        id
    }

    /// Append a function declaration and link it into its entity's
    /// redeclaration list.
    ///
    /// # Panics
    /// Panics if `decl.entity` was not allocated by this builder.
    pub fn function(&mut self, decl: FunctionDecl) -> FunctionId {
        let id = FunctionId::next(self.tu.functions.len());
        self.tu.entities[decl.entity.index()].push(id);
        self.tu.functions.push(decl);
        id
    }

    /// Finish building.
    ///
    /// Redeclaration lists are ordered by source position (file, then
    /// offset) so consumers never depend on the order the front end
    /// happened to emit declarations in.
    pub fn finish(mut self) -> TranslationUnit {
        let functions = &self.tu.functions;
        for redecls in &mut self.tu.entities {
            redecls.sort_by_key(|id| {
                let f = &functions[id.index()];
                (f.file, f.span.start)
            });
        }
        self.tu
    }
}
