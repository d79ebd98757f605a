//! Shared test utilities for the checks.
//!
//! A [`Fixture`] pairs a source snippet with the tree a front end would
//! produce for it. Spans that matter (declared types, parameter names,
//! references that may be wrapped) are looked up in the snippet, so a
//! test can apply the reported edits and compare the rewritten source.
//! Only compiled in test builds.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tidy_diagnostic::{Diagnostic, TextEdit};
use tidy_ir::ast::{DeclTarget, ExprKind, FunctionDecl, FunctionFlags, StmtKind};
use tidy_ir::{
    BuiltinKind, EntityId, ExprId, FileId, FunctionId, QualType, RecordFlags, Span, StmtId,
    TranslationUnit, TranslationUnitBuilder, VarId,
};

use crate::{Check, CheckContext, PoolTypeCost};

pub(crate) struct Fixture {
    pub(crate) b: TranslationUnitBuilder,
    pub(crate) source: &'static str,
}

impl Fixture {
    pub(crate) fn new(source: &'static str) -> Self {
        Fixture {
            b: TranslationUnitBuilder::new("main.cpp"),
            source,
        }
    }

    /// Span of the `nth` (zero-based) occurrence of `needle` in the source.
    pub(crate) fn span(&self, needle: &str, nth: usize) -> Span {
        let start = self
            .source
            .match_indices(needle)
            .nth(nth)
            .map(|(i, _)| i)
            .unwrap_or_else(|| panic!("`{needle}` #{nth} not in fixture source"));
        Span::try_from_range(start..start + needle.len()).unwrap()
    }

    /// A record type.
    pub(crate) fn record(&mut self, name: &str, flags: RecordFlags) -> QualType {
        let name = self.b.intern(name);
        QualType::new(self.b.types_mut().record(name, flags))
    }

    /// `Widget`: expensive to copy, cheap to move.
    pub(crate) fn widget(&mut self) -> QualType {
        self.record(
            "Widget",
            RecordFlags::NON_TRIVIAL_MOVE_CTOR | RecordFlags::NON_TRIVIAL_MOVE_ASSIGN,
        )
    }

    pub(crate) fn int(&mut self) -> QualType {
        QualType::new(self.b.types_mut().builtin(BuiltinKind::Int))
    }

    pub(crate) fn void(&self) -> QualType {
        self.b.void()
    }

    /// `const T&`.
    pub(crate) fn const_ref(&mut self, ty: QualType) -> QualType {
        QualType::new(self.b.types_mut().lvalue_ref_to(ty.with_const()))
    }

    /// `T&`.
    pub(crate) fn mut_ref(&mut self, ty: QualType) -> QualType {
        QualType::new(self.b.types_mut().lvalue_ref_to(ty))
    }

    /// `T&&`.
    pub(crate) fn rvalue_ref(&mut self, ty: QualType) -> QualType {
        QualType::new(self.b.types_mut().rvalue_ref_to(ty))
    }

    /// `T*`.
    pub(crate) fn pointer(&mut self, ty: QualType) -> QualType {
        QualType::new(self.b.types_mut().pointer_to(ty))
    }

    /// A parameter whose type is spelled by the `nth` occurrence of
    /// `type_text`, followed by one space and the name.
    pub(crate) fn param(&mut self, name: &str, ty: QualType, type_text: &str, nth: usize) -> VarId {
        let type_span = self.span(type_text, nth);
        let name_start = type_span.end + 1;
        let name_end = name_start + u32::try_from(name.len()).unwrap();
        self.b
            .param(name, ty, type_span, Span::new(name_start, name_end))
    }

    /// A parameter without spans, for tests that never apply edits.
    pub(crate) fn bare_param(&mut self, name: &str, ty: QualType) -> VarId {
        self.b.param(name, ty, Span::DUMMY, Span::DUMMY)
    }

    /// A reference to `var` at the `nth` occurrence of `text`.
    pub(crate) fn var_ref(&mut self, var: VarId, text: &str, nth: usize) -> ExprId {
        let span = self.span(text, nth);
        self.b.var_ref(var, span)
    }

    /// A reference to `var` without a meaningful span.
    pub(crate) fn bare_ref(&mut self, var: VarId) -> ExprId {
        self.b.var_ref(var, Span::DUMMY)
    }

    pub(crate) fn expr(&mut self, kind: ExprKind, ty: QualType) -> ExprId {
        self.b.expr(kind, Span::DUMMY, ty)
    }

    /// Call of an external function `callee` with the given formals.
    pub(crate) fn call(&mut self, callee: &str, args: Vec<ExprId>, params: Vec<QualType>) -> ExprId {
        let void = self.void();
        let name = self.b.intern(callee);
        let callee = self.expr(ExprKind::DeclRef(DeclTarget::External(name)), void);
        self.expr(
            ExprKind::Call {
                callee,
                args,
                params,
            },
            void,
        )
    }

    pub(crate) fn stmt(&mut self, kind: StmtKind) -> StmtId {
        self.b.stmt(kind, Span::DUMMY)
    }

    pub(crate) fn expr_stmt(&mut self, expr: ExprId) -> StmtId {
        self.stmt(StmtKind::Expr(expr))
    }

    pub(crate) fn block(&mut self, stmts: Vec<StmtId>) -> StmtId {
        self.stmt(StmtKind::Compound(stmts))
    }

    pub(crate) fn entity(&mut self) -> EntityId {
        self.b.new_entity()
    }

    /// One declaration of `entity`.
    pub(crate) fn function(
        &mut self,
        entity: EntityId,
        name: &str,
        params: Vec<VarId>,
        body: Option<StmtId>,
        flags: FunctionFlags,
        span: Span,
    ) -> FunctionId {
        let name = self.b.intern(name);
        let return_type = self.void();
        self.b.function(FunctionDecl {
            entity,
            name,
            params,
            return_type,
            body,
            flags,
            file: FileId::MAIN,
            span,
            name_span: Span::DUMMY,
        })
    }

    /// A plain definition with a fresh entity.
    pub(crate) fn define(&mut self, name: &str, params: Vec<VarId>, body: StmtId) -> FunctionId {
        let entity = self.entity();
        self.function(
            entity,
            name,
            params,
            Some(body),
            FunctionFlags::empty(),
            Span::DUMMY,
        )
    }

    pub(crate) fn finish(self) -> TranslationUnit {
        self.b.finish()
    }
}

/// Run `check` over `tu` with the pool-backed cost predicate.
pub(crate) fn run(check: &mut dyn Check, tu: &TranslationUnit) -> Vec<Diagnostic> {
    let cost = PoolTypeCost::new(tu.types());
    let cx = CheckContext::new(tu, &cost);
    let mut sink = Vec::new();
    check.check(&cx, &mut sink);
    sink
}

/// Apply the main-file edits of `diag` to `source`.
pub(crate) fn apply(source: &str, diag: &Diagnostic) -> String {
    TextEdit::apply_all(FileId::MAIN, source, &diag.edits).expect("edits apply cleanly")
}
