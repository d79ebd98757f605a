//! Usage classification.
//!
//! Each reference is classified by the context that consumes it, found by
//! walking up the parent map from the `DeclRef`. Nodes that hand the same
//! object through unchanged (parentheses, qualification casts, field access
//! with `.`, the branches of `?:`) are skipped; the first node that actually
//! does something with the object decides the category.
//!
//! Anything not recognized counts as [`UsageKind::Mutating`]. A false
//! "mutating" only costs a missed finding, while a false "read-only" would
//! produce a rewrite that does not compile or changes behavior.

use tidy_ir::ast::{AssignKind, BinaryOp, CastKind, CtorKind, ExprKind, StmtKind, UnaryOp};
use tidy_ir::{
    ExprId, FunctionId, NodeId, ParentMap, QualType, Span, TranslationUnit, TypePool, VarId,
};

/// How one reference treats the parameter's value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UsageKind {
    /// Only read; a const reference would serve.
    ReadOnly,
    /// Written, moved from, or bound to something that may write.
    Mutating,
    /// Its address is taken.
    AddressEscaping,
    /// Sole argument of a copy constructor of the same type.
    CopyCtorArgument,
    /// Right-hand side of a copy assignment of the same type.
    CopyAssignArgument,
}

impl UsageKind {
    /// Whether the use would stay valid through a const reference.
    pub fn is_const_compatible(self) -> bool {
        matches!(
            self,
            UsageKind::ReadOnly | UsageKind::CopyCtorArgument | UsageKind::CopyAssignArgument
        )
    }
}

/// One classified use of a parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Reference {
    pub expr: ExprId,
    pub span: Span,
    /// Whether the `DeclRef` was produced by a macro expansion.
    pub from_macro: bool,
    pub usage: UsageKind,
    /// Whether some enclosing statement is a loop.
    pub inside_repetition: bool,
}

/// Classifies references inside one function.
pub struct UsageClassifier<'tu> {
    tu: &'tu TranslationUnit,
    parents: ParentMap,
}

impl<'tu> UsageClassifier<'tu> {
    /// Build the parent map of `function` once for all its parameters.
    pub fn new(tu: &'tu TranslationUnit, function: FunctionId) -> Self {
        UsageClassifier {
            tu,
            parents: ParentMap::for_function(tu, function),
        }
    }

    /// Classify the reference `expr` to `param`.
    pub fn classify(&self, param: VarId, expr: ExprId) -> Reference {
        let node = self.tu.expr(expr);
        let usage = self.usage(self.tu.var(param).ty, expr);
        let inside_repetition = self.inside_repetition(expr);
        tracing::trace!(
            expr = expr.raw(),
            ?usage,
            inside_repetition,
            "classified reference"
        );
        Reference {
            expr,
            span: node.span,
            from_macro: node.from_macro,
            usage,
            inside_repetition,
        }
    }

    fn inside_repetition(&self, expr: ExprId) -> bool {
        self.parents.ancestors(NodeId::Expr(expr)).any(|node| match node {
            NodeId::Stmt(stmt) => self.tu.stmt(stmt).kind.is_loop(),
            NodeId::Expr(_) | NodeId::Var(_) => false,
        })
    }

    fn usage(&self, param_ty: QualType, expr: ExprId) -> UsageKind {
        let types = self.tu.types();
        let mut current = expr;
        // Set once the walk went through `.field`: from then on the value
        // in hand is a subobject, not the parameter itself.
        let mut subobject = false;

        loop {
            let Some(parent) = self.parents.parent(NodeId::Expr(current)) else {
                return UsageKind::Mutating;
            };
            let id = match parent {
                NodeId::Expr(id) => id,
                NodeId::Var(var) => {
                    return if binds_as_const(types, self.tu.var(var).ty) {
                        UsageKind::ReadOnly
                    } else {
                        UsageKind::Mutating
                    };
                }
                NodeId::Stmt(stmt) => return self.statement_usage(&self.tu.stmt(stmt).kind, current),
            };

            let parent_expr = self.tu.expr(id);
            match &parent_expr.kind {
                ExprKind::Paren(_) => {}
                ExprKind::ImplicitCast { kind, .. } => match kind {
                    k if k.preserves_lvalue() => {}
                    CastKind::ArrayToPointerDecay => {
                        return pointer_usage(types, parent_expr.ty);
                    }
                    k if k.reads_operand() => return UsageKind::ReadOnly,
                    _ => return UsageKind::Mutating,
                },
                ExprKind::ExplicitCast(_) => {
                    return if binds_as_const(types, parent_expr.ty) {
                        UsageKind::ReadOnly
                    } else {
                        UsageKind::Mutating
                    };
                }
                ExprKind::Member { arrow: false, .. } => subobject = true,
                ExprKind::Member { arrow: true, .. } => {
                    return self.through_pointer(types, current, subobject);
                }
                ExprKind::Conditional { cond, .. } => {
                    if *cond == current {
                        return UsageKind::ReadOnly;
                    }
                }
                ExprKind::Unary { op, .. } => {
                    return match op {
                        UnaryOp::AddrOf => UsageKind::AddressEscaping,
                        UnaryOp::Deref => self.through_pointer(types, current, subobject),
                        op if op.mutates_operand() => UsageKind::Mutating,
                        _ => UsageKind::ReadOnly,
                    };
                }
                // The comma operator yields its right operand unchanged.
                ExprKind::Binary {
                    op: BinaryOp::Comma,
                    rhs,
                    ..
                } if *rhs == current => {}
                ExprKind::Binary { .. } => return UsageKind::ReadOnly,
                ExprKind::Assign { kind, lhs, .. } => {
                    if *lhs == current {
                        return UsageKind::Mutating;
                    }
                    return match kind {
                        AssignKind::Builtin => UsageKind::ReadOnly,
                        AssignKind::CopyAssignment => {
                            let target = self.tu.expr(*lhs).ty;
                            if !subobject && types.same_unqualified(target, param_ty) {
                                UsageKind::CopyAssignArgument
                            } else {
                                UsageKind::ReadOnly
                            }
                        }
                        AssignKind::MoveAssignment => UsageKind::Mutating,
                        AssignKind::Overloaded { param } => argument_usage(types, Some(*param)),
                    };
                }
                ExprKind::CompoundAssign { lhs, .. } => {
                    return if *lhs == current {
                        UsageKind::Mutating
                    } else {
                        UsageKind::ReadOnly
                    };
                }
                ExprKind::Call { callee, args, params } => {
                    if *callee == current {
                        return UsageKind::Mutating;
                    }
                    return argument_usage(types, formal_for(args, params, current));
                }
                ExprKind::MemberCall {
                    object,
                    arrow,
                    method_is_const,
                    args,
                    params,
                    ..
                } => {
                    if *object != current {
                        return argument_usage(types, formal_for(args, params, current));
                    }
                    if *arrow {
                        return self.through_pointer(types, current, subobject);
                    }
                    return if *method_is_const {
                        UsageKind::ReadOnly
                    } else {
                        UsageKind::Mutating
                    };
                }
                ExprKind::Construct { ctor, args, params } => {
                    return match ctor {
                        CtorKind::Copy
                            if args.len() == 1
                                && !subobject
                                && types.same_unqualified(parent_expr.ty, param_ty) =>
                        {
                            UsageKind::CopyCtorArgument
                        }
                        CtorKind::Move => UsageKind::Mutating,
                        _ => argument_usage(types, formal_for(args, params, current)),
                    };
                }
                ExprKind::Delete { .. }
                | ExprKind::Other(_)
                | ExprKind::DeclRef(_)
                | ExprKind::IntLit(_)
                | ExprKind::BoolLit(_)
                | ExprKind::StringLit(_)
                | ExprKind::NullPtr
                | ExprKind::This => return UsageKind::Mutating,
            }
            current = id;
        }
    }

    /// A statement consuming the expression `child` directly.
    fn statement_usage(&self, kind: &StmtKind, child: ExprId) -> UsageKind {
        match kind {
            // Discarded-value expressions and conditions only read.
            StmtKind::Expr(_)
            | StmtKind::If { .. }
            | StmtKind::While { .. }
            | StmtKind::Do { .. }
            | StmtKind::For { .. } => UsageKind::ReadOnly,
            // `return p;` moves from a by-value parameter implicitly; a
            // const reference would turn that into a copy.
            StmtKind::Return(_) => UsageKind::Mutating,
            StmtKind::RangeFor { .. }
            | StmtKind::Compound(_)
            | StmtKind::Decl(_)
            | StmtKind::Break
            | StmtKind::Continue
            | StmtKind::Null
            | StmtKind::Other { .. } => {
                tracing::trace!(expr = child.raw(), "unmodeled statement context");
                UsageKind::Mutating
            }
        }
    }

    /// Dereferencing the value in hand. Only a pointer field reached
    /// through `.` leaves the parameter itself untouched; anything else is
    /// an overloaded operator whose constness is unknown.
    fn through_pointer(&self, types: &TypePool, current: ExprId, subobject: bool) -> UsageKind {
        if subobject && types.is_pointer(self.tu.expr(current).ty) {
            UsageKind::ReadOnly
        } else {
            UsageKind::Mutating
        }
    }
}

/// The formal parameter type `arg` binds to, `None` for variadic positions.
fn formal_for(args: &[ExprId], params: &[QualType], arg: ExprId) -> Option<QualType> {
    let index = args.iter().position(|&a| a == arg)?;
    params.get(index).copied()
}

fn argument_usage(types: &TypePool, formal: Option<QualType>) -> UsageKind {
    match formal {
        Some(ty) if binds_as_const(types, ty) => UsageKind::ReadOnly,
        _ => UsageKind::Mutating,
    }
}

fn pointer_usage(types: &TypePool, pointer: QualType) -> UsageKind {
    match types.pointee(pointer) {
        Some(pointee) if pointee.is_const => UsageKind::ReadOnly,
        _ => UsageKind::Mutating,
    }
}

/// Whether initializing something of type `target` from the value leaves
/// the value untouched: by-value copies, const lvalue references and
/// pointers to const.
fn binds_as_const(types: &TypePool, target: QualType) -> bool {
    if types.is_const_lvalue_ref(target) {
        true
    } else if types.is_reference(target) {
        false
    } else if types.is_pointer(target) {
        pointer_usage(types, target) == UsageKind::ReadOnly
    } else {
        true
    }
}
