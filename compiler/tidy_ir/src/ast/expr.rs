//! Expression nodes.

use crate::{ExprId, FunctionId, Name, QualType, Span, VarId};

/// What a `DeclRef` names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclTarget {
    /// A parameter or local variable.
    Var(VarId),
    /// One specific declaration of a function.
    Function(FunctionId),
    /// A declaration the front end did not materialize (globals,
    /// enumerators, functions from other translation units).
    External(Name),
}

/// Implicit conversions inserted by the front end.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CastKind {
    /// Load of the value stored in an lvalue.
    LValueToRValue,
    /// Qualification-only change (e.g. adding const); keeps the lvalue.
    NoOp,
    /// Derived-to-base adjustment; keeps the lvalue.
    DerivedToBase,
    FunctionToPointerDecay,
    ArrayToPointerDecay,
    PointerToBoolean,
    NullToPointer,
    IntegralCast,
    /// Call to a user-defined conversion function.
    UserDefinedConversion,
    Other,
}

impl CastKind {
    /// Whether the cast yields the same object it was applied to.
    pub fn preserves_lvalue(self) -> bool {
        matches!(self, CastKind::NoOp | CastKind::DerivedToBase)
    }

    /// Whether the cast only reads its operand.
    pub fn reads_operand(self) -> bool {
        matches!(
            self,
            CastKind::LValueToRValue
                | CastKind::PointerToBoolean
                | CastKind::IntegralCast
                | CastKind::FunctionToPointerDecay
                | CastKind::ArrayToPointerDecay
                | CastKind::NullToPointer
        )
    }
}

/// Built-in unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    AddrOf,
    Deref,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
    Plus,
    Minus,
    BitNot,
    LogicalNot,
}

impl UnaryOp {
    /// Whether the operator writes to its operand.
    pub fn mutates_operand(self) -> bool {
        matches!(
            self,
            UnaryOp::PreInc | UnaryOp::PreDec | UnaryOp::PostInc | UnaryOp::PostDec
        )
    }
}

/// Built-in binary operators (assignments are separate nodes).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    BitAnd,
    BitOr,
    BitXor,
    LogicalAnd,
    LogicalOr,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Comma,
}

impl BinaryOp {
    /// Whether this is `==` or `!=`.
    pub fn is_equality(self) -> bool {
        matches!(self, BinaryOp::Eq | BinaryOp::Ne)
    }
}

/// Which assignment operator an `=` resolved to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignKind {
    /// Built-in scalar assignment.
    Builtin,
    /// Class copy-assignment operator (`T& operator=(const T&)`).
    CopyAssignment,
    /// Class move-assignment operator (`T& operator=(T&&)`).
    MoveAssignment,
    /// Any other `operator=` overload, with the type of its parameter.
    Overloaded { param: QualType },
}

/// Which constructor a construction resolved to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CtorKind {
    Default,
    Copy,
    Move,
    /// Any other constructor (converting, multi-argument, ...).
    Other,
}

/// An expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    /// Type of the expression (for `DeclRef`, the declared type).
    pub ty: QualType,
    /// Whether the expression was produced by a macro expansion.
    pub from_macro: bool,
}

/// Expression kinds.
///
/// Overloaded operators other than `=` are expected to be lowered to
/// `Call` (free operator) or `MemberCall` (member operator) by the front end.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Reference to a declaration by name.
    DeclRef(DeclTarget),
    Paren(ExprId),
    ImplicitCast {
        kind: CastKind,
        operand: ExprId,
    },
    /// Explicit cast to `ty` of the enclosing [`Expr`].
    ExplicitCast(ExprId),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },
    Conditional {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    /// `lhs = rhs`.
    Assign {
        kind: AssignKind,
        lhs: ExprId,
        rhs: ExprId,
    },
    /// `lhs op= rhs`.
    CompoundAssign {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },
    /// Call through a callee expression. `params` holds the formal parameter
    /// types of the resolved callee; arguments past the end are variadic.
    Call {
        callee: ExprId,
        args: Vec<ExprId>,
        params: Vec<QualType>,
    },
    /// Member function call `object.method(args)` / `object->method(args)`.
    MemberCall {
        object: ExprId,
        arrow: bool,
        method: Name,
        method_is_const: bool,
        args: Vec<ExprId>,
        params: Vec<QualType>,
    },
    /// Field access `base.field` / `base->field`.
    Member {
        base: ExprId,
        arrow: bool,
        field: Name,
    },
    /// Construction of a value of the enclosing [`Expr`]'s type, whether
    /// written as `T(x)`, `T{x}` or implied by copy-initialization.
    Construct {
        ctor: CtorKind,
        args: Vec<ExprId>,
        params: Vec<QualType>,
    },
    /// `delete operand` / `delete[] operand`.
    Delete {
        operand: ExprId,
        array: bool,
    },
    IntLit(i64),
    BoolLit(bool),
    StringLit(Name),
    NullPtr,
    This,
    /// A construct the front end does not model; its children are still
    /// walked so references inside it are seen.
    Other(Vec<ExprId>),
}
