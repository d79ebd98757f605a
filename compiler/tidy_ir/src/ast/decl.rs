//! Declarations and source files.

use bitflags::bitflags;

use crate::{EntityId, ExprId, FileId, Name, QualType, Span, StmtId, VarId};

/// Whether a variable is a formal parameter or a local.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VarKind {
    Param,
    Local,
}

/// A parameter or local variable declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub kind: VarKind,
    /// `Name::EMPTY` for unnamed parameters.
    pub name: Name,
    pub ty: QualType,
    /// Extent of the declared type, including any `const` spelled with it.
    pub type_span: Span,
    /// The identifier; a point span right after the type when unnamed.
    pub name_span: Span,
    pub init: Option<ExprId>,
    /// Whether the declaration was produced by a macro expansion.
    pub from_macro: bool,
}

bitflags! {
    /// Properties of one function declaration.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct FunctionFlags: u8 {
        /// Non-static member function.
        const METHOD = 1 << 0;
        /// Participates in virtual dispatch (declared `virtual`, overrides a
        /// virtual, or is overridden).
        const VIRTUAL = 1 << 1;
        /// Marked `override`.
        const OVERRIDE = 1 << 2;
        /// Marked `final`.
        const FINAL = 1 << 3;
        /// Instantiated from a template; the written source is the template.
        const TEMPLATE_INSTANTIATION = 1 << 4;
    }
}

/// One declaration of a function. A definition has a body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDecl {
    /// Shared by every redeclaration of the same function.
    pub entity: EntityId,
    pub name: Name,
    pub params: Vec<VarId>,
    pub return_type: QualType,
    pub body: Option<StmtId>,
    pub flags: FunctionFlags,
    pub file: FileId,
    pub span: Span,
    pub name_span: Span,
}

impl FunctionDecl {
    /// Whether this declaration is the definition.
    pub fn is_definition(&self) -> bool {
        self.body.is_some()
    }
}

/// A `#include` directive as seen by the preprocessor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IncludeDirective {
    /// Header name without delimiters, e.g. `utility` or `foo/bar.h`.
    pub header: String,
    /// `<...>` rather than `"..."`.
    pub angled: bool,
    /// The whole directive line, excluding the trailing newline.
    pub span: Span,
}

/// A file participating in the translation unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceFile {
    pub path: String,
    /// Directives in source order.
    pub includes: Vec<IncludeDirective>,
}
