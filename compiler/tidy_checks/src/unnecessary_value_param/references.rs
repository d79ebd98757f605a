//! Reference enumeration.
//!
//! Parameters never alias across function boundaries, so every use of a
//! parameter is a `DeclRef` naming it somewhere inside its own body.

use tidy_ir::ast::{DeclTarget, ExprKind};
use tidy_ir::visitor::{walk_expr, Visitor};
use tidy_ir::{ExprId, StmtId, TranslationUnit, VarId};

/// All references to `param` under `body`, in traversal (source) order.
pub fn find_references(tu: &TranslationUnit, body: StmtId, param: VarId) -> Vec<ExprId> {
    let mut finder = ReferenceFinder {
        param,
        found: Vec::new(),
    };
    finder.visit_stmt(tu, body);
    finder.found
}

struct ReferenceFinder {
    param: VarId,
    found: Vec<ExprId>,
}

impl<'tu> Visitor<'tu> for ReferenceFinder {
    fn visit_expr(&mut self, tu: &'tu TranslationUnit, id: ExprId) {
        if let ExprKind::DeclRef(DeclTarget::Var(var)) = tu.expr(id).kind {
            if var == self.param {
                self.found.push(id);
            }
        }
        walk_expr(self, tu, id);
    }
}
