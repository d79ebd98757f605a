//! Child-to-parent links for one function.
//!
//! The tree only stores downward edges. Analyses that reason about the
//! context of a node (what consumes this expression? is it under a loop?)
//! build a [`ParentMap`] once per function and walk upward from there.

use rustc_hash::FxHashMap;

use crate::ast::TranslationUnit;
use crate::visitor::{walk_expr, walk_stmt, walk_var, Visitor};
use crate::{ExprId, FunctionId, NodeId, StmtId, VarId};

/// Upward links for every node reachable from a function.
#[derive(Clone, Debug, Default)]
pub struct ParentMap {
    parents: FxHashMap<NodeId, NodeId>,
}

impl ParentMap {
    /// Build the map for a function's parameters and body.
    pub fn for_function(tu: &TranslationUnit, function: FunctionId) -> Self {
        let mut collector = ParentCollector::default();
        collector.visit_function(tu, function);
        ParentMap {
            parents: collector.parents,
        }
    }

    /// The immediate parent of `node`, if it is not a root.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    /// Iterate ancestors from the immediate parent up to the root.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors {
            map: self,
            current: node,
        }
    }
}

/// Iterator over the ancestors of a node.
pub struct Ancestors<'map> {
    map: &'map ParentMap,
    current: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let parent = self.map.parent(self.current)?;
        self.current = parent;
        Some(parent)
    }
}

#[derive(Default)]
struct ParentCollector {
    parents: FxHashMap<NodeId, NodeId>,
    stack: Vec<NodeId>,
}

impl ParentCollector {
    fn enter(&mut self, node: NodeId) {
        if let Some(&parent) = self.stack.last() {
            self.parents.insert(node, parent);
        }
        self.stack.push(node);
    }
}

impl<'tu> Visitor<'tu> for ParentCollector {
    fn visit_stmt(&mut self, tu: &'tu TranslationUnit, id: StmtId) {
        self.enter(NodeId::Stmt(id));
        walk_stmt(self, tu, id);
        self.stack.pop();
    }

    fn visit_expr(&mut self, tu: &'tu TranslationUnit, id: ExprId) {
        self.enter(NodeId::Expr(id));
        walk_expr(self, tu, id);
        self.stack.pop();
    }

    fn visit_var(&mut self, tu: &'tu TranslationUnit, id: VarId) {
        self.enter(NodeId::Var(id));
        walk_var(self, tu, id);
        self.stack.pop();
    }
}

#[cfg(test)]
mod tests;
