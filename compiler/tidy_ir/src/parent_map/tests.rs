use pretty_assertions::assert_eq;

use super::*;
use crate::{
    ExprKind, FileId, FunctionDecl, FunctionFlags, QualType, RecordFlags, Span, StmtKind,
    TranslationUnitBuilder,
};

/// `void f(Widget w) { while (true) { Widget c = w; } }`
#[test]
fn ancestors_walk_up_to_the_body() {
    let mut b = TranslationUnitBuilder::new("main.cpp");
    let void = b.void();
    let name = b.intern("Widget");
    let widget = QualType::new(b.types_mut().record(name, RecordFlags::empty()));
    let w = b.param("w", widget, Span::new(7, 13), Span::new(14, 15));

    let r = b.var_ref(w, Span::new(47, 48));
    let c = b.local("c", widget, Span::new(36, 42), Span::new(43, 44), Some(r));
    let decl = b.stmt(StmtKind::Decl(vec![c]), Span::new(36, 49));
    let inner = b.stmt(StmtKind::Compound(vec![decl]), Span::new(34, 51));
    let cond = b.expr(ExprKind::BoolLit(true), Span::new(26, 30), void);
    let loop_stmt = b.stmt(StmtKind::While { cond, body: inner }, Span::new(19, 51));
    let body = b.stmt(StmtKind::Compound(vec![loop_stmt]), Span::new(17, 53));

    let entity = b.new_entity();
    let fname = b.intern("f");
    let f = b.function(FunctionDecl {
        entity,
        name: fname,
        params: vec![w],
        return_type: void,
        body: Some(body),
        flags: FunctionFlags::empty(),
        file: FileId::MAIN,
        span: Span::new(0, 53),
        name_span: Span::new(5, 6),
    });
    let tu = b.finish();

    let map = ParentMap::for_function(&tu, f);
    assert_eq!(map.parent(NodeId::Expr(r)), Some(NodeId::Var(c)));
    let chain: Vec<NodeId> = map.ancestors(NodeId::Expr(r)).collect();
    assert_eq!(
        chain,
        vec![
            NodeId::Var(c),
            NodeId::Stmt(decl),
            NodeId::Stmt(inner),
            NodeId::Stmt(loop_stmt),
            NodeId::Stmt(body),
        ]
    );
    assert_eq!(map.parent(NodeId::Stmt(body)), None);
    assert_eq!(map.parent(NodeId::Var(w)), None);
    assert_eq!(map.parent(NodeId::Expr(cond)), Some(NodeId::Stmt(loop_stmt)));
}
