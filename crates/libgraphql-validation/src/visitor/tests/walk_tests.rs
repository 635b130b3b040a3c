use crate::ast;
use crate::ast::NodeKind;
use crate::loc::SourcePosition;
use crate::visitor::tests::recording_visitor;
use crate::visitor::walk;
use crate::visitor::VisitAction;
use crate::visitor::VisitFault;
use crate::visitor::Visitor;
use std::ops::ControlFlow;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn visits_depth_first_with_fixed_slot_order() -> Result<()> {
    let doc = ast::Document::parse_executable(
        "query Q($v: Int = 1) @dir { a(x: $v) }",
    )?;
    let mut visitor = recording_visitor("r", &NodeKind::ALL);
    let mut log = vec![];

    let flow = walk(doc.as_node(), &mut visitor, &mut log)?;

    assert_eq!(flow, ControlFlow::Continue(()));
    let entered: Vec<&str> = log.iter()
        .filter_map(|entry| entry.strip_prefix("r:enter:"))
        .collect();
    assert_eq!(entered, vec![
        "Document",
        "OperationDefinition",
        "VariableDefinition",
        "NamedType",
        "IntValue",
        "Directive",
        "SelectionSet",
        "Field",
        "Argument",
        "Variable",
    ]);
    assert_eq!(log.first().map(String::as_str), Some("r:enter:Document"));
    assert_eq!(log.last().map(String::as_str), Some("r:leave:Document"));
    assert_eq!(log.len(), entered.len() * 2);

    Ok(())
}

#[test]
fn kinds_without_callbacks_are_no_ops() -> Result<()> {
    let doc = ast::Document::parse_executable("{ a { b c } d }")?;
    let mut visitor = recording_visitor("fields", &[NodeKind::Field]);
    let mut log = vec![];

    let flow = walk(doc.as_node(), &mut visitor, &mut log)?;

    assert_eq!(flow, ControlFlow::Continue(()));
    assert_eq!(log, vec![
        "fields:enter:Field",
        "fields:enter:Field",
        "fields:leave:Field",
        "fields:enter:Field",
        "fields:leave:Field",
        "fields:leave:Field",
        "fields:enter:Field",
        "fields:leave:Field",
    ]);

    Ok(())
}

#[test]
fn skip_suppresses_children_and_leave() -> Result<()> {
    let doc = ast::Document::parse_executable("{ a { b } c }")?;
    let mut visitor = Visitor::<Vec<String>>::new("skipper")
        .on_enter(NodeKind::Field, |log, node| {
            let name = node.as_field().map(|f| f.name.as_str()).unwrap_or("");
            log.push(format!("enter:{name}"));
            Ok(if name == "a" { VisitAction::Skip } else { VisitAction::Continue })
        })
        .on_leave(NodeKind::Field, |log, node| {
            let name = node.as_field().map(|f| f.name.as_str()).unwrap_or("");
            log.push(format!("leave:{name}"));
            Ok(VisitAction::Continue)
        });
    let mut log = vec![];

    let flow = walk(doc.as_node(), &mut visitor, &mut log)?;

    assert_eq!(flow, ControlFlow::Continue(()));
    assert_eq!(log, vec!["enter:a", "enter:c", "leave:c"]);

    Ok(())
}

#[test]
fn break_stops_immediately() -> Result<()> {
    let doc = ast::Document::parse_executable("{ a { b } c }")?;
    let mut visitor = Visitor::<Vec<String>>::new("breaker")
        .on_enter(NodeKind::Field, |log, node| {
            let name = node.as_field().map(|f| f.name.as_str()).unwrap_or("");
            log.push(format!("enter:{name}"));
            Ok(if name == "b" { VisitAction::Break } else { VisitAction::Continue })
        })
        .on_leave(NodeKind::Field, |log, _| {
            log.push("leave".to_string());
            Ok(VisitAction::Continue)
        });
    let mut log = vec![];

    let flow = walk(doc.as_node(), &mut visitor, &mut log)?;

    assert_eq!(flow, ControlFlow::Break(()));
    assert_eq!(log, vec!["enter:a", "enter:b"]);

    Ok(())
}

#[test]
fn break_from_leave() -> Result<()> {
    let doc = ast::Document::parse_executable("{ a b }")?;
    let mut visitor = Visitor::<u32>::new("counter")
        .on_enter(NodeKind::Field, |count, _| {
            *count += 1;
            Ok(VisitAction::Continue)
        })
        .on_leave(NodeKind::Field, |_, _| Ok(VisitAction::Break));
    let mut count = 0;

    let flow = walk(doc.as_node(), &mut visitor, &mut count)?;

    assert_eq!(flow, ControlFlow::Break(()));
    assert_eq!(count, 1);

    Ok(())
}

#[test]
fn walk_from_a_subtree() -> Result<()> {
    let doc = ast::Document::parse_executable("{ a { b } c }")?;
    let op = doc.operations().next().expect("one operation");
    let mut visitor = recording_visitor("r", &[NodeKind::Field]);
    let mut log = vec![];

    let flow = walk(ast::NodeRef::SelectionSet(&op.selection_set), &mut visitor, &mut log)?;

    assert_eq!(flow, ControlFlow::Continue(()));
    assert_eq!(log.iter().filter(|e| e.contains("enter")).count(), 3);

    Ok(())
}

#[test]
fn callback_error_becomes_fault() -> Result<()> {
    let doc = ast::Document::parse_executable("{ a }")?;
    let mut visitor = Visitor::<()>::new("Faulty")
        .on_enter(NodeKind::Field, |_, _| Err("internal invariant broken".into()));

    let result = walk(doc.as_node(), &mut visitor, &mut ());

    match result {
        Err(VisitFault::CallbackFailed { visitor_name, node_kind, source }) => {
            assert_eq!(visitor_name, "Faulty");
            assert_eq!(node_kind, NodeKind::Field);
            assert_eq!(source.to_string(), "internal invariant broken");
        },
        other => panic!("Expected CallbackFailed, got {other:?}"),
    }

    Ok(())
}

#[test]
fn empty_document_is_malformed() {
    let doc = ast::Document::new(vec![]);
    let mut visitor = recording_visitor("r", &[NodeKind::Document]);
    let mut log = vec![];

    let result = walk(doc.as_node(), &mut visitor, &mut log);

    assert!(matches!(result, Err(VisitFault::MalformedDocument { .. })));
    assert!(log.is_empty());
}

#[test]
fn doubly_wrapped_non_null_is_malformed() {
    let pos = SourcePosition::new(1, 1);
    let named = ast::Type::Named(ast::NamedType {
        position: pos,
        name: "Int".to_string(),
    });
    let non_null = ast::Type::NonNull(ast::NonNullType {
        position: pos,
        type_: Box::new(named),
    });
    let doubly = ast::Type::NonNull(ast::NonNullType {
        position: SourcePosition::new(2, 3),
        type_: Box::new(non_null),
    });
    let mut visitor = recording_visitor("r", &[NodeKind::NamedType]);
    let mut log = vec![];

    let result = walk(doubly.as_node(), &mut visitor, &mut log);

    match result {
        Err(VisitFault::MalformedDocument { position, .. }) =>
            assert_eq!(position, SourcePosition::new(2, 3)),
        other => panic!("Expected MalformedDocument, got {other:?}"),
    }
    assert!(log.is_empty());
}
