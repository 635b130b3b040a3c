use crate::ast;
use crate::ast::NodeKind;
use crate::ast::NodeRef;
use crate::visitor::walk;
use crate::visitor::ParallelVisitor;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;
use proptest::prelude::*;
use std::collections::HashMap;

type Counts = HashMap<NodeKind, usize>;

fn bump(counts: &mut Counts, kind: NodeKind) {
    *counts.entry(kind).or_insert(0) += 1;
}

#[derive(Clone, Debug)]
enum ValueModel {
    Enum,
    Int,
    List(Vec<ValueModel>),
    Object(Vec<ValueModel>),
    Str,
    Var,
}
impl ValueModel {
    fn render(&self, out: &mut String) {
        match self {
            Self::Enum => out.push_str("RED"),
            Self::Int => out.push('1'),
            Self::List(values) => {
                out.push('[');
                for value in values {
                    value.render(out);
                    out.push(' ');
                }
                out.push(']');
            },
            Self::Object(values) => {
                out.push('{');
                for (idx, value) in values.iter().enumerate() {
                    out.push_str(&format!("k{idx}: "));
                    value.render(out);
                    out.push(' ');
                }
                out.push('}');
            },
            Self::Str => out.push_str("\"s\""),
            Self::Var => out.push_str("$v"),
        }
    }

    fn tally(&self, counts: &mut Counts) {
        match self {
            Self::Enum => bump(counts, NodeKind::EnumValue),
            Self::Int => bump(counts, NodeKind::IntValue),
            Self::List(values) => {
                bump(counts, NodeKind::ListValue);
                values.iter().for_each(|value| value.tally(counts));
            },
            Self::Object(values) => {
                bump(counts, NodeKind::ObjectValue);
                for value in values {
                    bump(counts, NodeKind::ObjectField);
                    value.tally(counts);
                }
            },
            Self::Str => bump(counts, NodeKind::StringValue),
            Self::Var => bump(counts, NodeKind::Variable),
        }
    }
}

#[derive(Clone, Debug)]
enum SelectionModel {
    Field {
        args: Vec<ValueModel>,
        children: Vec<SelectionModel>,
        directive: bool,
    },
    InlineFragment {
        children: Vec<SelectionModel>,
        typed: bool,
    },
    Spread,
}
impl SelectionModel {
    fn render(&self, out: &mut String) {
        match self {
            Self::Field { args, children, directive } => {
                out.push('f');
                if !args.is_empty() {
                    out.push('(');
                    for (idx, arg) in args.iter().enumerate() {
                        out.push_str(&format!("a{idx}: "));
                        arg.render(out);
                        out.push(' ');
                    }
                    out.push(')');
                }
                if *directive {
                    out.push_str(" @include(if: $v)");
                }
                if !children.is_empty() {
                    render_selection_set(children, out);
                }
            },
            Self::InlineFragment { children, typed } => {
                out.push_str(if *typed { "... on T" } else { "..." });
                render_selection_set(children, out);
            },
            Self::Spread => out.push_str("...F"),
        }
    }

    fn tally(&self, counts: &mut Counts) {
        match self {
            Self::Field { args, children, directive } => {
                bump(counts, NodeKind::Field);
                for arg in args {
                    bump(counts, NodeKind::Argument);
                    arg.tally(counts);
                }
                if *directive {
                    bump(counts, NodeKind::Directive);
                    bump(counts, NodeKind::Argument);
                    bump(counts, NodeKind::Variable);
                }
                if !children.is_empty() {
                    tally_selection_set(children, counts);
                }
            },
            Self::InlineFragment { children, typed } => {
                bump(counts, NodeKind::InlineFragment);
                if *typed {
                    bump(counts, NodeKind::NamedType);
                }
                tally_selection_set(children, counts);
            },
            Self::Spread => bump(counts, NodeKind::FragmentSpread),
        }
    }
}

fn render_selection_set(selections: &[SelectionModel], out: &mut String) {
    out.push_str(" { ");
    for selection in selections {
        selection.render(out);
        out.push(' ');
    }
    out.push('}');
}

fn tally_selection_set(selections: &[SelectionModel], counts: &mut Counts) {
    bump(counts, NodeKind::SelectionSet);
    selections.iter().for_each(|selection| selection.tally(counts));
}

fn value_model() -> impl Strategy<Value = ValueModel> {
    prop_oneof![
        Just(ValueModel::Enum),
        Just(ValueModel::Int),
        Just(ValueModel::Str),
        Just(ValueModel::Var),
    ].prop_recursive(3, 16, 3, |inner| prop_oneof![
        prop::collection::vec(inner.clone(), 0..3).prop_map(ValueModel::List),
        prop::collection::vec(inner, 1..3).prop_map(ValueModel::Object),
    ])
}

fn selection_model() -> impl Strategy<Value = SelectionModel> {
    prop_oneof![
        (prop::collection::vec(value_model(), 0..3), any::<bool>())
            .prop_map(|(args, directive)| SelectionModel::Field {
                args,
                children: vec![],
                directive,
            }),
        Just(SelectionModel::Spread),
    ].prop_recursive(4, 48, 3, |inner| prop_oneof![
        (
            prop::collection::vec(value_model(), 0..3),
            prop::collection::vec(inner.clone(), 1..3),
            any::<bool>(),
        ).prop_map(|(args, children, directive)| SelectionModel::Field {
            args,
            children,
            directive,
        }),
        (prop::collection::vec(inner, 1..3), any::<bool>())
            .prop_map(|(children, typed)| SelectionModel::InlineFragment {
                children,
                typed,
            }),
    ])
}

/// An operation with two variables plus one fragment definition, and the
/// number of nodes of each kind it should contain.
fn executable_document(
    operation: &[SelectionModel],
    fragment: &[SelectionModel],
) -> (String, Counts) {
    let mut src = "query Q($v: [Int!] = [1], $w: String)".to_string();
    render_selection_set(operation, &mut src);
    src.push_str("\nfragment F on T @dir");
    render_selection_set(fragment, &mut src);

    let mut counts = Counts::new();
    for (kind, count) in [
        (NodeKind::Document, 1),
        (NodeKind::OperationDefinition, 1),
        (NodeKind::VariableDefinition, 2),
        (NodeKind::ListType, 1),
        (NodeKind::NonNullType, 1),
        (NodeKind::NamedType, 3),
        (NodeKind::ListValue, 1),
        (NodeKind::IntValue, 1),
        (NodeKind::FragmentDefinition, 1),
        (NodeKind::Directive, 1),
    ] {
        counts.insert(kind, count);
    }
    tally_selection_set(operation, &mut counts);
    tally_selection_set(fragment, &mut counts);

    (src, counts)
}

#[derive(Clone, Debug)]
struct FieldDefModel {
    args: usize,
    list: bool,
    non_null: bool,
}

#[derive(Clone, Debug)]
struct ObjectTypeModel {
    fields: Vec<FieldDefModel>,
    interfaces: usize,
}

fn object_type_model() -> impl Strategy<Value = ObjectTypeModel> {
    let field = (0..3usize, any::<bool>(), any::<bool>())
        .prop_map(|(args, list, non_null)| FieldDefModel { args, list, non_null });
    (prop::collection::vec(field, 1..4), 0..3usize)
        .prop_map(|(fields, interfaces)| ObjectTypeModel { fields, interfaces })
}

/// Object types followed by a union of all of them, and the number of nodes
/// of each kind the document should contain.
fn schema_document(types: &[ObjectTypeModel]) -> (String, Counts) {
    let mut src = String::new();
    let mut counts = Counts::new();
    bump(&mut counts, NodeKind::Document);

    for (type_idx, type_model) in types.iter().enumerate() {
        bump(&mut counts, NodeKind::ObjectTypeDefinition);
        src.push_str(&format!("type T{type_idx}"));
        if type_model.interfaces > 0 {
            let interfaces: Vec<String> =
                (0..type_model.interfaces).map(|idx| format!("I{idx}")).collect();
            src.push_str(&format!(" implements {}", interfaces.join(" & ")));
            for _ in 0..type_model.interfaces {
                bump(&mut counts, NodeKind::NamedType);
            }
        }

        src.push_str(" {\n");
        for (field_idx, field) in type_model.fields.iter().enumerate() {
            bump(&mut counts, NodeKind::FieldDefinition);
            src.push_str(&format!("  f{field_idx}"));
            if field.args > 0 {
                let args: Vec<String> =
                    (0..field.args).map(|idx| format!("a{idx}: Int")).collect();
                src.push_str(&format!("({})", args.join(", ")));
                for _ in 0..field.args {
                    bump(&mut counts, NodeKind::InputValueDefinition);
                    bump(&mut counts, NodeKind::NamedType);
                }
            }

            let mut field_type = "X".to_string();
            bump(&mut counts, NodeKind::NamedType);
            if field.non_null {
                field_type.push('!');
                bump(&mut counts, NodeKind::NonNullType);
            }
            if field.list {
                field_type = format!("[{field_type}]");
                bump(&mut counts, NodeKind::ListType);
            }
            src.push_str(&format!(": {field_type}\n"));
        }
        src.push_str("}\n");
    }

    let members: Vec<String> =
        (0..types.len()).map(|idx| format!("T{idx}")).collect();
    src.push_str(&format!("union U = {}\n", members.join(" | ")));
    bump(&mut counts, NodeKind::UnionTypeDefinition);
    for _ in &members {
        bump(&mut counts, NodeKind::NamedType);
    }

    (src, counts)
}

#[derive(Debug, Default)]
struct TraversalLog<'a> {
    entered: Vec<NodeRef<'a>>,
    enters: Counts,
    leaves: Counts,
    mismatched_leaves: usize,
    stack: Vec<NodeKind>,
}
impl TraversalLog<'_> {
    fn nodes_entered_twice(&self) -> usize {
        self.entered
            .iter()
            .enumerate()
            .filter(|(idx, node)| {
                self.entered[..*idx].iter().any(|earlier| earlier.is_same_node(node))
            })
            .count()
    }
}

fn counting_visitor<'a>() -> Visitor<'a, TraversalLog<'a>> {
    let mut visitor = Visitor::new("Counting");
    for kind in NodeKind::ALL {
        visitor = visitor
            .on_enter(kind, |log: &mut TraversalLog<'a>, node| {
                log.stack.push(node.kind());
                log.entered.push(node);
                bump(&mut log.enters, node.kind());
                Ok(VisitAction::Continue)
            })
            .on_leave(kind, |log: &mut TraversalLog<'a>, node| {
                if log.stack.pop() != Some(node.kind()) {
                    log.mismatched_leaves += 1;
                }
                bump(&mut log.leaves, node.kind());
                Ok(VisitAction::Continue)
            });
    }
    visitor
}

proptest! {
    #[test]
    fn every_executable_node_is_entered_and_left_once(
        operation in prop::collection::vec(selection_model(), 1..4),
        fragment in prop::collection::vec(selection_model(), 1..3),
    ) {
        let (src, expected) = executable_document(&operation, &fragment);
        let doc = ast::Document::parse_executable(&src)
            .expect("generated document parses");
        let mut log = TraversalLog::default();

        let flow = walk(doc.as_node(), &mut counting_visitor(), &mut log)
            .expect("walk succeeds");

        prop_assert!(flow.is_continue());
        prop_assert!(log.stack.is_empty());
        prop_assert_eq!(log.mismatched_leaves, 0);
        prop_assert_eq!(log.nodes_entered_twice(), 0);
        prop_assert_eq!(&log.enters, &expected);
        prop_assert_eq!(&log.leaves, &expected);
    }

    #[test]
    fn every_type_system_node_is_entered_and_left_once(
        types in prop::collection::vec(object_type_model(), 1..4),
    ) {
        let (src, expected) = schema_document(&types);
        let doc = ast::Document::parse_schema(&src)
            .expect("generated document parses");
        let mut log = TraversalLog::default();

        let flow = walk(doc.as_node(), &mut counting_visitor(), &mut log)
            .expect("walk succeeds");

        prop_assert!(flow.is_continue());
        prop_assert!(log.stack.is_empty());
        prop_assert_eq!(log.mismatched_leaves, 0);
        prop_assert_eq!(log.nodes_entered_twice(), 0);
        prop_assert_eq!(&log.enters, &expected);
        prop_assert_eq!(&log.leaves, &expected);
    }

    #[test]
    fn skipping_one_visitor_never_hides_nodes_from_another(
        operation in prop::collection::vec(selection_model(), 1..4),
        fragment in prop::collection::vec(selection_model(), 1..3),
    ) {
        let (src, expected) = executable_document(&operation, &fragment);
        let doc = ast::Document::parse_executable(&src)
            .expect("generated document parses");
        let skip_selections: Visitor<'_, TraversalLog<'_>> =
            Visitor::new("SkipSelections")
                .skip(NodeKind::Field)
                .skip(NodeKind::InlineFragment);
        let mut visitor = ParallelVisitor::new(vec![
            skip_selections,
            counting_visitor(),
        ]);
        let mut log = TraversalLog::default();

        let flow = walk(doc.as_node(), &mut visitor, &mut log)
            .expect("walk succeeds");

        prop_assert!(flow.is_continue());
        prop_assert!(log.stack.is_empty());
        prop_assert_eq!(log.mismatched_leaves, 0);
        prop_assert_eq!(&log.enters, &expected);
        prop_assert_eq!(&log.leaves, &expected);
    }
}
