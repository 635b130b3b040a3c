use crate::ast;
use crate::ast::NodeKind;
use crate::ast::NodeRef;
use crate::validation::RuleVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visitor::VisitAction;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

pub fn unused_fragment_message(fragment_name: &str) -> String {
    format!("Fragment \"{fragment_name}\" is never used.")
}

#[derive(Default)]
struct Definitions<'a> {
    fragments: Vec<&'a ast::FragmentDefinition>,
    operations: Vec<&'a ast::OperationDefinition>,
}

/// No unused fragments
///
/// A GraphQL document is only valid if all fragment definitions are spread
/// within operations, or spread within other fragments spread within
/// operations.
pub fn no_unused_fragments<'a>(_ctx: &ValidationContext<'a>) -> RuleVisitor<'a> {
    let definitions = Rc::new(RefCell::new(Definitions::default()));
    let on_operation = Rc::clone(&definitions);
    let on_fragment = Rc::clone(&definitions);

    RuleVisitor::new("NoUnusedFragments")
        .on_enter(NodeKind::OperationDefinition, move |_, node| {
            if let Some(op) = node.as_operation_definition() {
                on_operation.borrow_mut().operations.push(op);
            }
            Ok(VisitAction::Skip)
        })
        .on_enter(NodeKind::FragmentDefinition, move |_, node| {
            if let Some(frag) = node.as_fragment_definition() {
                on_fragment.borrow_mut().fragments.push(frag);
            }
            Ok(VisitAction::Skip)
        })
        .on_leave(NodeKind::Document, move |ctx, _| {
            let definitions = definitions.borrow();
            let used_fragment_names: HashSet<&str> = definitions.operations
                .iter()
                .flat_map(|op| ctx.get_recursively_referenced_fragments(*op))
                .map(|frag| frag.name.as_str())
                .collect();

            for &frag in &definitions.fragments {
                if !used_fragment_names.contains(frag.name.as_str()) {
                    ctx.report_error(ValidationError::new(
                        unused_fragment_message(&frag.name),
                        vec![NodeRef::FragmentDefinition(frag)],
                    ));
                }
            }

            Ok(VisitAction::Continue)
        })
}
