mod traversal_proptests;
mod walk_tests;

use crate::ast::NodeKind;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

/// A visitor that appends `"{name}:enter:{kind}"` / `"{name}:leave:{kind}"`
/// to the context for each of the given node kinds.
pub(super) fn recording_visitor<'a>(
    name: &'static str,
    kinds: &[NodeKind],
) -> Visitor<'a, Vec<String>> {
    let mut visitor = Visitor::new(name);
    for &kind in kinds {
        visitor = visitor
            .on_enter(kind, move |log: &mut Vec<String>, _| {
                log.push(format!("{name}:enter:{kind}"));
                Ok(VisitAction::Continue)
            })
            .on_leave(kind, move |log: &mut Vec<String>, _| {
                log.push(format!("{name}:leave:{kind}"));
                Ok(VisitAction::Continue)
            });
    }
    visitor
}
