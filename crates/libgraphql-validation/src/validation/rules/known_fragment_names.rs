use crate::ast::NodeKind;
use crate::validation::RuleVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visitor::VisitAction;

pub fn unknown_fragment_message(fragment_name: &str) -> String {
    format!("Unknown fragment \"{fragment_name}\".")
}

/// Known fragment names
///
/// A GraphQL document is only valid if all `...Fragment` fragment spreads
/// refer to fragments defined in the same document.
pub fn known_fragment_names<'a>(
    _ctx: &ValidationContext<'a>,
) -> RuleVisitor<'a> {
    RuleVisitor::new("KnownFragmentNames")
        .on_enter(NodeKind::FragmentSpread, |ctx, node| {
            if let Some(spread) = node.as_fragment_spread()
                .filter(|spread| ctx.get_fragment(&spread.fragment_name).is_none()) {
                ctx.report_error(ValidationError::new(
                    unknown_fragment_message(&spread.fragment_name),
                    vec![node],
                ));
            }
            Ok(VisitAction::Continue)
        })
}
