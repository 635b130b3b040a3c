use crate::ast::NodeKind;
use crate::ast::NodeRef;
use crate::validation::RuleVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visitor::VisitAction;

pub fn inline_fragment_on_non_composite_message(type_name: &str) -> String {
    format!("Fragment cannot condition on non composite type \"{type_name}\".")
}

pub fn fragment_on_non_composite_message(
    fragment_name: &str,
    type_name: &str,
) -> String {
    format!(
        "Fragment \"{fragment_name}\" cannot condition on non composite type \
        \"{type_name}\"."
    )
}

/// Fragments on composite type
///
/// Fragments use a type condition to determine if they apply. Since
/// fragments can only be spread into a composite type (object, interface or
/// union), the type condition must also be a composite type.
///
/// Type conditions naming undefined types are left to `KnownTypeNames`.
pub fn fragments_on_composite_types<'a>(
    _ctx: &ValidationContext<'a>,
) -> RuleVisitor<'a> {
    RuleVisitor::new("FragmentsOnCompositeTypes")
        .on_enter(NodeKind::InlineFragment, |ctx, node| {
            let Some(type_condition) = node.as_inline_fragment()
                .and_then(|frag| frag.type_condition.as_ref()) else {
                return Ok(VisitAction::Continue);
            };

            let is_non_composite = ctx.get_schema()
                .get_type(&type_condition.name)
                .is_some_and(|type_| !type_.is_composite());
            if is_non_composite {
                ctx.report_error(ValidationError::new(
                    inline_fragment_on_non_composite_message(&type_condition.name),
                    vec![NodeRef::NamedType(type_condition)],
                ));
            }
            Ok(VisitAction::Continue)
        })
        .on_enter(NodeKind::FragmentDefinition, |ctx, node| {
            let Some(frag) = node.as_fragment_definition() else {
                return Ok(VisitAction::Continue);
            };

            let type_condition = &frag.type_condition;
            let is_non_composite = ctx.get_schema()
                .get_type(&type_condition.name)
                .is_some_and(|type_| !type_.is_composite());
            if is_non_composite {
                ctx.report_error(ValidationError::new(
                    fragment_on_non_composite_message(
                        &frag.name,
                        &type_condition.name,
                    ),
                    vec![NodeRef::NamedType(type_condition)],
                ));
            }
            Ok(VisitAction::Continue)
        })
}
