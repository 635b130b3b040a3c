use crate::ast::NodeKind;
use crate::suggestion;
use crate::validation::RuleVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visitor::VisitAction;

pub fn unknown_type_message<S: AsRef<str>>(
    type_name: &str,
    suggested_types: &[S],
) -> String {
    format!(
        "Unknown type \"{type_name}\".{}",
        suggestion::perhaps_you_meant(suggested_types),
    )
}

/// Known type names
///
/// A GraphQL document is only valid if referenced types (specifically
/// variable definitions and fragment conditions) are defined by the type
/// schema.
pub fn known_type_names<'a>(
    _ctx: &ValidationContext<'a>,
) -> RuleVisitor<'a> {
    RuleVisitor::new("KnownTypeNames")
        // TODO: Stop skipping these once type-system documents are validated
        // against a schema that includes the types they define. Until then
        // every type referenced only from a definition would be reported.
        .skip(NodeKind::ObjectTypeDefinition)
        .skip(NodeKind::InterfaceTypeDefinition)
        .skip(NodeKind::UnionTypeDefinition)
        .skip(NodeKind::InputObjectTypeDefinition)
        .on_enter(NodeKind::NamedType, |ctx, node| {
            let Some(named_type) = node.as_named_type() else {
                return Ok(VisitAction::Continue);
            };

            let schema = ctx.get_schema();
            let type_name = named_type.name.as_str();
            if schema.get_type(type_name).is_none() {
                let suggested_types = suggestion::suggestion_list(
                    type_name,
                    schema.get_type_map().keys(),
                );
                ctx.report_error(ValidationError::new(
                    unknown_type_message(type_name, &suggested_types),
                    vec![node],
                ));
            }

            Ok(VisitAction::Continue)
        })
}
