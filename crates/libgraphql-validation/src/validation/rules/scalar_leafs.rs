use crate::ast::NodeKind;
use crate::ast::NodeRef;
use crate::validation::RuleVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visitor::VisitAction;

pub fn no_subselection_allowed_message(field_name: &str, type_: &str) -> String {
    format!(
        "Field \"{field_name}\" must not have a selection since type \
        \"{type_}\" has no subfields."
    )
}

pub fn required_subselection_message(field_name: &str, type_: &str) -> String {
    format!(
        "Field \"{field_name}\" of type \"{type_}\" must have a selection of \
        subfields. Did you mean \"{field_name} {{ ... }}\"?"
    )
}

/// Scalar leafs
///
/// A GraphQL document is valid only if all leaf fields (fields without
/// sub selections) are of scalar or enum types.
pub fn scalar_leafs<'a>(_ctx: &ValidationContext<'a>) -> RuleVisitor<'a> {
    RuleVisitor::new("ScalarLeafs")
        .on_enter(NodeKind::Field, |ctx, node| {
            let (Some(field), Some(type_annot)) = (node.as_field(), ctx.get_type())
            else {
                return Ok(VisitAction::Continue);
            };
            let Some(named_type) = type_annot.innermost_type(ctx.get_schema()) else {
                return Ok(VisitAction::Continue);
            };

            let type_str = type_annot.to_string();
            let error = match (named_type.is_leaf(), &field.selection_set) {
                (true, Some(selection_set)) => Some(ValidationError::new(
                    no_subselection_allowed_message(&field.name, &type_str),
                    vec![NodeRef::SelectionSet(selection_set)],
                )),
                (false, None) => Some(ValidationError::new(
                    required_subselection_message(&field.name, &type_str),
                    vec![node],
                )),
                _ => None,
            };
            if let Some(error) = error {
                ctx.report_error(error);
            }

            Ok(VisitAction::Continue)
        })
}
