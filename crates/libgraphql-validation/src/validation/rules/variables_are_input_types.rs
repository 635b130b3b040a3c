use crate::ast::NodeKind;
use crate::types::TypeAnnotation;
use crate::validation::RuleVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visitor::VisitAction;

pub fn non_input_type_on_var_message(variable_name: &str, type_name: &str) -> String {
    format!("Variable \"${variable_name}\" cannot be non-input type \"{type_name}\".")
}

/// Variables are input types
///
/// A GraphQL operation is only valid if all the variables it defines are of
/// input types (scalar, enum, or input object). Undefined types are left to
/// `KnownTypeNames`.
pub fn variables_are_input_types<'a>(
    _ctx: &ValidationContext<'a>,
) -> RuleVisitor<'a> {
    RuleVisitor::new("VariablesAreInputTypes")
        .on_enter(NodeKind::VariableDefinition, |ctx, node| {
            let Some(var_def) = node.as_variable_definition() else {
                return Ok(VisitAction::Continue);
            };

            let is_non_input = TypeAnnotation::from_ast_type(&var_def.type_)
                .innermost_type(ctx.get_schema())
                .is_some_and(|type_| !type_.is_input_type());
            if is_non_input {
                ctx.report_error(ValidationError::new(
                    non_input_type_on_var_message(
                        &var_def.variable,
                        &var_def.type_.to_string(),
                    ),
                    vec![var_def.type_.as_node()],
                ));
            }

            Ok(VisitAction::Continue)
        })
}
