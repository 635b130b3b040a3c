use crate::ast::NodeKind;
use crate::schema::Schema;
use crate::suggestion;
use crate::types::GraphQLType;
use crate::validation::RuleVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visitor::VisitAction;
use indexmap::IndexMap;

pub fn undefined_field_message<S: AsRef<str>>(
    field_name: &str,
    type_name: &str,
    suggested_type_names: &[S],
    suggested_field_names: &[S],
) -> String {
    let mut suggestion = suggestion::did_you_mean(
        Some("to use an inline fragment on"),
        suggested_type_names,
    );
    if suggestion.is_empty() {
        suggestion = suggestion::did_you_mean(None, suggested_field_names);
    }
    format!("Cannot query field \"{field_name}\" on type \"{type_name}\".{suggestion}")
}

/// Fields on correct type
///
/// A GraphQL document is only valid if all fields selected are defined by
/// the parent type, or are an allowed meta field such as `__typename`.
pub fn fields_on_correct_type<'a>(
    _ctx: &ValidationContext<'a>,
) -> RuleVisitor<'a> {
    RuleVisitor::new("FieldsOnCorrectType")
        .on_enter(NodeKind::Field, |ctx, node| {
            let (Some(field), Some(parent_type)) =
                (node.as_field(), ctx.get_parent_type()) else {
                return Ok(VisitAction::Continue);
            };
            if ctx.get_field_def().is_some() {
                return Ok(VisitAction::Continue);
            }

            let schema = ctx.get_schema();
            let field_name = field.name.as_str();
            let suggested_type_names =
                suggested_type_names(schema, parent_type, field_name);
            let suggested_field_names = if suggested_type_names.is_empty() {
                suggested_field_names(parent_type, field_name)
            } else {
                vec![]
            };
            ctx.report_error(ValidationError::new(
                undefined_field_message(
                    field_name,
                    parent_type.name(),
                    &suggested_type_names,
                    &suggested_field_names,
                ),
                vec![node],
            ));

            Ok(VisitAction::Continue)
        })
}

/// For an abstract parent type, the possible types (and the interfaces they
/// implement) that do define `field_name`.
///
/// Types used by more of the possible types come first, then interfaces
/// ahead of object types, then alphabetical order.
fn suggested_type_names<'a>(
    schema: &'a Schema,
    type_: &'a GraphQLType,
    field_name: &str,
) -> Vec<&'a str> {
    if !type_.is_abstract() {
        return vec![];
    }

    // type name -> (usage count, is interface)
    let mut suggested_types: IndexMap<&'a str, (usize, bool)> = IndexMap::new();
    for possible_type in schema.get_possible_types(type_) {
        if !possible_type.fields().contains_key(field_name) {
            continue;
        }
        suggested_types.insert(possible_type.name(), (1, false));

        for iface_name in possible_type.interface_names() {
            let defines_field = schema.get_type(iface_name)
                .and_then(|iface| iface.fields())
                .is_some_and(|fields| fields.contains_key(field_name));
            if defines_field {
                suggested_types.entry(iface_name).or_insert((0, true)).0 += 1;
            }
        }
    }

    let mut suggested_types: Vec<(&'a str, (usize, bool))> =
        suggested_types.into_iter().collect();
    suggested_types.sort_by(|(name_a, (count_a, iface_a)), (name_b, (count_b, iface_b))| {
        count_b.cmp(count_a)
            .then(iface_b.cmp(iface_a))
            .then(name_a.cmp(name_b))
    });
    suggested_types.into_iter().map(|(name, _)| name).collect()
}

/// For an object or interface parent type, the defined field names that are
/// similar to `field_name`.
fn suggested_field_names<'a>(
    type_: &'a GraphQLType,
    field_name: &str,
) -> Vec<&'a str> {
    match type_ {
        GraphQLType::Interface(_) | GraphQLType::Object(_) => type_
            .fields()
            .map(|fields| suggestion::suggestion_list(field_name, fields.keys()))
            .unwrap_or_default(),
        _ => vec![],
    }
}
