//! Conversion from `graphql_parser`'s borrowed ASTs into this crate's owned
//! [`ast`](crate::ast) model.
//!
//! `graphql_parser` does not track positions for every node. Named types are
//! located by re-scanning the source with [`SourceScanner`]; arguments, values
//! and object fields inherit the position of the nearest enclosing node that
//! has one.

use crate::ast;
use crate::ast::DocumentParseError;
use crate::ast::source_scanner::SourceScanner;
use crate::ast::source_scanner::Step;
use crate::loc::SourcePosition;

type Result<T> = std::result::Result<T, DocumentParseError>;

mod gql_query {
    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;
}

mod gql_schema {
    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
}

pub(super) fn parse_executable(src: &str) -> Result<ast::Document> {
    let gql_doc: gql_query::Document =
        graphql_parser::query::parse_query::<String>(src)?.into_static();

    let scanner = SourceScanner::new(src);
    let definitions = gql_doc.definitions
        .iter()
        .map(|def| convert_executable_definition(&scanner, def))
        .collect::<Result<Vec<_>>>()?;

    log::trace!(
        "Converted executable document with {} definitions.",
        definitions.len(),
    );
    Ok(ast::Document::new(definitions))
}

pub(super) fn parse_schema(src: &str) -> Result<ast::Document> {
    let gql_doc: gql_schema::Document =
        graphql_parser::schema::parse_schema::<String>(src)?.into_static();

    let scanner = SourceScanner::new(src);
    let definitions = gql_doc.definitions
        .iter()
        .map(|def| convert_type_system_definition(&scanner, def))
        .collect::<Result<Vec<_>>>()?;

    log::trace!(
        "Converted schema document with {} definitions.",
        definitions.len(),
    );
    Ok(ast::Document::new(definitions))
}

// -----------------------------------------------------------------------------
// Executable definitions
// -----------------------------------------------------------------------------

fn convert_executable_definition(
    scanner: &SourceScanner,
    def: &gql_query::Definition,
) -> Result<ast::Definition> {
    Ok(match def {
        gql_query::Definition::Operation(op) =>
            ast::Definition::Operation(convert_operation(scanner, op)?),
        gql_query::Definition::Fragment(frag) =>
            ast::Definition::Fragment(convert_fragment_definition(scanner, frag)?),
    })
}

fn convert_operation(
    scanner: &SourceScanner,
    op: &gql_query::OperationDefinition,
) -> Result<ast::OperationDefinition> {
    use graphql_parser::query::OperationDefinition as GqlOp;

    let (operation, position, name, var_defs, directives, selection_set) =
        match op {
            GqlOp::SelectionSet(selection_set) => (
                ast::OperationKind::Query,
                selection_set.span.0,
                None,
                &[][..],
                &[][..],
                selection_set,
            ),
            GqlOp::Query(query) => (
                ast::OperationKind::Query,
                query.position,
                query.name.as_ref(),
                &query.variable_definitions[..],
                &query.directives[..],
                &query.selection_set,
            ),
            GqlOp::Mutation(mutation) => (
                ast::OperationKind::Mutation,
                mutation.position,
                mutation.name.as_ref(),
                &mutation.variable_definitions[..],
                &mutation.directives[..],
                &mutation.selection_set,
            ),
            GqlOp::Subscription(subscription) => (
                ast::OperationKind::Subscription,
                subscription.position,
                subscription.name.as_ref(),
                &subscription.variable_definitions[..],
                &subscription.directives[..],
                &subscription.selection_set,
            ),
        };

    Ok(ast::OperationDefinition {
        position: SourcePosition::from_pos(position),
        operation,
        name: name.cloned(),
        variable_definitions: var_defs
            .iter()
            .map(|var_def| convert_variable_definition(scanner, var_def))
            .collect::<Result<Vec<_>>>()?,
        directives: convert_directives(directives)?,
        selection_set: convert_selection_set(scanner, selection_set)?,
    })
}

fn convert_variable_definition(
    scanner: &SourceScanner,
    var_def: &gql_query::VariableDefinition,
) -> Result<ast::VariableDefinition> {
    let position = SourcePosition::from_pos(var_def.position);
    let type_start = scanner.seek(position, &[
        Step::Punct('$'),
        Step::Name,
        Step::Punct(':'),
    ]);
    Ok(ast::VariableDefinition {
        position,
        variable: var_def.name.clone(),
        type_: convert_type(scanner, position, type_start, &var_def.var_type),
        default_value: var_def.default_value
            .as_ref()
            .map(|value| convert_value(position, value))
            .transpose()?,
    })
}

fn convert_selection_set(
    scanner: &SourceScanner,
    selection_set: &gql_query::SelectionSet,
) -> Result<ast::SelectionSet> {
    Ok(ast::SelectionSet {
        position: SourcePosition::from_pos(selection_set.span.0),
        selections: selection_set.items
            .iter()
            .map(|selection| convert_selection(scanner, selection))
            .collect::<Result<Vec<_>>>()?,
    })
}

fn convert_selection(
    scanner: &SourceScanner,
    selection: &gql_query::Selection,
) -> Result<ast::Selection> {
    use graphql_parser::query::Selection as GqlSelection;

    Ok(match selection {
        GqlSelection::Field(field) => {
            let position = SourcePosition::from_pos(field.position);
            ast::Selection::Field(ast::Field {
                position,
                alias: field.alias.clone(),
                name: field.name.clone(),
                arguments: convert_arguments(position, &field.arguments)?,
                directives: convert_directives(&field.directives)?,
                // `graphql_parser` represents a leaf field with an empty
                // selection set; a `{}` literal is not valid syntax anyway.
                selection_set:
                    if field.selection_set.items.is_empty() {
                        None
                    } else {
                        Some(convert_selection_set(scanner, &field.selection_set)?)
                    },
            })
        },

        GqlSelection::FragmentSpread(spread) =>
            ast::Selection::FragmentSpread(ast::FragmentSpread {
                position: SourcePosition::from_pos(spread.position),
                fragment_name: spread.fragment_name.clone(),
                directives: convert_directives(&spread.directives)?,
            }),

        GqlSelection::InlineFragment(frag) => {
            // `graphql_parser` positions inline fragments after the `...`.
            let position = SourcePosition::from_pos(frag.position);
            let type_start = scanner.seek(position, &[Step::Keyword("on")]);
            ast::Selection::InlineFragment(ast::InlineFragment {
                position,
                type_condition: frag.type_condition
                    .as_ref()
                    .map(|cond| {
                        convert_type_condition(scanner, position, type_start, cond)
                    }),
                directives: convert_directives(&frag.directives)?,
                selection_set: convert_selection_set(scanner, &frag.selection_set)?,
            })
        },
    })
}

fn convert_fragment_definition(
    scanner: &SourceScanner,
    frag: &gql_query::FragmentDefinition,
) -> Result<ast::FragmentDefinition> {
    let position = SourcePosition::from_pos(frag.position);
    let type_start = scanner.seek(position, &[
        Step::Keyword("fragment"),
        Step::Name,
        Step::Keyword("on"),
    ]);
    Ok(ast::FragmentDefinition {
        position,
        name: frag.name.clone(),
        type_condition: convert_type_condition(
            scanner,
            position,
            type_start,
            &frag.type_condition,
        ),
        directives: convert_directives(&frag.directives)?,
        selection_set: convert_selection_set(scanner, &frag.selection_set)?,
    })
}

fn convert_type_condition(
    scanner: &SourceScanner,
    fallback_position: SourcePosition,
    type_start: Option<usize>,
    cond: &gql_query::TypeCondition,
) -> ast::NamedType {
    let graphql_parser::query::TypeCondition::On(type_name) = cond;
    convert_named_type(scanner, fallback_position, type_start, type_name)
}

fn convert_named_type(
    scanner: &SourceScanner,
    fallback_position: SourcePosition,
    start: Option<usize>,
    name: &str,
) -> ast::NamedType {
    ast::NamedType {
        position: scanner.name_position(start, name).unwrap_or(fallback_position),
        name: name.to_string(),
    }
}

fn convert_directives(
    directives: &[gql_query::Directive],
) -> Result<Vec<ast::Directive>> {
    directives.iter().map(|directive| {
        let position = SourcePosition::from_pos(directive.position);
        Ok(ast::Directive {
            position,
            name: directive.name.clone(),
            arguments: convert_arguments(position, &directive.arguments)?,
        })
    }).collect()
}

fn convert_arguments(
    position: SourcePosition,
    arguments: &[(String, gql_query::Value)],
) -> Result<Vec<ast::Argument>> {
    arguments.iter().map(|(name, value)| {
        Ok(ast::Argument {
            position,
            name: name.clone(),
            value: convert_value(position, value)?,
        })
    }).collect()
}

fn convert_value(
    position: SourcePosition,
    value: &gql_query::Value,
) -> Result<ast::Value> {
    use graphql_parser::query::Value as GqlValue;

    let data = match value {
        GqlValue::Variable(name) => ast::ValueData::Variable(name.clone()),
        GqlValue::Int(num) => ast::ValueData::Int(
            num.as_i64().ok_or(DocumentParseError::IntValueOutOfRange {
                position,
            })?,
        ),
        GqlValue::Float(num) => ast::ValueData::Float(*num),
        GqlValue::String(s) => ast::ValueData::String(s.clone()),
        GqlValue::Boolean(b) => ast::ValueData::Boolean(*b),
        GqlValue::Null => ast::ValueData::Null,
        GqlValue::Enum(name) => ast::ValueData::Enum(name.clone()),
        GqlValue::List(values) => ast::ValueData::List(
            values.iter()
                .map(|value| convert_value(position, value))
                .collect::<Result<Vec<_>>>()?,
        ),
        GqlValue::Object(fields) => ast::ValueData::Object(
            fields.iter()
                .map(|(name, value)| Ok(ast::ObjectField {
                    position,
                    name: name.clone(),
                    value: convert_value(position, value)?,
                }))
                .collect::<Result<Vec<_>>>()?,
        ),
    };

    Ok(ast::Value { position, data })
}

/// `start` is the offset of the type's first token, when known.
fn convert_type(
    scanner: &SourceScanner,
    fallback_position: SourcePosition,
    start: Option<usize>,
    type_: &gql_query::Type,
) -> ast::Type {
    use graphql_parser::query::Type as GqlType;

    match type_ {
        GqlType::NamedType(name) => ast::Type::Named(
            convert_named_type(scanner, fallback_position, start, name),
        ),
        GqlType::ListType(inner) => {
            let start = start.filter(|&offset| scanner.peek(offset) == Some('['));
            let position = start
                .and_then(|offset| scanner.position_at(offset))
                .unwrap_or(fallback_position);
            let inner_start = start
                .and_then(|offset| scanner.step(offset, Step::Punct('[')))
                .map(|offset| scanner.skip_ignored(offset));
            ast::Type::List(ast::ListType {
                position,
                type_: Box::new(convert_type(scanner, position, inner_start, inner)),
            })
        },
        // A non-null type starts where its wrapped type does.
        GqlType::NonNullType(inner) => {
            let inner = convert_type(scanner, fallback_position, start, inner);
            ast::Type::NonNull(ast::NonNullType {
                position: inner.position(),
                type_: Box::new(inner),
            })
        },
    }
}

// -----------------------------------------------------------------------------
// Type-system definitions
// -----------------------------------------------------------------------------

fn convert_type_system_definition(
    scanner: &SourceScanner,
    def: &gql_schema::Definition,
) -> Result<ast::Definition> {
    use graphql_parser::schema::Definition as GqlDef;

    match def {
        GqlDef::SchemaDefinition(schema_def) =>
            Ok(ast::Definition::Schema(convert_schema_definition(scanner, schema_def)?)),
        GqlDef::TypeDefinition(type_def) =>
            convert_type_definition(scanner, type_def),
        GqlDef::TypeExtension(type_ext) =>
            Err(DocumentParseError::UnsupportedDefinition {
                definition_kind: "type extension",
                position: type_extension_position(type_ext),
            }),
        GqlDef::DirectiveDefinition(directive_def) =>
            Ok(ast::Definition::Directive(
                convert_directive_definition(scanner, directive_def)?,
            )),
    }
}

fn convert_schema_definition(
    scanner: &SourceScanner,
    schema_def: &gql_schema::SchemaDefinition,
) -> Result<ast::SchemaDefinition> {
    let position = SourcePosition::from_pos(schema_def.position);
    let root_type_starts = scanner.root_operation_types(position);
    let operation_types = [
        (ast::OperationKind::Query, &schema_def.query),
        (ast::OperationKind::Mutation, &schema_def.mutation),
        (ast::OperationKind::Subscription, &schema_def.subscription),
    ].into_iter()
        .filter_map(|(operation, type_name)| {
            type_name.as_ref().map(|type_name| {
                let type_start = root_type_starts
                    .iter()
                    .find(|(keyword, _)| *keyword == operation.name())
                    .map(|(_, offset)| *offset);
                ast::OperationTypeDefinition {
                    position,
                    operation,
                    type_: convert_named_type(scanner, position, type_start, type_name),
                }
            })
        })
        .collect();

    Ok(ast::SchemaDefinition {
        position,
        directives: convert_directives(&schema_def.directives)?,
        operation_types,
    })
}

fn convert_type_definition(
    scanner: &SourceScanner,
    type_def: &gql_schema::TypeDefinition,
) -> Result<ast::Definition> {
    use graphql_parser::schema::TypeDefinition as GqlTypeDef;

    Ok(match type_def {
        GqlTypeDef::Scalar(scalar) =>
            ast::Definition::ScalarType(ast::ScalarTypeDefinition {
                position: SourcePosition::from_pos(scalar.position),
                description: scalar.description.clone(),
                name: scalar.name.clone(),
                directives: convert_directives(&scalar.directives)?,
            }),
        GqlTypeDef::Object(obj) =>
            ast::Definition::ObjectType(convert_object_type(scanner, obj)?),
        GqlTypeDef::Interface(iface) =>
            ast::Definition::InterfaceType(convert_interface_type(scanner, iface)?),
        GqlTypeDef::Union(union) =>
            ast::Definition::UnionType(convert_union_type(scanner, union)?),
        GqlTypeDef::Enum(enum_type) =>
            ast::Definition::EnumType(convert_enum_type(enum_type)?),
        GqlTypeDef::InputObject(input_obj) =>
            ast::Definition::InputObjectType(
                convert_input_object_type(scanner, input_obj)?,
            ),
    })
}

fn convert_object_type(
    scanner: &SourceScanner,
    obj: &gql_schema::ObjectType,
) -> Result<ast::ObjectTypeDefinition> {
    let position = SourcePosition::from_pos(obj.position);
    let first_interface_start = scanner.seek(position, &[
        Step::Keyword("type"),
        Step::Name,
        Step::Keyword("implements"),
        Step::OptionalPunct('&'),
    ]);
    Ok(ast::ObjectTypeDefinition {
        position,
        description: obj.description.clone(),
        name: obj.name.clone(),
        interfaces: convert_named_types(
            scanner,
            position,
            scanner.separated_names(
                first_interface_start,
                obj.implements_interfaces.len(),
                '&',
            ),
            &obj.implements_interfaces,
        ),
        directives: convert_directives(&obj.directives)?,
        fields: convert_field_definitions(scanner, &obj.fields)?,
    })
}

fn convert_interface_type(
    scanner: &SourceScanner,
    iface: &gql_schema::InterfaceType,
) -> Result<ast::InterfaceTypeDefinition> {
    let position = SourcePosition::from_pos(iface.position);
    let first_interface_start = scanner.seek(position, &[
        Step::Keyword("interface"),
        Step::Name,
        Step::Keyword("implements"),
        Step::OptionalPunct('&'),
    ]);
    Ok(ast::InterfaceTypeDefinition {
        position,
        description: iface.description.clone(),
        name: iface.name.clone(),
        interfaces: convert_named_types(
            scanner,
            position,
            scanner.separated_names(
                first_interface_start,
                iface.implements_interfaces.len(),
                '&',
            ),
            &iface.implements_interfaces,
        ),
        directives: convert_directives(&iface.directives)?,
        fields: convert_field_definitions(scanner, &iface.fields)?,
    })
}

fn convert_union_type(
    scanner: &SourceScanner,
    union: &gql_schema::UnionType,
) -> Result<ast::UnionTypeDefinition> {
    let position = SourcePosition::from_pos(union.position);
    let first_member_start = scanner.seek(position, &[
        Step::Keyword("union"),
        Step::Name,
        Step::Directives,
        Step::Punct('='),
        Step::OptionalPunct('|'),
    ]);
    Ok(ast::UnionTypeDefinition {
        position,
        description: union.description.clone(),
        name: union.name.clone(),
        directives: convert_directives(&union.directives)?,
        types: convert_named_types(
            scanner,
            position,
            scanner.separated_names(first_member_start, union.types.len(), '|'),
            &union.types,
        ),
    })
}

fn convert_enum_type(
    enum_type: &gql_schema::EnumType,
) -> Result<ast::EnumTypeDefinition> {
    Ok(ast::EnumTypeDefinition {
        position: SourcePosition::from_pos(enum_type.position),
        description: enum_type.description.clone(),
        name: enum_type.name.clone(),
        directives: convert_directives(&enum_type.directives)?,
        values: enum_type.values
            .iter()
            .map(|value| Ok(ast::EnumValueDefinition {
                position: SourcePosition::from_pos(value.position),
                description: value.description.clone(),
                name: value.name.clone(),
                directives: convert_directives(&value.directives)?,
            }))
            .collect::<Result<Vec<_>>>()?,
    })
}

fn convert_input_object_type(
    scanner: &SourceScanner,
    input_obj: &gql_schema::InputObjectType,
) -> Result<ast::InputObjectTypeDefinition> {
    Ok(ast::InputObjectTypeDefinition {
        position: SourcePosition::from_pos(input_obj.position),
        description: input_obj.description.clone(),
        name: input_obj.name.clone(),
        directives: convert_directives(&input_obj.directives)?,
        fields: convert_input_values(scanner, &input_obj.fields)?,
    })
}

fn convert_directive_definition(
    scanner: &SourceScanner,
    directive_def: &gql_schema::DirectiveDefinition,
) -> Result<ast::DirectiveDefinition> {
    Ok(ast::DirectiveDefinition {
        position: SourcePosition::from_pos(directive_def.position),
        description: directive_def.description.clone(),
        name: directive_def.name.clone(),
        arguments: convert_input_values(scanner, &directive_def.arguments)?,
        repeatable: directive_def.repeatable,
        locations: directive_def.locations
            .iter()
            .map(|loc| loc.as_str().to_string())
            .collect(),
    })
}

fn convert_field_definitions(
    scanner: &SourceScanner,
    fields: &[gql_schema::Field],
) -> Result<Vec<ast::FieldDefinition>> {
    fields.iter().map(|field| {
        let position = SourcePosition::from_pos(field.position);
        let type_start = scanner.seek(position, &[
            Step::OptionalString,
            Step::Name,
            Step::OptionalGroup('(', ')'),
            Step::Punct(':'),
        ]);
        Ok(ast::FieldDefinition {
            position,
            description: field.description.clone(),
            name: field.name.clone(),
            arguments: convert_input_values(scanner, &field.arguments)?,
            type_: convert_type(scanner, position, type_start, &field.field_type),
            directives: convert_directives(&field.directives)?,
        })
    }).collect()
}

fn convert_input_values(
    scanner: &SourceScanner,
    input_values: &[gql_schema::InputValue],
) -> Result<Vec<ast::InputValueDefinition>> {
    input_values.iter().map(|input_value| {
        let position = SourcePosition::from_pos(input_value.position);
        let type_start = scanner.seek(position, &[
            Step::OptionalString,
            Step::Name,
            Step::Punct(':'),
        ]);
        Ok(ast::InputValueDefinition {
            position,
            description: input_value.description.clone(),
            name: input_value.name.clone(),
            type_: convert_type(scanner, position, type_start, &input_value.value_type),
            default_value: input_value.default_value
                .as_ref()
                .map(|value| convert_value(position, value))
                .transpose()?,
            directives: convert_directives(&input_value.directives)?,
        })
    }).collect()
}

fn convert_named_types(
    scanner: &SourceScanner,
    fallback_position: SourcePosition,
    starts: Vec<Option<usize>>,
    names: &[String],
) -> Vec<ast::NamedType> {
    names.iter()
        .zip(starts)
        .map(|(name, start)| {
            convert_named_type(scanner, fallback_position, start, name)
        })
        .collect()
}

fn type_extension_position(type_ext: &gql_schema::TypeExtension) -> SourcePosition {
    use graphql_parser::schema::TypeExtension as GqlTypeExt;

    SourcePosition::from_pos(match type_ext {
        GqlTypeExt::Scalar(ext) => ext.position,
        GqlTypeExt::Object(ext) => ext.position,
        GqlTypeExt::Interface(ext) => ext.position,
        GqlTypeExt::Union(ext) => ext.position,
        GqlTypeExt::Enum(ext) => ext.position,
        GqlTypeExt::InputObject(ext) => ext.position,
    })
}
