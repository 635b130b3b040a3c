use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::types_map_validator::TypesMapValidator;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from one or more type-system documents.
///
/// ```
/// use libgraphql_validation::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_from_str("type Query { hello: String }")?
///     .build()?;
/// assert_eq!(schema.query_type().name(), "Query");
/// # Ok::<(), libgraphql_validation::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    mutation_type: Option<String>,
    query_type: Option<String>,
    schema_def_location: Option<loc::SourcePosition>,
    subscription_type: Option<String>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            query_type: None,
            schema_def_location: None,
            subscription_type: None,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn from_files(
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        let mut builder = Self::new();
        for file_path in file_paths {
            builder = builder.load_from_file(file_path)?;
        }
        Ok(builder)
    }

    pub fn load_from_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        log::debug!("Loading schema file {}", file_path.display());
        let file_content = std::fs::read_to_string(file_path)
            .map_err(|source| SchemaBuildError::FileReadError {
                file_path: file_path.to_path_buf(),
                source,
            })?;
        self.load_from_str(file_content)
    }

    pub fn load_from_str(self, content: impl AsRef<str>) -> Result<Self> {
        let doc = ast::Document::parse_schema(content)?;
        self.load_from_document(&doc)
    }

    pub fn load_from_document(mut self, doc: &ast::Document) -> Result<Self> {
        for def in &doc.definitions {
            self.visit_definition(def)?;
        }
        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();

        let errors =
            TypesMapValidator::new(&self.types, &self.directive_defs).validate();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let query_type = self.resolve_root_type(
            ast::OperationKind::Query,
            self.query_type.as_ref(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = self.resolve_root_type(
            ast::OperationKind::Mutation,
            self.mutation_type.as_ref(),
        )?;
        let subscription_type = self.resolve_root_type(
            ast::OperationKind::Subscription,
            self.subscription_type.as_ref(),
        )?;

        let possible_types = self.compute_possible_types();

        log::debug!(
            "Built schema with {} types and {} directives",
            self.types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            possible_types,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: loc::SourcePosition,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc,
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location(),
                def2: type_loc,
            });
        }

        log::trace!("Adding type `{type_name}` at {type_loc}");
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    /// Maps every abstract type name to the object types that may stand in
    /// for it at runtime.
    fn compute_possible_types(&self) -> IndexMap<String, IndexSet<String>> {
        let mut possible_types: IndexMap<String, IndexSet<String>> =
            IndexMap::new();
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Interface(iface) => {
                    possible_types.entry(iface.name().to_string()).or_default();
                },

                GraphQLType::Object(obj_type) => {
                    for iface_name in obj_type.interface_names() {
                        possible_types
                            .entry(iface_name.to_string())
                            .or_default()
                            .insert(obj_type.name().to_string());
                    }
                },

                GraphQLType::Union(union_type) => {
                    possible_types
                        .entry(union_type.name().to_string())
                        .or_default()
                        .extend(union_type.members.iter().cloned());
                },

                _ => (),
            }
        }
        possible_types
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in Directive::builtins() {
            if !self.directive_defs.contains_key(directive.name()) {
                self.directive_defs.insert(directive.name().to_string(), directive);
            }
        }
    }

    /// Determine the root type name for `operation`: the one named by the
    /// `schema` definition if there is one, otherwise the type whose name
    /// matches the conventional default (`Query`, `Mutation`,
    /// `Subscription`).
    fn resolve_root_type(
        &self,
        operation: ast::OperationKind,
        explicit: Option<&String>,
    ) -> Result<Option<String>> {
        let type_name = match explicit {
            Some(type_name) => type_name.as_str(),
            None if self.schema_def_location.is_some() => return Ok(None),
            None => {
                let conventional_name = match operation {
                    ast::OperationKind::Mutation => "Mutation",
                    ast::OperationKind::Query => "Query",
                    ast::OperationKind::Subscription => "Subscription",
                };
                if !self.types.contains_key(conventional_name) {
                    return Ok(None);
                }
                conventional_name
            },
        };

        match self.types.get(type_name) {
            Some(GraphQLType::Object(_)) => Ok(Some(type_name.to_string())),
            _ => Err(SchemaBuildError::RootOperationTypeNotObject {
                operation,
                type_name: type_name.to_string(),
            }),
        }
    }

    fn visit_definition(&mut self, def: &ast::Definition) -> Result<()> {
        match def {
            ast::Definition::Operation(_) | ast::Definition::Fragment(_) =>
                Err(SchemaBuildError::ExecutableDefinitionInSchema {
                    location: def.position(),
                }),

            ast::Definition::Schema(schema_def) =>
                self.visit_schema_definition(schema_def),

            ast::Definition::Directive(directive_def) =>
                self.visit_directive_definition(directive_def),

            ast::Definition::EnumType(enum_def) => {
                let def_location = loc::SchemaDefLocation::from(enum_def.position);
                let values = enum_def.values.iter().map(|value_def| (
                    value_def.name.to_string(),
                    EnumValue {
                        def_location: value_def.position.into(),
                        name: value_def.name.to_string(),
                    },
                )).collect();
                self.add_new_type(
                    &enum_def.name,
                    enum_def.position,
                    GraphQLType::Enum(EnumType {
                        def_location,
                        description: enum_def.description.to_owned(),
                        name: enum_def.name.to_string(),
                        values,
                    }),
                )
            },

            ast::Definition::InputObjectType(inputobj_def) => {
                let mut fields = IndexMap::new();
                for field_def in &inputobj_def.fields {
                    check_duplicate_field(
                        &inputobj_def.name,
                        &fields,
                        field_def,
                        |f: &InputField| f.def_location.position(),
                    )?;
                    fields.insert(field_def.name.to_string(), InputField {
                        def_location: field_def.position.into(),
                        default_value: field_def.default_value.to_owned(),
                        name: field_def.name.to_string(),
                        type_annotation:
                            TypeAnnotation::from_ast_type(&field_def.type_),
                    });
                }
                self.add_new_type(
                    &inputobj_def.name,
                    inputobj_def.position,
                    GraphQLType::InputObject(InputObjectType {
                        def_location: inputobj_def.position.into(),
                        description: inputobj_def.description.to_owned(),
                        fields,
                        name: inputobj_def.name.to_string(),
                    }),
                )
            },

            ast::Definition::InterfaceType(iface_def) => {
                let data = object_or_interface_data(
                    &iface_def.name,
                    iface_def.position,
                    iface_def.description.as_ref(),
                    &iface_def.interfaces,
                    &iface_def.fields,
                )?;
                self.add_new_type(
                    &iface_def.name,
                    iface_def.position,
                    GraphQLType::Interface(InterfaceType(data)),
                )
            },

            ast::Definition::ObjectType(obj_def) => {
                let data = object_or_interface_data(
                    &obj_def.name,
                    obj_def.position,
                    obj_def.description.as_ref(),
                    &obj_def.interfaces,
                    &obj_def.fields,
                )?;
                self.add_new_type(
                    &obj_def.name,
                    obj_def.position,
                    GraphQLType::Object(ObjectType(data)),
                )
            },

            ast::Definition::ScalarType(scalar_def) => self.add_new_type(
                &scalar_def.name,
                scalar_def.position,
                GraphQLType::Scalar(ScalarType {
                    def_location: scalar_def.position.into(),
                    description: scalar_def.description.to_owned(),
                    name: scalar_def.name.to_string(),
                }),
            ),

            ast::Definition::UnionType(union_def) => {
                let mut members = IndexSet::new();
                for member in &union_def.types {
                    if !members.insert(member.name.to_string()) {
                        return Err(SchemaBuildError::DuplicateUnionMember {
                            union_name: union_def.name.to_string(),
                            member_name: member.name.to_string(),
                            location: member.position,
                        });
                    }
                }
                self.add_new_type(
                    &union_def.name,
                    union_def.position,
                    GraphQLType::Union(UnionType {
                        def_location: union_def.position.into(),
                        description: union_def.description.to_owned(),
                        members,
                        name: union_def.name.to_string(),
                    }),
                )
            },
        }
    }

    fn visit_directive_definition(
        &mut self,
        def: &ast::DirectiveDefinition,
    ) -> Result<()> {
        if let Some(existing) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.to_string(),
                def1: existing.def_location().position().unwrap_or_default(),
                def2: def.position,
            });
        }

        self.directive_defs.insert(def.name.to_string(), Directive {
            def_location: def.position.into(),
            description: def.description.to_owned(),
            locations: def.locations.to_owned(),
            name: def.name.to_string(),
            parameters: parameters_from_ast(&def.arguments),
            repeatable: def.repeatable,
        });
        Ok(())
    }

    fn visit_schema_definition(
        &mut self,
        def: &ast::SchemaDefinition,
    ) -> Result<()> {
        if let Some(def1) = self.schema_def_location {
            return Err(SchemaBuildError::DuplicateSchemaDefinition {
                def1,
                def2: def.position,
            });
        }
        self.schema_def_location = Some(def.position);

        for op_type_def in &def.operation_types {
            let slot = match op_type_def.operation {
                ast::OperationKind::Mutation => &mut self.mutation_type,
                ast::OperationKind::Query => &mut self.query_type,
                ast::OperationKind::Subscription => &mut self.subscription_type,
            };
            if slot.is_some() {
                return Err(SchemaBuildError::DuplicateOperationTypeDefinition {
                    operation: op_type_def.operation,
                    location: op_type_def.position,
                });
            }
            *slot = Some(op_type_def.type_.name.to_string());
        }
        Ok(())
    }
}
impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_duplicate_field<T>(
    type_name: &str,
    fields: &IndexMap<String, T>,
    field_def: &impl FieldDefLike,
    existing_position: impl Fn(&T) -> Option<loc::SourcePosition>,
) -> Result<()> {
    if let Some(existing) = fields.get(field_def.name()) {
        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
            type_name: type_name.to_string(),
            field_name: field_def.name().to_string(),
            field_def1: existing_position(existing).unwrap_or_default(),
            field_def2: field_def.position(),
        });
    }
    Ok(())
}

trait FieldDefLike {
    fn name(&self) -> &str;
    fn position(&self) -> loc::SourcePosition;
}
impl FieldDefLike for ast::FieldDefinition {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn position(&self) -> loc::SourcePosition {
        self.position
    }
}
impl FieldDefLike for ast::InputValueDefinition {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn position(&self) -> loc::SourcePosition {
        self.position
    }
}

fn object_or_interface_data(
    type_name: &str,
    position: loc::SourcePosition,
    description: Option<&String>,
    interfaces: &[ast::NamedType],
    field_defs: &[ast::FieldDefinition],
) -> Result<ObjectOrInterfaceTypeData> {
    let mut fields = IndexMap::new();
    for field_def in field_defs {
        check_duplicate_field(
            type_name,
            &fields,
            field_def,
            |f: &Field| f.def_location.position(),
        )?;
        fields.insert(field_def.name.to_string(), Field {
            def_location: field_def.position.into(),
            description: field_def.description.to_owned(),
            name: field_def.name.to_string(),
            parameters: parameters_from_ast(&field_def.arguments),
            type_annotation: TypeAnnotation::from_ast_type(&field_def.type_),
        });
    }

    Ok(ObjectOrInterfaceTypeData {
        def_location: position.into(),
        description: description.cloned(),
        fields,
        interfaces: interfaces
            .iter()
            .map(|iface| iface.name.to_string())
            .collect(),
        name: type_name.to_string(),
    })
}

fn parameters_from_ast(
    input_value_defs: &[ast::InputValueDefinition],
) -> IndexMap<String, Parameter> {
    input_value_defs.iter().map(|input_value_def| (
        input_value_def.name.to_string(),
        Parameter {
            def_location: input_value_def.position.into(),
            default_value: input_value_def.default_value.to_owned(),
            name: input_value_def.name.to_string(),
            type_annotation:
                TypeAnnotation::from_ast_type(&input_value_def.type_),
        },
    )).collect()
}
