use crate::ast::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::sync::OnceLock;

/// Represents a fully typechecked and immutable GraphQL schema.
///
/// A `Schema` is the read-only source of type information that validation
/// rules consult. It is `Send + Sync` and is typically built once and then
/// shared across many concurrent validation runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) possible_types: IndexMap<String, IndexSet<String>>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Look up a type by name, including the built-in scalars.
    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Every named type in this schema, in definition order (built-in scalars
    /// first).
    pub fn get_type_map(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// The fields of an object or interface type. Types that do not carry
    /// fields yield an empty map.
    pub fn get_fields_of<'s>(
        &'s self,
        type_: &'s GraphQLType,
    ) -> &'s IndexMap<String, Field> {
        type_.fields().unwrap_or_else(|| empty_fields())
    }

    /// The object types that `type_` may resolve to at runtime: the members of
    /// a union, the implementors of an interface, or the object type itself.
    pub fn get_possible_types<'s>(
        &'s self,
        type_: &'s GraphQLType,
    ) -> Vec<&'s ObjectType> {
        match type_ {
            GraphQLType::Object(obj_type) => vec![obj_type],
            GraphQLType::Interface(_) | GraphQLType::Union(_) =>
                self.possible_types
                    .get(type_.name())
                    .into_iter()
                    .flatten()
                    .filter_map(|type_name| {
                        self.types.get(type_name).and_then(|t| t.as_object())
                    })
                    .collect(),
            _ => vec![],
        }
    }

    pub fn is_possible_type(
        &self,
        abstract_type: &GraphQLType,
        object_type: &ObjectType,
    ) -> bool {
        match abstract_type {
            GraphQLType::Object(obj_type) => obj_type.name() == object_type.name(),
            _ => self.possible_types
                .get(abstract_type.name())
                .is_some_and(|names| names.contains(object_type.name())),
        }
    }

    pub fn get_directive(&self, directive_name: &str) -> Option<&Directive> {
        self.directive_defs.get(directive_name)
    }

    /// All directive definitions, including the built-ins.
    pub fn directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// The root `query` operation type. Every valid schema defines one.
    pub fn query_type(&self) -> &ObjectType {
        self.root_type_by_name(&self.query_type)
            .expect("query type is present in schema")
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type
            .as_deref()
            .and_then(|type_name| self.root_type_by_name(type_name))
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type
            .as_deref()
            .and_then(|type_name| self.root_type_by_name(type_name))
    }

    /// The root object type for the given kind of operation, if this schema
    /// defines one.
    pub fn root_operation_type(
        &self,
        operation: OperationKind,
    ) -> Option<&ObjectType> {
        match operation {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    fn root_type_by_name(&self, type_name: &str) -> Option<&ObjectType> {
        self.types.get(type_name).and_then(|t| t.as_object())
    }
}

fn empty_fields() -> &'static IndexMap<String, Field> {
    static EMPTY_FIELDS: OnceLock<IndexMap<String, Field>> = OnceLock::new();
    EMPTY_FIELDS.get_or_init(IndexMap::new)
}
