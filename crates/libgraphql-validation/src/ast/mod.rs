//! An owned, immutable AST for GraphQL documents.
//!
//! Documents are usually produced from source text via
//! [`Document::parse_executable`] or [`Document::parse_schema`], but every
//! node type is plain data and can be constructed directly.
//!
//! Traversal code does not match on these structs directly; instead it works
//! with [`NodeRef`], a borrowed handle that exposes each node's
//! [`NodeKind`] and its ordered child slots.

mod document_parse_error;
mod from_graphql_parser;
mod node_kind;
mod node_ref;
mod source_scanner;

use crate::loc::SourcePosition;

pub use document_parse_error::DocumentParseError;
pub use node_kind::NodeKind;
pub use node_ref::NodeRef;

/// The root of a parsed GraphQL source.
///
/// A `Document` may hold executable definitions (operations and fragments),
/// type-system definitions, or a mix of both.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}
impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Parse an executable document (operations and fragments).
    pub fn parse_executable(
        src: impl AsRef<str>,
    ) -> Result<Self, DocumentParseError> {
        from_graphql_parser::parse_executable(src.as_ref())
    }

    /// Parse a type-system document (schema, type and directive
    /// definitions).
    pub fn parse_schema(
        src: impl AsRef<str>,
    ) -> Result<Self, DocumentParseError> {
        from_graphql_parser::parse_schema(src.as_ref())
    }

    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Document(self)
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    ScalarType(ScalarTypeDefinition),
    ObjectType(ObjectTypeDefinition),
    InterfaceType(InterfaceTypeDefinition),
    UnionType(UnionTypeDefinition),
    EnumType(EnumTypeDefinition),
    InputObjectType(InputObjectTypeDefinition),
    Directive(DirectiveDefinition),
}
impl Definition {
    pub fn position(&self) -> SourcePosition {
        self.as_node().position()
    }

    pub fn as_node(&self) -> NodeRef<'_> {
        match self {
            Self::Operation(def) => NodeRef::OperationDefinition(def),
            Self::Fragment(def) => NodeRef::FragmentDefinition(def),
            Self::Schema(def) => NodeRef::SchemaDefinition(def),
            Self::ScalarType(def) => NodeRef::ScalarTypeDefinition(def),
            Self::ObjectType(def) => NodeRef::ObjectTypeDefinition(def),
            Self::InterfaceType(def) => NodeRef::InterfaceTypeDefinition(def),
            Self::UnionType(def) => NodeRef::UnionTypeDefinition(def),
            Self::EnumType(def) => NodeRef::EnumTypeDefinition(def),
            Self::InputObjectType(def) =>
                NodeRef::InputObjectTypeDefinition(def),
            Self::Directive(def) => NodeRef::DirectiveDefinition(def),
        }
    }

    /// Whether this is an operation or fragment definition (as opposed to a
    /// type-system definition).
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::Operation(_) | Self::Fragment(_))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}

// -----------------------------------------------------------------------------
// Executable definitions
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub position: SourcePosition,
    pub operation: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub position: SourcePosition,
    /// The variable's name, without the leading `$`.
    pub variable: String,
    pub type_: Type,
    pub default_value: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub position: SourcePosition,
    pub selections: Vec<Selection>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn as_node(&self) -> NodeRef<'_> {
        match self {
            Self::Field(field) => NodeRef::Field(field),
            Self::FragmentSpread(spread) => NodeRef::FragmentSpread(spread),
            Self::InlineFragment(frag) => NodeRef::InlineFragment(frag),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub position: SourcePosition,
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
}
impl Field {
    /// The key this field's result is returned under (its alias if present).
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub position: SourcePosition,
    pub name: String,
    pub value: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub position: SourcePosition,
    pub fragment_name: String,
    pub directives: Vec<Directive>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub position: SourcePosition,
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub position: SourcePosition,
    pub name: String,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub position: SourcePosition,
    pub name: String,
    pub arguments: Vec<Argument>,
}

/// A literal or variable value.
///
/// Values are a single struct (rather than one struct per value kind) but
/// each [`ValueData`] variant maps to its own [`NodeKind`].
#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    pub position: SourcePosition,
    pub data: ValueData,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValueData {
    Variable(String),
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(Vec<ObjectField>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub position: SourcePosition,
    pub name: String,
    pub value: Value,
}

// -----------------------------------------------------------------------------
// Type references
// -----------------------------------------------------------------------------

/// A (possibly wrapped) reference to a type by name.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}
impl Type {
    pub fn as_node(&self) -> NodeRef<'_> {
        match self {
            Self::Named(t) => NodeRef::NamedType(t),
            Self::List(t) => NodeRef::ListType(t),
            Self::NonNull(t) => NodeRef::NonNullType(t),
        }
    }

    /// The [`NamedType`] at the bottom of any list/non-null wrappers.
    pub fn innermost_named_type(&self) -> &NamedType {
        match self {
            Self::Named(t) => t,
            Self::List(t) => t.type_.innermost_named_type(),
            Self::NonNull(t) => t.type_.innermost_named_type(),
        }
    }

    pub fn position(&self) -> SourcePosition {
        self.as_node().position()
    }
}
impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(t) => write!(f, "{}", t.name),
            Self::List(t) => write!(f, "[{}]", t.type_),
            Self::NonNull(t) => write!(f, "{}!", t.type_),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub position: SourcePosition,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub position: SourcePosition,
    pub type_: Box<Type>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub position: SourcePosition,
    pub type_: Box<Type>,
}

// -----------------------------------------------------------------------------
// Type-system definitions
// -----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub position: SourcePosition,
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub position: SourcePosition,
    pub operation: OperationKind,
    pub type_: NamedType,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub type_: Type,
    pub directives: Vec<Directive>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub type_: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub position: SourcePosition,
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<String>,
}
