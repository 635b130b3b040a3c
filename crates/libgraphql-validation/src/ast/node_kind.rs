/// The kind tag of an AST node.
///
/// Visitors register callbacks per `NodeKind`; see
/// [`Visitor`](crate::visitor::Visitor).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeKind {
    Document,

    // Executable definitions
    OperationDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,

    // Values
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,

    Directive,

    // Type references
    NamedType,
    ListType,
    NonNullType,

    // Type-system definitions
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
}
impl NodeKind {
    pub const ALL: [NodeKind; 35] = [
        Self::Document,
        Self::OperationDefinition,
        Self::VariableDefinition,
        Self::SelectionSet,
        Self::Field,
        Self::Argument,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::FragmentDefinition,
        Self::Variable,
        Self::IntValue,
        Self::FloatValue,
        Self::StringValue,
        Self::BooleanValue,
        Self::NullValue,
        Self::EnumValue,
        Self::ListValue,
        Self::ObjectValue,
        Self::ObjectField,
        Self::Directive,
        Self::NamedType,
        Self::ListType,
        Self::NonNullType,
        Self::SchemaDefinition,
        Self::OperationTypeDefinition,
        Self::ScalarTypeDefinition,
        Self::ObjectTypeDefinition,
        Self::FieldDefinition,
        Self::InputValueDefinition,
        Self::InterfaceTypeDefinition,
        Self::UnionTypeDefinition,
        Self::EnumTypeDefinition,
        Self::EnumValueDefinition,
        Self::InputObjectTypeDefinition,
        Self::DirectiveDefinition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::OperationDefinition => "OperationDefinition",
            Self::VariableDefinition => "VariableDefinition",
            Self::SelectionSet => "SelectionSet",
            Self::Field => "Field",
            Self::Argument => "Argument",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::Variable => "Variable",
            Self::IntValue => "IntValue",
            Self::FloatValue => "FloatValue",
            Self::StringValue => "StringValue",
            Self::BooleanValue => "BooleanValue",
            Self::NullValue => "NullValue",
            Self::EnumValue => "EnumValue",
            Self::ListValue => "ListValue",
            Self::ObjectValue => "ObjectValue",
            Self::ObjectField => "ObjectField",
            Self::Directive => "Directive",
            Self::NamedType => "NamedType",
            Self::ListType => "ListType",
            Self::NonNullType => "NonNullType",
            Self::SchemaDefinition => "SchemaDefinition",
            Self::OperationTypeDefinition => "OperationTypeDefinition",
            Self::ScalarTypeDefinition => "ScalarTypeDefinition",
            Self::ObjectTypeDefinition => "ObjectTypeDefinition",
            Self::FieldDefinition => "FieldDefinition",
            Self::InputValueDefinition => "InputValueDefinition",
            Self::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            Self::UnionTypeDefinition => "UnionTypeDefinition",
            Self::EnumTypeDefinition => "EnumTypeDefinition",
            Self::EnumValueDefinition => "EnumValueDefinition",
            Self::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            Self::DirectiveDefinition => "DirectiveDefinition",
        }
    }
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
