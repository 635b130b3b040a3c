use crate::ast;
use crate::ast::NodeKind;
use crate::ast::ValueData;
use crate::loc::SourcePosition;

/// A borrowed handle to any node within a [`Document`](ast::Document).
///
/// `NodeRef` is the unit of traversal: the walker hands one to each visitor
/// callback, and [`ValidationError`](crate::validation::ValidationError)s
/// keep them to point at the offending parts of a document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeRef<'a> {
    Document(&'a ast::Document),
    OperationDefinition(&'a ast::OperationDefinition),
    VariableDefinition(&'a ast::VariableDefinition),
    SelectionSet(&'a ast::SelectionSet),
    Field(&'a ast::Field),
    Argument(&'a ast::Argument),
    FragmentSpread(&'a ast::FragmentSpread),
    InlineFragment(&'a ast::InlineFragment),
    FragmentDefinition(&'a ast::FragmentDefinition),
    Value(&'a ast::Value),
    ObjectField(&'a ast::ObjectField),
    Directive(&'a ast::Directive),
    NamedType(&'a ast::NamedType),
    ListType(&'a ast::ListType),
    NonNullType(&'a ast::NonNullType),
    SchemaDefinition(&'a ast::SchemaDefinition),
    OperationTypeDefinition(&'a ast::OperationTypeDefinition),
    ScalarTypeDefinition(&'a ast::ScalarTypeDefinition),
    ObjectTypeDefinition(&'a ast::ObjectTypeDefinition),
    FieldDefinition(&'a ast::FieldDefinition),
    InputValueDefinition(&'a ast::InputValueDefinition),
    InterfaceTypeDefinition(&'a ast::InterfaceTypeDefinition),
    UnionTypeDefinition(&'a ast::UnionTypeDefinition),
    EnumTypeDefinition(&'a ast::EnumTypeDefinition),
    EnumValueDefinition(&'a ast::EnumValueDefinition),
    InputObjectTypeDefinition(&'a ast::InputObjectTypeDefinition),
    DirectiveDefinition(&'a ast::DirectiveDefinition),
}

macro_rules! node_accessors {
    ($($fn_name:ident => $variant:ident : $ty:ty),* $(,)?) => {
        $(
            pub fn $fn_name(&self) -> Option<&'a $ty> {
                if let Self::$variant(node) = self {
                    Some(node)
                } else {
                    None
                }
            }
        )*
    };
}

impl<'a> NodeRef<'a> {
    node_accessors! {
        as_argument => Argument: ast::Argument,
        as_directive => Directive: ast::Directive,
        as_document => Document: ast::Document,
        as_field => Field: ast::Field,
        as_fragment_definition => FragmentDefinition: ast::FragmentDefinition,
        as_fragment_spread => FragmentSpread: ast::FragmentSpread,
        as_inline_fragment => InlineFragment: ast::InlineFragment,
        as_named_type => NamedType: ast::NamedType,
        as_object_field => ObjectField: ast::ObjectField,
        as_operation_definition => OperationDefinition: ast::OperationDefinition,
        as_selection_set => SelectionSet: ast::SelectionSet,
        as_value => Value: ast::Value,
        as_variable_definition => VariableDefinition: ast::VariableDefinition,
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Document(_) => NodeKind::Document,
            Self::OperationDefinition(_) => NodeKind::OperationDefinition,
            Self::VariableDefinition(_) => NodeKind::VariableDefinition,
            Self::SelectionSet(_) => NodeKind::SelectionSet,
            Self::Field(_) => NodeKind::Field,
            Self::Argument(_) => NodeKind::Argument,
            Self::FragmentSpread(_) => NodeKind::FragmentSpread,
            Self::InlineFragment(_) => NodeKind::InlineFragment,
            Self::FragmentDefinition(_) => NodeKind::FragmentDefinition,
            Self::Value(value) => match &value.data {
                ValueData::Variable(_) => NodeKind::Variable,
                ValueData::Int(_) => NodeKind::IntValue,
                ValueData::Float(_) => NodeKind::FloatValue,
                ValueData::String(_) => NodeKind::StringValue,
                ValueData::Boolean(_) => NodeKind::BooleanValue,
                ValueData::Null => NodeKind::NullValue,
                ValueData::Enum(_) => NodeKind::EnumValue,
                ValueData::List(_) => NodeKind::ListValue,
                ValueData::Object(_) => NodeKind::ObjectValue,
            },
            Self::ObjectField(_) => NodeKind::ObjectField,
            Self::Directive(_) => NodeKind::Directive,
            Self::NamedType(_) => NodeKind::NamedType,
            Self::ListType(_) => NodeKind::ListType,
            Self::NonNullType(_) => NodeKind::NonNullType,
            Self::SchemaDefinition(_) => NodeKind::SchemaDefinition,
            Self::OperationTypeDefinition(_) =>
                NodeKind::OperationTypeDefinition,
            Self::ScalarTypeDefinition(_) => NodeKind::ScalarTypeDefinition,
            Self::ObjectTypeDefinition(_) => NodeKind::ObjectTypeDefinition,
            Self::FieldDefinition(_) => NodeKind::FieldDefinition,
            Self::InputValueDefinition(_) => NodeKind::InputValueDefinition,
            Self::InterfaceTypeDefinition(_) =>
                NodeKind::InterfaceTypeDefinition,
            Self::UnionTypeDefinition(_) => NodeKind::UnionTypeDefinition,
            Self::EnumTypeDefinition(_) => NodeKind::EnumTypeDefinition,
            Self::EnumValueDefinition(_) => NodeKind::EnumValueDefinition,
            Self::InputObjectTypeDefinition(_) =>
                NodeKind::InputObjectTypeDefinition,
            Self::DirectiveDefinition(_) => NodeKind::DirectiveDefinition,
        }
    }

    /// The source position of this node.
    ///
    /// A [`Document`](ast::Document) has no position of its own; it reports
    /// the position of its first definition (or 1:1 when empty).
    pub fn position(&self) -> SourcePosition {
        match self {
            Self::Document(doc) => doc.definitions
                .first()
                .map(|def| def.position())
                .unwrap_or(SourcePosition::new(1, 1)),
            Self::OperationDefinition(node) => node.position,
            Self::VariableDefinition(node) => node.position,
            Self::SelectionSet(node) => node.position,
            Self::Field(node) => node.position,
            Self::Argument(node) => node.position,
            Self::FragmentSpread(node) => node.position,
            Self::InlineFragment(node) => node.position,
            Self::FragmentDefinition(node) => node.position,
            Self::Value(node) => node.position,
            Self::ObjectField(node) => node.position,
            Self::Directive(node) => node.position,
            Self::NamedType(node) => node.position,
            Self::ListType(node) => node.position,
            Self::NonNullType(node) => node.position,
            Self::SchemaDefinition(node) => node.position,
            Self::OperationTypeDefinition(node) => node.position,
            Self::ScalarTypeDefinition(node) => node.position,
            Self::ObjectTypeDefinition(node) => node.position,
            Self::FieldDefinition(node) => node.position,
            Self::InputValueDefinition(node) => node.position,
            Self::InterfaceTypeDefinition(node) => node.position,
            Self::UnionTypeDefinition(node) => node.position,
            Self::EnumTypeDefinition(node) => node.position,
            Self::EnumValueDefinition(node) => node.position,
            Self::InputObjectTypeDefinition(node) => node.position,
            Self::DirectiveDefinition(node) => node.position,
        }
    }

    /// The ordered child nodes of this node.
    ///
    /// Children are listed slot by slot in a fixed order per node kind (e.g.
    /// a [`Field`](ast::Field) yields its arguments, then its directives,
    /// then its selection set), and within a slot in source order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut children = vec![];
        match *self {
            Self::Document(doc) => {
                children.extend(doc.definitions.iter().map(|d| d.as_node()));
            },

            Self::OperationDefinition(op) => {
                children.extend(
                    op.variable_definitions.iter().map(Self::VariableDefinition),
                );
                children.extend(op.directives.iter().map(Self::Directive));
                children.push(Self::SelectionSet(&op.selection_set));
            },

            Self::VariableDefinition(var_def) => {
                children.push(var_def.type_.as_node());
                if let Some(default_value) = &var_def.default_value {
                    children.push(Self::Value(default_value));
                }
            },

            Self::SelectionSet(selection_set) => {
                children.extend(
                    selection_set.selections.iter().map(|s| s.as_node()),
                );
            },

            Self::Field(field) => {
                children.extend(field.arguments.iter().map(Self::Argument));
                children.extend(field.directives.iter().map(Self::Directive));
                if let Some(selection_set) = &field.selection_set {
                    children.push(Self::SelectionSet(selection_set));
                }
            },

            Self::Argument(arg) => children.push(Self::Value(&arg.value)),

            Self::FragmentSpread(spread) => {
                children.extend(spread.directives.iter().map(Self::Directive));
            },

            Self::InlineFragment(frag) => {
                if let Some(type_condition) = &frag.type_condition {
                    children.push(Self::NamedType(type_condition));
                }
                children.extend(frag.directives.iter().map(Self::Directive));
                children.push(Self::SelectionSet(&frag.selection_set));
            },

            Self::FragmentDefinition(frag) => {
                children.push(Self::NamedType(&frag.type_condition));
                children.extend(frag.directives.iter().map(Self::Directive));
                children.push(Self::SelectionSet(&frag.selection_set));
            },

            Self::Value(value) => match &value.data {
                ValueData::List(values) =>
                    children.extend(values.iter().map(Self::Value)),
                ValueData::Object(fields) =>
                    children.extend(fields.iter().map(Self::ObjectField)),
                ValueData::Variable(_)
                | ValueData::Int(_)
                | ValueData::Float(_)
                | ValueData::String(_)
                | ValueData::Boolean(_)
                | ValueData::Null
                | ValueData::Enum(_) => (),
            },

            Self::ObjectField(field) => children.push(Self::Value(&field.value)),

            Self::Directive(directive) => {
                children.extend(directive.arguments.iter().map(Self::Argument));
            },

            Self::NamedType(_) => (),
            Self::ListType(list) => children.push(list.type_.as_node()),
            Self::NonNullType(non_null) => children.push(non_null.type_.as_node()),

            Self::SchemaDefinition(schema_def) => {
                children.extend(schema_def.directives.iter().map(Self::Directive));
                children.extend(
                    schema_def.operation_types
                        .iter()
                        .map(Self::OperationTypeDefinition),
                );
            },

            Self::OperationTypeDefinition(op_type) => {
                children.push(Self::NamedType(&op_type.type_));
            },

            Self::ScalarTypeDefinition(scalar) => {
                children.extend(scalar.directives.iter().map(Self::Directive));
            },

            Self::ObjectTypeDefinition(obj) => {
                children.extend(obj.interfaces.iter().map(Self::NamedType));
                children.extend(obj.directives.iter().map(Self::Directive));
                children.extend(obj.fields.iter().map(Self::FieldDefinition));
            },

            Self::FieldDefinition(field) => {
                children.extend(
                    field.arguments.iter().map(Self::InputValueDefinition),
                );
                children.push(field.type_.as_node());
                children.extend(field.directives.iter().map(Self::Directive));
            },

            Self::InputValueDefinition(input_value) => {
                children.push(input_value.type_.as_node());
                if let Some(default_value) = &input_value.default_value {
                    children.push(Self::Value(default_value));
                }
                children.extend(
                    input_value.directives.iter().map(Self::Directive),
                );
            },

            Self::InterfaceTypeDefinition(iface) => {
                children.extend(iface.interfaces.iter().map(Self::NamedType));
                children.extend(iface.directives.iter().map(Self::Directive));
                children.extend(iface.fields.iter().map(Self::FieldDefinition));
            },

            Self::UnionTypeDefinition(union) => {
                children.extend(union.directives.iter().map(Self::Directive));
                children.extend(union.types.iter().map(Self::NamedType));
            },

            Self::EnumTypeDefinition(enum_def) => {
                children.extend(enum_def.directives.iter().map(Self::Directive));
                children.extend(
                    enum_def.values.iter().map(Self::EnumValueDefinition),
                );
            },

            Self::EnumValueDefinition(enum_value) => {
                children.extend(
                    enum_value.directives.iter().map(Self::Directive),
                );
            },

            Self::InputObjectTypeDefinition(input_obj) => {
                children.extend(
                    input_obj.directives.iter().map(Self::Directive),
                );
                children.extend(
                    input_obj.fields.iter().map(Self::InputValueDefinition),
                );
            },

            Self::DirectiveDefinition(directive_def) => {
                children.extend(
                    directive_def.arguments
                        .iter()
                        .map(Self::InputValueDefinition),
                );
            },
        }
        children
    }

    /// Whether `self` and `other` refer to the very same node (as opposed to
    /// two structurally equal nodes).
    pub fn is_same_node(&self, other: &NodeRef<'_>) -> bool {
        self.kind() == other.kind() && self.addr() == other.addr()
    }

    fn addr(&self) -> *const () {
        match *self {
            Self::Document(n) => n as *const _ as *const (),
            Self::OperationDefinition(n) => n as *const _ as *const (),
            Self::VariableDefinition(n) => n as *const _ as *const (),
            Self::SelectionSet(n) => n as *const _ as *const (),
            Self::Field(n) => n as *const _ as *const (),
            Self::Argument(n) => n as *const _ as *const (),
            Self::FragmentSpread(n) => n as *const _ as *const (),
            Self::InlineFragment(n) => n as *const _ as *const (),
            Self::FragmentDefinition(n) => n as *const _ as *const (),
            Self::Value(n) => n as *const _ as *const (),
            Self::ObjectField(n) => n as *const _ as *const (),
            Self::Directive(n) => n as *const _ as *const (),
            Self::NamedType(n) => n as *const _ as *const (),
            Self::ListType(n) => n as *const _ as *const (),
            Self::NonNullType(n) => n as *const _ as *const (),
            Self::SchemaDefinition(n) => n as *const _ as *const (),
            Self::OperationTypeDefinition(n) => n as *const _ as *const (),
            Self::ScalarTypeDefinition(n) => n as *const _ as *const (),
            Self::ObjectTypeDefinition(n) => n as *const _ as *const (),
            Self::FieldDefinition(n) => n as *const _ as *const (),
            Self::InputValueDefinition(n) => n as *const _ as *const (),
            Self::InterfaceTypeDefinition(n) => n as *const _ as *const (),
            Self::UnionTypeDefinition(n) => n as *const _ as *const (),
            Self::EnumTypeDefinition(n) => n as *const _ as *const (),
            Self::EnumValueDefinition(n) => n as *const _ as *const (),
            Self::InputObjectTypeDefinition(n) => n as *const _ as *const (),
            Self::DirectiveDefinition(n) => n as *const _ as *const (),
        }
    }
}
