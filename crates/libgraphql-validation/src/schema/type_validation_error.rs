use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// A problem with how one type in a schema relates to the others, detected
/// once all type definitions have been loaded.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "`{type_name}` declares that it implements `{non_interface_type_name}`, \
        but `{non_interface_type_name}` is not an interface type"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        loc: loc::SchemaDefLocation,
    },

    #[error(
        "`{type_name}` declares that it implements `{undefined_interface_name}`, \
        which is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        loc: loc::SchemaDefLocation,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter of `{owner_name}` was declared with the \
        non-input type `{invalid_type_name}`."
    )]
    InvalidParameterWithOutputType {
        def_location: loc::SchemaDefLocation,
        invalid_type_name: String,
        owner_name: String,
        parameter_name: String,
    },

    #[error(
        "Union members must be object types, but `{union_type_name}` lists \
        `{invalid_member_type_name}` which is a {invalid_member_type_kind:?} type"
    )]
    InvalidUnionMemberTypeKind {
        def_location: loc::SchemaDefLocation,
        invalid_member_type_kind: GraphQLTypeKind,
        invalid_member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "`{type_name}` implements `{interface_name}` but does not define its \
        `{field_name}` field"
    )]
    MissingInterfaceField {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error("Reference to a type that is not defined: `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SchemaDefLocation,
        undefined_type_name: String,
    },
}
