use crate::ast::DocumentParseError;
use crate::ast::OperationKind;
use crate::loc;
use crate::schema::TypeValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple directive definitions for `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        def1: loc::SourcePosition,
        def2: loc::SourcePosition,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourcePosition,
        field_def2: loc::SourcePosition,
    },

    #[error("Multiple root `{operation:?}` operation types defined")]
    DuplicateOperationTypeDefinition {
        operation: OperationKind,
        location: loc::SourcePosition,
    },

    #[error("Multiple `schema` definitions found")]
    DuplicateSchemaDefinition {
        def1: loc::SourcePosition,
        def2: loc::SourcePosition,
    },

    #[error("Multiple definitions of the `{type_name}` type")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SourcePosition,
    },

    #[error("The `{union_name}` union lists `{member_name}` more than once")]
    DuplicateUnionMember {
        union_name: String,
        member_name: String,
        location: loc::SourcePosition,
    },

    #[error("Executable definitions are not allowed in a schema document")]
    ExecutableDefinitionInSchema {
        location: loc::SourcePosition,
    },

    #[error("Error reading schema file {file_path:?}: {source}")]
    FileReadError {
        file_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Names starting with `__` are reserved for introspection: `{type_name}`"
    )]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourcePosition,
        type_name: String,
    },

    #[error("No query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(transparent)]
    ParseError(#[from] DocumentParseError),

    #[error(
        "The root {operation:?} operation type `{type_name}` must be a defined \
        object type"
    )]
    RootOperationTypeNotObject {
        operation: OperationKind,
        type_name: String,
    },

    #[error("Found {} type validation errors: {errors:#?}", errors.len())]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
