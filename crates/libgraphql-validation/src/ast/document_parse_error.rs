use crate::loc::SourcePosition;
use thiserror::Error;

/// Failure to produce a [`Document`](crate::ast::Document) from source text.
#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("Failed to parse executable document: {0}")]
    ExecutableSyntax(#[from] graphql_parser::query::ParseError),

    #[error(
        "Integer literal at {position} does not fit in a signed 64-bit \
        integer"
    )]
    IntValueOutOfRange {
        position: SourcePosition,
    },

    #[error("Failed to parse schema document: {0}")]
    SchemaSyntax(#[from] graphql_parser::schema::ParseError),

    #[error("Unsupported definition at {position}: {definition_kind}")]
    UnsupportedDefinition {
        definition_kind: &'static str,
        position: SourcePosition,
    },
}
