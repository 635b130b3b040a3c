//! The read-only schema query interface used by validation rules, plus the
//! [`SchemaBuilder`] that constructs a [`Schema`] from type-system
//! documents.

#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod type_validation_error;
mod types_map_validator;

pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
