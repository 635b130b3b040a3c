//! Single-pass validation of GraphQL documents.
//!
//! A [`Document`](ast::Document) is walked exactly once by a combined
//! [`ParallelVisitor`](visitor::ParallelVisitor) built from any number of
//! independently authored rules. Each rule is handed a
//! [`ValidationContext`](validation::ValidationContext) through which it can
//! query the [`Schema`](schema::Schema), inspect type information for the
//! current traversal position, and report
//! [`ValidationError`](validation::ValidationError)s.
//!
//! ```
//! use libgraphql_validation::ast::Document;
//! use libgraphql_validation::schema::SchemaBuilder;
//! use libgraphql_validation::validation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::new()
//!     .load_from_str("type Query { me: User } type User { name: String }")?
//!     .build()?;
//! let document = Document::parse_executable(
//!     "query ($u: Usr) { me { name } }",
//! )?;
//!
//! let errors = validation::validate(
//!     &schema,
//!     &document,
//!     &validation::specified_rules(),
//! )?;
//! assert_eq!(errors.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod loc;
pub mod schema;
pub mod suggestion;
pub mod types;
pub mod validation;
pub mod visitor;

pub use ast::Document;
pub use schema::Schema;
pub use validation::validate;
pub use validation::ValidationError;
