//! Document validation: a [`ValidationContext`] threaded through a single
//! traversal that drives every registered rule.
//!
//! Rules are plain constructor functions ([`RuleConstructor`]) that build a
//! [`Visitor`](crate::visitor::Visitor) over the context. Findings are
//! reported as [`ValidationError`]s; a [`ValidationFault`] is only returned
//! when validation itself could not complete.

pub mod rules;
mod type_info;
mod validate;
mod validation_context;
mod validation_error;

pub use type_info::TypeInfo;
pub use validate::specified_rules;
pub use validate::validate;
pub use validate::validate_with_options;
pub use validate::RuleConstructor;
pub use validate::RuleVisitor;
pub use validate::ValidationFault;
pub use validate::ValidationOptions;
pub use validation_context::ValidationContext;
pub use validation_error::ValidationError;

#[cfg(test)]
mod tests;
