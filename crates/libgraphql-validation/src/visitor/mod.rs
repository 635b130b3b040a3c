//! Depth-first traversal of a [`Document`](crate::ast::Document) with
//! kind-keyed callbacks.
//!
//! A [`Visitor`] is a small dispatch table mapping [`NodeKind`]s to enter
//! and leave callbacks. Independently authored visitors are combined with
//! [`ParallelVisitor`] so that a single [`walk`] over a document drives all
//! of them. Callbacks steer the traversal by returning a [`VisitAction`].
//!
//! [`NodeKind`]: crate::ast::NodeKind

mod parallel_visitor;
mod visit_action;
mod visit_fault;
#[allow(clippy::module_inception)]
mod visitor;
mod walk;

pub use parallel_visitor::ParallelVisitor;
pub use visit_action::CallbackError;
pub use visit_action::CallbackResult;
pub use visit_action::VisitAction;
pub use visit_fault::VisitFault;
pub use visitor::Visit;
pub use visitor::VisitFn;
pub use visitor::Visitor;
pub use walk::walk;

#[cfg(test)]
mod tests;
