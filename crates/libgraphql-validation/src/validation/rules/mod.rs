//! The built-in validation rules.
//!
//! Each rule is a [`RuleConstructor`](crate::validation::RuleConstructor):
//! a function that builds a fresh, named
//! [`Visitor`](crate::visitor::Visitor) for one validation run.

mod fields_on_correct_type;
mod fragments_on_composite_types;
mod known_fragment_names;
mod known_type_names;
mod no_unused_fragments;
mod scalar_leafs;
mod variables_are_input_types;

pub use fields_on_correct_type::fields_on_correct_type;
pub use fields_on_correct_type::undefined_field_message;
pub use fragments_on_composite_types::fragment_on_non_composite_message;
pub use fragments_on_composite_types::fragments_on_composite_types;
pub use fragments_on_composite_types::inline_fragment_on_non_composite_message;
pub use known_fragment_names::known_fragment_names;
pub use known_fragment_names::unknown_fragment_message;
pub use known_type_names::known_type_names;
pub use known_type_names::unknown_type_message;
pub use no_unused_fragments::no_unused_fragments;
pub use no_unused_fragments::unused_fragment_message;
pub use scalar_leafs::no_subselection_allowed_message;
pub use scalar_leafs::required_subselection_message;
pub use scalar_leafs::scalar_leafs;
pub use variables_are_input_types::non_input_type_on_var_message;
pub use variables_are_input_types::variables_are_input_types;
