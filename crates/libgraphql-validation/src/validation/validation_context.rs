use crate::ast;
use crate::ast::NodeRef;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::validation::TypeInfo;
use crate::validation::ValidationError;
use std::collections::HashMap;
use std::collections::HashSet;

/// Everything a validation rule can see while a document is traversed.
///
/// One context is created per validation run. It is mutated only by the
/// traversal itself (to track type information) and by rules reporting
/// errors; the schema and document it refers to are never modified.
#[derive(Debug)]
pub struct ValidationContext<'a> {
    document: &'a ast::Document,
    error_limit_reached: bool,
    errors: Vec<ValidationError<'a>>,
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
    max_errors: Option<usize>,
    schema: &'a Schema,
    type_info: TypeInfo<'a>,
}
impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        let fragments: HashMap<&'a str, &'a ast::FragmentDefinition> =
            document.fragments()
                .map(|frag| (frag.name.as_str(), frag))
                .collect();
        log::trace!("Indexed {} fragment definitions", fragments.len());

        Self {
            document,
            error_limit_reached: false,
            errors: vec![],
            fragments,
            max_errors: None,
            schema,
            type_info: TypeInfo::new(schema),
        }
    }

    /// Stop accepting errors once `max_errors` have been reported.
    pub fn with_max_errors(mut self, max_errors: Option<usize>) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn get_schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn get_document(&self) -> &'a ast::Document {
        self.document
    }

    pub fn get_type(&self) -> Option<&TypeAnnotation> {
        self.type_info.get_type()
    }

    pub fn get_parent_type(&self) -> Option<&'a GraphQLType> {
        self.type_info.get_parent_type()
    }

    pub fn get_input_type(&self) -> Option<&TypeAnnotation> {
        self.type_info.get_input_type()
    }

    pub fn get_parent_input_type(&self) -> Option<&TypeAnnotation> {
        self.type_info.get_parent_input_type()
    }

    pub fn get_field_def(&self) -> Option<&'a Field> {
        self.type_info.get_field_def()
    }

    pub fn get_directive(&self) -> Option<&'a Directive> {
        self.type_info.get_directive()
    }

    pub fn get_argument(&self) -> Option<&'a Parameter> {
        self.type_info.get_argument()
    }

    /// Look up a fragment definition of this document by name.
    pub fn get_fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    /// Every fragment spread within `selection_set`, including those nested
    /// in fields and inline fragments. Spreads are not followed into the
    /// fragments they name.
    pub fn get_fragment_spreads(
        &self,
        selection_set: &'a ast::SelectionSet,
    ) -> Vec<&'a ast::FragmentSpread> {
        let mut spreads = vec![];
        let mut sets_to_visit = vec![selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for selection in &set.selections {
                match selection {
                    ast::Selection::FragmentSpread(spread) => spreads.push(spread),
                    ast::Selection::Field(field) => {
                        if let Some(sub_set) = &field.selection_set {
                            sets_to_visit.push(sub_set);
                        }
                    },
                    ast::Selection::InlineFragment(frag) =>
                        sets_to_visit.push(&frag.selection_set),
                }
            }
        }
        spreads
    }

    /// The fragment definitions reachable from `operation` through fragment
    /// spreads, transitively, each listed once. Spreads of undefined
    /// fragments are ignored.
    pub fn get_recursively_referenced_fragments(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<&'a ast::FragmentDefinition> {
        let mut fragments = vec![];
        let mut collected_names: HashSet<&'a str> = HashSet::new();
        let mut nodes_to_visit = vec![&operation.selection_set];
        while let Some(selection_set) = nodes_to_visit.pop() {
            for spread in self.get_fragment_spreads(selection_set) {
                let frag_name = spread.fragment_name.as_str();
                if !collected_names.insert(frag_name) {
                    continue;
                }
                if let Some(fragment) = self.get_fragment(frag_name) {
                    fragments.push(fragment);
                    nodes_to_visit.push(&fragment.selection_set);
                }
            }
        }
        fragments
    }

    /// Record a validation error. Errors are kept in report order and are
    /// never de-duplicated.
    pub fn report_error(&mut self, error: ValidationError<'a>) {
        if self.max_errors.is_some_and(|max_errors| self.errors.len() >= max_errors) {
            self.error_limit_reached = true;
            return;
        }
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ValidationError<'a>] {
        &self.errors
    }

    pub fn is_error_limit_reached(&self) -> bool {
        self.error_limit_reached
    }

    pub(crate) fn enter_node(&mut self, node: NodeRef<'a>) {
        self.type_info.enter(node);
    }

    pub(crate) fn leave_node(&mut self, node: NodeRef<'a>) {
        self.type_info.leave(node);
    }

    pub(crate) fn into_errors(self) -> Vec<ValidationError<'a>> {
        self.errors
    }
}
