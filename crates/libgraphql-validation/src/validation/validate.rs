use crate::ast;
use crate::ast::NodeRef;
use crate::schema::Schema;
use crate::validation::rules;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::visitor;
use crate::visitor::ParallelVisitor;
use crate::visitor::Visit;
use crate::visitor::VisitAction;
use crate::visitor::VisitFault;
use crate::visitor::Visitor;
use thiserror::Error;

type Result<T> = std::result::Result<T, ValidationFault>;

/// The visitor a validation rule contributes to a run.
pub type RuleVisitor<'a> = Visitor<'a, ValidationContext<'a>>;

/// Builds one rule's visitor for a validation run.
///
/// A fresh visitor is constructed for every run, so any state a rule keeps
/// between callbacks never leaks from one document to the next.
pub type RuleConstructor = for<'a> fn(&ValidationContext<'a>) -> RuleVisitor<'a>;

#[derive(Clone, Debug, Default)]
pub struct ValidationOptions {
    /// Stop validating once this many errors have been reported.
    pub max_errors: Option<usize>,
}

/// Validation could not be completed. This is distinct from the document
/// being invalid, which is reported as [`ValidationError`]s.
#[derive(Debug, Error)]
pub enum ValidationFault {
    #[error("validation aborted: {0}")]
    Traversal(#[from] VisitFault),
}

const ERROR_LIMIT_MESSAGE: &str =
    "Too many validation errors, error limit reached. Validation aborted.";

/// The built-in rules, in the order they run.
pub fn specified_rules() -> Vec<RuleConstructor> {
    vec![
        rules::known_type_names,
        rules::fragments_on_composite_types,
        rules::variables_are_input_types,
        rules::scalar_leafs,
        rules::fields_on_correct_type,
        rules::known_fragment_names,
        rules::no_unused_fragments,
    ]
}

/// Validate `document` against `schema` using `rules`, returning every
/// error the rules report in the order they were reported.
///
/// An empty list means the document is valid.
pub fn validate<'a>(
    schema: &'a Schema,
    document: &'a ast::Document,
    rules: &[RuleConstructor],
) -> Result<Vec<ValidationError<'a>>> {
    validate_with_options(schema, document, rules, &ValidationOptions::default())
}

pub fn validate_with_options<'a>(
    schema: &'a Schema,
    document: &'a ast::Document,
    rules: &[RuleConstructor],
    options: &ValidationOptions,
) -> Result<Vec<ValidationError<'a>>> {
    log::debug!(
        "Validating a document with {} definitions against {} rules",
        document.definitions.len(),
        rules.len(),
    );

    let mut ctx = ValidationContext::new(schema, document)
        .with_max_errors(options.max_errors);
    let rule_visitors: Vec<_> = rules.iter().map(|rule| rule(&ctx)).collect();
    for rule_visitor in &rule_visitors {
        log::trace!("Registered rule `{}`", rule_visitor.name());
    }

    let mut visitor = TypeInfoVisitor::new(ParallelVisitor::new(rule_visitors));
    if visitor::walk(document.as_node(), &mut visitor, &mut ctx)?.is_break() {
        log::debug!("Validation traversal was stopped early");
    }

    let limit_reached = ctx.is_error_limit_reached();
    let mut errors = ctx.into_errors();
    if limit_reached {
        log::debug!("Validation stopped after reaching the error limit");
        errors.push(ValidationError::new(ERROR_LIMIT_MESSAGE, vec![]));
    }
    log::debug!("Validation finished with {} errors", errors.len());
    Ok(errors)
}

/// Keeps the context's type information in step with the traversal around
/// an inner visitor: types are entered before the inner visitor's enter
/// callbacks and left after its leave callbacks.
struct TypeInfoVisitor<V> {
    inner: V,
}
impl<V> TypeInfoVisitor<V> {
    fn new(inner: V) -> Self {
        Self { inner }
    }
}
impl<'a, V> Visit<'a, ValidationContext<'a>> for TypeInfoVisitor<V>
where
    V: Visit<'a, ValidationContext<'a>>,
{
    fn enter(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: NodeRef<'a>,
    ) -> std::result::Result<VisitAction, VisitFault> {
        ctx.enter_node(node);
        let action = self.inner.enter(ctx, node)?;
        if action == VisitAction::Skip {
            // The walker will not call leave for a skipped node.
            ctx.leave_node(node);
        }
        if ctx.is_error_limit_reached() {
            return Ok(VisitAction::Break);
        }
        Ok(action)
    }

    fn leave(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        node: NodeRef<'a>,
    ) -> std::result::Result<VisitAction, VisitFault> {
        let action = self.inner.leave(ctx, node)?;
        ctx.leave_node(node);
        if ctx.is_error_limit_reached() {
            return Ok(VisitAction::Break);
        }
        Ok(action)
    }
}
