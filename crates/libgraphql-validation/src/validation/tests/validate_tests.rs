use crate::ast::NodeKind;
use crate::schema::Schema;
use crate::validation::rules;
use crate::validation::specified_rules;
use crate::validation::tests::error_messages;
use crate::validation::tests::parse;
use crate::validation::tests::test_schema;
use crate::validation::validate;
use crate::validation::validate_with_options;
use crate::validation::RuleVisitor;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationFault;
use crate::validation::ValidationOptions;
use crate::visitor::VisitAction;
use crate::visitor::VisitFault;
use rayon::prelude::*;

fn skip_operations<'a>(_ctx: &ValidationContext<'a>) -> RuleVisitor<'a> {
    RuleVisitor::new("SkipOperations")
        .on_enter(NodeKind::OperationDefinition, |_, _| Ok(VisitAction::Skip))
        .on_enter(NodeKind::NamedType, |ctx, node| {
            ctx.report_error(ValidationError::new("skipped rule saw a type", vec![node]));
            Ok(VisitAction::Continue)
        })
}

fn break_on_first_field<'a>(_ctx: &ValidationContext<'a>) -> RuleVisitor<'a> {
    RuleVisitor::new("BreakOnFirstField")
        .on_enter(NodeKind::Field, |_, _| Ok(VisitAction::Break))
}

fn fail_on_field<'a>(_ctx: &ValidationContext<'a>) -> RuleVisitor<'a> {
    RuleVisitor::new("FailOnField")
        .on_enter(NodeKind::Field, |_, _| Err("field callbacks are broken".into()))
}

#[test]
fn valid_document_has_no_errors() {
    let messages = error_messages(&test_schema(), &specified_rules(), "
        query ($id: ID, $filter: ComplexInput) {
            human(id: $id) { name pets { ...PetFields } }
            catOrDog { ... on Cat { meows } }
        }
        fragment PetFields on Pet { name ... on Dog { barks } }
    ");

    assert!(messages.is_empty(), "{messages:?}");
}

#[test]
fn errors_from_all_rules_are_in_traversal_order() {
    let messages = error_messages(&test_schema(), &specified_rules(), "
        query ($a: Dgo, $b: Dog) {
            human { nmae }
            dog { ...Missing }
        }
        fragment Unused on Human { name }
    ");

    assert_eq!(messages, vec![
        "Unknown type \"Dgo\". Perhaps you meant one of the following: \"Dog\".",
        "Variable \"$b\" cannot be non-input type \"Dog\".",
        "Cannot query field \"nmae\" on type \"Human\". Did you mean \"name\"?",
        "Unknown fragment \"Missing\".",
        "Fragment \"Unused\" is never used.",
    ]);
}

#[test]
fn empty_rule_list_reports_nothing() {
    assert!(error_messages(&test_schema(), &[], "{ nope }").is_empty());
}

#[test]
fn skipping_in_one_rule_does_not_hide_nodes_from_others() {
    let messages = error_messages(
        &test_schema(),
        &[skip_operations, rules::known_type_names],
        "query ($a: Nope) { dog { name } }",
    );

    assert_eq!(messages, vec!["Unknown type \"Nope\"."]);
}

#[test]
fn break_stops_the_whole_traversal() {
    let messages = error_messages(
        &test_schema(),
        &[rules::known_type_names, break_on_first_field],
        "
            query ($a: Unknown1) { dog { name } }
            fragment F on Unknown2 { name }
        ",
    );

    assert_eq!(messages, vec!["Unknown type \"Unknown1\"."]);
}

#[test]
fn callback_failures_are_faults_not_findings() {
    let schema = test_schema();
    let doc = parse("{ dog { name } }");

    let result = validate(&schema, &doc, &[rules::known_type_names, fail_on_field]);

    match result {
        Err(ValidationFault::Traversal(VisitFault::CallbackFailed {
            visitor_name,
            node_kind,
            source,
        })) => {
            assert_eq!(visitor_name, "FailOnField");
            assert_eq!(node_kind, NodeKind::Field);
            assert_eq!(source.to_string(), "field callbacks are broken");
        },
        other => panic!("expected a callback fault, got {other:?}"),
    }
}

#[test]
fn error_limit_truncates_and_appends_notice() {
    let schema = test_schema();
    let doc = parse("query ($a: A1, $b: B2, $c: C3) { dog { name } }");
    let options = ValidationOptions { max_errors: Some(2) };

    let errors = validate_with_options(
        &schema,
        &doc,
        &[rules::known_type_names],
        &options,
    ).expect("validation fault");

    let messages: Vec<&str> = errors.iter().map(|error| error.message()).collect();
    assert_eq!(messages, vec![
        "Unknown type \"A1\".",
        "Unknown type \"B2\".",
        "Too many validation errors, error limit reached. Validation aborted.",
    ]);
    assert!(errors[2].nodes().is_empty());
}

#[test]
fn error_limit_not_reached_adds_no_notice() {
    let schema = test_schema();
    let doc = parse("query ($a: A1, $b: B2) { dog { name } }");
    let options = ValidationOptions { max_errors: Some(2) };

    let errors = validate_with_options(
        &schema,
        &doc,
        &[rules::known_type_names],
        &options,
    ).expect("validation fault");

    assert_eq!(errors.len(), 2);
}

#[test]
fn rule_state_does_not_leak_between_runs() {
    let schema = test_schema();
    let doc = parse("{ dog { name } } fragment Unused on Dog { name }");

    for _ in 0..2 {
        let errors = validate(&schema, &doc, &[rules::no_unused_fragments])
            .expect("validation fault");
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn schema_is_shared_across_concurrent_validations() {
    let schema: Schema = test_schema();
    let sources: Vec<String> = (0..32)
        .map(|i| format!("query Q{i}($v: Type{i}) {{ dog {{ name }} }}"))
        .collect();

    let messages: Vec<Vec<String>> = sources
        .par_iter()
        .map(|src| error_messages(&schema, &specified_rules(), src))
        .collect();

    for (i, messages) in messages.iter().enumerate() {
        assert_eq!(messages, &vec![format!("Unknown type \"Type{i}\".")]);
    }
}
