use crate::validation::tests::parse;
use crate::validation::tests::test_schema;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

#[test]
fn fragments_are_indexed_by_name() {
    let schema = test_schema();
    let doc = parse("
        { dog { ...A } }
        fragment A on Dog { name }
        fragment B on Dog { barks }
    ");
    let ctx = ValidationContext::new(&schema, &doc);

    assert_eq!(
        ctx.get_fragment("A").map(|frag| frag.type_condition.name.as_str()),
        Some("Dog"),
    );
    assert!(ctx.get_fragment("B").is_some());
    assert!(ctx.get_fragment("C").is_none());
}

#[test]
fn duplicate_fragment_names_keep_the_last_definition() {
    let schema = test_schema();
    let doc = parse("
        fragment A on Dog { name }
        fragment A on Cat { meows }
    ");
    let ctx = ValidationContext::new(&schema, &doc);

    assert_eq!(
        ctx.get_fragment("A").map(|frag| frag.type_condition.name.as_str()),
        Some("Cat"),
    );
}

#[test]
fn fragment_spreads_include_nested_selections_only() {
    let schema = test_schema();
    let doc = parse("
        {
            ...Top
            dog { ...InField owner { ...Deep } }
            ... on Query { ...InInline }
        }
        fragment Top on Query { ...NotFollowed }
    ");
    let ctx = ValidationContext::new(&schema, &doc);
    let op = doc.operations().next().expect("no operation found");

    let mut names: Vec<&str> = ctx.get_fragment_spreads(&op.selection_set)
        .iter()
        .map(|spread| spread.fragment_name.as_str())
        .collect();
    names.sort_unstable();

    assert_eq!(names, vec!["Deep", "InField", "InInline", "Top"]);
}

#[test]
fn recursively_referenced_fragments_are_listed_once() {
    let schema = test_schema();
    let doc = parse("
        { dog { ...A ...B } }
        fragment A on Dog { ...B ...C }
        fragment B on Dog { ...A name }
        fragment C on Dog { ...Missing }
        fragment Unused on Dog { name }
    ");
    let ctx = ValidationContext::new(&schema, &doc);
    let op = doc.operations().next().expect("no operation found");

    let mut names: Vec<&str> = ctx.get_recursively_referenced_fragments(op)
        .iter()
        .map(|frag| frag.name.as_str())
        .collect();
    names.sort_unstable();

    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn reports_stop_at_the_error_limit() {
    let schema = test_schema();
    let doc = parse("{ dog { name } }");
    let mut ctx = ValidationContext::new(&schema, &doc).with_max_errors(Some(2));

    ctx.report_error(ValidationError::new("first", vec![]));
    ctx.report_error(ValidationError::new("second", vec![]));
    assert!(!ctx.is_error_limit_reached());

    ctx.report_error(ValidationError::new("third", vec![]));
    assert!(ctx.is_error_limit_reached());
    assert_eq!(
        ctx.errors().iter().map(|error| error.message()).collect::<Vec<_>>(),
        vec!["first", "second"],
    );
}

#[test]
fn identical_errors_are_not_deduplicated() {
    let schema = test_schema();
    let doc = parse("{ dog { name } }");
    let mut ctx = ValidationContext::new(&schema, &doc);

    ctx.report_error(ValidationError::new("same", vec![doc.as_node()]));
    ctx.report_error(ValidationError::new("same", vec![doc.as_node()]));

    assert_eq!(ctx.errors().len(), 2);
    assert_eq!(ctx.errors()[0], ctx.errors()[1]);
}
