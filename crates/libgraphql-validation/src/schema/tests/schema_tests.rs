use crate::ast::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn build_schema() -> Result<Schema> {
    Schema::builder()
        .load_from_str(concat!(
            "type Query { node(id: ID!): Node, search: [SearchResult!]! }\n",
            "interface Node { id: ID! }\n",
            "interface Named { name: String }\n",
            "type User implements Node & Named { id: ID!, name: String }\n",
            "type Post implements Node { id: ID!, title: String }\n",
            "type Orphan { x: Int }\n",
            "union SearchResult = User | Post\n",
            "scalar DateTime\n",
        ))?
        .build()
}

fn names_of(types: Vec<&crate::types::ObjectType>) -> Vec<&str> {
    types.into_iter().map(|t| t.name()).collect()
}

#[test]
fn get_type_and_type_map() -> Result<()> {
    let schema = build_schema()?;

    assert!(matches!(schema.get_type("DateTime"), Some(GraphQLType::Scalar(_))));
    assert!(schema.get_type("Nope").is_none());

    // Built-ins are registered first, then definitions in source order.
    let names: Vec<&str> =
        schema.get_type_map().keys().map(|k| k.as_str()).collect();
    assert_eq!(&names[..6], &["Boolean", "Float", "ID", "Int", "String", "Query"]);

    Ok(())
}

#[test]
fn get_fields_of() -> Result<()> {
    let schema = build_schema()?;

    let user = schema.get_type("User").expect("User is defined");
    let field_names: Vec<&str> =
        schema.get_fields_of(user).keys().map(|k| k.as_str()).collect();
    assert_eq!(field_names, vec!["id", "name"]);

    let node = schema.get_type("Node").expect("Node is defined");
    assert_eq!(schema.get_fields_of(node).len(), 1);

    // Unions and scalars have no fields of their own.
    let search = schema.get_type("SearchResult").expect("defined");
    assert!(schema.get_fields_of(search).is_empty());
    assert!(schema.get_fields_of(&GraphQLType::Int).is_empty());

    Ok(())
}

#[test]
fn get_possible_types() -> Result<()> {
    let schema = build_schema()?;
    let get = |name: &str| schema.get_type(name).expect("type is defined");

    assert_eq!(names_of(schema.get_possible_types(get("Node"))), vec!["User", "Post"]);
    assert_eq!(names_of(schema.get_possible_types(get("Named"))), vec!["User"]);
    assert_eq!(
        names_of(schema.get_possible_types(get("SearchResult"))),
        vec!["User", "Post"],
    );
    assert_eq!(names_of(schema.get_possible_types(get("Orphan"))), vec!["Orphan"]);
    assert!(schema.get_possible_types(get("DateTime")).is_empty());

    Ok(())
}

/// Field names of every possible type of `type_name`, borrowed from `schema`
/// alone so they outlive the lookup of `type_name`.
fn possible_type_fields<'s>(
    schema: &'s Schema,
    type_name: &str,
) -> Vec<(&'s str, Vec<&'s str>)> {
    let Some(type_) = schema.get_type(type_name) else {
        return vec![];
    };
    schema.get_possible_types(type_)
        .into_iter()
        .filter_map(|obj_type| schema.get_type(obj_type.name()))
        .map(|possible_type| (
            possible_type.name(),
            schema.get_fields_of(possible_type)
                .keys()
                .map(|k| k.as_str())
                .collect(),
        ))
        .collect()
}

#[test]
fn possible_types_and_fields_borrow_from_schema() -> Result<()> {
    let schema = build_schema()?;

    let type_name = String::from("SearchResult");
    let fields = possible_type_fields(&schema, &type_name);
    drop(type_name);
    assert_eq!(fields, vec![
        ("User", vec!["id", "name"]),
        ("Post", vec!["id", "title"]),
    ]);

    assert_eq!(possible_type_fields(&schema, "Orphan"), vec![("Orphan", vec!["x"])]);
    assert!(possible_type_fields(&schema, "DateTime").is_empty());

    Ok(())
}

#[test]
fn is_possible_type() -> Result<()> {
    let schema = build_schema()?;
    let get = |name: &str| schema.get_type(name).expect("type is defined");
    let post = get("Post").as_object().expect("Post is an object");

    assert!(schema.is_possible_type(get("Node"), post));
    assert!(!schema.is_possible_type(get("Named"), post));
    assert!(schema.is_possible_type(get("SearchResult"), post));
    assert!(schema.is_possible_type(get("Post"), post));
    assert!(!schema.is_possible_type(get("Orphan"), post));

    Ok(())
}

#[test]
fn directives_and_root_types() -> Result<()> {
    let schema = build_schema()?;

    let names: Vec<&str> = schema.directives().keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["skip", "include", "deprecated", "specifiedBy"]);
    assert!(schema.get_directive("include").is_some());
    assert!(schema.get_directive("live").is_none());

    assert_eq!(
        schema.root_operation_type(OperationKind::Query).map(|t| t.name()),
        Some("Query"),
    );
    assert!(schema.root_operation_type(OperationKind::Mutation).is_none());
    assert!(schema.root_operation_type(OperationKind::Subscription).is_none());

    Ok(())
}

#[test]
fn typename_meta_field() {
    let field = Field::typename_meta_field();

    assert_eq!(field.name(), "__typename");
    assert_eq!(field.type_annotation().to_string(), "String!");
}

#[test]
fn schema_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
}
