mod validate_tests;
mod validation_context_tests;

use crate::ast;
use crate::schema::Schema;
use crate::validation::validate;
use crate::validation::RuleConstructor;

pub(super) const TEST_SCHEMA: &str = "
    type Query {
        catOrDog: CatOrDog
        dog: Dog
        human(id: ID): Human
        pet: Pet
    }

    interface Pet {
        name: String
    }

    type Dog implements Pet {
        barkVolume: Int
        barks: Boolean
        name: String
        nickname: String
        owner: Human
    }

    type Cat implements Pet {
        meows: Boolean
        name: String
    }

    union CatOrDog = Cat | Dog

    type Human {
        name: String
        pets: [Pet]
    }

    enum FurColor { BLACK BROWN }

    input ComplexInput {
        name: String
    }
";

pub(super) fn test_schema() -> Schema {
    Schema::builder()
        .load_from_str(TEST_SCHEMA)
        .and_then(|builder| builder.build())
        .expect("test schema is valid")
}

pub(super) fn parse(src: &str) -> ast::Document {
    ast::Document::parse_executable(src).expect("parse error")
}

/// Run `rules` over `src` and return the reported error messages.
pub(super) fn error_messages(
    schema: &Schema,
    rules: &[RuleConstructor],
    src: &str,
) -> Vec<String> {
    let doc = parse(src);
    validate(schema, &doc, rules)
        .expect("validation fault")
        .iter()
        .map(|error| error.message().to_string())
        .collect()
}
