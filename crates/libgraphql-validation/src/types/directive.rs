use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a directive definition, either one of the
/// [built-in directives](https://spec.graphql.org/October2021/#sec-Type-System.Directives.Built-in-Directives)
/// or one defined in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl Directive {
    /// `@skip`, `@include`, `@deprecated` and `@specifiedBy`.
    pub(crate) fn builtins() -> Vec<Directive> {
        let conditional = |name: &str| Directive {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            description: None,
            locations: vec![
                "FIELD".to_string(),
                "FRAGMENT_SPREAD".to_string(),
                "INLINE_FRAGMENT".to_string(),
            ],
            name: name.to_string(),
            parameters: IndexMap::from([(
                "if".to_string(),
                Parameter::builtin("if", TypeAnnotation::named("Boolean", false)),
            )]),
            repeatable: false,
        };

        vec![
            conditional("skip"),
            conditional("include"),
            Directive {
                def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
                description: None,
                locations: vec![
                    "FIELD_DEFINITION".to_string(),
                    "ARGUMENT_DEFINITION".to_string(),
                    "INPUT_FIELD_DEFINITION".to_string(),
                    "ENUM_VALUE".to_string(),
                ],
                name: "deprecated".to_string(),
                parameters: IndexMap::from([(
                    "reason".to_string(),
                    Parameter::builtin(
                        "reason",
                        TypeAnnotation::named("String", true),
                    ),
                )]),
                repeatable: false,
            },
            Directive {
                def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
                description: None,
                locations: vec!["SCALAR".to_string()],
                name: "specifiedBy".to_string(),
                parameters: IndexMap::from([(
                    "url".to_string(),
                    Parameter::builtin("url", TypeAnnotation::named("String", false)),
                )]),
                repeatable: false,
            },
        ]
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SchemaDefLocation::GraphQLBuiltIn)
    }

    /// The locations (e.g. `FIELD`, `OBJECT`) this directive may be applied
    /// to.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn repeatable(&self) -> bool {
        self.repeatable
    }
}
