use crate::loc;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Cross-checks every type (and directive) in a fully loaded types map
/// against the others. All problems are collected rather than stopping at
/// the first.
pub(super) struct TypesMapValidator<'a> {
    directives: &'a IndexMap<String, Directive>,
    errors: Vec<TypeValidationError>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> TypesMapValidator<'a> {
    pub fn new(
        types_map: &'a IndexMap<String, GraphQLType>,
        directives: &'a IndexMap<String, Directive>,
    ) -> Self {
        Self {
            directives,
            errors: vec![],
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let types_map = self.types_map;
        for type_ in types_map.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(type_) =>
                    self.validate_input_object(type_),

                GraphQLType::Interface(type_) =>
                    self.validate_object_or_interface(&type_.0, false),

                GraphQLType::Object(type_) =>
                    self.validate_object_or_interface(&type_.0, true),

                GraphQLType::Union(type_) =>
                    self.validate_union(type_),
            }
        }

        let directives = self.directives;
        for directive in directives.values() {
            for param in directive.parameters().values() {
                self.validate_parameter(
                    &format!("@{}", directive.name()),
                    param,
                );
            }
        }

        self.errors
    }

    fn validate_input_object(&mut self, type_: &InputObjectType) {
        for field in type_.fields().values() {
            let Some(field_type) = self.resolve(
                field.type_annotation(),
                field.def_location(),
            ) else {
                continue;
            };

            if !field_type.is_input_type() {
                self.errors.push(
                    TypeValidationError::InvalidInputFieldWithOutputType {
                        def_location: field.def_location().to_owned(),
                        field_name: field.name().to_string(),
                        invalid_type_name: field_type.name().to_string(),
                        parent_type_name: type_.name().to_string(),
                    }
                );
            }
        }
    }

    fn validate_object_or_interface(
        &mut self,
        type_: &ObjectOrInterfaceTypeData,
        is_object: bool,
    ) {
        let type_name = type_.name();
        for field in type_.fields().values() {
            for param in field.parameters().values() {
                self.validate_parameter(
                    &format!("{type_name}.{}", field.name()),
                    param,
                );
            }

            let Some(field_type) = self.resolve(
                field.type_annotation(),
                field.def_location(),
            ) else {
                continue;
            };

            if !field_type.is_output_type() {
                self.errors.push(
                    TypeValidationError::InvalidOutputFieldWithInputType {
                        def_location: field.def_location().to_owned(),
                        field_name: field.name().to_string(),
                        input_type_name: field_type.name().to_string(),
                        parent_type_name: type_name.to_string(),
                    }
                );
            }
        }

        for iface_name in type_.interface_names() {
            let Some(iface_type) = self.types_map.get(iface_name) else {
                self.errors.push(
                    TypeValidationError::ImplementsUndefinedInterface {
                        type_name: type_name.to_string(),
                        undefined_interface_name: iface_name.to_string(),
                        loc: type_.def_location().to_owned(),
                    }
                );
                continue;
            };

            let Some(iface) = iface_type.as_interface() else {
                self.errors.push(
                    TypeValidationError::ImplementsNonInterfaceType {
                        type_name: type_name.to_string(),
                        non_interface_type_name: iface_name.to_string(),
                        loc: type_.def_location().to_owned(),
                    }
                );
                continue;
            };

            // Interfaces are checked against their own parents when they are
            // themselves visited, so only object types need the field check.
            if !is_object {
                continue;
            }
            for iface_field_name in iface.fields().keys() {
                if !type_.fields().contains_key(iface_field_name) {
                    self.errors.push(
                        TypeValidationError::MissingInterfaceField {
                            def_location: type_.def_location().to_owned(),
                            field_name: iface_field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }
        }
    }

    fn validate_parameter(&mut self, owner_name: &str, param: &Parameter) {
        let Some(param_type) = self.resolve(
            param.type_annotation(),
            param.def_location(),
        ) else {
            return;
        };

        if !param_type.is_input_type() {
            self.errors.push(
                TypeValidationError::InvalidParameterWithOutputType {
                    def_location: param.def_location().to_owned(),
                    invalid_type_name: param_type.name().to_string(),
                    owner_name: owner_name.to_string(),
                    parameter_name: param.name().to_string(),
                }
            );
        }
    }

    fn validate_union(&mut self, type_: &UnionType) {
        for member_type_name in type_.member_type_names() {
            // Member types of a union type can only be object types.
            // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
            let Some(member_type) = self.types_map.get(member_type_name) else {
                self.errors.push(
                    TypeValidationError::UndefinedTypeName {
                        ref_location: type_.def_location().to_owned(),
                        undefined_type_name: member_type_name.to_string(),
                    }
                );
                continue;
            };

            if !matches!(member_type, GraphQLType::Object(_)) {
                self.errors.push(
                    TypeValidationError::InvalidUnionMemberTypeKind {
                        def_location: type_.def_location().to_owned(),
                        invalid_member_type_kind: member_type.kind(),
                        invalid_member_type_name: member_type_name.to_string(),
                        union_type_name: type_.name().to_string(),
                    }
                );
            }
        }
    }

    /// Resolve the innermost type of `annot`, recording an
    /// `UndefinedTypeName` error when it is not defined.
    fn resolve(
        &mut self,
        annot: &TypeAnnotation,
        ref_location: &loc::SchemaDefLocation,
    ) -> Option<&'a GraphQLType> {
        let type_name = annot.innermost_type_name();
        let resolved = self.types_map.get(type_name);
        if resolved.is_none() {
            self.errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: ref_location.to_owned(),
                undefined_type_name: type_name.to_string(),
            });
        }
        resolved
    }
}
