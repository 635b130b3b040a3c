use crate::ast::NodeRef;
use crate::ast::ValueData;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

/// Tracks the schema types in scope at the current point of a traversal.
///
/// [`enter`](Self::enter) must be called for every node on the way down and
/// [`leave`](Self::leave) for every node on the way up, in matching pairs.
/// Any type that cannot be resolved against the schema is tracked as `None`
/// so that lookups beneath it also yield `None` rather than failing.
#[derive(Debug)]
pub struct TypeInfo<'a> {
    argument: Option<&'a Parameter>,
    directive: Option<&'a Directive>,
    field_def_stack: Vec<Option<&'a Field>>,
    input_type_stack: Vec<Option<TypeAnnotation>>,
    parent_type_stack: Vec<Option<&'a GraphQLType>>,
    schema: &'a Schema,
    type_stack: Vec<Option<TypeAnnotation>>,
}
impl<'a> TypeInfo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            argument: None,
            directive: None,
            field_def_stack: vec![],
            input_type_stack: vec![],
            parent_type_stack: vec![],
            schema,
            type_stack: vec![],
        }
    }

    /// The output type of the current node (the enclosing operation root,
    /// fragment type condition or field type).
    pub fn get_type(&self) -> Option<&TypeAnnotation> {
        self.type_stack.last().and_then(Option::as_ref)
    }

    /// The composite type whose selection set is currently being visited.
    pub fn get_parent_type(&self) -> Option<&'a GraphQLType> {
        self.parent_type_stack.last().copied().flatten()
    }

    /// The expected type of the current argument, variable or input value.
    pub fn get_input_type(&self) -> Option<&TypeAnnotation> {
        self.input_type_stack.last().and_then(Option::as_ref)
    }

    pub fn get_parent_input_type(&self) -> Option<&TypeAnnotation> {
        self.input_type_stack
            .len()
            .checked_sub(2)
            .and_then(|idx| self.input_type_stack[idx].as_ref())
    }

    pub fn get_field_def(&self) -> Option<&'a Field> {
        self.field_def_stack.last().copied().flatten()
    }

    pub fn get_directive(&self) -> Option<&'a Directive> {
        self.directive
    }

    pub fn get_argument(&self) -> Option<&'a Parameter> {
        self.argument
    }

    pub fn enter(&mut self, node: NodeRef<'a>) {
        match node {
            NodeRef::SelectionSet(_) => {
                let parent_type = self.get_type()
                    .and_then(|annot| self.named_type(annot))
                    .filter(|type_| type_.is_composite());
                self.parent_type_stack.push(parent_type);
            },

            NodeRef::Field(field) => {
                let field_def = self.get_parent_type().and_then(|parent_type| {
                    self.lookup_field_def(parent_type, &field.name)
                });
                let field_type = field_def
                    .map(|field_def| field_def.type_annotation())
                    .filter(|annot| self.is_output_annotation(annot))
                    .cloned();
                self.field_def_stack.push(field_def);
                self.type_stack.push(field_type);
            },

            NodeRef::Directive(directive) => {
                self.directive = self.schema.get_directive(&directive.name);
            },

            NodeRef::OperationDefinition(op) => {
                let root_type = self.schema
                    .root_operation_type(op.operation)
                    .map(|obj_type| TypeAnnotation::named(obj_type.name(), true));
                self.type_stack.push(root_type);
            },

            NodeRef::InlineFragment(frag) => {
                let annot = match &frag.type_condition {
                    Some(type_condition) =>
                        Some(TypeAnnotation::named(type_condition.name.as_str(), true)),
                    None => self.get_type().map(|annot| {
                        TypeAnnotation::named(annot.innermost_type_name(), true)
                    }),
                };
                let annot = annot.filter(|annot| self.is_output_annotation(annot));
                self.type_stack.push(annot);
            },

            NodeRef::FragmentDefinition(frag) => {
                let annot = Some(TypeAnnotation::named(
                    frag.type_condition.name.as_str(),
                    true,
                )).filter(|annot| self.is_output_annotation(annot));
                self.type_stack.push(annot);
            },

            NodeRef::VariableDefinition(var_def) => {
                let annot = Some(TypeAnnotation::from_ast_type(&var_def.type_))
                    .filter(|annot| self.is_input_annotation(annot));
                self.input_type_stack.push(annot);
            },

            NodeRef::Argument(arg) => {
                // Arguments belong to the enclosing directive if there is
                // one, otherwise to the enclosing field.
                let parameters = match self.directive {
                    Some(directive) => Some(directive.parameters()),
                    None => self.get_field_def().map(|f| f.parameters()),
                };
                let arg_def = parameters.and_then(|params| params.get(&arg.name));
                self.argument = arg_def;
                let annot = arg_def
                    .map(|arg_def| arg_def.type_annotation())
                    .filter(|annot| self.is_input_annotation(annot))
                    .cloned();
                self.input_type_stack.push(annot);
            },

            NodeRef::Value(value) if matches!(value.data, ValueData::List(_)) => {
                let item_annot = self.get_input_type()
                    .map(|annot| match annot {
                        TypeAnnotation::List(list) =>
                            list.inner_type_annotation().clone(),
                        TypeAnnotation::Named(_) => annot.clone(),
                    })
                    .filter(|annot| self.is_input_annotation(annot));
                self.input_type_stack.push(item_annot);
            },

            NodeRef::ObjectField(obj_field) => {
                let field_annot = self.get_input_type()
                    .and_then(|annot| self.named_type(annot))
                    .and_then(|type_| type_.as_input_object())
                    .and_then(|input_obj| input_obj.fields().get(&obj_field.name))
                    .map(|input_field| input_field.type_annotation())
                    .filter(|annot| self.is_input_annotation(annot))
                    .cloned();
                self.input_type_stack.push(field_annot);
            },

            _ => (),
        }
    }

    pub fn leave(&mut self, node: NodeRef<'a>) {
        match node {
            NodeRef::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },

            NodeRef::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },

            NodeRef::Directive(_) => {
                self.directive = None;
            },

            NodeRef::OperationDefinition(_)
            | NodeRef::InlineFragment(_)
            | NodeRef::FragmentDefinition(_) => {
                self.type_stack.pop();
            },

            NodeRef::VariableDefinition(_) => {
                self.input_type_stack.pop();
            },

            NodeRef::Argument(_) => {
                self.argument = None;
                self.input_type_stack.pop();
            },

            NodeRef::Value(value) if matches!(value.data, ValueData::List(_)) => {
                self.input_type_stack.pop();
            },

            NodeRef::ObjectField(_) => {
                self.input_type_stack.pop();
            },

            _ => (),
        }
    }

    fn is_input_annotation(&self, annot: &TypeAnnotation) -> bool {
        self.named_type(annot).is_some_and(GraphQLType::is_input_type)
    }

    fn is_output_annotation(&self, annot: &TypeAnnotation) -> bool {
        self.named_type(annot).is_some_and(GraphQLType::is_output_type)
    }

    fn lookup_field_def(
        &self,
        parent_type: &'a GraphQLType,
        field_name: &str,
    ) -> Option<&'a Field> {
        if field_name == "__typename" && parent_type.is_composite() {
            return Some(Field::typename_meta_field());
        }
        parent_type.fields().and_then(|fields| fields.get(field_name))
    }

    fn named_type(&self, annot: &TypeAnnotation) -> Option<&'a GraphQLType> {
        self.schema.get_type(annot.innermost_type_name())
    }
}
