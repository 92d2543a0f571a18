use crate::ast;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;
use crate::validation::DocumentValidationError;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

const TYPENAME_FIELD_NAME: &str = "__typename";

struct VariableUsage<'a> {
    argument_name: &'a str,
    location_has_default: bool,
    location_type: TypeAnnotation,
    variable_name: &'a str,
}

#[derive(Default)]
struct OperationContext<'a> {
    fragment_stack: Vec<&'a str>,
    usages: Vec<VariableUsage<'a>>,
}

pub(super) struct DocumentValidator<'a> {
    document: &'a ast::query::Document,
    errors: Vec<DocumentValidationError>,
    fragments: HashMap<&'a str, &'a ast::query::FragmentDefinition>,
    schema: &'a Schema,
}
impl<'a> DocumentValidator<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::query::Document) -> Self {
        let fragments = document.definitions.iter().filter_map(|def| match def {
            ast::query::Definition::Fragment(fragment) =>
                Some((fragment.name.as_str(), fragment)),
            ast::query::Definition::Operation(_) => None,
        }).collect();

        Self {
            document,
            errors: vec![],
            fragments,
            schema,
        }
    }

    pub fn validate(mut self) -> Vec<DocumentValidationError> {
        let document = self.document;
        for def in document.definitions.iter() {
            if let ast::query::Definition::Operation(op) = def {
                self.validate_operation(op);
            }
        }
        self.errors
    }

    /// Fragment type conditions must name a composite type that shares at
    /// least one possible object type with the enclosing type.
    fn check_type_condition(
        &mut self,
        parent_type: &'a GraphQLType,
        type_condition: &str,
    ) -> Option<&'a GraphQLType> {
        let schema = self.schema;
        let Some(condition_type) = schema.lookup_type(type_condition) else {
            self.errors.push(DocumentValidationError::UndefinedType {
                type_name: type_condition.to_string(),
            });
            return None;
        };

        if !condition_type.is_composite() {
            self.errors.push(DocumentValidationError::NonCompositeTypeCondition {
                type_name: type_condition.to_string(),
            });
            return None;
        }

        let parent_possible_types = self.possible_types(parent_type);
        let applicable = self.possible_types(condition_type)
            .iter()
            .any(|type_name| parent_possible_types.contains(type_name));
        if !applicable {
            self.errors.push(DocumentValidationError::InapplicableFragment {
                parent_type_name: parent_type.name().to_string(),
                type_condition: type_condition.to_string(),
            });
            return None;
        }

        Some(condition_type)
    }

    /// Flatten the fields of `selection_set` (through inline fragments and
    /// fragment spreads), pairing each with the type it is selected on.
    fn collect_fields(
        &self,
        parent_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
        visited_fragments: &mut Vec<&'a str>,
        fields: &mut Vec<(&'a GraphQLType, &'a ast::query::Field)>,
    ) {
        let schema = self.schema;
        for selection in selection_set.items.iter() {
            match selection {
                ast::query::Selection::Field(field) =>
                    fields.push((parent_type, field)),

                ast::query::Selection::InlineFragment(inline_fragment) => {
                    let fragment_type = match &inline_fragment.type_condition {
                        Some(ast::query::TypeCondition::On(type_name)) =>
                            schema.lookup_type(type_name),
                        None => Some(parent_type),
                    };
                    if let Some(fragment_type) = fragment_type {
                        self.collect_fields(
                            fragment_type,
                            &inline_fragment.selection_set,
                            visited_fragments,
                            fields,
                        );
                    }
                },

                ast::query::Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name.as_str();
                    if visited_fragments.contains(&fragment_name) {
                        continue;
                    }
                    let Some(fragment) = self.fragments.get(fragment_name).copied() else {
                        continue;
                    };
                    let ast::query::TypeCondition::On(type_name) =
                        &fragment.type_condition;
                    let Some(fragment_type) = schema.lookup_type(type_name) else {
                        continue;
                    };
                    visited_fragments.push(fragment_name);
                    self.collect_fields(
                        fragment_type,
                        &fragment.selection_set,
                        visited_fragments,
                        fields,
                    );
                },
            }
        }
    }

    fn collect_variable_usages(
        &self,
        argument_name: &'a str,
        value: &'a ast::query::Value,
        location_type: &TypeAnnotation,
        location_has_default: bool,
        ctx: &mut OperationContext<'a>,
    ) {
        match value {
            ast::query::Value::Variable(variable_name) =>
                ctx.usages.push(VariableUsage {
                    argument_name,
                    location_has_default,
                    location_type: location_type.clone(),
                    variable_name: variable_name.as_str(),
                }),

            ast::query::Value::List(items) => {
                if let TypeAnnotation::List(list_annot) = location_type {
                    for item in items {
                        self.collect_variable_usages(
                            argument_name,
                            item,
                            list_annot.inner_type_annotation(),
                            false,
                            ctx,
                        );
                    }
                }
            },

            ast::query::Value::Object(object_fields) => {
                let input_obj = self.schema
                    .lookup_type(location_type.innermost_type_name())
                    .and_then(|graphql_type| graphql_type.as_input_object());
                let Some(input_obj) = input_obj else {
                    return;
                };
                for (field_name, field_value) in object_fields {
                    if let Some(input_field) = input_obj.fields().get(field_name) {
                        self.collect_variable_usages(
                            argument_name,
                            field_value,
                            input_field.type_annotation(),
                            input_field.default_value().is_some(),
                            ctx,
                        );
                    }
                }
            },

            _ => (),
        }
    }

    /// All object types that a value of `graphql_type` may be at runtime.
    fn possible_types(&self, graphql_type: &'a GraphQLType) -> HashSet<&'a str> {
        match graphql_type {
            GraphQLType::Interface(iface) => self.schema.all_types()
                .values()
                .filter_map(|candidate| candidate.as_object())
                .filter(|obj| obj.interface_names().contains(&iface.name()))
                .map(|obj| obj.name())
                .collect(),
            GraphQLType::Object(obj) => HashSet::from([obj.name()]),
            GraphQLType::Union(union_type) => union_type.member_names()
                .iter()
                .map(|member_name| member_name.as_str())
                .collect(),
            _ => HashSet::new(),
        }
    }

    fn root_field_count(
        &self,
        root_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
    ) -> usize {
        let mut fields = vec![];
        self.collect_fields(root_type, selection_set, &mut vec![], &mut fields);
        fields.iter()
            .map(|(_, field)| response_name(field))
            .collect::<HashSet<_>>()
            .len()
    }

    fn validate_field(
        &mut self,
        parent_type: &'a GraphQLType,
        field: &'a ast::query::Field,
        ctx: &mut OperationContext<'a>,
    ) {
        if field.name == TYPENAME_FIELD_NAME {
            if !field.selection_set.items.is_empty() {
                self.errors.push(DocumentValidationError::LeafFieldWithSelection {
                    field_name: field.name.to_owned(),
                    parent_type_name: parent_type.name().to_string(),
                });
            }
            return;
        }

        let field_def = parent_type.fields()
            .and_then(|fields| fields.get(field.name.as_str()));
        let Some(field_def) = field_def else {
            self.errors.push(DocumentValidationError::UnknownField {
                field_name: field.name.to_owned(),
                parent_type_name: parent_type.name().to_string(),
            });
            return;
        };

        let mut passed_arg_names = HashSet::new();
        for (arg_name, arg_value) in field.arguments.iter() {
            if !passed_arg_names.insert(arg_name.as_str()) {
                self.errors.push(DocumentValidationError::DuplicateArgument {
                    argument_name: arg_name.to_owned(),
                    field_name: field.name.to_owned(),
                });
                continue;
            }

            match field_def.parameters().get(arg_name.as_str()) {
                Some(param) => self.collect_variable_usages(
                    arg_name.as_str(),
                    arg_value,
                    param.type_annotation(),
                    param.default_value().is_some(),
                    ctx,
                ),
                None => self.errors.push(DocumentValidationError::UnknownArgument {
                    argument_name: arg_name.to_owned(),
                    field_name: field.name.to_owned(),
                    parent_type_name: parent_type.name().to_string(),
                }),
            }
        }

        for param in field_def.parameters().values() {
            if param.is_required() && !passed_arg_names.contains(param.name()) {
                self.errors.push(DocumentValidationError::MissingRequiredArgument {
                    argument_name: param.name().to_string(),
                    field_name: field.name.to_owned(),
                    parent_type_name: parent_type.name().to_string(),
                });
            }
        }

        let schema = self.schema;
        let field_type_name = field_def.type_annotation().innermost_type_name();
        match schema.lookup_type(field_type_name) {
            Some(field_type) if field_type.is_composite() => {
                if field.selection_set.items.is_empty() {
                    self.errors.push(DocumentValidationError::MissingSelection {
                        field_name: field.name.to_owned(),
                        parent_type_name: parent_type.name().to_string(),
                    });
                } else {
                    self.validate_field_merging(field_type, &field.selection_set);
                    self.validate_selection_set(field_type, &field.selection_set, ctx);
                }
            },

            Some(_) => if !field.selection_set.items.is_empty() {
                self.errors.push(DocumentValidationError::LeafFieldWithSelection {
                    field_name: field.name.to_owned(),
                    parent_type_name: parent_type.name().to_string(),
                });
            },

            None => self.errors.push(DocumentValidationError::UndefinedType {
                type_name: field_type_name.to_string(),
            }),
        }
    }

    /// Fields sharing a response name within one selection set must select
    /// the same field with the same arguments, unless they are selected on
    /// two different object types (only one of which can apply at runtime).
    /// Either way their responses must have the same shape.
    fn validate_field_merging(
        &mut self,
        parent_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
    ) {
        let mut fields = vec![];
        self.collect_fields(parent_type, selection_set, &mut vec![], &mut fields);

        for (response_name, fields) in group_by_response_name(fields) {
            if let Some(error) = self.find_merge_conflict(response_name, &fields) {
                self.errors.push(error);
            }
        }
    }

    fn find_merge_conflict(
        &self,
        response_name: &str,
        fields: &[(&'a GraphQLType, &'a ast::query::Field)],
    ) -> Option<DocumentValidationError> {
        for (i, &(parent1, field1)) in fields.iter().enumerate() {
            for &(parent2, field2) in fields[i + 1..].iter() {
                let exclusive_parents = parent1.name() != parent2.name()
                    && parent1.as_object().is_some()
                    && parent2.as_object().is_some();
                let same_field = field1.name == field2.name
                    && sorted_arguments(field1) == sorted_arguments(field2);
                if !exclusive_parents && !same_field {
                    return Some(DocumentValidationError::FieldsConflict {
                        field_name1: field1.name.to_owned(),
                        field_name2: field2.name.to_owned(),
                        response_name: response_name.to_string(),
                    });
                }

                if !self.same_field_response_shape(parent1, field1, parent2, field2) {
                    return Some(DocumentValidationError::IncompatibleResponseShapes {
                        field_name1: field1.name.to_owned(),
                        field_name2: field2.name.to_owned(),
                        response_name: response_name.to_string(),
                    });
                }
            }
        }
        None
    }

    /// Fields whose definitions cannot be found are reported elsewhere and
    /// are treated as compatible here.
    fn same_field_response_shape(
        &self,
        parent1: &GraphQLType,
        field1: &'a ast::query::Field,
        parent2: &GraphQLType,
        field2: &'a ast::query::Field,
    ) -> bool {
        match (field_type(parent1, field1), field_type(parent2, field2)) {
            (Some(type1), Some(type2)) => self.same_response_shape(
                &type1,
                &field1.selection_set,
                &type2,
                &field2.selection_set,
            ),
            _ => true,
        }
    }

    /// https://spec.graphql.org/October2021/#SameResponseShape()
    fn same_response_shape(
        &self,
        type1: &TypeAnnotation,
        selection_set1: &'a ast::query::SelectionSet,
        type2: &TypeAnnotation,
        selection_set2: &'a ast::query::SelectionSet,
    ) -> bool {
        if type1.nullable() != type2.nullable() {
            return false;
        }

        match (type1, type2) {
            (TypeAnnotation::List(list1), TypeAnnotation::List(list2)) =>
                return self.same_response_shape(
                    list1.inner_type_annotation(),
                    selection_set1,
                    list2.inner_type_annotation(),
                    selection_set2,
                ),
            (TypeAnnotation::Named(_), TypeAnnotation::Named(_)) => (),
            _ => return false,
        }

        let schema = self.schema;
        let graphql_type1 = schema.lookup_type(type1.innermost_type_name());
        let graphql_type2 = schema.lookup_type(type2.innermost_type_name());
        let (Some(graphql_type1), Some(graphql_type2)) = (graphql_type1, graphql_type2) else {
            return true;
        };
        if graphql_type1.is_leaf() || graphql_type2.is_leaf() {
            return graphql_type1.name() == graphql_type2.name();
        }

        let mut subfields = vec![];
        self.collect_fields(graphql_type1, selection_set1, &mut vec![], &mut subfields);
        self.collect_fields(graphql_type2, selection_set2, &mut vec![], &mut subfields);
        group_by_response_name(subfields).values().all(|fields| {
            fields.iter().enumerate().all(|(i, &(parent1, field1))| {
                fields[i + 1..].iter().all(|&(parent2, field2)|
                    self.same_field_response_shape(parent1, field1, parent2, field2)
                )
            })
        })
    }

    fn validate_operation(&mut self, op: &'a ast::query::OperationDefinition) {
        use ast::query::OperationDefinition;
        let (operation_kind, variable_defs, selection_set) = match op {
            OperationDefinition::Mutation(mutation) =>
                (OperationKind::Mutation, &mutation.variable_definitions[..], &mutation.selection_set),
            OperationDefinition::Query(query) =>
                (OperationKind::Query, &query.variable_definitions[..], &query.selection_set),
            OperationDefinition::SelectionSet(selection_set) =>
                (OperationKind::Query, &[][..], selection_set),
            OperationDefinition::Subscription(subscription) =>
                (OperationKind::Subscription, &subscription.variable_definitions[..], &subscription.selection_set),
        };

        let defined_vars = self.validate_variable_definitions(variable_defs);

        let schema = self.schema;
        let Some(root_type) = schema.root_operation_type(operation_kind) else {
            self.errors.push(DocumentValidationError::UndefinedRootOperationType {
                operation: operation_kind,
            });
            return;
        };

        if operation_kind == OperationKind::Subscription {
            let count = self.root_field_count(root_type, selection_set);
            if count != 1 {
                self.errors.push(
                    DocumentValidationError::MultipleSubscriptionRootFields { count },
                );
            }
        }

        let mut ctx = OperationContext::default();
        self.validate_field_merging(root_type, selection_set);
        self.validate_selection_set(root_type, selection_set, &mut ctx);
        self.validate_variable_usages(variable_defs, &defined_vars, &ctx.usages);
    }

    fn validate_selection_set(
        &mut self,
        parent_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
        ctx: &mut OperationContext<'a>,
    ) {
        for selection in selection_set.items.iter() {
            match selection {
                ast::query::Selection::Field(field) =>
                    self.validate_field(parent_type, field, ctx),

                ast::query::Selection::InlineFragment(inline_fragment) => {
                    let fragment_type = match &inline_fragment.type_condition {
                        Some(ast::query::TypeCondition::On(type_name)) =>
                            self.check_type_condition(parent_type, type_name),
                        None => Some(parent_type),
                    };
                    if let Some(fragment_type) = fragment_type {
                        self.validate_selection_set(
                            fragment_type,
                            &inline_fragment.selection_set,
                            ctx,
                        );
                    }
                },

                ast::query::Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name.as_str();
                    let Some(fragment) = self.fragments.get(fragment_name).copied() else {
                        self.errors.push(DocumentValidationError::UndefinedFragment {
                            fragment_name: fragment_name.to_string(),
                        });
                        continue;
                    };
                    if ctx.fragment_stack.contains(&fragment_name) {
                        self.errors.push(DocumentValidationError::CircularFragmentSpread {
                            fragment_name: fragment_name.to_string(),
                        });
                        continue;
                    }

                    let ast::query::TypeCondition::On(type_name) =
                        &fragment.type_condition;
                    let Some(fragment_type) =
                        self.check_type_condition(parent_type, type_name) else {
                        continue;
                    };

                    ctx.fragment_stack.push(fragment_name);
                    self.validate_selection_set(
                        fragment_type,
                        &fragment.selection_set,
                        ctx,
                    );
                    ctx.fragment_stack.pop();
                },
            }
        }
    }

    fn validate_variable_definitions(
        &mut self,
        variable_defs: &'a [ast::query::VariableDefinition],
    ) -> HashMap<&'a str, (TypeAnnotation, bool)> {
        let schema = self.schema;
        let mut defined_vars = HashMap::new();
        for var_def in variable_defs {
            if defined_vars.contains_key(var_def.name.as_str()) {
                self.errors.push(DocumentValidationError::DuplicateVariable {
                    variable_name: var_def.name.to_owned(),
                });
                continue;
            }

            let var_type = TypeAnnotation::from_ast_type(&var_def.var_type);
            let type_name = var_type.innermost_type_name();
            match schema.lookup_type(type_name) {
                Some(graphql_type) if !graphql_type.is_input_type() =>
                    self.errors.push(DocumentValidationError::NonInputVariableType {
                        type_name: type_name.to_string(),
                        variable_name: var_def.name.to_owned(),
                    }),
                Some(_) => (),
                None => self.errors.push(DocumentValidationError::UndefinedType {
                    type_name: type_name.to_string(),
                }),
            }

            let has_default = !matches!(
                var_def.default_value,
                None | Some(ast::query::Value::Null),
            );
            defined_vars.insert(var_def.name.as_str(), (var_type, has_default));
        }
        defined_vars
    }

    fn validate_variable_usages(
        &mut self,
        variable_defs: &'a [ast::query::VariableDefinition],
        defined_vars: &HashMap<&'a str, (TypeAnnotation, bool)>,
        usages: &[VariableUsage<'a>],
    ) {
        let mut used_var_names = HashSet::new();
        for usage in usages {
            let first_usage = used_var_names.insert(usage.variable_name);
            let Some((var_type, var_has_default)) = defined_vars.get(usage.variable_name) else {
                if first_usage {
                    self.errors.push(DocumentValidationError::UndefinedVariable {
                        variable_name: usage.variable_name.to_string(),
                    });
                }
                continue;
            };

            let has_default = *var_has_default || usage.location_has_default;
            if !var_type.is_usable_as(&usage.location_type, has_default) {
                self.errors.push(DocumentValidationError::IncompatibleVariableUsage {
                    argument_name: usage.argument_name.to_string(),
                    expected_type: usage.location_type.to_string(),
                    variable_name: usage.variable_name.to_string(),
                    variable_type: var_type.to_string(),
                });
            }
        }

        for var_def in variable_defs {
            if !used_var_names.contains(var_def.name.as_str()) {
                self.errors.push(DocumentValidationError::UnusedVariable {
                    variable_name: var_def.name.to_owned(),
                });
            }
        }
    }
}

/// The declared type of `field` on `parent_type`, if it is defined.
fn field_type(
    parent_type: &GraphQLType,
    field: &ast::query::Field,
) -> Option<TypeAnnotation> {
    if field.name == TYPENAME_FIELD_NAME {
        return Some(TypeAnnotation::Named(NamedTypeAnnotation {
            nullable: false,
            type_name: "String".to_string(),
        }));
    }
    parent_type.fields()?
        .get(field.name.as_str())
        .map(|field_def| field_def.type_annotation().clone())
}

fn group_by_response_name<'a>(
    fields: Vec<(&'a GraphQLType, &'a ast::query::Field)>,
) -> IndexMap<&'a str, Vec<(&'a GraphQLType, &'a ast::query::Field)>> {
    let mut fields_by_response_name = IndexMap::<&str, Vec<_>>::new();
    for (parent_type, field) in fields {
        fields_by_response_name.entry(response_name(field))
            .or_default()
            .push((parent_type, field));
    }
    fields_by_response_name
}

fn response_name(field: &ast::query::Field) -> &str {
    field.alias.as_deref().unwrap_or(field.name.as_str())
}

fn sorted_arguments(field: &ast::query::Field) -> Vec<&(String, ast::query::Value)> {
    let mut arguments = field.arguments.iter().collect::<Vec<_>>();
    arguments.sort_by(|(name1, _), (name2, _)| name1.cmp(name2));
    arguments
}
