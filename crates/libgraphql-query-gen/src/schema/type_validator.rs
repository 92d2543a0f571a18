use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use std::collections::HashMap;
use std::collections::HashSet;

/// Checks the cross-type references of a fully-loaded types map: every
/// referenced type exists and is of a kind permitted at the point of
/// reference.
pub(super) struct TypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    types_map: &'a HashMap<String, GraphQLType>,
}
impl<'a> TypeValidator<'a> {
    pub fn new(types_map: &'a HashMap<String, GraphQLType>) -> Self {
        Self {
            errors: vec![],
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let types_map = self.types_map;
        let mut type_names = types_map.keys().collect::<Vec<_>>();
        type_names.sort();

        for type_name in type_names {
            match &types_map[type_name] {
                GraphQLType::Enum(enum_type) if enum_type.values().is_empty() =>
                    self.errors.push(TypeValidationError::EnumWithNoValues {
                        type_name: type_name.to_owned(),
                    }),

                GraphQLType::InputObject(input_obj) =>
                    self.validate_input_object(input_obj),

                GraphQLType::Interface(iface) => {
                    self.validate_implemented_interfaces(
                        type_name,
                        iface.interface_names(),
                    );
                    self.validate_fields(type_name, iface.fields().values());
                },

                GraphQLType::Object(obj) => {
                    self.validate_implemented_interfaces(
                        type_name,
                        obj.interface_names(),
                    );
                    self.validate_fields(type_name, obj.fields().values());
                },

                GraphQLType::Union(union_type) => {
                    for member_name in union_type.member_names() {
                        match types_map.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(_) => self.errors.push(
                                TypeValidationError::NonObjectUnionMember {
                                    member_name: member_name.to_owned(),
                                    union_name: type_name.to_owned(),
                                }
                            ),
                            None => self.errors.push(
                                TypeValidationError::UndefinedTypeName {
                                    referenced_by: type_name.to_owned(),
                                    undefined_type_name: member_name.to_owned(),
                                }
                            ),
                        }
                    }
                },

                _ => (),
            }
        }

        self.errors
    }

    fn validate_fields(
        &mut self,
        parent_type_name: &str,
        fields: impl Iterator<Item = &'a Field>,
    ) {
        let types_map = self.types_map;
        for field in fields {
            let field_type_name = field.type_annotation().innermost_type_name();
            match types_map.get(field_type_name) {
                Some(field_type) if !field_type.is_output_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            field_name: field.name().to_owned(),
                            input_type_name: field_type_name.to_owned(),
                            parent_type_name: parent_type_name.to_owned(),
                        }
                    ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    referenced_by: format!("{parent_type_name}.{}", field.name()),
                    undefined_type_name: field_type_name.to_owned(),
                }),
            }

            for param in field.parameters().values() {
                let param_type_name = param.type_annotation().innermost_type_name();
                match types_map.get(param_type_name) {
                    Some(param_type) if !param_type.is_input_type() =>
                        self.errors.push(
                            TypeValidationError::InvalidParameterWithOutputType {
                                field_name: field.name().to_owned(),
                                invalid_type_name: param_type_name.to_owned(),
                                parameter_name: param.name().to_owned(),
                                parent_type_name: parent_type_name.to_owned(),
                            }
                        ),
                    Some(_) => (),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        referenced_by: format!(
                            "{parent_type_name}.{}({}:)",
                            field.name(),
                            param.name(),
                        ),
                        undefined_type_name: param_type_name.to_owned(),
                    }),
                }
            }
        }
    }

    fn validate_implemented_interfaces(
        &mut self,
        type_name: &str,
        interface_names: Vec<&str>,
    ) {
        let types_map = self.types_map;
        for iface_name in interface_names {
            match types_map.get(iface_name) {
                Some(GraphQLType::Interface(_)) => (),
                Some(_) => self.errors.push(
                    TypeValidationError::ImplementsNonInterfaceType {
                        non_interface_type_name: iface_name.to_owned(),
                        type_name: type_name.to_owned(),
                    }
                ),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    referenced_by: type_name.to_owned(),
                    undefined_type_name: iface_name.to_owned(),
                }),
            }
        }
    }

    fn validate_input_object(&mut self, input_obj: &'a InputObjectType) {
        let types_map = self.types_map;
        for field in input_obj.fields().values() {
            let field_type_name = field.type_annotation().innermost_type_name();
            match types_map.get(field_type_name) {
                Some(field_type) if !field_type.is_input_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidInputFieldWithOutputType {
                            field_name: field.name().to_owned(),
                            invalid_type_name: field_type_name.to_owned(),
                            parent_type_name: input_obj.name().to_owned(),
                        }
                    ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    referenced_by: format!("{}.{}", input_obj.name(), field.name()),
                    undefined_type_name: field_type_name.to_owned(),
                }),
            }
        }

        self.validate_input_cycles(
            input_obj,
            &mut vec![],
            HashSet::from([input_obj.name()]),
        );
    }

    /// Look for input-object cycles that aren't broken by at least one
    /// nullable type. Such a cycle makes the type impossible to construct.
    fn validate_input_cycles(
        &mut self,
        input_obj: &'a InputObjectType,
        path: &mut Vec<String>,
        seen_type_names: HashSet<&'a str>,
    ) {
        let types_map = self.types_map;
        for field in input_obj.fields().values() {
            if contains_cycle_breaking_nullable_type(field.type_annotation()) {
                continue;
            }

            let field_type_name = field.type_annotation().innermost_type_name();
            let Some(GraphQLType::InputObject(field_type)) =
                types_map.get(field_type_name) else {
                continue;
            };

            path.push(format!("{}.{}", input_obj.name(), field.name()));
            if seen_type_names.contains(field_type_name) {
                let mut circular_field_path = path.clone();
                circular_field_path.push(field_type_name.to_owned());
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path,
                });
            } else {
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(field_type.name());
                self.validate_input_cycles(field_type, path, seen_type_names);
            }
            path.pop();
        }
    }
}

fn contains_cycle_breaking_nullable_type(type_annot: &TypeAnnotation) -> bool {
    match type_annot {
        TypeAnnotation::List(list_annot) =>
            list_annot.nullable() || contains_cycle_breaking_nullable_type(
                list_annot.inner_type_annotation(),
            ),
        TypeAnnotation::Named(named_annot) =>
            named_annot.nullable(),
    }
}
