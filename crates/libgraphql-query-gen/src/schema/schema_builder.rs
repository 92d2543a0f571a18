use crate::ast;
use crate::file_reader;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::schema::type_validator::TypeValidator;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from one or more GraphQL SDL sources.
///
/// Type extensions are collected as they are loaded and applied (in load
/// order) when [`SchemaBuilder::build()`] is called, so an extension may be
/// loaded before the definition it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<String>,
    pending_extensions: Vec<ast::schema::TypeExtension>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for ext in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(ext)?;
        }

        let query_type = self.resolve_root_type(OperationKind::Query)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = self.resolve_root_type(OperationKind::Mutation)?;
        let subscription_type =
            self.resolve_root_type(OperationKind::Subscription)?;

        let errors = TypeValidator::new(&self.types).validate();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(Schema {
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self {
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            subscription_type: None,
            types: HashMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path,
                    err: err.to_string(),
                })?
                .into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(def)?;
        }

        log::trace!("Loaded schema source; {} types known.", self.types.len());
        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let type_name = match &ext {
            TypeExtension::Enum(ext) => &ext.name,
            TypeExtension::InputObject(ext) => &ext.name,
            TypeExtension::Interface(ext) => &ext.name,
            TypeExtension::Object(ext) => &ext.name,
            TypeExtension::Scalar(ext) => &ext.name,
            TypeExtension::Union(ext) => &ext.name,
        }.to_owned();

        let Some(schema_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType { type_name });
        };

        match (schema_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                enum_type.values.extend(
                    ext.values.into_iter().map(|value| value.name),
                ),

            (GraphQLType::InputObject(input_obj), TypeExtension::InputObject(ext)) =>
                input_obj.fields.extend(ext.fields.iter().map(|input_val| (
                    input_val.name.to_owned(),
                    InputField::from_ast(input_val),
                ))),

            (GraphQLType::Interface(iface), TypeExtension::Interface(ext)) =>
                iface.0.extend(&ext.fields, &ext.implements_interfaces),

            (GraphQLType::Object(obj), TypeExtension::Object(ext)) =>
                obj.0.extend(&ext.fields, &ext.implements_interfaces),

            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                union_type.members.extend(ext.types),

            (schema_type, _) => return Err(SchemaBuildError::InvalidExtensionType {
                schema_type: schema_type.clone(),
                type_name,
            }),
        }

        Ok(())
    }

    fn resolve_root_type(
        &self,
        operation: OperationKind,
    ) -> Result<Option<String>> {
        let declared_name = match operation {
            OperationKind::Mutation => self.mutation_type.as_ref(),
            OperationKind::Query => self.query_type.as_ref(),
            OperationKind::Subscription => self.subscription_type.as_ref(),
        };

        let type_name = match declared_name {
            Some(type_name) => type_name.as_str(),
            None => operation.default_type_name(),
        };

        match (self.types.get(type_name), declared_name) {
            (Some(GraphQLType::Object(_)), _) =>
                Ok(Some(type_name.to_string())),

            // An implicitly-named root type only counts when it is an object
            // type.
            (_, None) => Ok(None),

            (Some(_), Some(_)) => Err(SchemaBuildError::TypeValidationErrors {
                errors: vec![TypeValidationError::RootOperationTypeIsNotObject {
                    operation,
                    type_name: type_name.to_string(),
                }],
            }),

            (None, Some(_)) => Err(SchemaBuildError::TypeValidationErrors {
                errors: vec![TypeValidationError::UndefinedRootOperationType {
                    operation,
                    type_name: type_name.to_string(),
                }],
            }),
        }
    }

    fn visit_ast_def(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(type_def),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push(type_ext);
                Ok(())
            },
            // Directives never influence which selections are valid for the
            // documents this crate produces.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        for (operation, declared, slot) in [
            (OperationKind::Query, schema_def.query, &mut self.query_type),
            (OperationKind::Mutation, schema_def.mutation, &mut self.mutation_type),
            (OperationKind::Subscription, schema_def.subscription, &mut self.subscription_type),
        ] {
            let Some(type_name) = declared else {
                continue;
            };
            if let Some(existing_type_name) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    type_name1: existing_type_name.to_owned(),
                    type_name2: type_name,
                });
            }
            *slot = Some(type_name);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        let graphql_type = match type_def {
            TypeDefinition::Enum(enum_def) => GraphQLType::Enum(EnumType {
                name: enum_def.name,
                values: enum_def.values.into_iter()
                    .map(|value| value.name)
                    .collect(),
            }),

            TypeDefinition::InputObject(inputobj_def) =>
                GraphQLType::InputObject(InputObjectType {
                    fields: inputobj_def.fields.iter().map(|input_val| (
                        input_val.name.to_owned(),
                        InputField::from_ast(input_val),
                    )).collect(),
                    name: inputobj_def.name,
                }),

            TypeDefinition::Interface(iface_def) =>
                GraphQLType::Interface(InterfaceType(
                    ObjectOrInterfaceTypeData::new(
                        iface_def.name.as_str(),
                        &iface_def.fields,
                        &iface_def.implements_interfaces,
                    ),
                )),

            TypeDefinition::Object(obj_def) =>
                GraphQLType::Object(ObjectType(
                    ObjectOrInterfaceTypeData::new(
                        obj_def.name.as_str(),
                        &obj_def.fields,
                        &obj_def.implements_interfaces,
                    ),
                )),

            TypeDefinition::Scalar(scalar_def) => GraphQLType::Scalar(ScalarType {
                name: scalar_def.name,
            }),

            TypeDefinition::Union(union_def) => GraphQLType::Union(UnionType {
                members: union_def.types,
                name: union_def.name,
            }),
        };

        let type_name = graphql_type.name().to_string();
        if self.types.contains_key(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition { type_name });
        }
        self.types.insert(type_name, graphql_type);

        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The {operation} root operation type was declared more than once \
        (`{type_name1}` and `{type_name2}`)"
    )]
    DuplicateOperationDefinition {
        operation: OperationKind,
        type_name1: String,
        type_name2: String,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}` using an extension that corresponds \
        to a different kind of type"
    )]
    InvalidExtensionType {
        schema_type: GraphQLType,
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema source {file:?}: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
