use crate::ReadContentError;
use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();
        assert_eq!(schema.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);
    }

    #[test]
    fn builtin_scalars_are_always_defined() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .build()?;

        assert_eq!(schema.all_types().len(), 6);
        assert_eq!(schema.lookup_type("Boolean"), Some(&GraphQLType::Bool));
        assert_eq!(schema.lookup_type("Float"), Some(&GraphQLType::Float));
        assert_eq!(schema.lookup_type("ID"), Some(&GraphQLType::ID));
        assert_eq!(schema.lookup_type("Int"), Some(&GraphQLType::Int));
        assert_eq!(schema.lookup_type("String"), Some(&GraphQLType::String));

        Ok(())
    }

    #[test]
    fn default_root_operation_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation { a: Int }\n",
                "type Query { b: Int }\n",
                "type Subscription { c: Int }",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
        assert_eq!(schema.subscription_type().unwrap().name(), "Subscription");
        assert_eq!(
            schema.root_operation_type(OperationKind::Subscription)
                .unwrap()
                .name(),
            "Subscription",
        );

        Ok(())
    }

    #[test]
    fn absent_optional_root_operation_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { b: Int }")?
            .build()?;

        assert!(schema.mutation_type().is_none());
        assert!(schema.root_operation_type(OperationKind::Mutation).is_none());
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn schema_block_overrides_root_operation_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery, mutation: RootMutation }\n",
                "type RootQuery { a: Int }\n",
                "type RootMutation { b: Int }\n",
                "type Query { ignored: Int }",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "RootQuery");
        assert_eq!(schema.mutation_type().unwrap().name(), "RootMutation");

        Ok(())
    }

    #[test]
    fn fields_and_parameters_keep_declaration_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query {\n",
                "  zeta(b: Int, a: String! = \"x\", c: ID!): String\n",
                "  alpha: Int\n",
                "}",
            ))?
            .build()?;

        let query_type = schema.query_type().as_object().unwrap();
        assert_eq!(
            query_type.fields().keys().collect::<Vec<_>>(),
            vec!["zeta", "alpha"],
        );

        let params = query_type.fields()["zeta"].parameters();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert!(!params["b"].is_required());
        assert!(!params["a"].is_required());
        assert!(params["c"].is_required());

        Ok(())
    }

    #[test]
    fn parse_error_carries_file_path() {
        let path = PathBuf::from("/tmp/broken.graphql");
        let result = SchemaBuilder::new()
            .load_str(Some(path.to_owned()), "type Query {");
        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { file: Some(file), .. }) if file == path,
        ));
    }
}

mod files {
    use super::*;

    #[test]
    fn load_fixture_file() -> Result<()> {
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("schema.graphql");
        let schema = SchemaBuilder::new().load_file(fixture_path)?.build()?;

        assert!(schema.lookup_type("Repository").is_some());
        assert!(schema.lookup_type("Owner").unwrap().as_union().is_some());

        Ok(())
    }

    #[test]
    fn load_missing_file() {
        let missing_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("does_not_exist.graphql");
        let result = SchemaBuilder::new().load_file(missing_path.to_owned());
        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::SchemaFileReadError(Box::new(
                ReadContentError::PathIsNotAFile(missing_path),
            )),
        );
    }
}

mod extensions {
    use super::*;

    #[test]
    fn object_extension_appends_fields_and_interfaces() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend type Query implements Node { b: String }")?
            .load_str(None, concat!(
                "interface Node { id: ID! }\n",
                "type Query { a: Int }",
            ))?
            .build()?;

        let query_type = schema.query_type().as_object().unwrap();
        assert_eq!(query_type.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(query_type.interface_names(), vec!["Node"]);

        Ok(())
    }

    #[test]
    fn enum_union_and_input_extensions() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "enum Color { RED }\n",
                "extend enum Color { BLUE }\n",
                "type A { a: Int }\n",
                "type B { b: Int }\n",
                "union AB = A\n",
                "extend union AB = B\n",
                "input Filter { a: Int }\n",
                "extend input Filter { b: Int }\n",
                "scalar Url\n",
                "extend scalar Url @specifiedBy(url: \"https://example.com\")\n",
                "type Query { ab: AB color(filter: Filter): Color }",
            ))?
            .build()?;

        let color = schema.lookup_type("Color").unwrap().as_enum().unwrap();
        assert_eq!(color.values(), ["RED", "BLUE"]);

        let ab = schema.lookup_type("AB").unwrap().as_union().unwrap();
        assert_eq!(ab.member_names(), ["A", "B"]);

        let filter = schema.lookup_type("Filter").unwrap().as_input_object().unwrap();
        assert_eq!(filter.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nextend type Foo { b: Int }")
            .and_then(|builder| builder.build());
        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::ExtensionOfUndefinedType {
                type_name: "Foo".to_string(),
            },
        );
    }

    #[test]
    fn extension_of_wrong_kind() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }\nenum Foo { A }\nextend type Foo { b: Int }")
            .and_then(|builder| builder.build());
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType { type_name, .. }) if type_name == "Foo",
        ));
    }
}

mod errors {
    use super::*;

    #[test]
    fn duplicate_type_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")
            .and_then(|builder| builder.load_str(None, "type Query { b: Int }"));
        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition {
                type_name: "Query".to_string(),
            },
        );
    }

    #[test]
    fn redefining_builtin_scalar() {
        let result = SchemaBuilder::new().load_str(None, "scalar Int");
        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition {
                type_name: "Int".to_string(),
            },
        );
    }

    #[test]
    fn duplicate_operation_definition() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: A }\ntype A { a: Int }")
            .and_then(|builder| builder.load_str(None, "schema { query: B }"));
        assert_eq!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                type_name1: "A".to_string(),
                type_name2: "B".to_string(),
            },
        );
    }

    #[test]
    fn implicit_non_object_root_type_is_ignored() {
        let result = SchemaBuilder::new()
            .load_str(None, "scalar Query")
            .and_then(|builder| builder.build());
        assert_eq!(result.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);
    }

    #[test]
    fn explicit_root_type_must_be_defined() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Missing }")
            .and_then(|builder| builder.build());
        assert!(matches!(
            result,
            Err(SchemaBuildError::TypeValidationErrors { errors }) if errors.len() == 1,
        ));
    }
}
