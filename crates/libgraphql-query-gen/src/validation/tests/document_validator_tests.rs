use crate::ast;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::validation::DocumentValidationError;
use crate::validation::validate_document;

const SCHEMA_SRC: &str = include_str!("../../../fixtures/schema.graphql");

fn schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, SCHEMA_SRC)
        .unwrap()
        .build()
        .unwrap()
}

fn errors(document_src: &str) -> Vec<DocumentValidationError> {
    let document = ast::query::parse(document_src).unwrap();
    validate_document(&schema(), &document)
}

fn assert_valid(document_src: &str) {
    let found = errors(document_src);
    assert!(found.is_empty(), "{found:#?}");
}

mod valid {
    use super::*;

    #[test]
    fn simple_query() {
        assert_valid("{ version }");
    }

    #[test]
    fn query_with_variables_fragments_and_aliases() {
        let document_src = r#"
            query Repo($name: String!, $owner: String!, $first: Int) {
                repository(name: $name, owner: $owner) {
                    ...RepoFields
                    owner {
                        __typename
                        ... on User { login repositories(first: $first) { id } }
                        ... on Organization { orgLogin: login }
                    }
                }
            }

            fragment RepoFields on Repository {
                id
                name
                issues(filter: { state: OPEN }) { title }
            }
        "#;
        assert_valid(document_src);
    }

    #[test]
    fn same_response_name_on_exclusive_object_types() {
        let document_src = r#"
            query($term: String!) {
                search(term: $term) {
                    ... on User { repos: repositories(first: 1) { id } }
                    ... on Organization { repos: repositories(first: 2) { id } }
                }
            }
        "#;
        assert_valid(document_src);
    }

    #[test]
    fn nullable_variable_with_default_in_non_null_position() {
        let document_src = r#"
            query($login: String = "octocat") { user(login: $login) { id } }
        "#;
        assert_valid(document_src);
    }

    #[test]
    fn variables_nested_in_input_objects_and_lists() {
        let document_src = r#"
            query($state: IssueState!, $label: String!) {
                repository(name: "a", owner: "b") {
                    issues(states: [$state], filter: { state: $state, labels: [$label] }) {
                        id
                    }
                }
            }
        "#;
        assert_valid(document_src);
    }
}

mod fields {
    use super::*;

    #[test]
    fn unknown_field() {
        assert_eq!(errors("{ nope }"), vec![DocumentValidationError::UnknownField {
            field_name: "nope".to_string(),
            parent_type_name: "Query".to_string(),
        }]);
    }

    #[test]
    fn leaf_with_selection() {
        assert_eq!(errors("{ version { length } }"), vec![
            DocumentValidationError::LeafFieldWithSelection {
                field_name: "version".to_string(),
                parent_type_name: "Query".to_string(),
            },
        ]);
    }

    #[test]
    fn composite_without_selection() {
        assert_eq!(errors("{ node(id: \"1\") }"), vec![
            DocumentValidationError::MissingSelection {
                field_name: "node".to_string(),
                parent_type_name: "Query".to_string(),
            },
        ]);
    }

    #[test]
    fn union_fields_require_fragments() {
        assert_eq!(errors("{ search(term: \"x\") { login } }"), vec![
            DocumentValidationError::UnknownField {
                field_name: "login".to_string(),
                parent_type_name: "Owner".to_string(),
            },
        ]);
    }

    #[test]
    fn conflicting_response_names() {
        assert_eq!(errors("{ user(login: \"a\") { id: login id } }"), vec![
            DocumentValidationError::FieldsConflict {
                field_name1: "login".to_string(),
                field_name2: "id".to_string(),
                response_name: "id".to_string(),
            },
        ]);
    }

    #[test]
    fn conflicting_arguments() {
        let document_src = r#"{
            a: user(login: "a") { id }
            a: user(login: "b") { id }
        }"#;
        assert!(matches!(
            errors(document_src).as_slice(),
            [DocumentValidationError::FieldsConflict { response_name, .. }] if response_name == "a",
        ));
    }
}

mod arguments {
    use super::*;

    #[test]
    fn unknown_argument() {
        assert_eq!(errors("{ version(x: 1) }"), vec![
            DocumentValidationError::UnknownArgument {
                argument_name: "x".to_string(),
                field_name: "version".to_string(),
                parent_type_name: "Query".to_string(),
            },
        ]);
    }

    #[test]
    fn duplicate_argument() {
        assert_eq!(errors("{ user(login: \"a\", login: \"b\") { id } }"), vec![
            DocumentValidationError::DuplicateArgument {
                argument_name: "login".to_string(),
                field_name: "user".to_string(),
            },
        ]);
    }

    #[test]
    fn missing_required_argument() {
        assert_eq!(errors("{ repository(name: \"a\") { id } }"), vec![
            DocumentValidationError::MissingRequiredArgument {
                argument_name: "owner".to_string(),
                field_name: "repository".to_string(),
                parent_type_name: "Query".to_string(),
            },
        ]);
    }
}

mod fragments {
    use super::*;

    #[test]
    fn undefined_fragment() {
        assert_eq!(errors("{ ...Missing }"), vec![
            DocumentValidationError::UndefinedFragment {
                fragment_name: "Missing".to_string(),
            },
        ]);
    }

    #[test]
    fn circular_fragment_spread() {
        let document_src = r#"
            { user(login: "a") { ...A } }
            fragment A on User { id ...B }
            fragment B on User { login ...A }
        "#;
        assert_eq!(errors(document_src), vec![
            DocumentValidationError::CircularFragmentSpread {
                fragment_name: "A".to_string(),
            },
        ]);
    }

    #[test]
    fn undefined_type_condition() {
        assert_eq!(errors("{ ... on Nope { version } }"), vec![
            DocumentValidationError::UndefinedType {
                type_name: "Nope".to_string(),
            },
        ]);
    }

    #[test]
    fn non_composite_type_condition() {
        assert_eq!(errors("{ ... on String { version } }"), vec![
            DocumentValidationError::NonCompositeTypeCondition {
                type_name: "String".to_string(),
            },
        ]);
    }

    #[test]
    fn inapplicable_type_condition() {
        assert_eq!(errors("{ user(login: \"a\") { ... on Issue { title } } }"), vec![
            DocumentValidationError::InapplicableFragment {
                parent_type_name: "User".to_string(),
                type_condition: "Issue".to_string(),
            },
        ]);
    }

    #[test]
    fn interface_fragment_within_union() {
        assert_valid("{ search(term: \"x\") { ... on Node { id } } }");
    }
}

mod variables {
    use super::*;

    #[test]
    fn undefined_variable() {
        assert_eq!(errors("{ user(login: $login) { id } }"), vec![
            DocumentValidationError::UndefinedVariable {
                variable_name: "login".to_string(),
            },
        ]);
    }

    #[test]
    fn unused_variable() {
        assert_eq!(errors("query($unused: Int) { version }"), vec![
            DocumentValidationError::UnusedVariable {
                variable_name: "unused".to_string(),
            },
        ]);
    }

    #[test]
    fn duplicate_variable() {
        assert_eq!(
            errors("query($a: String!, $a: String!) { user(login: $a) { id } }"),
            vec![DocumentValidationError::DuplicateVariable {
                variable_name: "a".to_string(),
            }],
        );
    }

    #[test]
    fn non_input_variable_type() {
        let found = errors("query($u: User) { version }");
        assert!(found.contains(&DocumentValidationError::NonInputVariableType {
            type_name: "User".to_string(),
            variable_name: "u".to_string(),
        }));
    }

    #[test]
    fn incompatible_variable_usage() {
        assert_eq!(errors("query($login: String) { user(login: $login) { id } }"), vec![
            DocumentValidationError::IncompatibleVariableUsage {
                argument_name: "login".to_string(),
                expected_type: "String!".to_string(),
                variable_name: "login".to_string(),
                variable_type: "String".to_string(),
            },
        ]);
    }

    #[test]
    fn mismatched_named_types() {
        assert_eq!(errors("query($id: Int!) { node(id: $id) { id } }").len(), 1);
    }
}

mod operations {
    use super::*;

    #[test]
    fn subscription_with_multiple_root_fields() {
        let document_src = r#"
            subscription { a: starCount(repositoryId: "1") b: starCount(repositoryId: "2") }
        "#;
        assert_eq!(errors(document_src), vec![
            DocumentValidationError::MultipleSubscriptionRootFields { count: 2 },
        ]);
    }

    #[test]
    fn undefined_root_operation_type() {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")
            .unwrap()
            .build()
            .unwrap();
        let document = ast::query::parse("mutation { a }").unwrap();
        assert_eq!(validate_document(&schema, &document), vec![
            DocumentValidationError::UndefinedRootOperationType {
                operation: OperationKind::Mutation,
            },
        ]);
    }
}

mod response_shapes {
    use super::*;

    const UNION_SCHEMA_SRC: &str = r#"
        type Query { u: U }
        union U = A | B
        type A { id: ID id_B: String child: C count: Int! }
        type B { id: Int child: D count: Int }
        type C { v: Int }
        type D { v: Int w: String }
    "#;

    fn union_errors(document_src: &str) -> Vec<DocumentValidationError> {
        let schema = SchemaBuilder::new()
            .load_str(None, UNION_SCHEMA_SRC)
            .unwrap()
            .build()
            .unwrap();
        let document = ast::query::parse(document_src).unwrap();
        validate_document(&schema, &document)
    }

    #[test]
    fn differing_leaf_types_on_exclusive_object_types() {
        assert_eq!(union_errors("{ u { ... on A { id id_B } ... on B { id_B: id } } }"), vec![
            DocumentValidationError::IncompatibleResponseShapes {
                field_name1: "id_B".to_string(),
                field_name2: "id".to_string(),
                response_name: "id_B".to_string(),
            },
        ]);
    }

    #[test]
    fn differing_nullability() {
        assert_eq!(union_errors("{ u { ... on A { count } ... on B { count } } }"), vec![
            DocumentValidationError::IncompatibleResponseShapes {
                field_name1: "count".to_string(),
                field_name2: "count".to_string(),
                response_name: "count".to_string(),
            },
        ]);
    }

    #[test]
    fn differing_nested_shapes() {
        let document_src = "{ u { ... on A { child { x: v } } ... on B { child { x: w } } } }";
        assert_eq!(union_errors(document_src), vec![
            DocumentValidationError::IncompatibleResponseShapes {
                field_name1: "child".to_string(),
                field_name2: "child".to_string(),
                response_name: "child".to_string(),
            },
        ]);
    }

    #[test]
    fn matching_nested_shapes() {
        let found = union_errors("{ u { ... on A { child { v } } ... on B { child { v } } } }");
        assert!(found.is_empty(), "{found:#?}");
    }
}
