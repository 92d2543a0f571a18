use crate::generator::Configuration;
use crate::generator::GenerationError;
use crate::generator::Provider;
use crate::generator::ProviderMap;
use crate::generator::VariableValues;
use crate::generator::provider::get_provider;
use crate::generator::provider::get_provider_value;
use crate::generator::provider::match_var_name;
use crate::types::GraphQLType;
use serde_json::json;

type Result<T> = std::result::Result<T, GenerationError>;

mod matching {
    use super::*;

    #[test]
    fn wildcard_patterns_match_by_segment() -> Result<()> {
        let matched = match_var_name(
            "Query__repository__name",
            ["*__*__name", "*__*__owner"],
        )?;
        assert_eq!(matched, Some("*__*__name"));
        Ok(())
    }

    #[test]
    fn exact_match_wins() -> Result<()> {
        assert_eq!(match_var_name("A__b", ["A__b", "A__*"])?, Some("A__b"));
        assert_eq!(match_var_name("A__b", ["A__*", "A__b"])?, Some("A__b"));
        Ok(())
    }

    #[test]
    fn first_matching_pattern_wins() -> Result<()> {
        let matched = match_var_name(
            "Query__user__login",
            ["*__user__*", "Query__*__login", "*__*__*"],
        )?;
        assert_eq!(matched, Some("*__user__*"));
        Ok(())
    }

    #[test]
    fn segment_counts_must_agree() -> Result<()> {
        assert_eq!(match_var_name("A__b", ["A__b__c", "*__*__*"])?, None);
        assert_eq!(match_var_name("A__b__c", ["A__b", "*__*"])?, None);
        Ok(())
    }

    #[test]
    fn wildcards_in_the_query_name_match_too() -> Result<()> {
        assert_eq!(match_var_name("*__x", ["A__x"])?, Some("A__x"));
        Ok(())
    }

    #[test]
    fn no_candidates() -> Result<()> {
        assert_eq!(match_var_name("A__b", Vec::<&str>::new())?, None);
        Ok(())
    }

    #[test]
    fn malformed_query_name() {
        assert_eq!(
            match_var_name("repository", ["*__*"]),
            Err(GenerationError::InvalidVariableNameFormat {
                name: "repository".to_string(),
            }),
        );
    }

    #[test]
    fn candidates_after_the_first_match_are_not_inspected() -> Result<()> {
        assert_eq!(
            match_var_name("A__b__c", ["*__*__c", "bad"])?,
            Some("*__*__c"),
        );
        Ok(())
    }

    #[test]
    fn underscore_runs_within_segments() -> Result<()> {
        assert_eq!(
            match_var_name("Query__user___id", ["*__user__id", "*__*___id"])?,
            Some("*__*___id"),
        );
        Ok(())
    }

    #[test]
    fn malformed_candidate() {
        assert_eq!(
            match_var_name("A__b", ["A__c", "A__b__c__d"]),
            Err(GenerationError::InvalidVariableNameFormat {
                name: "A__b__c__d".to_string(),
            }),
        );
    }
}

mod lookup {
    use super::*;

    #[test]
    fn no_provider_in_empty_map() {
        let provider_map = ProviderMap::new();
        let result = get_provider("X__y__z", &provider_map);
        assert_eq!(
            result.unwrap_err(),
            GenerationError::NoProviderFound {
                available_patterns: vec![],
                variable_name: "X__y__z".to_string(),
            },
        );
    }

    #[test]
    fn no_provider_lists_available_patterns() {
        let provider_map = ProviderMap::new()
            .with("*__*__name", Provider::literal("n"))
            .with("*__*__owner", Provider::literal("o"));
        let err = get_provider("Query__user__login", &provider_map).unwrap_err();
        assert_eq!(err, GenerationError::NoProviderFound {
            available_patterns: vec![
                "*__*__name".to_string(),
                "*__*__owner".to_string(),
            ],
            variable_name: "Query__user__login".to_string(),
        });
        assert!(err.to_string().contains("*__*__name, *__*__owner"));
    }

    #[test]
    fn literal_values_are_returned_unchanged() -> Result<()> {
        let config = Configuration::default().with_provider_map(
            ProviderMap::new().with("*__*__limit", Provider::literal(json!([1, 2]))),
        );
        let value = get_provider_value(
            "Query__search__limit",
            &config,
            &VariableValues::new(),
            None,
        )?;
        assert_eq!(value, json!([1, 2]));
        Ok(())
    }

    #[test]
    fn resolvers_see_resolved_values_and_argument_type() -> Result<()> {
        let config = Configuration::default().with_provider_map(
            [(
                "*__*__*",
                Provider::resolver(|resolved, arg_type| json!({
                    "resolved": resolved.len(),
                    "isInt": arg_type == Some(&GraphQLType::Int),
                })),
            )].into_iter().collect(),
        );

        let mut resolved = VariableValues::new();
        resolved.insert("Query__a__b".to_string(), json!(1));
        let value = get_provider_value(
            "Query__a__c",
            &config,
            &resolved,
            Some(&GraphQLType::Int),
        )?;
        assert_eq!(value, json!({ "resolved": 1, "isInt": true }));
        Ok(())
    }

    #[test]
    fn no_provider_map_configured() {
        let result = get_provider_value(
            "Query__a__b",
            &Configuration::default(),
            &VariableValues::new(),
            None,
        );
        assert!(matches!(result, Err(GenerationError::NoProviderFound { .. })));
    }

    #[test]
    fn reinserting_a_pattern_keeps_its_position() {
        let mut provider_map = ProviderMap::new();
        provider_map.insert("A__*", Provider::literal(1));
        provider_map.insert("*__b", Provider::literal(2));
        provider_map.insert("A__*", Provider::literal(3));

        assert_eq!(provider_map.patterns().collect::<Vec<_>>(), vec!["A__*", "*__b"]);
        assert!(matches!(
            get_provider("A__b", &provider_map),
            Ok(Provider::Literal(value)) if *value == json!(3),
        ));
    }

    #[test]
    fn providers_debug_print_without_their_functions() {
        assert!(format!("{:?}", Provider::literal(1)).starts_with("Literal("));
        assert_eq!(
            format!("{:?}", Provider::resolver(|_, _| json!(null))),
            "Resolver(..)",
        );
    }
}
