use crate::generator::enum_sampler;
use crate::generator::tests::test_utils;
use crate::types::GraphQLType;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

#[test]
fn is_enum_type_by_kind() {
    let schema = test_utils::build_schema(test_utils::FULL_SCHEMA_SRC);
    assert!(enum_sampler::is_enum_type(schema.lookup_type("Visibility").unwrap()));
    assert!(!enum_sampler::is_enum_type(schema.lookup_type("String").unwrap()));
    assert!(!enum_sampler::is_enum_type(schema.lookup_type("IssueFilter").unwrap()));
}

#[test]
fn random_enum_samples_every_declared_value() {
    let schema = test_utils::build_schema(test_utils::FULL_SCHEMA_SRC);
    let visibility = schema.lookup_type("Visibility").unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let sampled = (0..200)
        .map(|_| enum_sampler::random_enum(visibility, &mut rng).unwrap())
        .collect::<HashSet<_>>();
    assert_eq!(sampled, HashSet::from(["PUBLIC", "PRIVATE", "INTERNAL"]));
}

#[test]
fn random_enum_of_non_enum_type() {
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(enum_sampler::random_enum(&GraphQLType::Int, &mut rng), None);
}
