use crate::types::GraphQLType;
use rand::Rng;

pub fn is_enum_type(graphql_type: &GraphQLType) -> bool {
    graphql_type.is_enum()
}

/// Pick one of the declared values of an enum type uniformly at random.
///
/// Returns `None` if `graphql_type` is not an enum (or declares no values).
pub fn random_enum<'t, R: Rng>(
    graphql_type: &'t GraphQLType,
    rng: &mut R,
) -> Option<&'t str> {
    let values = graphql_type.as_enum()?.values();
    if values.is_empty() {
        return None;
    }
    Some(values[rng.random_range(0..values.len())].as_str())
}
