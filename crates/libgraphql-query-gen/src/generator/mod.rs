//! Random operation generation against a [`Schema`].

mod configuration;
mod default_values;
pub mod enum_sampler;
mod generated_query;
mod generation_error;
pub mod provider;
mod schema_walker;
mod variable_name;

pub use configuration::Configuration;
pub use default_values::DEFAULT_FLOAT;
pub use default_values::DEFAULT_INT;
pub use default_values::DEFAULT_STRING;
pub use generated_query::GeneratedQuery;
pub use generation_error::GenerationError;
pub use provider::Provider;
pub use provider::ProviderFn;
pub use provider::ProviderMap;
pub use schema_walker::operation_name;
pub use variable_name::SEGMENT_SEPARATOR;
pub use variable_name::VariableName;
pub use variable_name::VariableNamer;
pub use variable_name::split_segments;

use crate::schema::Schema;
use indexmap::IndexMap;
use rand::Rng;
use schema_walker::SchemaWalker;

/// Concrete variable values keyed by variable name, in resolution order.
pub type VariableValues = IndexMap<String, serde_json::Value>;

/// Generate a random operation (per [`Configuration::operation_kind`])
/// against `schema` using the thread-local random number generator.
pub fn generate_random_query(
    schema: &Schema,
    config: &Configuration,
) -> Result<GeneratedQuery, GenerationError> {
    generate_random_query_with_rng(schema, config, &mut rand::rng())
}

/// Same as [`generate_random_query`], but draws every random decision from
/// `rng`. Passing a seeded generator makes the output reproducible.
pub fn generate_random_query_with_rng<R: Rng>(
    schema: &Schema,
    config: &Configuration,
    rng: &mut R,
) -> Result<GeneratedQuery, GenerationError> {
    SchemaWalker::new(schema, config, rng).generate()
}

#[cfg(test)]
mod tests;
