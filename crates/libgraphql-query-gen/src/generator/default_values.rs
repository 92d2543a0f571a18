use crate::generator::GenerationError;
use crate::generator::enum_sampler;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use rand::Rng;
use serde_json::json;

type Result<T> = std::result::Result<T, GenerationError>;

pub const DEFAULT_FLOAT: f64 = 10.0;
pub const DEFAULT_INT: i64 = 10;
pub const DEFAULT_STRING: &str = "PLACEHOLDER";

/// Build a value of the given input type without consulting any provider.
///
/// Lists hold exactly one item and input objects hold every required field
/// (optional input fields are left out).
pub fn value_for_type<R: Rng>(
    schema: &Schema,
    type_annot: &TypeAnnotation,
    rng: &mut R,
) -> Result<serde_json::Value> {
    if let TypeAnnotation::List(list_annot) = type_annot {
        let item = value_for_type(schema, list_annot.inner_type_annotation(), rng)?;
        return Ok(json!([item]));
    }

    let type_name = type_annot.innermost_type_name();
    let graphql_type = schema.lookup_type(type_name)
        .ok_or_else(|| GenerationError::UndefinedTypeReference {
            type_name: type_name.to_string(),
        })?;
    value_for_named_type(schema, graphql_type, rng)
}

fn value_for_named_type<R: Rng>(
    schema: &Schema,
    graphql_type: &GraphQLType,
    rng: &mut R,
) -> Result<serde_json::Value> {
    Ok(match graphql_type {
        GraphQLType::Bool => json!(true),
        GraphQLType::Float => json!(DEFAULT_FLOAT),
        GraphQLType::Int => json!(DEFAULT_INT),
        GraphQLType::ID
            | GraphQLType::Scalar(_)
            | GraphQLType::String => json!(DEFAULT_STRING),

        GraphQLType::Enum(_) =>
            match enum_sampler::random_enum(graphql_type, rng) {
                Some(value) => json!(value),
                None => serde_json::Value::Null,
            },

        GraphQLType::InputObject(input_obj) => {
            let mut fields = serde_json::Map::new();
            for field in input_obj.fields().values() {
                if !field.is_required() {
                    continue;
                }
                fields.insert(
                    field.name().to_string(),
                    value_for_type(schema, field.type_annotation(), rng)?,
                );
            }
            serde_json::Value::Object(fields)
        },

        GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => return Err(
                GenerationError::UndefinedTypeReference {
                    type_name: graphql_type.name().to_string(),
                }
            ),
    })
}
