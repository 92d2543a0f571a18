use crate::schema::OperationKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error(
        "`{setting}` must be a probability between 0.0 and 1.0 (inclusive), \
        but was {value}"
    )]
    InvalidProbability {
        setting: &'static str,
        value: f64,
    },

    #[error(
        "`{name}` is not a well-formed variable name or pattern. Expected 2 or \
        3 non-empty segments separated by `__` (e.g. `Query__user__id`)"
    )]
    InvalidVariableNameFormat {
        name: String,
    },

    #[error(
        "No provider found for variable `{variable_name}`. Available \
        patterns: [{}]",
        available_patterns.join(", "),
    )]
    NoProviderFound {
        available_patterns: Vec<String>,
        variable_name: String,
    },

    #[error(
        "No field of `{type_name}` reaches a scalar or enum field within a \
        depth of {depth}"
    )]
    SchemaExhausted {
        depth: usize,
        type_name: String,
    },

    #[error("The schema does not define a {operation} root operation type")]
    UndefinedRootOperationType {
        operation: OperationKind,
    },

    #[error("Encountered a reference to `{type_name}`, which is not defined")]
    UndefinedTypeReference {
        type_name: String,
    },
}
