use crate::schema::OperationKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentValidationError {
    #[error("Fragment `{fragment_name}` spreads itself (directly or indirectly)")]
    CircularFragmentSpread {
        fragment_name: String,
    },

    #[error("Argument `{argument_name}` is passed more than once to `{field_name}`")]
    DuplicateArgument {
        argument_name: String,
        field_name: String,
    },

    #[error("Variable `${variable_name}` is defined more than once")]
    DuplicateVariable {
        variable_name: String,
    },

    #[error(
        "Response name `{response_name}` selects conflicting fields \
        (`{field_name1}` and `{field_name2}`) or arguments"
    )]
    FieldsConflict {
        field_name1: String,
        field_name2: String,
        response_name: String,
    },

    #[error(
        "A fragment on `{type_condition}` can never apply within a selection \
        on `{parent_type_name}`"
    )]
    InapplicableFragment {
        parent_type_name: String,
        type_condition: String,
    },

    #[error(
        "Response name `{response_name}` selects `{field_name1}` and \
        `{field_name2}`, whose responses differ in shape"
    )]
    IncompatibleResponseShapes {
        field_name1: String,
        field_name2: String,
        response_name: String,
    },

    #[error(
        "Variable `${variable_name}` of type `{variable_type}` cannot be passed \
        to argument `{argument_name}` of type `{expected_type}`"
    )]
    IncompatibleVariableUsage {
        argument_name: String,
        expected_type: String,
        variable_name: String,
        variable_type: String,
    },

    #[error("`{parent_type_name}.{field_name}` is a leaf field and cannot have a selection set")]
    LeafFieldWithSelection {
        field_name: String,
        parent_type_name: String,
    },

    #[error("`{parent_type_name}.{field_name}` requires argument `{argument_name}`")]
    MissingRequiredArgument {
        argument_name: String,
        field_name: String,
        parent_type_name: String,
    },

    #[error("`{parent_type_name}.{field_name}` is of a composite type and requires a selection set")]
    MissingSelection {
        field_name: String,
        parent_type_name: String,
    },

    #[error("Subscription operations must select exactly one root field (found {count})")]
    MultipleSubscriptionRootFields {
        count: usize,
    },

    #[error("Fragment type condition `{type_name}` is not an object, interface, or union type")]
    NonCompositeTypeCondition {
        type_name: String,
    },

    #[error("Variable `${variable_name}` is declared with non-input type `{type_name}`")]
    NonInputVariableType {
        type_name: String,
        variable_name: String,
    },

    #[error("The schema defines no {operation} root operation type")]
    UndefinedRootOperationType {
        operation: OperationKind,
    },

    #[error("Fragment `{fragment_name}` is not defined")]
    UndefinedFragment {
        fragment_name: String,
    },

    #[error("Type `{type_name}` is not defined")]
    UndefinedType {
        type_name: String,
    },

    #[error("Variable `${variable_name}` is used but not defined")]
    UndefinedVariable {
        variable_name: String,
    },

    #[error("`{parent_type_name}.{field_name}` has no argument named `{argument_name}`")]
    UnknownArgument {
        argument_name: String,
        field_name: String,
        parent_type_name: String,
    },

    #[error("Type `{parent_type_name}` has no field named `{field_name}`")]
    UnknownField {
        field_name: String,
        parent_type_name: String,
    },

    #[error("Variable `${variable_name}` is defined but never used")]
    UnusedVariable {
        variable_name: String,
    },
}
