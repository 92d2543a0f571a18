use crate::schema::OperationKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable field. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error("Enum types must define one or more values: `{type_name}` defines none")]
    EnumWithNoValues {
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{non_interface_type_name}`, which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter of `{parent_type_name}.{field_name}` was \
        declared with the `{invalid_type_name}` type, which is not an input \
        type"
    )]
    InvalidParameterWithOutputType {
        field_name: String,
        invalid_type_name: String,
        parameter_name: String,
        parent_type_name: String,
    },

    #[error(
        "The `{union_name}` union declares `{member_name}` as a member, but \
        union members must be object types"
    )]
    NonObjectUnionMember {
        member_name: String,
        union_name: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` must be an object \
        type"
    )]
    RootOperationTypeIsNotObject {
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type was declared as `{type_name}`, \
        but no such type is defined"
    )]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("`{referenced_by}` references the undefined type `{undefined_type_name}`")]
    UndefinedTypeName {
        referenced_by: String,
        undefined_type_name: String,
    },
}
