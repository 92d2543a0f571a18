mod enum_type;
mod field;
mod graphql_type;
mod input_field;
mod input_object_type;
mod object_or_interface_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod union_type;

pub use enum_type::EnumType;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use object_or_interface_type::InterfaceType;
pub(crate) use object_or_interface_type::ObjectOrInterfaceTypeData;
pub use object_or_interface_type::ObjectOrInterfaceTypeTrait;
pub use object_or_interface_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;
