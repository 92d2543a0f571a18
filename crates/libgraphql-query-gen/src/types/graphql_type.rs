use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type.
///
/// Callers should prefer the capability queries ([`GraphQLType::is_composite`],
/// [`GraphQLType::is_enum`], [`GraphQLType::is_scalar`], ...) over matching on
/// individual variants when all they need to know is how a type may be used.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The selectable fields of this type if it is an object or interface
    /// type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(iface) => Some(iface.fields()),
            Self::Object(obj) => Some(obj.fields()),
            _ => None,
        }
    }

    /// Indicates if this is a builtin scalar type (`Boolean`, `Float`, `ID`,
    /// `Int`, or `String`).
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String,
        )
    }

    /// Composite types (objects, interfaces, and unions) must be selected
    /// with a non-empty sub-selection.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Input types may be used as the type of a parameter, input field, or
    /// variable.
    pub fn is_input_type(&self) -> bool {
        self.is_leaf() || matches!(self, Self::InputObject(_))
    }

    /// Leaf types (scalars and enums) terminate a selection; they must be
    /// selected without a sub-selection.
    pub fn is_leaf(&self) -> bool {
        self.is_scalar() || self.is_enum()
    }

    /// Output types may be used as the type of a selectable field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    /// Indicates if this is a builtin or custom scalar type.
    pub fn is_scalar(&self) -> bool {
        self.is_builtin() || matches!(self, Self::Scalar(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }
}
