use crate::ast;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter),
/// [`InputField`](crate::types::InputField), or a generated variable.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub fn from_ast_type(ast_type: &ast::query::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::query::Type, nullable: bool) -> Self {
        match ast_type {
            ast::query::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_annotation: Box::new(
                        Self::from_ast_type_impl(inner, true),
                    ),
                    nullable,
                }),

            ast::query::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_owned(),
                }),

            ast::query::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the name of the
    /// inner-most named type.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List(list_annot) =>
                list_annot.inner_type_annotation.innermost_type_name(),
            Self::Named(named_annot) =>
                named_annot.type_name.as_str(),
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            Self::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// Indicates if a variable declared with this type may be passed to an
    /// argument (or input field) declared with `location_type`.
    ///
    /// `has_default` indicates that either the variable definition or the
    /// argument location provides a default value, which permits a nullable
    /// variable to flow into a non-null location.
    ///
    /// https://spec.graphql.org/October2021/#IsVariableUsageAllowed()
    pub fn is_usable_as(
        &self,
        location_type: &TypeAnnotation,
        has_default: bool,
    ) -> bool {
        if !location_type.nullable() && self.nullable() {
            if !has_default {
                return false;
            }
            return self.is_compatible_with(&location_type.with_nullable(true));
        }
        self.is_compatible_with(location_type)
    }

    /// https://spec.graphql.org/October2021/#AreTypesCompatible()
    fn is_compatible_with(&self, location_type: &TypeAnnotation) -> bool {
        if !location_type.nullable() {
            if self.nullable() {
                return false;
            }
            return self.with_nullable(true).is_compatible_with(
                &location_type.with_nullable(true),
            );
        }

        if !self.nullable() {
            return self.with_nullable(true).is_compatible_with(location_type);
        }

        match (self, location_type) {
            (Self::List(var_list), Self::List(loc_list)) =>
                var_list.inner_type_annotation.is_compatible_with(
                    &loc_list.inner_type_annotation,
                ),
            (Self::Named(var_named), Self::Named(loc_named)) =>
                var_named.type_name == loc_named.type_name,
            _ => false,
        }
    }

    /// Render this [`TypeAnnotation`] back into a `graphql_parser` type (e.g.
    /// for use in a variable definition).
    pub fn to_ast_type(&self) -> ast::query::Type {
        let inner = match self {
            Self::List(list_annot) => ast::query::Type::ListType(Box::new(
                list_annot.inner_type_annotation.to_ast_type(),
            )),
            Self::Named(named_annot) =>
                ast::query::Type::NamedType(named_annot.type_name.to_owned()),
        };

        if self.nullable() {
            inner
        } else {
            ast::query::Type::NonNullType(Box::new(inner))
        }
    }

    fn with_nullable(&self, nullable: bool) -> Self {
        match self {
            Self::List(list_annot) => Self::List(ListTypeAnnotation {
                inner_type_annotation: list_annot.inner_type_annotation.clone(),
                nullable,
            }),
            Self::Named(named_annot) => Self::Named(NamedTypeAnnotation {
                nullable,
                type_name: named_annot.type_name.to_owned(),
            }),
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation,
                if list_annot.nullable { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.type_name,
                if named_annot.nullable { "" } else { "!" },
            ),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_annotation: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
