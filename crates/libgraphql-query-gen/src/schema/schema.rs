use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use std::collections::HashMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// This map includes both types defined while building this [`Schema`] as
    /// well as the implicitly-defined, built-in scalar types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().and_then(|name| self.lookup_type(name))
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// GraphQL defines an object type named "Query" as the _default_ Query
    /// type, but a `schema { query: ... }` block may override this default.
    /// This method factors in any such override.
    pub fn query_type(&self) -> &GraphQLType {
        self.lookup_type(self.query_type.as_str())
            .expect("type is present in schema")
    }

    /// Returns the root operation type for the given [`OperationKind`] (if
    /// this [`Schema`] defines one).
    pub fn root_operation_type(
        &self,
        operation_kind: OperationKind,
    ) -> Option<&GraphQLType> {
        match operation_kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().and_then(|name| self.lookup_type(name))
    }
}
