use crate::ast;
use crate::generator::VariableValues;

/// A generated query document along with a value for every variable it
/// defines.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedQuery {
    pub(crate) query_document: ast::query::Document,
    pub(crate) variable_values: VariableValues,
}
impl GeneratedQuery {
    pub fn into_parts(self) -> (ast::query::Document, VariableValues) {
        (self.query_document, self.variable_values)
    }

    /// The single operation defined by [`GeneratedQuery::query_document`].
    pub fn operation(&self) -> Option<&ast::query::OperationDefinition> {
        self.query_document.definitions.iter().find_map(|def| match def {
            ast::query::Definition::Operation(op) => Some(op),
            ast::query::Definition::Fragment(_) => None,
        })
    }

    pub fn query_document(&self) -> &ast::query::Document {
        &self.query_document
    }

    /// The printed form of [`GeneratedQuery::query_document`].
    pub fn query_string(&self) -> String {
        self.query_document.to_string()
    }

    pub fn variable_definitions(&self) -> &[ast::query::VariableDefinition] {
        use ast::query::OperationDefinition;
        match self.operation() {
            Some(OperationDefinition::Mutation(mutation)) =>
                &mutation.variable_definitions,
            Some(OperationDefinition::Query(query)) =>
                &query.variable_definitions,
            Some(OperationDefinition::Subscription(subscription)) =>
                &subscription.variable_definitions,
            Some(OperationDefinition::SelectionSet(_)) | None => &[],
        }
    }

    /// Values for the variables of [`GeneratedQuery::query_document`], keyed
    /// by variable name in resolution order. Serializes as a GraphQL request's
    /// `variables` payload.
    pub fn variable_values(&self) -> &VariableValues {
        &self.variable_values
    }
}
