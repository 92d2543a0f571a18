//! Validation of executable documents against a [`Schema`](crate::Schema).

mod document_validation_error;
mod document_validator;

pub use document_validation_error::DocumentValidationError;

use crate::ast;
use crate::schema::Schema;
use document_validator::DocumentValidator;

/// Check every operation (and every fragment reachable from one) in
/// `document` against `schema`. Returns an empty list for a valid document.
pub fn validate_document(
    schema: &Schema,
    document: &ast::query::Document,
) -> Vec<DocumentValidationError> {
    DocumentValidator::new(schema, document).validate()
}

#[cfg(test)]
mod tests;
