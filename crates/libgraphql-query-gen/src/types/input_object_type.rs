use crate::types::InputField;
use indexmap::IndexMap;

/// Information associated with
/// [`GraphQLType::InputObject`](crate::types::GraphQLType::InputObject).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
