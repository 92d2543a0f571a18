/// Information associated with [`GraphQLType::Enum`](crate::types::GraphQLType::Enum).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared values of this enum, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
