/// Information associated with [`GraphQLType::Union`](crate::types::GraphQLType::Union).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    /// Names of the object types that are members of this union, in
    /// declaration order.
    pub fn member_names(&self) -> &[String] {
        &self.members
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
