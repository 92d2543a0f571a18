/// A custom (non-builtin) scalar type.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) name: String,
}
impl ScalarType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
