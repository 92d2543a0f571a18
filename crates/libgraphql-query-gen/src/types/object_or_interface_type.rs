use crate::ast;
use crate::types::Field;
use indexmap::IndexMap;
use inherent::inherent;

/// Behavior shared by [`ObjectType`] and [`InterfaceType`]: both declare an
/// ordered set of [`Field`]s that may be selected in an operation.
pub trait ObjectOrInterfaceTypeTrait {
    /// The fields of this type, in declaration order (fields added by type
    /// extensions follow the fields of the original definition).
    fn fields(&self) -> &IndexMap<String, Field>;

    /// Names of the interfaces this type declares that it implements.
    fn interface_names(&self) -> Vec<&str>;

    fn name(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(crate) fn new(
        name: &str,
        fields: &[ast::schema::Field],
        interfaces: &[String],
    ) -> Self {
        let mut data = Self {
            fields: IndexMap::new(),
            interfaces: vec![],
            name: name.to_owned(),
        };
        data.extend(fields, interfaces);
        data
    }

    pub(crate) fn extend(
        &mut self,
        fields: &[ast::schema::Field],
        interfaces: &[String],
    ) {
        for field in fields {
            self.fields.insert(field.name.to_owned(), Field::from_ast(field));
        }
        self.interfaces.extend(interfaces.iter().cloned());
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(|s| s.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Information associated with [`GraphQLType::Object`](crate::types::GraphQLType::Object).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}

/// Information associated with
/// [`GraphQLType::Interface`](crate::types::GraphQLType::Interface).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
