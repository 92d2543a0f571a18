//! Randomized, schema-valid GraphQL query generation.
//!
//! Given a [`Schema`](schema::Schema) and a
//! [`Configuration`](generator::Configuration), this crate walks the schema's
//! type graph and produces an executable query document together with a
//! concrete value for every variable the document declares. The output is
//! intended for fuzz and property testing of GraphQL servers: print the
//! document with [`std::fmt::Display`], serialize the variable values as the
//! request's `variables` payload, and send both.
//!
//! ```
//! use libgraphql_query_gen::generator::Configuration;
//! use libgraphql_query_gen::generator::generate_random_query;
//! use libgraphql_query_gen::schema::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new()
//!     .load_str(None, "type Query { hello(name: String!): String }")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let generated = generate_random_query(&schema, &Configuration::default())
//!     .unwrap();
//! assert_eq!(
//!     generated.variable_values().len(),
//!     generated.variable_definitions().len(),
//! );
//! ```

pub mod ast;
mod file_reader;
pub mod generator;
pub mod schema;
pub mod types;
pub mod validation;

pub use file_reader::ReadContentError;
pub use schema::Schema;
