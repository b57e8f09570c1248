//! # tagschema-core
//!
//! JSON Schema generation from annotated record types.
//!
//! A record's fields carry two annotation strings: a naming annotation
//! (`json:"id,omitempty"`, `-` to skip) and a validation annotation
//! (`validate:"required,minimum=1,format=email"`). The generator walks the
//! record, maps each field type to a schema shape, merges the validation
//! constraints, decides requiredness, and returns a closed object schema.
//!
//! ```
//! use tagschema_core::{Describe, schema_for};
//!
//! #[derive(Describe)]
//! pub struct User {
//!     #[tag(validate = "required,minimum=1,maximum=100")]
//!     pub id: i64,
//!     pub name: String,
//!     #[tag(json = "email,omitempty", validate = "format=email")]
//!     pub email: String,
//! }
//!
//! let schema = schema_for::<User>().unwrap();
//! assert_eq!(schema.required, vec!["id", "name"]);
//! ```
//!
//! ## Modules
//! - [`tags`]: annotation parsing
//! - [`shape`]: type-to-shape mapping
//! - [`generator`]: record walking and requiredness
//! - [`schema`]: the typed schema document
//! - [`types`] / [`describe`]: type descriptors and how types produce them

pub mod describe;
pub mod error;
pub mod generator;
pub mod schema;
pub mod shape;
pub mod tags;
pub mod types;

pub use describe::Describe;
pub use error::SchemaError;
pub use generator::{SchemaGenerator, TagKeys};
pub use schema::{AdditionalProperties, Format, JsonType, Properties, Schema};
pub use tags::{Constraint, ConstraintSet, NamingDirective, parse_constraints, parse_naming_directive};
pub use types::{FieldDesc, FieldTags, PrimitiveKind, RecordDesc, TypeDesc};

#[cfg(feature = "derive")]
pub use tagschema_derive::Describe;

/// Generate the schema for the type of `value` with the default annotation keys.
///
/// # Errors
///
/// [`SchemaError::NilInput`] for `None`, [`SchemaError::UnsupportedRootKind`]
/// when `T` is not a record or a single reference to one.
pub fn generate<T: Describe + ?Sized>(value: Option<&T>) -> Result<Schema, SchemaError> {
    SchemaGenerator::new().generate_value(value)
}

/// Generate the schema for `T` with the default annotation keys.
///
/// # Errors
///
/// [`SchemaError::UnsupportedRootKind`] when `T` is not a record or a single
/// reference to one.
pub fn schema_for<T: Describe + ?Sized>() -> Result<Schema, SchemaError> {
    SchemaGenerator::new().schema_for::<T>()
}
