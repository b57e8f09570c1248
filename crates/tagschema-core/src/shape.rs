//! Type-to-shape mapping.

use crate::generator::SchemaGenerator;
use crate::schema::{JsonType, Schema};
use crate::types::TypeDesc;

impl SchemaGenerator {
    /// The schema fragment describing only the shape of `ty`.
    ///
    /// One level of reference is looked through; a reference to a reference
    /// falls back like any other unsupported kind. Maps with non-textual keys
    /// degrade to a bare `{type: object}`.
    #[must_use]
    pub fn map_shape(&self, ty: &TypeDesc) -> Schema {
        match ty.pointee() {
            TypeDesc::Primitive(kind) => Schema::of(kind.json_type()),
            TypeDesc::Sequence(item) => Schema::array(self.map_shape(item)),
            TypeDesc::Map { key, value } if key.is_textual() => Schema::map(self.map_shape(value)),
            TypeDesc::Record(record) => self.build_object_schema(record),
            TypeDesc::Map { .. } | TypeDesc::Reference(_) | TypeDesc::Unsupported(_) => {
                Schema::of(JsonType::Object)
            }
        }
    }
}
