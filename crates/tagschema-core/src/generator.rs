//! The schema engine: walks a record descriptor and assembles its object schema.

use serde::{Deserialize, Serialize};

use crate::describe::Describe;
use crate::error::SchemaError;
use crate::schema::Schema;
use crate::tags::{NamingDirective, parse_constraints, parse_naming_directive};
use crate::types::{FieldDesc, RecordDesc, TypeDesc};

/// Default annotation key for the naming/omission channel.
pub const DEFAULT_NAMING_TAG: &str = "json";

/// Default annotation key for the validation channel.
pub const DEFAULT_VALIDATION_TAG: &str = "validate";

/// Which field annotations the generator reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagKeys {
    /// Key of the `name[,omitempty]` / `-` annotation.
    pub naming: String,
    /// Key of the `required,minimum=1,...` annotation.
    pub validation: String,
}

impl Default for TagKeys {
    fn default() -> Self {
        Self {
            naming: DEFAULT_NAMING_TAG.to_string(),
            validation: DEFAULT_VALIDATION_TAG.to_string(),
        }
    }
}

/// Generates JSON Schemas from type descriptors.
///
/// Stateless apart from the annotation keys: every call re-derives nested
/// record schemas, and a generator can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    keys: TagKeys,
}

impl SchemaGenerator {
    /// A generator reading the `json` and `validate` annotations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_tags(keys: TagKeys) -> Self {
        Self { keys }
    }

    #[must_use]
    pub const fn tag_keys(&self) -> &TagKeys {
        &self.keys
    }

    /// Generate the schema for a root descriptor.
    ///
    /// The root must be a record, or a single reference to one.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NilInput`] when `root` is `None`, and
    /// [`SchemaError::UnsupportedRootKind`] when the root is anything other
    /// than a record after one reference is stripped.
    pub fn generate(&self, root: Option<&TypeDesc>) -> Result<Schema, SchemaError> {
        let root = root.ok_or(SchemaError::NilInput)?;

        match root.pointee() {
            TypeDesc::Record(record) => {
                tracing::debug!(record = %record.name, "generating schema");
                let schema = self.build_object_schema(record);
                tracing::debug!(
                    record = %record.name,
                    properties = schema.properties.as_ref().map_or(0, |p| p.len()),
                    required = schema.required.len(),
                    "schema generated"
                );
                Ok(schema)
            }
            other => Err(SchemaError::UnsupportedRootKind {
                kind: other.kind_name().to_string(),
            }),
        }
    }

    /// Generate the schema for the type of `value`.
    ///
    /// # Errors
    ///
    /// As [`generate`](Self::generate); `None` is the nil input.
    pub fn generate_value<T: Describe + ?Sized>(
        &self,
        value: Option<&T>,
    ) -> Result<Schema, SchemaError> {
        let desc = value.map(|_| T::describe());
        self.generate(desc.as_ref())
    }

    /// Generate the schema for `T`.
    ///
    /// # Errors
    ///
    /// As [`generate`](Self::generate).
    pub fn schema_for<T: Describe + ?Sized>(&self) -> Result<Schema, SchemaError> {
        self.generate(Some(&T::describe()))
    }

    /// Build the closed object schema of a record.
    ///
    /// Private fields and fields annotated `-` are left out. Property order
    /// and `required` order follow field declaration order; `required` is
    /// omitted when no field is required.
    ///
    /// Two fields exposing the same property name share one `properties`
    /// entry (the later fragment wins) but each still lands in `required`,
    /// so the list can hold duplicates. Draft 6+ requires `required` items to
    /// be unique; give every field a distinct exposed name.
    #[must_use]
    pub fn build_object_schema(&self, record: &RecordDesc) -> Schema {
        let mut schema = Schema::closed_object();
        let mut properties = schema.properties.take().unwrap_or_default();
        let mut required = Vec::new();

        for field in record.fields.iter().filter(|f| f.exported) {
            let naming = parse_naming_directive(field.tags.get(&self.keys.naming));
            if naming.skip {
                tracing::trace!(record = %record.name, field = %field.name, "skipping field");
                continue;
            }

            let name = if naming.exposed_name.is_empty() {
                field.name.clone()
            } else {
                naming.exposed_name.clone()
            };

            let validation = field.tags.get(&self.keys.validation);
            let mut fragment = self.map_shape(&field.ty);
            for constraint in parse_constraints(validation) {
                fragment.apply(constraint);
            }

            let is_required = is_required(field, &naming, validation);
            tracing::trace!(
                record = %record.name,
                field = %field.name,
                property = %name,
                required = is_required,
                "mapped field"
            );

            if is_required {
                required.push(name.clone());
            }
            properties.insert(name, fragment);
        }

        schema.properties = Some(properties);
        schema.required = required;
        schema
    }
}

/// Requiredness, first match wins:
/// 1. `omitempty` on the naming annotation: not required
/// 2. `required` anywhere in the validation annotation: required
/// 3. no `omitempty` in the validation annotation and not a reference: required
/// 4. otherwise not required
///
/// Steps 2 and 3 are substring tests on the raw annotation.
fn is_required(field: &FieldDesc, naming: &NamingDirective, validation: &str) -> bool {
    if naming.omit_when_empty {
        return false;
    }

    if validation.contains("required") {
        return true;
    }

    !validation.contains("omitempty") && !field.ty.is_reference()
}
