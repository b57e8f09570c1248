//! Generator configuration: which field annotations are read.

use serde::{Deserialize, Serialize};
use tagschema_core::generator::{DEFAULT_NAMING_TAG, DEFAULT_VALIDATION_TAG};
use tagschema_core::{SchemaGenerator, TagKeys};

use crate::error::ConfigError;

fn default_naming_tag() -> String {
    DEFAULT_NAMING_TAG.to_string()
}

fn default_validation_tag() -> String {
    DEFAULT_VALIDATION_TAG.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Annotation key carrying `name[,omitempty]` or `-`.
    #[serde(default = "default_naming_tag")]
    pub naming_tag: String,

    /// Annotation key carrying `required,minimum=...` validation entries.
    #[serde(default = "default_validation_tag")]
    pub validation_tag: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            naming_tag: default_naming_tag(),
            validation_tag: default_validation_tag(),
        }
    }
}

impl GeneratorConfig {
    /// Reject empty or identical annotation keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("generator.naming_tag", &self.naming_tag),
            ("generator.validation_tag", &self.validation_tag),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.naming_tag == self.validation_tag {
            return Err(ConfigError::InvalidValue {
                field: "generator.validation_tag".to_string(),
                reason: format!("must differ from naming_tag ('{}')", self.naming_tag),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn tag_keys(&self) -> TagKeys {
        TagKeys {
            naming: self.naming_tag.clone(),
            validation: self.validation_tag.clone(),
        }
    }

    /// Build a generator reading the configured annotation keys.
    #[must_use]
    pub fn generator(&self) -> SchemaGenerator {
        SchemaGenerator::with_tags(self.tag_keys())
    }
}
