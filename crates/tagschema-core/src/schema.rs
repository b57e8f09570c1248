//! The JSON Schema document produced by the generator.
//!
//! Each keyword the generator can emit is a typed field on [`Schema`], so a
//! misspelled keyword is a compile error rather than a silently wrong document.
//! Serialization uses the JSON Schema spelling and skips absent keywords.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::tags::Constraint;

// ---------------------------------------------------------------------------
// JsonType
// ---------------------------------------------------------------------------

/// The `type` keyword values emitted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl JsonType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// String formats accepted by the `format=` validation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    DateTime,
    Time,
    Date,
    Duration,
    Email,
    Hostname,
    Ipv4,
    Ipv6,
    Uuid,
}

impl Format {
    pub const ALL: [Self; 9] = [
        Self::DateTime,
        Self::Time,
        Self::Date,
        Self::Duration,
        Self::Email,
        Self::Hostname,
        Self::Ipv4,
        Self::Ipv6,
        Self::Uuid,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateTime => "date-time",
            Self::Time => "time",
            Self::Date => "date",
            Self::Duration => "duration",
            Self::Email => "email",
            Self::Hostname => "hostname",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
            Self::Uuid => "uuid",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no supported [`Format`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

/// The `properties` mapping of an object schema, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, Schema)>);

impl Properties {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a property. A name that is already present keeps its position
    /// and takes the new fragment.
    pub fn insert(&mut self, name: impl Into<String>, schema: Schema) {
        let name = name.into();
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = schema;
        } else {
            self.0.push((name, schema));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, schema)| schema)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in &self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// AdditionalProperties
// ---------------------------------------------------------------------------

/// Value of the `additionalProperties` keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `false` closes a record schema; `true` is never emitted by the generator.
    Bool(bool),
    /// Schema every value of a string-keyed map must satisfy.
    Schema(Box<Schema>),
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// A schema fragment: either a bare type shape or a full object schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub ty: JsonType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
}

impl Schema {
    /// A one-keyword fragment `{type: ty}`.
    #[must_use]
    pub const fn of(ty: JsonType) -> Self {
        Self {
            ty,
            properties: None,
            required: Vec::new(),
            additional_properties: None,
            items: None,
            minimum: None,
            maximum: None,
            exclusive_minimum: None,
            exclusive_maximum: None,
            multiple_of: None,
            pattern: None,
            format: None,
            min_items: None,
            max_items: None,
        }
    }

    /// `{type: array, items: items}`.
    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(JsonType::Array)
        }
    }

    /// `{type: object, additionalProperties: values}`.
    #[must_use]
    pub fn map(values: Self) -> Self {
        Self {
            additional_properties: Some(AdditionalProperties::Schema(Box::new(values))),
            ..Self::of(JsonType::Object)
        }
    }

    /// `{type: object, properties: {}, additionalProperties: false}`.
    #[must_use]
    pub fn closed_object() -> Self {
        Self {
            properties: Some(Properties::new()),
            additional_properties: Some(AdditionalProperties::Bool(false)),
            ..Self::of(JsonType::Object)
        }
    }

    /// Merge one validation constraint into this fragment.
    pub fn apply(&mut self, constraint: Constraint) {
        match constraint {
            Constraint::Minimum(value) => self.minimum = Some(value),
            Constraint::Maximum(value) => self.maximum = Some(value),
            Constraint::ExclusiveMinimum(value) => self.exclusive_minimum = Some(value),
            Constraint::ExclusiveMaximum(value) => self.exclusive_maximum = Some(value),
            Constraint::MultipleOf(value) => self.multiple_of = Some(value),
            Constraint::Pattern(value) => self.pattern = Some(value),
            Constraint::Format(value) => self.format = Some(value),
            Constraint::MinItems(value) => self.min_items = Some(value),
            Constraint::MaxItems(value) => self.max_items = Some(value),
        }
    }

    /// Convert to a JSON value.
    ///
    /// # Panics
    ///
    /// Never in practice: every field is a string, a finite number, a bool,
    /// or a nested schema, all of which `serde_json` accepts.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("schema documents are always JSON-representable")
    }
}
