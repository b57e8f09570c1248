//! Type descriptors: the read-only view of a type the generator walks.
//!
//! Descriptors are normally produced by [`Describe`](crate::Describe) (by hand
//! or via `#[derive(Describe)]`), and can also be deserialized from JSON for
//! producers outside Rust.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::JsonType;

/// Scalar kinds with a direct JSON Schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    String,
    Char,
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl PrimitiveKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// The JSON Schema type this kind maps to.
    #[must_use]
    pub const fn json_type(self) -> JsonType {
        match self {
            Self::String | Self::Char => JsonType::String,
            Self::Bool => JsonType::Boolean,
            Self::F32 | Self::F64 => JsonType::Number,
            Self::I8
            | Self::I16
            | Self::I32
            | Self::I64
            | Self::I128
            | Self::Isize
            | Self::U8
            | Self::U16
            | Self::U32
            | Self::U64
            | Self::U128
            | Self::Usize => JsonType::Integer,
        }
    }

    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::String | Self::Char)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural description of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDesc {
    Primitive(PrimitiveKind),
    /// Array, vector, set, or any other homogeneous sequence.
    Sequence(Box<TypeDesc>),
    Map {
        key: Box<TypeDesc>,
        value: Box<TypeDesc>,
    },
    Record(RecordDesc),
    /// A nilable reference to another type.
    Reference(Box<TypeDesc>),
    /// A kind with no JSON Schema analogue, named for diagnostics.
    Unsupported(String),
}

impl TypeDesc {
    #[must_use]
    pub fn sequence(item: Self) -> Self {
        Self::Sequence(Box::new(item))
    }

    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    #[must_use]
    pub fn reference(target: Self) -> Self {
        Self::Reference(Box::new(target))
    }

    #[must_use]
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported(kind.into())
    }

    /// Name of this descriptor's kind, as used in error messages.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Primitive(kind) => kind.as_str(),
            Self::Sequence(_) => "sequence",
            Self::Map { .. } => "map",
            Self::Record(_) => "record",
            Self::Reference(_) => "reference",
            Self::Unsupported(kind) => kind,
        }
    }

    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }

    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self, Self::Primitive(kind) if kind.is_textual())
    }

    /// Strip one level of reference, if any.
    #[must_use]
    pub fn pointee(&self) -> &Self {
        match self {
            Self::Reference(target) => target,
            other => other,
        }
    }
}

impl From<PrimitiveKind> for TypeDesc {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl From<RecordDesc> for TypeDesc {
    fn from(record: RecordDesc) -> Self {
        Self::Record(record)
    }
}

/// A record type: named fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDesc {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDesc>,
}

impl RecordDesc {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field (builder style).
    #[must_use]
    pub fn field(mut self, field: FieldDesc) -> Self {
        self.fields.push(field);
        self
    }
}

/// One member of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDesc {
    pub name: String,
    /// Only exported (public) fields take part in the schema.
    #[serde(default = "default_exported")]
    pub exported: bool,
    #[serde(rename = "type")]
    pub ty: TypeDesc,
    #[serde(default)]
    pub tags: FieldTags,
}

const fn default_exported() -> bool {
    true
}

impl FieldDesc {
    /// An exported field with no annotations.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<TypeDesc>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            ty: ty.into(),
            tags: FieldTags::default(),
        }
    }

    #[must_use]
    pub const fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Attach an annotation (builder style).
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }
}

/// Raw annotation strings attached to a field, keyed by channel name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldTags(Vec<(String, String)>);

impl FieldTags {
    /// Raw annotation for `key`, or `""` when the field carries none.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Set the annotation for `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }
}
