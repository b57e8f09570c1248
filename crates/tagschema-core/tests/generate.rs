//! End-to-end generation tests over derived descriptors.

use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;
use serde_json::json;
use tagschema_core::{Describe, SchemaError, generate, schema_for};

fn schema_json<T: Describe + ?Sized>() -> serde_json::Value {
    schema_for::<T>().expect("record root").to_value()
}

#[derive(Describe)]
pub struct Basic {
    pub name: String,
    pub age: i32,
    pub score: f64,
    pub active: bool,
}

#[test]
fn basic_types() {
    assert_eq!(
        schema_json::<Basic>(),
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "integer"},
                "score": {"type": "number"},
                "active": {"type": "boolean"}
            },
            "required": ["name", "age", "score", "active"],
            "additionalProperties": false
        })
    );
}

#[derive(Describe)]
pub struct Tagged {
    #[tag(json = "id")]
    pub identifier: i64,
    #[tag(json = "name")]
    pub full_name: String,
    #[tag(json = "email,omitempty")]
    pub email: String,
    #[tag(json = "-")]
    pub password: String,
}

#[test]
fn naming_annotations() {
    assert_eq!(
        schema_json::<Tagged>(),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer"},
                "name": {"type": "string"},
                "email": {"type": "string"}
            },
            "required": ["id", "name"],
            "additionalProperties": false
        })
    );
}

#[derive(Describe)]
pub struct Address {
    pub street: String,
    pub city: String,
}

#[derive(Describe)]
pub struct Person {
    pub name: String,
    pub address: Address,
}

#[test]
fn nested_records() {
    assert_eq!(
        schema_json::<Person>(),
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "address": {
                    "type": "object",
                    "properties": {
                        "street": {"type": "string"},
                        "city": {"type": "string"}
                    },
                    "required": ["street", "city"],
                    "additionalProperties": false
                }
            },
            "required": ["name", "address"],
            "additionalProperties": false
        })
    );
}

#[derive(Describe)]
pub struct Collections {
    pub tags: Vec<String>,
    pub numbers: [u16; 3],
    pub metadata: HashMap<String, String>,
    pub config: BTreeMap<String, i32>,
    pub by_id: HashMap<u64, String>,
}

#[test]
fn sequences_and_maps() {
    assert_eq!(
        schema_json::<Collections>(),
        json!({
            "type": "object",
            "properties": {
                "tags": {"type": "array", "items": {"type": "string"}},
                "numbers": {"type": "array", "items": {"type": "integer"}},
                "metadata": {"type": "object", "additionalProperties": {"type": "string"}},
                "config": {"type": "object", "additionalProperties": {"type": "integer"}},
                "by_id": {"type": "object"}
            },
            "required": ["tags", "numbers", "metadata", "config", "by_id"],
            "additionalProperties": false
        })
    );
}

#[derive(Describe)]
pub struct Validated {
    #[tag(validate = "required,minimum=1,maximum=100")]
    pub id: i32,
    #[tag(validate = "required,pattern=^[a-zA-Z]+$")]
    pub name: String,
    #[tag(validate = r"pattern=^[a-z]+@[a-z]+\.[a-z]+$,format=email")]
    pub email: String,
    #[tag(validate = "minimum=0,maximum=150")]
    pub age: u8,
    #[tag(validate = "multipleOf=0.5,exclusiveMinimum=0,exclusiveMaximum=100")]
    pub score: f64,
    #[tag(validate = "minItems=1,maxItems=10")]
    pub tags: Vec<String>,
    #[tag(json = "optional,omitempty")]
    pub optional: String,
}

#[test]
fn validation_constraints() {
    assert_eq!(
        schema_json::<Validated>(),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer", "minimum": 1.0, "maximum": 100.0},
                "name": {"type": "string", "pattern": "^[a-zA-Z]+$"},
                "email": {
                    "type": "string",
                    "pattern": r"^[a-z]+@[a-z]+\.[a-z]+$",
                    "format": "email"
                },
                "age": {"type": "integer", "minimum": 0.0, "maximum": 150.0},
                "score": {
                    "type": "number",
                    "multipleOf": 0.5,
                    "exclusiveMinimum": 0.0,
                    "exclusiveMaximum": 100.0
                },
                "tags": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": 1,
                    "maxItems": 10
                },
                "optional": {"type": "string"}
            },
            "required": ["id", "name", "email", "age", "score", "tags"],
            "additionalProperties": false
        })
    );
}

#[derive(Describe)]
pub struct Profile {
    pub nickname: Option<String>,
    #[tag(validate = "required")]
    pub avatar: Option<String>,
    #[tag(validate = "omitempty,format=uri")]
    pub homepage: String,
    #[tag(json = "age,omitempty", validate = "required,minimum=0")]
    pub age: u32,
    pub secret: String,
    #[allow(dead_code)]
    internal: u64,
}

#[test]
fn requiredness_policy() {
    let schema = schema_for::<Profile>().unwrap();
    assert_eq!(schema.required, vec!["avatar", "secret"]);

    let props = schema.properties.expect("properties");
    assert_eq!(
        props.names().collect::<Vec<_>>(),
        vec!["nickname", "avatar", "homepage", "age", "secret"]
    );
    // `uri` is not an accepted format.
    assert_eq!(props.get("homepage").unwrap().to_value(), json!({"type": "string"}));
    assert_eq!(
        props.get("age").unwrap().to_value(),
        json!({"type": "integer", "minimum": 0.0})
    );
}

#[test]
fn private_field_is_ignored_by_descriptor_walk() {
    let profile = Profile {
        nickname: None,
        avatar: None,
        homepage: String::new(),
        age: 0,
        secret: String::new(),
        internal: 7,
    };
    let schema = generate(Some(&profile)).unwrap();
    assert!(schema.properties.unwrap().get("internal").is_none());
}

#[derive(Describe)]
pub struct Hidden {
    #[tag(json = "-", validate = "required,minimum=5")]
    pub token: String,
}

#[test]
fn skip_overrides_everything() {
    assert_eq!(
        schema_json::<Hidden>(),
        json!({"type": "object", "properties": {}, "additionalProperties": false})
    );
}

#[derive(Describe)]
pub struct Empty;

#[test]
fn unit_struct_is_an_empty_record() {
    assert_eq!(
        schema_json::<Empty>(),
        json!({"type": "object", "properties": {}, "additionalProperties": false})
    );
}

#[derive(Describe)]
pub struct Loose {
    pub anything: serde_json::Value,
    pub nothing: (),
    pub boxed: Box<Address>,
}

#[test]
fn unsupported_kinds_and_transparent_pointers() {
    let schema = schema_json::<Loose>();
    assert_eq!(schema["properties"]["anything"], json!({"type": "object"}));
    assert_eq!(schema["properties"]["nothing"], json!({"type": "object"}));
    assert_eq!(schema["properties"]["boxed"], schema_json::<Address>());
    assert_eq!(schema["required"], json!(["anything", "nothing", "boxed"]));
}

#[derive(Describe)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[tag(validate = "minimum=0")]
    pub total: usize,
}

#[test]
fn generic_records() {
    assert_eq!(
        schema_json::<Page<Address>>()["properties"]["items"]["items"],
        schema_json::<Address>()
    );
}

#[derive(Describe)]
pub struct Keywords {
    pub r#type: String,
    #[tag(json = "ref")]
    pub r#ref: String,
}

#[test]
fn raw_identifiers_lose_their_prefix() {
    let schema = schema_for::<Keywords>().unwrap();
    assert_eq!(schema.required, vec!["type", "ref"]);
}

#[test]
fn nil_and_non_record_roots_fail() {
    assert_eq!(generate::<Basic>(None), Err(SchemaError::NilInput));

    let err = generate(Some("plain string")).unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnsupportedRootKind {
            kind: "string".into()
        }
    );

    assert!(schema_for::<Vec<Basic>>().is_err());
    assert!(schema_for::<Option<Option<Basic>>>().is_err());
}

#[test]
fn reference_root_matches_record_root() {
    let value = Address {
        street: String::new(),
        city: String::new(),
    };
    let by_ref = generate(Some(&&value)).unwrap();
    let by_option = schema_for::<Option<Address>>().unwrap();
    let direct = generate(Some(&value)).unwrap();

    assert_eq!(by_ref, direct);
    assert_eq!(by_option, direct);
}

#[test]
fn generation_is_idempotent() {
    assert_eq!(schema_for::<Validated>(), schema_for::<Validated>());
}
