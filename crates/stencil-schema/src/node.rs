//! Typed representation of the JSON-Schema-like parameter definitions the
//! scaffolder consumes. Conversion from the platform's shorthand syntax
//! happens upstream; this crate only sees the standard form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON Schema primitive and container types supported by the scaffolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

/// One schema node: a type plus the shape and metadata fields the rendering
/// pipeline consumes. Per node, at most one of `properties`, `additional`,
/// and `items` is meaningful for its type; `resolve_defaults` rejects trees
/// that violate this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaNode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Item schema for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    /// Value schema for maps (JSON Schema `additionalProperties`).
    #[serde(
        rename = "additionalProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional: Option<Box<SchemaNode>>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl SchemaNode {
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            properties: IndexMap::new(),
            required: Vec::new(),
            items: None,
            additional: None,
            enum_values: Vec::new(),
            description: None,
            default: None,
        }
    }

    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::new(SchemaType::Integer)
    }

    pub fn number() -> Self {
        Self::new(SchemaType::Number)
    }

    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    pub fn array(items: SchemaNode) -> Self {
        let mut node = Self::new(SchemaType::Array);
        node.items = Some(Box::new(items));
        node
    }

    /// An object with an `additionalProperties` value schema: a map.
    pub fn map(values: SchemaNode) -> Self {
        let mut node = Self::new(SchemaType::Object);
        node.additional = Some(Box::new(values));
        node
    }

    pub fn with_property(mut self, name: &str, schema: SchemaNode) -> Self {
        self.properties.insert(name.to_string(), schema);
        self
    }

    pub fn with_required(mut self, names: &[&str]) -> Self {
        self.required = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_enum(mut self, values: Vec<Value>) -> Self {
        self.enum_values = values;
        self
    }

    pub fn with_description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    pub fn is_object_with_properties(&self) -> bool {
        self.schema_type == SchemaType::Object && !self.properties.is_empty()
    }

    pub fn is_map(&self) -> bool {
        self.schema_type == SchemaType::Object && self.additional.is_some()
    }

    /// True when the declared default is absent, `null`, or an empty object.
    /// Such defaults carry no concrete values, so children still need a
    /// skeleton container for their own defaults to land in.
    pub fn has_empty_default(&self) -> bool {
        match &self.default {
            None | Some(Value::Null) => true,
            Some(Value::Object(map)) => map.is_empty(),
            Some(_) => false,
        }
    }
}
