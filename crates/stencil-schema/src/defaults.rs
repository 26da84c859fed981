//! Structural defaulting: turn a schema into the concrete value tree the
//! platform's runtime default resolution would produce.
//!
//! Two passes. First an empty skeleton is built top-down, inserting empty
//! containers wherever a child default would otherwise have nowhere to land.
//! Then defaults are applied recursively: a missing property whose schema
//! declares a default gets a deep copy of it, and present values are
//! descended into through `properties`, `additionalProperties`, and `items`.

use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::node::{SchemaNode, SchemaType};

/// Validate `schema` and produce its fully defaulted value tree.
///
/// `None` yields an empty map. Errors abort generation for this schema only;
/// the caller attaches the component/trait/workflow name.
pub fn resolve_defaults(schema: Option<&SchemaNode>) -> Result<Map<String, Value>, SchemaError> {
    let Some(schema) = schema else {
        return Ok(Map::new());
    };

    validate(schema, "$")?;

    let mut tree = Value::Object(build_skeleton(schema));
    apply_defaults(&mut tree, schema);

    match tree {
        Value::Object(map) => Ok(map),
        _ => unreachable!("skeleton root is an object"),
    }
}

/// Reject trees whose shape fields contradict their type. The check runs
/// before any value work so failures carry the path of the offending node.
fn validate(schema: &SchemaNode, path: &str) -> Result<(), SchemaError> {
    if schema.items.is_some() && schema.schema_type != SchemaType::Array {
        return Err(SchemaError::MisplacedItems(path.to_string()));
    }
    if (!schema.properties.is_empty() || schema.additional.is_some())
        && schema.schema_type != SchemaType::Object
    {
        return Err(SchemaError::MisplacedProperties(path.to_string()));
    }
    if !schema.properties.is_empty() && schema.additional.is_some() {
        return Err(SchemaError::AmbiguousObject(path.to_string()));
    }

    for (name, prop) in &schema.properties {
        validate(prop, &format!("{path}.{name}"))?;
    }
    if let Some(items) = &schema.items {
        validate(items, &format!("{path}[]"))?;
    }
    if let Some(value_schema) = &schema.additional {
        validate(value_schema, &format!("{path}.*"))?;
    }
    Ok(())
}

/// Build the empty structure defaults attach to. Objects without usable
/// defaults get an empty map per nested-object property; arrays without
/// usable defaults get a two-element skeleton when their items are objects
/// with properties (concrete values are synthesized later by the rendering
/// strategies, not here).
fn build_skeleton(schema: &SchemaNode) -> Map<String, Value> {
    let mut result = Map::new();

    for (name, prop) in &schema.properties {
        match prop.schema_type {
            SchemaType::Object if !prop.properties.is_empty() => {
                if prop.has_empty_default() {
                    result.insert(name.clone(), Value::Object(build_skeleton(prop)));
                }
                // A non-empty default fills this subtree on its own.
            }
            SchemaType::Array => {
                if prop.has_empty_default() {
                    result.insert(name.clone(), Value::Array(build_array_skeleton(prop)));
                }
            }
            _ => {}
        }
    }

    result
}

fn build_array_skeleton(array_schema: &SchemaNode) -> Vec<Value> {
    match &array_schema.items {
        Some(items) if items.is_object_with_properties() => {
            vec![
                Value::Object(build_skeleton(items)),
                Value::Object(build_skeleton(items)),
            ]
        }
        _ => Vec::new(),
    }
}

/// Apply declared defaults onto `value` recursively.
fn apply_defaults(value: &mut Value, schema: &SchemaNode) {
    match value {
        Value::Object(map) => {
            for (name, prop) in &schema.properties {
                if !map.contains_key(name)
                    && let Some(default) = &prop.default
                {
                    map.insert(name.clone(), default.clone());
                }
                if let Some(child) = map.get_mut(name) {
                    apply_defaults(child, prop);
                }
            }
            if let Some(value_schema) = &schema.additional {
                for child in map.values_mut() {
                    apply_defaults(child, value_schema);
                }
            }
        }
        Value::Array(items) => {
            if let Some(item_schema) = &schema.items {
                for item in items {
                    apply_defaults(item, item_schema);
                }
            }
        }
        _ => {}
    }
}
