//! Classification of a schema node into the shape that selects its rendering
//! strategy.

use crate::node::{SchemaNode, SchemaType};

/// The rendering shape of a schema node. The classification rules overlap
/// (a map is structurally an object), so [`Shape::of`] checks them in a fixed
/// priority order: map before object, and map/object item schemas before the
/// primitive fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Primitive,
    Object,
    MapOfPrimitive,
    MapOfObject,
    MapOfPrimitiveArray,
    MapOfObjectArray,
    ArrayOfPrimitive,
    ArrayOfObject,
    ArrayOfMap,
}

impl Shape {
    pub fn of(schema: &SchemaNode) -> Shape {
        match schema.schema_type {
            SchemaType::Object => {
                if let Some(value_schema) = &schema.additional {
                    return Self::of_map_value(value_schema);
                }
                if !schema.properties.is_empty() {
                    return Shape::Object;
                }
                // An object with neither properties nor a value schema has
                // nothing to expand; render it like a primitive.
                Shape::Primitive
            }
            SchemaType::Array => match &schema.items {
                Some(items) if items.is_map() => Shape::ArrayOfMap,
                Some(items) if items.is_object_with_properties() => Shape::ArrayOfObject,
                _ => Shape::ArrayOfPrimitive,
            },
            _ => Shape::Primitive,
        }
    }

    fn of_map_value(value_schema: &SchemaNode) -> Shape {
        if value_schema.is_object_with_properties() {
            return Shape::MapOfObject;
        }
        if value_schema.schema_type == SchemaType::Array {
            return match &value_schema.items {
                Some(items) if items.is_object_with_properties() => Shape::MapOfObjectArray,
                _ => Shape::MapOfPrimitiveArray,
            };
        }
        Shape::MapOfPrimitive
    }
}
