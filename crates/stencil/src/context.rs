use serde_json::Value;
use stencil_schema::{SchemaNode, SchemaType, Shape};

/// Everything a rendering strategy needs to know about one field.
pub(crate) struct FieldContext<'a> {
    pub name: &'a str,
    pub schema: &'a SchemaNode,
    /// Resolved value for this field, when default resolution produced one.
    pub value: Option<&'a Value>,
    pub is_required: bool,
    pub has_default: bool,
    pub depth: usize,
    /// Emit the defaults separator comment above this field.
    pub add_separator: bool,
}

/// Rank used to group fields by type before the alphabetical tiebreak.
/// Simple scalars sort before structured values so the fields a user must
/// touch cluster at the top of each mapping.
fn type_rank(schema: &SchemaNode) -> u8 {
    match Shape::of(schema) {
        Shape::Primitive => match schema.schema_type {
            SchemaType::Boolean => 0,
            SchemaType::Integer | SchemaType::Number => 1,
            _ => 2,
        },
        Shape::Object => 3,
        Shape::MapOfPrimitive
        | Shape::MapOfObject
        | Shape::MapOfPrimitiveArray
        | Shape::MapOfObjectArray => 4,
        Shape::ArrayOfPrimitive | Shape::ArrayOfObject | Shape::ArrayOfMap => 5,
    }
}

/// Field names of `schema` in render order: required fields without a
/// default first, then everything else, each group ordered by type rank
/// and then alphabetically.
pub(crate) fn ordered_field_names(schema: &SchemaNode) -> Vec<&str> {
    let mut names: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
    names.sort_by(|a, b| {
        let key = |name: &str| {
            let prop = &schema.properties[name];
            let needs_input = schema.is_required(name) && prop.default.is_none();
            (!needs_input, type_rank(prop))
        };
        key(a).cmp(&key(b)).then_with(|| a.cmp(b))
    });
    names
}

/// Field names ordered by type rank and alphabetically, without the
/// required-first grouping. Used inside fully commented expansions where
/// every line is guidance.
pub(crate) fn sorted_field_names(schema: &SchemaNode) -> Vec<&str> {
    let mut names: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
    names.sort_by(|a, b| {
        type_rank(&schema.properties[*a])
            .cmp(&type_rank(&schema.properties[*b]))
            .then_with(|| a.cmp(b))
    });
    names
}

/// Property names in plain alphabetical order, for example synthesis.
pub(crate) fn alphabetical_field_names(schema: &SchemaNode) -> Vec<&str> {
    let mut names: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}
