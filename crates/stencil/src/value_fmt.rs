use serde_json::Value;
use stencil_schema::{SchemaNode, SchemaType};

/// Renders a resolved value as YAML scalar text. Composite values come out
/// in flow style so a default can sit on a single commented line.
pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{key}: {}", format_value(value)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}

/// Example scalar for a schema with no default: the first enum value when
/// one exists, otherwise a type-appropriate stand-in.
pub(crate) fn example_scalar(schema: &SchemaNode) -> String {
    if let Some(first) = schema.enum_values.first() {
        return format_value(first);
    }
    match schema.schema_type {
        SchemaType::Integer => "0".to_string(),
        SchemaType::Number => "0.0".to_string(),
        SchemaType::Boolean => "false".to_string(),
        SchemaType::String | SchemaType::Object | SchemaType::Array => "example".to_string(),
    }
}

/// Placeholder marking a value the user must supply.
pub(crate) fn placeholder(name: &str) -> String {
    format!("<TODO_{}>", name.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalars_format_verbatim() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(8080)), "8080");
        assert_eq!(format_value(&json!(8.0)), "8.0");
        assert_eq!(format_value(&json!("hello")), "hello");
    }

    #[test]
    fn composites_use_flow_style() {
        assert_eq!(format_value(&json!([1, "a"])), "[1, a]");
        assert_eq!(format_value(&json!({"b": 2, "a": [true]})), "{a: [true], b: 2}");
    }

    #[test]
    fn examples_follow_type_and_enum() {
        assert_eq!(example_scalar(&SchemaNode::string()), "example");
        assert_eq!(example_scalar(&SchemaNode::integer()), "0");
        assert_eq!(example_scalar(&SchemaNode::number()), "0.0");
        assert_eq!(example_scalar(&SchemaNode::boolean()), "false");
        let level = SchemaNode::string().with_enum(vec![json!("debug"), json!("info")]);
        assert_eq!(example_scalar(&level), "debug");
    }

    #[test]
    fn placeholder_uppercases_name() {
        assert_eq!(placeholder("appPath"), "<TODO_APPPATH>");
        assert_eq!(placeholder("name"), "<TODO_NAME>");
    }
}
