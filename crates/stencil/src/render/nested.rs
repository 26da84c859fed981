//! Renderers for structures nested under a field: arrays of objects or maps,
//! and maps whose values are themselves structured. Synthesized examples
//! always show two entries so the list shape is obvious; resolved values are
//! reproduced as-is, capped at two items for arrays.

use serde_json::{Map, Value};
use stencil_schema::SchemaNode;
use stencil_yaml::{Comments, MappingBuilder, SequenceBuilder};

use crate::context::{FieldContext, alphabetical_field_names, sorted_field_names};
use crate::render::Renderer;
use crate::value_fmt::{example_scalar, format_value};

const EXAMPLE_KEYS: [&str; 2] = ["key1", "key2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderMode {
    Active,
    Commented,
}

impl RenderMode {
    pub(crate) fn of(ctx: &FieldContext<'_>) -> Self {
        if ctx.is_required && !ctx.has_default {
            Self::Active
        } else {
            Self::Commented
        }
    }
}

fn mode_mapping(
    builder: &mut MappingBuilder<'_>,
    name: &str,
    comments: Comments,
    mode: RenderMode,
    f: impl FnOnce(&mut MappingBuilder<'_>),
) {
    match mode {
        RenderMode::Active => builder.mapping(name, comments, f),
        RenderMode::Commented => builder.commented_mapping(name, comments, f),
    }
}

fn mode_sequence(
    builder: &mut MappingBuilder<'_>,
    name: &str,
    comments: Comments,
    mode: RenderMode,
    f: impl FnOnce(&mut SequenceBuilder<'_>),
) {
    match mode {
        RenderMode::Active => builder.sequence(name, comments, f),
        RenderMode::Commented => builder.commented_sequence(name, comments, f),
    }
}

impl Renderer {
    pub(crate) fn nested_array_of_objects(
        &self,
        builder: &mut MappingBuilder<'_>,
        name: &str,
        item_schema: &SchemaNode,
        items: &[Value],
        mode: RenderMode,
        comments: Comments,
    ) {
        mode_sequence(builder, name, comments, mode, |seq| {
            let count = if items.is_empty() { 2 } else { items.len().min(2) };
            for index in 0..count {
                let item = items.get(index).and_then(Value::as_object);
                seq.mapping_item(|item_builder| match mode {
                    RenderMode::Active => {
                        let empty = Map::new();
                        self.render_fields(item_builder, item_schema, item.unwrap_or(&empty), 1);
                    }
                    RenderMode::Commented => match item.filter(|map| !map.is_empty()) {
                        Some(map) => {
                            for field in sorted_field_names(item_schema) {
                                let text = map
                                    .get(field)
                                    .map(format_value)
                                    .unwrap_or_else(|| {
                                        example_scalar(&item_schema.properties[field])
                                    });
                                item_builder.field(field, text, Comments::none());
                            }
                        }
                        None => self.example_fields(item_builder, item_schema),
                    },
                });
            }
        });
    }

    pub(crate) fn nested_array_of_maps(
        &self,
        builder: &mut MappingBuilder<'_>,
        name: &str,
        item_schema: &SchemaNode,
        items: &[Value],
        mode: RenderMode,
        comments: Comments,
    ) {
        mode_sequence(builder, name, comments, mode, |seq| {
            let count = if items.is_empty() { 2 } else { items.len().min(2) };
            for index in 0..count {
                let item = items.get(index).and_then(Value::as_object);
                seq.mapping_item(|item_builder| {
                    match item.filter(|map| !map.is_empty()) {
                        Some(map) => {
                            for (key, value) in map {
                                item_builder.field(key, format_value(value), Comments::none());
                            }
                        }
                        None => self.map_entries(item_builder, item_schema.additional.as_deref()),
                    }
                });
            }
        });
    }

    pub(crate) fn nested_map_of_primitives(
        &self,
        builder: &mut MappingBuilder<'_>,
        name: &str,
        value_schema: &SchemaNode,
        values: Option<&Map<String, Value>>,
        mode: RenderMode,
        comments: Comments,
    ) {
        let entries: Vec<(String, String)> = match values.filter(|map| !map.is_empty()) {
            Some(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), format_value(value)))
                .collect(),
            None => {
                let example = example_scalar(value_schema);
                EXAMPLE_KEYS
                    .iter()
                    .map(|key| ((*key).to_string(), example.clone()))
                    .collect()
            }
        };
        mode_mapping(builder, name, comments, mode, |nested| {
            for (key, value) in &entries {
                nested.field(key, value.clone(), Comments::none());
            }
        });
    }

    pub(crate) fn nested_map_of_objects(
        &self,
        builder: &mut MappingBuilder<'_>,
        name: &str,
        value_schema: &SchemaNode,
        values: Option<&Map<String, Value>>,
        mode: RenderMode,
        comments: Comments,
    ) {
        let keys: Vec<String> = match values.filter(|map| !map.is_empty()) {
            Some(map) => map.keys().cloned().collect(),
            None => EXAMPLE_KEYS.iter().map(|key| (*key).to_string()).collect(),
        };
        mode_mapping(builder, name, comments, mode, |nested| {
            let empty = Map::new();
            for key in &keys {
                let entry = values
                    .and_then(|map| map.get(key))
                    .and_then(Value::as_object)
                    .unwrap_or(&empty);
                nested.mapping(key, Comments::none(), |entry_builder| {
                    self.render_fields(entry_builder, value_schema, entry, 1);
                });
            }
        });
    }

    pub(crate) fn nested_map_of_primitive_arrays(
        &self,
        builder: &mut MappingBuilder<'_>,
        name: &str,
        value_schema: &SchemaNode,
        values: Option<&Map<String, Value>>,
        mode: RenderMode,
        comments: Comments,
    ) {
        let example = value_schema
            .items
            .as_deref()
            .map(example_scalar)
            .unwrap_or_else(|| "example".to_string());
        mode_mapping(builder, name, comments, mode, |nested| {
            match values.filter(|map| !map.is_empty()) {
                Some(map) => {
                    for (key, value) in map {
                        let items: Vec<String> = value
                            .as_array()
                            .map(|arr| arr.iter().map(format_value).collect())
                            .unwrap_or_default();
                        nested.inline_array(key, &items, Comments::none());
                    }
                }
                None => {
                    for key in EXAMPLE_KEYS {
                        nested.inline_array(
                            key,
                            &[example.clone(), example.clone()],
                            Comments::none(),
                        );
                    }
                }
            }
        });
    }

    pub(crate) fn nested_map_of_object_arrays(
        &self,
        builder: &mut MappingBuilder<'_>,
        name: &str,
        value_schema: &SchemaNode,
        values: Option<&Map<String, Value>>,
        mode: RenderMode,
        comments: Comments,
    ) {
        let Some(item_schema) = value_schema.items.as_deref() else {
            return;
        };
        mode_mapping(builder, name, comments, mode, |nested| {
            match values.filter(|map| !map.is_empty()) {
                Some(map) => {
                    for (key, value) in map {
                        let items = value.as_array().map_or(&[][..], Vec::as_slice);
                        nested.sequence(key, Comments::none(), |seq| {
                            if items.is_empty() {
                                for _ in 0..2 {
                                    seq.mapping_item(|item_builder| {
                                        self.example_fields(item_builder, item_schema);
                                    });
                                }
                            } else {
                                for item in items.iter().take(2) {
                                    seq.mapping_item(|item_builder| {
                                        match item.as_object().filter(|map| !map.is_empty()) {
                                            Some(fields) => {
                                                for field in sorted_field_names(item_schema) {
                                                    let text = fields
                                                        .get(field)
                                                        .map(format_value)
                                                        .unwrap_or_else(|| {
                                                            example_scalar(
                                                                &item_schema.properties[field],
                                                            )
                                                        });
                                                    item_builder.field(
                                                        field,
                                                        text,
                                                        Comments::none(),
                                                    );
                                                }
                                            }
                                            None => {
                                                self.example_fields(item_builder, item_schema);
                                            }
                                        }
                                    });
                                }
                            }
                        });
                    }
                }
                None => {
                    for key in EXAMPLE_KEYS {
                        nested.sequence(key, Comments::none(), |seq| {
                            for _ in 0..2 {
                                seq.mapping_item(|item_builder| {
                                    self.example_fields(item_builder, item_schema);
                                });
                            }
                        });
                    }
                }
            }
        });
    }

    /// Alphabetical example fields for one synthesized object entry.
    fn example_fields(&self, builder: &mut MappingBuilder<'_>, schema: &SchemaNode) {
        for name in alphabetical_field_names(schema) {
            builder.field(name, example_scalar(&schema.properties[name]), Comments::none());
        }
    }

    /// Two example entries for a synthesized map, shaped by the value schema.
    fn map_entries(&self, builder: &mut MappingBuilder<'_>, value_schema: Option<&SchemaNode>) {
        match value_schema {
            Some(schema) if schema.is_object_with_properties() => {
                for key in EXAMPLE_KEYS {
                    builder.mapping(key, Comments::none(), |entry_builder| {
                        self.example_fields(entry_builder, schema);
                    });
                }
            }
            Some(schema) => {
                let example = example_scalar(schema);
                for key in EXAMPLE_KEYS {
                    builder.field(key, example.clone(), Comments::none());
                }
            }
            None => {
                for key in EXAMPLE_KEYS {
                    builder.field(key, "example", Comments::none());
                }
            }
        }
    }
}
