use serde_json::{Map, Value};
use stencil_schema::{SchemaNode, Shape};
use stencil_yaml::{Comments, MappingBuilder};

use crate::context::{FieldContext, sorted_field_names};
use crate::render::Renderer;
use crate::value_fmt::{example_scalar, format_value};

/// Head comment introducing the commented expansion next to an empty object.
const EMPTY_OBJECT_COMMENT: &str = "\nEmpty object, or customize:";

fn all_children_optional(schema: &SchemaNode) -> bool {
    schema
        .properties
        .iter()
        .all(|(name, prop)| !schema.is_required(name) || prop.default.is_some())
}

impl Renderer {
    /// Objects with declared properties. Three cases:
    ///
    /// 1. Optional or defaulted: the whole subtree is commented guidance.
    /// 2. Required with only optional children: an active `name: {}` that
    ///    already satisfies the schema, followed by a commented expansion.
    /// 3. Required with required children: active recursion, one level deeper.
    pub(crate) fn render_object(&self, builder: &mut MappingBuilder<'_>, ctx: &FieldContext<'_>) {
        let head = self.object_head(ctx);
        let value_map = ctx.value.and_then(Value::as_object);
        if !ctx.is_required || ctx.has_default {
            builder.commented_mapping(ctx.name, Comments::new(head, None), |nested| {
                self.render_fields_commented(nested, ctx.schema, value_map);
            });
        } else if all_children_optional(ctx.schema) {
            builder.empty_mapping(ctx.name, Comments::new(head, None));
            let hint = self
                .include_structural_comments
                .then(|| EMPTY_OBJECT_COMMENT.to_string());
            builder.commented_mapping(ctx.name, Comments::new(hint, None), |nested| {
                self.render_fields_commented(nested, ctx.schema, value_map);
            });
        } else {
            let empty = Map::new();
            builder.mapping(ctx.name, Comments::new(head, None), |nested| {
                self.render_fields(nested, ctx.schema, value_map.unwrap_or(&empty), ctx.depth + 1);
            });
        }
    }

    /// Separator and description both become head comments on object keys,
    /// since the value occupies the following lines.
    fn object_head(&self, ctx: &FieldContext<'_>) -> Option<String> {
        match (Self::separator_head(ctx), self.field_comment(ctx.schema)) {
            (Some(sep), Some(desc)) => Some(format!("{sep}\n{desc}")),
            (Some(sep), None) => Some(sep),
            (None, desc) => desc,
        }
    }

    /// Emits every child of `schema` as commented guidance, ordered by type
    /// rank then name. Values from default resolution take precedence over
    /// synthesized examples. The surrounding entry carries the commented
    /// flag, so children use plain builders and inherit the prefix.
    pub(crate) fn render_fields_commented(
        &self,
        builder: &mut MappingBuilder<'_>,
        schema: &SchemaNode,
        values: Option<&Map<String, Value>>,
    ) {
        for name in sorted_field_names(schema) {
            let prop = &schema.properties[name];
            let value = values.and_then(|map| map.get(name));
            let comment = self.field_comment(prop);
            if prop.is_object_with_properties() {
                // Without a concrete default there is nothing real to show
                // for the subtree; an empty mapping satisfies the schema.
                if prop.has_empty_default() {
                    builder.empty_mapping(name, Comments::new(None, comment));
                } else {
                    builder.mapping(name, Comments::new(comment, None), |nested| {
                        self.render_fields_commented(
                            nested,
                            prop,
                            value.and_then(Value::as_object),
                        );
                    });
                }
            } else if prop.is_map() {
                self.commented_map_entry(builder, name, value, Comments::new(None, comment));
            } else if matches!(
                Shape::of(prop),
                Shape::ArrayOfPrimitive | Shape::ArrayOfObject | Shape::ArrayOfMap
            ) {
                self.commented_array_entry(builder, name, value, Comments::new(None, comment));
            } else {
                let text = value
                    .or(prop.default.as_ref())
                    .map(format_value)
                    .unwrap_or_else(|| example_scalar(prop));
                builder.field(name, text, Comments::new(None, comment));
            }
        }
    }

    /// Map-typed child inside a commented expansion: reproduce the resolved
    /// entries when there are any, otherwise show an empty mapping.
    fn commented_map_entry(
        &self,
        builder: &mut MappingBuilder<'_>,
        name: &str,
        value: Option<&Value>,
        comments: Comments,
    ) {
        match value.and_then(Value::as_object).filter(|map| !map.is_empty()) {
            Some(map) => builder.mapping(name, comments, |nested| {
                for (key, entry) in map {
                    match entry {
                        Value::Object(inner) if !inner.is_empty() => {
                            nested.mapping(key, Comments::none(), |entry_builder| {
                                for (inner_key, inner_value) in inner {
                                    entry_builder.field(
                                        inner_key,
                                        format_value(inner_value),
                                        Comments::none(),
                                    );
                                }
                            });
                        }
                        other => nested.field(key, format_value(other), Comments::none()),
                    }
                }
            }),
            None => builder.empty_mapping(name, comments),
        }
    }

    /// Array-typed child inside a commented expansion: the resolved items as
    /// a block sequence, or `[]` when there are none.
    fn commented_array_entry(
        &self,
        builder: &mut MappingBuilder<'_>,
        name: &str,
        value: Option<&Value>,
        comments: Comments,
    ) {
        match value.and_then(Value::as_array).filter(|arr| !arr.is_empty()) {
            Some(arr) => builder.sequence(name, comments, |seq| {
                for item in arr {
                    match item {
                        Value::Object(map) => seq.mapping_item(|item_builder| {
                            for (key, entry) in map {
                                item_builder.field(key, format_value(entry), Comments::none());
                            }
                        }),
                        other => seq.scalar_item(format_value(other)),
                    }
                }
            }),
            None => builder.inline_array(name, &[], comments),
        }
    }
}
