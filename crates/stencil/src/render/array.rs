use serde_json::Value;
use stencil_yaml::MappingBuilder;

use crate::context::FieldContext;
use crate::render::Renderer;
use crate::render::nested::RenderMode;
use crate::value_fmt::{example_scalar, format_value};

impl Renderer {
    /// Arrays of scalars. Required arrays get an active inline example pair
    /// to edit; defaulted arrays reproduce the resolved items as a commented
    /// block; everything else is a commented inline example pair.
    pub(crate) fn render_array_of_primitive(
        &self,
        builder: &mut MappingBuilder<'_>,
        ctx: &FieldContext<'_>,
    ) {
        let comments = self.scalar_comments(ctx);
        let example = ctx
            .schema
            .items
            .as_deref()
            .map(example_scalar)
            .unwrap_or_else(|| "example".to_string());
        if ctx.is_required && !ctx.has_default {
            builder.inline_array(ctx.name, &[example.clone(), example], comments);
        } else if ctx.has_default {
            let items: Vec<String> = ctx
                .value
                .and_then(Value::as_array)
                .map(|arr| arr.iter().map(format_value).collect())
                .unwrap_or_default();
            if items.is_empty() {
                builder.commented_inline_array(ctx.name, &[], comments);
            } else {
                builder.commented_block_array(ctx.name, &items, comments);
            }
        } else {
            builder.commented_inline_array(ctx.name, &[example.clone(), example], comments);
        }
    }

    pub(crate) fn render_array_of_object(
        &self,
        builder: &mut MappingBuilder<'_>,
        ctx: &FieldContext<'_>,
    ) {
        let Some(item_schema) = ctx.schema.items.as_deref() else {
            return;
        };
        let items = ctx.value.and_then(Value::as_array).map_or(&[][..], Vec::as_slice);
        self.nested_array_of_objects(
            builder,
            ctx.name,
            item_schema,
            items,
            RenderMode::of(ctx),
            self.scalar_comments(ctx),
        );
    }

    pub(crate) fn render_array_of_map(
        &self,
        builder: &mut MappingBuilder<'_>,
        ctx: &FieldContext<'_>,
    ) {
        let Some(item_schema) = ctx.schema.items.as_deref() else {
            return;
        };
        let items = ctx.value.and_then(Value::as_array).map_or(&[][..], Vec::as_slice);
        self.nested_array_of_maps(
            builder,
            ctx.name,
            item_schema,
            items,
            RenderMode::of(ctx),
            self.scalar_comments(ctx),
        );
    }
}
