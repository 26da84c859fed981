use serde_json::Value;
use stencil_yaml::MappingBuilder;

use crate::context::FieldContext;
use crate::render::Renderer;
use crate::render::nested::RenderMode;

impl Renderer {
    pub(crate) fn render_map_of_primitive(
        &self,
        builder: &mut MappingBuilder<'_>,
        ctx: &FieldContext<'_>,
    ) {
        let Some(value_schema) = ctx.schema.additional.as_deref() else {
            return;
        };
        self.nested_map_of_primitives(
            builder,
            ctx.name,
            value_schema,
            ctx.value.and_then(Value::as_object),
            RenderMode::of(ctx),
            self.scalar_comments(ctx),
        );
    }

    pub(crate) fn render_map_of_object(
        &self,
        builder: &mut MappingBuilder<'_>,
        ctx: &FieldContext<'_>,
    ) {
        let Some(value_schema) = ctx.schema.additional.as_deref() else {
            return;
        };
        self.nested_map_of_objects(
            builder,
            ctx.name,
            value_schema,
            ctx.value.and_then(Value::as_object),
            RenderMode::of(ctx),
            self.scalar_comments(ctx),
        );
    }

    pub(crate) fn render_map_of_primitive_array(
        &self,
        builder: &mut MappingBuilder<'_>,
        ctx: &FieldContext<'_>,
    ) {
        let Some(value_schema) = ctx.schema.additional.as_deref() else {
            return;
        };
        self.nested_map_of_primitive_arrays(
            builder,
            ctx.name,
            value_schema,
            ctx.value.and_then(Value::as_object),
            RenderMode::of(ctx),
            self.scalar_comments(ctx),
        );
    }

    pub(crate) fn render_map_of_object_array(
        &self,
        builder: &mut MappingBuilder<'_>,
        ctx: &FieldContext<'_>,
    ) {
        let Some(value_schema) = ctx.schema.additional.as_deref() else {
            return;
        };
        self.nested_map_of_object_arrays(
            builder,
            ctx.name,
            value_schema,
            ctx.value.and_then(Value::as_object),
            RenderMode::of(ctx),
            self.scalar_comments(ctx),
        );
    }
}
