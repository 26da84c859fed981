use crate::context::FieldContext;
use crate::render::Renderer;
use crate::value_fmt::{example_scalar, format_value, placeholder};

impl Renderer {
    /// Scalar fields. Required fields without defaults get the first enum
    /// value when one exists, otherwise a `<TODO_*>` placeholder; everything
    /// else is a commented line showing either the resolved default or an
    /// example value.
    pub(crate) fn render_primitive(
        &self,
        builder: &mut stencil_yaml::MappingBuilder<'_>,
        ctx: &FieldContext<'_>,
    ) {
        let comments = self.scalar_comments(ctx);
        if ctx.is_required && !ctx.has_default {
            let text = match ctx.schema.enum_values.first() {
                Some(first) => format_value(first),
                None => placeholder(ctx.name),
            };
            builder.field(ctx.name, text, comments);
        } else if ctx.has_default {
            let text = match ctx.value {
                Some(value) => format_value(value),
                None => ctx
                    .schema
                    .default
                    .as_ref()
                    .map(format_value)
                    .unwrap_or_else(|| example_scalar(ctx.schema)),
            };
            builder.commented_field(ctx.name, text, comments);
        } else {
            builder.commented_field(ctx.name, example_scalar(ctx.schema), comments);
        }
    }
}
