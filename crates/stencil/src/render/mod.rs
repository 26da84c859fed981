mod array;
mod map;
mod nested;
mod object;
mod primitive;

use serde_json::{Map, Value};
use stencil_schema::{SchemaNode, Shape};
use stencil_yaml::{Comments, MappingBuilder};

use crate::context::{FieldContext, ordered_field_names};
use crate::options::Options;
use crate::value_fmt::format_value;

/// Head comment separating required fields from commented defaults.
pub(crate) const SEPARATOR_COMMENT: &str = "\nDefaults: Uncomment to customize";

/// Turns a schema plus its resolved default values into document nodes.
///
/// Each field is rendered by a strategy picked from its [`Shape`]; required
/// fields become active entries the user must fill in, everything else is
/// emitted as commented guidance that matches runtime default resolution.
pub struct Renderer {
    pub(crate) include_field_descriptions: bool,
    pub(crate) include_all_fields: bool,
    pub(crate) include_structural_comments: bool,
}

impl Renderer {
    pub fn new(opts: &Options) -> Self {
        Self {
            include_field_descriptions: opts.include_field_descriptions,
            include_all_fields: opts.include_all_fields,
            include_structural_comments: opts.include_structural_comments,
        }
    }

    /// Renders every visible field of `schema` into `builder`, in schema
    /// order, inserting the defaults separator before the first commented
    /// field that follows an active one.
    pub fn render_fields(
        &self,
        builder: &mut MappingBuilder<'_>,
        schema: &SchemaNode,
        values: &Map<String, Value>,
        depth: usize,
    ) {
        let mut emitted_active = false;
        let mut separator_added = false;
        for name in ordered_field_names(schema) {
            let prop = &schema.properties[name];
            let is_required = schema.is_required(name);
            let has_default = prop.default.is_some();
            if !is_required && !has_default && !self.include_all_fields {
                continue;
            }
            let commented = !is_required || has_default;
            let add_separator = commented && emitted_active && !separator_added;
            if add_separator {
                separator_added = true;
            }
            if !commented {
                emitted_active = true;
            }
            let ctx = FieldContext {
                name,
                schema: prop,
                value: values.get(name),
                is_required,
                has_default,
                depth,
                add_separator,
            };
            self.render_field(builder, &ctx);
        }
    }

    fn render_field(&self, builder: &mut MappingBuilder<'_>, ctx: &FieldContext<'_>) {
        match Shape::of(ctx.schema) {
            Shape::Primitive => self.render_primitive(builder, ctx),
            Shape::Object => self.render_object(builder, ctx),
            Shape::ArrayOfPrimitive => self.render_array_of_primitive(builder, ctx),
            Shape::ArrayOfObject => self.render_array_of_object(builder, ctx),
            Shape::ArrayOfMap => self.render_array_of_map(builder, ctx),
            Shape::MapOfPrimitive => self.render_map_of_primitive(builder, ctx),
            Shape::MapOfObject => self.render_map_of_object(builder, ctx),
            Shape::MapOfPrimitiveArray => self.render_map_of_primitive_array(builder, ctx),
            Shape::MapOfObjectArray => self.render_map_of_object_array(builder, ctx),
        }
    }

    /// Description comment for a field, with the remaining enum choices
    /// appended as an `also:` hint.
    pub(crate) fn field_comment(&self, schema: &SchemaNode) -> Option<String> {
        if !self.include_field_descriptions {
            return None;
        }
        let alternatives = if schema.enum_values.len() > 1 {
            let rest: Vec<String> = schema.enum_values[1..].iter().map(format_value).collect();
            Some(rest.join(", "))
        } else {
            None
        };
        match (schema.description.as_deref(), alternatives) {
            (Some(desc), Some(also)) => Some(format!("{desc} (also: {also})")),
            (Some(desc), None) => Some(desc.to_string()),
            (None, Some(also)) => Some(format!("also: {also}")),
            (None, None) => None,
        }
    }

    pub(crate) fn separator_head(ctx: &FieldContext<'_>) -> Option<String> {
        ctx.add_separator.then(|| SEPARATOR_COMMENT.to_string())
    }

    /// Comments for a scalar-valued line: separator above, description beside.
    pub(crate) fn scalar_comments(&self, ctx: &FieldContext<'_>) -> Comments {
        Comments::new(Self::separator_head(ctx), self.field_comment(ctx.schema))
    }
}
