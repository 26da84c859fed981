use thiserror::Error;

/// Errors raised when a schema tree is structurally malformed. These are
/// fatal for the affected schema: the generator wraps them with the
/// component, trait, or workflow name and aborts that generation.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("`items` is only valid on array schemas (at {0})")]
    MisplacedItems(String),

    #[error("`properties` and `additionalProperties` are only valid on object schemas (at {0})")]
    MisplacedProperties(String),

    #[error("object schema declares both `properties` and `additionalProperties` (at {0})")]
    AmbiguousObject(String),
}
