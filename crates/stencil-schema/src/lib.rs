#![doc = include_str!("../README.md")]

mod defaults;
mod error;
mod node;
mod shape;

pub use defaults::resolve_defaults;
pub use error::SchemaError;
pub use node::{SchemaNode, SchemaType};
pub use shape::Shape;

/// Result type for stencil-schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;
