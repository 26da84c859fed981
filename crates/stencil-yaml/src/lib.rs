#![doc = include_str!("../README.md")]

mod builder;
mod encode;
mod error;
mod node;

pub use builder::{Comments, DocumentBuilder, MappingBuilder, SequenceBuilder};
pub use encode::encode_document;
pub use error::EncodeError;
pub use node::{Document, Node, NodeKind, SequenceStyle};


/// Result type for stencil-yaml operations
pub type Result<T> = std::result::Result<T, EncodeError>;
