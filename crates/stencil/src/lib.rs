#![doc = include_str!("../README.md")]

mod context;
mod error;
mod generator;
mod options;
mod render;
#[cfg(test)]
mod tests;
mod value_fmt;

pub use error::GenerateError;
pub use generator::Generator;
pub use options::Options;
pub use render::Renderer;

pub type Result<T> = std::result::Result<T, GenerateError>;
