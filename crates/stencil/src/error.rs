use stencil_schema::SchemaError;
use stencil_yaml::EncodeError;

/// Errors surfaced while turning schemas into a manifest.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("processing component schema: {0}")]
    Component(#[source] SchemaError),
    #[error("processing schema for trait {name}: {source}")]
    Trait {
        name: String,
        #[source]
        source: SchemaError,
    },
    #[error("processing schema for workflow {name}: {source}")]
    Workflow {
        name: String,
        #[source]
        source: SchemaError,
    },
    #[error("encoding manifest: {0}")]
    Encode(#[from] EncodeError),
}
