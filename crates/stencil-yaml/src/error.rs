use thiserror::Error;

/// Encoding failures are invariant violations in the document tree, not user
/// conditions: the builder API cannot produce them.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("document root must be a mapping")]
    RootNotMapping,

    #[error("mapping key must be a scalar")]
    NonScalarKey,

    #[error("flow sequences may contain only scalar items")]
    NonScalarFlowItem,

    #[error("block sequence items must be mappings or scalars")]
    UnsupportedSequenceItem,
}
