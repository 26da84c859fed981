use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Knobs controlling what the generated manifest contains.
///
/// All fields deserialize from camelCase keys, so an options document can
/// ride alongside the schema manifests in the same YAML stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Name written into `metadata.name`.
    pub component_name: String,
    /// Namespace written into `metadata.namespace`.
    pub namespace: String,
    /// Project written into `spec.owner.projectName`.
    pub project_name: String,
    /// Emit optional fields that carry neither a default nor a requirement.
    pub include_all_fields: bool,
    /// Attach schema descriptions as comments next to each field.
    pub include_field_descriptions: bool,
    /// Emit section-level guidance comments (parameters, traits, workflow).
    pub include_structural_comments: bool,
    /// Per-trait instance names; traits absent here get a `<name-instance>`
    /// placeholder.
    pub trait_instance_names: BTreeMap<String, String>,
    /// Emit the workflow section when a workflow is configured.
    pub include_workflow: bool,
}
