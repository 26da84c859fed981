//! Input documents for the generate command.
//!
//! The input file is a YAML stream: the first document carries the
//! generation [`Options`](stencil::Options), every following document is a
//! manifest discriminated by its `kind` field.

use serde::Deserialize;
use stencil_schema::SchemaNode;

#[derive(Debug, Deserialize)]
#[serde(tag = "kind")]
pub enum Manifest {
    ComponentType(ComponentTypeManifest),
    Trait(TraitManifest),
    Workflow(WorkflowManifest),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTypeManifest {
    pub name: String,
    pub workload_type: String,
    #[serde(default)]
    pub schema: Option<SchemaNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitManifest {
    pub name: String,
    #[serde(default)]
    pub schema: Option<SchemaNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowManifest {
    pub name: String,
    #[serde(default)]
    pub schema: Option<SchemaNode>,
}
