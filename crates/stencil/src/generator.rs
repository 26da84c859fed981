use std::collections::BTreeMap;

use serde_json::{Map, Value};
use stencil_schema::{SchemaNode, resolve_defaults};
use stencil_yaml::{Comments, DocumentBuilder, MappingBuilder};

use crate::error::GenerateError;
use crate::options::Options;
use crate::render::Renderer;

const API_VERSION: &str = "stencil.dev/v1alpha1";
const KIND: &str = "Component";

const COMMENT_AUTO_DEPLOY: &str = "Enable automatic deployment on changes";
const COMMENT_COMPONENT_PARAMETERS: &str = "\nParameters for the ComponentType";
const COMMENT_TRAITS_SECTION: &str = "\nTraits augment the component with additional capabilities";
const COMMENT_TRAIT_NAME: &str = "Trait resource name";
const COMMENT_TRAIT_INSTANCE: &str = "Unique instance name within this Component";
const COMMENT_WORKFLOW_SECTION: &str = "\nWorkflow configuration for building this component";
const COMMENT_WORKFLOW_NAME: &str = "ComponentWorkflow to use for builds";
const COMMENT_SYSTEM_PARAMETERS: &str = "\nSystem parameters for workflow execution";

struct TraitRender<'a> {
    name: &'a str,
    schema: Option<&'a SchemaNode>,
    values: Map<String, Value>,
}

/// Assembles a complete Component manifest from the configured schemas.
///
/// Traits are keyed by name in a sorted map, so two generators built from
/// the same inputs always produce byte-identical output.
pub struct Generator {
    component_type_name: String,
    workload_type: String,
    component_schema: Option<SchemaNode>,
    trait_schemas: BTreeMap<String, Option<SchemaNode>>,
    workflow_name: Option<String>,
    workflow_schema: Option<SchemaNode>,
    opts: Options,
    renderer: Renderer,
}

impl Generator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        component_type_name: impl Into<String>,
        workload_type: impl Into<String>,
        component_schema: Option<SchemaNode>,
        trait_schemas: BTreeMap<String, Option<SchemaNode>>,
        workflow_name: Option<String>,
        workflow_schema: Option<SchemaNode>,
        opts: Options,
    ) -> Self {
        let renderer = Renderer::new(&opts);
        Self {
            component_type_name: component_type_name.into(),
            workload_type: workload_type.into(),
            component_schema,
            trait_schemas,
            workflow_name,
            workflow_schema,
            opts,
            renderer,
        }
    }

    /// Renders the manifest. Default resolution runs for every schema before
    /// any output is produced, so a malformed schema never yields a partial
    /// document.
    pub fn generate(&self) -> Result<String, GenerateError> {
        let component_values =
            resolve_defaults(self.component_schema.as_ref()).map_err(GenerateError::Component)?;

        let mut traits = Vec::with_capacity(self.trait_schemas.len());
        for (name, schema) in &self.trait_schemas {
            let values = resolve_defaults(schema.as_ref()).map_err(|source| GenerateError::Trait {
                name: name.clone(),
                source,
            })?;
            traits.push(TraitRender {
                name,
                schema: schema.as_ref(),
                values,
            });
        }

        let workflow = match &self.workflow_name {
            Some(name) if self.opts.include_workflow => {
                let values = resolve_defaults(self.workflow_schema.as_ref()).map_err(|source| {
                    GenerateError::Workflow {
                        name: name.clone(),
                        source,
                    }
                })?;
                Some((name.as_str(), values))
            }
            _ => None,
        };

        let mut doc = DocumentBuilder::new();
        doc.set_header(self.header());
        {
            let mut body = doc.body();
            body.field("apiVersion", API_VERSION, Comments::none());
            body.field("kind", KIND, Comments::none());
            self.metadata(&mut body);
            self.spec(&mut body, &component_values, &traits, workflow.as_ref());
        }
        Ok(doc.encode()?)
    }

    fn header(&self) -> String {
        let mut header = format!(
            "# Generated by stencil scaffold component\n# Component: {}\n# Type: {}/{}",
            self.opts.component_name, self.workload_type, self.component_type_name
        );
        if !self.trait_schemas.is_empty() {
            let names: Vec<&str> = self.trait_schemas.keys().map(String::as_str).collect();
            header.push_str(&format!("\n# Traits: {}", names.join(", ")));
        }
        if let Some(name) = &self.workflow_name
            && self.opts.include_workflow
        {
            header.push_str(&format!("\n# Workflow: {name}"));
        }
        header
    }

    fn metadata(&self, body: &mut MappingBuilder<'_>) {
        body.mapping("metadata", Comments::none(), |b| {
            b.field("name", self.opts.component_name.as_str(), Comments::none());
            b.field("namespace", self.opts.namespace.as_str(), Comments::none());
        });
    }

    fn spec(
        &self,
        body: &mut MappingBuilder<'_>,
        component_values: &Map<String, Value>,
        traits: &[TraitRender<'_>],
        workflow: Option<&(&str, Map<String, Value>)>,
    ) {
        body.mapping("spec", Comments::none(), |b| {
            b.mapping("owner", Comments::none(), |owner| {
                owner.field("projectName", self.opts.project_name.as_str(), Comments::none());
            });
            b.mapping("componentType", Comments::none(), |ct| {
                ct.field("kind", "ComponentType", Comments::none());
                ct.field(
                    "name",
                    format!("{}/{}", self.workload_type, self.component_type_name),
                    Comments::none(),
                );
            });
            b.commented_field("autoDeploy", "true", self.structural_line(COMMENT_AUTO_DEPLOY));
            if let Some(schema) = &self.component_schema
                && !schema.properties.is_empty()
            {
                let comments = self.structural_head(COMMENT_COMPONENT_PARAMETERS);
                b.mapping("parameters", comments, |params| {
                    self.renderer.render_fields(params, schema, component_values, 0);
                });
            }
            if !traits.is_empty() {
                self.traits_section(b, traits);
            }
            if let Some((name, values)) = workflow {
                self.workflow_section(b, *name, values);
            }
        });
    }

    fn traits_section(&self, body: &mut MappingBuilder<'_>, traits: &[TraitRender<'_>]) {
        body.sequence("traits", self.structural_head(COMMENT_TRAITS_SECTION), |seq| {
            for entry in traits {
                seq.mapping_item(|item| {
                    item.field("name", entry.name, self.structural_line(COMMENT_TRAIT_NAME));
                    let instance = self
                        .opts
                        .trait_instance_names
                        .get(entry.name)
                        .cloned()
                        .unwrap_or_else(|| format!("<{}-instance>", entry.name));
                    item.field(
                        "instanceName",
                        instance,
                        self.structural_line(COMMENT_TRAIT_INSTANCE),
                    );
                    if let Some(schema) = entry.schema
                        && !schema.properties.is_empty()
                    {
                        let comments =
                            self.structural_head(format!("Parameters for {} trait", entry.name));
                        item.mapping("parameters", comments, |params| {
                            self.renderer.render_fields(params, schema, &entry.values, 0);
                        });
                    }
                });
            }
        });
    }

    fn workflow_section(
        &self,
        body: &mut MappingBuilder<'_>,
        name: &str,
        values: &Map<String, Value>,
    ) {
        body.mapping("workflow", self.structural_head(COMMENT_WORKFLOW_SECTION), |wf| {
            wf.field("name", name, self.structural_line(COMMENT_WORKFLOW_NAME));
            if let Some(schema) = &self.workflow_schema
                && !schema.properties.is_empty()
            {
                wf.mapping("parameters", Comments::none(), |params| {
                    self.renderer.render_fields(params, schema, values, 0);
                });
            }
            wf.mapping(
                "systemParameters",
                self.structural_head(COMMENT_SYSTEM_PARAMETERS),
                |sys| {
                    sys.mapping("repository", Comments::none(), |repo| {
                        repo.field(
                            "url",
                            "<TODO_REPOSITORY_URL>",
                            Comments::line("Git repository URL"),
                        );
                        repo.mapping("revision", Comments::none(), |rev| {
                            rev.field(
                                "branch",
                                "<TODO_BRANCH>",
                                Comments::line("Git branch to build from"),
                            );
                        });
                        repo.field(
                            "appPath",
                            "<TODO_APP_PATH>",
                            Comments::line("Path to application code within repository"),
                        );
                    });
                },
            );
        });
    }

    fn structural_line(&self, text: &str) -> Comments {
        if self.opts.include_structural_comments {
            Comments::line(text)
        } else {
            Comments::none()
        }
    }

    fn structural_head(&self, text: impl Into<String>) -> Comments {
        if self.opts.include_structural_comments {
            Comments::head(text)
        } else {
            Comments::none()
        }
    }
}
