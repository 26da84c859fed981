use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;
use stencil::{Generator, Options};

use crate::input::{ComponentTypeManifest, Manifest, WorkflowManifest};

#[derive(clap::Args)]
pub struct Args {
    /// Path to the YAML stream: options document first, then manifests
    pub file: PathBuf,

    /// Write the manifest here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &Args) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let mut documents = serde_yaml::Deserializer::from_str(&text);
    let first = documents.next().context("input has no documents")?;
    let opts = Options::deserialize(first).context("parsing options document")?;

    let mut component: Option<ComponentTypeManifest> = None;
    let mut traits = BTreeMap::new();
    let mut workflow: Option<WorkflowManifest> = None;
    for document in documents {
        match Manifest::deserialize(document).context("parsing manifest document")? {
            Manifest::ComponentType(manifest) => component = Some(manifest),
            Manifest::Trait(manifest) => {
                traits.insert(manifest.name, manifest.schema);
            }
            Manifest::Workflow(manifest) => workflow = Some(manifest),
        }
    }

    let component = component.context("input has no ComponentType document")?;
    let (workflow_name, workflow_schema) = match workflow {
        Some(manifest) => (Some(manifest.name), manifest.schema),
        None => (None, None),
    };

    let generator = Generator::new(
        component.name,
        component.workload_type,
        component.schema,
        traits,
        workflow_name,
        workflow_schema,
        opts,
    );
    let manifest = generator.generate()?;

    match &args.output {
        Some(path) => fs::write(path, &manifest)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{manifest}"),
    }

    Ok(())
}
