use std::collections::BTreeMap;

use serde_json::json;
use stencil_schema::SchemaNode;

use crate::{Generator, Options};

fn base_opts() -> Options {
    Options {
        component_name: "my-service".to_string(),
        namespace: "default".to_string(),
        project_name: "demo".to_string(),
        ..Options::default()
    }
}

fn generate(schema: SchemaNode, opts: Options) -> String {
    Generator::new(
        "Service",
        "deployment",
        Some(schema),
        BTreeMap::new(),
        None,
        None,
        opts,
    )
    .generate()
    .unwrap()
}

#[test]
fn required_and_defaulted_fields() {
    let schema = SchemaNode::object()
        .with_property("name", SchemaNode::string())
        .with_property("port", SchemaNode::integer().with_default(json!(8080)))
        .with_required(&["name"]);

    let yaml = generate(schema, base_opts());

    let expected = "\
# Generated by stencil scaffold component
# Component: my-service
# Type: deployment/Service
apiVersion: stencil.dev/v1alpha1
kind: Component
metadata:
  name: my-service
  namespace: default
spec:
  owner:
    projectName: demo
  componentType:
    kind: ComponentType
    name: deployment/Service
  # autoDeploy: true
  parameters:
    name: <TODO_NAME>

    # Defaults: Uncomment to customize
    # port: 8080
";
    assert_eq!(yaml, expected);
}

#[test]
fn separator_appears_once() {
    let schema = SchemaNode::object()
        .with_property("name", SchemaNode::string())
        .with_property("port", SchemaNode::integer().with_default(json!(8080)))
        .with_property("host", SchemaNode::string().with_default(json!("localhost")))
        .with_required(&["name"]);

    let yaml = generate(schema, base_opts());

    assert_eq!(yaml.matches("# Defaults: Uncomment to customize").count(), 1);
    assert!(yaml.contains(
        "    # Defaults: Uncomment to customize\n    # port: 8080\n    # host: localhost\n"
    ));
}

#[test]
fn no_separator_without_active_fields() {
    let schema =
        SchemaNode::object().with_property("port", SchemaNode::integer().with_default(json!(8080)));

    let yaml = generate(schema, base_opts());

    assert!(!yaml.contains("Defaults: Uncomment to customize"));
    assert!(yaml.contains("    # port: 8080\n"));
}

#[test]
fn optional_fields_hidden_unless_requested() {
    let schema = SchemaNode::object()
        .with_property("name", SchemaNode::string())
        .with_property("debug", SchemaNode::boolean())
        .with_required(&["name"]);

    let yaml = generate(schema.clone(), base_opts());
    assert!(!yaml.contains("debug"));

    let opts = Options {
        include_all_fields: true,
        ..base_opts()
    };
    let yaml = generate(schema, opts);
    assert!(yaml.contains("    # debug: false\n"));
}

#[test]
fn defaulted_number_keeps_decimal_point() {
    let schema = SchemaNode::object()
        .with_property("factor", SchemaNode::number().with_default(json!(8.0)));

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains("    # factor: 8.0\n"));
}

#[test]
fn field_order_groups_required_then_ranks_types() {
    let schema = SchemaNode::object()
        .with_property("tags", SchemaNode::array(SchemaNode::string()))
        .with_property("name", SchemaNode::string())
        .with_property("enabled", SchemaNode::boolean())
        .with_property("replicas", SchemaNode::integer().with_default(json!(1)))
        .with_required(&["name", "tags", "enabled"]);

    let yaml = generate(schema, base_opts());

    let enabled = yaml.find("enabled:").unwrap();
    let name = yaml.find("name: <TODO_NAME>").unwrap();
    let tags = yaml.find("tags:").unwrap();
    let replicas = yaml.find("replicas:").unwrap();
    assert!(enabled < name && name < tags && tags < replicas);
}

#[test]
fn required_array_of_primitives_gets_example_pair() {
    let schema = SchemaNode::object()
        .with_property("values", SchemaNode::array(SchemaNode::integer()))
        .with_required(&["values"]);

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains("    values: [0, 0]\n"));
}

#[test]
fn defaulted_array_reproduces_items_as_commented_block() {
    let schema = SchemaNode::object().with_property(
        "ports",
        SchemaNode::array(SchemaNode::integer()).with_default(json!([80, 443])),
    );

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains("    # ports:\n      # - 80\n      # - 443\n"));
}

#[test]
fn empty_default_array_stays_inline() {
    let schema = SchemaNode::object().with_property(
        "ports",
        SchemaNode::array(SchemaNode::integer()).with_default(json!([])),
    );

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains("    # ports: []\n"));
}

#[test]
fn required_object_with_optional_children_renders_empty_object() {
    let schema = SchemaNode::object()
        .with_property(
            "resources",
            SchemaNode::object()
                .with_property("cpu", SchemaNode::string().with_default(json!("100m")))
                .with_property("memory", SchemaNode::string().with_default(json!("128Mi"))),
        )
        .with_required(&["resources"]);

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains(
        "    resources: {}\n    # resources:\n      # cpu: 100m\n      # memory: 128Mi\n"
    ));
}

#[test]
fn empty_object_hint_follows_structural_comments_option() {
    let schema = SchemaNode::object()
        .with_property(
            "resources",
            SchemaNode::object()
                .with_property("cpu", SchemaNode::string().with_default(json!("100m"))),
        )
        .with_required(&["resources"]);

    let opts = Options {
        include_structural_comments: true,
        ..base_opts()
    };
    let yaml = generate(schema, opts);

    assert!(yaml.contains("    resources: {}\n\n    # Empty object, or customize:\n    # resources:\n"));
}

#[test]
fn optional_object_is_fully_commented() {
    let schema = SchemaNode::object().with_property(
        "advanced",
        SchemaNode::object()
            .with_property("timeout", SchemaNode::integer().with_default(json!(30)))
            .with_property(
                "mode",
                SchemaNode::string().with_enum(vec![json!("fast"), json!("safe")]),
            )
            .with_default(json!({})),
    );

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains("    # advanced:\n      # timeout: 30\n      # mode: fast\n"));
}

#[test]
fn required_enum_renders_first_value_active() {
    let schema = SchemaNode::object()
        .with_property(
            "level",
            SchemaNode::string().with_enum(vec![json!("debug"), json!("info")]),
        )
        .with_required(&["level"]);

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains("    level: debug\n"));
    assert!(!yaml.contains("<TODO_LEVEL>"));
}

#[test]
fn nested_object_without_default_collapses_in_guidance() {
    let schema = SchemaNode::object()
        .with_property(
            "resources",
            SchemaNode::object()
                .with_property("cpu", SchemaNode::string().with_default(json!("100m")))
                .with_property(
                    "limits",
                    SchemaNode::object()
                        .with_property("memory", SchemaNode::string().with_default(json!("128Mi"))),
                ),
        )
        .with_required(&["resources"]);

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains(
        "    resources: {}\n    # resources:\n      # cpu: 100m\n      # limits: {}\n"
    ));
    assert!(!yaml.contains("memory"));
}

#[test]
fn nested_object_with_concrete_default_expands_in_guidance() {
    let schema = SchemaNode::object()
        .with_property(
            "resources",
            SchemaNode::object()
                .with_property("cpu", SchemaNode::string().with_default(json!("100m")))
                .with_property(
                    "limits",
                    SchemaNode::object()
                        .with_property("memory", SchemaNode::string())
                        .with_default(json!({"memory": "256Mi"})),
                ),
        )
        .with_required(&["resources"]);

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains(
        "    # resources:\n      # cpu: 100m\n      # limits:\n        # memory: 256Mi\n"
    ));
}

#[test]
fn commented_expansion_arrays_render_block_or_empty() {
    let schema = SchemaNode::object().with_property(
        "advanced",
        SchemaNode::object()
            .with_property(
                "hosts",
                SchemaNode::array(SchemaNode::string()).with_default(json!(["a", "b"])),
            )
            .with_property("tags", SchemaNode::array(SchemaNode::string()))
            .with_default(json!({})),
    );

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains(
        "    # advanced:\n      # hosts:\n        # - a\n        # - b\n      # tags: []\n"
    ));
}

#[test]
fn required_object_with_required_children_recurses_actively() {
    let schema = SchemaNode::object()
        .with_property(
            "endpoint",
            SchemaNode::object()
                .with_property("host", SchemaNode::string())
                .with_property("port", SchemaNode::integer().with_default(json!(443)))
                .with_required(&["host"]),
        )
        .with_required(&["endpoint"]);

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains(
        "    endpoint:\n      host: <TODO_HOST>\n\n      # Defaults: Uncomment to customize\n      # port: 443\n"
    ));
}

#[test]
fn required_array_of_objects_renders_two_skeleton_items() {
    let schema = SchemaNode::object()
        .with_property(
            "containers",
            SchemaNode::array(
                SchemaNode::object()
                    .with_property("image", SchemaNode::string())
                    .with_property("name", SchemaNode::string())
                    .with_required(&["image", "name"]),
            ),
        )
        .with_required(&["containers"]);

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains(
        "    containers:\n      - image: <TODO_IMAGE>\n        name: <TODO_NAME>\n      - image: <TODO_IMAGE>\n        name: <TODO_NAME>\n"
    ));
}

#[test]
fn optional_map_shows_example_entries() {
    let schema = SchemaNode::object()
        .with_property("labels", SchemaNode::map(SchemaNode::string()));

    let opts = Options {
        include_all_fields: true,
        ..base_opts()
    };
    let yaml = generate(schema, opts);

    assert!(yaml.contains("    # labels:\n      # key1: example\n      # key2: example\n"));
}

#[test]
fn defaulted_map_reproduces_entries_sorted() {
    let schema = SchemaNode::object().with_property(
        "labels",
        SchemaNode::map(SchemaNode::string()).with_default(json!({"tier": "web", "app": "demo"})),
    );

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains("    # labels:\n      # app: demo\n      # tier: web\n"));
}

#[test]
fn map_of_objects_renders_entry_fields() {
    let schema = SchemaNode::object()
        .with_property(
            "services",
            SchemaNode::map(
                SchemaNode::object()
                    .with_property("port", SchemaNode::integer())
                    .with_required(&["port"]),
            ),
        )
        .with_required(&["services"]);

    let yaml = generate(schema, base_opts());

    assert!(yaml.contains(
        "    services:\n      key1:\n        port: <TODO_PORT>\n      key2:\n        port: <TODO_PORT>\n"
    ));
}

#[test]
fn enum_default_and_description_render_inline() {
    let schema = SchemaNode::object().with_property(
        "level",
        SchemaNode::string()
            .with_enum(vec![json!("debug"), json!("info"), json!("warn")])
            .with_default(json!("debug"))
            .with_description("Log level"),
    );

    let opts = Options {
        include_field_descriptions: true,
        ..base_opts()
    };
    let yaml = generate(schema, opts);

    assert!(yaml.contains("    # level: debug # Log level (also: info, warn)\n"));
}

#[test]
fn traits_render_sorted_with_instance_names() {
    let mut traits = BTreeMap::new();
    traits.insert(
        "alpha".to_string(),
        Some(
            SchemaNode::object()
                .with_property("replicas", SchemaNode::integer())
                .with_required(&["replicas"]),
        ),
    );
    traits.insert("beta".to_string(), None);

    let mut opts = base_opts();
    opts.trait_instance_names
        .insert("alpha".to_string(), "alpha-1".to_string());

    let yaml = Generator::new("Service", "deployment", None, traits, None, None, opts)
        .generate()
        .unwrap();

    assert!(yaml.contains("# Traits: alpha, beta\n"));
    assert!(yaml.contains(
        "  traits:\n    - name: alpha\n      instanceName: alpha-1\n      parameters:\n        replicas: <TODO_REPLICAS>\n    - name: beta\n      instanceName: <beta-instance>\n"
    ));
}

#[test]
fn workflow_section_renders_repository_skeleton() {
    let opts = Options {
        include_workflow: true,
        ..base_opts()
    };
    let yaml = Generator::new(
        "Service",
        "deployment",
        None,
        BTreeMap::new(),
        Some("docker-build".to_string()),
        None,
        opts,
    )
    .generate()
    .unwrap();

    assert!(yaml.contains("# Workflow: docker-build\n"));
    assert!(yaml.contains(
        "  workflow:\n    name: docker-build\n    systemParameters:\n      repository:\n        url: <TODO_REPOSITORY_URL> # Git repository URL\n        revision:\n          branch: <TODO_BRANCH> # Git branch to build from\n        appPath: <TODO_APP_PATH> # Path to application code within repository\n"
    ));
}

#[test]
fn workflow_omitted_unless_enabled() {
    let yaml = Generator::new(
        "Service",
        "deployment",
        None,
        BTreeMap::new(),
        Some("docker-build".to_string()),
        None,
        base_opts(),
    )
    .generate()
    .unwrap();

    assert!(!yaml.contains("workflow"));
}

#[test]
fn structural_comments_annotate_sections() {
    let schema = SchemaNode::object()
        .with_property("name", SchemaNode::string())
        .with_required(&["name"]);
    let opts = Options {
        include_structural_comments: true,
        ..base_opts()
    };

    let yaml = generate(schema, opts);

    assert!(yaml.contains("  # autoDeploy: true # Enable automatic deployment on changes\n"));
    assert!(yaml.contains("\n  # Parameters for the ComponentType\n  parameters:\n"));
}

#[test]
fn output_is_deterministic() {
    let schema = SchemaNode::object()
        .with_property("name", SchemaNode::string())
        .with_property("port", SchemaNode::integer().with_default(json!(8080)))
        .with_property(
            "resources",
            SchemaNode::object()
                .with_property("cpu", SchemaNode::string().with_default(json!("100m"))),
        )
        .with_required(&["name", "resources"]);

    let first = generate(schema.clone(), base_opts());
    let second = generate(schema, base_opts());

    assert_eq!(first, second);
}

#[test]
fn output_parses_as_yaml() {
    let schema = SchemaNode::object()
        .with_property("name", SchemaNode::string())
        .with_property("port", SchemaNode::integer().with_default(json!(8080)))
        .with_property(
            "resources",
            SchemaNode::object()
                .with_property("cpu", SchemaNode::string().with_default(json!("100m"))),
        )
        .with_required(&["name", "resources"]);

    let yaml = generate(schema, base_opts());
    let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert!(parsed.get("spec").is_some());
}

#[test]
fn invalid_schema_reports_component_error() {
    let schema = SchemaNode::object()
        .with_property("bad", SchemaNode::string().with_property("x", SchemaNode::string()));

    let err = Generator::new(
        "Service",
        "deployment",
        Some(schema),
        BTreeMap::new(),
        None,
        None,
        base_opts(),
    )
    .generate()
    .unwrap_err();

    assert!(err.to_string().starts_with("processing component schema:"));
}
