//! Text templates for every artifact kind.
//!
//! All output is a pure function of the spec and the dependency bundle:
//! no timestamps, no random identifiers, no environment lookups. That is
//! what makes `generate` idempotent down to the byte.

use super::PLACEHOLDER_TOKEN;
use super::naming::{package_name, snake_case, upper_camel};
use crate::resolver::{DependencyBundle, PackageRef};
use crate::workflow::{NodeKind, NodeSpec, WorkflowSpec};
use std::fmt::Write;

/// Renders `src/state.rs`, the shared-state schema stub.
pub(super) fn schema_module(spec: &WorkflowSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "//! Shared state passed between the nodes of `{}`.\n",
        spec.project_name
    );
    out.push_str("use serde::{Deserialize, Serialize};\n\n");
    out.push_str("/// The record every node reads from and writes to.\n");
    out.push_str("#[derive(Debug, Clone, Default, Serialize, Deserialize)]\n");

    if spec.shared_state.is_empty() {
        out.push_str("pub struct SharedState {\n");
        let _ = writeln!(
            out,
            "    // {} declare the fields your nodes share",
            PLACEHOLDER_TOKEN
        );
        out.push_str("}\n");
    } else {
        out.push_str("pub struct SharedState {\n");
        for field in &spec.shared_state {
            let _ = writeln!(out, "    pub {}: {},", snake_case(&field.name), field.field_type);
        }
        out.push_str("}\n");
    }
    out
}

/// Renders `src/<node>.rs`, one node module with its three lifecycle
/// regions.
///
/// The regions are real methods, pre-filled with the placeholder token and
/// a line of guidance. A filled-in region simply loses its marker; the
/// region itself must never be removed.
pub(super) fn node_module(node: &NodeSpec) -> String {
    let module = snake_case(&node.name);
    let type_name = upper_camel(&node.name);
    let base = node.kind.base_trait();
    let purpose = if node.purpose.is_empty() {
        format!("The `{}` node.", module)
    } else {
        node.purpose.clone()
    };

    let mut out = String::new();
    let _ = writeln!(out, "//! {}\n", purpose);
    out.push_str("use crate::state::SharedState;\n");
    match node.kind {
        NodeKind::Batch | NodeKind::AsyncBatch => {
            let _ = writeln!(out, "use crate::{{Action, BatchItem, {}}};\n", base);
        }
        _ => {
            let _ = writeln!(out, "use crate::{{Action, {}}};\n", base);
        }
    }

    let _ = writeln!(out, "/// Node `{}` (kind: {}).", module, node.kind);
    out.push_str("#[derive(Debug, Default)]\n");
    let _ = writeln!(out, "pub struct {};\n", type_name);

    let _ = writeln!(out, "impl {} {{", type_name);
    out.push_str("    /// Name this node registers under in the flow graph.\n");
    let _ = writeln!(out, "    pub const NODE_NAME: &'static str = \"{}\";", module);
    out.push_str("}\n\n");

    let _ = writeln!(out, "impl {} for {} {{", base, type_name);
    let a = if matches!(node.kind, NodeKind::Async | NodeKind::AsyncBatch) {
        "async "
    } else {
        ""
    };

    match node.kind {
        NodeKind::Sync | NodeKind::Async => {
            let _ = writeln!(out, "    {}fn prep(&mut self, _state: &mut SharedState) {{", a);
            let _ = writeln!(
                out,
                "        // {} gather and validate the inputs this node needs",
                PLACEHOLDER_TOKEN
            );
            out.push_str("    }\n\n");
            let _ = writeln!(
                out,
                "    {}fn exec(&mut self, _state: &mut SharedState) -> Action {{",
                a
            );
            let _ = writeln!(out, "        // {} implement: {}", PLACEHOLDER_TOKEN, purpose);
            out.push_str("        Action::from(\"default\")\n");
            out.push_str("    }\n\n");
            let _ = writeln!(
                out,
                "    {}fn post(&mut self, _state: &mut SharedState, _action: &Action) {{",
                a
            );
            let _ = writeln!(
                out,
                "        // {} write results back into shared state",
                PLACEHOLDER_TOKEN
            );
            out.push_str("    }\n");
        }
        NodeKind::Batch | NodeKind::AsyncBatch => {
            let _ = writeln!(
                out,
                "    {}fn prep(&mut self, _state: &mut SharedState) -> Vec<BatchItem> {{",
                a
            );
            let _ = writeln!(
                out,
                "        // {} split the work into batch items",
                PLACEHOLDER_TOKEN
            );
            out.push_str("        Vec::new()\n");
            out.push_str("    }\n\n");
            let _ = writeln!(out, "    {}fn exec(&mut self, _item: &BatchItem) -> Action {{", a);
            let _ = writeln!(
                out,
                "        // {} process one batch item: {}",
                PLACEHOLDER_TOKEN, purpose
            );
            out.push_str("        Action::from(\"default\")\n");
            out.push_str("    }\n\n");
            let _ = writeln!(
                out,
                "    {}fn post(&mut self, _state: &mut SharedState, _actions: &[Action]) {{",
                a
            );
            let _ = writeln!(
                out,
                "        // {} merge per-item results into shared state",
                PLACEHOLDER_TOKEN
            );
            out.push_str("    }\n");
        }
    }
    out.push_str("}\n");
    out
}

/// Renders `src/lib.rs`, the flow-wiring module. Declares the module tree,
/// the node base traits, and the directed graph of nodes and labeled edges.
pub(super) fn flow_module(spec: &WorkflowSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "//! Flow wiring for `{}` (pattern: `{}`).\n//!\n//! Generated scaffold: every `{}` region is intentionally unimplemented.\n",
        spec.project_name, spec.pattern_id, PLACEHOLDER_TOKEN
    );

    out.push_str("pub mod state;\n");
    for node in &spec.nodes {
        let _ = writeln!(out, "pub mod {};", snake_case(&node.name));
    }
    out.push('\n');
    out.push_str("pub use state::SharedState;\n\n");
    for node in &spec.nodes {
        let _ = writeln!(
            out,
            "use crate::{}::{};",
            snake_case(&node.name),
            upper_camel(&node.name)
        );
    }
    out.push('\n');

    out.push_str(BASE_TRAITS);

    out.push_str("/// A directed, labeled transition between two nodes.\n");
    out.push_str("#[derive(Debug, Clone)]\n");
    out.push_str("pub struct FlowEdge {\n");
    out.push_str("    pub source: &'static str,\n");
    out.push_str("    pub action: &'static str,\n");
    out.push_str("    pub target: &'static str,\n");
    out.push_str("}\n\n");

    out.push_str("/// The flow graph: node registry plus labeled edges.\n");
    out.push_str("#[derive(Debug, Clone)]\n");
    out.push_str("pub struct Flow {\n");
    out.push_str("    pub name: &'static str,\n");
    out.push_str("    pub nodes: Vec<&'static str>,\n");
    out.push_str("    pub edges: Vec<FlowEdge>,\n");
    out.push_str("}\n\n");

    out.push_str("impl Flow {\n");
    out.push_str("    /// Runs the graph from the first registered node.\n");
    out.push_str("    pub fn run(&self, state: &mut SharedState) {\n");
    let _ = writeln!(
        out,
        "        // {} drive each node through prep/exec/post and follow the action edges",
        PLACEHOLDER_TOKEN
    );
    out.push_str("        let _ = state;\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    let _ = writeln!(out, "/// Builds the `{}` flow graph.", spec.project_name);
    out.push_str("pub fn flow() -> Flow {\n");
    out.push_str("    let nodes = vec![\n");
    for node in &spec.nodes {
        let _ = writeln!(out, "        {}::NODE_NAME,", upper_camel(&node.name));
    }
    out.push_str("    ];\n");
    out.push_str("    let edges = vec![\n");
    for edge in &spec.edges {
        let _ = writeln!(
            out,
            "        FlowEdge {{ source: \"{}\", action: \"{}\", target: \"{}\" }},",
            snake_case(&edge.source),
            edge.action,
            snake_case(&edge.target)
        );
    }
    out.push_str("    ];\n");
    let _ = writeln!(
        out,
        "    Flow {{ name: \"{}\", nodes, edges }}",
        spec.project_name
    );
    out.push_str("}\n");
    out
}

const BASE_TRAITS: &str = "\
/// The label a node emits to select its outgoing edge.
pub type Action = String;

/// One unit of work produced by a batch node's preparation region.
pub type BatchItem = String;

/// Base trait for synchronous nodes.
pub trait SyncNode {
    fn prep(&mut self, state: &mut SharedState);
    fn exec(&mut self, state: &mut SharedState) -> Action;
    fn post(&mut self, state: &mut SharedState, action: &Action);
}

/// Base trait for asynchronous nodes.
pub trait AsyncNode {
    async fn prep(&mut self, state: &mut SharedState);
    async fn exec(&mut self, state: &mut SharedState) -> Action;
    async fn post(&mut self, state: &mut SharedState, action: &Action);
}

/// Base trait for batch nodes: prep fans out, exec runs per item.
pub trait BatchNode {
    fn prep(&mut self, state: &mut SharedState) -> Vec<BatchItem>;
    fn exec(&mut self, item: &BatchItem) -> Action;
    fn post(&mut self, state: &mut SharedState, actions: &[Action]);
}

/// Base trait for asynchronous batch nodes.
pub trait AsyncBatchNode {
    async fn prep(&mut self, state: &mut SharedState) -> Vec<BatchItem>;
    async fn exec(&mut self, item: &BatchItem) -> Action;
    async fn post(&mut self, state: &mut SharedState, actions: &[Action]);
}

";

/// Renders `tests/<node>_test.rs`, the per-node test stub.
pub(super) fn node_test(spec: &WorkflowSpec, node: &NodeSpec) -> String {
    let module = snake_case(&node.name);
    let type_name = upper_camel(&node.name);
    let crate_name = snake_case(&spec.project_name);

    let mut out = String::new();
    let _ = writeln!(out, "//! Tests for node `{}`.\n", module);
    let _ = writeln!(out, "use {}::{}::{};\n", crate_name, module, type_name);
    out.push_str("#[test]\n");
    let _ = writeln!(out, "fn {}_registers_under_its_flow_name() {{", module);
    let _ = writeln!(out, "    assert_eq!({}::NODE_NAME, \"{}\");", type_name, module);
    let _ = writeln!(
        out,
        "    // {} exercise prep/exec/post once the node logic is filled in",
        PLACEHOLDER_TOKEN
    );
    out.push_str("}\n");
    out
}

/// Renders `tests/flow_test.rs`, the flow-level wiring test stub.
pub(super) fn flow_test(spec: &WorkflowSpec) -> String {
    let crate_name = snake_case(&spec.project_name);
    let mut out = String::new();
    let _ = writeln!(out, "//! Wiring-level tests for the `{}` flow.\n", spec.project_name);
    let _ = writeln!(out, "use {}::flow;\n", crate_name);
    out.push_str("#[test]\n");
    out.push_str("fn flow_declares_every_node_and_edge() {\n");
    out.push_str("    let flow = flow();\n");
    let _ = writeln!(out, "    assert_eq!(flow.nodes.len(), {});", spec.nodes.len());
    let _ = writeln!(out, "    assert_eq!(flow.edges.len(), {});", spec.edges.len());
    let _ = writeln!(
        out,
        "    // {} add end-to-end assertions once node logic is filled in",
        PLACEHOLDER_TOKEN
    );
    out.push_str("}\n");
    out
}

/// Renders `Cargo.toml` from the dependency bundle.
pub(super) fn cargo_manifest(spec: &WorkflowSpec, deps: &DependencyBundle) -> String {
    let mut out = String::new();
    out.push_str("[package]\n");
    let _ = writeln!(out, "name = \"{}\"", package_name(&spec.project_name));
    out.push_str("version = \"0.1.0\"\n");
    out.push_str("edition = \"2024\"\n");
    let _ = writeln!(
        out,
        "description = \"Generated `{}` workflow scaffold\"\n",
        spec.pattern_id
    );

    out.push_str("[dependencies]\n");
    for package in &deps.runtime_packages {
        out.push_str(&render_package(package));
    }

    if !deps.dev_packages.is_empty() {
        out.push_str("\n[dev-dependencies]\n");
        for package in &deps.dev_packages {
            out.push_str(&render_package(package));
        }
    }
    out
}

fn render_package(package: &PackageRef) -> String {
    if package.features.is_empty() {
        format!("{} = \"{}\"\n", package.name, package.version)
    } else {
        let features = package
            .features
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} = {{ version = \"{}\", features = [{}] }}\n",
            package.name, package.version, features
        )
    }
}

/// Relative path for a tool config artifact.
pub(super) fn tool_config_path(tool: &str) -> String {
    match tool {
        "rustfmt" => "rustfmt.toml".to_string(),
        "clippy" => "clippy.toml".to_string(),
        other => format!("{}.toml", snake_case(other)),
    }
}

/// Renders `README.md`, the human-facing overview of the generated
/// scaffold.
pub(super) fn readme(spec: &WorkflowSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", spec.project_name);
    let _ = writeln!(
        out,
        "Generated `{}` workflow scaffold. Every region marked `{}` is\nintentionally unimplemented: fill the markers in, keep the lifecycle\nmethods in place, and the structural validator will stay green.\n",
        spec.pattern_id, PLACEHOLDER_TOKEN
    );

    out.push_str("## Nodes\n\n");
    out.push_str("| Node | Kind | Purpose |\n|------|------|---------|\n");
    for node in &spec.nodes {
        let _ = writeln!(
            out,
            "| `{}` | {} | {} |",
            snake_case(&node.name),
            node.kind,
            node.purpose
        );
    }

    if !spec.edges.is_empty() {
        out.push_str("\n## Transitions\n\n");
        for edge in &spec.edges {
            let _ = writeln!(
                out,
                "- `{}` --[{}]--> `{}`",
                snake_case(&edge.source),
                edge.action,
                snake_case(&edge.target)
            );
        }
    }
    out
}
