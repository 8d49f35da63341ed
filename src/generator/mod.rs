//! Deterministic scaffold generation from a canonical `WorkflowSpec`.
//!
//! Generation is all-or-nothing: a preflight pass collects every spec
//! violation before a single artifact is produced, and the emission order
//! is fixed (schema, node modules in spec order, flow wiring, tests,
//! manifests, doc). Two calls with identical inputs produce byte-identical
//! artifact content.

use crate::error::{SpecViolation, SpecificationError};
use crate::resolver::DependencyBundle;
use crate::workflow::WorkflowSpec;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

pub mod artifact;
pub mod naming;
mod templates;

pub use artifact::*;

use naming::{RESERVED_MODULE_NAMES, snake_case};

/// The single recognized placeholder marker. Greppable by contract: every
/// developer-supplied region the generator leaves open carries exactly this
/// token.
pub const PLACEHOLDER_TOKEN: &str = "@@TODO@@";

pub struct Generator {
    spec: WorkflowSpec,
    deps: DependencyBundle,
    emit_readme: bool,
}

pub struct GeneratorBuilder {
    spec: WorkflowSpec,
    deps: DependencyBundle,
    emit_readme: bool,
}

impl GeneratorBuilder {
    pub fn new(spec: WorkflowSpec, deps: DependencyBundle) -> Self {
        Self {
            spec,
            deps,
            emit_readme: true,
        }
    }

    /// Suppresses the trailing `README.md` doc artifact.
    pub fn without_readme(mut self) -> Self {
        self.emit_readme = false;
        self
    }

    pub fn build(self) -> Generator {
        Generator {
            spec: self.spec,
            deps: self.deps,
            emit_readme: self.emit_readme,
        }
    }
}

impl Generator {
    pub fn builder(spec: WorkflowSpec, deps: DependencyBundle) -> GeneratorBuilder {
        GeneratorBuilder::new(spec, deps)
    }

    /// Generates the ordered artifact sequence, or fails with every spec
    /// violation found. No artifact is emitted on failure.
    pub fn generate(self) -> Result<Vec<FileArtifact>, SpecificationError> {
        let violations = preflight(&self.spec);
        if !violations.is_empty() {
            return Err(SpecificationError::new(violations));
        }

        let spec = &self.spec;
        let mut artifacts = Vec::with_capacity(spec.nodes.len() * 2 + 6);

        artifacts.push(FileArtifact {
            relative_path: "src/state.rs".to_string(),
            content: templates::schema_module(spec),
            kind: ArtifactKind::Schema,
        });

        for node in &spec.nodes {
            artifacts.push(FileArtifact {
                relative_path: format!("src/{}.rs", snake_case(&node.name)),
                content: templates::node_module(node),
                kind: ArtifactKind::NodeModule,
            });
        }

        artifacts.push(FileArtifact {
            relative_path: "src/lib.rs".to_string(),
            content: templates::flow_module(spec),
            kind: ArtifactKind::FlowModule,
        });

        for node in &spec.nodes {
            artifacts.push(FileArtifact {
                relative_path: format!("tests/{}_test.rs", snake_case(&node.name)),
                content: templates::node_test(spec, node),
                kind: ArtifactKind::Test,
            });
        }
        artifacts.push(FileArtifact {
            relative_path: "tests/flow_test.rs".to_string(),
            content: templates::flow_test(spec),
            kind: ArtifactKind::Test,
        });

        artifacts.push(FileArtifact {
            relative_path: "Cargo.toml".to_string(),
            content: templates::cargo_manifest(spec, &self.deps),
            kind: ArtifactKind::Manifest,
        });
        for (tool, config) in &self.deps.tool_configs {
            artifacts.push(FileArtifact {
                relative_path: templates::tool_config_path(tool),
                content: config.clone(),
                kind: ArtifactKind::Manifest,
            });
        }

        if self.emit_readme {
            artifacts.push(FileArtifact {
                relative_path: "README.md".to_string(),
                content: templates::readme(spec),
                kind: ArtifactKind::Doc,
            });
        }

        Ok(artifacts)
    }

    /// Like `generate`, but wraps the artifacts in a persistable bundle.
    pub fn generate_bundle(self) -> Result<ScaffoldBundle, SpecificationError> {
        let project_name = self.spec.project_name.clone();
        let pattern_id = self.spec.pattern_id.clone();
        let artifacts = self.generate()?;
        Ok(ScaffoldBundle::new(project_name, pattern_id, artifacts))
    }
}

/// Checks every generation precondition, returning all violations found.
fn preflight(spec: &WorkflowSpec) -> Vec<SpecViolation> {
    let mut violations = Vec::new();

    if spec.project_name.trim().is_empty() {
        violations.push(SpecViolation::EmptyProjectName);
    } else if snake_case(&spec.project_name).is_empty() {
        // A symbol-only name would render an empty package name and an
        // unusable crate path in the generated test stubs.
        violations.push(SpecViolation::InvalidProjectName(
            spec.project_name.clone(),
        ));
    }
    if spec.nodes.is_empty() {
        violations.push(SpecViolation::EmptyNodeSet);
    }

    // Duplicates are reported once each, in first-occurrence order.
    let mut seen_names: AHashSet<&str> = AHashSet::new();
    let mut reported_names: AHashSet<&str> = AHashSet::new();
    for node in &spec.nodes {
        if !seen_names.insert(node.name.as_str()) && reported_names.insert(node.name.as_str()) {
            violations.push(SpecViolation::DuplicateNodeName(node.name.clone()));
        }
    }

    // Distinct node names must not collide after module-name derivation.
    let mut modules: AHashMap<String, &str> = AHashMap::new();
    for node in spec.nodes.iter().unique_by(|n| n.name.as_str()) {
        let module = snake_case(&node.name);
        if RESERVED_MODULE_NAMES.contains(&module.as_str()) || module.is_empty() {
            violations.push(SpecViolation::ReservedNodeName(node.name.clone()));
            continue;
        }
        if let Some(first) = modules.get(&module) {
            violations.push(SpecViolation::ModuleCollision {
                first: first.to_string(),
                second: node.name.clone(),
                module,
            });
        } else {
            modules.insert(module, &node.name);
        }
    }

    let node_names: Vec<&str> = spec.nodes.iter().map(|n| n.name.as_str()).collect();
    for edge in &spec.edges {
        for endpoint in [&edge.source, &edge.target] {
            if !node_names.contains(&endpoint.as_str()) {
                violations.push(SpecViolation::MissingEdgeNode {
                    source_node: edge.source.clone(),
                    target: edge.target.clone(),
                    missing: endpoint.clone(),
                });
            }
        }
    }

    let mut seen_actions: AHashSet<(&str, &str)> = AHashSet::new();
    let mut reported_actions: AHashSet<(&str, &str)> = AHashSet::new();
    for edge in &spec.edges {
        let key = (edge.source.as_str(), edge.action.as_str());
        if !seen_actions.insert(key) && reported_actions.insert(key) {
            violations.push(SpecViolation::DuplicateEdgeAction {
                source_node: edge.source.clone(),
                action: edge.action.clone(),
            });
        }
    }

    violations
}
