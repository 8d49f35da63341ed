use super::definition::{EdgeSpec, NodeKind, NodeSpec, StateField, WorkflowSpec};
use crate::error::{SpecViolation, SpecificationError};

/// A trait for custom data models that can be converted into a canonical
/// `WorkflowSpec`.
///
/// This is the primary extension point for keeping the pipeline
/// format-agnostic. Orchestrating callers parse whatever document format
/// they use, then implement `IntoWorkflow` on their structs to hand the
/// generator a canonical spec. Conversion is where unknown node kinds are
/// rejected: the canonical model cannot represent them, so they fail fast
/// here rather than surfacing later as validation findings.
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a canonical workflow spec.
    fn into_workflow(self) -> Result<WorkflowSpec, SpecificationError>;
}

/// The raw, serialization-facing form of a workflow document. Node kinds
/// are plain strings here so that a malformed document can be reported with
/// every bad kind named, instead of failing on the first one.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawWorkflow {
    pub project_name: String,
    pub pattern_id: String,
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub shared_state: Vec<StateField>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawNode {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub purpose: String,
}

impl IntoWorkflow for RawWorkflow {
    fn into_workflow(self) -> Result<WorkflowSpec, SpecificationError> {
        let mut violations = Vec::new();
        let mut nodes = Vec::with_capacity(self.nodes.len());

        for raw in &self.nodes {
            match NodeKind::parse(&raw.kind) {
                Some(kind) => nodes.push(NodeSpec {
                    name: raw.name.clone(),
                    kind,
                    purpose: raw.purpose.clone(),
                }),
                None => violations.push(SpecViolation::UnknownNodeKind {
                    name: raw.name.clone(),
                    kind: raw.kind.clone(),
                }),
            }
        }

        if !violations.is_empty() {
            return Err(SpecificationError::new(violations));
        }

        Ok(WorkflowSpec {
            project_name: self.project_name,
            pattern_id: self.pattern_id,
            nodes,
            edges: self.edges,
            shared_state: self.shared_state,
        })
    }
}
