use serde::{Deserialize, Serialize};

/// The complete, canonical description of a workflow, ready for generation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowSpec {
    pub project_name: String,
    pub pattern_id: String,
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub shared_state: Vec<StateField>,
}

/// Defines a single node (one unit of work) in the workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub purpose: String,
}

/// The execution shape of a node. Closed set: specs carrying any other kind
/// name are rejected during conversion, before generation begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Sync,
    Async,
    Batch,
    AsyncBatch,
}

impl NodeKind {
    /// The base trait a generated node module must implement for this kind.
    pub fn base_trait(&self) -> &'static str {
        match self {
            NodeKind::Sync => "SyncNode",
            NodeKind::Async => "AsyncNode",
            NodeKind::Batch => "BatchNode",
            NodeKind::AsyncBatch => "AsyncBatchNode",
        }
    }

    /// Parses a kind name as it appears in external spec documents.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Sync" => Some(NodeKind::Sync),
            "Async" => Some(NodeKind::Async),
            "Batch" => Some(NodeKind::Batch),
            "AsyncBatch" => Some(NodeKind::AsyncBatch),
            _ => None,
        }
    }

    /// Resolves a generated base-trait name back to its kind.
    pub fn from_base_trait(trait_name: &str) -> Option<Self> {
        match trait_name {
            "SyncNode" => Some(NodeKind::Sync),
            "AsyncNode" => Some(NodeKind::Async),
            "BatchNode" => Some(NodeKind::Batch),
            "AsyncBatchNode" => Some(NodeKind::AsyncBatch),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Sync => "Sync",
            NodeKind::Async => "Async",
            NodeKind::Batch => "Batch",
            NodeKind::AsyncBatch => "AsyncBatch",
        };
        write!(f, "{}", name)
    }
}

/// Defines a directed, labeled transition between two nodes. Multiple edges
/// may leave the same source as long as their `action` labels differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    #[serde(default = "default_action")]
    pub action: String,
}

fn default_action() -> String {
    "default".to_string()
}

/// One field of the shared-state record every node reads and writes.
/// `field_type` is carried verbatim into the generated schema stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}
