use itertools::Itertools;
use thiserror::Error;

/// Errors raised while loading configuration: the pattern catalog or the
/// static generation rule tables.
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Unknown pattern id '{0}'; no generation rules are registered for it")]
    UnknownPattern(String),

    #[error("Invalid pattern profile '{id}': {message}")]
    InvalidProfile { id: String, message: String },

    #[error("Catalog fallback pattern '{0}' is not declared in the profile list")]
    MissingFallback(String),

    #[error("Failed to parse pattern catalog JSON: {0}")]
    CatalogParse(String),
}

/// A single precondition violated by a `WorkflowSpec`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecViolation {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("project name '{0}' contains no usable identifier characters")]
    InvalidProjectName(String),

    #[error("workflow declares no nodes")]
    EmptyNodeSet,

    #[error("duplicate node name '{0}'")]
    DuplicateNodeName(String),

    #[error("node '{name}' has unrecognized kind '{kind}'")]
    UnknownNodeKind { name: String, kind: String },

    #[error("node name '{0}' maps to a reserved Rust module name")]
    ReservedNodeName(String),

    #[error("node names '{first}' and '{second}' both map to module '{module}'")]
    ModuleCollision {
        first: String,
        second: String,
        module: String,
    },

    // Field is not named `source`: thiserror would treat that as the
    // error's cause and require `std::error::Error` on it.
    #[error("edge '{source_node}' -> '{target}' references missing node '{missing}'")]
    MissingEdgeNode {
        source_node: String,
        target: String,
        missing: String,
    },

    #[error("duplicate edge action ('{source_node}', \"{action}\")")]
    DuplicateEdgeAction {
        source_node: String,
        action: String,
    },
}

/// Raised by the generator's preflight when a `WorkflowSpec` breaks its
/// invariants. Every violation found is collected before failing, so a
/// caller can repair the spec in one pass instead of iterating.
#[derive(Error, Debug, Clone)]
#[error("invalid workflow spec ({} violation(s)): {}", .violations.len(), render_violations(.violations))]
pub struct SpecificationError {
    pub violations: Vec<SpecViolation>,
}

impl SpecificationError {
    pub fn new(violations: Vec<SpecViolation>) -> Self {
        Self { violations }
    }
}

fn render_violations(violations: &[SpecViolation]) -> String {
    violations.iter().map(|v| v.to_string()).join("; ")
}

/// Errors raised while persisting or restoring a `ScaffoldBundle`, or while
/// handing artifacts to the filesystem sink.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Could not {action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: String,
        source: std::io::Error,
    },

    #[error("Scaffold bundle encoding failed: {0}")]
    Encode(String),

    #[error("Scaffold bundle decoding failed: {0}")]
    Decode(String),
}
