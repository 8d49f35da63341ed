//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the sekkei
//! crate. Import this module to drive the full classify/generate/validate
//! pipeline without importing each type individually.

// Classification
pub use crate::classifier::{ClassificationResult, MIN_CONFIDENCE, NodeSketch, classify};

// Catalog and rule tables
pub use crate::catalog::{PatternCatalog, PatternProfile, rules_for};

// Workflow model and conversion
pub use crate::workflow::{
    EdgeSpec, IntoWorkflow, NodeKind, NodeSpec, RawWorkflow, StateField, WorkflowSpec,
};

// Dependency resolution
pub use crate::resolver::{DependencyBundle, PackageRef, resolve};

// Generation
pub use crate::generator::{
    ArtifactKind, FileArtifact, Generator, PLACEHOLDER_TOKEN, ScaffoldBundle,
};

// Validation
pub use crate::validator::{
    Finding, ReportFormatter, Severity, ValidationReport, Validator, all_pass,
    first_blocking_rule, validate,
};

// Error types
pub use crate::error::{ArtifactError, ConfigurationError, SpecViolation, SpecificationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
