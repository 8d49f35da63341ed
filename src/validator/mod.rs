//! Structural validation of generated (or hand-edited) artifacts.
//!
//! Each Rust artifact is parsed into a syntax tree and checked against the
//! structural contract of its artifact kind. Validation never returns an
//! error: every problem, including a file that fails to parse, surfaces as
//! a finding in the per-artifact report so callers always get the complete
//! picture.

pub mod formatter;
pub mod report;
pub mod rules;

pub use formatter::*;
pub use report::*;

use crate::catalog::rules_for;
use crate::generator::{ArtifactKind, FileArtifact};

pub struct Validator {
    pattern_id: String,
    pattern_known: bool,
}

impl Validator {
    pub fn new(pattern_id: impl Into<String>) -> Self {
        let pattern_id = pattern_id.into();
        let pattern_known = rules_for(&pattern_id).is_some();
        Self {
            pattern_id,
            pattern_known,
        }
    }

    /// Produces one report per artifact, in artifact order.
    pub fn validate(&self, artifacts: &[FileArtifact]) -> Vec<ValidationReport> {
        artifacts
            .iter()
            .map(|artifact| self.validate_artifact(artifact))
            .collect()
    }

    fn validate_artifact(&self, artifact: &FileArtifact) -> ValidationReport {
        let mut report = ValidationReport::new(artifact.relative_path.clone());

        if !self.pattern_known {
            report.findings.push(Finding::info(
                rules::PATTERN_UNKNOWN,
                format!(
                    "pattern id '{}' is not registered; pattern-specific checks skipped",
                    self.pattern_id
                ),
            ));
        }

        match artifact.kind {
            ArtifactKind::NodeModule => {
                rules::check_placeholders(&artifact.content, &mut report.findings);
                if let Some(file) = self.parse(artifact, &mut report) {
                    rules::check_base_type(&file, &mut report.findings);
                    rules::check_lifecycle_regions(&file, &mut report.findings);
                    rules::check_imports(&file, &mut report.findings);
                }
            }
            ArtifactKind::FlowModule => {
                rules::check_placeholders(&artifact.content, &mut report.findings);
                if let Some(file) = self.parse(artifact, &mut report) {
                    rules::check_imports(&file, &mut report.findings);
                    rules::check_flow_references(&file, &mut report.findings);
                }
            }
            ArtifactKind::Schema | ArtifactKind::Test => {
                rules::check_placeholders(&artifact.content, &mut report.findings);
            }
            // Manifests and docs have no structural contract to parse.
            ArtifactKind::Manifest | ArtifactKind::Doc => {}
        }

        report
    }

    /// Parse failure is terminal for this artifact only; sibling artifacts
    /// still validate.
    fn parse(&self, artifact: &FileArtifact, report: &mut ValidationReport) -> Option<syn::File> {
        match syn::parse_file(&artifact.content) {
            Ok(file) => Some(file),
            Err(err) => {
                let start = err.span().start();
                report.findings.push(Finding::error(
                    rules::SYNTAX_INVALID,
                    format!("failed to parse artifact: {}", err),
                    Some(Location {
                        line: start.line,
                        column: start.column,
                    }),
                ));
                None
            }
        }
    }
}

/// Convenience wrapper over `Validator` for one-shot validation.
pub fn validate(artifacts: &[FileArtifact], pattern_id: &str) -> Vec<ValidationReport> {
    Validator::new(pattern_id).validate(artifacts)
}
