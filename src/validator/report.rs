use serde::Serialize;

/// Severity of a single finding. Only `Error` affects pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A source position within an artifact, 1-based line and 0-based column,
/// matching the parser's span convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// One structural observation about an artifact.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub rule_id: &'static str,
    pub message: String,
    pub location: Option<Location>,
}

impl Finding {
    pub fn error(rule_id: &'static str, message: String, location: Option<Location>) -> Self {
        Self {
            severity: Severity::Error,
            rule_id,
            message,
            location,
        }
    }

    pub fn warning(rule_id: &'static str, message: String, location: Option<Location>) -> Self {
        Self {
            severity: Severity::Warning,
            rule_id,
            message,
            location,
        }
    }

    pub fn info(rule_id: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Info,
            rule_id,
            message,
            location: None,
        }
    }
}

/// The findings for one artifact. A new validation run always produces new
/// reports; existing reports are never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub artifact_path: String,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(artifact_path: impl Into<String>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            findings: Vec::new(),
        }
    }

    /// True when this artifact carries no `Error`-severity findings.
    pub fn passed(&self) -> bool {
        self.findings.iter().all(|f| f.severity != Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }
}

/// Overall verdict: pass means zero `Error` findings across all reports.
pub fn all_pass(reports: &[ValidationReport]) -> bool {
    reports.iter().all(ValidationReport::passed)
}

/// The rule id of the first blocking finding, in report order.
pub fn first_blocking_rule(reports: &[ValidationReport]) -> Option<&'static str> {
    reports
        .iter()
        .flat_map(ValidationReport::errors)
        .map(|f| f.rule_id)
        .next()
}
