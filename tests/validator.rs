//! Tests for structural validation of generated and hand-edited artifacts.
mod common;
use common::*;
use sekkei::prelude::*;
use sekkei::validator::rules;

fn node_artifact(content: &str) -> FileArtifact {
    FileArtifact {
        relative_path: "src/fetch.rs".to_string(),
        content: content.to_string(),
        kind: ArtifactKind::NodeModule,
    }
}

#[test]
fn generated_scaffold_validates_clean() {
    let spec = pipeline_spec();
    let pattern_id = spec.pattern_id.clone();
    let artifacts = generate_artifacts(spec);

    let reports = validate(&artifacts, &pattern_id);
    assert_eq!(reports.len(), artifacts.len());
    assert!(
        all_pass(&reports),
        "unexpected findings:\n{}",
        ReportFormatter::format_reports(&reports)
    );
}

#[test]
fn generated_async_node_has_zero_error_findings() {
    let spec = simple_spec();
    let artifacts = generate_artifacts(spec);
    let node = artifacts
        .iter()
        .find(|a| a.relative_path == "src/summarize.rs")
        .expect("async node artifact");

    let reports = validate(std::slice::from_ref(node), "workflow");
    assert!(reports[0].passed());
}

#[test]
fn deleting_a_lifecycle_region_is_exactly_one_error() {
    // A hand-edited node module whose execution region was removed.
    let content = r#"//! Fetch the raw input.

use crate::state::SharedState;
use crate::{Action, AsyncNode};

/// Node `fetch` (kind: Async).
#[derive(Debug, Default)]
pub struct Fetch;

impl AsyncNode for Fetch {
    async fn prep(&mut self, _state: &mut SharedState) {}

    async fn post(&mut self, _state: &mut SharedState, _action: &Action) {}
}
"#;

    let reports = validate(&[node_artifact(content)], "workflow");
    let errors: Vec<_> = reports[0].errors().collect();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule_id, rules::MISSING_LIFECYCLE_REGION);
    assert_eq!(reports[0].artifact_path, "src/fetch.rs");
}

#[test]
fn filled_placeholders_are_acceptable() {
    // Regions present, markers replaced with real logic: still a pass.
    let content = r#"//! Fetch the raw input.

use crate::state::SharedState;
use crate::{Action, SyncNode};

/// Node `fetch` (kind: Sync).
#[derive(Debug, Default)]
pub struct Fetch;

impl SyncNode for Fetch {
    fn prep(&mut self, state: &mut SharedState) {
        state.input.truncate(1024);
    }

    fn exec(&mut self, state: &mut SharedState) -> Action {
        state.summary = state.input.to_uppercase();
        Action::from("default")
    }

    fn post(&mut self, _state: &mut SharedState, _action: &Action) {}
}
"#;

    let reports = validate(&[node_artifact(content)], "workflow");
    assert!(reports[0].passed());
}

#[test]
fn kind_marker_mismatching_base_trait_is_an_error() {
    let content = r#"//! Fetch the raw input.

use crate::state::SharedState;
use crate::{Action, SyncNode};

/// Node `fetch` (kind: Async).
#[derive(Debug, Default)]
pub struct Fetch;

impl SyncNode for Fetch {
    fn prep(&mut self, _state: &mut SharedState) {}
    fn exec(&mut self, _state: &mut SharedState) -> Action { Action::from("default") }
    fn post(&mut self, _state: &mut SharedState, _action: &Action) {}
}
"#;

    let reports = validate(&[node_artifact(content)], "workflow");
    let errors: Vec<_> = reports[0].errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule_id, rules::BASE_TYPE_MISMATCH);
}

#[test]
fn parse_failure_is_terminal_for_that_artifact_only() {
    let broken = node_artifact("pub struct {{{{");
    let spec = simple_spec();
    let artifacts = generate_artifacts(spec);
    let good = artifacts
        .iter()
        .find(|a| a.relative_path == "src/fetch.rs")
        .expect("node artifact")
        .clone();

    let reports = validate(&[broken, good], "workflow");

    let broken_errors: Vec<_> = reports[0].errors().collect();
    assert_eq!(broken_errors.len(), 1);
    assert_eq!(broken_errors[0].rule_id, rules::SYNTAX_INVALID);
    assert!(broken_errors[0].location.is_some());

    assert!(reports[1].passed(), "sibling artifact must still validate");
}

#[test]
fn unused_import_is_a_warning_not_an_error() {
    let content = r#"//! Fetch the raw input.

use crate::state::SharedState;
use crate::unrelated::Helper;
use crate::{Action, SyncNode};

/// Node `fetch` (kind: Sync).
#[derive(Debug, Default)]
pub struct Fetch;

impl SyncNode for Fetch {
    fn prep(&mut self, _state: &mut SharedState) {}
    fn exec(&mut self, _state: &mut SharedState) -> Action { Action::from("default") }
    fn post(&mut self, _state: &mut SharedState, _action: &Action) {}
}
"#;

    let reports = validate(&[node_artifact(content)], "workflow");
    assert!(reports[0].passed());
    assert!(reports[0].findings.iter().any(|f| {
        f.severity == Severity::Warning
            && f.rule_id == rules::UNUSED_IMPORT
            && f.message.contains("Helper")
    }));
}

#[test]
fn malformed_placeholder_token_is_an_error() {
    let content = r#"//! Fetch the raw input.

use crate::state::SharedState;
use crate::{Action, SyncNode};

/// Node `fetch` (kind: Sync).
#[derive(Debug, Default)]
pub struct Fetch;

impl SyncNode for Fetch {
    fn prep(&mut self, _state: &mut SharedState) {
        // @@TODO gather inputs
    }
    fn exec(&mut self, _state: &mut SharedState) -> Action { Action::from("default") }
    fn post(&mut self, _state: &mut SharedState, _action: &Action) {}
}
"#;

    let reports = validate(&[node_artifact(content)], "workflow");
    let errors: Vec<_> = reports[0].errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule_id, rules::PLACEHOLDER_MALFORMED);
}

#[test]
fn flow_wiring_must_import_what_it_references() {
    let content = r#"//! Flow wiring.

pub mod state;
pub mod fetch;

pub use state::SharedState;

use crate::fetch::Fetch;

#[derive(Debug, Clone)]
pub struct Flow {
    pub nodes: Vec<&'static str>,
}

pub fn flow() -> Flow {
    let nodes = vec![Fetch::NODE_NAME, Phantom::NODE_NAME];
    Flow { nodes }
}
"#;

    let artifact = FileArtifact {
        relative_path: "src/lib.rs".to_string(),
        content: content.to_string(),
        kind: ArtifactKind::FlowModule,
    };
    let reports = validate(&[artifact], "workflow");
    let errors: Vec<_> = reports[0].errors().collect();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule_id, rules::UNDEFINED_FLOW_REFERENCE);
    assert!(errors[0].message.contains("Phantom"));
}

#[test]
fn unknown_pattern_id_adds_an_info_finding_only() {
    let artifacts = generate_artifacts(simple_spec());
    let reports = validate(&artifacts, "not-registered");

    assert!(all_pass(&reports));
    assert!(reports[0].findings.iter().any(|f| {
        f.severity == Severity::Info && f.rule_id == rules::PATTERN_UNKNOWN
    }));
}

#[test]
fn first_blocking_rule_reports_in_artifact_order() {
    let broken = node_artifact("not rust at all }{");
    let reports = validate(&[broken], "workflow");
    assert_eq!(first_blocking_rule(&reports), Some(rules::SYNTAX_INVALID));
}

#[test]
fn formatter_renders_a_verdict_line() {
    let artifacts = generate_artifacts(simple_spec());
    let reports = validate(&artifacts, "workflow");
    let summary = ReportFormatter::format_reports(&reports);
    assert!(summary.contains("PASS"));

    let broken = node_artifact("pub struct {{{{");
    let reports = validate(&[broken], "workflow");
    let summary = ReportFormatter::format_reports(&reports);
    assert!(summary.contains("FAIL"));
    assert!(summary.contains(rules::SYNTAX_INVALID));
}
