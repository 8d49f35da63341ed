//! Common test utilities for building workflow specs and bundles.
use sekkei::prelude::*;

/// A minimal two-node spec: `fetch (Sync)` -> `summarize (Async)`.
#[allow(dead_code)]
pub fn simple_spec() -> WorkflowSpec {
    WorkflowSpec {
        project_name: "demo".to_string(),
        pattern_id: "workflow".to_string(),
        nodes: vec![
            NodeSpec {
                name: "fetch".to_string(),
                kind: NodeKind::Sync,
                purpose: "Fetch the raw input".to_string(),
            },
            NodeSpec {
                name: "summarize".to_string(),
                kind: NodeKind::Async,
                purpose: "Summarize the fetched input".to_string(),
            },
        ],
        edges: vec![EdgeSpec {
            source: "fetch".to_string(),
            target: "summarize".to_string(),
            action: "default".to_string(),
        }],
        shared_state: vec![
            StateField {
                name: "input".to_string(),
                field_type: "String".to_string(),
            },
            StateField {
                name: "summary".to_string(),
                field_type: "String".to_string(),
            },
        ],
    }
}

/// A batch-pipeline spec exercising every node kind.
#[allow(dead_code)]
pub fn pipeline_spec() -> WorkflowSpec {
    WorkflowSpec {
        project_name: "sales-etl".to_string(),
        pattern_id: "mapreduce".to_string(),
        nodes: vec![
            NodeSpec {
                name: "extract".to_string(),
                kind: NodeKind::Batch,
                purpose: "Extract daily records".to_string(),
            },
            NodeSpec {
                name: "transform".to_string(),
                kind: NodeKind::AsyncBatch,
                purpose: "Transform records concurrently".to_string(),
            },
            NodeSpec {
                name: "load_results".to_string(),
                kind: NodeKind::Sync,
                purpose: "Load transformed records".to_string(),
            },
        ],
        edges: vec![
            EdgeSpec {
                source: "extract".to_string(),
                target: "transform".to_string(),
                action: "default".to_string(),
            },
            EdgeSpec {
                source: "transform".to_string(),
                target: "load_results".to_string(),
                action: "default".to_string(),
            },
            EdgeSpec {
                source: "transform".to_string(),
                target: "extract".to_string(),
                action: "retry".to_string(),
            },
        ],
        shared_state: vec![StateField {
            name: "records".to_string(),
            field_type: "Vec<String>".to_string(),
        }],
    }
}

/// Resolves the bundle for a spec's pattern.
#[allow(dead_code)]
pub fn deps_for(spec: &WorkflowSpec) -> DependencyBundle {
    resolve(&spec.pattern_id, &spec.project_name).expect("pattern must be registered")
}

/// Generates the artifact sequence for a spec.
#[allow(dead_code)]
pub fn generate_artifacts(spec: WorkflowSpec) -> Vec<FileArtifact> {
    let deps = deps_for(&spec);
    Generator::builder(spec, deps)
        .build()
        .generate()
        .expect("generation must succeed for a valid spec")
}

/// Finds the first artifact of a given kind.
#[allow(dead_code)]
pub fn first_of_kind(artifacts: &[FileArtifact], kind: ArtifactKind) -> &FileArtifact {
    artifacts
        .iter()
        .find(|a| a.kind == kind)
        .expect("artifact kind must be present")
}
