//! End-to-end pipeline tests: classify -> resolve -> generate -> validate.
mod common;
use common::*;
use sekkei::prelude::*;

#[test]
fn full_pipeline_from_requirement_text() {
    let catalog = PatternCatalog::builtin();
    let text = "build a pipeline that extracts, transforms, and loads daily sales records";

    // 1. Classify and take the top recommendation.
    let ranked = classify(text, &catalog);
    let top = &ranked[0];
    assert_eq!(top.pattern_id, "mapreduce");

    // 2. Refine the sketches into a spec with linear wiring.
    let nodes: Vec<NodeSpec> = top
        .suggested_nodes
        .iter()
        .map(|sketch| NodeSpec {
            name: sketch.name.clone(),
            kind: sketch.kind,
            purpose: sketch.purpose.clone(),
        })
        .collect();
    let edges: Vec<EdgeSpec> = nodes
        .windows(2)
        .map(|pair| EdgeSpec {
            source: pair[0].name.clone(),
            target: pair[1].name.clone(),
            action: "default".to_string(),
        })
        .collect();
    let spec = WorkflowSpec {
        project_name: "daily-sales".to_string(),
        pattern_id: top.pattern_id.clone(),
        nodes,
        edges,
        shared_state: vec![StateField {
            name: "records".to_string(),
            field_type: "Vec<String>".to_string(),
        }],
    };

    // 3. Resolve, generate, validate.
    let deps = resolve(&spec.pattern_id, &spec.project_name).expect("known pattern");
    let pattern_id = spec.pattern_id.clone();
    let bundle = Generator::builder(spec, deps)
        .build()
        .generate_bundle()
        .expect("valid spec");

    let reports = validate(&bundle.artifacts, &pattern_id);
    assert!(
        all_pass(&reports),
        "pipeline scaffold must validate:\n{}",
        ReportFormatter::format_reports(&reports)
    );

    // 4. Only now does the sink receive the files.
    let dir = tempfile::tempdir().expect("tempdir");
    bundle.write_to_dir(dir.path()).expect("write scaffold");
    assert!(dir.path().join("src/lib.rs").is_file());
    assert!(dir.path().join("README.md").is_file());
}

#[test]
fn spec_document_round_trip_drives_generation() {
    let json = r#"{
        "project_name": "support-agent",
        "pattern_id": "agent",
        "nodes": [
            { "name": "observe", "kind": "Async", "purpose": "Read the inbox" },
            { "name": "decide", "kind": "Async", "purpose": "Pick the next action" },
            { "name": "act", "kind": "Async", "purpose": "Execute the chosen tool" }
        ],
        "edges": [
            { "source": "observe", "target": "decide", "action": "default" },
            { "source": "decide", "target": "act", "action": "execute" },
            { "source": "decide", "target": "observe", "action": "wait" },
            { "source": "act", "target": "observe", "action": "default" }
        ],
        "shared_state": [
            { "name": "inbox", "type": "Vec<String>" },
            { "name": "transcript", "type": "String" }
        ]
    }"#;

    let raw: RawWorkflow = serde_json::from_str(json).expect("valid document");
    let spec = raw.into_workflow().expect("all kinds recognized");
    let deps = resolve(&spec.pattern_id, &spec.project_name).expect("known pattern");

    let artifacts = Generator::builder(spec, deps)
        .build()
        .generate()
        .expect("valid spec");

    // Branching from `decide` must survive into the flow wiring.
    let flow = first_of_kind(&artifacts, ArtifactKind::FlowModule);
    assert!(flow.content.contains(r#"source: "decide", action: "execute""#));
    assert!(flow.content.contains(r#"source: "decide", action: "wait""#));

    let reports = validate(&artifacts, "agent");
    assert!(all_pass(&reports));

    // The agent pattern layers tokio on top of the baseline set.
    let manifest = first_of_kind(&artifacts, ArtifactKind::Manifest);
    assert!(manifest.content.contains("tokio"));
    assert!(manifest.content.contains("[dev-dependencies]"));
}

#[test]
fn generation_failure_emits_no_artifacts_and_names_every_problem() {
    let spec = WorkflowSpec {
        project_name: "broken".to_string(),
        pattern_id: "workflow".to_string(),
        nodes: vec![NodeSpec {
            name: "only".to_string(),
            kind: NodeKind::Sync,
            purpose: String::new(),
        }],
        edges: vec![
            EdgeSpec {
                source: "only".to_string(),
                target: "missing".to_string(),
                action: "default".to_string(),
            },
            EdgeSpec {
                source: "only".to_string(),
                target: "missing".to_string(),
                action: "default".to_string(),
            },
        ],
        shared_state: vec![],
    };

    let deps = deps_for(&spec);
    let err = Generator::builder(spec, deps).build().generate().unwrap_err();

    // Both the dangling targets and the duplicate pair, in one pass.
    assert!(err.violations.len() >= 3);
    let rendered = err.to_string();
    assert!(rendered.contains("missing"));
    assert!(rendered.contains("default"));
}
