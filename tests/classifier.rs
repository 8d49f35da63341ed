//! Tests for requirement classification and ranking.
use sekkei::prelude::*;

#[test]
fn etl_text_recommends_the_batch_pipeline_pattern() {
    let catalog = PatternCatalog::builtin();
    let text = "build a pipeline that extracts, transforms, and loads daily sales records";

    let results = classify(text, &catalog);
    let top = &results[0];

    assert_eq!(top.pattern_id, "mapreduce");
    assert!(
        top.confidence > 0.3,
        "expected confidence > 0.3, got {}",
        top.confidence
    );
    assert!(!top.suggested_nodes.is_empty());
}

#[test]
fn confidence_is_non_increasing() {
    let catalog = PatternCatalog::builtin();
    let texts = [
        "an agent that searches documents and decides which tool to use",
        "retrieval augmented generation over a vector index",
        "a simple step by step workflow",
        "",
    ];

    for text in texts {
        let results = classify(text, &catalog);
        for pair in results.windows(2) {
            assert!(
                pair[0].confidence >= pair[1].confidence,
                "results out of order for text '{}'",
                text
            );
        }
    }
}

#[test]
fn no_signal_returns_the_fallback_pattern() {
    let catalog = PatternCatalog::builtin();
    let results = classify("zzz qqq xxyzzy", &catalog);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].pattern_id, catalog.fallback_id());
    assert_eq!(results[0].confidence, 0.0);
    assert!(results[0].matched_indicators.is_empty());
}

#[test]
fn equal_scores_rank_by_profile_weight() {
    // Two profiles matching the same single keyword; the heavier one must
    // come first even though it is declared second.
    let profiles = vec![
        PatternProfile {
            id: "light".to_string(),
            display_name: "Light".to_string(),
            indicator_keywords: vec!["widget".to_string()],
            structural_hints: vec!["step".to_string()],
            weight: 0.5,
        },
        PatternProfile {
            id: "heavy".to_string(),
            display_name: "Heavy".to_string(),
            indicator_keywords: vec!["widget".to_string()],
            structural_hints: vec!["step".to_string()],
            weight: 1.0,
        },
    ];
    let catalog = PatternCatalog::new("light", profiles).expect("valid catalog");

    let results = classify("a widget thing", &catalog);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].pattern_id, "heavy");
    assert_eq!(results[1].pattern_id, "light");
    assert_eq!(results[0].confidence, results[1].confidence);
}

#[test]
fn matched_indicators_preserve_keyword_order() {
    let catalog = PatternCatalog::builtin();
    let results = classify("extract then transform then load", &catalog);
    let top = results
        .iter()
        .find(|r| r.pattern_id == "mapreduce")
        .expect("mapreduce must match");

    let expected = ["extract", "transform", "load"];
    let positions: Vec<usize> = expected
        .iter()
        .map(|kw| {
            top.matched_indicators
                .iter()
                .position(|m| m == kw)
                .expect("keyword must be matched")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
