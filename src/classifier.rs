//! Keyword-weighted requirement classification.
//!
//! The classifier is a pure function over its inputs and the read-only
//! pattern catalog. It never raises: with no signal at all it falls back to
//! the catalog's designated generic pattern at confidence zero, and callers
//! must treat that as "proceed only with explicit user confirmation".

use crate::catalog::{PatternCatalog, PatternProfile, rules_for};
use crate::generator::naming::snake_case;
use crate::workflow::NodeKind;
use serde::Serialize;

/// Profiles scoring below this confidence are dropped from the ranking.
/// Heuristic, tunable; not derived from a corpus.
pub const MIN_CONFIDENCE: f64 = 0.05;

/// One ranked pattern recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub pattern_id: String,
    /// Normalized match score in `[0, 1]`. Zero means "no signal".
    pub confidence: f64,
    pub matched_indicators: Vec<String>,
    pub suggested_nodes: Vec<NodeSketch>,
}

/// A suggested node for the recommended pattern, derived from the profile's
/// structural hints. Callers refine these into full `NodeSpec`s.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSketch {
    pub name: String,
    pub kind: NodeKind,
    pub purpose: String,
}

/// Ranks every catalog profile against a free-text requirement.
///
/// Each indicator keyword is counted at most once regardless of how often
/// it repeats in the text, so long requirements do not outscore short ones.
/// The raw score (matches x weight) is normalized by the profile's maximum
/// possible score, which puts confidence in `[0, 1]`. Results are ordered
/// by descending confidence; ties break by descending profile weight, then
/// by catalog declaration order (the sort is stable).
pub fn classify(text: &str, catalog: &PatternCatalog) -> Vec<ClassificationResult> {
    let haystack = text.to_lowercase();
    let mut scored: Vec<(f64, ClassificationResult)> = Vec::new();

    for profile in catalog.profiles() {
        let matched: Vec<String> = profile
            .indicator_keywords
            .iter()
            .filter(|kw| haystack.contains(kw.to_lowercase().as_str()))
            .cloned()
            .collect();

        let max_score = profile.indicator_keywords.len() as f64 * profile.weight;
        let confidence = (matched.len() as f64 * profile.weight) / max_score;
        if confidence < MIN_CONFIDENCE {
            continue;
        }

        scored.push((
            profile.weight,
            ClassificationResult {
                pattern_id: profile.id.clone(),
                confidence,
                matched_indicators: matched,
                suggested_nodes: sketch_nodes(profile),
            },
        ));
    }

    // Stable sort keeps catalog declaration order as the final tie-break.
    scored.sort_by(|(wa, ra), (wb, rb)| {
        rb.confidence
            .partial_cmp(&ra.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(wb.partial_cmp(wa).unwrap_or(std::cmp::Ordering::Equal))
    });

    let results: Vec<ClassificationResult> = scored.into_iter().map(|(_, r)| r).collect();
    if results.is_empty() {
        return vec![fallback_result(catalog)];
    }
    results
}

fn sketch_nodes(profile: &PatternProfile) -> Vec<NodeSketch> {
    let kind = rules_for(&profile.id)
        .map(|r| r.default_node_kind)
        .unwrap_or(NodeKind::Sync);

    profile
        .structural_hints
        .iter()
        .map(|hint| NodeSketch {
            name: snake_case(hint),
            kind,
            purpose: format!("{} step of the {} pattern", hint, profile.display_name),
        })
        .collect()
}

fn fallback_result(catalog: &PatternCatalog) -> ClassificationResult {
    let suggested_nodes = catalog
        .profile(catalog.fallback_id())
        .map(sketch_nodes)
        .unwrap_or_default();

    ClassificationResult {
        pattern_id: catalog.fallback_id().to_string(),
        confidence: 0.0,
        matched_indicators: Vec::new(),
        suggested_nodes,
    }
}
