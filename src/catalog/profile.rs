use crate::error::ConfigurationError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A single architecture pattern profile: the indicator keywords that hint
/// at it, the node skeleton it suggests, and its ranking weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternProfile {
    pub id: String,
    pub display_name: String,
    pub indicator_keywords: Vec<String>,
    pub structural_hints: Vec<String>,
    pub weight: f64,
}

/// The process-wide, read-only registry of pattern profiles.
///
/// Declaration order is significant: it is the final tie-break when ranking
/// classification results. The catalog is validated once on construction
/// and never mutated afterwards, so it is safe to share across concurrent
/// classification calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternCatalog {
    fallback: String,
    profiles: Vec<PatternProfile>,
}

impl PatternCatalog {
    /// Builds a catalog from an explicit profile list, validating every
    /// entry. `fallback` names the pattern returned when no profile clears
    /// the classification threshold.
    pub fn new(
        fallback: impl Into<String>,
        profiles: Vec<PatternProfile>,
    ) -> Result<Self, ConfigurationError> {
        let fallback = fallback.into();
        let mut seen: AHashSet<&str> = AHashSet::new();

        for profile in &profiles {
            if profile.id.is_empty() {
                return Err(ConfigurationError::InvalidProfile {
                    id: profile.display_name.clone(),
                    message: "profile id must not be empty".to_string(),
                });
            }
            if !seen.insert(&profile.id) {
                return Err(ConfigurationError::InvalidProfile {
                    id: profile.id.clone(),
                    message: "duplicate profile id".to_string(),
                });
            }
            if profile.indicator_keywords.is_empty() {
                return Err(ConfigurationError::InvalidProfile {
                    id: profile.id.clone(),
                    message: "profile declares no indicator keywords".to_string(),
                });
            }
            if profile.weight <= 0.0 || !profile.weight.is_finite() {
                return Err(ConfigurationError::InvalidProfile {
                    id: profile.id.clone(),
                    message: format!("weight must be a positive number, got {}", profile.weight),
                });
            }
        }

        if !seen.contains(fallback.as_str()) {
            return Err(ConfigurationError::MissingFallback(fallback));
        }

        Ok(Self { fallback, profiles })
    }

    /// Parses a catalog from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let raw: RawCatalog = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::CatalogParse(e.to_string()))?;
        Self::new(raw.fallback, raw.profiles)
    }

    /// The built-in catalog shipped with the crate. See `rules.rs` for the
    /// generation rule-set each of these ids maps to.
    pub fn builtin() -> Self {
        Self::new("workflow", builtin_profiles())
            .expect("built-in catalog must always be valid")
    }

    pub fn profiles(&self) -> &[PatternProfile] {
        &self.profiles
    }

    pub fn fallback_id(&self) -> &str {
        &self.fallback
    }

    pub fn profile(&self, pattern_id: &str) -> Option<&PatternProfile> {
        self.profiles.iter().find(|p| p.id == pattern_id)
    }
}

#[derive(Deserialize)]
struct RawCatalog {
    fallback: String,
    profiles: Vec<PatternProfile>,
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn builtin_profiles() -> Vec<PatternProfile> {
    vec![
        PatternProfile {
            id: "workflow".to_string(),
            display_name: "Sequential Workflow".to_string(),
            indicator_keywords: keywords(&[
                "workflow", "sequence", "step", "stage", "chain", "process", "task", "then",
            ]),
            structural_hints: keywords(&["ingest", "process", "finalize"]),
            weight: 0.5,
        },
        PatternProfile {
            id: "agent".to_string(),
            display_name: "Autonomous Agent".to_string(),
            indicator_keywords: keywords(&[
                "agent", "decide", "decision", "tool", "action", "autonomous", "loop",
                "observe", "plan", "react",
            ]),
            structural_hints: keywords(&["observe", "decide", "act", "report"]),
            weight: 1.0,
        },
        PatternProfile {
            id: "rag".to_string(),
            display_name: "Retrieval-Augmented Generation".to_string(),
            indicator_keywords: keywords(&[
                "retrieval", "retrieve", "search", "index", "embedding", "vector", "document",
                "knowledge", "context", "augmented", "chunk",
            ]),
            structural_hints: keywords(&["chunk_documents", "embed", "retrieve", "generate"]),
            weight: 1.0,
        },
        PatternProfile {
            id: "mapreduce".to_string(),
            display_name: "Batch Pipeline (Map/Reduce)".to_string(),
            indicator_keywords: keywords(&[
                "batch", "map", "reduce", "pipeline", "etl", "extract", "transform", "load",
                "aggregate", "records",
            ]),
            structural_hints: keywords(&["extract", "transform", "load"]),
            weight: 0.9,
        },
        PatternProfile {
            id: "multi-agent".to_string(),
            display_name: "Multi-Agent Collaboration".to_string(),
            indicator_keywords: keywords(&[
                "multi-agent", "collaborate", "team", "negotiate", "supervisor", "worker",
                "delegate", "coordinator", "roles",
            ]),
            structural_hints: keywords(&["dispatch", "work", "collect"]),
            weight: 0.8,
        },
        PatternProfile {
            id: "structured-output".to_string(),
            display_name: "Structured Output Extraction".to_string(),
            indicator_keywords: keywords(&[
                "structured", "schema", "json", "yaml", "extract fields", "form", "parse",
                "validate output", "typed",
            ]),
            structural_hints: keywords(&["prompt", "extract_structure", "check_schema"]),
            weight: 0.7,
        },
    ]
}
