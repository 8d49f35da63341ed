use crate::error::ConfigurationError;
use crate::workflow::NodeKind;

/// A dependency declared by the static rule tables.
#[derive(Debug, Clone, Copy)]
pub struct PackageDef {
    pub name: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
}

/// The generation rule-set for one pattern id.
///
/// Dispatch on `pattern_id` happens through this table rather than through
/// per-pattern types: each entry is a plain data record the resolver and
/// generator both consult. Adding a pattern means adding one row here and
/// one profile to the catalog.
#[derive(Debug, Clone, Copy)]
pub struct PatternRules {
    pub pattern_id: &'static str,
    /// Kind assigned to suggested node sketches when classifying.
    pub default_node_kind: NodeKind,
    pub extra_runtime: &'static [PackageDef],
    pub extra_dev: &'static [PackageDef],
}

const fn pkg(name: &'static str, version: &'static str) -> PackageDef {
    PackageDef {
        name,
        version,
        features: &[],
    }
}

/// Packages every generated scaffold depends on, regardless of pattern.
pub const BASELINE_RUNTIME: &[PackageDef] = &[
    PackageDef {
        name: "serde",
        version: "1",
        features: &["derive"],
    },
    pkg("serde_json", "1"),
    pkg("anyhow", "1"),
];

pub const BASELINE_DEV: &[PackageDef] = &[];

const TOKIO: PackageDef = PackageDef {
    name: "tokio",
    version: "1",
    features: &["full"],
};

const TOKIO_TEST: PackageDef = pkg("tokio-test", "0.4");

static RULES: &[PatternRules] = &[
    PatternRules {
        pattern_id: "workflow",
        default_node_kind: NodeKind::Sync,
        extra_runtime: &[],
        extra_dev: &[],
    },
    PatternRules {
        pattern_id: "agent",
        default_node_kind: NodeKind::Async,
        extra_runtime: &[
            TOKIO,
            PackageDef {
                name: "reqwest",
                version: "0.12",
                features: &["json"],
            },
        ],
        extra_dev: &[TOKIO_TEST],
    },
    PatternRules {
        pattern_id: "rag",
        default_node_kind: NodeKind::Async,
        extra_runtime: &[TOKIO, pkg("hnsw", "0.11")],
        extra_dev: &[TOKIO_TEST],
    },
    PatternRules {
        pattern_id: "mapreduce",
        default_node_kind: NodeKind::Batch,
        extra_runtime: &[pkg("rayon", "1")],
        extra_dev: &[],
    },
    PatternRules {
        pattern_id: "multi-agent",
        default_node_kind: NodeKind::Async,
        extra_runtime: &[TOKIO],
        extra_dev: &[TOKIO_TEST],
    },
    PatternRules {
        pattern_id: "structured-output",
        default_node_kind: NodeKind::Sync,
        extra_runtime: &[pkg("serde_yaml", "0.9")],
        extra_dev: &[],
    },
];

/// Looks up the rule-set for a pattern id.
pub fn rules_for(pattern_id: &str) -> Option<&'static PatternRules> {
    RULES.iter().find(|r| r.pattern_id == pattern_id)
}

/// Like `rules_for`, but unknown ids are a hard configuration failure.
/// Silently defaulting here would corrupt every downstream artifact.
pub fn require_rules(pattern_id: &str) -> Result<&'static PatternRules, ConfigurationError> {
    rules_for(pattern_id).ok_or_else(|| ConfigurationError::UnknownPattern(pattern_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_profile_has_rules() {
        let catalog = crate::catalog::PatternCatalog::builtin();
        for profile in catalog.profiles() {
            assert!(
                rules_for(&profile.id).is_some(),
                "profile '{}' has no rule-set",
                profile.id
            );
        }
    }

    #[test]
    fn unknown_pattern_is_a_hard_failure() {
        let err = require_rules("does-not-exist").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownPattern(_)));
    }
}
