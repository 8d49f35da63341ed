//! Static dependency resolution: pattern id -> declarative package bundle.
//!
//! Purely a lookup and merge over the rule tables in `catalog::rules`.
//! No network and no filesystem access; the bundle is data handed onward to
//! the scaffold generator, which renders it into manifest artifacts.

use crate::catalog::rules::{BASELINE_DEV, BASELINE_RUNTIME, PackageDef, require_rules};
use crate::error::ConfigurationError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A single package requirement destined for the generated manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    pub name: String,
    pub version: String,
    pub features: Vec<String>,
}

impl From<&PackageDef> for PackageRef {
    fn from(def: &PackageDef) -> Self {
        Self {
            name: def.name.to_string(),
            version: def.version.to_string(),
            features: def.features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// The declarative dependency and tool-configuration bundle for one
/// generated project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyBundle {
    pub runtime_packages: Vec<PackageRef>,
    pub dev_packages: Vec<PackageRef>,
    /// `(tool name, config file text)` pairs, e.g. `rustfmt`, `clippy`.
    pub tool_configs: Vec<(String, String)>,
}

/// Resolves the dependency bundle for a pattern.
///
/// The baseline set comes first in declaration order, then pattern-specific
/// additions; duplicates keep the first occurrence. An unknown pattern id
/// fails hard with `ConfigurationError::UnknownPattern` rather than
/// defaulting, since wrong dependencies would silently corrupt every
/// downstream artifact.
pub fn resolve(
    pattern_id: &str,
    project_name: &str,
) -> Result<DependencyBundle, ConfigurationError> {
    let rules = require_rules(pattern_id)?;

    Ok(DependencyBundle {
        runtime_packages: merge(BASELINE_RUNTIME, rules.extra_runtime),
        dev_packages: merge(BASELINE_DEV, rules.extra_dev),
        tool_configs: tool_configs(project_name),
    })
}

fn merge(baseline: &[PackageDef], extra: &[PackageDef]) -> Vec<PackageRef> {
    let mut seen: AHashSet<&str> = AHashSet::new();
    baseline
        .iter()
        .chain(extra.iter())
        .filter(|def| seen.insert(def.name))
        .map(PackageRef::from)
        .collect()
}

fn tool_configs(project_name: &str) -> Vec<(String, String)> {
    vec![
        (
            "rustfmt".to_string(),
            format!("# Formatting rules for {}\nmax_width = 100\n", project_name),
        ),
        (
            "clippy".to_string(),
            format!("# Lint configuration for {}\nmsrv = \"1.75\"\n", project_name),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_comes_first() {
        let bundle = resolve("mapreduce", "demo").expect("known pattern");
        assert_eq!(bundle.runtime_packages[0].name, "serde");
        assert!(bundle.runtime_packages.iter().any(|p| p.name == "rayon"));
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let bundle = resolve("agent", "demo").expect("known pattern");
        let tokio_count = bundle
            .runtime_packages
            .iter()
            .filter(|p| p.name == "tokio")
            .count();
        assert_eq!(tokio_count, 1);
    }

    #[test]
    fn unknown_pattern_fails_hard() {
        let err = resolve("not-a-pattern", "demo").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownPattern(_)));
    }

    #[test]
    fn tool_configs_cover_fmt_and_lint() {
        let bundle = resolve("workflow", "demo").expect("known pattern");
        let names: Vec<&str> = bundle.tool_configs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["rustfmt", "clippy"]);
    }
}
