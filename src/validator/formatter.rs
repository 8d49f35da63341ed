use super::report::{Severity, ValidationReport, all_pass};

/// Formats validation reports into a human-readable summary.
pub struct ReportFormatter;

impl ReportFormatter {
    /// One line per finding, grouped by artifact, with a final verdict.
    pub fn format_reports(reports: &[ValidationReport]) -> String {
        let mut out = String::new();
        let mut errors = 0usize;
        let mut warnings = 0usize;

        for report in reports {
            if report.findings.is_empty() {
                continue;
            }
            out.push_str(&format!("{}:\n", report.artifact_path));
            for finding in &report.findings {
                match finding.severity {
                    Severity::Error => errors += 1,
                    Severity::Warning => warnings += 1,
                    Severity::Info => {}
                }
                let position = finding
                    .location
                    .map(|loc| format!("{}:{}", loc.line, loc.column))
                    .unwrap_or_else(|| "-".to_string());
                out.push_str(&format!(
                    "  [{}] {} ({}) {}\n",
                    Self::severity_tag(finding.severity),
                    position,
                    finding.rule_id,
                    finding.message
                ));
            }
        }

        let verdict = if all_pass(reports) { "PASS" } else { "FAIL" };
        out.push_str(&format!(
            "{} artifact(s) checked, {} error(s), {} warning(s): {}\n",
            reports.len(),
            errors,
            warnings,
            verdict
        ));
        out
    }

    fn severity_tag(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "error",
            Severity::Warning => "warn",
            Severity::Info => "info",
        }
    }
}
