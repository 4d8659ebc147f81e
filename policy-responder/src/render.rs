//! Template rendering for mock-mode responses
//!
//! Everything here is a pure function of its input: no clocks, counters or
//! randomness, so identical requests always render identical text.

use crate::models::{AnalysisSpec, PolicyFormat, PolicySpec};
use std::fmt::{self, Write};

pub const MOCK_NOTE: &str = "Generated using mock mode - AI model not available";
pub const MOCK_SUGGESTION: &str = "This is a mock suggestion - AI model not available";
pub const MOCK_COMPLIANCE: &str = "Mock compliance check - AI model not available";
pub const MOCK_ISSUE: &str = "Mock issue - AI model not available";

/// Number of characters of the submitted policy quoted back in an analysis
pub const ANALYSIS_EXCERPT_CHARS: usize = 100;

/// Render the placeholder policy document for `spec`.
///
/// The rules are non-functional placeholders; the output is documentation
/// text, not an executable policy.
pub fn render_policy(spec: &PolicySpec) -> Result<String, fmt::Error> {
    let mut out = String::new();
    match spec.format {
        PolicyFormat::Rego => write_rego(&mut out, spec)?,
        PolicyFormat::Generic => write_generic(&mut out, spec)?,
    }
    Ok(out)
}

fn write_rego(out: &mut impl Write, spec: &PolicySpec) -> fmt::Result {
    write!(
        out,
        r#"package policy

# {description}
# Framework: {framework}

import rego.v1

# Policy to ensure {lowered}
deny contains msg if {{
    # Add your policy logic here
    # This is a mock policy generated when the AI model is not available
    true
    msg := "Policy violation: {description}"
}}

# Example rule - customize based on your requirements
allow if {{
    # Add your allow conditions here
    true
}}"#,
        description = spec.description,
        framework = spec.framework,
        lowered = spec.description.to_lowercase(),
    )
}

fn write_generic(out: &mut impl Write, spec: &PolicySpec) -> fmt::Result {
    writeln!(out, "# {}", spec.description)?;
    writeln!(out, "# Framework: {}", spec.framework)?;
    writeln!(out, "# Language: {}", spec.language)?;
    writeln!(out)?;
    writeln!(
        out,
        "# This is a mock policy generated when the AI model is not available"
    )?;
    writeln!(
        out,
        "# Please customize this policy based on your specific requirements"
    )?;
    writeln!(out)?;
    writeln!(out, "policy:")?;
    writeln!(out, "  name: \"{}\"", spec.description)?;
    writeln!(out, "  framework: \"{}\"", spec.framework)?;
    writeln!(out, "  rules:")?;
    writeln!(out, "    - name: \"example_rule\"")?;
    writeln!(out, "      condition: \"true\"")?;
    writeln!(out, "      action: \"allow\"")?;
    writeln!(
        out,
        "      description: \"Example rule - customize as needed\""
    )
}

/// Render the placeholder analysis sentence.
///
/// Only the first [`ANALYSIS_EXCERPT_CHARS`] characters of the policy are
/// quoted; shorter policies are quoted whole.
pub fn render_analysis(spec: &AnalysisSpec) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(
        out,
        "Mock analysis for {}: {}...",
        spec.analysis_type,
        excerpt(&spec.policy, ANALYSIS_EXCERPT_CHARS)
    )?;
    Ok(out)
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn mock_suggestions() -> Vec<String> {
    vec![MOCK_SUGGESTION.to_string()]
}

pub fn mock_compliance() -> Vec<String> {
    vec![MOCK_COMPLIANCE.to_string()]
}

pub fn mock_issues() -> Vec<String> {
    vec![MOCK_ISSUE.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(description: &str, language: &str) -> PolicySpec {
        PolicySpec {
            description: description.to_string(),
            framework: "general security".to_string(),
            language: language.to_string(),
            format: PolicyFormat::from_label(language),
        }
    }

    #[test]
    fn test_rego_policy_embeds_description() {
        let policy = render_policy(&spec("enforce mfa", "Rego")).unwrap();

        assert!(policy.starts_with("package policy\n"));
        assert!(policy.contains("enforce mfa"));
        assert!(policy.contains("deny contains msg if"));
        assert!(policy.contains("msg := \"Policy violation: enforce mfa\""));
        assert!(policy.contains("# Framework: general security"));
        assert!(policy.contains("allow if {\n    # Add your allow conditions here\n    true\n}"));
        assert!(policy.ends_with('}'));
    }

    #[test]
    fn test_rego_comment_lowercases_description() {
        let policy = render_policy(&spec("Enforce MFA", "rego")).unwrap();

        assert!(policy.contains("# Enforce MFA\n"));
        assert!(policy.contains("# Policy to ensure enforce mfa\n"));
        assert!(policy.contains("Policy violation: Enforce MFA"));
    }

    #[test]
    fn test_generic_policy_layout() {
        let policy = render_policy(&spec("x", "yaml")).unwrap();

        assert!(policy.contains("name: \"x\""));
        assert!(policy.contains("rules:"));
        assert!(policy.contains("# Language: yaml\n"));
        assert!(policy.contains("    - name: \"example_rule\"\n"));
        assert!(policy.contains("      condition: \"true\"\n"));
        assert!(policy.contains("      action: \"allow\"\n"));
        assert!(!policy.contains("package policy"));
        assert!(policy.ends_with("customize as needed\"\n"));
    }

    #[test]
    fn test_language_casing_renders_identically() {
        let lower = render_policy(&spec("enforce mfa", "rego")).unwrap();
        let title = render_policy(&spec("enforce mfa", "Rego")).unwrap();
        let upper = render_policy(&spec("enforce mfa", "REGO")).unwrap();

        assert_eq!(lower, title);
        assert_eq!(title, upper);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let s = spec("encrypt data at rest", "Rego");

        assert_eq!(render_policy(&s).unwrap(), render_policy(&s).unwrap());
    }

    #[test]
    fn test_analysis_quotes_at_most_100_chars() {
        let policy = "A".repeat(500);
        let analysis = render_analysis(&AnalysisSpec {
            policy: policy.clone(),
            analysis_type: "explain".to_string(),
        })
        .unwrap();

        assert_eq!(
            analysis,
            format!("Mock analysis for explain: {}...", &policy[..100])
        );
        assert!(!analysis.contains(&"A".repeat(101)));
    }

    #[test]
    fn test_analysis_short_policy_quoted_whole() {
        let analysis = render_analysis(&AnalysisSpec {
            policy: "short".to_string(),
            analysis_type: "validate".to_string(),
        })
        .unwrap();

        assert_eq!(analysis, "Mock analysis for validate: short...");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(150);
        let cut = excerpt(&text, 100);

        assert_eq!(cut.chars().count(), 100);
        assert_eq!(excerpt("abc", 100), "abc");
        assert_eq!(excerpt("", 100), "");
    }

    #[test]
    fn test_mock_lists_are_single_constant_entries() {
        assert_eq!(mock_suggestions(), vec![MOCK_SUGGESTION.to_string()]);
        assert_eq!(mock_compliance(), vec![MOCK_COMPLIANCE.to_string()]);
        assert_eq!(mock_issues(), vec![MOCK_ISSUE.to_string()]);
    }
}
