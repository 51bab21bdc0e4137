//! Context-file checklist validation.
//!
//! Checks a markdown context file for required and recommended section
//! headings, then applies a handful of content-quality and formatting
//! heuristics. Findings are classified as errors, warnings, or suggestions;
//! only errors fail the file.
//!
//! Section and placeholder matching is deliberately loose: case-insensitive
//! substring containment, no word boundaries. A heading "Project Overview
//! and Goals" satisfies the "Overview" requirement.

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ValidateError, ValidateResult};

/// Sections every context file must contain.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "Overview",
    "Technology Stack",
    "Architecture",
    "Coding Standards",
    "File Structure",
];

/// Sections worth having; absence is a warning, not an error.
pub const RECOMMENDED_SECTIONS: &[&str] = &[
    "Key Integrations",
    "What NOT to Do",
    "Common Gotchas",
    "Testing",
    "Deployment",
];

/// Leftover template text that signals an unfinished file.
const PLACEHOLDER_MARKERS: &[&str] = &["[Add", "[Brief description", "[TODO", "etc."];

/// Files shorter than this (in characters) are flagged as thin.
const MIN_CONTENT_CHARS: usize = 500;

/// Findings for one validated file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    /// Path the findings refer to.
    pub file: String,
    /// Findings that fail the file.
    pub errors: Vec<String>,
    /// Findings that should be fixed but do not fail the file.
    pub warnings: Vec<String>,
    /// Nice-to-have improvements.
    pub suggestions: Vec<String>,
    /// `true` iff `errors` is empty.
    pub valid: bool,
}

/// Validate the file at `path`.
///
/// A missing file is reported as a single error finding with `valid =
/// false`, not as an `Err` — the report is still printable and the caller
/// decides the exit code. Read failures after the existence check (the file
/// vanished, permissions, non-UTF-8 bytes) do propagate.
#[tracing::instrument(skip_all, fields(path = %path))]
pub fn validate_file(path: &Utf8Path) -> ValidateResult<ValidationReport> {
    if !path.exists() {
        return Ok(ValidationReport {
            file: path.to_string(),
            errors: vec![format!("❌ File not found: {path}")],
            warnings: Vec::new(),
            suggestions: Vec::new(),
            valid: false,
        });
    }

    let content = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
        ValidateError::Read {
            path: path.to_owned(),
            source,
        }
    })?;

    Ok(validate_content(path.as_str(), &content))
}

/// Run every check against already-loaded content.
#[tracing::instrument(skip_all, fields(file, content_len = content.len()))]
pub fn validate_content(file: &str, content: &str) -> ValidationReport {
    let sections = extract_sections(content);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    check_required_sections(&sections, &mut errors);
    check_recommended_sections(&sections, &mut warnings);
    check_content_quality(content, &mut warnings, &mut suggestions);
    check_formatting(content, &mut warnings, &mut suggestions);

    let valid = errors.is_empty();
    ValidationReport {
        file: file.to_string(),
        errors,
        warnings,
        suggestions,
        valid,
    }
}

/// Extract second-level headings in file order, duplicates allowed.
///
/// This is a literal `## ` line-prefix scan, not a CommonMark parse, so a
/// fenced code block containing `## foo` contributes a section too.
fn extract_sections(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|rest| rest.trim().to_string())
        .collect()
}

fn check_required_sections(sections: &[String], errors: &mut Vec<String>) {
    for name in REQUIRED_SECTIONS {
        if !contains_section(sections, name) {
            errors.push(format!("❌ Missing required section: {name}"));
        }
    }
}

fn check_recommended_sections(sections: &[String], warnings: &mut Vec<String>) {
    for name in RECOMMENDED_SECTIONS {
        if !contains_section(sections, name) {
            warnings.push(format!("⚠️  Missing recommended section: {name}"));
        }
    }
}

/// Case-insensitive substring containment against every extracted section.
fn contains_section(sections: &[String], name: &str) -> bool {
    let needle = name.to_lowercase();
    sections.iter().any(|s| s.to_lowercase().contains(&needle))
}

fn check_content_quality(content: &str, warnings: &mut Vec<String>, suggestions: &mut Vec<String>) {
    if content.chars().count() < MIN_CONTENT_CHARS {
        warnings.push(
            "⚠️  Context file is very short (< 500 chars). Consider adding more detail."
                .to_string(),
        );
    }

    for marker in PLACEHOLDER_MARKERS {
        if content.contains(marker) {
            warnings.push(format!(
                "⚠️  Found placeholder text: '{marker}'. Replace with actual content."
            ));
        }
    }

    if !content.contains("```") {
        suggestions.push("💡 Consider adding code examples in code blocks".to_string());
    }

    if !content.contains('❌') && !content.to_lowercase().contains("don't") {
        suggestions
            .push("💡 Consider adding 'What NOT to Do' section with anti-patterns".to_string());
    }
}

fn check_formatting(content: &str, warnings: &mut Vec<String>, suggestions: &mut Vec<String>) {
    if !content.lines().next().unwrap_or("").starts_with("# ") {
        warnings.push("⚠️  First line should be a top-level heading (# Title)".to_string());
    }

    if !content.contains("---") {
        suggestions.push(
            "💡 Consider using horizontal rules (---) to separate major sections".to_string(),
        );
    }

    if !content.contains("- ") && !content.contains("* ") {
        suggestions.push("💡 Consider using bullet points for better readability".to_string());
    }
}
