//! Pure rendering of ranked results. Nothing here scores or fetches.

pub mod html;

use crate::core::path::resource_link;
use crate::core::RankedResult;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const EMPTY_STATE: &str = "No packages found matching your search.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

pub fn render(format: OutputFormat, results: &[RankedResult], prefix: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results, prefix)),
        OutputFormat::Html => Ok(html::render_overlay(results, prefix)),
        OutputFormat::Json => render_json(results),
    }
}

pub fn render_text(results: &[RankedResult], prefix: &str) -> String {
    if results.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let mut out = format!("Search Results ({})\n", results.len());
    for result in results {
        let package = &result.package;
        let fields: Vec<&str> = result.matched_fields.iter().map(|f| f.as_str()).collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "{} [score {}: {}]", package.name, result.score, fields.join(", "));
        let _ = writeln!(
            out,
            "  {} • {} • {}",
            package.region, package.duration, package.r#type
        );
        let _ = writeln!(out, "  Cities: {}", package.cities.join(", "));
        let _ = writeln!(
            out,
            "  PDF: {}",
            resource_link(prefix, &package.folder, &package.filename)
        );
    }
    out
}

pub fn render_json(results: &[RankedResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchedField, PackageRecord};

    fn result() -> RankedResult {
        RankedResult {
            package: PackageRecord {
                name: "Rome Explorer".to_string(),
                cities: vec!["Rome".to_string(), "Florence".to_string()],
                region: "Italy".to_string(),
                tags: vec!["culture".to_string()],
                r#type: "Guided".to_string(),
                duration: "7 Days".to_string(),
                folder: "italy".to_string(),
                filename: "rome-explorer.pdf".to_string(),
            },
            score: 18,
            matched_fields: vec![MatchedField::Name, MatchedField::City],
        }
    }

    #[test]
    fn test_text_rendering() {
        let text = render_text(&[result()], "../");
        assert!(text.starts_with("Search Results (1)"));
        assert!(text.contains("Rome Explorer [score 18: name, city]"));
        assert!(text.contains("Italy • 7 Days • Guided"));
        assert!(text.contains("Cities: Rome, Florence"));
        assert!(text.contains("PDF: ../italy/rome-explorer.pdf"));
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(render_text(&[], "./"), format!("{}\n", EMPTY_STATE));
        assert!(render(OutputFormat::Html, &[], "./").unwrap().contains(EMPTY_STATE));
        assert_eq!(render(OutputFormat::Json, &[], "./").unwrap(), "[]");
    }

    #[test]
    fn test_json_rendering() {
        let json = render(OutputFormat::Json, &[result()], "./").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["score"], 18);
        assert_eq!(value[0]["matchedFields"], serde_json::json!(["name", "city"]));
        assert_eq!(value[0]["filename"], "rome-explorer.pdf");
    }
}
