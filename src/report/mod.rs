pub mod console;
pub mod json;
pub mod junit;
pub mod types;

use crate::error::SuiteError;
use crate::insight::InsightEngine;
use std::path::Path;

pub use types::{InsightDocument, ResultsDocument};

/// Regenerate a report from a saved results document.
pub fn generate_report(
    results_path: &Path,
    format: &str,
    output: Option<&Path>,
) -> Result<(), SuiteError> {
    let content = std::fs::read_to_string(results_path)?;
    let document: ResultsDocument = serde_json::from_str(&content)?;

    match format {
        "json" => json::generate(&document, output),
        "junit" => junit::generate(&document, output)
            .map_err(|e| SuiteError::Configuration(e.to_string())),
        "console" => {
            // Insights are recomputed from the stored suite report; the rule
            // engine is pure, so this matches what was persisted.
            let insights = InsightEngine::analyze(&document.test_results);
            console::render(&document.test_results, &insights);
            Ok(())
        }
        _ => Err(SuiteError::Configuration(format!(
            "unknown report format: {}",
            format
        ))),
    }
}
