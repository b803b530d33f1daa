use super::types::ResultsDocument;
use crate::error::SuiteError;
use std::path::Path;

/// Write the results document as pretty-printed JSON.
///
/// Core results are already complete by the time this runs; a failure here
/// loses only the file, not the run.
pub fn save(document: &ResultsDocument, path: &Path) -> Result<(), SuiteError> {
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)?;
    log::info!("results saved to {}", path.display());
    Ok(())
}

/// Print the results document as JSON, or write it when a path is given.
pub fn generate(document: &ResultsDocument, output: Option<&Path>) -> Result<(), SuiteError> {
    match output {
        Some(path) => save(document, path),
        None => {
            println!("{}", serde_json::to_string_pretty(document)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::InsightEngine;
    use crate::runner::outcome::{SuiteReport, TestOutcome};
    use std::collections::BTreeMap;

    #[test]
    fn test_save_and_reload() {
        let report =
            SuiteReport::from_outcomes(vec![TestOutcome::passed("a", 0.1, BTreeMap::new())]);
        let insights = InsightEngine::analyze(&report);
        let doc = ResultsDocument::new(&report, &insights);

        let dir = std::env::temp_dir().join(format!("loginprobe-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test_results.json");

        save(&doc, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: ResultsDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.test_results.total, 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_to_bad_path_is_persistence_error() {
        let report = SuiteReport::empty();
        let insights = InsightEngine::analyze(&report);
        let doc = ResultsDocument::new(&report, &insights);

        let err = save(&doc, Path::new("/nonexistent-dir/results.json")).unwrap_err();
        assert!(matches!(err, crate::error::SuiteError::Persistence(_)));
    }
}
