use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Terminal status of one scenario execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Passed,
    Failed,
}

/// The recorded result of executing one scenario exactly once.
///
/// Constructed through [`TestOutcome::passed`] / [`TestOutcome::failed`] so
/// that `status == Failed` always travels with an error message and never
/// without one. The serialized field names (`name`, `execution_time`,
/// `details`) are a compatibility surface for external tooling that parses
/// the results document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    #[serde(rename = "name")]
    pub scenario_name: String,
    pub status: TestStatus,
    pub error: Option<String>,
    #[serde(rename = "execution_time")]
    pub duration_seconds: f64,
    /// Environment facts (browser, platform, viewport, timestamp).
    /// Informational only; nothing reads these to make decisions.
    #[serde(rename = "details")]
    pub metadata: BTreeMap<String, String>,
}

impl TestOutcome {
    pub fn passed(
        scenario_name: impl Into<String>,
        duration_seconds: f64,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            status: TestStatus::Passed,
            error: None,
            duration_seconds,
            metadata,
        }
    }

    pub fn failed(
        scenario_name: impl Into<String>,
        error: impl Into<String>,
        duration_seconds: f64,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            status: TestStatus::Failed,
            error: Some(error.into()),
            duration_seconds,
            metadata,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == TestStatus::Passed
    }
}

/// The ordered collection of outcomes from one full suite run plus the
/// aggregate statistics derived from them.
///
/// Assembled once per run via [`SuiteReport::from_outcomes`]; the derived
/// fields are computed from the outcomes at construction and the struct is
/// never mutated afterwards, so they cannot drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Outcomes in execution order. Order is significant: it matches the
    /// order scenarios were handed to the orchestrator.
    #[serde(rename = "test_cases")]
    pub outcomes: Vec<TestOutcome>,
    #[serde(rename = "total_tests")]
    pub total: usize,
    pub passed: usize,
    /// Percentage in [0, 100]; zero for an empty suite.
    pub success_rate: f64,
    #[serde(rename = "execution_time")]
    pub total_duration_seconds: f64,
}

impl SuiteReport {
    pub fn from_outcomes(outcomes: Vec<TestOutcome>) -> Self {
        let total = outcomes.len();
        let passed = outcomes.iter().filter(|o| o.is_passed()).count();
        let success_rate = if total > 0 {
            passed as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let total_duration_seconds = outcomes.iter().map(|o| o.duration_seconds).sum();

        Self {
            outcomes,
            total,
            passed,
            success_rate,
            total_duration_seconds,
        }
    }

    pub fn empty() -> Self {
        Self::from_outcomes(Vec::new())
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    #[test]
    fn test_outcome_invariant() {
        let pass = TestOutcome::passed("a", 0.5, meta());
        assert_eq!(pass.status, TestStatus::Passed);
        assert!(pass.error.is_none());

        let fail = TestOutcome::failed("b", "element not found", 0.3, meta());
        assert_eq!(fail.status, TestStatus::Failed);
        assert_eq!(fail.error.as_deref(), Some("element not found"));
    }

    #[test]
    fn test_success_rate_math() {
        let report = SuiteReport::from_outcomes(vec![
            TestOutcome::passed("a", 1.0, meta()),
            TestOutcome::passed("b", 2.0, meta()),
            TestOutcome::failed("c", "timeout", 0.5, meta()),
            TestOutcome::passed("d", 0.5, meta()),
        ]);
        assert_eq!(report.total, 4);
        assert_eq!(report.passed, 3);
        assert_eq!(report.failed(), 1);
        assert!((report.success_rate - 75.0).abs() < f64::EPSILON);
        assert!((report.total_duration_seconds - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report() {
        let report = SuiteReport::empty();
        assert_eq!(report.total, 0);
        assert_eq!(report.success_rate, 0.0);
        assert_eq!(report.total_duration_seconds, 0.0);
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&TestStatus::Passed).unwrap();
        assert_eq!(json, r#""PASSED""#);
        let json = serde_json::to_string(&TestStatus::Failed).unwrap();
        assert_eq!(json, r#""FAILED""#);
    }

    #[test]
    fn test_report_wire_names() {
        let report = SuiteReport::from_outcomes(vec![TestOutcome::passed("a", 1.0, meta())]);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("test_cases").is_some());
        assert!(value.get("total_tests").is_some());
        assert!(value.get("execution_time").is_some());
        let case = &value["test_cases"][0];
        assert_eq!(case["name"], "a");
        assert!(case.get("execution_time").is_some());
        assert!(case.get("details").is_some());
    }
}
