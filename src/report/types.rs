use crate::insight::InsightReport;
use crate::runner::outcome::SuiteReport;
use serde::{Deserialize, Serialize};

/// Insight summary in its persisted shape. Verdicts are flattened to the
/// human-readable phrases external tooling already parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightDocument {
    pub coverage_analysis: String,
    pub performance_metrics: String,
    pub risk_assessment: String,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

impl From<&InsightReport> for InsightDocument {
    fn from(insights: &InsightReport) -> Self {
        Self {
            coverage_analysis: insights.coverage_verdict.to_string(),
            performance_metrics: format!(
                "Average test execution time: {:.2} seconds",
                insights.average_duration_seconds
            ),
            risk_assessment: insights.risk_verdict.to_string(),
            recommendations: insights.recommendations.clone(),
            next_steps: insights.next_steps.clone(),
        }
    }
}

/// The persisted results document. Field names and nesting are a
/// compatibility surface; see the serde renames on [`SuiteReport`] for the
/// inner shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsDocument {
    pub test_results: SuiteReport,
    pub ai_insights: InsightDocument,
    /// ISO-8601 timestamp of when the document was assembled.
    pub timestamp: String,
}

impl ResultsDocument {
    pub fn new(report: &SuiteReport, insights: &InsightReport) -> Self {
        Self {
            test_results: report.clone(),
            ai_insights: insights.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
