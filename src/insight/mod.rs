//! Rule-derived analysis of a finished suite run.

pub mod rules;

use crate::runner::outcome::SuiteReport;
use std::fmt;

pub use rules::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD, NEXT_STEPS, RECOMMENDATION_RULES};

/// Coverage verdict tiers. A boundary value belongs to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageVerdict {
    Excellent,
    Good,
    NeedsImprovement,
}

impl fmt::Display for CoverageVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CoverageVerdict::Excellent => {
                "Excellent test coverage achieved - all critical paths tested"
            }
            CoverageVerdict::Good => "Good test coverage with room for improvement",
            CoverageVerdict::NeedsImprovement => {
                "Test coverage needs significant improvement - critical gaps identified"
            }
        };
        f.write_str(text)
    }
}

/// Risk verdict; `High` carries the number of failed outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskVerdict {
    Low,
    High { failed: usize },
}

impl fmt::Display for RiskVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskVerdict::Low => f.write_str("Low risk: All tests passed successfully"),
            RiskVerdict::High { failed } => {
                write!(f, "High risk: {} critical test failures detected", failed)
            }
        }
    }
}

/// Summary derived from one [`SuiteReport`]: verdicts, timing and the ranked
/// recommendation/next-step lists. Stateless and recomputable; it carries no
/// data of its own beyond what the report implies.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightReport {
    pub coverage_verdict: CoverageVerdict,
    pub risk_verdict: RiskVerdict,
    pub average_duration_seconds: f64,
    /// Priority order, highest first.
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Derives an [`InsightReport`] from a [`SuiteReport`]. Pure function; has
/// no failure conditions.
pub struct InsightEngine;

impl InsightEngine {
    pub fn analyze(report: &SuiteReport) -> InsightReport {
        let coverage_verdict = if report.success_rate >= EXCELLENT_THRESHOLD {
            CoverageVerdict::Excellent
        } else if report.success_rate >= GOOD_THRESHOLD {
            CoverageVerdict::Good
        } else {
            CoverageVerdict::NeedsImprovement
        };

        let failed = report.failed();
        let risk_verdict = if failed > 0 {
            RiskVerdict::High { failed }
        } else {
            RiskVerdict::Low
        };

        let average_duration_seconds = if report.total > 0 {
            report.total_duration_seconds / report.total as f64
        } else {
            0.0
        };

        InsightReport {
            coverage_verdict,
            risk_verdict,
            average_duration_seconds,
            recommendations: rules::recommendations_for(report),
            next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::outcome::TestOutcome;
    use std::collections::BTreeMap;

    fn report_with_rate(passed: usize, failed: usize) -> SuiteReport {
        let mut outcomes = Vec::new();
        for i in 0..passed {
            outcomes.push(TestOutcome::passed(format!("p{i}"), 2.0, BTreeMap::new()));
        }
        for i in 0..failed {
            outcomes.push(TestOutcome::failed(
                format!("f{i}"),
                "cause",
                2.0,
                BTreeMap::new(),
            ));
        }
        SuiteReport::from_outcomes(outcomes)
    }

    // Boundary checks on a synthetic report with an exact rate, since pass/fail
    // counts can only produce rational rates.
    fn synthetic_rate(rate: f64) -> SuiteReport {
        let mut report = report_with_rate(1, 0);
        report.success_rate = rate;
        report
    }

    #[test]
    fn test_coverage_boundaries() {
        assert_eq!(
            InsightEngine::analyze(&synthetic_rate(90.0)).coverage_verdict,
            CoverageVerdict::Excellent
        );
        assert_eq!(
            InsightEngine::analyze(&synthetic_rate(89.999)).coverage_verdict,
            CoverageVerdict::Good
        );
        assert_eq!(
            InsightEngine::analyze(&synthetic_rate(70.0)).coverage_verdict,
            CoverageVerdict::Good
        );
        assert_eq!(
            InsightEngine::analyze(&synthetic_rate(69.999)).coverage_verdict,
            CoverageVerdict::NeedsImprovement
        );
    }

    #[test]
    fn test_risk_verdict_counts_failures() {
        assert_eq!(
            InsightEngine::analyze(&report_with_rate(3, 0)).risk_verdict,
            RiskVerdict::Low
        );
        assert_eq!(
            InsightEngine::analyze(&report_with_rate(3, 2)).risk_verdict,
            RiskVerdict::High { failed: 2 }
        );
    }

    #[test]
    fn test_average_duration() {
        let insights = InsightEngine::analyze(&report_with_rate(2, 2));
        assert!((insights.average_duration_seconds - 2.0).abs() < f64::EPSILON);

        let empty = InsightEngine::analyze(&SuiteReport::empty());
        assert_eq!(empty.average_duration_seconds, 0.0);
        assert_eq!(empty.risk_verdict, RiskVerdict::Low);
    }

    #[test]
    fn test_analyze_is_pure() {
        let report = report_with_rate(4, 1);
        assert_eq!(
            InsightEngine::analyze(&report),
            InsightEngine::analyze(&report)
        );
    }

    #[test]
    fn test_verdict_phrasing() {
        assert_eq!(
            RiskVerdict::High { failed: 3 }.to_string(),
            "High risk: 3 critical test failures detected"
        );
        assert!(CoverageVerdict::Good.to_string().contains("room for improvement"));
    }
}
