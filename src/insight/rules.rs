//! Recommendation and next-step rule tables.
//!
//! Each recommendation is a condition over the suite aggregate plus a fixed
//! text; the table is evaluated top to bottom so the output order is the
//! priority order. The coverage thresholds are heuristic constants, kept
//! here so they can be tuned in one place.

use crate::runner::outcome::SuiteReport;

/// Success rate at or above which coverage is rated excellent.
pub const EXCELLENT_THRESHOLD: f64 = 90.0;
/// Success rate at or above which coverage is rated good.
pub const GOOD_THRESHOLD: f64 = 70.0;

/// One entry of the recommendation table.
pub struct Rule {
    pub applies: fn(&SuiteReport) -> bool,
    pub text: &'static str,
}

fn below_full_pass(report: &SuiteReport) -> bool {
    report.success_rate < 100.0
}

fn always(_report: &SuiteReport) -> bool {
    true
}

/// Ordered recommendation rules. The first four fire only when at least one
/// scenario failed; the last two fire on every run.
pub const RECOMMENDATION_RULES: [Rule; 6] = [
    Rule {
        applies: below_full_pass,
        text: "Implement additional edge case testing for failed scenarios",
    },
    Rule {
        applies: below_full_pass,
        text: "Add visual regression testing for UI consistency",
    },
    Rule {
        applies: below_full_pass,
        text: "Consider implementing parallel test execution for faster feedback",
    },
    Rule {
        applies: below_full_pass,
        text: "Review and update test data for better coverage",
    },
    Rule {
        applies: always,
        text: "Implement continuous monitoring and alerting for production deployments",
    },
    Rule {
        applies: always,
        text: "Add performance benchmarking to track test execution efficiency",
    },
];

/// Fixed next-step list, highest priority first.
pub const NEXT_STEPS: [&str; 4] = [
    "Review failed test cases and prioritize fixes",
    "Expand test coverage to include mobile responsiveness",
    "Implement automated test reporting and dashboard",
    "Set up CI/CD pipeline integration for automated testing",
];

/// Evaluate the recommendation table against a report, in table order.
pub fn recommendations_for(report: &SuiteReport) -> Vec<String> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(report))
        .map(|rule| rule.text.to_string())
        .collect()
}
