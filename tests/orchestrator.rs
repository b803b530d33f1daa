//! End-to-end tests of the orchestration pipeline with a scripted policy.

use std::time::Duration;

use loginprobe::insight::{CoverageVerdict, InsightEngine, RiskVerdict};
use loginprobe::report::ResultsDocument;
use loginprobe::runner::{
    ScenarioRunner, ScriptedPolicy, SimulatedBackend, TestStatus, TestSuiteOrchestrator, Verdict,
};
use loginprobe::scenario::login_suite;

fn orchestrator(script: Vec<Verdict>) -> TestSuiteOrchestrator {
    let backend =
        SimulatedBackend::new(Box::new(ScriptedPolicy::new(script))).with_latency(Duration::ZERO);
    TestSuiteOrchestrator::new(ScenarioRunner::new(Box::new(backend)))
}

#[tokio::test]
async fn one_failure_in_five_yields_good_coverage_and_high_risk() {
    let suite = login_suite();
    assert_eq!(suite.len(), 5);

    let report = orchestrator(vec![
        Verdict::Pass,
        Verdict::Pass,
        Verdict::Fail("Assertion failed: error message not displayed".to_string()),
        Verdict::Pass,
        Verdict::Pass,
    ])
    .run_suite(&suite)
    .await
    .unwrap();

    assert_eq!(report.total, 5);
    assert_eq!(report.passed, 4);
    assert!((report.success_rate - 80.0).abs() < f64::EPSILON);

    // Order preserved
    for (outcome, scenario) in report.outcomes.iter().zip(&suite) {
        assert_eq!(outcome.scenario_name, scenario.name);
    }

    let insights = InsightEngine::analyze(&report);
    assert_eq!(insights.coverage_verdict, CoverageVerdict::Good);
    assert_eq!(insights.risk_verdict, RiskVerdict::High { failed: 1 });

    // Four rate-triggered recommendations plus the two unconditional ones,
    // in fixed order
    assert_eq!(insights.recommendations.len(), 6);
    assert!(insights.recommendations[0].contains("edge case"));
    assert!(insights.recommendations[4].contains("monitoring"));
    assert!(insights.recommendations[5].contains("benchmarking"));
    assert_eq!(insights.next_steps.len(), 4);
    assert!(insights.next_steps[0].contains("prioritize fixes"));
}

#[tokio::test]
async fn all_pass_yields_excellent_coverage_and_low_risk() {
    let all = login_suite();
    let suite = &all[..3];
    let report = orchestrator(vec![]).run_suite(suite).await.unwrap();

    assert_eq!(report.total, 3);
    assert!((report.success_rate - 100.0).abs() < f64::EPSILON);
    assert!(report.outcomes.iter().all(|o| o.status == TestStatus::Passed));

    let insights = InsightEngine::analyze(&report);
    assert_eq!(insights.coverage_verdict, CoverageVerdict::Excellent);
    assert_eq!(insights.risk_verdict, RiskVerdict::Low);
    assert_eq!(insights.recommendations.len(), 2);
}

#[tokio::test]
async fn empty_suite_produces_neutral_report() {
    let report = orchestrator(vec![]).run_suite(&[]).await.unwrap();
    assert_eq!(report.total, 0);
    assert_eq!(report.success_rate, 0.0);

    let insights = InsightEngine::analyze(&report);
    assert_eq!(insights.average_duration_seconds, 0.0);
    assert_eq!(insights.risk_verdict, RiskVerdict::Low);
}

#[tokio::test]
async fn failing_scenarios_do_not_stop_later_ones() {
    let suite = login_suite();
    let report = orchestrator(vec![
        Verdict::Fail("Network connection timeout".to_string()),
        Verdict::Fail("Timeout waiting for page load".to_string()),
        Verdict::Fail("Element not found: username field".to_string()),
        Verdict::Fail("Assertion failed: error message not displayed".to_string()),
        Verdict::Fail("Network connection timeout".to_string()),
    ])
    .run_suite(&suite)
    .await
    .unwrap();

    // All five still ran and produced outcomes
    assert_eq!(report.total, 5);
    assert_eq!(report.passed, 0);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.status == TestStatus::Failed && o.error.is_some()));

    let insights = InsightEngine::analyze(&report);
    assert_eq!(insights.coverage_verdict, CoverageVerdict::NeedsImprovement);
    assert_eq!(insights.risk_verdict, RiskVerdict::High { failed: 5 });
}

#[tokio::test]
async fn results_document_matches_persistence_contract() {
    let suite = login_suite();
    let report = orchestrator(vec![
        Verdict::Pass,
        Verdict::Fail("Timeout waiting for page load".to_string()),
    ])
    .run_suite(&suite)
    .await
    .unwrap();

    let insights = InsightEngine::analyze(&report);
    let document = ResultsDocument::new(&report, &insights);
    let value = serde_json::to_value(&document).unwrap();

    let results = &value["test_results"];
    assert_eq!(results["total_tests"], 5);
    assert_eq!(results["test_cases"].as_array().unwrap().len(), 5);
    assert_eq!(results["test_cases"][0]["status"], "PASSED");
    assert_eq!(results["test_cases"][1]["status"], "FAILED");
    assert_eq!(
        results["test_cases"][1]["error"],
        "Timeout waiting for page load"
    );
    assert!(results["test_cases"][0]["details"]["browser"]
        .as_str()
        .unwrap()
        .contains("simulated"));

    let ai = &value["ai_insights"];
    assert_eq!(
        ai["risk_assessment"],
        "High risk: 1 critical test failures detected"
    );
    assert_eq!(ai["recommendations"].as_array().unwrap().len(), 6);
    assert_eq!(ai["next_steps"].as_array().unwrap().len(), 4);
    assert!(value["timestamp"].as_str().unwrap().contains('T'));
}
