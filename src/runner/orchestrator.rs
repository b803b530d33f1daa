use uuid::Uuid;

use super::events::{EventEmitter, TestEvent};
use super::outcome::SuiteReport;
use super::scenario_runner::ScenarioRunner;
use crate::error::SuiteError;
use crate::scenario::Scenario;

/// Runs a suite of scenarios strictly in input order and collects their
/// outcomes into a [`SuiteReport`].
///
/// Execution never short-circuits: a failed scenario must not prevent the
/// ones after it from running. Scenario validation happens up front, before
/// anything executes, so a malformed suite fails fast without partial runs.
pub struct TestSuiteOrchestrator {
    runner: ScenarioRunner,
    emitter: EventEmitter,
    session_id: String,
}

impl TestSuiteOrchestrator {
    pub fn new(runner: ScenarioRunner) -> Self {
        Self::with_emitter(runner, EventEmitter::default())
    }

    pub fn with_emitter(runner: ScenarioRunner, emitter: EventEmitter) -> Self {
        Self {
            runner,
            emitter,
            session_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Subscribe to execution events (for console listeners).
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<TestEvent> {
        self.emitter.subscribe()
    }

    /// Run all scenarios in order. An empty slice is not an error: it yields
    /// a report with `total == 0` and `success_rate == 0`.
    pub async fn run_suite(&self, scenarios: &[Scenario]) -> Result<SuiteReport, SuiteError> {
        for scenario in scenarios {
            scenario.validate()?;
        }

        self.emitter.emit(TestEvent::SuiteStarted {
            session_id: self.session_id.clone(),
            scenario_count: scenarios.len(),
        });

        let mut outcomes = Vec::with_capacity(scenarios.len());
        for (index, scenario) in scenarios.iter().enumerate() {
            self.emitter.emit(TestEvent::ScenarioStarted {
                index,
                name: scenario.name.clone(),
                description: scenario.description.clone(),
                expected_result: scenario.expected_result.clone(),
            });

            let outcome = self.runner.run(scenario).await;

            self.emitter.emit(TestEvent::ScenarioFinished {
                index,
                name: outcome.scenario_name.clone(),
                status: outcome.status,
                error: outcome.error.clone(),
                duration_seconds: outcome.duration_seconds,
            });

            outcomes.push(outcome);
        }

        let report = SuiteReport::from_outcomes(outcomes);

        self.emitter.emit(TestEvent::SuiteFinished {
            total: report.total,
            passed: report.passed,
            failed: report.failed(),
            success_rate: report.success_rate,
            total_duration_seconds: report.total_duration_seconds,
        });

        Ok(report)
    }
}
