use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Instant;

use super::outcome::TestOutcome;
use crate::scenario::Scenario;

/// Execution backend a scenario runs against.
///
/// `Ok(())` means the scenario's expected post-condition held; any `Err` is
/// the failure cause. Implementations must not panic for ordinary backend
/// trouble (missing elements, timeouts) — those travel back as errors.
#[async_trait]
pub trait ScenarioBackend: Send + Sync {
    async fn execute(&self, scenario: &Scenario) -> Result<()>;

    /// Environment facts recorded on every outcome (browser id, platform,
    /// viewport). Purely informational.
    fn environment(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

/// Executes one scenario at a time against a backend, converting the
/// backend's result into exactly one [`TestOutcome`].
pub struct ScenarioRunner {
    backend: Box<dyn ScenarioBackend>,
}

impl ScenarioRunner {
    pub fn new(backend: Box<dyn ScenarioBackend>) -> Self {
        Self { backend }
    }

    /// Run a single scenario. Never fails to its caller: every backend error
    /// is absorbed into a `FAILED` outcome. The duration covers only the
    /// backend execution window.
    pub async fn run(&self, scenario: &Scenario) -> TestOutcome {
        let start = Instant::now();
        let result = self.backend.execute(scenario).await;
        let duration_seconds = start.elapsed().as_secs_f64();

        let mut metadata = self.backend.environment();
        metadata.insert("timestamp".to_string(), chrono::Utc::now().to_rfc3339());

        match result {
            Ok(()) => TestOutcome::passed(&scenario.name, duration_seconds, metadata),
            Err(e) => {
                log::debug!("scenario '{}' failed: {:#}", scenario.name, e);
                TestOutcome::failed(&scenario.name, format!("{:#}", e), duration_seconds, metadata)
            }
        }
    }
}
