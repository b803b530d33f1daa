use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;
use tokio::sync::Mutex;

use super::scenario_runner::ScenarioBackend;
use crate::scenario::Scenario;

/// Decision produced by an outcome policy for one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(String),
}

/// Pluggable pass/fail decision logic for the simulated backend.
///
/// Substituting a [`ScriptedPolicy`] (or a seeded [`RandomPolicy`]) makes the
/// whole orchestration pipeline deterministic under test.
pub trait OutcomePolicy: Send + Sync {
    fn decide(&mut self, scenario: &Scenario) -> Verdict;
}

/// Plausible causes attached to simulated failures.
pub const FAILURE_CAUSES: [&str; 4] = [
    "Element not found: username field",
    "Timeout waiting for page load",
    "Assertion failed: error message not displayed",
    "Network connection timeout",
];

/// Passes with a fixed probability; failures pick a cause from
/// [`FAILURE_CAUSES`]. Seedable for reproducible runs.
pub struct RandomPolicy {
    success_probability: f64,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(success_probability: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            success_probability: success_probability.clamp(0.0, 1.0),
            rng,
        }
    }
}

impl OutcomePolicy for RandomPolicy {
    fn decide(&mut self, _scenario: &Scenario) -> Verdict {
        if self.rng.gen::<f64>() < self.success_probability {
            Verdict::Pass
        } else {
            let cause = FAILURE_CAUSES[self.rng.gen_range(0..FAILURE_CAUSES.len())];
            Verdict::Fail(cause.to_string())
        }
    }
}

/// Replays a fixed sequence of verdicts, then passes once exhausted.
pub struct ScriptedPolicy {
    script: VecDeque<Verdict>,
}

impl ScriptedPolicy {
    pub fn new(script: Vec<Verdict>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl OutcomePolicy for ScriptedPolicy {
    fn decide(&mut self, _scenario: &Scenario) -> Verdict {
        self.script.pop_front().unwrap_or(Verdict::Pass)
    }
}

/// Scenario backend that consults an [`OutcomePolicy`] instead of a real
/// browser, with a small sleep standing in for processing latency. Exists so
/// the orchestrator and insight logic can run without network or browser
/// dependencies.
pub struct SimulatedBackend {
    policy: Mutex<Box<dyn OutcomePolicy>>,
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(policy: Box<dyn OutcomePolicy>) -> Self {
        Self {
            policy: Mutex::new(policy),
            latency: Duration::from_millis(100),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl ScenarioBackend for SimulatedBackend {
    async fn execute(&self, scenario: &Scenario) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.policy.lock().await.decide(scenario) {
            Verdict::Pass => Ok(()),
            Verdict::Fail(cause) => anyhow::bail!(cause),
        }
    }

    fn environment(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (
                "browser".to_string(),
                "Chrome 120.0.6099.109 (simulated)".to_string(),
            ),
            ("platform".to_string(), std::env::consts::OS.to_string()),
            ("viewport".to_string(), "1920x1080".to_string()),
        ])
    }
}
