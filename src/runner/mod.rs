pub mod events;
pub mod orchestrator;
pub mod outcome;
pub mod policy;
pub mod scenario_runner;

pub use events::{ConsoleEventListener, EventEmitter, TestEvent};
pub use orchestrator::TestSuiteOrchestrator;
pub use outcome::{SuiteReport, TestOutcome, TestStatus};
pub use policy::{OutcomePolicy, RandomPolicy, ScriptedPolicy, SimulatedBackend, Verdict};
pub use scenario_runner::{ScenarioBackend, ScenarioRunner};
