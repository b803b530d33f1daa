pub mod driver;
pub mod error;
pub mod insight;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod utils;

// Re-export common items
pub use error::SuiteError;
pub use insight::{InsightEngine, InsightReport};
pub use report::generate_report;
pub use runner::{ScenarioRunner, SuiteReport, TestOutcome, TestSuiteOrchestrator};
pub use scenario::{login_suite, Scenario, ScenarioKind};
