use thiserror::Error;

/// Errors surfaced by the orchestrator and report pipeline.
///
/// Scenario-level failures are never represented here: they are absorbed at
/// the runner boundary and reported as failed outcomes. Only structural
/// misuse (bad configuration) or I/O trouble terminates a run.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("failed to persist results: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("failed to encode results: {0}")]
    Encoding(#[from] serde_json::Error),
}
