use crate::error::SuiteError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which login check a scenario exercises when run against a live browser.
///
/// The simulated backend never looks at this; it only matters to
/// [`LiveBackend`](crate::driver::login::LiveBackend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    ValidCredentials,
    InvalidCredentials,
    EmptyFields,
    SqlInjection,
    XssPrevention,
}

/// Static description of one test to run. Built at suite-definition time and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub expected_result: String,
    pub kind: ScenarioKind,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        expected_result: impl Into<String>,
        kind: ScenarioKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            expected_result: expected_result.into(),
            kind,
        }
    }

    /// A scenario with an empty name cannot be referenced from its outcome.
    pub fn validate(&self) -> Result<(), SuiteError> {
        if self.name.trim().is_empty() {
            return Err(SuiteError::Configuration(
                "scenario name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The builtin login suite: five checks covering the happy path, rejection
/// paths and the two injection classes.
pub fn login_suite() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Valid Credentials Test",
            "Test login with valid username and password",
            "Successful login and redirect to dashboard",
            ScenarioKind::ValidCredentials,
        ),
        Scenario::new(
            "Invalid Credentials Test",
            "Test login with incorrect username/password",
            "Error message displayed, user remains on login page",
            ScenarioKind::InvalidCredentials,
        ),
        Scenario::new(
            "Empty Fields Validation",
            "Test form submission with empty username and password",
            "Validation error messages displayed for both fields",
            ScenarioKind::EmptyFields,
        ),
        Scenario::new(
            "SQL Injection Prevention",
            "Test login form against SQL injection attempts",
            "Form safely handles malicious input without errors",
            ScenarioKind::SqlInjection,
        ),
        Scenario::new(
            "XSS Prevention Test",
            "Test form against cross-site scripting attempts",
            "Script tags are properly escaped or rejected",
            ScenarioKind::XssPrevention,
        ),
    ]
}

/// A scenario suite loaded from a YAML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteFile {
    /// Login page URL. Optional; the CLI `--url` flag takes precedence.
    pub url: Option<String>,
    pub scenarios: Vec<Scenario>,
}

/// Parse a suite definition from a YAML file.
///
/// An empty scenario list is a configuration error here: a suite file that
/// defines nothing to run is a mistake, unlike an empty list handed directly
/// to the orchestrator.
pub fn load_suite_file(path: &Path) -> Result<SuiteFile, SuiteError> {
    let content = std::fs::read_to_string(path)?;
    let suite: SuiteFile = serde_yaml::from_str(&content)
        .map_err(|e| SuiteError::Configuration(format!("{}: {}", path.display(), e)))?;

    if suite.scenarios.is_empty() {
        return Err(SuiteError::Configuration(format!(
            "{}: suite file defines no scenarios",
            path.display()
        )));
    }
    for scenario in &suite.scenarios {
        scenario.validate()?;
    }
    Ok(suite)
}
