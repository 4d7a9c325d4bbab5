//! Error types for the scenario framework.

use thiserror::Error;

/// Result type for scenario runs.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A step returned an error it was not expected to.
    #[error("step '{step}' failed: {message}")]
    StepExecution { step: String, message: String },

    /// A step's result did not match its assertion.
    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },
}

impl ScenarioError {
    pub fn step_execution(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StepExecution {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
