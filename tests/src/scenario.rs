//! Scenario definition and builder.

use nattr::Value;

use crate::assertion::{Assertion, AssertionBuilder, StepResult};
use crate::error::ScenarioResult;
use crate::runner::Runner;

/// The operation a step performs on the scenario's tree.
pub type Action = Box<dyn FnOnce(&mut Value) -> StepResult>;

/// A step in a scenario with its assertion.
pub struct Step {
    /// Step name (for reporting).
    pub name: String,
    pub(crate) action: Action,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("assertion", &self.assertion)
            .finish_non_exhaustive()
    }
}

/// A complete test scenario: a starting tree and the steps applied to it in
/// order.
#[derive(Debug)]
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Starting tree.
    tree: Value,
    /// Steps with assertions.
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a new scenario starting from an empty mapping.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tree: Value::map(),
            steps: Vec::new(),
        }
    }

    /// Set the starting tree.
    pub fn tree(mut self, tree: impl Into<Value>) -> Self {
        self.tree = tree.into();
        self
    }

    /// Add a step with an assertion.
    pub fn step<A, F>(mut self, name: impl Into<String>, action: A, assertion_fn: F) -> Self
    where
        A: FnOnce(&mut Value) -> StepResult + 'static,
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let name = name.into();
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step {
            name,
            action: Box::new(action),
            assertion,
        });
        self
    }

    /// Run the scenario and return the final tree.
    pub fn run(self) -> ScenarioResult<Value> {
        Runner::new(self).run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub(crate) fn into_parts(self) -> (String, Value, Vec<Step>) {
        (self.name, self.tree, self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("build")
            .step("first", actions::set("a", 1i64, false), |a| a.written())
            .step("second", actions::delete("a", false), |a| a.deleted(1i64));

        assert_eq!(scenario.name(), "build");
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.steps()[1].name, "second");
    }
}
