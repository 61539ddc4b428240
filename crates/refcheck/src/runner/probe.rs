//! Assertion recording for a single running scenario

use std::fmt;

use serde::Serialize;

use super::ScenarioState;
use crate::report::Reporter;

/// One recorded assertion outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assertion {
    /// What was checked
    pub label: String,

    /// Whether the check held
    pub passed: bool,

    /// Expected value, rendered with `Debug`
    pub expected: String,

    /// Observed value, rendered with `Debug`
    pub actual: String,
}

/// Handle a scenario body uses to make soft assertions.
///
/// A failed check is reported and recorded; it never stops the body.
/// The first failure moves the scenario to [`ScenarioState::Failed`].
pub struct Probe<'r> {
    scenario: &'static str,
    reporter: &'r mut dyn Reporter,
    state: ScenarioState,
    assertions: Vec<Assertion>,
}

impl<'r> Probe<'r> {
    /// Start probing `scenario`, reporting to `reporter`.
    pub fn new(scenario: &'static str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            scenario,
            reporter,
            state: ScenarioState::Running,
            assertions: Vec::new(),
        }
    }

    /// Name of the scenario being probed.
    pub fn scenario(&self) -> &'static str {
        self.scenario
    }

    /// Current state: `Running` until the first failure.
    pub fn state(&self) -> ScenarioState {
        self.state
    }

    /// Assertions recorded so far.
    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    /// Emit an informational line.
    pub fn info(&mut self, text: impl AsRef<str>) {
        self.reporter.info(text.as_ref());
    }

    /// Check that `actual == expected`.
    pub fn check_eq<T>(&mut self, label: impl Into<String>, expected: T, actual: T) -> bool
    where
        T: PartialEq + fmt::Debug,
    {
        let passed = expected == actual;
        self.record(label.into(), passed, format!("{:?}", expected), format!("{:?}", actual))
    }

    /// Check that `condition` holds.
    pub fn check(&mut self, label: impl Into<String>, condition: bool) -> bool {
        self.check_eq(label, true, condition)
    }

    fn record(&mut self, label: String, passed: bool, expected: String, actual: String) -> bool {
        if passed {
            self.reporter.info(&format!("[OK] {}", label));
        } else {
            self.reporter.warn(&format!(
                "[Error] {}: {}: expected {}, got {}",
                self.scenario, label, expected, actual
            ));
            self.state = ScenarioState::Failed;
        }
        self.assertions.push(Assertion {
            label,
            passed,
            expected,
            actual,
        });
        passed
    }

    /// Stop probing and hand back the state and assertions.
    pub(crate) fn finish(self) -> (ScenarioState, Vec<Assertion>) {
        (self.state, self.assertions)
    }
}
