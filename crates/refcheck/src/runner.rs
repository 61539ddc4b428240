//! Scenario runner: runs scenarios in order and collects every outcome

mod probe;

pub use probe::{Assertion, Probe};

use std::fmt;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::config::RunConfig;
use crate::error::Result;
use crate::report::Reporter;
use crate::scenarios;

/// Lifecycle of one scenario run.
///
/// `Pending -> Running -> Passed | Failed`; the last two are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioState {
    /// Not started
    Pending,
    /// Body executing
    Running,
    /// Finished with every assertion holding
    Passed,
    /// At least one assertion failed, or the body faulted
    Failed,
}

impl ScenarioState {
    /// Whether no further transition can happen.
    pub fn is_terminal(self) -> bool {
        matches!(self, ScenarioState::Passed | ScenarioState::Failed)
    }
}

/// Scenario body signature.
pub type ScenarioFn = fn(&mut Probe<'_>) -> Result<()>;

/// A named, statically defined scenario.
#[derive(Clone, Copy)]
pub struct ScenarioDef {
    /// Unique name, used for selection and reporting
    pub name: &'static str,

    /// One-line summary
    pub description: &'static str,

    /// The body
    pub run: ScenarioFn,
}

impl ScenarioDef {
    /// Define a scenario.
    pub const fn new(name: &'static str, description: &'static str, run: ScenarioFn) -> Self {
        Self {
            name,
            description,
            run,
        }
    }
}

impl fmt::Debug for ScenarioDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioDef")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,

    /// Terminal state
    pub state: ScenarioState,

    /// Every assertion made, in order
    pub assertions: Vec<Assertion>,

    /// Error that ended the body early, if any
    pub fault: Option<String>,
}

impl ScenarioReport {
    /// Whether the scenario passed.
    pub fn passed(&self) -> bool {
        self.state == ScenarioState::Passed
    }

    /// Assertions that did not hold.
    pub fn failures(&self) -> impl Iterator<Item = &Assertion> {
        self.assertions.iter().filter(|a| !a.passed)
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    /// Per-scenario reports, in execution order
    pub scenarios: Vec<ScenarioReport>,
}

impl SuiteReport {
    /// Number of scenarios run.
    pub fn total(&self) -> usize {
        self.scenarios.len()
    }

    /// Number of scenarios that passed.
    pub fn passed_count(&self) -> usize {
        self.scenarios.iter().filter(|s| s.passed()).count()
    }

    /// Number of scenarios that failed.
    pub fn failed_count(&self) -> usize {
        self.total() - self.passed_count()
    }

    /// Whether every scenario passed.
    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    /// Look up a scenario report by name.
    pub fn get(&self, name: &str) -> Option<&ScenarioReport> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }

    /// Process exit code: 0 when everything passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Runs scenarios against a reporter.
///
/// Failures never stop the run: every selected scenario executes, and each
/// one starts from fresh cells.
///
/// # Example
///
/// ```
/// use refcheck::{MemoryReporter, RunConfig, Runner};
///
/// let mut runner = Runner::new(MemoryReporter::new());
/// let report = runner
///     .run_suite(&RunConfig::new().with_only(["allocation"]))
///     .unwrap();
///
/// assert_eq!(report.names(), vec!["allocation"]);
/// assert!(report.all_passed());
/// ```
#[derive(Debug)]
pub struct Runner<R: Reporter> {
    reporter: R,
}

impl<R: Reporter> Runner<R> {
    /// Create a runner reporting to `reporter`.
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// The reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consume the runner, returning the reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Run the catalogue (and the `init` prelude) as selected by `config`.
    ///
    /// # Errors
    ///
    /// `UnknownScenario` if `config` names a scenario that does not exist.
    pub fn run_suite(&mut self, config: &RunConfig) -> Result<SuiteReport> {
        let catalogue = scenarios::catalogue();
        config.validate(
            catalogue
                .keys()
                .copied()
                .chain(std::iter::once(scenarios::INIT.name)),
        )?;

        let mut defs = Vec::with_capacity(catalogue.len() + 1);
        if config.include_init && config.selects(scenarios::INIT.name) {
            defs.push(scenarios::INIT);
        }
        defs.extend(catalogue.values().filter(|d| config.selects(d.name)).copied());

        Ok(self.run(&defs))
    }

    /// Run `defs` in order.
    pub fn run(&mut self, defs: &[ScenarioDef]) -> SuiteReport {
        let scenarios = defs.iter().map(|def| self.run_one(def)).collect();
        SuiteReport { scenarios }
    }

    /// Run a single scenario to a terminal state.
    pub fn run_one(&mut self, def: &ScenarioDef) -> ScenarioReport {
        let _span = debug_span!("scenario", name = def.name).entered();
        debug!(state = ?ScenarioState::Pending, "scenario queued");

        self.reporter.info(&format!("== {}", def.name));

        let mut probe = Probe::new(def.name, &mut self.reporter);
        debug!(state = ?probe.state(), "scenario started");
        let outcome = (def.run)(&mut probe);
        let (state, assertions) = probe.finish();

        let (state, fault) = match outcome {
            Ok(()) if state == ScenarioState::Failed => (ScenarioState::Failed, None),
            Ok(()) => (ScenarioState::Passed, None),
            Err(err) => {
                self.reporter
                    .warn(&format!("[Error] {}: aborted: {}", def.name, err));
                (ScenarioState::Failed, Some(err.to_string()))
            }
        };
        debug!(state = ?state, assertions = assertions.len(), "scenario finished");

        ScenarioReport {
            name: def.name.to_string(),
            state,
            assertions,
            fault,
        }
    }
}
