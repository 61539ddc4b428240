//! Suite run configuration

use crate::error::{RefcheckError, Result};

/// Which scenarios a run covers.
///
/// Selection never changes execution order: scenarios always run in
/// catalogue order, whatever order `only` lists them in.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Run only these scenarios (empty means all)
    pub only: Vec<String>,

    /// Never run these scenarios
    pub skip: Vec<String>,

    /// Run the `init` prelude before the catalogue
    pub include_init: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            only: Vec::new(),
            skip: Vec::new(),
            include_init: true,
        }
    }
}

impl RunConfig {
    /// Create a config that runs everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the run to `names`.
    pub fn with_only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only.extend(names.into_iter().map(Into::into));
        self
    }

    /// Exclude `names` from the run.
    pub fn with_skip<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip.extend(names.into_iter().map(Into::into));
        self
    }

    /// Toggle the `init` prelude.
    pub fn with_init(mut self, include: bool) -> Self {
        self.include_init = include;
        self
    }

    /// Check every named scenario against `known`.
    pub fn validate<'a>(&self, known: impl IntoIterator<Item = &'a str> + Clone) -> Result<()> {
        for name in self.only.iter().chain(self.skip.iter()) {
            if !known.clone().into_iter().any(|k| k == name.as_str()) {
                return Err(RefcheckError::UnknownScenario { name: name.clone() });
            }
        }
        Ok(())
    }

    /// Whether `name` is selected by this config.
    pub fn selects(&self, name: &str) -> bool {
        let wanted = self.only.is_empty() || self.only.iter().any(|n| n == name);
        wanted && !self.skip.iter().any(|n| n == name)
    }
}
