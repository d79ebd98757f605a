//! Check registry.
//!
//! Holds the enabled checks and runs them in registration order over a
//! translation unit. Drivers build it from the enabled check names and the
//! option set of a configuration file.

use rustc_hash::FxHashMap;

use tidy_diagnostic::{CheckCode, DiagnosticSink};
use tidy_ir::TranslationUnit;

use crate::{
    Check, CheckContext, CheckOptions, DeleteNullPointer, OptionError, TypeCost,
    UnnecessaryValueParam,
};

/// Registry of enabled checks.
pub struct CheckRegistry {
    /// Checks in registration order.
    checks: Vec<Box<dyn Check>>,
    /// Index from check code to position in `checks`.
    by_code: FxHashMap<CheckCode, usize>,
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        CheckRegistry {
            checks: Vec::new(),
            by_code: FxHashMap::default(),
        }
    }

    /// Build a registry enabling `names`, configured from `options`.
    ///
    /// # Errors
    /// Returns [`OptionError::UnknownCheck`] for the first name no check
    /// answers to.
    pub fn from_options(names: &[&str], options: &CheckOptions) -> Result<Self, OptionError> {
        let mut registry = CheckRegistry::new();
        for &name in names {
            let code =
                CheckCode::from_name(name).ok_or_else(|| OptionError::UnknownCheck(name.to_owned()))?;
            match code {
                CheckCode::UnnecessaryValueParam => {
                    registry.register(UnnecessaryValueParam::from_options(options));
                }
                CheckCode::DeleteNullPointer => registry.register(DeleteNullPointer),
            }
        }
        Ok(registry)
    }

    /// Build a registry with every check enabled.
    pub fn with_all_checks(options: &CheckOptions) -> Self {
        let mut registry = CheckRegistry::new();
        registry.register(UnnecessaryValueParam::from_options(options));
        registry.register(DeleteNullPointer);
        registry
    }

    /// Register a check. A check with the same code replaces the earlier
    /// one in place.
    pub fn register<C: Check + 'static>(&mut self, check: C) {
        let code = check.code();
        if let Some(&idx) = self.by_code.get(&code) {
            tracing::debug!(check = code.as_str(), "replacing registered check");
            self.checks[idx] = Box::new(check);
            return;
        }
        self.by_code.insert(code, self.checks.len());
        self.checks.push(Box::new(check));
    }

    /// Run every check over `tu`.
    pub fn run(
        &mut self,
        tu: &TranslationUnit,
        type_cost: &dyn TypeCost,
        sink: &mut dyn DiagnosticSink,
    ) {
        let cx = CheckContext::new(tu, type_cost);
        for check in &mut self.checks {
            tracing::debug!(check = check.name(), "running check");
            check.check(&cx, sink);
        }
    }

    /// Collect the effective options of every registered check.
    pub fn store_options(&self, options: &mut CheckOptions) {
        for check in &self.checks {
            check.store_options(options);
        }
    }

    /// Check if a check with `code` is registered.
    pub fn has_check(&self, code: CheckCode) -> bool {
        self.by_code.contains_key(&code)
    }

    /// Names of the registered checks, in run order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|c| c.name())
    }

    /// Get the number of registered checks.
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
