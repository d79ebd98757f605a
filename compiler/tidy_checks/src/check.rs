use tidy_diagnostic::{CheckCode, DiagnosticSink};
use tidy_ir::TranslationUnit;

use crate::{CheckOptions, TypeCost};

/// Everything a check may look at while running over one translation unit.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    pub tu: &'a TranslationUnit,
    pub type_cost: &'a dyn TypeCost,
}

impl<'a> CheckContext<'a> {
    pub fn new(tu: &'a TranslationUnit, type_cost: &'a dyn TypeCost) -> Self {
        CheckContext { tu, type_cost }
    }
}

/// A check over a translation unit.
///
/// Checks take `&mut self` in [`Check::check`] because some carry state
/// scoped to their own lifetime (the include inserter of
/// [`UnnecessaryValueParam`](crate::UnnecessaryValueParam)).
pub trait Check {
    /// The check's stable identifier.
    fn code(&self) -> CheckCode;

    /// The configured name, e.g. `performance-unnecessary-value-param`.
    fn name(&self) -> &'static str {
        self.code().as_str()
    }

    /// Write the effective option values back, so a configuration
    /// round-trips through the check.
    fn store_options(&self, options: &mut CheckOptions) {
        let _ = options;
    }

    /// Run over one translation unit, reporting findings to `sink`.
    fn check(&mut self, cx: &CheckContext<'_>, sink: &mut dyn DiagnosticSink);
}
