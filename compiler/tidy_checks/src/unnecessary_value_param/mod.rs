//! `performance-unnecessary-value-param`.
//!
//! Flags parameters of expensive-to-copy type that are passed by value
//! although the function never needs its own copy:
//!
//! ```text
//! void f(const std::string s);         // const, copied for nothing
//! void g(std::string s) { h(s); }      // h takes const std::string&
//! Widget make(Widget w) { return Widget(w); }   // copied exactly once
//! ```
//!
//! The first two become `const std::string&`, on every redeclaration. The
//! last keeps its signature and moves instead: `Widget(std::move(w))`,
//! adding `#include <utility>` when the file lacks it.
//!
//! No state survives from one function to the next, except the include
//! inserter, which lives as long as the check.

pub mod candidates;
pub mod classify;
pub mod decision;
pub mod fixes;
pub mod gate;
pub mod references;

pub use candidates::{select_candidates, FunctionCandidate, ParameterCandidate};
pub use classify::{Reference, UsageClassifier, UsageKind};
pub use decision::{decide, RewriteDecision, UsageReport};

use tidy_diagnostic::{CheckCode, Diagnostic, DiagnosticSink};
use tidy_ir::{FunctionId, TranslationUnit, VarId};

use crate::{Check, CheckContext, CheckOptions, IncludeInserter, IncludeStyle, TypeCost};

/// Classification and decision for one parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterAnalysis {
    pub report: UsageReport,
    pub decision: RewriteDecision,
}

/// Enumerate, classify and decide for one candidate parameter.
pub fn analyze(
    tu: &TranslationUnit,
    classifier: &UsageClassifier<'_>,
    candidate: &FunctionCandidate,
    param: &ParameterCandidate,
) -> ParameterAnalysis {
    let report = UsageReport::new(
        references::find_references(tu, candidate.body, param.var)
            .into_iter()
            .map(|expr| classifier.classify(param.var, expr)),
    );
    let decision = decide(param, &report);
    ParameterAnalysis { report, decision }
}

/// Analyze parameter `index` of the definition `function`.
///
/// Returns `None` when the function is not a candidate or that parameter
/// is not one of its candidate parameters.
pub fn analyze_parameter(
    tu: &TranslationUnit,
    type_cost: &dyn TypeCost,
    function: FunctionId,
    index: usize,
) -> Option<ParameterAnalysis> {
    let escapes = gate::is_referenced_outside_call(tu, tu.function(function).entity);
    let candidate = FunctionCandidate::from_definition(tu, type_cost, function, escapes)?;
    let param = candidate.params.iter().find(|p| p.index == index)?;
    let classifier = UsageClassifier::new(tu, function);
    Some(analyze(tu, &classifier, &candidate, param))
}

/// `'name'`, or `#N` (one-based) for an unnamed parameter.
fn param_name_or_index(tu: &TranslationUnit, var: VarId, index: usize) -> String {
    let name = tu.var(var).name;
    if name.is_empty() {
        format!("#{}", index + 1)
    } else {
        format!("'{}'", tu.name(name))
    }
}

/// The `performance-unnecessary-value-param` check.
#[derive(Debug)]
pub struct UnnecessaryValueParam {
    inserter: IncludeInserter,
}

impl Default for UnnecessaryValueParam {
    fn default() -> Self {
        Self::new(IncludeStyle::default())
    }
}

impl UnnecessaryValueParam {
    /// Option selecting the [`IncludeStyle`] for `<utility>` insertion.
    pub const INCLUDE_STYLE: &'static str = "IncludeStyle";

    pub fn new(include_style: IncludeStyle) -> Self {
        UnnecessaryValueParam {
            inserter: IncludeInserter::new(include_style),
        }
    }

    /// Configure from `options`. An unrecognized include style is logged
    /// and replaced by the default rather than failing the run.
    pub fn from_options(options: &CheckOptions) -> Self {
        let raw = options.get_or(
            CheckCode::UnnecessaryValueParam.as_str(),
            Self::INCLUDE_STYLE,
            IncludeStyle::default().as_str(),
        );
        let style = raw.parse::<IncludeStyle>().unwrap_or_else(|err| {
            tracing::warn!(%err, "using default include style");
            IncludeStyle::default()
        });
        Self::new(style)
    }

    pub fn include_style(&self) -> IncludeStyle {
        self.inserter.style()
    }

    fn report_const_reference(
        tu: &TranslationUnit,
        candidate: &FunctionCandidate,
        param: &ParameterCandidate,
        already_const: bool,
        sink: &mut dyn DiagnosticSink,
    ) {
        let name = param_name_or_index(tu, param.var, param.index);
        let message = if already_const {
            format!(
                "the const qualified parameter {name} is copied for each invocation; \
                 consider making it a reference"
            )
        } else {
            format!(
                "the parameter {name} is copied for each invocation but only used as a \
                 const reference; consider making it a const reference"
            )
        };
        let definition = tu.function(candidate.function);
        let mut diag = Diagnostic::warning(CheckCode::UnnecessaryValueParam)
            .with_message(message)
            .at(definition.file, tu.var(param.var).name_span);

        if gate::const_reference_denial(tu, candidate, param).is_none() {
            diag = diag.with_edits(fixes::const_reference_edits(tu, candidate, param.index));
        }
        sink.report(diag);
    }

    fn report_move(
        &mut self,
        tu: &TranslationUnit,
        candidate: &FunctionCandidate,
        param: &ParameterCandidate,
        reference: &Reference,
        sink: &mut dyn DiagnosticSink,
    ) {
        let name = param_name_or_index(tu, param.var, param.index);
        let file = tu.function(candidate.function).file;
        let mut diag = Diagnostic::warning(CheckCode::UnnecessaryValueParam)
            .with_message(format!(
                "parameter {name} is passed by value and only copied once; \
                 consider moving it to avoid unnecessary copies"
            ))
            .at(file, reference.span);

        if gate::move_denial(reference).is_none() {
            let include = self.inserter.insertion(tu, file, "utility", true);
            diag = diag.with_edits(fixes::move_edits(reference, file, include));
        }
        sink.report(diag);
    }
}

impl Check for UnnecessaryValueParam {
    fn code(&self) -> CheckCode {
        CheckCode::UnnecessaryValueParam
    }

    fn store_options(&self, options: &mut CheckOptions) {
        options.store(
            self.name(),
            Self::INCLUDE_STYLE,
            self.include_style().as_str(),
        );
    }

    fn check(&mut self, cx: &CheckContext<'_>, sink: &mut dyn DiagnosticSink) {
        let tu = cx.tu;
        self.inserter.reset();

        for candidate in select_candidates(tu, cx.type_cost) {
            let classifier = UsageClassifier::new(tu, candidate.function);
            for param in &candidate.params {
                let analysis = analyze(tu, &classifier, &candidate, param);
                tracing::debug!(
                    function = candidate.function.raw(),
                    param = param.index,
                    references = analysis.report.references().len(),
                    decision = ?analysis.decision,
                    "decided parameter rewrite",
                );
                match analysis.decision {
                    RewriteDecision::None => {}
                    RewriteDecision::SuggestConstReference { already_const } => {
                        Self::report_const_reference(tu, &candidate, param, already_const, sink);
                    }
                    RewriteDecision::SuggestMove(reference) => {
                        self.report_move(tu, &candidate, param, &reference, sink);
                    }
                }
            }
        }
    }
}
