use serde::{Deserialize, Serialize};

use crate::record::CableId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// One line of the diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the rule that produced the line (e.g. `duplicate-cable-id`).
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// Cable the line refers to, when there is a single one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cable_id: Option<CableId>,
}

impl Diagnostic {
    pub fn new(severity: Severity, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            rule: rule.into(),
            message: message.into(),
            cable_id: None,
        }
    }

    pub fn error(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, rule, message)
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, rule, message)
    }

    pub fn info(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, rule, message)
    }

    pub fn with_cable(mut self, cable_id: CableId) -> Self {
        self.cable_id = Some(cable_id);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Result of one rule: its pass flag and the lines it produced.
///
/// A rule fails as soon as it records an error line; warnings and info lines
/// never flip the flag. [`RuleOutcome::fail`] is for failures that carry no
/// detail line of their own (a declined confirmation, for instance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: String,
    pub title: String,
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl RuleOutcome {
    pub fn new(rule: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            title: title.into(),
            passed: true,
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.passed = false;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::error(self.rule.clone(), message);
        self.push(diagnostic);
    }

    pub fn error_for(&mut self, cable_id: CableId, message: impl Into<String>) {
        let diagnostic = Diagnostic::error(self.rule.clone(), message).with_cable(cable_id);
        self.push(diagnostic);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::warning(self.rule.clone(), message);
        self.push(diagnostic);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let diagnostic = Diagnostic::info(self.rule.clone(), message);
        self.push(diagnostic);
    }

    pub fn fail(&mut self) {
        self.passed = false;
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().map(|d| d.message.as_str())
    }
}

/// Per-rule line of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub rule: String,
    pub title: String,
    pub passed: bool,
    pub error_count: usize,
}

/// Folded result of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub overall_pass: bool,
    pub rules: Vec<RuleSummary>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            overall_pass: true,
            rules: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_outcomes(outcomes: impl IntoIterator<Item = RuleOutcome>) -> Self {
        let mut report = Self::new();
        for outcome in outcomes {
            report.record(outcome);
        }
        report
    }

    /// Fold one rule result into the report.
    ///
    /// Detail lines are appended in rule order, followed by an `[OK]`/`[NG]`
    /// verdict line for the rule.
    pub fn record(&mut self, outcome: RuleOutcome) {
        let error_count = outcome.error_count();
        let verdict = if outcome.passed { "[OK]" } else { "[NG]" };
        self.overall_pass &= outcome.passed;
        self.diagnostics.extend(outcome.diagnostics);
        self.diagnostics.push(Diagnostic::info(
            outcome.rule.clone(),
            format!("{verdict} {}", outcome.title),
        ));
        self.rules.push(RuleSummary {
            rule: outcome.rule,
            title: outcome.title,
            passed: outcome.passed,
            error_count,
        });
    }

    pub fn rule(&self, name: &str) -> Option<&RuleSummary> {
        self.rules.iter().find(|summary| summary.rule == name)
    }

    pub fn first_failure(&self) -> Option<&RuleSummary> {
        self.rules.iter().find(|summary| !summary.passed)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn diagnostics_for<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.rule == rule)
    }

    /// Closing line of the log.
    pub fn verdict_line(&self) -> String {
        match self.first_failure() {
            None => "all checks passed".to_string(),
            Some(summary) => format!(
                "checks failed; first failing section: {} ({})",
                summary.title, summary.rule
            ),
        }
    }
}
