//! Rule engine and run lifecycle.
//!
//! The engine builds the shared [`Relations`] once, executes every rule in
//! [`RuleId::ORDER`] without short-circuiting, and folds each outcome into a
//! [`ValidationReport`]. Only the multiple-connection rule depends on earlier
//! verdicts: it is skipped when any earlier rule failed.

use std::fmt;

use cable_config::CheckConfig;
use cable_model::{CablePort, DiagramInventory, RuleOutcome, Severity, ValidationReport};
use tracing::{debug, error, info, info_span, warn};

use crate::error::ValidateError;
use crate::escalation::{self, ConfirmationProvider};
use crate::reconcile;
use crate::relations::Relations;
use crate::rules::{RuleContext, RuleId, bijection, cable_id, connect, host_name, model_port, rosette};
use crate::site::Site;

/// Lifecycle of one validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    NotStarted,
    Ingesting,
    Validating,
    AwaitingConfirmation,
    Completed {
        passed: bool,
    },
}

impl RunPhase {
    fn can_advance_to(self, next: RunPhase) -> bool {
        matches!(
            (self, next),
            (RunPhase::NotStarted, RunPhase::Ingesting)
                | (RunPhase::NotStarted, RunPhase::Validating)
                | (RunPhase::Ingesting, RunPhase::Validating)
                | (RunPhase::Validating, RunPhase::AwaitingConfirmation)
                | (RunPhase::Validating, RunPhase::Completed { .. })
                | (RunPhase::AwaitingConfirmation, RunPhase::Completed { .. })
        )
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::NotStarted => f.write_str("not started"),
            RunPhase::Ingesting => f.write_str("ingesting"),
            RunPhase::Validating => f.write_str("validating"),
            RunPhase::AwaitingConfirmation => f.write_str("awaiting confirmation"),
            RunPhase::Completed { passed: true } => f.write_str("completed (pass)"),
            RunPhase::Completed { passed: false } => f.write_str("completed (fail)"),
        }
    }
}

/// Tracks the phase of one run and rejects out-of-order transitions.
#[derive(Debug, Clone, Default)]
pub struct ValidationRun {
    phase: RunPhase,
}

impl ValidationRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn advance(&mut self, next: RunPhase) -> Result<(), ValidateError> {
        if !self.phase.can_advance_to(next) {
            return Err(ValidateError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        debug!(from = %self.phase, to = %next, "run phase");
        self.phase = next;
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, RunPhase::Completed { .. })
    }
}

/// Inputs of one run besides configuration.
#[derive(Debug, Clone, Copy)]
pub struct CheckInput<'a> {
    pub records: &'a [CablePort],
    /// Hostname prefix expected on every host.
    pub prefix: &'a str,
    /// Input file name, used to derive the site.
    pub file_name: &'a str,
    pub diagram: Option<&'a DiagramInventory>,
}

/// Executes the rule set against one set of records.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    config: &'a CheckConfig,
}

impl<'a> RuleEngine<'a> {
    pub fn new(config: &'a CheckConfig) -> Self {
        Self { config }
    }

    /// Run every rule on a fresh [`ValidationRun`].
    pub fn validate(
        &self,
        input: &CheckInput<'_>,
        provider: &mut dyn ConfirmationProvider,
    ) -> Result<ValidationReport, ValidateError> {
        let mut run = ValidationRun::new();
        self.run(&mut run, input, provider)
    }

    /// Run every rule, moving `run` from its current phase to `Completed`.
    pub fn run(
        &self,
        run: &mut ValidationRun,
        input: &CheckInput<'_>,
        provider: &mut dyn ConfirmationProvider,
    ) -> Result<ValidationReport, ValidateError> {
        run.advance(RunPhase::Validating)?;
        let relations = Relations::build(input.records, self.config);
        let site = Site::from_file_name(input.file_name, &self.config.file_name);
        info!(
            records = input.records.len(),
            site = %site.name,
            site_number = site.number.as_deref().unwrap_or("-"),
            "validating"
        );
        let ctx = RuleContext {
            records: input.records,
            relations: &relations,
            config: self.config,
            prefix: input.prefix,
            site: &site,
            diagram: input.diagram,
        };

        let mut report = ValidationReport::new();
        for rule in RuleId::ORDER {
            let _span = info_span!("rule", rule = rule.as_str()).entered();
            info!("== {} ==", rule.title());
            let outcome = if rule == RuleId::MultipleConnection {
                self.escalate(run, &ctx, report.overall_pass, provider)?
            } else {
                execute_rule(rule, &ctx)
            };
            log_outcome(&outcome);
            report.record(outcome);
        }

        run.advance(RunPhase::Completed {
            passed: report.overall_pass,
        })?;
        info!("{}", report.verdict_line());
        Ok(report)
    }

    fn escalate(
        &self,
        run: &mut ValidationRun,
        ctx: &RuleContext<'_>,
        prior_passed: bool,
        provider: &mut dyn ConfirmationProvider,
    ) -> Result<RuleOutcome, ValidateError> {
        if !prior_passed {
            return Ok(escalation::skipped());
        }
        let groups = escalation::find_multiple_connections(ctx.records);
        if groups.is_empty() {
            return Ok(RuleId::MultipleConnection.outcome());
        }
        run.advance(RunPhase::AwaitingConfirmation)?;
        Ok(escalation::resolve(&groups, provider))
    }
}

fn execute_rule(rule: RuleId, ctx: &RuleContext<'_>) -> RuleOutcome {
    match rule {
        RuleId::DuplicateCableId => cable_id::check(ctx),
        RuleId::ConnectRequiresTo => connect::check_requires_to(ctx),
        RuleId::HostNameLength => host_name::check_length(ctx),
        RuleId::HostNameSuffix => host_name::check_suffix(ctx),
        RuleId::HostNamePrefix => host_name::check_prefix(ctx),
        RuleId::DeviceHostName => host_name::check_device_host_name(ctx),
        RuleId::DeviceHostBijection => bijection::check(ctx),
        RuleId::ModelPort => model_port::check_model_port(ctx),
        RuleId::KeyPort => model_port::check_key_port(ctx),
        RuleId::ConnectXConnect => connect::check_connect_x_connect(ctx),
        RuleId::DiagramReconciliation => reconcile::check(ctx),
        RuleId::RosetteUnique => rosette::check_unique(ctx),
        RuleId::RosetteSiteNumber => rosette::check_site_number(ctx),
        // Needs the verdict of the earlier rules; dispatched by the engine.
        RuleId::MultipleConnection => rule.outcome(),
    }
}

fn log_outcome(outcome: &RuleOutcome) {
    for diagnostic in &outcome.diagnostics {
        match diagnostic.severity {
            Severity::Error => error!("{}", diagnostic.message),
            Severity::Warning => warn!("{}", diagnostic.message),
            Severity::Info => info!("{}", diagnostic.message),
        }
    }
    let verdict = if outcome.passed { "[OK]" } else { "[NG]" };
    info!("{verdict} {}", outcome.title);
}
