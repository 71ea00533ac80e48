//! Check and router-usage pipelines: ingest, validate or classify, report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use cable_config::CheckConfig;
use cable_ingest::{SkippedRow, accept_workbook, read_diagram, read_workbook};
use cable_model::{CablePort, SiteUsage, ValidationReport};
use cable_validate::{
    CheckInput, ConfirmationProvider, RuleEngine, RunPhase, Site, ValidationRun, classify_site,
};

/// Accepted records of one input path.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    /// File name used for site derivation.
    pub file_name: String,
    pub records: Vec<CablePort>,
    pub skipped: Vec<SkippedRow>,
}

pub fn load_input(path: &Path, config: &CheckConfig) -> Result<LoadedInput> {
    let workbook =
        read_workbook(path).with_context(|| format!("read cable list {}", path.display()))?;
    let outcome = accept_workbook(&workbook, config);
    info!(
        sheets = workbook.sheets.len(),
        records = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "cable list loaded"
    );
    Ok(LoadedInput {
        file_name: workbook.name,
        records: outcome.records,
        skipped: outcome.skipped,
    })
}

/// Inputs of the `check` pipeline.
#[derive(Debug, Clone)]
pub struct CheckRequest<'a> {
    pub input: &'a Path,
    pub prefix: &'a str,
    pub diagram: Option<&'a Path>,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub file_name: String,
    pub record_count: usize,
    pub skipped: Vec<SkippedRow>,
    pub report: ValidationReport,
}

pub fn run_check(
    request: &CheckRequest<'_>,
    config: &CheckConfig,
    provider: &mut dyn ConfirmationProvider,
) -> Result<CheckOutcome> {
    let mut run = ValidationRun::new();
    run.advance(RunPhase::Ingesting)?;
    let loaded = {
        let _span = info_span!("ingest").entered();
        load_input(request.input, config)?
    };
    let diagram = match request.diagram {
        Some(path) => Some(
            read_diagram(path, &config.diagram)
                .with_context(|| format!("read diagram {}", path.display()))?,
        ),
        None => None,
    };
    if loaded.records.is_empty() {
        warn!("no cable rows found; check the column layout in the config");
    }
    let input = CheckInput {
        records: &loaded.records,
        prefix: request.prefix,
        file_name: &loaded.file_name,
        diagram: diagram.as_ref(),
    };
    let report = RuleEngine::new(config).run(&mut run, &input, provider)?;
    Ok(CheckOutcome {
        file_name: loaded.file_name,
        record_count: loaded.records.len(),
        skipped: loaded.skipped,
        report,
    })
}

/// Classify each input and fold the result per site.
pub fn router_usage(inputs: &[PathBuf], config: &CheckConfig) -> Result<SiteUsage> {
    let mut usage = SiteUsage::new();
    for path in inputs {
        let _span = info_span!("router", input = %path.display()).entered();
        let loaded = load_input(path, config)?;
        let site = Site::from_file_name(&loaded.file_name, &config.file_name);
        let class = classify_site(&loaded.records, &config.router);
        info!(site = %site.name, usage = %class, "site classified");
        usage.merge(site.name, class);
    }
    Ok(usage)
}
