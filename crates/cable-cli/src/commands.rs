use anyhow::{Context, Result};
use tracing::info;

use cable_cli::confirm::provider_for;
use cable_cli::pipeline::{CheckRequest, router_usage, run_check};
use cable_config::load_config;
use cable_report::{write_json_report, write_router_usage};

use crate::cli::{CheckArgs, RouterArgs};
use crate::types::{CheckResult, RouterResult};

fn log_banner() {
    info!("==== cablecheck {} ====", env!("CARGO_PKG_VERSION"));
}

pub fn run_check_command(args: &CheckArgs) -> Result<CheckResult> {
    log_banner();
    info!(
        input = %args.input.display(),
        prefix = %args.prefix,
        config = %args.config.display(),
        diagram = args.diagram.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
        "parameters"
    );
    let config = load_config(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;
    let request = CheckRequest {
        input: &args.input,
        prefix: &args.prefix,
        diagram: args.diagram.as_deref(),
    };
    let mut provider = provider_for(args.confirm.into());
    let outcome = run_check(&request, &config, provider.as_mut())?;
    if let Some(path) = &args.report {
        write_json_report(path, &outcome.file_name, &outcome.report)?;
        info!(path = %path.display(), "report written");
    }
    Ok(CheckResult {
        outcome,
        report_path: args.report.clone(),
    })
}

pub fn run_router_command(args: &RouterArgs) -> Result<RouterResult> {
    log_banner();
    let config = load_config(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;
    let usage = router_usage(&args.inputs, &config)?;
    if let Some(path) = &args.output {
        write_router_usage(path, &usage)?;
        info!(path = %path.display(), sites = usage.len(), "router usage written");
    }
    Ok(RouterResult {
        usage,
        output: args.output.clone(),
    })
}
