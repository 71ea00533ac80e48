use std::path::PathBuf;

use cable_cli::pipeline::CheckOutcome;
use cable_model::SiteUsage;

#[derive(Debug)]
pub struct CheckResult {
    pub outcome: CheckOutcome,
    pub report_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RouterResult {
    pub usage: SiteUsage,
    pub output: Option<PathBuf>,
}
