//! Report output for cable checks.
//!
//! - **Router usage**: flat `site,UsageName` export, one line per site
//! - **JSON report**: the folded validation report with run metadata

mod json;
mod router;

pub use json::{JsonReport, render_json_report, write_json_report};
pub use router::{render_router_usage, write_router_usage};
