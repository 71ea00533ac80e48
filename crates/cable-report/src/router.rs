use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use cable_model::SiteUsage;

/// One `site,UsageName` line per site, sorted by site.
pub fn render_router_usage(usage: &SiteUsage) -> String {
    let mut out = String::new();
    for (site, class) in usage.iter() {
        out.push_str(site);
        out.push(',');
        out.push_str(class.as_str());
        out.push('\n');
    }
    out
}

/// Write the router usage export as UTF-8, replacing any existing file.
pub fn write_router_usage(path: &Path, usage: &SiteUsage) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    fs::write(path, render_router_usage(usage))
        .with_context(|| format!("write router usage {}", path.display()))
}
