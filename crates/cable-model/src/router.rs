//! Per-site router usage classification.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CableError;

/// Ordinal classification; a lower ordinal is a higher-priority finding.
///
/// Variants are declared in ordinal order so the derived `Ord` matches the
/// numeric value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RouterUsage {
    Used = 0,
    Corrected = 1,
    CheckMe = 2,
    NotModel = 8,
    #[default]
    Unknown = 32,
}

impl RouterUsage {
    pub const ALL: [RouterUsage; 5] = [
        Self::Used,
        Self::Corrected,
        Self::CheckMe,
        Self::NotModel,
        Self::Unknown,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Used => "Used",
            Self::Corrected => "Corrected",
            Self::CheckMe => "CheckMe",
            Self::NotModel => "NotModel",
            Self::Unknown => "Unknown",
        }
    }

    /// Reduce classifications by numeric minimum; an empty input is `Unknown`.
    pub fn reduce(values: impl IntoIterator<Item = RouterUsage>) -> RouterUsage {
        values.into_iter().min().unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for RouterUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouterUsage {
    type Err = CableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|usage| usage.as_str() == s)
            .ok_or_else(|| CableError::UnknownRouterUsage(s.to_string()))
    }
}

/// Site name to its folded router usage, ordered by site name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteUsage {
    sites: BTreeMap<String, RouterUsage>,
}

impl SiteUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a classification for a site, keeping the minimum ordinal.
    pub fn merge(&mut self, site: impl Into<String>, usage: RouterUsage) {
        self.sites
            .entry(site.into())
            .and_modify(|current| *current = (*current).min(usage))
            .or_insert(usage);
    }

    pub fn get(&self, site: &str) -> Option<RouterUsage> {
        self.sites.get(site).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RouterUsage)> {
        self.sites.iter().map(|(site, usage)| (site.as_str(), *usage))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
