//! Hostname naming rules: length, numeric suffix, prefix, and the device name
//! substring each hostname must carry.
//!
//! From-sides are checked on every record and exempted when the from-device
//! or the from-connector is ignored. To-sides are checked on connect rows only
//! and exempted by the to-device.

use cable_model::{CablePort, RuleOutcome};
use tracing::trace;

use super::{RuleContext, RuleId};
use crate::catalog::DeviceHostTable;
use crate::ignore::IgnoreSet;

fn from_ignored(ignore: &IgnoreSet, record: &CablePort) -> bool {
    ignore.contains_any([
        record.from.device_name.as_str(),
        record.from.connector_name.as_str(),
    ])
}

fn to_checked(ignore: &IgnoreSet, record: &CablePort) -> bool {
    record.is_connect() && !ignore.contains(&record.to.device_name)
}

pub fn check_length(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::HostNameLength.outcome();
    let ignore = IgnoreSet::parse(&ctx.config.ignore.host_name_length);
    let device_length = ctx.config.host_name.device_length;
    let rosette_length = ctx.config.host_name.rosette_length;
    for record in ctx.records {
        if from_ignored(&ignore, record) {
            trace!(cable_id = record.cable_id, "from-side exempt from length check");
        } else {
            let length = record.from.host_name.chars().count();
            if length != device_length {
                outcome.error_for(
                    record.cable_id,
                    format!(
                        "cable {}: from hostname '{}' has length {length}, expected {device_length}",
                        record.cable_id, record.from.host_name
                    ),
                );
            }
        }
        if to_checked(&ignore, record) {
            let length = record.to.host_name.chars().count();
            if length != device_length && length != rosette_length {
                outcome.error_for(
                    record.cable_id,
                    format!(
                        "cable {}: to hostname '{}' has length {length}, expected {device_length} or {rosette_length}",
                        record.cable_id, record.to.host_name
                    ),
                );
            }
        }
    }
    outcome
}

/// Why a hostname's last two characters are not a valid suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuffixFault {
    TooShort,
    NotNumeric(String),
    OutOfRange(u32),
}

/// Parse the two-digit numeric suffix of a hostname, 1 through 99.
pub fn host_suffix(host: &str) -> Result<u32, SuffixFault> {
    let chars: Vec<char> = host.chars().collect();
    if chars.len() < 3 {
        return Err(SuffixFault::TooShort);
    }
    let suffix: String = chars[chars.len() - 2..].iter().collect();
    if !suffix.chars().all(|c| c.is_ascii_digit()) {
        return Err(SuffixFault::NotNumeric(suffix));
    }
    let value: u32 = suffix
        .parse()
        .map_err(|_| SuffixFault::NotNumeric(suffix.clone()))?;
    if (1..=99).contains(&value) {
        Ok(value)
    } else {
        Err(SuffixFault::OutOfRange(value))
    }
}

fn suffix_message(side: &str, host: &str, fault: &SuffixFault) -> String {
    match fault {
        SuffixFault::TooShort => format!("{side} hostname '{host}' is too short for a numeric suffix"),
        SuffixFault::NotNumeric(suffix) => {
            format!("{side} hostname '{host}' ends in '{suffix}', not a number")
        }
        SuffixFault::OutOfRange(value) => {
            format!("{side} hostname '{host}' has suffix {value}, outside 1-99")
        }
    }
}

pub fn check_suffix(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::HostNameSuffix.outcome();
    let ignore = IgnoreSet::parse(&ctx.config.ignore.host_name_length);
    for record in ctx.records {
        if !from_ignored(&ignore, record)
            && let Err(fault) = host_suffix(&record.from.host_name)
        {
            outcome.error_for(
                record.cable_id,
                format!(
                    "cable {}: {}",
                    record.cable_id,
                    suffix_message("from", &record.from.host_name, &fault)
                ),
            );
        }
        if to_checked(&ignore, record)
            && let Err(fault) = host_suffix(&record.to.host_name)
        {
            outcome.error_for(
                record.cable_id,
                format!(
                    "cable {}: {}",
                    record.cable_id,
                    suffix_message("to", &record.to.host_name, &fault)
                ),
            );
        }
    }
    outcome
}

pub fn check_prefix(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::HostNamePrefix.outcome();
    let ignore = IgnoreSet::parse(&ctx.config.ignore.host_name_prefix);
    for record in ctx.records {
        if !from_ignored(&ignore, record) && !record.from.host_name.starts_with(ctx.prefix) {
            outcome.error_for(
                record.cable_id,
                format!(
                    "cable {}: from hostname '{}' does not start with '{}'",
                    record.cable_id, record.from.host_name, ctx.prefix
                ),
            );
        }
        if to_checked(&ignore, record) && !record.to.host_name.starts_with(ctx.prefix) {
            outcome.error_for(
                record.cable_id,
                format!(
                    "cable {}: to hostname '{}' does not start with '{}'",
                    record.cable_id, record.to.host_name, ctx.prefix
                ),
            );
        }
    }
    outcome
}

/// Each hostname, with the prefix stripped, must contain its device's
/// configured substring. A device with no table entry is a definition error.
pub fn check_device_host_name(ctx: &RuleContext<'_>) -> RuleOutcome {
    let mut outcome = RuleId::DeviceHostName.outcome();
    let table = DeviceHostTable::from_config(&ctx.config.device_host_names);
    let ignore = IgnoreSet::parse(&ctx.config.ignore.device_to_host_name);
    for record in ctx.records {
        if !from_ignored(&ignore, record)
            && let Some(message) =
                containment_fault(&table, ctx.prefix, &record.from.device_name, &record.from.host_name)
        {
            outcome.error_for(record.cable_id, format!("cable {}: from {message}", record.cable_id));
        }
        if to_checked(&ignore, record)
            && let Some(message) =
                containment_fault(&table, ctx.prefix, &record.to.device_name, &record.to.host_name)
        {
            outcome.error_for(record.cable_id, format!("cable {}: to {message}", record.cable_id));
        }
    }
    outcome
}

fn containment_fault(
    table: &DeviceHostTable,
    prefix: &str,
    device: &str,
    host: &str,
) -> Option<String> {
    let Some(substring) = table.substring(device) else {
        return Some(format!("device '{device}' has no hostname definition"));
    };
    let stripped = host.strip_prefix(prefix).unwrap_or(host);
    if stripped.contains(substring) {
        None
    } else {
        Some(format!(
            "hostname '{host}' does not contain '{substring}' for device '{device}'"
        ))
    }
}
