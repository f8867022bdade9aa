//! CLI command handlers, one per file.

mod diff;
mod get;
mod modified;
mod reset;
mod set;

pub use diff::run_diff;
pub use get::run_get;
pub use modified::run_modified;
pub use reset::run_reset;
pub use set::run_set;

use anyhow::{Context, Result};
use urlstate_core::value::parse_scalar;
use urlstate_core::{DefaultMap, StateValue, ValueKind};

/// Turn `KEY=VALUE` arguments into typed values using each key's default kind.
///
/// List keys collect every repetition (an empty value contributes nothing);
/// for scalar keys the last repetition wins. Keys without a default are kept
/// as strings and left for the synchronizer to drop.
pub(crate) fn parse_assignments(
    defaults: &DefaultMap,
    args: &[String],
) -> Result<Vec<(String, StateValue)>> {
    let mut out: Vec<(String, StateValue)> = Vec::new();
    for arg in args {
        let (key, raw) = arg
            .split_once('=')
            .with_context(|| format!("expected KEY=VALUE, got `{arg}`"))?;
        let kind = defaults.kind_of(key).unwrap_or(ValueKind::Str);
        let value = match kind {
            ValueKind::List if raw.is_empty() => StateValue::List(Vec::new()),
            kind => parse_scalar(raw, kind),
        };

        match out.iter_mut().find(|(k, _)| k == key) {
            Some((_, StateValue::List(items))) => {
                if !raw.is_empty() {
                    items.push(raw.to_string());
                }
            }
            Some((_, slot)) => *slot = value,
            None => out.push((key.to_string(), value)),
        }
    }
    Ok(out)
}

/// Human-readable form of a value for terminal output.
pub(crate) fn display_value(value: &StateValue) -> String {
    match value {
        StateValue::Str(s) => format!("{s:?}"),
        StateValue::List(items) => format!("{items:?}"),
        scalar => scalar.to_query_value(),
    }
}
