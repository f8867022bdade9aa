//! `urlstate <URL> set KEY=VALUE...` – write keys and print the new location.

use anyhow::Result;
use urlstate_core::{MemoryRouter, UrlState};

use super::parse_assignments;

pub fn run_set(state: &mut UrlState<MemoryRouter>, assignments: &[String]) -> Result<()> {
    let values = parse_assignments(state.defaults(), assignments)?;
    for (key, _) in &values {
        if !state.defaults().contains_key(key) {
            tracing::warn!(key = %key, "no default configured; key ignored");
        }
    }
    state.set_many(values)?;
    println!("{}", state.router().current_href());
    Ok(())
}
