//! `urlstate <URL> reset [KEY=VALUE...]` – restore defaults and print the new location.

use anyhow::Result;
use urlstate_core::{MemoryRouter, UrlState};

use super::parse_assignments;

pub fn run_reset(state: &mut UrlState<MemoryRouter>, overrides: &[String]) -> Result<()> {
    let overrides = parse_assignments(state.defaults(), overrides)?;
    state.reset_with(overrides)?;
    println!("{}", state.router().current_href());
    Ok(())
}
