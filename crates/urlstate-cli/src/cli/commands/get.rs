//! `urlstate <URL> get [KEY]` – print the typed state.

use anyhow::{bail, Result};
use urlstate_core::{MemoryRouter, UrlState};

use super::display_value;

pub fn run_get(state: &UrlState<MemoryRouter>, key: Option<&str>) -> Result<()> {
    if let Some(key) = key {
        match state.get(key) {
            Some(value) => println!("{}", display_value(&value)),
            None => bail!("no default configured for key `{key}`"),
        }
        return Ok(());
    }

    let current = state.state();
    if current.is_empty() {
        println!("No keys configured.");
        return Ok(());
    }
    let width = current.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in &current {
        println!("{:<width$} = {}", key, display_value(value));
    }
    Ok(())
}
