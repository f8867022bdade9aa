//! `urlstate <URL> diff` – keys that differ from their default, with both values.

use urlstate_core::{MemoryRouter, UrlState};

use super::display_value;

pub fn run_diff(state: &UrlState<MemoryRouter>) {
    let modified = state.modified_values();
    if modified.is_empty() {
        println!("No changes from defaults.");
        return;
    }
    println!("{:<16} {:<24} {}", "KEY", "DEFAULT", "CURRENT");
    for (key, value) in &modified {
        let default = state
            .defaults()
            .get(key)
            .map(display_value)
            .unwrap_or_else(|| "-".to_string());
        println!("{:<16} {:<24} {}", key, default, display_value(value));
    }
}
