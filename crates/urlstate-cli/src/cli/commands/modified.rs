//! `urlstate <URL> modified`

use urlstate_core::{MemoryRouter, UrlState};

pub fn run_modified(state: &UrlState<MemoryRouter>) {
    if state.is_modified() {
        println!("modified");
    } else {
        println!("unchanged");
    }
}
