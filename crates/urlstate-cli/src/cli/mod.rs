//! CLI for urlstate.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlstate_core::{config, MemoryRouter, UrlState};

use commands::{run_diff, run_get, run_modified, run_reset, run_set};

/// Top-level CLI: seed an in-memory router from a URL and run one operation.
#[derive(Debug, Parser)]
#[command(name = "urlstate")]
#[command(about = "Read and rewrite typed state kept in a URL query string", long_about = None)]
pub struct Cli {
    /// Config file with defaults, exclusions and history mode
    /// (default: ~/.config/urlstate/config.toml).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Replace the current history entry instead of pushing a new one.
    #[arg(long, global = true)]
    pub replace: bool,

    /// Strip KEY from every written query (repeatable, adds to the config list).
    #[arg(long = "exclude", value_name = "KEY", global = true)]
    pub exclude: Vec<String>,

    /// Current location: an absolute URL or a path with query, e.g. "/search?q=rust".
    pub url: String,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the typed state (or one key of it).
    Get {
        /// Only print this key.
        key: Option<String>,
    },

    /// Write KEY=VALUE pairs and print the resulting location.
    /// Repeat a list key to write several elements.
    Set {
        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,
    },

    /// Reset to defaults, optionally overriding some, and print the resulting location.
    Reset {
        #[arg(value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },

    /// Report whether the state differs from the defaults.
    Modified,

    /// Print only the keys whose value differs from the default.
    Diff,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let router = if cli.url.starts_with('/') {
            MemoryRouter::new(&cli.url)?
        } else {
            MemoryRouter::from_url(&cli.url)?
        };

        let mut builder = UrlState::builder(router)
            .config(&cfg)?
            .exclude(cli.exclude.iter().cloned());
        if cli.replace {
            builder = builder.replace(true);
        }
        let mut state = builder.build()?;

        match cli.command {
            CliCommand::Get { key } => run_get(&state, key.as_deref())?,
            CliCommand::Set { assignments } => run_set(&mut state, &assignments)?,
            CliCommand::Reset { overrides } => run_reset(&mut state, &overrides)?,
            CliCommand::Modified => run_modified(&state),
            CliCommand::Diff => run_diff(&state),
        }

        Ok(())
    }
}
