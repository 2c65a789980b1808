//! Choosy CLI - grouped, searchable select widget for the terminal
//!
//! Usage: choosy <COMMAND>
//!
//! Commands:
//!   parse   Show how a select control is read
//!   filter  Rank a control's choices against a search query
//!   pick    Pick interactively and write the selection back

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    let loaded = choosy::config::load(cli.config.as_deref(), &cwd)?;
    for warning in &loaded.warnings {
        eprintln!("warning: {warning}");
    }
    let config = loaded.config;

    match cli.command {
        Commands::Parse { control } => commands::cmd_parse(&control, cli.json),
        Commands::Filter { control, query } => commands::cmd_filter(&control, &query, cli.json),
        Commands::Pick {
            control,
            entries,
            selection_type,
            keys,
            write,
            stream,
        } => commands::cmd_pick(
            &commands::PickOptions {
                control,
                entries,
                selection_type,
                keys,
                write,
                stream,
            },
            &config,
            cli.ascii,
            cli.json,
        ),
    }
}

/// Log to stderr; `CHOOSY_LOG` overrides the level picked by `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("CHOOSY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("choosy={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
