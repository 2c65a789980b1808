use std::path::PathBuf;

use choosy::SelectionType;
use clap::{Parser, Subcommand};

/// Choosy - grouped, searchable select widget for the terminal
#[derive(Parser, Debug)]
#[command(name = "choosy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./.choosy.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use ASCII icons only
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how a select control is read
    Parse {
        /// Select control description (.toml or .json)
        control: PathBuf,
    },

    /// Rank a control's choices against a search query
    Filter {
        /// Select control description (.toml or .json)
        control: PathBuf,

        /// Search query
        query: String,
    },

    /// Pick interactively and write the selection back
    Pick {
        /// Select control description (.toml or .json)
        control: PathBuf,

        /// JSON file with choices and groups replacing the control's options
        #[arg(long)]
        entries: Option<PathBuf>,

        /// Selection type override (single, multiple, tags)
        #[arg(long = "type", value_parser = parse_selection_type)]
        selection_type: Option<SelectionType>,

        /// Comma separated key script instead of the terminal (e.g. "down,space,enter")
        #[arg(long)]
        keys: Option<String>,

        /// Save the updated control back to its file
        #[arg(long)]
        write: bool,

        /// Print every selection change as a JSON line while picking
        #[arg(long)]
        stream: bool,
    },
}

fn parse_selection_type(s: &str) -> Result<SelectionType, String> {
    SelectionType::from_str_loose(s)
        .ok_or_else(|| format!("unknown selection type '{s}' (expected single, multiple or tags)"))
}
