//! Command-line interface

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(name = "ogn", version, about = "Observer Geospatial Notebooks demo helper")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root; all relative paths resolve against it
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
