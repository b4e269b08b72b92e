use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drill", about = "Classic algorithm exercises over stdin", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Read input from a file instead of stdin
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Binary search: reads n, n ascending integers, then the target
    Search {
        /// Fail instead of searching when the sequence is not ascending
        #[arg(long)]
        strict: bool,
    },
    /// Quicksort: reads n, then n integers
    Sort,
    /// Edge walk: reads n m s, then m edges `u v`
    Walk,
    /// UID registry: one `add X`, `remove X`, `exists X` or `list` per line
    Uids {
        /// Entity kind named in messages
        #[arg(long, default_value = "user")]
        kind: String,
    },
}
