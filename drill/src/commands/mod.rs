mod search;
mod sort;
mod uids;
mod walk;

use std::io::Write;

use crate::cli::Command;

pub fn execute_command<W: Write>(command: Command, text: &str, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Search { strict } => search::run(text, strict, out),
        Command::Sort => sort::run(text, out),
        Command::Walk => walk::run(text, out),
        Command::Uids { kind } => uids::run(text, &kind, out),
    }
}
