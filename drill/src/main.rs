mod cli;
mod commands;
mod input;

use clap::Parser;
use cli::Cli;
use commands::execute_command;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let text = input::read_source(cli.input.as_deref())?;
    let stdout = std::io::stdout();
    execute_command(cli.command, &text, &mut stdout.lock())
}
