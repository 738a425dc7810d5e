use anyhow::Result;
use clap::Parser;
use console::Term;
use tracing::Level;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let mut out = Term::stdout();
    cli.run(&mut out)
}
