use anyhow::Result;
use clap::Parser;
use spreadrank::cli::Cli;
use spreadrank::commands::score::{handle_score, resolve_config};
use spreadrank::setup::init_logging;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = resolve_config(cli)?;

    // The interactive prompt and the report both go to stdout
    handle_score(&config, io::stdin().lock(), io::stdout(), io::stdout())?;
    Ok(())
}
