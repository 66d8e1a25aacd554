use clap::Parser;
use std::process::ExitCode;
mod cli;
mod logging;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet)?;
    cli.execute()
}
