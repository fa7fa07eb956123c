//! `tappadgen` — XAML tap-pad markup generator

use clap::Parser;

use tappadgen::cli::args::Cli;
use tappadgen::cli::commands;
use tappadgen::error::ExitCode;
use tappadgen::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
