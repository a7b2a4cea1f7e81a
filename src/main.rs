// Relver - release version manager
// Main CLI entry point

use clap::Parser;
use relver::cli::{Cli, CliDispatcher};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = CliDispatcher::execute(cli.command) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
