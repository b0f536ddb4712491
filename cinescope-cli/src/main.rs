// cinescope-cli/src/main.rs
//
// Entry point for the Cinescope command-line tool.
//
// Parses arguments, initializes logging, dispatches to the selected
// subcommand and maps failures to a red error line and exit status 1.

use cinescope::logging::init_logging;
use cinescope::{Cli, Commands, run_analyze, run_render};
use cinescope_core::terminal;

use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    let (command_name, log_dir) = match &cli.command {
        Commands::Analyze(args) => ("analyze", args.log_dir.as_deref()),
        Commands::Render(args) => ("render", args.log_dir.as_deref()),
    };

    match init_logging(cli.verbose, log_dir, command_name) {
        Ok(Some(log_file)) => log::debug!("Logging to {}", log_file.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    let result = match &cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Render(args) => run_render(args),
    };

    if let Err(e) = result {
        terminal::print_error(&e.to_string());
        process::exit(1);
    }
}
