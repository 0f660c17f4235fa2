//! microtopo CLI - microscope device topology checker
//!
//! Usage: microtopo <COMMAND> <FILE>
//!
//! Commands:
//!   parse    List the components of a topology file
//!   check    Validate a topology file
//!   order    Print the instantiation order
//!   affects  Print the metadata plan of the affects edges
//!   roles    List components by role

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};
use commands::GlobalOptions;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let opts = GlobalOptions {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
        config: cli.config,
    };
    let command = cli.command.name();

    let result = match &cli.command {
        Commands::Parse { file } => commands::cmd_parse(file, &opts),
        Commands::Check {
            file,
            strict_warnings,
        } => commands::cmd_check(file, *strict_warnings, &opts),
        Commands::Order { file } => commands::cmd_order(file, &opts),
        Commands::Affects { file } => commands::cmd_affects(file, &opts),
        Commands::Roles { file, role } => commands::cmd_roles(file, role.as_deref(), &opts),
    };

    match result {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::FAILURE),
        Err(err) if opts.json => {
            tracing::debug!(error = %err, "command failed");
            let mut out = std::io::stdout().lock();
            ui::json::write_event(&mut out, &commands::error_event(command, &err))?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err),
    }
}
