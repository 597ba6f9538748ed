//! Command dispatch logic for rota

use std::time::Instant;

use crate::cli::Cli;
use rota_core::error::Result;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::{trace_command, trace_command_always};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    trace_command!(cli, start, "resolve_cwd");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
