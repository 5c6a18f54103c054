//! exit - End the console session
//!
//! Marks the session so the host stops accepting commands.

use crate::commands::{Command, CommandContext, CommandResult};

pub const FAREWELL: &str = "Exiting...\n";

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn usage(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        ctx.session.exit_requested = true;
        Ok(FAREWELL.to_string())
    }
}
