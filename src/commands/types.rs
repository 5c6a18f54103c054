// src/commands/types.rs
use crate::fs::EntryStore;
use crate::interpreter::{CommandError, Session};

/// Output text of a successful command, or the error to report.
pub type CommandResult = Result<String, CommandError>;

/// Everything a command may touch while it runs.
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub store: &'a EntryStore,
    pub session: &'a mut Session,
}

/// A console command.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// One-line synopsis shown in usage errors.
    fn usage(&self) -> &'static str;

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult;

    /// Usage error for this command.
    fn usage_error(&self) -> CommandError {
        CommandError::Usage { usage: self.usage() }
    }
}
