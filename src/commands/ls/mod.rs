// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn usage(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        if !ctx.args.is_empty() {
            tracing::debug!(args = ?ctx.args, "ls ignores its arguments");
        }

        let names = ctx.store.list_children(ctx.session.cwd.as_str());
        let mut stdout = String::new();
        for name in names {
            stdout.push_str(&name);
            stdout.push('\n');
        }
        Ok(stdout)
    }
}
