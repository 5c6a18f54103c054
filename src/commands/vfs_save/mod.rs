// src/commands/vfs_save/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::table;

pub struct VfsSaveCommand;

impl Command for VfsSaveCommand {
    fn name(&self) -> &'static str {
        "vfs-save"
    }

    fn usage(&self) -> &'static str {
        "vfs-save <path>"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let [destination] = ctx.args else {
            return Err(self.usage_error());
        };

        table::save(ctx.store, destination)?;
        Ok(format!("VFS saved to {}\n", destination))
    }
}
