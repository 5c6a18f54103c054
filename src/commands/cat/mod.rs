// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::path::join_file_path;
use crate::fs::{EntryKind, PathError};
use crate::interpreter::CommandError;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn usage(&self) -> &'static str {
        "cat <file>"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let [file] = ctx.args else {
            return Err(self.usage_error());
        };

        let path = join_file_path(ctx.session.cwd.as_str(), file);
        let entry = ctx.store.file(&path).ok_or_else(|| PathError::NotFound {
            target: file.clone(),
            expected: EntryKind::File,
        })?;

        let mut text = entry.decode_text().map_err(|source| CommandError::Decode {
            target: file.clone(),
            source,
        })?;
        // The decoded text keeps its own line ending; one more newline is
        // always appended, matching the console's historical output.
        text.push('\n');
        Ok(text)
    }
}
