//! cd - Change the session's current directory
//!
//! Supports:
//! - cd /abs/path
//! - cd rel/path (relative to the current directory)
//! - cd .. (parent; a no-op at the root)
//!
//! The cursor only moves when the resolved path names a stored directory.

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::path::{resolve, store_key};
use crate::fs::{EntryKind, PathError};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn usage(&self) -> &'static str {
        "cd <path>"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        let [target] = ctx.args else {
            return Err(self.usage_error());
        };

        let resolved = resolve(ctx.session.cwd.as_str(), target);
        if ctx.store.directory(store_key(&resolved)).is_none() {
            return Err(PathError::NotFound {
                target: target.clone(),
                expected: EntryKind::Directory,
            }
            .into());
        }

        tracing::debug!(from = %ctx.session.cwd, to = %resolved, "changing directory");
        ctx.session.cwd.set(resolved);
        Ok(String::new())
    }
}
