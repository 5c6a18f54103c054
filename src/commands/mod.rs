// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod exit_cmd;
pub mod ls;
pub mod registry;
pub mod types;
pub mod vfs_save;

pub use registry::{create_console_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::fs::{EntryStore, VfsEntry};
    use crate::interpreter::Session;

    use super::{Command, CommandContext, CommandResult};

    /// `/`, `/a` (dir), `/a/b` (file), `/a/c` (dir), `/hello.txt` (file: "hello\n").
    pub fn sample_store() -> EntryStore {
        EntryStore::from_entries(vec![
            VfsEntry::directory("/"),
            VfsEntry::directory("/a"),
            VfsEntry::file("/a/b", b"bee\n"),
            VfsEntry::directory("/a/c"),
            VfsEntry::file("/hello.txt", b"hello\n"),
        ])
        .unwrap()
    }

    pub fn run(cmd: &dyn Command, store: &EntryStore, session: &mut Session, args: &[&str]) -> CommandResult {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut ctx = CommandContext { args: &args, store, session };
        cmd.execute(&mut ctx)
    }
}
