//! Interpreter - Command Line Execution
//!
//! Tokenizes an already-expanded command line, dispatches it through the
//! command registry and renders failures as text. The entry store is shared
//! read-only; all per-session state lives in the `Session` passed to each call.

use crate::commands::{create_console_registry, CommandContext, CommandRegistry};
use crate::fs::EntryStore;
use crate::interpreter::errors::CommandError;
use crate::interpreter::types::{ExecResult, Session};

pub struct Interpreter {
    store: EntryStore,
    registry: CommandRegistry,
}

impl Interpreter {
    /// Interpreter over `store` with the console command set.
    pub fn new(store: EntryStore) -> Self {
        Self {
            store,
            registry: create_console_registry(),
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Execute one command line. Never fails: errors become stderr text.
    pub fn exec(&self, session: &mut Session, command_line: &str) -> ExecResult {
        let tokens: Vec<String> = command_line.split_whitespace().map(String::from).collect();
        let Some((name, args)) = tokens.split_first() else {
            return ExecResult::ok();
        };

        let Some(command) = self.registry.get(name) else {
            tracing::debug!(command = %name, "unknown command");
            let err = CommandError::UnknownCommand { name: name.clone() };
            return ExecResult::failure(err.render(name));
        };

        tracing::debug!(command = %name, ?args, cwd = %session.cwd, "dispatching");
        let mut ctx = CommandContext {
            args,
            store: &self.store,
            session,
        };
        match command.execute(&mut ctx) {
            Ok(stdout) => ExecResult::success(stdout),
            Err(err) => ExecResult::failure(err.render(name)),
        }
    }

    /// Execute one command line and return everything it printed.
    pub fn execute(&self, session: &mut Session, command_line: &str) -> String {
        self.exec(session, command_line).text()
    }
}
