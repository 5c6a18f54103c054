//! VFS Console
//!
//! Main entry point for the console environment.
//! Ties together the table loader, variable expansion and the interpreter.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::fs::{table, EntryStore, LoadError};
use crate::interpreter::expansion::{expand_env_vars, process_env};
use crate::interpreter::{ExecResult, Interpreter, Session};

/// Banner printed when a console starts.
pub const WELCOME: &str = "Welcome to the VFS console!\n";

/// Options for creating a console.
#[derive(Debug, Default)]
pub struct ConsoleOptions {
    /// Persisted table to load; a root-only store is used when absent
    pub vfs: Option<PathBuf>,
    /// Variables for `$NAME` expansion (defaults to the process environment)
    pub env: Option<HashMap<String, String>>,
}

/// One console session over a loaded file system.
pub struct Console {
    interpreter: Interpreter,
    session: Session,
    env: HashMap<String, String>,
}

impl Console {
    /// Create a console, loading the table named in `options`.
    pub fn new(options: ConsoleOptions) -> Result<Self, LoadError> {
        let store = match &options.vfs {
            Some(path) => table::load(path)?,
            None => {
                tracing::info!("no VFS table given, starting with an empty root");
                EntryStore::with_root()
            }
        };
        let env = options.env.unwrap_or_else(process_env);
        Ok(Self::with_store(store, env))
    }

    pub fn with_store(store: EntryStore, env: HashMap<String, String>) -> Self {
        Self {
            interpreter: Interpreter::new(store),
            session: Session::new(),
            env,
        }
    }

    /// Expand variables in `raw` and execute it.
    pub fn exec(&mut self, raw: &str) -> ExecResult {
        let expanded = expand_env_vars(raw, &self.env);
        self.interpreter.exec(&mut self.session, &expanded)
    }

    /// Expand and execute `raw`, returning all of its output.
    pub fn execute(&mut self, raw: &str) -> String {
        self.exec(raw).text()
    }

    /// Execute `raw` and format it as a transcript entry: the echoed command
    /// line followed by its output.
    pub fn transcript(&mut self, raw: &str) -> String {
        let output = self.execute(raw);
        format!("$ {}\n{}", raw, output)
    }

    pub fn cwd(&self) -> &str {
        self.session.cwd.as_str()
    }

    pub fn exit_requested(&self) -> bool {
        self.session.exit_requested
    }

    pub fn store(&self) -> &EntryStore {
        self.interpreter.store()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TABLE: &str = "path,type,content\n\
                         /,dir,\n\
                         /docs,dir,\n\
                         /docs/readme.md,file,IyBWRlMK\n\
                         /docs/guides,dir,\n";

    fn console_with_table(dir: &tempfile::TempDir) -> Console {
        let path = dir.path().join("vfs.csv");
        fs::write(&path, TABLE).unwrap();
        Console::new(ConsoleOptions {
            vfs: Some(path),
            env: Some(HashMap::from([("DOCS".to_string(), "/docs".to_string())])),
        })
        .unwrap()
    }

    #[test]
    fn test_console_without_table_has_root_only() {
        let mut console = Console::new(ConsoleOptions {
            env: Some(HashMap::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(console.store().len(), 1);
        assert_eq!(console.cwd(), "/");
        assert_eq!(console.execute("ls"), "");
    }

    #[test]
    fn test_console_load_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noroot.csv");
        fs::write(&path, "path,type,content\n/a,dir,\n").unwrap();
        let err = Console::new(ConsoleOptions {
            vfs: Some(path),
            env: Some(HashMap::new()),
        })
        .err()
        .unwrap();
        assert!(matches!(err, LoadError::MissingRoot));
    }

    #[test]
    fn test_console_expands_variables_before_interpreting() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_with_table(&dir);
        assert_eq!(console.execute("cd $DOCS"), "");
        assert_eq!(console.cwd(), "/docs/");
        assert_eq!(console.execute("ls"), "guides/\nreadme.md\n");
        assert_eq!(console.execute("cat readme.md"), "# VFS\n\n");
    }

    #[test]
    fn test_console_unknown_variable_reaches_interpreter_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_with_table(&dir);
        assert_eq!(
            console.execute("cd $NOWHERE"),
            "cd: directory not found: $NOWHERE\n"
        );
    }

    #[test]
    fn test_transcript_echoes_raw_command() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_with_table(&dir);
        assert_eq!(console.transcript("cd ${DOCS}"), "$ cd ${DOCS}\n");
        assert_eq!(
            console.transcript("frobnicate"),
            "$ frobnicate\nvfs: frobnicate: command not found\n"
        );
    }

    #[test]
    fn test_save_and_reload_through_console() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = console_with_table(&dir);
        let dest = dir.path().join("copy.csv");
        let out = console.execute(&format!("vfs-save {}", dest.display()));
        assert_eq!(out, format!("VFS saved to {}\n", dest.display()));

        let reloaded = Console::new(ConsoleOptions {
            vfs: Some(dest),
            env: Some(HashMap::new()),
        })
        .unwrap();
        assert_eq!(reloaded.store(), console.store());
    }

    #[test]
    fn test_exit_through_console() {
        let mut console = Console::with_store(EntryStore::with_root(), HashMap::new());
        assert!(!console.exit_requested());
        console.execute("exit");
        assert!(console.exit_requested());
    }
}
