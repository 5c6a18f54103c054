//! vfs-console - A shell-like console over a flat virtual file system
//!
//! The file system is a table of `path,type,content` rows loaded into memory.
//! Commands (`ls`, `cd`, `cat`, `vfs-save`, `exit`) run against it through a
//! small interpreter that keeps the current directory in a per-session cursor.

pub mod commands;
pub mod console;
pub mod fs;
pub mod interpreter;
pub mod script;

pub use console::{Console, ConsoleOptions};
pub use fs::{EntryStore, VfsEntry};
pub use interpreter::{ExecResult, Interpreter, Session};
