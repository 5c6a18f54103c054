//! Command Errors
//!
//! Every failure a command can report. None of them end the session: the
//! interpreter renders each one as a single line of output and waits for the
//! next command.

use thiserror::Error;

use crate::fs::{DecodeError, PathError, SaveError};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("usage: {usage}")]
    Usage { usage: &'static str },

    #[error("{name}: command not found")]
    UnknownCommand { name: String },

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("{target}: cannot decode content: {source}")]
    Decode {
        target: String,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    WriteFailure(#[from] SaveError),
}

impl CommandError {
    /// Render as one newline-terminated line attributed to `command`.
    pub fn render(&self, command: &str) -> String {
        match self {
            CommandError::UnknownCommand { .. } => format!("vfs: {}\n", self),
            _ => format!("{}: {}\n", command, self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::EntryKind;

    #[test]
    fn test_render_usage() {
        let err = CommandError::Usage { usage: "cd <path>" };
        assert_eq!(err.render("cd"), "cd: usage: cd <path>\n");
    }

    #[test]
    fn test_render_unknown_command() {
        let err = CommandError::UnknownCommand { name: "frobnicate".to_string() };
        assert_eq!(err.render("frobnicate"), "vfs: frobnicate: command not found\n");
    }

    #[test]
    fn test_render_path_error() {
        let err: CommandError = PathError::NotFound {
            target: "notes.txt".to_string(),
            expected: EntryKind::File,
        }
        .into();
        assert_eq!(err.render("cat"), "cat: file not found: notes.txt\n");
    }
}
