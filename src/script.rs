//! Startup Scripts
//!
//! A startup script is a UTF-8 file with one command per line. Blank lines
//! and `#` comments are skipped. Replay is paced with a delay before each
//! command but stays strictly in file order.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::console::Console;

/// Default pause before each replayed command.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("startup script not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read startup script '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Extract the commands of a script: trimmed, without blanks or comments.
pub fn parse_script(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Read and parse a script file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<String>, ScriptError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ScriptError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ScriptError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let commands = parse_script(&text);
    tracing::info!(path = %path.display(), commands = commands.len(), "loaded startup script");
    Ok(commands)
}

/// Replay `commands` on `console`, handing each transcript entry to `sink`.
///
/// Each command waits `delay` before it runs and completes before the next
/// one starts. Replay stops after a command requests exit. Returns the number
/// of commands executed.
pub async fn replay<F>(console: &mut Console, commands: &[String], delay: Duration, mut sink: F) -> usize
where
    F: FnMut(&str),
{
    let mut executed = 0;
    for command in commands {
        if console.exit_requested() {
            break;
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        sink(&console.transcript(command));
        executed += 1;
    }
    executed
}
