//! Interpreter Types
//!
//! Per-session state threaded through every interpreter call, and the
//! result of executing one command line.

/// Current directory of a session.
///
/// Always `/` or an absolute path ending in exactly one `/`. It only changes
/// through a successful `cd`, which validates the target first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCursor(String);

impl SessionCursor {
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Move the cursor. Callers must pass a resolved path that names an
    /// existing directory.
    pub(crate) fn set(&mut self, dir: String) {
        self.0 = dir;
    }
}

impl Default for SessionCursor {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for SessionCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mutable state of one interactive session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Current working directory.
    pub cwd: SessionCursor,
    /// Set by `exit`; the host stops reading commands once it is true.
    pub exit_requested: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecResult {
    pub fn new(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }

    /// Success result with no output
    pub fn ok() -> Self {
        Self::new(String::new(), String::new(), 0)
    }

    pub fn success(stdout: impl Into<String>) -> Self {
        Self::new(stdout.into(), String::new(), 0)
    }

    /// Failure result with stderr message
    pub fn failure(stderr: impl Into<String>) -> Self {
        Self::new(String::new(), stderr.into(), 1)
    }

    /// Everything the command printed, errors after regular output.
    pub fn text(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}
