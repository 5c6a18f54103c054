//! File System Types
//!
//! Core types for the flat virtual file system: entries, their kinds, and the
//! errors raised while loading, saving, resolving and decoding them.

use std::fmt;
use std::io;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Table token for directories.
pub const DIR_TOKEN: &str = "dir";
/// Table token for files.
pub const FILE_TOKEN: &str = "file";

/// Errors raised while loading a persisted table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("VFS source not found: '{}'", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("VFS table is missing required column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("VFS table has no root directory entry '/'")]
    MissingRoot,

    #[error("duplicate path '{path}' at line {line}")]
    DuplicatePath { path: String, line: u64 },

    #[error("invalid path '{path}' at line {line}")]
    InvalidPath { path: String, line: u64 },

    #[error("malformed VFS table: {0}")]
    Malformed(#[from] csv::Error),
}

/// Errors raised while saving the store.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("cannot write '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised when a resolved path does not name an entry of the expected kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("{expected} not found: {target}")]
    NotFound { target: String, expected: EntryKind },
}

/// Errors raised while decoding a file payload.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("content is not valid UTF-8 text: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Kind of a VFS entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Map a table `type` cell to a kind. Only the exact `dir` token is a directory.
    pub fn from_token(token: &str) -> Self {
        if token == DIR_TOKEN {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    /// Token written to the `type` column.
    pub fn token(&self) -> &'static str {
        match self {
            EntryKind::Directory => DIR_TOKEN,
            EntryKind::File => FILE_TOKEN,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "directory"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// One row of the VFS table.
///
/// `content` holds the base64 text exactly as persisted; it is decoded only
/// when read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsEntry {
    pub path: String,
    pub kind: EntryKind,
    pub content: String,
}

impl VfsEntry {
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            content: String::new(),
        }
    }

    /// Build a file entry from raw bytes, encoding them as base64.
    pub fn file(path: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            content: STANDARD.encode(bytes),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Decode the stored payload to raw bytes. ASCII whitespace is ignored.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        let cleaned: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        Ok(STANDARD.decode(cleaned)?)
    }

    /// Decode the stored payload as UTF-8 text.
    pub fn decode_text(&self) -> Result<String, DecodeError> {
        Ok(String::from_utf8(self.decode_bytes()?)?)
    }
}

/// Check that `path` is `/` or `/segment(/segment)*` with no empty segments.
pub fn is_canonical_path(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    match path.strip_prefix('/') {
        Some(rest) => rest.split('/').all(|segment| !segment.is_empty()),
        None => false,
    }
}
