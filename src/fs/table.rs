//! Persisted Table Format
//!
//! Loads and saves the entry store as a CSV table with the header
//! `path,type,content`. File content stays base64 text on both sides; it is
//! never decoded or re-encoded here.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::store::EntryStore;
use super::types::*;

/// Columns every table must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = ["path", "type", "content"];

#[derive(Debug, Deserialize, Serialize)]
struct EntryRecord {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    content: String,
}

impl From<EntryRecord> for VfsEntry {
    fn from(record: EntryRecord) -> Self {
        let kind = EntryKind::from_token(&record.kind);
        VfsEntry {
            path: record.path,
            kind,
            content: record.content,
        }
    }
}

impl From<&VfsEntry> for EntryRecord {
    fn from(entry: &VfsEntry) -> Self {
        EntryRecord {
            path: entry.path.clone(),
            kind: entry.kind.token().to_string(),
            content: entry.content.clone(),
        }
    }
}

/// Load a store from a table file.
pub fn load(path: impl AsRef<Path>) -> Result<EntryStore, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Malformed(e.into()),
    })?;
    let store = load_from_reader(file)?;
    tracing::info!(path = %path.display(), entries = store.len(), "loaded VFS table");
    Ok(store)
}

/// Load a store from any reader producing table text.
pub fn load_from_reader<R: Read>(reader: R) -> Result<EntryStore, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns { missing });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let entry: EntryRecord = record.deserialize(Some(&headers))?;
        rows.push((line, VfsEntry::from(entry)));
    }
    EntryStore::from_rows(rows)
}

/// Save a store to `destination`, replacing it atomically.
///
/// The table is written to a uniquely named temporary file in the
/// destination's directory and then persisted over the destination, so a
/// failed write leaves any previous file intact.
pub fn save(store: &EntryStore, destination: impl AsRef<Path>) -> Result<(), SaveError> {
    let destination = destination.as_ref();
    let write_failed = |source: io::Error| SaveError::WriteFailed {
        path: destination.to_path_buf(),
        source,
    };

    let parent = match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent).map_err(write_failed)?;
    write_to(store, tmp.as_file_mut()).map_err(write_failed)?;
    tmp.persist(destination).map_err(|e| write_failed(e.error))?;

    tracing::info!(path = %destination.display(), entries = store.len(), "saved VFS table");
    Ok(())
}

/// Write the table (header plus one row per entry, in store order) to `writer`.
pub fn write_to<W: Write>(store: &EntryStore, writer: W) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(REQUIRED_COLUMNS)?;
    for entry in store.iter() {
        wtr.serialize(EntryRecord::from(entry))?;
    }
    wtr.flush()
}
