//! Entry Store
//!
//! The flat, ordered collection of VFS entries. There are no parent links:
//! directory listings are computed by prefix matching on paths.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::types::*;

/// In-memory flat file system, keyed by canonical path in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStore {
    entries: IndexMap<String, VfsEntry>,
}

impl EntryStore {
    /// Create a store holding only the root directory.
    pub fn with_root() -> Self {
        let mut entries = IndexMap::new();
        entries.insert("/".to_string(), VfsEntry::directory("/"));
        Self { entries }
    }

    /// Build a store from entries numbered by position (1-based).
    pub fn from_entries(entries: impl IntoIterator<Item = VfsEntry>) -> Result<Self, LoadError> {
        Self::from_rows(
            entries
                .into_iter()
                .enumerate()
                .map(|(i, entry)| (i as u64 + 1, entry)),
        )
    }

    /// Build a store from `(line, entry)` rows, enforcing path shape,
    /// uniqueness and the presence of a root directory.
    pub fn from_rows(rows: impl IntoIterator<Item = (u64, VfsEntry)>) -> Result<Self, LoadError> {
        let rows: Vec<(u64, VfsEntry)> = rows.into_iter().collect();
        // A missing root outranks any per-row problem.
        if !rows.iter().any(|(_, e)| e.path == "/" && e.is_directory()) {
            return Err(LoadError::MissingRoot);
        }

        let mut entries = IndexMap::new();
        for (line, entry) in rows {
            if !is_canonical_path(&entry.path) {
                return Err(LoadError::InvalidPath { path: entry.path, line });
            }
            if entries.contains_key(&entry.path) {
                return Err(LoadError::DuplicatePath { path: entry.path, line });
            }
            entries.insert(entry.path.clone(), entry);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, path: &str) -> Option<&VfsEntry> {
        self.entries.get(path)
    }

    /// Look up a directory entry by store key.
    pub fn directory(&self, path: &str) -> Option<&VfsEntry> {
        self.get(path).filter(|e| e.is_directory())
    }

    /// Look up a file entry by full path.
    pub fn file(&self, path: &str) -> Option<&VfsEntry> {
        self.get(path).filter(|e| e.is_file())
    }

    /// Entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &VfsEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the immediate children of `dir` (root, or a path ending in `/`),
    /// sorted and deduplicated. Directories carry a trailing `/`; a deeper
    /// stored path contributes its first remaining segment as a directory.
    pub fn list_children(&self, dir: &str) -> Vec<String> {
        let prefix = if dir.ends_with('/') {
            dir.to_string()
        } else {
            format!("{}/", dir)
        };

        let mut names = BTreeSet::new();
        for entry in self.entries.values() {
            let rest = match entry.path.strip_prefix(&prefix) {
                Some(rest) if !rest.is_empty() => rest,
                _ => continue,
            };
            let name = match rest.split_once('/') {
                Some((first, _)) => format!("{}/", first),
                None if entry.is_directory() => format!("{}/", rest),
                None => rest.to_string(),
            };
            names.insert(name);
        }
        names.into_iter().collect()
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::with_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> EntryStore {
        EntryStore::from_entries(vec![
            VfsEntry::directory("/"),
            VfsEntry::directory("/a"),
            VfsEntry::file("/a/b", b"bee"),
            VfsEntry::directory("/a/c"),
            VfsEntry::file("/a/c/deep.txt", b"deep"),
            VfsEntry::file("/top.txt", b"top"),
        ])
        .unwrap()
    }

    #[test]
    fn test_with_root() {
        let store = EntryStore::with_root();
        assert_eq!(store.len(), 1);
        assert!(store.directory("/").is_some());
    }

    #[test]
    fn test_missing_root_rejected() {
        let err = EntryStore::from_entries(vec![VfsEntry::directory("/a")]).unwrap_err();
        assert!(matches!(err, LoadError::MissingRoot));

        // a root that is a file does not count
        let err = EntryStore::from_entries(vec![VfsEntry::file("/", b"")]).unwrap_err();
        assert!(matches!(err, LoadError::MissingRoot));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = EntryStore::from_entries(vec![
            VfsEntry::directory("/"),
            VfsEntry::directory("/a"),
            VfsEntry::file("/a", b"x"),
        ])
        .unwrap_err();
        match err {
            LoadError::DuplicatePath { path, line } => {
                assert_eq!(path, "/a");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_path_rejected() {
        let err = EntryStore::from_entries(vec![
            VfsEntry::directory("/"),
            VfsEntry::directory("/a/"),
        ])
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidPath { .. }));
    }

    #[test]
    fn test_lookup_by_kind() {
        let store = sample_store();
        assert!(store.directory("/a").is_some());
        assert!(store.file("/a").is_none());
        assert!(store.file("/a/b").is_some());
        assert!(store.directory("/a/b").is_none());
        assert!(store.get("/missing").is_none());
    }

    #[test]
    fn test_list_children_depth_one() {
        let store = sample_store();
        assert_eq!(store.list_children("/a/"), vec!["b", "c/"]);
        assert_eq!(store.list_children("/"), vec!["a/", "top.txt"]);
        assert_eq!(store.list_children("/a/c/"), vec!["deep.txt"]);
    }

    #[test]
    fn test_list_children_empty_directory() {
        let store = EntryStore::from_entries(vec![
            VfsEntry::directory("/"),
            VfsEntry::directory("/empty"),
        ])
        .unwrap();
        assert!(store.list_children("/empty/").is_empty());
    }

    #[test]
    fn test_list_children_infers_orphan_directories() {
        let store = EntryStore::from_entries(vec![
            VfsEntry::directory("/"),
            VfsEntry::file("/x/y/z.txt", b"z"),
            VfsEntry::file("/x/y/w.txt", b"w"),
        ])
        .unwrap();
        assert_eq!(store.list_children("/"), vec!["x/"]);
        assert_eq!(store.list_children("/x/"), vec!["y/"]);
        assert_eq!(store.list_children("/x/y/"), vec!["w.txt", "z.txt"]);
    }

    #[test]
    fn test_list_children_ignores_sibling_prefixes() {
        let store = EntryStore::from_entries(vec![
            VfsEntry::directory("/"),
            VfsEntry::directory("/a"),
            VfsEntry::file("/ab", b""),
            VfsEntry::file("/a/in", b""),
        ])
        .unwrap();
        assert_eq!(store.list_children("/a/"), vec!["in"]);
    }
}
