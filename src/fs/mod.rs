//! File System Module
//!
//! Flat virtual file system backed by a persisted table:
//! - EntryStore: ordered, path-keyed entries with prefix-based listing
//! - table: CSV loader/serializer for the `path,type,content` format
//! - path: resolution of `..`, absolute and relative targets

pub mod path;
pub mod store;
pub mod table;
pub mod types;

pub use store::EntryStore;
pub use types::*;
