//! Database Module
//!
//! The handle that binds one database file to one open engine instance.
//!
//! ## Responsibilities
//! - Create or open the file with owner-only permissions
//! - Expose collection operations through the open engine
//! - Release the engine and its file lock on close
//! - Reject every operation on a closed handle

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{decode_value, encode_value, Key};
use crate::config::Config;
use crate::error::{KvError, Result};
use crate::store::{CollectionStore, Entry, RangeResult};

/// An open database file
///
/// ## Concurrency Model
///
/// - The engine slot sits behind an `RwLock`. Every operation holds the
///   read side for its duration; only `close` takes the write side, so
///   closing waits for in-flight operations and nothing runs after it.
/// - Inside the engine, read transactions run in parallel on snapshots and
///   write transactions are serialized without blocking readers.
/// - Each method is one transaction. Nothing is held across calls.
pub struct Database {
    /// Database configuration
    config: Config,

    /// Resolved file path (`{config.path}.db`)
    file_path: PathBuf,

    /// `None` once closed
    engine: RwLock<Option<redb::Database>>,
}

impl Database {
    /// Open or create the database described by `config`
    ///
    /// Fails with `OpenFailed` when the file cannot be created or opened,
    /// or when another handle already holds its lock.
    pub fn open(config: Config) -> Result<Self> {
        let file_path = config.db_file();

        let file = open_file(&file_path, config.file_mode)
            .map_err(|e| KvError::open_failed(&file_path, e))?;

        let mut builder = redb::Builder::new();
        if let Some(bytes) = config.cache_size {
            builder.set_cache_size(bytes);
        }
        let engine = builder
            .create_file(file)
            .map_err(|e| KvError::open_failed(&file_path, e))?;

        tracing::debug!("Opened database at {}", file_path.display());

        Ok(Self {
            config,
            file_path,
            engine: RwLock::new(Some(engine)),
        })
    }

    /// Open with a base name (convenience method)
    ///
    /// Uses default config; the file is `{name}.db`.
    pub fn open_path(name: impl Into<PathBuf>) -> Result<Self> {
        let config = Config::builder().path(name).build()?;
        Self::open(config)
    }

    /// Release the engine and the file lock
    ///
    /// Closing an already closed handle does nothing.
    pub fn close(&self) -> Result<()> {
        match self.engine.write().take() {
            Some(engine) => {
                drop(engine);
                tracing::debug!("Closed database at {}", self.file_path.display());
            }
            None => {
                tracing::debug!("Database at {} already closed", self.file_path.display());
            }
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.engine.read().is_none()
    }

    /// Run one store operation against the open engine
    fn with_store<T>(&self, op: impl FnOnce(CollectionStore<'_>) -> Result<T>) -> Result<T> {
        let guard = self.engine.read();
        let engine = guard.as_ref().ok_or(KvError::Closed)?;
        op(CollectionStore::new(engine))
    }

    // =========================================================================
    // Point Operations
    // =========================================================================

    /// Insert or overwrite a key, creating the collection if it is missing
    pub fn put(&self, collection: &str, key: impl Into<Key>, value: &[u8]) -> Result<()> {
        let key = key.into();
        self.with_store(|store| store.put(collection, &key, value))
    }

    /// Same as `put`; the last write wins
    pub fn update(&self, collection: &str, key: impl Into<Key>, value: &[u8]) -> Result<()> {
        self.put(collection, key, value)
    }

    /// Write all entries atomically: either every entry persists or none does
    pub fn put_many(&self, collection: &str, entries: &[(Key, Vec<u8>)]) -> Result<()> {
        self.with_store(|store| store.put_many(collection, entries))
    }

    /// Fetch a value
    ///
    /// Fails with `CollectionNotFound` or `KeyNotFound`; `KvError::is_not_found`
    /// covers both.
    pub fn get(&self, collection: &str, key: impl Into<Key>) -> Result<Vec<u8>> {
        let key = key.into();
        self.with_store(|store| store.get(collection, &key))
    }

    /// Delete a key; deleting a missing key fails with `KeyNotFound`
    pub fn delete(&self, collection: &str, key: impl Into<Key>) -> Result<()> {
        let key = key.into();
        self.with_store(|store| store.delete_key(collection, &key))
    }

    // =========================================================================
    // Range Operations
    // =========================================================================

    /// All entries with `start <= key <= end`, keyed by decoded integer
    ///
    /// Every key in the window must be an integer key (4 or 8 bytes);
    /// see `codec::decode_int`.
    pub fn scan_range(
        &self,
        collection: &str,
        start: impl Into<Key>,
        end: impl Into<Key>,
    ) -> Result<RangeResult> {
        let (start, end) = (start.into(), end.into());
        self.with_store(|store| store.scan_range(collection, &start, &end))
    }

    /// `scan_range` plus the nearest entry below `start` and above `end`
    pub fn scan_range_extended(
        &self,
        collection: &str,
        start: impl Into<Key>,
        end: impl Into<Key>,
    ) -> Result<RangeResult> {
        let (start, end) = (start.into(), end.into());
        self.with_store(|store| store.scan_range_extended(collection, &start, &end))
    }

    /// Encoded entries with `start <= key <= end`, in key order
    ///
    /// For collections keyed by text or bytes.
    pub fn scan_range_entries(
        &self,
        collection: &str,
        start: impl Into<Key>,
        end: impl Into<Key>,
    ) -> Result<Vec<Entry>> {
        let (start, end) = (start.into(), end.into());
        self.with_store(|store| store.scan_range_entries(collection, &start, &end))
    }

    /// Encoded counterpart of `scan_range_extended`, in key order
    pub fn scan_range_extended_entries(
        &self,
        collection: &str,
        start: impl Into<Key>,
        end: impl Into<Key>,
    ) -> Result<Vec<Entry>> {
        let (start, end) = (start.into(), end.into());
        self.with_store(|store| store.scan_range_extended_entries(collection, &start, &end))
    }

    /// Delete every key in `[start, end]`; returns the number removed
    pub fn delete_range(
        &self,
        collection: &str,
        start: impl Into<Key>,
        end: impl Into<Key>,
    ) -> Result<usize> {
        let (start, end) = (start.into(), end.into());
        self.with_store(|store| store.delete_range(collection, &start, &end))
    }

    // =========================================================================
    // Collections
    // =========================================================================

    /// Number of entries in a collection
    pub fn count(&self, collection: &str) -> Result<u64> {
        self.with_store(|store| store.count(collection))
    }

    pub fn collections(&self) -> Result<Vec<String>> {
        self.with_store(|store| store.collections())
    }

    pub fn drop_collection(&self, collection: &str) -> Result<()> {
        self.with_store(|store| store.drop_collection(collection))
    }

    // =========================================================================
    // Typed Values
    // =========================================================================

    /// Store a serde value (bincode encoded)
    pub fn put_typed<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        key: impl Into<Key>,
        value: &T,
    ) -> Result<()> {
        let bytes = encode_value(value)?;
        self.put(collection, key, &bytes)
    }

    /// Fetch a value written by `put_typed`
    pub fn get_typed<T: DeserializeOwned>(
        &self,
        collection: &str,
        key: impl Into<Key>,
    ) -> Result<T> {
        let bytes = self.get(collection, key)?;
        decode_value(&bytes)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Open read/write, creating the file with `mode` if it does not exist
fn open_file(path: &Path, mode: u32) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(false);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    options.open(path)
}
