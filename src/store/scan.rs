//! Range scans
//!
//! All range operations walk the engine's native key order. Bounds are
//! compared as encoded bytes and are inclusive on both ends.
//!
//! ## Boundary extension
//! ```text
//!   keys:      3     5   [ 6     7 ]   8     9
//!                    ▲     └─────┘     ▲
//!              predecessor  range   successor
//! ```
//! The predecessor is the last key below `start`, the successor the first
//! key above `end`. Both are located by seeking from the bounds, so they are
//! defined even when no key falls inside the window.

use std::ops::Bound;

use redb::ReadableTable;

use crate::codec::{decode_int, Key};
use crate::error::{KvError, Result};

use super::{collection_exists, definition, CollectionStore, Entry, RangeResult};

impl CollectionStore<'_> {
    /// Entries with `start <= key <= end`, keys decoded as integers
    pub(crate) fn scan_range(
        &self,
        collection: &str,
        start: &Key,
        end: &Key,
    ) -> Result<RangeResult> {
        decode_entries(self.scan_range_entries(collection, start, end)?)
    }

    /// Entries with `start <= key <= end`, keys left encoded
    pub(crate) fn scan_range_entries(
        &self,
        collection: &str,
        start: &Key,
        end: &Key,
    ) -> Result<Vec<Entry>> {
        let (start, end) = (start.encode(), end.encode());

        let txn = self.db.begin_read()?;
        let table = txn.open_table(definition(collection))?;
        let entries = collect_range(&table, &start, &end)?;

        tracing::trace!("scan {}: {} entries", collection, entries.len());
        Ok(entries)
    }

    /// `scan_range` plus the nearest entry on each side of the window
    pub(crate) fn scan_range_extended(
        &self,
        collection: &str,
        start: &Key,
        end: &Key,
    ) -> Result<RangeResult> {
        decode_entries(self.scan_range_extended_entries(collection, start, end)?)
    }

    /// `scan_range_entries` plus the nearest entry on each side of the window
    ///
    /// An inverted window (`start > end`) has no edges and yields nothing.
    pub(crate) fn scan_range_extended_entries(
        &self,
        collection: &str,
        start: &Key,
        end: &Key,
    ) -> Result<Vec<Entry>> {
        let (start, end) = (start.encode(), end.encode());

        let txn = self.db.begin_read()?;
        let table = txn.open_table(definition(collection))?;
        if start > end {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        if let Some(before) = predecessor(&table, &start)? {
            entries.push(before);
        }
        entries.extend(collect_range(&table, &start, &end)?);
        if let Some(after) = successor(&table, &end)? {
            entries.push(after);
        }

        tracing::trace!("extended scan {}: {} entries", collection, entries.len());
        Ok(entries)
    }

    /// Delete every key in `[start, end]`, returning how many were removed
    pub(crate) fn delete_range(
        &self,
        collection: &str,
        start: &Key,
        end: &Key,
    ) -> Result<usize> {
        let (start, end) = (start.encode(), end.encode());

        let txn = self.db.begin_write()?;
        if !collection_exists(&txn, collection)? {
            return Err(KvError::CollectionNotFound(collection.to_string()));
        }
        let deleted = {
            let mut table = txn.open_table(definition(collection))?;
            let keys = collect_keys(&table, &start, &end)?;
            for key in &keys {
                table.remove(key.as_slice())?;
            }
            keys.len()
        };
        txn.commit()?;

        tracing::trace!("delete_range {}: {} entries", collection, deleted);
        Ok(deleted)
    }
}

// =============================================================================
// Traversal Helpers
// =============================================================================

fn collect_range<T>(table: &T, start: &[u8], end: &[u8]) -> Result<Vec<Entry>>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    let mut entries = Vec::new();
    if start > end {
        return Ok(entries);
    }
    for item in table.range::<&[u8]>(start..=end)? {
        let (key, value) = item?;
        entries.push((key.value().to_vec(), value.value().to_vec()));
    }
    Ok(entries)
}

fn collect_keys<T>(table: &T, start: &[u8], end: &[u8]) -> Result<Vec<Vec<u8>>>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    let mut keys = Vec::new();
    if start > end {
        return Ok(keys);
    }
    for item in table.range::<&[u8]>(start..=end)? {
        let (key, _) = item?;
        keys.push(key.value().to_vec());
    }
    Ok(keys)
}

/// Last entry strictly below `start`
fn predecessor<T>(table: &T, start: &[u8]) -> Result<Option<Entry>>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    match table.range::<&[u8]>(..start)?.next_back() {
        Some(item) => {
            let (key, value) = item?;
            Ok(Some((key.value().to_vec(), value.value().to_vec())))
        }
        None => Ok(None),
    }
}

/// First entry strictly above `end`
fn successor<T>(table: &T, end: &[u8]) -> Result<Option<Entry>>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    let bounds: (Bound<&[u8]>, Bound<&[u8]>) = (Bound::Excluded(end), Bound::Unbounded);
    match table.range::<&[u8]>(bounds)?.next() {
        Some(item) => {
            let (key, value) = item?;
            Ok(Some((key.value().to_vec(), value.value().to_vec())))
        }
        None => Ok(None),
    }
}

fn decode_entries(entries: Vec<Entry>) -> Result<RangeResult> {
    entries
        .into_iter()
        .map(|(key, value)| decode_int(&key).map(|key| (key, value)))
        .collect()
}
