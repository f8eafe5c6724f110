//! Store Module
//!
//! Collection-level operations executed against the storage engine.
//!
//! ## Responsibilities
//! - Map collection names to engine tables
//! - Point insert/update/select/delete
//! - Inclusive range scans, boundary-extended scans, range deletes
//!
//! ## Transaction Model
//! Every operation runs in exactly one engine transaction:
//! - reads (`get`, scans, `count`) use a read transaction and see a snapshot
//! - writes (`put`, `put_many`, deletes) use a write transaction that is
//!   either committed before returning or dropped uncommitted on error
//!
//! ## Collection Policy
//! Writes create a missing collection. Reads, deletes, and scans never do;
//! they fail with `CollectionNotFound` instead.

mod collection;
mod scan;

use std::collections::BTreeMap;

use redb::{TableDefinition, TableHandle, WriteTransaction};

use crate::codec::Key;
use crate::error::{KvError, Result};

/// Largest encoded key accepted on write, in bytes
pub const MAX_KEY_SIZE: usize = 32768;

/// Decoded integer key → raw value bytes, in key order
pub type RangeResult = BTreeMap<i64, Vec<u8>>;

/// Encoded key and value bytes
pub type Entry = (Vec<u8>, Vec<u8>);

type Collection<'a> = TableDefinition<'a, &'static [u8], &'static [u8]>;

/// Operations over the collections of one open engine instance
///
/// Borrows the engine for the duration of a single call; holds no
/// transaction between calls.
pub(crate) struct CollectionStore<'db> {
    db: &'db redb::Database,
}

impl<'db> CollectionStore<'db> {
    pub(crate) fn new(db: &'db redb::Database) -> Self {
        Self { db }
    }
}

fn definition(name: &str) -> Collection<'_> {
    TableDefinition::new(name)
}

/// Check for a collection inside a write transaction without creating it
fn collection_exists(txn: &WriteTransaction, name: &str) -> Result<bool> {
    Ok(txn.list_tables()?.any(|table| table.name() == name))
}

/// Encode a key for writing, enforcing the engine's key constraints
fn encode_for_write(key: &Key) -> Result<Vec<u8>> {
    match key.encoded_len() {
        0 => Err(KvError::KeyRequired),
        len if len > MAX_KEY_SIZE => Err(KvError::KeyTooLarge {
            len,
            max: MAX_KEY_SIZE,
        }),
        _ => Ok(key.encode()),
    }
}
