//! Point operations and collection management

use redb::{ReadableTableMetadata, TableHandle};

use crate::codec::Key;
use crate::error::{KvError, Result};

use super::{collection_exists, definition, encode_for_write, CollectionStore};

impl CollectionStore<'_> {
    /// Insert or overwrite a single entry, creating the collection if needed
    pub(crate) fn put(&self, collection: &str, key: &Key, value: &[u8]) -> Result<()> {
        let encoded = encode_for_write(key).inspect_err(|e| {
            tracing::warn!("Rejected write to {}: {}", collection, e);
        })?;

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(definition(collection))?;
            table.insert(encoded.as_slice(), value)?;
        }
        txn.commit()?;

        tracing::trace!(
            "put {}: key_len={} value_len={}",
            collection,
            encoded.len(),
            value.len()
        );
        Ok(())
    }

    /// Write every entry in one transaction; nothing persists unless all succeed
    ///
    /// A key repeated in `entries` ends up with its last value. An empty batch
    /// is a no-op.
    pub(crate) fn put_many(&self, collection: &str, entries: &[(Key, Vec<u8>)]) -> Result<()> {
        // An empty batch must not create the collection
        if entries.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(definition(collection))?;
            for (key, value) in entries {
                // Returning early drops `txn` uncommitted, discarding the batch
                let encoded = encode_for_write(key).inspect_err(|e| {
                    tracing::warn!(
                        "Rejected batch of {} entries to {}: {}",
                        entries.len(),
                        collection,
                        e
                    );
                })?;
                table.insert(encoded.as_slice(), value.as_slice())?;
            }
        }
        txn.commit()?;

        tracing::trace!("put_many {}: {} entries", collection, entries.len());
        Ok(())
    }

    pub(crate) fn get(&self, collection: &str, key: &Key) -> Result<Vec<u8>> {
        let encoded = key.encode();

        let txn = self.db.begin_read()?;
        let table = txn.open_table(definition(collection))?;
        let value = table
            .get(encoded.as_slice())?
            .ok_or(KvError::KeyNotFound)?;

        Ok(value.value().to_vec())
    }

    /// Remove one key; an absent key is an error
    pub(crate) fn delete_key(&self, collection: &str, key: &Key) -> Result<()> {
        let encoded = key.encode();

        let txn = self.db.begin_write()?;
        if !collection_exists(&txn, collection)? {
            return Err(KvError::CollectionNotFound(collection.to_string()));
        }
        {
            let mut table = txn.open_table(definition(collection))?;
            if table.remove(encoded.as_slice())?.is_none() {
                return Err(KvError::KeyNotFound);
            }
        }
        txn.commit()?;

        tracing::trace!("delete {}: key_len={}", collection, encoded.len());
        Ok(())
    }

    pub(crate) fn count(&self, collection: &str) -> Result<u64> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(definition(collection))?;
        Ok(table.len()?)
    }

    /// Names of all collections, in name order
    pub(crate) fn collections(&self) -> Result<Vec<String>> {
        let txn = self.db.begin_read()?;
        let mut names: Vec<String> = txn
            .list_tables()?
            .map(|table| table.name().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Remove a collection and every entry in it
    pub(crate) fn drop_collection(&self, collection: &str) -> Result<()> {
        let txn = self.db.begin_write()?;
        if !txn.delete_table(definition(collection))? {
            return Err(KvError::CollectionNotFound(collection.to_string()));
        }
        txn.commit()?;

        tracing::debug!("Dropped collection {}", collection);
        Ok(())
    }
}
