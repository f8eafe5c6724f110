//! Shared fixtures for integration tests

#![allow(dead_code)]

use rangekv::{Config, Database, Key};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness (`RUST_LOG=rangekv=trace`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Open a fresh database at `{tempdir}/test.db`
pub fn setup_temp_db() -> (TempDir, Database) {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .path(temp_dir.path().join("test"))
        .build()
        .unwrap();
    let db = Database::open(config).unwrap();
    (temp_dir, db)
}

/// Insert integer keys `0..count`, each mapped to its low byte
pub fn populate(db: &Database, collection: &str, count: u32) {
    let entries: Vec<(Key, Vec<u8>)> = (0..count)
        .map(|i| (Key::U32(i), vec![i as u8]))
        .collect();
    db.put_many(collection, &entries).unwrap();
}

pub fn keys_of(result: &rangekv::RangeResult) -> Vec<i64> {
    result.keys().copied().collect()
}
