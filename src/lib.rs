//! # rangekv
//!
//! An embedded ordered key-value store with:
//! - Named collections in a single file
//! - Order-preserving key encoding for integer, text, and byte keys
//! - Inclusive range scans, boundary-extended scans, and range deletes
//! - One atomic transaction per operation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Database                               │
//! │           (lifecycle, closed-handle checks)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────────┐
//!   │  Key Codec  │          │ CollectionStore │
//!   │  (encode)   │─────────▶│ (point + range) │
//!   └─────────────┘          └────────┬────────┘
//!                                     │
//!                                     ▼
//!                            ┌─────────────────┐
//!                            │      redb       │
//!                            │ (transactions)  │
//!                            └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use rangekv::Database;
//!
//! let db = Database::open_path("metrics")?;
//! for i in 0u32..100 {
//!     db.put("samples", i, &[0])?;
//! }
//! let window = db.scan_range_extended("samples", 6u32, 7u32)?;
//! assert_eq!(window.keys().copied().collect::<Vec<_>>(), vec![5, 6, 7, 8]);
//! db.close()?;
//! # Ok::<(), rangekv::KvError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod store;
pub mod database;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::{Config, ConfigBuilder};
pub use codec::Key;
pub use store::{Entry, RangeResult, MAX_KEY_SIZE};
pub use database::Database;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rangekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
