//! Codec Module
//!
//! Conversions between logical keys/values and the byte strings the
//! storage engine orders and stores.
//!
//! ## Key Layouts
//! ```text
//! ┌───────────┬───────┬──────────────────────────────────────┐
//! │ Variant   │ Width │ Layout                               │
//! ├───────────┼───────┼──────────────────────────────────────┤
//! │ U32       │ 4     │ big-endian                           │
//! │ I64       │ 8     │ big-endian, sign bit flipped         │
//! │ Text      │ var   │ UTF-8 bytes                          │
//! │ Bytes     │ var   │ raw bytes                            │
//! └───────────┴───────┴──────────────────────────────────────┘
//! ```
//!
//! Integer layouts preserve numeric order under unsigned lexicographic
//! byte comparison. Every range operation depends on this.

mod key;
mod value;

pub use key::{decode_int, Key, I64_WIDTH, U32_WIDTH};
pub use value::{decode_value, encode_value};
