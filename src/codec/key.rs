//! Key encoding
//!
//! Logical keys are a closed set of variants; there is no untyped key
//! parameter anywhere in the API.

use crate::error::{KvError, Result};

/// Encoded width of a `Key::U32`
pub const U32_WIDTH: usize = 4;

/// Encoded width of a `Key::I64`
pub const I64_WIDTH: usize = 8;

/// Flipping the sign bit maps i64 order onto unsigned byte order
const SIGN_BIT: u64 = 1 << 63;

/// A logical key, before encoding
///
/// Integer variants encode to fixed-width big-endian bytes so that
/// numeric order and byte order agree. Text and bytes encode to
/// themselves. Range bounds and stored keys should use the same variant:
/// a `U32` and an `I64` never compare meaningfully.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Unsigned 32-bit integer (4 bytes)
    U32(u32),

    /// Signed 64-bit integer (8 bytes)
    I64(i64),

    /// UTF-8 text
    Text(String),

    /// Raw bytes
    Bytes(Vec<u8>),
}

impl Key {
    /// Encode to the canonical byte-string form
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Key::U32(n) => n.to_be_bytes().to_vec(),
            Key::I64(n) => ((*n as u64) ^ SIGN_BIT).to_be_bytes().to_vec(),
            Key::Text(s) => s.as_bytes().to_vec(),
            Key::Bytes(b) => b.clone(),
        }
    }

    /// Length of the encoded form, without allocating
    pub fn encoded_len(&self) -> usize {
        match self {
            Key::U32(_) => U32_WIDTH,
            Key::I64(_) => I64_WIDTH,
            Key::Text(s) => s.len(),
            Key::Bytes(b) => b.len(),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Key::U32(_) | Key::I64(_))
    }
}

/// Decode a fixed-width integer key back to `i64`
///
/// 4-byte keys are read as `U32`, 8-byte keys as `I64`. Any other width is
/// rejected with `UnsupportedKeyType`.
///
/// Only the width is checked. A text or bytes key that happens to be 4 or 8
/// bytes long decodes to a meaningless integer, so collections scanned
/// through the integer-decoding path must hold integer keys only.
pub fn decode_int(bytes: &[u8]) -> Result<i64> {
    match bytes.len() {
        U32_WIDTH => {
            let mut buf = [0u8; U32_WIDTH];
            buf.copy_from_slice(bytes);
            Ok(i64::from(u32::from_be_bytes(buf)))
        }
        I64_WIDTH => {
            let mut buf = [0u8; I64_WIDTH];
            buf.copy_from_slice(bytes);
            Ok((u64::from_be_bytes(buf) ^ SIGN_BIT) as i64)
        }
        len => Err(KvError::UnsupportedKeyType(format!(
            "cannot decode a {}-byte key as an integer (expected {} or {} bytes)",
            len, U32_WIDTH, I64_WIDTH
        ))),
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<u32> for Key {
    fn from(n: u32) -> Self {
        Key::U32(n)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::I64(n)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<&[u8]> for Key {
    fn from(b: &[u8]) -> Self {
        Key::Bytes(b.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Key {
    fn from(b: &[u8; N]) -> Self {
        Key::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Key {
    fn from(b: Vec<u8>) -> Self {
        Key::Bytes(b)
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}
