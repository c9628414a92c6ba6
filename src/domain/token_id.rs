//! Opaque token identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A chain-agnostic identifier for a traded asset.
///
/// Wraps a fixed 32-byte value; the engine never interprets the bytes
/// beyond equality and ordering, so any addressing scheme that fits in
/// 32 bytes can be carried through unchanged.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::TokenId;
///
/// let id = TokenId::from_bytes([7u8; 32]);
/// assert_eq!(id.as_bytes(), [7u8; 32]);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TokenId([u8; 32]);

impl TokenId {
    /// Creates a `TokenId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte value.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for TokenId {
    /// Renders the first four bytes as hex, enough to tell ids apart in
    /// logs without flooding them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
