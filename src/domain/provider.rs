//! Liquidity-provider / caller identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An address-like identifier for a caller or liquidity provider.
///
/// The engine uses it only as a lookup key into the position table and
/// as the subject of emitted events; it never derives meaning from the
/// bytes.  `Ord` is implemented so positions can live in an ordered map
/// with deterministic iteration and serialization.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::ProviderId;
///
/// let alice = ProviderId::from_bytes([1u8; 32]);
/// let bob = ProviderId::from_bytes([2u8; 32]);
/// assert_ne!(alice, bob);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProviderId([u8; 32]);

impl ProviderId {
    /// Creates a `ProviderId` from raw bytes.
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

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
