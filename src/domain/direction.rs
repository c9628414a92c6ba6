//! Swap direction selector.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the pool a swap feeds.
///
/// The two reserves are positional — token A funds `reserve_a`, token B
/// funds `reserve_b` — so a direction is all the engine needs to orient
/// the pricing formula.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::SwapDirection;
///
/// let dir = SwapDirection::AToB;
/// assert_eq!(dir.flip(), SwapDirection::BToA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell token A, receive token B.
    AToB,
    /// Sell token B, receive token A.
    BToA,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flip(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }

    /// Returns `true` for the A→B direction.
    #[must_use]
    pub const fn is_a_to_b(&self) -> bool {
        matches!(self, Self::AToB)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A→B"),
            Self::BToA => write!(f, "B→A"),
        }
    }
}
