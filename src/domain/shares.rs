//! Liquidity-provider share units.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// A quantity of liquidity-provider shares.
///
/// Shares measure a proportional claim on both pool reserves, not an
/// amount of any single token — hence a separate type from [`Amount`].
/// A provider holding `s` shares out of `T` total is entitled to
/// `reserve * s / T` of each reserve on redemption.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(500);
/// assert_eq!(a.checked_sub(&b), Some(Shares::new(500)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a `Shares` value from a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the share count is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.  Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction.  Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Reinterprets this share count as an [`Amount`]-typed operand.
    ///
    /// Proportional redemption divides token amounts by share counts;
    /// this conversion makes that mixed arithmetic explicit at the call
    /// site instead of hiding a raw `.get()` cast.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
