//! Raw token amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A raw token amount in the smallest indivisible unit of its asset.
///
/// `Amount` is a plain magnitude: it carries no token identity and no
/// decimal interpretation.  All `u128` values are valid.
///
/// Arithmetic is checked throughout — methods return `None` on overflow,
/// underflow, or division by zero instead of panicking.  Division always
/// truncates (floor), which is the direction that favours the pool.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Amount;
///
/// let a = Amount::new(10);
/// let b = Amount::new(3);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(13)));
/// assert_eq!(a.checked_div(&b), Some(Amount::new(3)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates an `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Checked multiplication.  Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked truncating division.  Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self) -> Option<Self> {
        match self.0.checked_div(divisor.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Fused multiply-then-divide with truncation: `self * mul / div`.
    ///
    /// This is the shape of every proportional computation in the pool
    /// engine (optimal deposit, share minting, redemption, swap output).
    /// Returns `None` if the intermediate product overflows or `div` is
    /// zero.
    #[must_use]
    pub const fn checked_mul_div(&self, mul: &Self, div: &Self) -> Option<Self> {
        let product = match self.0.checked_mul(mul.0) {
            Some(v) => v,
            None => return None,
        };
        match product.checked_div(div.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
