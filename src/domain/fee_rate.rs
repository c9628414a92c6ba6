//! Swap fee expressed as an explicit rational.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::PoolError;

/// A multiplicative swap fee expressed as `numerator / denominator`.
///
/// Keeping the fee as an explicit pair (rather than a hard-coded
/// basis-point constant) lets pools carry different fee tiers without
/// duplicating pool code.  The standard 0.3% tier is `3 / 1000`.
///
/// Valid rates satisfy `denominator > 0` and `numerator < denominator`;
/// a 100% fee would make every swap output zero.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, FeeRate};
///
/// let fee = FeeRate::new(3, 1000).expect("valid rate");
/// // 0.3% fee on 10 units: 10 * 997 / 1000 = 9 (floor) stays in play.
/// assert_eq!(fee.net_input(Amount::new(10)), Ok(Amount::new(9)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeeRate {
    numerator: u64,
    denominator: u64,
}

impl FeeRate {
    /// Zero fee (`0 / 1`).
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// The standard 0.3% tier (`3 / 1000`).
    pub const STANDARD: Self = Self {
        numerator: 3,
        denominator: 1000,
    };

    /// Creates a validated `FeeRate`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `denominator` is
    /// zero or `numerator >= denominator`.
    pub const fn new(numerator: u64, denominator: u64) -> crate::error::Result<Self> {
        let rate = Self {
            numerator,
            denominator,
        };
        match rate.validate() {
            Ok(()) => Ok(rate),
            Err(e) => Err(e),
        }
    }

    /// Re-checks the rate invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `denominator` is
    /// zero or `numerator >= denominator`.
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.denominator == 0 {
            return Err(PoolError::InvalidConfiguration(
                "fee denominator must be positive",
            ));
        }
        if self.numerator >= self.denominator {
            return Err(PoolError::InvalidConfiguration(
                "fee numerator must be less than denominator",
            ));
        }
        Ok(())
    }

    /// Returns the fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Applies the fee to an input amount, returning the net amount that
    /// participates in pricing: `amount * (denominator - numerator) /
    /// denominator`, truncated.
    ///
    /// The fee portion (`amount - net`) is retained by the pool, not
    /// paid out.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if the intermediate
    /// multiplication exceeds `u128`.
    pub const fn net_input(&self, amount: Amount) -> crate::error::Result<Amount> {
        // numerator < denominator is a construction invariant.
        let keep = (self.denominator - self.numerator) as u128;
        let product = match amount.get().checked_mul(keep) {
            Some(v) => v,
            None => return Err(PoolError::ArithmeticOverflow("fee application")),
        };
        Ok(Amount::new(product / self.denominator as u128))
    }

    /// Returns `true` if this rate charges no fee.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction -------------------------------------------------------

    #[test]
    fn standard_rate_is_valid() {
        let Ok(rate) = FeeRate::new(3, 1000) else {
            panic!("expected Ok");
        };
        assert_eq!(rate.numerator(), 3);
        assert_eq!(rate.denominator(), 1000);
        assert_eq!(rate, FeeRate::STANDARD);
    }

    #[test]
    fn zero_fee_is_valid() {
        let Ok(rate) = FeeRate::new(0, 1) else {
            panic!("expected Ok");
        };
        assert!(rate.is_zero());
    }

    #[test]
    fn zero_denominator_rejected() {
        let result = FeeRate::new(1, 0);
        assert!(matches!(
            result,
            Err(PoolError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn numerator_equal_to_denominator_rejected() {
        let result = FeeRate::new(1000, 1000);
        assert!(matches!(
            result,
            Err(PoolError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn numerator_above_denominator_rejected() {
        let result = FeeRate::new(1001, 1000);
        assert!(result.is_err());
    }

    // -- net_input ----------------------------------------------------------

    #[test]
    fn net_input_standard_fee() {
        // 10 * 997 / 1000 = 9 (floor)
        let Ok(net) = FeeRate::STANDARD.net_input(Amount::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::new(9));
    }

    #[test]
    fn net_input_exact_division() {
        // 1000 * 997 / 1000 = 997
        let Ok(net) = FeeRate::STANDARD.net_input(Amount::new(1000)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::new(997));
    }

    #[test]
    fn net_input_zero_fee_passes_through() {
        let Ok(net) = FeeRate::ZERO.net_input(Amount::new(12_345)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::new(12_345));
    }

    #[test]
    fn net_input_tiny_amount_truncates_to_zero() {
        // 1 * 1 / 2 = 0 with a 50% fee
        let Ok(rate) = FeeRate::new(1, 2) else {
            panic!("valid rate");
        };
        let Ok(net) = rate.net_input(Amount::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(net, Amount::ZERO);
    }

    #[test]
    fn net_input_overflow() {
        let result = FeeRate::STANDARD.net_input(Amount::MAX);
        assert_eq!(
            result,
            Err(PoolError::ArithmeticOverflow("fee application"))
        );
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display() {
        assert_eq!(format!("{}", FeeRate::STANDARD), "3/1000");
    }

    #[test]
    fn copy_semantics() {
        let a = FeeRate::STANDARD;
        let b = a;
        assert_eq!(a, b);
    }
}
