//! Outcome of an executed swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::PoolError;

/// The amounts exchanged by a completed swap.
///
/// `fee` is the portion of `amount_in` retained by the pool; it is part
/// of the input, never an extra charge, so `fee < amount_in` always
/// holds.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, SwapOutcome};
///
/// let outcome = SwapOutcome::new(Amount::new(10), Amount::new(8), Amount::new(1));
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapOutcome {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a validated `SwapOutcome`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if either amount is zero, or if
    /// `fee >= amount_in`.
    pub const fn new(
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount("swap outcome input"));
        }
        if amount_out.is_zero() {
            return Err(PoolError::ZeroAmount("swap outcome output"));
        }
        if fee.get() >= amount_in.get() {
            return Err(PoolError::ZeroAmount("fee would consume entire input"));
        }
        Ok(Self {
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the full input amount, fee included.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount paid to the trader.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee portion retained by the pool.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "in={} out={} fee={}",
            self.amount_in, self.amount_out, self.fee
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_outcome() {
        let Ok(o) = SwapOutcome::new(Amount::new(1_000), Amount::new(990), Amount::new(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(o.amount_in(), Amount::new(1_000));
        assert_eq!(o.amount_out(), Amount::new(990));
        assert_eq!(o.fee(), Amount::new(3));
    }

    #[test]
    fn zero_fee_is_valid() {
        assert!(SwapOutcome::new(Amount::new(100), Amount::new(99), Amount::ZERO).is_ok());
    }

    #[test]
    fn zero_input_rejected() {
        assert!(SwapOutcome::new(Amount::ZERO, Amount::new(1), Amount::ZERO).is_err());
    }

    #[test]
    fn zero_output_rejected() {
        assert!(SwapOutcome::new(Amount::new(1), Amount::ZERO, Amount::ZERO).is_err());
    }

    #[test]
    fn fee_equal_to_input_rejected() {
        assert!(SwapOutcome::new(Amount::new(10), Amount::new(5), Amount::new(10)).is_err());
    }

    #[test]
    fn fee_one_below_input_accepted() {
        assert!(SwapOutcome::new(Amount::new(10), Amount::new(5), Amount::new(9)).is_ok());
    }

    #[test]
    fn display() {
        let Ok(o) = SwapOutcome::new(Amount::new(10), Amount::new(8), Amount::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(format!("{o}"), "in=10 out=8 fee=1");
    }
}
