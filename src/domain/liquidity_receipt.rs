//! Receipt for liquidity deposits and withdrawals.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Shares};

/// The settled result of a liquidity operation.
///
/// For a deposit, `amount_a` / `amount_b` are the amounts the pool
/// actually consumed (token B supplied above the required ratio is
/// refunded, so `amount_b` may be less than what the caller offered)
/// and `shares` is the amount minted.  For a withdrawal, the amounts
/// are what the pool paid out and `shares` is the amount burned.
///
/// The engine only issues receipts for operations that moved shares, so
/// `shares` is always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityReceipt {
    shares: Shares,
    amount_a: Amount,
    amount_b: Amount,
}

impl LiquidityReceipt {
    /// Creates a receipt.
    pub(crate) const fn new(shares: Shares, amount_a: Amount, amount_b: Amount) -> Self {
        Self {
            shares,
            amount_a,
            amount_b,
        }
    }

    /// Returns the shares minted or burned.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Returns the token-A amount consumed or paid out.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the token-B amount consumed or paid out.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl fmt::Display for LiquidityReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shares={} a={} b={}",
            self.shares, self.amount_a, self.amount_b
        )
    }
}
