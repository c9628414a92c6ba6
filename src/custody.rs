//! Asset custody adapters and the custodial pool wrapper.
//!
//! The pool engine is a pure ledger: it trusts the amounts it is handed.
//! Real assets live behind transfer mechanisms that may not deliver the
//! nominal amount (transfer fees, burns on the token side), so custody
//! is modelled as a capability interface with exactly the two operations
//! the engine needs.  [`CustodialPool`] composes one adapter per asset
//! with the engine and always accounts with the amounts that *actually
//! arrived*, never the amounts that were promised.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{
    Amount, LiquidityReceipt, ProviderId, Shares, SwapDirection, SwapOutcome,
};
use crate::error::PoolError;
use crate::pool::Pool;

/// Capability interface for moving one asset in and out of pool custody.
///
/// `transfer_in` returns the amount that actually reached custody; an
/// adapter over a fee-on-transfer asset reports the post-fee delta.
/// Implementations must be atomic per call: either the full reported
/// movement happened or the call failed with no movement.
pub trait AssetCustody {
    /// Moves `amount` from `from` into pool custody.
    ///
    /// Returns the amount actually received, which may be less than
    /// `amount` for assets that levy their own transfer charge.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientBalance`] if `from` cannot cover
    /// the transfer.
    fn transfer_in(&mut self, from: ProviderId, amount: Amount) -> crate::error::Result<Amount>;

    /// Moves `amount` from pool custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientBalance`] if custody cannot
    /// cover the transfer.
    fn transfer_out(&mut self, to: ProviderId, amount: Amount) -> crate::error::Result<()>;
}

/// A straightforward in-memory balance ledger implementing
/// [`AssetCustody`] with full-amount delivery.
///
/// Useful for tests, simulations, and as the reference adapter shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryVault {
    balances: BTreeMap<ProviderId, Amount>,
    custody: Amount,
}

impl InMemoryVault {
    /// Creates an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` to a holder's balance.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if the balance would
    /// exceed `u128`.
    pub fn mint(&mut self, holder: ProviderId, amount: Amount) -> crate::error::Result<()> {
        let balance = self.balance_of(&holder);
        let new_balance = balance
            .checked_add(&amount)
            .ok_or(PoolError::ArithmeticOverflow("vault mint"))?;
        self.balances.insert(holder, new_balance);
        Ok(())
    }

    /// Returns a holder's balance, zero if unknown.
    #[must_use]
    pub fn balance_of(&self, holder: &ProviderId) -> Amount {
        self.balances.get(holder).copied().unwrap_or(Amount::ZERO)
    }

    /// Returns the amount currently held in pool custody.
    #[must_use]
    pub const fn custody_balance(&self) -> Amount {
        self.custody
    }
}

impl AssetCustody for InMemoryVault {
    fn transfer_in(&mut self, from: ProviderId, amount: Amount) -> crate::error::Result<Amount> {
        let balance = self.balance_of(&from);
        let new_balance = balance
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientBalance {
                requested: amount.get(),
                available: balance.get(),
            })?;
        let new_custody = self
            .custody
            .checked_add(&amount)
            .ok_or(PoolError::ArithmeticOverflow("custody balance"))?;
        self.balances.insert(from, new_balance);
        self.custody = new_custody;
        Ok(amount)
    }

    fn transfer_out(&mut self, to: ProviderId, amount: Amount) -> crate::error::Result<()> {
        let new_custody = self
            .custody
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientBalance {
                requested: amount.get(),
                available: self.custody.get(),
            })?;
        let balance = self.balance_of(&to);
        let new_balance = balance
            .checked_add(&amount)
            .ok_or(PoolError::ArithmeticOverflow("vault payout"))?;
        self.custody = new_custody;
        self.balances.insert(to, new_balance);
        Ok(())
    }
}

/// A pool engine coupled to one custody adapter per asset.
///
/// Every operation measures the received balance delta before invoking
/// the engine, so the accounting can never drift from real custody even
/// when an asset charges its own transfer fee.  If the engine rejects a
/// call after assets were pulled in, the wrapper pushes them back out
/// before returning the error, preserving the all-or-nothing contract.
#[derive(Debug)]
pub struct CustodialPool<A, B> {
    pool: Pool,
    asset_a: A,
    asset_b: B,
}

impl<A: AssetCustody, B: AssetCustody> CustodialPool<A, B> {
    /// Couples an engine with its two custody adapters.
    pub const fn new(pool: Pool, asset_a: A, asset_b: B) -> Self {
        Self {
            pool,
            asset_a,
            asset_b,
        }
    }

    /// Read access to the underlying engine.
    pub const fn engine(&self) -> &Pool {
        &self.pool
    }

    /// Read access to the token-A adapter.
    pub const fn asset_a(&self) -> &A {
        &self.asset_a
    }

    /// Read access to the token-B adapter.
    pub const fn asset_b(&self) -> &B {
        &self.asset_b
    }

    /// Decomposes the wrapper back into its parts.
    pub fn into_parts(self) -> (Pool, A, B) {
        (self.pool, self.asset_a, self.asset_b)
    }

    /// Pulls both deposits in, credits the engine with the measured
    /// amounts, and refunds whatever the engine did not consume.
    ///
    /// # Errors
    ///
    /// Custody errors propagate as-is; engine rejections are returned
    /// after the pulled assets have been refunded.
    pub fn add_liquidity(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
        provider: ProviderId,
    ) -> crate::error::Result<LiquidityReceipt> {
        let received_a = self.asset_a.transfer_in(provider, amount_a)?;
        let received_b = match self.asset_b.transfer_in(provider, amount_b) {
            Ok(received) => received,
            Err(e) => {
                self.asset_a.transfer_out(provider, received_a)?;
                return Err(e);
            }
        };

        match self.pool.add_liquidity(received_a, received_b, provider) {
            Ok(receipt) => {
                // The engine consumed receipt.amount_b(); return the rest.
                let refund = received_b
                    .checked_sub(&receipt.amount_b())
                    .ok_or(PoolError::ArithmeticOverflow("deposit refund"))?;
                if !refund.is_zero() {
                    self.asset_b.transfer_out(provider, refund)?;
                    debug!("refunded {} excess B to {}", refund, provider);
                }
                Ok(receipt)
            }
            Err(e) => {
                self.asset_a.transfer_out(provider, received_a)?;
                self.asset_b.transfer_out(provider, received_b)?;
                Err(e)
            }
        }
    }

    /// Burns shares through the engine and pays out both redemptions.
    ///
    /// # Errors
    ///
    /// Engine rejections propagate with no asset movement; custody
    /// payout errors propagate after the engine state has changed and
    /// indicate a custody/ledger mismatch.
    pub fn remove_liquidity(
        &mut self,
        shares: Shares,
        provider: ProviderId,
    ) -> crate::error::Result<LiquidityReceipt> {
        let receipt = self.pool.remove_liquidity(shares, provider)?;
        self.asset_a.transfer_out(provider, receipt.amount_a())?;
        self.asset_b.transfer_out(provider, receipt.amount_b())?;
        Ok(receipt)
    }

    /// Pulls the input asset in, swaps the *measured* received amount,
    /// and pays out the result.
    ///
    /// # Errors
    ///
    /// Custody errors propagate as-is; engine rejections are returned
    /// after the pulled input has been refunded.
    pub fn swap(
        &mut self,
        amount_in: Amount,
        direction: SwapDirection,
        caller: ProviderId,
        min_amount_out: Amount,
    ) -> crate::error::Result<SwapOutcome> {
        let received = match direction {
            SwapDirection::AToB => self.asset_a.transfer_in(caller, amount_in)?,
            SwapDirection::BToA => self.asset_b.transfer_in(caller, amount_in)?,
        };

        match self.pool.swap(received, direction, caller, min_amount_out) {
            Ok(outcome) => {
                match direction {
                    SwapDirection::AToB => {
                        self.asset_b.transfer_out(caller, outcome.amount_out())?;
                    }
                    SwapDirection::BToA => {
                        self.asset_a.transfer_out(caller, outcome.amount_out())?;
                    }
                }
                Ok(outcome)
            }
            Err(e) => {
                match direction {
                    SwapDirection::AToB => self.asset_a.transfer_out(caller, received)?,
                    SwapDirection::BToA => self.asset_b.transfer_out(caller, received)?,
                }
                Err(e)
            }
        }
    }
}
