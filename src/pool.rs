//! Constant-product pool engine.
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the two
//! reserves.  The fee is deducted from the input amount **before** the
//! pricing formula is applied, and the full input (fee included) enters
//! the reserve, so the product never decreases across a swap.
//!
//! # Swap algorithm (A → B)
//!
//! 1. `net_in = amount_in × (fee_den − fee_num) / fee_den` (floor)
//! 2. `amount_out = net_in × reserve_b / (reserve_a + net_in)` (floor)
//! 3. reject zero output, outputs that would drain `reserve_b`, and
//!    outputs below the caller's minimum
//! 4. `reserve_a += amount_in`, `reserve_b -= amount_out`
//!
//! The B → A direction is the same formula with the roles swapped.
//!
//! # Liquidity accounting
//!
//! The first deposit seeds the pool at whatever ratio the depositor
//! chooses and mints `isqrt(amount_a × amount_b)` shares.  Later
//! deposits must match the current ratio: the engine computes the
//! token-B amount the deposit requires and refunds any excess, then
//! mints `total_shares × amount_a / reserve_a` shares.  Withdrawal is
//! share-proportional on both reserves, so draining every share returns
//! the reserves exactly and leaves the pool empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PoolConfig;
use crate::domain::{
    Amount, FeeRate, LiquidityReceipt, ProviderId, Shares, SwapDirection, SwapOutcome, TokenId,
};
use crate::error::PoolError;
use crate::event::PoolEvent;

/// A two-asset constant-product pool with proportional share accounting.
///
/// A pool is always in one of two macro-states:
///
/// - **Empty** — zero reserves, zero shares.  Only deposits are
///   accepted; swaps, quotes, and withdrawals fail with
///   [`PoolError::PoolNotSeeded`].
/// - **Seeded** — both reserves and total shares positive.  All
///   operations are available.  Removing every outstanding share
///   transitions back to Empty.
///
/// Every operation is a single atomic state transition: any error
/// returns before the first field is written, so a failed call leaves
/// the pool byte-identical to its pre-call state.
///
/// # Examples
///
/// ```
/// use xyk_pool::config::PoolConfig;
/// use xyk_pool::domain::{Amount, FeeRate, ProviderId, SwapDirection, TokenId};
/// use xyk_pool::pool::Pool;
///
/// let config = PoolConfig::new(
///     TokenId::from_bytes([1u8; 32]),
///     TokenId::from_bytes([2u8; 32]),
///     FeeRate::STANDARD,
/// )
/// .expect("valid config");
///
/// let mut pool = Pool::initialize(config).expect("pool created");
/// let alice = ProviderId::from_bytes([0xaa; 32]);
///
/// pool.add_liquidity(Amount::new(1_000), Amount::new(1_000), alice)
///     .expect("seeded");
///
/// let outcome = pool
///     .swap(Amount::new(10), SwapDirection::AToB, alice, Amount::ZERO)
///     .expect("swap executed");
/// assert_eq!(outcome.amount_out(), Amount::new(8));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    config: PoolConfig,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    positions: BTreeMap<ProviderId, Shares>,
    accumulated_fees_a: Amount,
    accumulated_fees_b: Amount,
    events: Vec<PoolEvent>,
}

/// The persisted form of a pool: the reserve record plus the position
/// table.  The event log is history, not state, and is persisted
/// separately (see [`crate::event::replay`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Immutable pool parameters.
    pub config: PoolConfig,
    /// Reserve of token A.
    pub reserve_a: Amount,
    /// Reserve of token B.
    pub reserve_b: Amount,
    /// Sum of all issued shares.
    pub total_shares: Shares,
    /// Per-provider share positions, sorted by provider.  A vector of
    /// pairs rather than a map so the record stays serializable to
    /// formats that only accept string map keys.
    pub positions: Vec<(ProviderId, Shares)>,
    /// Lifetime token-A fees retained (observability counter).
    pub accumulated_fees_a: Amount,
    /// Lifetime token-B fees retained (observability counter).
    pub accumulated_fees_b: Amount,
}

impl Pool {
    /// Creates an empty pool bound to the configured token pair and fee.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the configuration
    /// fails re-validation.
    pub fn initialize(config: PoolConfig) -> crate::error::Result<Self> {
        config.validate()?;

        let events = vec![PoolEvent::PoolInitialized {
            token_a: config.token_a(),
            token_b: config.token_b(),
            fee: config.fee_rate(),
        }];

        debug!(
            "pool initialized: tokens {}/{}, fee {}",
            config.token_a(),
            config.token_b(),
            config.fee_rate()
        );

        Ok(Self {
            config,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
            positions: BTreeMap::new(),
            accumulated_fees_a: Amount::ZERO,
            accumulated_fees_b: Amount::ZERO,
            events,
        })
    }

    // -- read-only queries --------------------------------------------------

    /// Returns the current reserves as `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns `true` once the pool holds liquidity.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        !self.total_shares.is_zero()
    }

    /// Returns the sum of all issued shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the recorded position of a provider, zero if none.
    #[must_use]
    pub fn shares_of(&self, provider: &ProviderId) -> Shares {
        self.positions.get(provider).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns the number of providers with a live position.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the identifier of token A.
    #[must_use]
    pub const fn token_a(&self) -> TokenId {
        self.config.token_a()
    }

    /// Returns the identifier of token B.
    #[must_use]
    pub const fn token_b(&self) -> TokenId {
        self.config.token_b()
    }

    /// Returns the swap fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.config.fee_rate()
    }

    /// Returns lifetime token-A fees retained by the pool.
    #[must_use]
    pub const fn accumulated_fees_a(&self) -> Amount {
        self.accumulated_fees_a
    }

    /// Returns lifetime token-B fees retained by the pool.
    #[must_use]
    pub const fn accumulated_fees_b(&self) -> Amount {
        self.accumulated_fees_b
    }

    /// Returns the append-only event log.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Returns the spot price of the input token in units of the output
    /// token, as the exact rational `(reserve_out, reserve_in)`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PoolNotSeeded`] on an empty pool.
    pub fn spot_price(&self, direction: SwapDirection) -> crate::error::Result<(Amount, Amount)> {
        if !self.is_seeded() {
            return Err(PoolError::PoolNotSeeded);
        }
        let (reserve_in, reserve_out) = self.oriented_reserves(direction);
        Ok((reserve_out, reserve_in))
    }

    /// Prices a swap without executing it.
    ///
    /// Performs exactly the fee and pricing steps of [`Pool::swap`] on
    /// the current reserves, so on an untouched pool `quote` and `swap`
    /// agree to the unit.
    ///
    /// # Errors
    ///
    /// Fails with the same errors a swap of the same size would, except
    /// [`PoolError::SlippageExceeded`] (quoting takes no minimum).
    pub fn quote(&self, amount_in: Amount, direction: SwapDirection) -> crate::error::Result<Amount> {
        let (amount_out, _fee) = self.price_swap(amount_in, direction)?;
        Ok(amount_out)
    }

    // -- state transitions --------------------------------------------------

    /// Deposits both tokens and mints shares for `provider`.
    ///
    /// On the first deposit the amounts are taken exactly as given and
    /// fix the pool's implied exchange rate; minted shares are
    /// `isqrt(amount_a × amount_b)`.  On later deposits the engine
    /// computes `optimal_b = amount_a × reserve_b / reserve_a`; the
    /// caller must supply at least that much token B, and anything
    /// above it is left with the caller (the receipt's `amount_b` shows
    /// what was consumed).  Minted shares are
    /// `total_shares × amount_a / reserve_a`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if either amount is zero, or the
    ///   deposit is too small to mint a share.
    /// - [`PoolError::InsufficientRatioAmount`] if `amount_b` is below
    ///   the required proportional amount.
    /// - [`PoolError::ArithmeticOverflow`] if any intermediate
    ///   computation exceeds `u128`.
    pub fn add_liquidity(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
        provider: ProviderId,
    ) -> crate::error::Result<LiquidityReceipt> {
        if amount_a.is_zero() {
            return Err(PoolError::ZeroAmount("token A deposit"));
        }
        if amount_b.is_zero() {
            return Err(PoolError::ZeroAmount("token B deposit"));
        }

        let (amount_b_used, minted) = if self.total_shares.is_zero() {
            // First deposit fixes the rate; geometric-mean share baseline.
            let product = amount_a
                .checked_mul(&amount_b)
                .ok_or(PoolError::ArithmeticOverflow("initial share baseline"))?;
            (amount_b, Shares::new(isqrt(product.get())))
        } else {
            let optimal_b = amount_a
                .checked_mul_div(&self.reserve_b, &self.reserve_a)
                .ok_or(PoolError::ArithmeticOverflow("optimal deposit ratio"))?;
            if amount_b < optimal_b {
                return Err(PoolError::InsufficientRatioAmount {
                    required: optimal_b.get(),
                    supplied: amount_b.get(),
                });
            }
            let minted = amount_a
                .checked_mul_div(&self.total_shares.as_amount(), &self.reserve_a)
                .ok_or(PoolError::ArithmeticOverflow("share minting"))?;
            if minted.is_zero() {
                return Err(PoolError::ZeroAmount("deposit too small to mint shares"));
            }
            (optimal_b, Shares::new(minted.get()))
        };

        // Fallible section ends here: compute every new value before the
        // first assignment so an error cannot leave partial state.
        let new_reserve_a = self
            .reserve_a
            .checked_add(&amount_a)
            .ok_or(PoolError::ArithmeticOverflow("reserve A after deposit"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(&amount_b_used)
            .ok_or(PoolError::ArithmeticOverflow("reserve B after deposit"))?;
        let new_total = self
            .total_shares
            .checked_add(&minted)
            .ok_or(PoolError::ArithmeticOverflow("total shares after deposit"))?;
        let new_position = self
            .shares_of(&provider)
            .checked_add(&minted)
            .ok_or(PoolError::ArithmeticOverflow("position after deposit"))?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        self.positions.insert(provider, new_position);
        self.events.push(PoolEvent::LiquidityAdded {
            provider,
            amount_a,
            amount_b_used,
            shares: minted,
        });

        debug!(
            "liquidity added by {}: {} A + {} B for {} shares",
            provider, amount_a, amount_b_used, minted
        );

        Ok(LiquidityReceipt::new(minted, amount_a, amount_b_used))
    }

    /// Burns `shares` of `provider`'s position and pays out the
    /// proportional slice of both reserves.
    ///
    /// Redemption is share-proportional: `amount_x = reserve_x × shares
    /// / total_shares`, truncated.  Removing every outstanding share
    /// returns both reserves exactly and leaves the pool empty.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `shares` is zero.
    /// - [`PoolError::PoolNotSeeded`] on an empty pool.
    /// - [`PoolError::InsufficientShares`] if the provider holds fewer
    ///   shares than requested.
    /// - [`PoolError::ArithmeticOverflow`] on intermediate overflow.
    pub fn remove_liquidity(
        &mut self,
        shares: Shares,
        provider: ProviderId,
    ) -> crate::error::Result<LiquidityReceipt> {
        if shares.is_zero() {
            return Err(PoolError::ZeroAmount("shares to remove"));
        }
        if !self.is_seeded() {
            return Err(PoolError::PoolNotSeeded);
        }

        let held = self.shares_of(&provider);
        if shares > held {
            return Err(PoolError::InsufficientShares {
                requested: shares.get(),
                held: held.get(),
            });
        }

        let total = self.total_shares.as_amount();
        let amount_a = self
            .reserve_a
            .checked_mul_div(&shares.as_amount(), &total)
            .ok_or(PoolError::ArithmeticOverflow("token A redemption"))?;
        let amount_b = self
            .reserve_b
            .checked_mul_div(&shares.as_amount(), &total)
            .ok_or(PoolError::ArithmeticOverflow("token B redemption"))?;

        let new_reserve_a = self
            .reserve_a
            .checked_sub(&amount_a)
            .ok_or(PoolError::ArithmeticOverflow("reserve A after removal"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(&amount_b)
            .ok_or(PoolError::ArithmeticOverflow("reserve B after removal"))?;
        let new_total = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(PoolError::ArithmeticOverflow("total shares after removal"))?;
        let new_position = held
            .checked_sub(&shares)
            .ok_or(PoolError::ArithmeticOverflow("position after removal"))?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        if new_position.is_zero() {
            self.positions.remove(&provider);
        } else {
            self.positions.insert(provider, new_position);
        }
        self.events.push(PoolEvent::LiquidityRemoved {
            provider,
            amount_a,
            amount_b,
            shares,
        });

        debug!(
            "liquidity removed by {}: {} shares for {} A + {} B",
            provider, shares, amount_a, amount_b
        );

        Ok(LiquidityReceipt::new(shares, amount_a, amount_b))
    }

    /// Executes a fee-adjusted constant-product swap.
    ///
    /// The fee portion of the input stays in the pool, so the reserve
    /// product only grows across swaps.  `min_amount_out` is the
    /// caller's slippage guard: if the computed output is below it the
    /// swap fails and nothing changes.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::PoolNotSeeded`] on an empty pool.
    /// - [`PoolError::ZeroOutput`] if the output truncates to zero.
    /// - [`PoolError::InsufficientLiquidity`] if the output would meet
    ///   or exceed the opposing reserve.
    /// - [`PoolError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`.
    /// - [`PoolError::ArithmeticOverflow`] on intermediate overflow.
    pub fn swap(
        &mut self,
        amount_in: Amount,
        direction: SwapDirection,
        caller: ProviderId,
        min_amount_out: Amount,
    ) -> crate::error::Result<SwapOutcome> {
        let (amount_out, fee) = self.price_swap(amount_in, direction)?;

        if amount_out < min_amount_out {
            return Err(PoolError::SlippageExceeded {
                computed: amount_out.get(),
                minimum: min_amount_out.get(),
            });
        }

        let outcome = SwapOutcome::new(amount_in, amount_out, fee)?;

        let (reserve_in, reserve_out) = self.oriented_reserves(direction);
        let new_reserve_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::ArithmeticOverflow("input reserve after swap"))?;
        let new_reserve_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::ArithmeticOverflow("output reserve after swap"))?;
        let new_fees = match direction {
            SwapDirection::AToB => self.accumulated_fees_a,
            SwapDirection::BToA => self.accumulated_fees_b,
        }
        .checked_add(&fee)
        .ok_or(PoolError::ArithmeticOverflow("fee counter"))?;

        match direction {
            SwapDirection::AToB => {
                self.reserve_a = new_reserve_in;
                self.reserve_b = new_reserve_out;
                self.accumulated_fees_a = new_fees;
            }
            SwapDirection::BToA => {
                self.reserve_b = new_reserve_in;
                self.reserve_a = new_reserve_out;
                self.accumulated_fees_b = new_fees;
            }
        }
        self.events.push(PoolEvent::Swap {
            caller,
            direction,
            amount_in,
            amount_out,
        });

        debug!(
            "swap {} by {}: {} in, {} out, fee {}",
            direction, caller, amount_in, amount_out, fee
        );

        Ok(outcome)
    }

    // -- persistence --------------------------------------------------------

    /// Captures the pool's persistable state.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            config: self.config,
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            total_shares: self.total_shares,
            positions: self.positions.iter().map(|(p, s)| (*p, *s)).collect(),
            accumulated_fees_a: self.accumulated_fees_a,
            accumulated_fees_b: self.accumulated_fees_b,
        }
    }

    /// Rebuilds a pool from a snapshot, re-checking every structural
    /// invariant.  The restored pool starts a fresh event log.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the snapshot
    /// violates the config rules, the seeded/empty invariants, or if
    /// the position table does not sum to the recorded total.
    pub fn restore(snapshot: PoolSnapshot) -> crate::error::Result<Self> {
        snapshot.config.validate()?;

        let seeded = !snapshot.total_shares.is_zero();
        let reserves_positive = !snapshot.reserve_a.is_zero() && !snapshot.reserve_b.is_zero();
        let reserves_zero = snapshot.reserve_a.is_zero() && snapshot.reserve_b.is_zero();
        if seeded && !reserves_positive {
            return Err(PoolError::InvalidConfiguration(
                "seeded snapshot requires both reserves positive",
            ));
        }
        if !seeded && !reserves_zero {
            return Err(PoolError::InvalidConfiguration(
                "empty snapshot requires both reserves zero",
            ));
        }

        let mut positions = BTreeMap::new();
        let mut position_sum = Shares::ZERO;
        for (provider, shares) in snapshot.positions {
            if shares.is_zero() {
                return Err(PoolError::InvalidConfiguration(
                    "snapshot position with zero shares",
                ));
            }
            position_sum = position_sum
                .checked_add(&shares)
                .ok_or(PoolError::ArithmeticOverflow("snapshot position sum"))?;
            if positions.insert(provider, shares).is_some() {
                return Err(PoolError::InvalidConfiguration(
                    "snapshot repeats a provider",
                ));
            }
        }
        if position_sum != snapshot.total_shares {
            return Err(PoolError::InvalidConfiguration(
                "snapshot positions do not sum to total shares",
            ));
        }

        Ok(Self {
            config: snapshot.config,
            reserve_a: snapshot.reserve_a,
            reserve_b: snapshot.reserve_b,
            total_shares: snapshot.total_shares,
            positions,
            accumulated_fees_a: snapshot.accumulated_fees_a,
            accumulated_fees_b: snapshot.accumulated_fees_b,
            events: Vec::new(),
        })
    }

    // -- internals ----------------------------------------------------------

    /// Orients the reserves as `(reserve_in, reserve_out)` for a
    /// direction.
    const fn oriented_reserves(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    /// Shared pricing path for [`Pool::quote`] and [`Pool::swap`]:
    /// returns `(amount_out, fee)` without touching state.
    fn price_swap(
        &self,
        amount_in: Amount,
        direction: SwapDirection,
    ) -> crate::error::Result<(Amount, Amount)> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount("swap input"));
        }
        if !self.is_seeded() {
            return Err(PoolError::PoolNotSeeded);
        }

        let (reserve_in, reserve_out) = self.oriented_reserves(direction);

        let net_in = self.config.fee_rate().net_input(amount_in)?;
        let fee = amount_in
            .checked_sub(&net_in)
            .ok_or(PoolError::ArithmeticOverflow("fee split"))?;

        let denominator = reserve_in
            .checked_add(&net_in)
            .ok_or(PoolError::ArithmeticOverflow("pricing denominator"))?;
        let amount_out = net_in
            .checked_mul_div(&reserve_out, &denominator)
            .ok_or(PoolError::ArithmeticOverflow("pricing numerator"))?;

        if amount_out.is_zero() {
            return Err(PoolError::ZeroOutput);
        }
        if amount_out >= reserve_out {
            return Err(PoolError::InsufficientLiquidity);
        }

        Ok((amount_out, fee))
    }
}

/// Integer square root via Newton's method.
const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
