//! # XYK Pool
//!
//! A constant-product pool engine: two reserve balances, fee-adjusted
//! swaps under `x × y = k`, and liquidity-provider shares proportional
//! to contribution.
//!
//! The crate is a pure state machine — no transport, no signing, no
//! chain bindings.  A host execution environment invokes the engine's
//! operations and persists the emitted events; everything the engine
//! touches is plain integers.
//!
//! # Quick Start
//!
//! ```rust
//! use xyk_pool::prelude::*;
//!
//! // 1. Bind a pool to two token identifiers and a 0.3% fee.
//! let config = PoolConfig::new(
//!     TokenId::from_bytes([1u8; 32]),
//!     TokenId::from_bytes([2u8; 32]),
//!     FeeRate::STANDARD,
//! )
//! .expect("valid config");
//! let mut pool = Pool::initialize(config).expect("pool created");
//!
//! // 2. The first deposit seeds the reserves and fixes the rate.
//! let alice = ProviderId::from_bytes([0xaa; 32]);
//! let receipt = pool
//!     .add_liquidity(Amount::new(1_000), Amount::new(1_000), alice)
//!     .expect("seeded");
//! assert!(!receipt.shares().is_zero());
//!
//! // 3. Quote, then swap with the quote as the slippage floor.
//! let quoted = pool
//!     .quote(Amount::new(10), SwapDirection::AToB)
//!     .expect("quoted");
//! let outcome = pool
//!     .swap(Amount::new(10), SwapDirection::AToB, alice, quoted)
//!     .expect("swap executed");
//! assert_eq!(outcome.amount_out(), quoted);
//!
//! // 4. Redeem the full position; the pool is empty again.
//! pool.remove_liquidity(receipt.shares(), alice)
//!     .expect("redeemed");
//! assert!(!pool.is_seeded());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐
//! │     Host      │  transaction environment / indexer
//! └───────┬───────┘
//!         │ execute(id, op)
//!         ▼
//! ┌───────────────┐
//! │   Registry    │  one lock per pool, pools independent
//! └───────┬───────┘
//!         ▼
//! ┌───────────────┐      ┌───────────────┐
//! │     Pool      │◄─────│   Custody     │  measured balance deltas
//! └───────┬───────┘      └───────────────┘
//!         ▼
//! ┌───────────────┐
//! │    Domain     │  Amount, Shares, FeeRate, SwapDirection, …
//! └───────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated newtypes: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`FeeRate`](domain::FeeRate), … |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): token pair + fee, validated once |
//! | [`pool`] | The engine: swaps, liquidity accounting, snapshots |
//! | [`event`] | [`PoolEvent`](event::PoolEvent) log and reserve replay |
//! | [`custody`] | [`AssetCustody`](custody::AssetCustody) capability trait and the custodial wrapper |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry): per-pool serialization, cross-pool parallelism |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod custody;
pub mod domain;
pub mod error;
pub mod event;
pub mod pool;
pub mod prelude;
pub mod registry;

#[cfg(test)]
mod proptests;
