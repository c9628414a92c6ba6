//! Core domain value types for the pool engine.
//!
//! Every type here is a validated newtype: construction either cannot
//! fail or returns a typed error, and arithmetic on quantities is
//! checked rather than wrapping.  The engine's algorithms are written
//! entirely in terms of these types.

mod amount;
mod direction;
mod fee_rate;
mod liquidity_receipt;
mod provider;
mod shares;
mod swap_outcome;
mod token_id;

pub use amount::Amount;
pub use direction::SwapDirection;
pub use fee_rate::FeeRate;
pub use liquidity_receipt::LiquidityReceipt;
pub use provider::ProviderId;
pub use shares::Shares;
pub use swap_outcome::SwapOutcome;
pub use token_id::TokenId;
