//! Convenience re-exports for common types.
//!
//! A single import brings the whole working set into scope:
//!
//! ```rust
//! use xyk_pool::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::custody::{AssetCustody, CustodialPool, InMemoryVault};
pub use crate::domain::{
    Amount, FeeRate, LiquidityReceipt, ProviderId, Shares, SwapDirection, SwapOutcome, TokenId,
};
pub use crate::error::{PoolError, Result};
pub use crate::event::PoolEvent;
pub use crate::pool::{Pool, PoolSnapshot};
pub use crate::registry::{PoolId, PoolRegistry};
