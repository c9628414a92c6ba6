//! Pool configuration.

use serde::{Deserialize, Serialize};

use crate::domain::{FeeRate, TokenId};
use crate::error::PoolError;

/// Immutable parameters of a pool: the two traded tokens and the swap
/// fee.
///
/// Reserves are *not* part of the configuration — a pool is born empty
/// and seeded by its first deposit, which fixes the implied exchange
/// rate.
///
/// # Validation
///
/// - The two token identifiers must differ.
/// - The fee must satisfy `numerator < denominator` and
///   `denominator > 0` (enforced again here even though [`FeeRate`]
///   validates on construction, so a deserialized config is re-checked).
///
/// # Examples
///
/// ```
/// use xyk_pool::config::PoolConfig;
/// use xyk_pool::domain::{FeeRate, TokenId};
///
/// let config = PoolConfig::new(
///     TokenId::from_bytes([1u8; 32]),
///     TokenId::from_bytes([2u8; 32]),
///     FeeRate::STANDARD,
/// )
/// .expect("valid config");
/// assert_eq!(config.fee_rate(), FeeRate::STANDARD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    token_a: TokenId,
    token_b: TokenId,
    fee: FeeRate,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the tokens are
    /// identical or the fee is out of range.
    pub fn new(token_a: TokenId, token_b: TokenId, fee: FeeRate) -> crate::error::Result<Self> {
        let config = Self {
            token_a,
            token_b,
            fee,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-checks all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on identical tokens
    /// or an out-of-range fee.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.token_a == self.token_b {
            return Err(PoolError::InvalidConfiguration(
                "pool requires two distinct token identifiers",
            ));
        }
        self.fee.validate()
    }

    /// Returns the identifier of token A.
    #[must_use]
    pub const fn token_a(&self) -> TokenId {
        self.token_a
    }

    /// Returns the identifier of token B.
    #[must_use]
    pub const fn token_b(&self) -> TokenId {
        self.token_b
    }

    /// Returns the swap fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee
    }
}
