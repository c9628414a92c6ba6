//! Unified error type for the pool engine.
//!
//! Every fallible operation in the crate returns [`PoolError`] through the
//! crate-local [`Result`] alias.  All variants are recoverable: a failed
//! call returns synchronously with zero side effects, and the caller may
//! retry with adjusted arguments.

use thiserror::Error;

/// Crate-local result alias over [`PoolError`].
pub type Result<T> = core::result::Result<T, PoolError>;

/// Errors produced by pool construction, swaps, and liquidity operations.
///
/// Variants carry either a short static context string or the offending
/// values, so callers can report the failure without re-deriving state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Pool parameters rejected at initialization: identical token
    /// identifiers or a fee outside `0 <= numerator < denominator`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A required amount argument was zero (or rounded down to zero).
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// The second-asset deposit is below the amount required to match the
    /// pool's current reserve ratio.
    #[error("token B deposit below required ratio: required {required}, supplied {supplied}")]
    InsufficientRatioAmount {
        /// Minimum token-B amount at the current ratio.
        required: u128,
        /// Token-B amount the caller supplied.
        supplied: u128,
    },

    /// A removal requested more shares than the caller's recorded position.
    #[error("share removal exceeds position: requested {requested}, held {held}")]
    InsufficientShares {
        /// Shares the caller asked to redeem.
        requested: u128,
        /// Shares the caller actually holds.
        held: u128,
    },

    /// The computed swap output truncates to zero; the input is too small
    /// relative to the reserves.
    #[error("swap output rounds to zero")]
    ZeroOutput,

    /// The computed output would meet or exceed the opposing reserve.
    #[error("swap output would drain the opposing reserve")]
    InsufficientLiquidity,

    /// The computed output fell below the caller's slippage guard.
    #[error("slippage guard tripped: computed {computed}, minimum {minimum}")]
    SlippageExceeded {
        /// Output the pool would have produced.
        computed: u128,
        /// Caller-supplied minimum acceptable output.
        minimum: u128,
    },

    /// A swap, quote, or removal was attempted against an empty pool.
    #[error("pool holds no liquidity")]
    PoolNotSeeded,

    /// An intermediate multiplication or addition exceeded `u128`.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A custody adapter could not cover a transfer from the named balance.
    #[error("custody balance insufficient: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer required.
        requested: u128,
        /// Amount actually available.
        available: u128,
    },

    /// No pool is registered under the given identifier.
    #[error("no pool registered under id {0}")]
    UnknownPool(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_configuration() {
        let e = PoolError::InvalidConfiguration("identical tokens");
        assert_eq!(format!("{e}"), "invalid configuration: identical tokens");
    }

    #[test]
    fn display_insufficient_ratio() {
        let e = PoolError::InsufficientRatioAmount {
            required: 200,
            supplied: 150,
        };
        let s = format!("{e}");
        assert!(s.contains("200"));
        assert!(s.contains("150"));
    }

    #[test]
    fn display_slippage() {
        let e = PoolError::SlippageExceeded {
            computed: 8,
            minimum: 9,
        };
        let s = format!("{e}");
        assert!(s.contains("computed 8"));
        assert!(s.contains("minimum 9"));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(PoolError::PoolNotSeeded, PoolError::PoolNotSeeded);
        assert_ne!(PoolError::PoolNotSeeded, PoolError::ZeroOutput);
    }

    #[test]
    fn errors_are_copy() {
        let e = PoolError::ZeroOutput;
        let copied = e;
        assert_eq!(e, copied);
    }
}
