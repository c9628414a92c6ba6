//! Domain events and event-log replay.
//!
//! Every state-changing pool operation appends exactly one event to the
//! pool's log.  The log is append-only and carries enough information
//! to reconstruct the reserve history by replay — [`replay`] is that
//! reconstruction, used by indexers and by the crate's own tests to
//! cross-check the engine.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, FeeRate, ProviderId, Shares, SwapDirection, TokenId};
use crate::error::PoolError;

/// A state transition recorded by the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolEvent {
    /// A pool was created, bound to its token pair and fee.
    PoolInitialized {
        /// Identifier of token A.
        token_a: TokenId,
        /// Identifier of token B.
        token_b: TokenId,
        /// Swap fee the pool will charge.
        fee: FeeRate,
    },
    /// A deposit minted shares.
    LiquidityAdded {
        /// Depositing provider.
        provider: ProviderId,
        /// Token-A amount consumed.
        amount_a: Amount,
        /// Token-B amount consumed (excess above the ratio is refunded
        /// and does not appear here).
        amount_b_used: Amount,
        /// Shares minted for the deposit.
        shares: Shares,
    },
    /// A withdrawal burned shares.
    LiquidityRemoved {
        /// Withdrawing provider.
        provider: ProviderId,
        /// Token-A amount paid out.
        amount_a: Amount,
        /// Token-B amount paid out.
        amount_b: Amount,
        /// Shares burned.
        shares: Shares,
    },
    /// A swap exchanged one reserve for the other.
    Swap {
        /// Caller that executed the swap.
        caller: ProviderId,
        /// Which reserve the input fed.
        direction: SwapDirection,
        /// Full input amount, fee included.
        amount_in: Amount,
        /// Output amount paid to the caller.
        amount_out: Amount,
    },
}

/// Reconstructs the final `(reserve_a, reserve_b)` from an event log.
///
/// Folding the log through the same reserve deltas the engine applies
/// yields exactly the engine's post-state; any divergence means the log
/// and the engine disagree.
///
/// # Errors
///
/// Returns [`PoolError::ArithmeticOverflow`] if the log is internally
/// inconsistent (a removal or swap output exceeding the running
/// reserve, or an addition overflowing `u128`).
pub fn replay(events: &[PoolEvent]) -> crate::error::Result<(Amount, Amount)> {
    let mut reserve_a = Amount::ZERO;
    let mut reserve_b = Amount::ZERO;

    for event in events {
        match *event {
            PoolEvent::PoolInitialized { .. } => {}
            PoolEvent::LiquidityAdded {
                amount_a,
                amount_b_used,
                ..
            } => {
                reserve_a = reserve_a
                    .checked_add(&amount_a)
                    .ok_or(PoolError::ArithmeticOverflow("replay: reserve A add"))?;
                reserve_b = reserve_b
                    .checked_add(&amount_b_used)
                    .ok_or(PoolError::ArithmeticOverflow("replay: reserve B add"))?;
            }
            PoolEvent::LiquidityRemoved {
                amount_a, amount_b, ..
            } => {
                reserve_a = reserve_a
                    .checked_sub(&amount_a)
                    .ok_or(PoolError::ArithmeticOverflow("replay: reserve A remove"))?;
                reserve_b = reserve_b
                    .checked_sub(&amount_b)
                    .ok_or(PoolError::ArithmeticOverflow("replay: reserve B remove"))?;
            }
            PoolEvent::Swap {
                direction,
                amount_in,
                amount_out,
                ..
            } => {
                let (new_in, new_out) = match direction {
                    SwapDirection::AToB => (
                        reserve_a.checked_add(&amount_in),
                        reserve_b.checked_sub(&amount_out),
                    ),
                    SwapDirection::BToA => (
                        reserve_b.checked_add(&amount_in),
                        reserve_a.checked_sub(&amount_out),
                    ),
                };
                let new_in =
                    new_in.ok_or(PoolError::ArithmeticOverflow("replay: swap input side"))?;
                let new_out =
                    new_out.ok_or(PoolError::ArithmeticOverflow("replay: swap output side"))?;
                match direction {
                    SwapDirection::AToB => {
                        reserve_a = new_in;
                        reserve_b = new_out;
                    }
                    SwapDirection::BToA => {
                        reserve_b = new_in;
                        reserve_a = new_out;
                    }
                }
            }
        }
    }

    Ok((reserve_a, reserve_b))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn provider(byte: u8) -> ProviderId {
        ProviderId::from_bytes([byte; 32])
    }

    fn initialized() -> PoolEvent {
        PoolEvent::PoolInitialized {
            token_a: TokenId::from_bytes([1u8; 32]),
            token_b: TokenId::from_bytes([2u8; 32]),
            fee: FeeRate::STANDARD,
        }
    }

    #[test]
    fn replay_empty_log() {
        let Ok((a, b)) = replay(&[]) else {
            panic!("expected Ok");
        };
        assert_eq!((a, b), (Amount::ZERO, Amount::ZERO));
    }

    #[test]
    fn replay_initialization_only() {
        let Ok((a, b)) = replay(&[initialized()]) else {
            panic!("expected Ok");
        };
        assert_eq!((a, b), (Amount::ZERO, Amount::ZERO));
    }

    #[test]
    fn replay_deposit_and_swap() {
        let log = [
            initialized(),
            PoolEvent::LiquidityAdded {
                provider: provider(1),
                amount_a: Amount::new(1_000),
                amount_b_used: Amount::new(1_000),
                shares: Shares::new(1_000),
            },
            PoolEvent::Swap {
                caller: provider(2),
                direction: SwapDirection::AToB,
                amount_in: Amount::new(10),
                amount_out: Amount::new(8),
            },
        ];
        let Ok((a, b)) = replay(&log) else {
            panic!("expected Ok");
        };
        assert_eq!(a, Amount::new(1_010));
        assert_eq!(b, Amount::new(992));
    }

    #[test]
    fn replay_full_withdrawal_returns_to_zero() {
        let log = [
            PoolEvent::LiquidityAdded {
                provider: provider(1),
                amount_a: Amount::new(500),
                amount_b_used: Amount::new(700),
                shares: Shares::new(591),
            },
            PoolEvent::LiquidityRemoved {
                provider: provider(1),
                amount_a: Amount::new(500),
                amount_b: Amount::new(700),
                shares: Shares::new(591),
            },
        ];
        let Ok((a, b)) = replay(&log) else {
            panic!("expected Ok");
        };
        assert_eq!((a, b), (Amount::ZERO, Amount::ZERO));
    }

    #[test]
    fn replay_rejects_inconsistent_log() {
        // Removal from an empty pool cannot be replayed.
        let log = [PoolEvent::LiquidityRemoved {
            provider: provider(1),
            amount_a: Amount::new(1),
            amount_b: Amount::new(1),
            shares: Shares::new(1),
        }];
        assert!(matches!(
            replay(&log),
            Err(PoolError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn replay_b_to_a_swap() {
        let log = [
            PoolEvent::LiquidityAdded {
                provider: provider(1),
                amount_a: Amount::new(100),
                amount_b_used: Amount::new(100),
                shares: Shares::new(100),
            },
            PoolEvent::Swap {
                caller: provider(2),
                direction: SwapDirection::BToA,
                amount_in: Amount::new(50),
                amount_out: Amount::new(33),
            },
        ];
        let Ok((a, b)) = replay(&log) else {
            panic!("expected Ok");
        };
        assert_eq!(a, Amount::new(67));
        assert_eq!(b, Amount::new(150));
    }

    #[test]
    fn events_serialize() {
        let e = PoolEvent::Swap {
            caller: provider(3),
            direction: SwapDirection::AToB,
            amount_in: Amount::new(10),
            amount_out: Amount::new(8),
        };
        let Ok(json) = serde_json::to_string(&e) else {
            panic!("serialize");
        };
        let Ok(back) = serde_json::from_str::<PoolEvent>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(e, back);
    }
}
