//! Concurrent multi-pool registry.
//!
//! Each pool's operations are read-then-write sequences over its
//! reserves, so calls against one pool must never interleave.  The
//! registry gives every pool its own [`Mutex`]; the sharded map only
//! guards registration, so operations on distinct pools proceed in
//! parallel with no contention between them.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::pool::Pool;

/// Opaque handle to a registered pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolId(u64);

impl PoolId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for PoolId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "pool#{}", self.0)
    }
}

/// Owns a set of independent pools and serializes access per pool.
///
/// # Examples
///
/// ```
/// use xyk_pool::config::PoolConfig;
/// use xyk_pool::domain::{Amount, FeeRate, ProviderId, TokenId};
/// use xyk_pool::registry::PoolRegistry;
///
/// let registry = PoolRegistry::new();
/// let config = PoolConfig::new(
///     TokenId::from_bytes([1u8; 32]),
///     TokenId::from_bytes([2u8; 32]),
///     FeeRate::STANDARD,
/// )
/// .expect("valid config");
///
/// let id = registry.create(config).expect("registered");
/// let alice = ProviderId::from_bytes([0xaa; 32]);
/// registry
///     .execute(id, |pool| {
///         pool.add_liquidity(Amount::new(1_000), Amount::new(1_000), alice)
///     })
///     .expect("seeded");
/// ```
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: DashMap<PoolId, Mutex<Pool>>,
    next_id: AtomicU64,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes a pool from `config` and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the configuration
    /// fails validation.
    pub fn create(&self, config: PoolConfig) -> crate::error::Result<PoolId> {
        let pool = Pool::initialize(config)?;
        let id = PoolId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.pools.insert(id, Mutex::new(pool));
        debug!("registered {}", id);
        Ok(id)
    }

    /// Registers an already-built pool (e.g. restored from a snapshot).
    pub fn register(&self, pool: Pool) -> PoolId {
        let id = PoolId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.pools.insert(id, Mutex::new(pool));
        id
    }

    /// Runs a state-changing operation against one pool under its
    /// exclusive lock.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnknownPool`] if `id` is not registered;
    /// otherwise whatever `op` returns.
    pub fn execute<R>(
        &self,
        id: PoolId,
        op: impl FnOnce(&mut Pool) -> crate::error::Result<R>,
    ) -> crate::error::Result<R> {
        let entry = self.pools.get(&id).ok_or(PoolError::UnknownPool(id.0))?;
        let mut pool = entry.lock();
        op(&mut pool)
    }

    /// Runs a read-only query against one pool.
    ///
    /// The pool lock is still taken — readers must not observe a
    /// half-applied transition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnknownPool`] if `id` is not registered.
    pub fn inspect<R>(
        &self,
        id: PoolId,
        op: impl FnOnce(&Pool) -> R,
    ) -> crate::error::Result<R> {
        let entry = self.pools.get(&id).ok_or(PoolError::UnknownPool(id.0))?;
        let pool = entry.lock();
        Ok(op(&pool))
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
