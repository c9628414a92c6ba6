//! End-to-end pool walkthrough: seed, quote, swap, join, exit.
//!
//! # Run
//!
//! ```bash
//! cargo run --example pool_lifecycle
//! ```

use xyk_pool::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    println!("=== Constant-Product Pool Engine ===\n");

    // ── 1. Bind a pool to two tokens and the standard 0.3% fee ─────────
    let config = PoolConfig::new(
        TokenId::from_bytes([1u8; 32]),
        TokenId::from_bytes([2u8; 32]),
        FeeRate::STANDARD,
    )?;
    let mut pool = Pool::initialize(config)?;
    println!("Pool created: fee {}", pool.fee_rate());

    // ── 2. Alice seeds the pool and fixes the 1:2 rate ──────────────────
    let alice = ProviderId::from_bytes([0xaa; 32]);
    let seed = pool.add_liquidity(Amount::new(100_000), Amount::new(200_000), alice)?;
    println!("\n--- Seed deposit ---");
    println!("  Consumed:    {} A + {} B", seed.amount_a(), seed.amount_b());
    println!("  Shares:      {}", seed.shares());

    // ── 3. Quote first, then swap with the quote as the floor ───────────
    let bob = ProviderId::from_bytes([0xbb; 32]);
    let quoted = pool.quote(Amount::new(1_000), SwapDirection::AToB)?;
    let outcome = pool.swap(Amount::new(1_000), SwapDirection::AToB, bob, quoted)?;
    println!("\n--- Swap 1 000 A→B ---");
    println!("  Quoted:      {quoted}");
    println!("  Executed:    {outcome}");

    let (reserve_a, reserve_b) = pool.reserves();
    println!("  Reserves:    {reserve_a} A / {reserve_b} B");

    // ── 4. Bob joins; excess B above the ratio is not consumed ──────────
    let join = pool.add_liquidity(Amount::new(10_000), Amount::new(30_000), bob)?;
    println!("\n--- Join deposit (offered 30 000 B) ---");
    println!("  Consumed:    {} A + {} B", join.amount_a(), join.amount_b());
    println!("  Shares:      {}", join.shares());

    // ── 5. Bob exits; redemption is share-proportional ──────────────────
    let exit = pool.remove_liquidity(join.shares(), bob)?;
    println!("\n--- Exit ---");
    println!("  Returned:    {} A + {} B", exit.amount_a(), exit.amount_b());

    // ── 6. The event log replays to the live reserves ────────────────────
    let (replay_a, replay_b) = xyk_pool::event::replay(pool.events())?;
    let (live_a, live_b) = pool.reserves();
    println!("\n--- Event log ({} entries) ---", pool.events().len());
    println!("  Replayed:    {replay_a} A / {replay_b} B");
    println!("  Live:        {live_a} A / {live_b} B");
    assert_eq!((replay_a, replay_b), (live_a, live_b));

    println!("\n=== Done ===");
    Ok(())
}
