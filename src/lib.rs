//! Poker hand evaluation and equity.
//!
//! Hands are evaluated from a 52-bit card mask through 13-bit rank lookup
//! tables into a single packed [`Value`] whose integer order is the poker
//! order. On top of that sit a constrained best-hand search ([`evaluate`]),
//! an exhaustive equity engine ([`odds`]) and a Monte Carlo [`Simulation`]
//! that can be pulled as an iterator or spawned as a cancellable task.
pub mod cards;
pub mod combos;
pub mod error;
pub mod eval;
pub mod odds;
pub mod showdown;
pub mod variant;

pub use cards::*;
pub use combos::*;
pub use error::*;
pub use eval::*;
pub use odds::*;
pub use showdown::*;
pub use variant::*;

// ============================================================================
// CARD COUNTS
// ============================================================================
/// Cards in a made poker hand.
pub const HAND_SIZE: usize = 5;
/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;
/// Distinct ranks, and the width of every rank submask.
pub const RANK_COUNT: usize = 13;

// ============================================================================
// SIMULATION
// ============================================================================
/// Samples drawn between two progress reports unless configured otherwise.
pub const SIMULATION_BATCH: u64 = 1000;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO, or at the level named by `RUST_LOG`.
#[cfg(feature = "logging")]
pub fn log() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
}
