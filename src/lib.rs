//! Hand classification and comparison for Guandan.
//!
//! Four players, two teams, two 54-card decks. Given a set of cards the
//! engine decides which combination it is and how strong it is, and given
//! two plays it decides whether the second legally beats the first.
//!
//! ## Core Types
//!
//! - [`cards::Card`]: A physical card, one byte, including its deck copy
//! - [`cards::Hand`]: An unordered set of cards as a 128-bit bitmask
//! - [`cards::Deck`]: The 108-card pack
//!
//! ## Evaluation
//!
//! - [`evaluation::Level`]: The rank being climbed, and its Heart wildcard
//! - [`evaluation::Classifier`]: Shape search from king bomb down to single
//! - [`evaluation::Combo`]: A classified play: kind, strength, span
//! - [`evaluation::verdict`]: Family gate, then strength
//! - [`evaluation::validate`]: The single entry point for turn orchestration
//!
//! The engine is pure. The level is an explicit argument to every call, so
//! classification is safe to run from any number of threads at once.
pub mod cards;
pub mod evaluation;

#[cfg(feature = "server")]
pub mod console;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 4;
/// Cards in the two-deck pack.
pub const DECK_SIZE: usize = 108;
/// Cards dealt to each player.
pub const HAND_SIZE: usize = DECK_SIZE / N;

// ============================================================================
// COMBINATION LIMITS
// ============================================================================
/// Fewest cards in a straight or straight flush.
pub const MIN_STRAIGHT: usize = 5;
/// Fewest pairs in a pair straight.
pub const MIN_PAIR_STRAIGHT: usize = 3;
/// Fewest triples in a triple straight.
pub const MIN_TRIPLE_STRAIGHT: usize = 2;
/// Fewest cards in a plain bomb.
pub const MIN_BOMB: usize = 4;
/// Most cards in a plain bomb (every copy of one rank).
pub const MAX_BOMB: usize = 8;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable holding the console's starting level.
pub const LEVEL_VAR: &str = "GUANDAN_LEVEL";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Starting level from the environment, falling back to the default.
pub fn level() -> evaluation::Level {
    std::env::var(LEVEL_VAR)
        .ok()
        .and_then(|s| evaluation::Level::try_from(s.as_str()).ok())
        .unwrap_or_default()
}
