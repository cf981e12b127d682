//! Tennis Score
//!
//! Point-by-point scoring for tournament tennis matches: regular games
//! with deuce, six-game sets with a tiebreak at 6-6, best of three or
//! five sets, and the single-set 8- and 10-game formats.
//! This crate is compiled to:
//! - Native (for the match service)
//! - WASM (for the scoring frontend)

mod engine;
mod error;
mod format;
mod replay;
mod score;
mod validate;

#[cfg(feature = "wasm")]
mod wasm;

pub use engine::{award_point, PointOutcome};
pub use error::ScoreError;
pub use format::{
    GameFormat, MatchConfig, MatchFormat, Side, GAMES_PER_SET, TIEBREAK_POINTS, WIN_MARGIN,
};
pub use replay::{replay_points, MatchReplay, PointResult};
pub use score::{initialize, GameState, MatchScore, SetMode, SetRecord};
pub use validate::{check, validate};
