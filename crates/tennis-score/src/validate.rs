//! Snapshot validation
//!
//! For scores that come back from storage. Counters are unsigned, so a
//! negative value never gets this far: it fails at deserialization.

use crate::error::ScoreError;
use crate::format::{GameFormat, Side};
use crate::score::{GameState, MatchScore, SetMode};

const POINT_VALUES: [u8; 4] = [0, 15, 30, 40];

/// True when `score` is a consistent snapshot for `game_format`.
pub fn validate(score: &MatchScore, game_format: GameFormat) -> bool {
    check(score, game_format).is_ok()
}

/// Check a snapshot and report the first violation.
///
/// Checks:
/// - `current_set` is at least 1 and matches the number of set records
/// - set records are numbered 1, 2, 3, ... in order
/// - only the last set may be open; it is open exactly while the match is undecided
/// - every set is played the way `game_format` plays sets
/// - regular point values are 0, 15, 30 or 40
/// - the open set's games match the running game count
/// - no set point or match point is flagged on a decided match
pub fn check(score: &MatchScore, game_format: GameFormat) -> Result<(), ScoreError> {
    ensure_playable_shape(score, game_format)?;

    for (index, set) in score.sets.iter().enumerate() {
        if set.set_number as usize != index + 1 {
            return Err(ScoreError::SetNumberOutOfOrder {
                index,
                number: set.set_number,
            });
        }
        if !set.is_completed && index + 1 != score.sets.len() {
            return Err(ScoreError::OpenSetNotLast(set.set_number));
        }
    }

    let last = score.current_set_record().ok_or(ScoreError::NoSetRecords)?;
    if score.is_decided() {
        if !last.is_completed {
            return Err(ScoreError::CompletedSetOpen(last.set_number));
        }
        if score.is_set_point || score.is_match_point {
            return Err(ScoreError::FlagsAfterWin);
        }
        return Ok(());
    }

    if last.is_completed {
        return Err(ScoreError::NoOpenSet(last.set_number));
    }
    check_points(score, game_format)?;

    let recorded = (last.games_a, last.games_b);
    let current = (score.games_a, score.games_b);
    if recorded != current {
        return Err(ScoreError::SetRecordOutOfSync {
            set: last.set_number,
            recorded,
            current,
        });
    }

    Ok(())
}

/// The subset of [`check`] a point award depends on. Bookkeeping
/// mismatches (numbering, flags) are left to `check`.
pub(crate) fn ensure_playable(score: &MatchScore, game_format: GameFormat) -> Result<(), ScoreError> {
    ensure_playable_shape(score, game_format)?;
    if let Some(last) = score.current_set_record() {
        if last.is_completed {
            return Err(ScoreError::NoOpenSet(last.set_number));
        }
    }
    check_points(score, game_format)
}

fn ensure_playable_shape(score: &MatchScore, game_format: GameFormat) -> Result<(), ScoreError> {
    if score.current_set < 1 {
        return Err(ScoreError::InvalidCurrentSet(score.current_set));
    }
    if score.sets.is_empty() {
        return Err(ScoreError::NoSetRecords);
    }
    if score.sets.len() != score.current_set as usize {
        return Err(ScoreError::SetCountMismatch {
            current_set: score.current_set,
            records: score.sets.len(),
        });
    }

    let direct = game_format.is_direct_games();
    for set in &score.sets {
        let direct_set = matches!(set.mode, SetMode::DirectGames);
        if direct != direct_set {
            return Err(ScoreError::FormatMismatch(set.set_number));
        }
    }
    Ok(())
}

/// Point values only mean something in regular play.
fn check_points(score: &MatchScore, game_format: GameFormat) -> Result<(), ScoreError> {
    if game_format.is_direct_games() {
        return Ok(());
    }
    if let GameState::Points { a, b } = score.game {
        for (side, value) in [(Side::A, a), (Side::B, b)] {
            if !POINT_VALUES.contains(&value) {
                return Err(ScoreError::InvalidPoints { side, value });
            }
        }
    }
    Ok(())
}
