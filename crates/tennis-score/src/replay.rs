//! Rebuild a score from a recorded point log

use serde::{Deserialize, Serialize};

use crate::engine::{apply_point, PointOutcome};
use crate::error::ScoreError;
use crate::format::{MatchConfig, Side};
use crate::score::MatchScore;

/// Result of a single point
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointResult {
    /// 0-based position in the point log
    pub index: usize,
    pub side: Side,
    pub outcome: PointOutcome,
    pub games_a: u8,
    pub games_b: u8,
    pub sets_a: u8,
    pub sets_b: u8,
}

/// Result of replaying a whole point log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReplay {
    pub points: Vec<PointResult>,
    pub score: MatchScore,
}

impl MatchReplay {
    /// Points that won a game, set or match.
    pub fn deciding_points(&self) -> impl Iterator<Item = &PointResult> + '_ {
        self.points
            .iter()
            .filter(|p| !matches!(p.outcome, PointOutcome::Point(_)))
    }
}

/// Play `points` in order from a fresh score.
///
/// A point logged after the match was decided means the log is corrupt,
/// so it is an error rather than a silent no-op.
pub fn replay_points(config: &MatchConfig, points: &[Side]) -> Result<MatchReplay, ScoreError> {
    let mut score = config.initialize();
    let mut results = Vec::with_capacity(points.len());

    for (index, &side) in points.iter().enumerate() {
        if score.is_decided() {
            log::warn!("point log continues after the match at point {}", index);
            return Err(ScoreError::PointAfterMatchEnd { index });
        }

        let outcome = apply_point(&mut score, side, config.match_format, config.game_format);
        results.push(PointResult {
            index,
            side,
            outcome,
            games_a: score.games_a,
            games_b: score.games_b,
            sets_a: score.sets_a,
            sets_b: score.sets_b,
        });
    }

    log::debug!("replayed {} points: {}", results.len(), score);
    Ok(MatchReplay { points: results, score })
}
