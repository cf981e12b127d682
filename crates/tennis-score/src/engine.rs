//! Point-award engine
//!
//! Every call takes a snapshot and returns the next one:
//! point -> game -> set -> match. Regular play runs
//! `Points -> Deuce <-> Advantage -> game`, a 6-6 set switches to a
//! tiebreak to 7, and the direct-games formats count games only.

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::format::{GameFormat, MatchFormat, Side, GAMES_PER_SET, TIEBREAK_POINTS, WIN_MARGIN};
use crate::score::{GameState, MatchScore, SetMode, SetRecord};
use crate::validate::ensure_playable;

/// What a single point decided
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointOutcome {
    /// Point inside a game or tiebreak, nothing else changed hands.
    Point(Side),
    /// Game won; in direct-games formats every point is a game.
    Game(Side),
    /// Game won that levelled the set at 6-6.
    TiebreakStart,
    Set(Side),
    Match(Side),
}

/// Award one point to `side` and return the resulting score.
///
/// A decided match is returned unchanged. A snapshot that cannot be
/// played on (no open set, set list out of step, wrong format) is
/// rejected rather than repaired.
pub fn award_point(
    score: &MatchScore,
    side: Side,
    match_format: MatchFormat,
    game_format: GameFormat,
) -> Result<MatchScore, ScoreError> {
    if let Some(winner) = score.winner {
        log::warn!("point for {} ignored, match already won by {}", side, winner);
        return Ok(score.clone());
    }
    if let Err(e) = ensure_playable(score, game_format) {
        log::warn!("rejecting score snapshot: {}", e);
        return Err(e);
    }

    let mut next = score.clone();
    apply_point(&mut next, side, match_format, game_format);
    Ok(next)
}

/// Apply a point to a playable, undecided score.
pub(crate) fn apply_point(
    score: &mut MatchScore,
    side: Side,
    match_format: MatchFormat,
    game_format: GameFormat,
) -> PointOutcome {
    log::trace!("point {} at {}", side, score);

    if let Some(target) = game_format.target_games() {
        return award_direct_game(score, side, target);
    }
    match score.current_set_record().map(|set| set.mode) {
        Some(SetMode::Tiebreak { a, b }) => award_tiebreak_point(score, side, (a, b), match_format),
        _ => award_game_point(score, side, match_format),
    }
}

/// `won` has reached `target` and leads by the winning margin.
#[inline]
fn wins_with_margin(won: u8, lost: u8, target: u8) -> bool {
    won >= target && won.saturating_sub(lost) >= WIN_MARGIN
}

// ── Direct-games formats ─────────────────────────────────────────────

fn award_direct_game(score: &mut MatchScore, side: Side, target: u8) -> PointOutcome {
    let games = score.games(side).saturating_add(1);
    *score.games_mut(side) = games;
    score.sync_open_set();

    if wins_with_margin(games, score.games(side.opponent()), target) {
        // The single set is the whole match.
        *score.sets_won_mut(side) = score.sets_won(side).saturating_add(1);
        finish_match(score, side);
        return PointOutcome::Match(side);
    }

    // One game from the target and not behind. Looser than a true
    // lookahead: 9-9 in a first-to-10 counts.
    let on_brink = |score: &MatchScore, s: Side| {
        score.games(s) >= target - 1 && score.games(s) >= score.games(s.opponent())
    };
    let brink = on_brink(score, Side::A) || on_brink(score, Side::B);
    score.is_match_point = brink;
    score.is_set_point = brink;
    PointOutcome::Game(side)
}

// ── Regular games ────────────────────────────────────────────────────

fn next_point_value(points: u8) -> Option<u8> {
    match points {
        0 => Some(15),
        15 => Some(30),
        30 => Some(40),
        _ => None,
    }
}

fn award_game_point(score: &mut MatchScore, side: Side, match_format: MatchFormat) -> PointOutcome {
    let opp = side.opponent();

    match score.game {
        GameState::Advantage(leader) if leader == side => {
            return win_game(score, side, match_format);
        }
        // Opponent's advantage is erased, not handed over.
        GameState::Advantage(_) => score.game = GameState::Deuce,
        GameState::Deuce => score.game = GameState::Advantage(side),
        GameState::Points { a, b } => match next_point_value(score.game.points(side)) {
            Some(next) => {
                score.game = match side {
                    Side::A => GameState::Points { a: next, b },
                    Side::B => GameState::Points { a, b: next },
                };
            }
            // Reaching deuce hands the advantage straight to the scorer.
            None if score.game.points(opp) == 40 => score.game = GameState::Advantage(side),
            None => return win_game(score, side, match_format),
        },
    }

    PointOutcome::Point(side)
}

fn win_game(score: &mut MatchScore, side: Side, match_format: MatchFormat) -> PointOutcome {
    score.game = GameState::LOVE_ALL;
    let won = score.games(side).saturating_add(1);
    *score.games_mut(side) = won;
    score.sync_open_set();
    let lost = score.games(side.opponent());
    log::debug!("game {}, set {} at {}-{}", side, score.current_set, score.games_a, score.games_b);

    if wins_with_margin(won, lost, GAMES_PER_SET) {
        return win_set(score, side, match_format);
    }

    if won == GAMES_PER_SET && lost == GAMES_PER_SET {
        if let Some(set) = score.open_set_mut() {
            set.mode = SetMode::Tiebreak { a: 0, b: 0 };
        }
        log::debug!("set {} goes to a tiebreak", score.current_set);
        update_flags(score, match_format);
        return PointOutcome::TiebreakStart;
    }

    update_flags(score, match_format);
    PointOutcome::Game(side)
}

// ── Set tiebreak ─────────────────────────────────────────────────────

fn award_tiebreak_point(
    score: &mut MatchScore,
    side: Side,
    (a, b): (u8, u8),
    match_format: MatchFormat,
) -> PointOutcome {
    let (a, b) = match side {
        Side::A => (a.saturating_add(1), b),
        Side::B => (a, b.saturating_add(1)),
    };
    if let Some(set) = score.open_set_mut() {
        set.mode = SetMode::Tiebreak { a, b };
    }

    let (won, lost) = match side {
        Side::A => (a, b),
        Side::B => (b, a),
    };
    if wins_with_margin(won, lost, TIEBREAK_POINTS) {
        // Tiebreak points never count as games; the set goes down as 7-6.
        *score.games_mut(side) = GAMES_PER_SET + 1;
        *score.games_mut(side.opponent()) = GAMES_PER_SET;
        score.sync_open_set();
        log::debug!("tiebreak {}-{} to {}", a, b, side);
        return win_set(score, side, match_format);
    }

    update_flags(score, match_format);
    PointOutcome::Point(side)
}

// ── Sets and match ───────────────────────────────────────────────────

fn win_set(score: &mut MatchScore, side: Side, match_format: MatchFormat) -> PointOutcome {
    let sets = score.sets_won(side).saturating_add(1);
    *score.sets_won_mut(side) = sets;
    if let Some(set) = score.open_set_mut() {
        set.is_completed = true;
    }
    log::debug!(
        "set {} to {} {}-{}, sets {}-{}",
        score.current_set,
        side,
        score.games_a,
        score.games_b,
        score.sets_a,
        score.sets_b
    );

    if sets >= match_format.sets_to_win() {
        finish_match(score, side);
        return PointOutcome::Match(side);
    }

    score.current_set = score.current_set.saturating_add(1);
    score.games_a = 0;
    score.games_b = 0;
    score.game = GameState::LOVE_ALL;
    score.sets.push(SetRecord::open(score.current_set, SetMode::Regular));
    update_flags(score, match_format);
    PointOutcome::Set(side)
}

fn finish_match(score: &mut MatchScore, side: Side) {
    if let Some(set) = score.open_set_mut() {
        set.is_completed = true;
    }
    score.winner = Some(side);
    score.is_match_point = false;
    score.is_set_point = false;
    log::debug!("match won by {}: {}", side, score);
}

/// A side at five games or more and not behind could take the set with
/// the next game. Coarse on purpose: 5-5 and 6-6 both count.
fn on_set_point(score: &MatchScore, side: Side) -> bool {
    score.games(side) >= GAMES_PER_SET - 1 && score.games(side) >= score.games(side.opponent())
}

fn update_flags(score: &mut MatchScore, match_format: MatchFormat) {
    let needed = match_format.sets_to_win();
    let on_match_point = |score: &MatchScore, side: Side| {
        on_set_point(score, side) && score.sets_won(side).saturating_add(1) == needed
    };

    let match_point = on_match_point(score, Side::A) || on_match_point(score, Side::B);
    let set_point = on_set_point(score, Side::A) || on_set_point(score, Side::B);
    score.is_match_point = match_point;
    score.is_set_point = set_point;
}
