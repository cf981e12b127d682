//! Score snapshot types
//!
//! A [`MatchScore`] is the whole state of a match. The engine never holds
//! state of its own: callers persist the snapshot and hand it back for the
//! next point.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::format::{GameFormat, MatchFormat, Side};

/// Points in the current regular game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    /// Tennis point values, each one of 0, 15, 30, 40.
    Points { a: u8, b: u8 },
    /// Level at 40-40 or beyond, nobody ahead.
    Deuce,
    /// One point ahead from deuce. Still a deuce game.
    Advantage(Side),
}

impl GameState {
    pub const LOVE_ALL: GameState = GameState::Points { a: 0, b: 0 };

    pub fn is_deuce(&self) -> bool {
        matches!(self, GameState::Deuce | GameState::Advantage(_))
    }

    pub fn advantage(&self) -> Option<Side> {
        match self {
            GameState::Advantage(side) => Some(*side),
            _ => None,
        }
    }

    /// Point value for `side`; both sides read 40 during deuce.
    pub fn points(&self, side: Side) -> u8 {
        match (self, side) {
            (GameState::Points { a, .. }, Side::A) => *a,
            (GameState::Points { b, .. }, Side::B) => *b,
            _ => 40,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::LOVE_ALL
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Points { a, b } => write!(f, "{}-{}", a, b),
            GameState::Deuce => f.write_str("deuce"),
            GameState::Advantage(side) => write!(f, "advantage {}", side),
        }
    }
}

/// How the games of a set are being decided
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetMode {
    /// Regular games, no tiebreak yet.
    Regular,
    /// Regular set that reached 6-6, with tiebreak points.
    Tiebreak { a: u8, b: u8 },
    /// Tiebreak-format match: the single set is scored in games.
    DirectGames,
}

/// One set of the match, in the order played
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    /// 1-based
    pub set_number: u8,
    pub games_a: u8,
    pub games_b: u8,
    pub mode: SetMode,
    pub is_completed: bool,
}

impl SetRecord {
    pub fn open(set_number: u8, mode: SetMode) -> Self {
        Self {
            set_number,
            games_a: 0,
            games_b: 0,
            mode,
            is_completed: false,
        }
    }

    pub fn games(&self, side: Side) -> u8 {
        match side {
            Side::A => self.games_a,
            Side::B => self.games_b,
        }
    }

    /// True for a 6-6 tiebreak and for a direct-games set.
    pub fn is_tiebreak(&self) -> bool {
        !matches!(self.mode, SetMode::Regular)
    }

    /// Tiebreak points, present only once a regular set reached 6-6.
    pub fn tiebreak_points(&self, side: Side) -> Option<u8> {
        match (self.mode, side) {
            (SetMode::Tiebreak { a, .. }, Side::A) => Some(a),
            (SetMode::Tiebreak { b, .. }, Side::B) => Some(b),
            _ => None,
        }
    }
}

/// Full score of a match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    /// Current game; stays at love-all in direct-games formats.
    pub game: GameState,
    /// Games in the current set (or the running total in direct-games formats).
    pub games_a: u8,
    pub games_b: u8,
    pub sets_a: u8,
    pub sets_b: u8,
    /// 1-based
    pub current_set: u8,
    pub sets: Vec<SetRecord>,
    pub is_match_point: bool,
    pub is_set_point: bool,
    pub winner: Option<Side>,
}

/// Fresh score for a match about to start
///
/// Always exactly one open set. Direct-games formats play that single set
/// as the whole match, so it starts out as a tiebreak set.
pub fn initialize(match_format: MatchFormat, game_format: GameFormat) -> MatchScore {
    let mode = if game_format.is_direct_games() {
        SetMode::DirectGames
    } else {
        SetMode::Regular
    };
    log::debug!("new {} match, {} games", match_format, game_format);

    MatchScore {
        game: GameState::LOVE_ALL,
        games_a: 0,
        games_b: 0,
        sets_a: 0,
        sets_b: 0,
        current_set: 1,
        sets: vec![SetRecord::open(1, mode)],
        is_match_point: false,
        is_set_point: false,
        winner: None,
    }
}

impl MatchScore {
    pub fn points(&self, side: Side) -> u8 {
        self.game.points(side)
    }

    pub fn is_deuce(&self) -> bool {
        self.game.is_deuce()
    }

    pub fn advantage(&self) -> Option<Side> {
        self.game.advantage()
    }

    pub fn games(&self, side: Side) -> u8 {
        match side {
            Side::A => self.games_a,
            Side::B => self.games_b,
        }
    }

    pub fn sets_won(&self, side: Side) -> u8 {
        match side {
            Side::A => self.sets_a,
            Side::B => self.sets_b,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// The set being played, or the final set once the match is decided.
    pub fn current_set_record(&self) -> Option<&SetRecord> {
        self.sets.last()
    }

    /// Tiebreak points of the open set, if it is in a 6-6 tiebreak.
    pub fn tiebreak_points(&self, side: Side) -> Option<u8> {
        self.current_set_record()
            .filter(|set| !set.is_completed)
            .and_then(|set| set.tiebreak_points(side))
    }

    /// Load a persisted snapshot.
    pub fn from_json(json: &str) -> Result<Self, ScoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ScoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) fn games_mut(&mut self, side: Side) -> &mut u8 {
        match side {
            Side::A => &mut self.games_a,
            Side::B => &mut self.games_b,
        }
    }

    pub(crate) fn sets_won_mut(&mut self, side: Side) -> &mut u8 {
        match side {
            Side::A => &mut self.sets_a,
            Side::B => &mut self.sets_b,
        }
    }

    pub(crate) fn open_set_mut(&mut self) -> Option<&mut SetRecord> {
        self.sets.last_mut().filter(|set| !set.is_completed)
    }

    /// Copy the running game count into the open set record.
    pub(crate) fn sync_open_set(&mut self) {
        let (a, b) = (self.games_a, self.games_b);
        if let Some(set) = self.open_set_mut() {
            set.games_a = a;
            set.games_b = b;
        }
    }
}

/// Compact scoreboard line, e.g. `6-4 3-2 30-15` or `7-6(7-5) 6-3 winner A`.
impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for set in &self.sets {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}-{}", set.games_a, set.games_b)?;
            if let (SetMode::Tiebreak { a, b }, true) = (set.mode, set.is_completed) {
                write!(f, "({}-{})", a, b)?;
            }
        }

        if let Some(side) = self.winner {
            return write!(f, " winner {}", side);
        }
        match self.current_set_record().map(|set| set.mode) {
            Some(SetMode::Regular) => write!(f, " {}", self.game),
            Some(SetMode::Tiebreak { a, b }) => write!(f, " tiebreak {}-{}", a, b),
            _ => Ok(()),
        }
    }
}
