//! Sides, match formats and per-match configuration

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::score::MatchScore;

/// Games needed to take a regular set (with a two-game margin).
pub const GAMES_PER_SET: u8 = 6;

/// Points needed to take a set-deciding tiebreak (with a two-point margin).
pub const TIEBREAK_POINTS: u8 = 7;

/// Minimum lead for any game, set, tiebreak or direct-games win.
pub const WIN_MARGIN: u8 = 2;

/// One of the two competing players or teams
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

impl FromStr for Side {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "team1" => Ok(Side::A),
            "b" | "team2" => Ok(Side::B),
            _ => Err(ScoreError::UnknownSide(s.to_string())),
        }
    }
}

/// How games are scored. Fixed for the whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameFormat {
    /// Points within games, six-game sets, tiebreak to 7 at 6-6.
    Regular,
    /// One set scored directly in games, first to 8 by two.
    Tiebreak8,
    /// One set scored directly in games, first to 10 by two.
    Tiebreak10,
}

impl GameFormat {
    /// Games needed to win a direct-games match, `None` for regular play.
    pub fn target_games(self) -> Option<u8> {
        match self {
            GameFormat::Regular => None,
            GameFormat::Tiebreak8 => Some(8),
            GameFormat::Tiebreak10 => Some(10),
        }
    }

    pub fn is_direct_games(self) -> bool {
        self.target_games().is_some()
    }
}

impl fmt::Display for GameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameFormat::Regular => "regular",
            GameFormat::Tiebreak8 => "tiebreak8",
            GameFormat::Tiebreak10 => "tiebreak10",
        };
        f.write_str(name)
    }
}

impl FromStr for GameFormat {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(GameFormat::Regular),
            "tiebreak8" | "tiebreak-8" | "8" => Ok(GameFormat::Tiebreak8),
            "tiebreak10" | "tiebreak-10" | "10" => Ok(GameFormat::Tiebreak10),
            _ => Err(ScoreError::UnknownFormat {
                kind: "game format",
                value: s.to_string(),
            }),
        }
    }
}

/// Number of sets played. Fixed for the whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    #[serde(rename = "best_of_3")]
    BestOf3,
    #[serde(rename = "best_of_5")]
    BestOf5,
}

impl MatchFormat {
    pub fn sets_to_win(self) -> u8 {
        match self {
            MatchFormat::BestOf3 => 2,
            MatchFormat::BestOf5 => 3,
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFormat::BestOf3 => f.write_str("best_of_3"),
            MatchFormat::BestOf5 => f.write_str("best_of_5"),
        }
    }
}

impl FromStr for MatchFormat {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best_of_3" | "bestof3" | "bo3" | "3" => Ok(MatchFormat::BestOf3),
            "best_of_5" | "bestof5" | "bo5" | "5" => Ok(MatchFormat::BestOf5),
            _ => Err(ScoreError::UnknownFormat {
                kind: "match format",
                value: s.to_string(),
            }),
        }
    }
}

/// The two fixed parameters of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    pub match_format: MatchFormat,
    pub game_format: GameFormat,
}

impl MatchConfig {
    pub fn new(match_format: MatchFormat, game_format: GameFormat) -> Self {
        Self { match_format, game_format }
    }

    /// Best of three regular sets
    pub fn standard() -> Self {
        Self::new(MatchFormat::BestOf3, GameFormat::Regular)
    }

    /// Best of five regular sets
    pub fn grand_slam() -> Self {
        Self::new(MatchFormat::BestOf5, GameFormat::Regular)
    }

    /// Single direct-games set. The match format only matters for
    /// regular play, so it is left at best of three.
    pub fn pro_set(game_format: GameFormat) -> Self {
        Self::new(MatchFormat::BestOf3, game_format)
    }

    pub fn initialize(&self) -> MatchScore {
        crate::score::initialize(self.match_format, self.game_format)
    }

    pub fn award_point(&self, score: &MatchScore, side: Side) -> Result<MatchScore, ScoreError> {
        crate::engine::award_point(score, side, self.match_format, self.game_format)
    }

    pub fn validate(&self, score: &MatchScore) -> bool {
        crate::validate::validate(score, self.game_format)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}
