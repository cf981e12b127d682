//! Scoring errors

use crate::format::Side;

/// Errors raised when a snapshot or a caller-supplied value cannot be scored.
///
/// Awarding a point to a decided match is not an error; see
/// [`award_point`](crate::award_point).
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ScoreError {
    #[error("unknown side {0:?}")]
    UnknownSide(String),

    #[error("unknown {kind} {value:?}")]
    UnknownFormat { kind: &'static str, value: String },

    #[error("current set must be at least 1, got {0}")]
    InvalidCurrentSet(u8),

    #[error("score has no set records")]
    NoSetRecords,

    #[error("current set is {current_set} but {records} set records exist")]
    SetCountMismatch { current_set: u8, records: usize },

    #[error("set record {index} is numbered {number}")]
    SetNumberOutOfOrder { index: usize, number: u8 },

    #[error("set {0} is not the last set but is still open")]
    OpenSetNotLast(u8),

    #[error("match is undecided but set {0} is already completed")]
    NoOpenSet(u8),

    #[error("match is decided but set {0} is still open")]
    CompletedSetOpen(u8),

    #[error("side {side} has invalid point value {value}")]
    InvalidPoints { side: Side, value: u8 },

    #[error("set {0} is not played the way the game format requires")]
    FormatMismatch(u8),

    #[error("set {set} record shows {recorded:?} games but the score shows {current:?}")]
    SetRecordOutOfSync {
        set: u8,
        recorded: (u8, u8),
        current: (u8, u8),
    },

    #[error("match is decided but set point or match point is still flagged")]
    FlagsAfterWin,

    #[error("point {index} was played after the match was decided")]
    PointAfterMatchEnd { index: usize },

    #[error("invalid json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ScoreError {
    fn from(e: serde_json::Error) -> Self {
        ScoreError::Json(e.to_string())
    }
}
