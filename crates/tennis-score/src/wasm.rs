//! WASM bindings for the scoring frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{award_point, initialize, replay_points, validate};
use crate::{GameFormat, MatchConfig, MatchFormat, MatchScore, Side};

fn parse_formats(match_format: &str, game_format: &str) -> Result<(MatchFormat, GameFormat), JsError> {
    let mf: MatchFormat = match_format
        .parse()
        .map_err(|e| JsError::new(&format!("Invalid match format: {}", e)))?;
    let gf: GameFormat = game_format
        .parse()
        .map_err(|e| JsError::new(&format!("Invalid game format: {}", e)))?;
    Ok((mf, gf))
}

fn parse_score(score_json: &str) -> Result<MatchScore, JsError> {
    MatchScore::from_json(score_json).map_err(|e| JsError::new(&format!("Invalid score: {}", e)))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Fresh score for a new match
///
/// # Arguments
/// * `match_format` - `best_of_3` or `best_of_5`
/// * `game_format` - `regular`, `tiebreak8` or `tiebreak10`
#[wasm_bindgen]
pub fn initial_score(match_format: &str, game_format: &str) -> Result<JsValue, JsError> {
    let (mf, gf) = parse_formats(match_format, game_format)?;
    to_js(&initialize(mf, gf))
}

/// Award a point and return the next score
///
/// # Arguments
/// * `score_json` - JSON serialized MatchScore
/// * `side` - `A`/`team1` or `B`/`team2`
/// * `match_format` - `best_of_3` or `best_of_5`
/// * `game_format` - `regular`, `tiebreak8` or `tiebreak10`
#[wasm_bindgen]
pub fn score_point(
    score_json: &str,
    side: &str,
    match_format: &str,
    game_format: &str,
) -> Result<JsValue, JsError> {
    let score = parse_score(score_json)?;
    let side: Side = side.parse().map_err(|e| JsError::new(&format!("{}", e)))?;
    let (mf, gf) = parse_formats(match_format, game_format)?;

    let next = award_point(&score, side, mf, gf)
        .map_err(|e| JsError::new(&format!("Cannot score point: {}", e)))?;
    to_js(&next)
}

/// Check a stored score. Never throws: unreadable input is just invalid.
#[wasm_bindgen]
pub fn is_valid_score(score_json: &str, game_format: &str) -> bool {
    let Ok(gf) = game_format.parse::<GameFormat>() else {
        return false;
    };
    match MatchScore::from_json(score_json) {
        Ok(score) => validate(&score, gf),
        Err(_) => false,
    }
}

/// Replay a point log with full point-by-point details
///
/// # Arguments
/// * `points` - array of side strings, in the order the points were played
///
/// # Returns
/// JSON serialized MatchReplay
#[wasm_bindgen]
pub fn replay_match(
    match_format: &str,
    game_format: &str,
    points: js_sys::Array,
) -> Result<JsValue, JsError> {
    let (mf, gf) = parse_formats(match_format, game_format)?;

    let mut sides = Vec::with_capacity(points.length() as usize);
    for (i, value) in points.iter().enumerate() {
        let name = value
            .as_string()
            .ok_or_else(|| JsError::new(&format!("Point {} is not a string", i)))?;
        let side: Side = name
            .parse()
            .map_err(|e| JsError::new(&format!("Point {}: {}", i, e)))?;
        sides.push(side);
    }

    let replay = replay_points(&MatchConfig::new(mf, gf), &sides)
        .map_err(|e| JsError::new(&format!("Replay failed: {}", e)))?;
    to_js(&replay)
}

/// Scoreboard line for a stored score, e.g. `6-4 3-2 30-15`
#[wasm_bindgen]
pub fn describe_score(score_json: &str) -> Result<String, JsError> {
    Ok(parse_score(score_json)?.to_string())
}
