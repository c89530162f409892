//! Error types for scoreboard operations

use thiserror::Error;

/// Errors raised by the game clock and match-state engine.
///
/// Duration parsing is the only fallible core operation; everything else
/// (score, fouls, period, match replacement) is total and clamps instead of
/// rejecting.
#[derive(Debug, Error)]
pub enum ScoreboardError {
    #[error("invalid duration format (expected MM:SS): {input:?}")]
    InvalidDurationFormat { input: String },
}
