//! Error types.
//!
//! - [`RulesError`] - unsupported or malformed rule configurations
//! - [`BoardError`] - bad board dimensions, board text, or coordinates
//! - [`IllegalMove`] - a rejected move; the board and history are untouched

use crate::board::Color;

/// Configuration errors. These are raised when a ruleset is constructed,
/// parsed, or attached to a game line, never in the middle of play.
#[derive(thiserror::Error, Debug)]
pub enum RulesError {
    #[error("unsupported rules {rules}: victory condition N cannot be combined with a move cutoff")]
    VcnWithMaxMoves { rules: String },

    #[error(
        "unsupported rules {rules}: first pass wins cannot be combined with victory condition N or a move cutoff"
    )]
    FirstPassWinConflict { rules: String },

    #[error("invalid VCN level {0}, expected 1..=5")]
    InvalidVcnLevel(u8),

    #[error("invalid komi {0}, must be finite and a multiple of 0.5")]
    InvalidKomi(f32),

    #[error("invalid encore phase {0}, expected 0..=2")]
    InvalidEncorePhase(u8),

    #[error("cannot parse rules {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("move {index} ({mv}) would be illegal under rules {rules}")]
    IllegalReplay {
        index: usize,
        mv: String,
        rules: String,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Board construction and coordinate errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {x_size}x{y_size} is outside 1..={max}")]
    InvalidSize {
        x_size: usize,
        y_size: usize,
        max: usize,
    },

    #[error("board text has {found} cells, expected {expected}")]
    WrongCellCount { expected: usize, found: usize },

    #[error("unexpected character {0:?} in board text")]
    BadCell(char),

    #[error("cannot parse location {0:?}")]
    BadLocation(String),
}

/// A move rejected by the legality check.
///
/// Displays in the conformance format, e.g. `Illegal: (5,0) O`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Illegal: ({x},{y}) {pla}")]
pub struct IllegalMove {
    pub x: usize,
    pub y: usize,
    pub pla: Color,
}
