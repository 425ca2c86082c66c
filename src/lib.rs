//! Stone-Rules: a rules engine for Go and five-in-a-row games.
//!
//! The crate tracks board positions and game lines under configurable rule
//! sets, and decides legality, game termination and final results.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and rule thresholds
//! - [`hash`] - 128-bit Zobrist fingerprints
//! - [`board`] - Padded board, captures, suicide and simple ko
//! - [`rules`] - Rule descriptors, presets, text and JSON forms
//! - [`history`] - Game lines: superko, encore phases, scoring
//! - [`pass_alive`] - Benson pass-alive analysis and area ownership
//! - [`priority`] - Five-in-a-row line classification
//! - [`win`] - Connection-game terminal checks and pre-search results
//! - [`oracle`] - Interfaces for forbidden-point and VCF solvers
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use stone_rules::board::{Board, Color};
//! use stone_rules::constants::PASS_LOC;
//! use stone_rules::history::BoardHistory;
//! use stone_rules::rules::Rules;
//!
//! let mut board = Board::new(9, 9).unwrap();
//! let mut hist = BoardHistory::new(&board, Color::Black, Rules::tromp_taylorish()).unwrap();
//!
//! let center = board.loc(4, 4);
//! hist.play(&mut board, center, Color::Black).unwrap();
//! hist.play(&mut board, PASS_LOC, Color::White).unwrap();
//! hist.play(&mut board, PASS_LOC, Color::Black).unwrap();
//!
//! assert!(hist.is_game_over());
//! assert_eq!(hist.winner(), Some(Color::Black));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod hash;
pub mod history;
pub mod oracle;
pub mod pass_alive;
pub mod priority;
pub mod rules;
pub mod win;

pub use board::{Board, Color, Loc};
pub use error::{BoardError, IllegalMove, RulesError};
pub use history::BoardHistory;
pub use rules::Rules;
