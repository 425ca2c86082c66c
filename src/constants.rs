//! Board geometry limits and rule thresholds.
//!
//! The board uses a 1D array representation with padding for boundary
//! detection. Each row is followed by a single padding cell that doubles as
//! the left edge of the next row, and there is one padding row above and
//! below the playable area:
//!
//! - `stride = x_size + 1`
//! - `loc(x, y) = (x + 1) + (y + 1) * stride`
//!
//! Index 0 is always padding, so it is reused as the pass location.

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest supported board edge length.
pub const MAX_LEN: usize = 20;

/// Total board array size including all padding for the largest board.
pub const MAX_ARR_SIZE: usize = (MAX_LEN + 1) * (MAX_LEN + 2) + 1;

/// Number of stones in a row that wins a connection game.
pub const WIN_LENGTH: usize = 5;

// =============================================================================
// Special Move Values
// =============================================================================

/// Pass move marker (index 0 is padding, so safe to use).
pub const PASS_LOC: usize = 0;

// =============================================================================
// Go-family Rules
// =============================================================================

/// Highest encore phase. A pass sequence completed here ends the game.
pub const MAX_ENCORE_PHASE: u8 = 2;

/// Consecutive ending passes that finish a phase (or the game).
pub const ENDING_PASSES: u32 = 2;

// =============================================================================
// Connection-family Rules
// =============================================================================

/// Remaining moves needed to convert an open four before the move cutoff.
pub const LIFE_FOUR_MIN_REMAINING: i64 = 3;

/// Stand-in for "unbounded" remaining moves when no cutoff is configured.
pub const UNBOUNDED_REMAINING: i64 = 10_000;

/// Passes by the defending side needed to win under VCN: `VCN_PASS_BASE - level`.
pub const VCN_PASS_BASE: u32 = 6;

/// VCN level plus total passes at which the game is decided outright.
pub const VCN_DECIDED_TOTAL: u32 = 5;

/// VCN level plus total passes at which the defender wins unless the
/// attacker is threatening five.
pub const VCN_THREAT_TOTAL: u32 = 4;

/// Highest supported VCN level.
pub const VCN_MAX_LEVEL: u8 = 5;
