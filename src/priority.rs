//! Move priority classification for connection games.
//!
//! A candidate move is classified by scanning the four line directions
//! through it and counting contiguous stones on both sides, for the mover
//! and for the opponent:
//!
//! - [`MovePriority::SuddenWin`] - the move completes five (or an overline
//!   where overlines win for the mover)
//! - [`MovePriority::OnlyNonLoseMoves`] - the opponent would complete five
//!   here, so every other move loses
//! - [`MovePriority::Winning`] - the move makes an open four
//! - [`MovePriority::Normal`] - none of the above
//!
//! The most urgent direction decides.

use crate::board::{Board, Cell, Color, Loc};
use crate::constants::{PASS_LOC, WIN_LENGTH};
use crate::oracle::ForbiddenOracle;
use crate::rules::{BasicRule, Rules};

/// Urgency of a move, most urgent first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MovePriority {
    SuddenWin,
    OnlyNonLoseMoves,
    Winning,
    Normal,
    Illegal,
}

// =============================================================================
// Rule Tables
// =============================================================================

/// Does a line longer than five win for `pla`?
pub fn overline_wins(basic_rule: BasicRule, pla: Color) -> bool {
    match (basic_rule, pla) {
        (BasicRule::Freestyle, _) => true,
        (BasicRule::Standard, _) => false,
        (BasicRule::Renju, Color::White) => true,
        (BasicRule::Renju, Color::Black) => false,
    }
}

/// Is `pla` subject to forbidden points?
pub fn forbidden_points_apply(basic_rule: BasicRule, pla: Color) -> bool {
    matches!((basic_rule, pla), (BasicRule::Renju, Color::Black))
}

// =============================================================================
// Line Scanning
// =============================================================================

#[inline]
fn step(loc: Loc, dir: isize) -> Loc {
    loc.wrapping_add_signed(dir)
}

/// Count `pla` stones contiguous to `loc` in direction `dir`, not counting
/// `loc` itself. Also reports whether the line ends in a live empty point.
///
/// When overlines do not win, an empty end followed by another `pla` stone
/// is not live: filling it would make six.
fn connection_length_one_direction(
    board: &Board,
    pla: Color,
    overline_wins: bool,
    loc: Loc,
    dir: isize,
) -> (usize, bool) {
    let mut cur = loc;
    let mut count = 0;
    loop {
        cur = step(cur, dir);
        if !board.is_on_board(cur) {
            return (count, false);
        }
        match board.get(cur) {
            Cell::Stone(c) if c == pla => count += 1,
            Cell::Empty => {
                if !overline_wins {
                    let beyond = step(cur, dir);
                    if board.is_on_board(beyond) && board.get(beyond) == Cell::Stone(pla) {
                        return (count, false);
                    }
                }
                return (count, true);
            }
            _ => return (count, false),
        }
    }
}

/// Length of the `pla` line through `loc` along `dir` if a stone were there,
/// with the liveness of both ends.
fn line_through(board: &Board, pla: Color, overline_wins: bool, loc: Loc, dir: isize) -> (usize, bool, bool) {
    let (forward, live_forward) = connection_length_one_direction(board, pla, overline_wins, loc, dir);
    let (backward, live_backward) = connection_length_one_direction(board, pla, overline_wins, loc, -dir);
    (forward + backward + 1, live_forward, live_backward)
}

fn is_five(length: usize, overline_wins: bool) -> bool {
    length == WIN_LENGTH || (length > WIN_LENGTH && overline_wins)
}

fn priority_one_direction(
    board: &Board,
    pla: Color,
    overline_wins_me: bool,
    overline_wins_opp: bool,
    loc: Loc,
    dir: isize,
) -> MovePriority {
    let (my_len, my_live1, my_live2) = line_through(board, pla, overline_wins_me, loc, dir);
    let (opp_len, _, _) = line_through(board, pla.opp(), overline_wins_opp, loc, dir);

    if is_five(my_len, overline_wins_me) {
        return MovePriority::SuddenWin;
    }
    if is_five(opp_len, overline_wins_opp) {
        return MovePriority::OnlyNonLoseMoves;
    }
    if my_len == WIN_LENGTH - 1 && my_live1 && my_live2 {
        return MovePriority::Winning;
    }
    MovePriority::Normal
}

// =============================================================================
// Classification
// =============================================================================

/// Classify a move known to be on an empty point. Passes are `Normal`.
pub fn move_priority_assume_legal(board: &Board, rules: &Rules, pla: Color, loc: Loc) -> MovePriority {
    if loc == PASS_LOC {
        return MovePriority::Normal;
    }
    let me = overline_wins(rules.basic_rule, pla);
    let opp = overline_wins(rules.basic_rule, pla.opp());
    board
        .line_directions()
        .into_iter()
        .map(|dir| priority_one_direction(board, pla, me, opp, loc, dir))
        .min()
        .unwrap_or(MovePriority::Normal)
}

/// Classify any move. Occupied and off-board points are `Illegal`.
///
/// Under Renju an open four on a forbidden point cannot be played, so it
/// is downgraded to `Normal`.
pub fn move_priority(
    board: &Board,
    rules: &Rules,
    pla: Color,
    loc: Loc,
    forbidden: &dyn ForbiddenOracle,
) -> MovePriority {
    if loc == PASS_LOC {
        return MovePriority::Normal;
    }
    if !board.is_on_board(loc) || !board.is_empty_at(loc) {
        return MovePriority::Illegal;
    }
    let mp = move_priority_assume_legal(board, rules, pla, loc);
    if mp == MovePriority::Winning
        && forbidden_points_apply(rules.basic_rule, pla)
        && forbidden.is_forbidden(board, loc)
    {
        return MovePriority::Normal;
    }
    mp
}

/// Empty points where a `pla` stone would threaten to make five next move.
pub fn four_attack_locs(board: &Board, rules: &Rules, pla: Color) -> Vec<Loc> {
    let me = overline_wins(rules.basic_rule, pla);
    let mut scratch = board.clone();
    let mut out = Vec::new();

    for loc0 in board.locs_by_column() {
        if !board.is_empty_at(loc0) {
            continue;
        }
        scratch.set_stone(loc0, Some(pla));
        let makes_four = board.line_directions().into_iter().any(|dir| {
            [dir, -dir].into_iter().any(|d| {
                let mut loc1 = loc0;
                for _ in 0..WIN_LENGTH - 1 {
                    loc1 = step(loc1, d);
                    if !scratch.is_on_board(loc1) {
                        break;
                    }
                    if scratch.is_empty_at(loc1) && is_five(line_through(&scratch, pla, me, loc1, dir).0, me) {
                        return true;
                    }
                }
                false
            })
        });
        if makes_four {
            out.push(loc0);
        }
        scratch.set_stone(loc0, None);
    }
    out
}
