//! Terminal-state evaluation for connection games.
//!
//! [`check_winner_after_played`] decides whether the move just played ended
//! the game. [`ResultsBeforeNN`] summarizes, for the player about to move,
//! everything that can be decided without search: immediate wins, forced
//! blocks, open fours, victory-condition-N pass budgets and, optionally,
//! forced wins proven by the VCF oracle.

use crate::board::{Board, Color, Loc};
use crate::constants::{
    LIFE_FOUR_MIN_REMAINING, PASS_LOC, UNBOUNDED_REMAINING, VCN_DECIDED_TOTAL, VCN_PASS_BASE, VCN_THREAT_TOTAL,
};
use crate::history::BoardHistory;
use crate::oracle::{ForbiddenOracle, VcfOracle, VcfResult};
use crate::priority::{self, MovePriority};
use crate::rules::{BasicRule, Rules};

/// Game state after a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terminal {
    Undecided,
    Draw,
    Win(Color),
}

/// Has the stone `pla` just placed at `loc` turned out to be on a forbidden
/// point? The oracle is asked about the position before the stone.
fn is_forbidden_already_played(board: &Board, loc: Loc, forbidden: &dyn ForbiddenOracle) -> bool {
    if loc == PASS_LOC || board.color_at(loc) != Some(Color::Black) {
        return false;
    }
    let mut before = board.clone();
    before.set_stone(loc, None);
    forbidden.is_forbidden(&before, loc)
}

/// Decide the game after `pla` played `loc` (already applied to `board`).
///
/// Rules are validated when the history is built, so unsupported
/// combinations never reach here.
pub fn check_winner_after_played(
    board: &Board,
    hist: &BoardHistory,
    pla: Color,
    loc: Loc,
    forbidden: &dyn ForbiddenOracle,
) -> Terminal {
    winner_under_rules(board, hist.rules(), pla, loc, forbidden)
}

fn winner_under_rules(
    board: &Board,
    rules: &Rules,
    pla: Color,
    loc: Loc,
    forbidden: &dyn ForbiddenOracle,
) -> Terminal {
    let opp = pla.opp();
    let my_passes = board.pass_num(pla);
    let opp_passes = board.pass_num(opp);

    if loc == PASS_LOC {
        match (rules.vc_side(), rules.vc_level()) {
            (Some(vc_side), Some(vc_level)) => {
                // The attacking side gives up by passing.
                if vc_side == pla {
                    return Terminal::Win(opp);
                }
                if my_passes >= VCN_PASS_BASE.saturating_sub(u32::from(vc_level)) {
                    return Terminal::Win(pla);
                }
            }
            _ => {
                if opp_passes > 0 {
                    return if rules.first_pass_win {
                        Terminal::Win(opp)
                    } else {
                        Terminal::Draw
                    };
                }
            }
        }
    }

    if rules.basic_rule == BasicRule::Renju
        && pla == Color::Black
        && is_forbidden_already_played(board, loc, forbidden)
    {
        return Terminal::Win(opp);
    }

    if priority::move_priority_assume_legal(board, rules, pla, loc) == MovePriority::SuddenWin {
        return Terminal::Win(pla);
    }

    // Validation keeps a cutoff away from VCN games; should one get here the
    // attacker has run out of moves.
    if rules.max_moves != 0 && board.move_num() >= rules.max_moves {
        return match rules.vc_side() {
            None => Terminal::Draw,
            Some(vc_side) => Terminal::Win(vc_side.opp()),
        };
    }

    Terminal::Undecided
}

/// What is known about a position before any search, from the point of view
/// of the player to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResultsBeforeNN {
    /// Decided winner, if any.
    pub winner: Option<Color>,
    /// The move to play: the winning point, the forced block, or pass when
    /// the VCN pass budget decides the game.
    pub my_only_loc: Option<Loc>,
    /// Whether the VCF oracle was consulted.
    pub calculated_vcf: bool,
    pub my_vcf_result: Option<VcfResult>,
    pub opp_vcf_result: Option<VcfResult>,
}

impl ResultsBeforeNN {
    fn undecided() -> Self {
        Self {
            winner: None,
            my_only_loc: None,
            calculated_vcf: false,
            my_vcf_result: None,
            opp_vcf_result: None,
        }
    }

    /// Evaluate the position for `next_player`.
    ///
    /// The VCF oracle is only consulted when `include_vcf` is set and no
    /// move cutoff is configured.
    pub fn compute(
        board: &Board,
        hist: &BoardHistory,
        next_player: Color,
        include_vcf: bool,
        forbidden: &dyn ForbiddenOracle,
        vcf: &dyn VcfOracle,
    ) -> Self {
        let rules = hist.rules();
        let opp = next_player.opp();
        let will_calculate_vcf = include_vcf && rules.max_moves == 0;
        let mut result = Self::undecided();

        // Check five and four, scanning column by column
        let mut opp_has_four = false;
        let mut life_four_loc = None;
        for loc in board.locs_by_column() {
            match priority::move_priority(board, rules, next_player, loc, forbidden) {
                MovePriority::SuddenWin => {
                    result.winner = Some(next_player);
                    result.my_only_loc = Some(loc);
                    return result;
                }
                MovePriority::OnlyNonLoseMoves => {
                    opp_has_four = true;
                    result.my_only_loc = Some(loc);
                }
                MovePriority::Winning => life_four_loc = Some(loc),
                MovePriority::Normal | MovePriority::Illegal => {}
            }
        }

        if let (Some(vc_side), Some(level)) = (rules.vc_side(), rules.vc_level()) {
            let total = u32::from(level) + board.black_pass_num() + board.white_pass_num();
            if vc_side == next_player {
                if total == VCN_DECIDED_TOTAL {
                    result.winner = Some(opp);
                    result.my_only_loc = None;
                    return result;
                }
            } else if total == VCN_DECIDED_TOTAL || (total == VCN_THREAT_TOTAL && !opp_has_four) {
                result.winner = Some(next_player);
                result.my_only_loc = Some(PASS_LOC);
                return result;
            }
        }

        if opp_has_four {
            return result;
        }

        if let Some(loc) = life_four_loc {
            let remaining = if rules.max_moves == 0 {
                UNBOUNDED_REMAINING
            } else {
                i64::from(rules.max_moves) - i64::from(board.move_num())
            };
            if remaining >= LIFE_FOUR_MIN_REMAINING {
                result.winner = Some(next_player);
            }
            result.my_only_loc = Some(loc);
            return result;
        }

        if !will_calculate_vcf {
            return result;
        }

        result.calculated_vcf = true;
        result.opp_vcf_result = Some(vcf.solve(board, rules, opp));
        let mine = vcf.solve(board, rules, next_player);
        result.my_vcf_result = Some(mine);
        if let VcfResult::Win(loc) = mine {
            log::trace!("VCF proves a win for {next_player} at {}", board.loc_to_string(loc));
            result.winner = Some(next_player);
            result.my_only_loc = Some(loc);
        }
        result
    }
}
