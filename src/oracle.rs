//! Interfaces to the external connection-game solvers.
//!
//! The engine consumes two black boxes:
//! - a forbidden-point finder for Renju (double-three, double-four,
//!   overline restrictions on black)
//! - a VCF solver that tries to prove a win by continuous fours
//!
//! Both are pure functions of their inputs. Plain closures implement the
//! traits, which is how tests supply scripted answers.

use crate::board::{Board, Color, Loc};
use crate::rules::Rules;

/// Decides whether an empty point is forbidden for black under Renju.
pub trait ForbiddenOracle {
    fn is_forbidden(&self, board: &Board, loc: Loc) -> bool;
}

/// Outcome of a VCF search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VcfResult {
    /// A forced win exists, starting at the given point.
    Win(Loc),
    /// No forced win: proven loss, or nothing found.
    NoWin,
    /// The search gave up before reaching a verdict.
    Inconclusive,
}

/// Searches for a forced win by continuous fours for `pla`.
pub trait VcfOracle {
    fn solve(&self, board: &Board, rules: &Rules, pla: Color) -> VcfResult;
}

impl<F> ForbiddenOracle for F
where
    F: Fn(&Board, Loc) -> bool,
{
    fn is_forbidden(&self, board: &Board, loc: Loc) -> bool {
        self(board, loc)
    }
}

impl<F> VcfOracle for F
where
    F: Fn(&Board, &Rules, Color) -> VcfResult,
{
    fn solve(&self, board: &Board, rules: &Rules, pla: Color) -> VcfResult {
        self(board, rules, pla)
    }
}

/// Forbids nothing. Suitable for freestyle and standard rules.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoForbidden;

impl ForbiddenOracle for NoForbidden {
    fn is_forbidden(&self, _board: &Board, _loc: Loc) -> bool {
        false
    }
}

/// Never proves anything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoVcf;

impl VcfOracle for NoVcf {
    fn solve(&self, _board: &Board, _rules: &Rules, _pla: Color) -> VcfResult {
        VcfResult::Inconclusive
    }
}
