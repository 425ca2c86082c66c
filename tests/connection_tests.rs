//! Connection-family tests: five-in-a-row endings, overline policy, Renju
//! forfeits, victory-condition-N passes, move cutoffs, and the pre-search
//! summary with scripted oracles.

use stone_rules::board::{Board, Color, Loc};
use stone_rules::constants::PASS_LOC;
use stone_rules::error::RulesError;
use stone_rules::history::BoardHistory;
use stone_rules::oracle::{NoForbidden, NoVcf, VcfResult};
use stone_rules::rules::{BasicRule, Rules, VcnRule};
use stone_rules::win::{ResultsBeforeNN, Terminal};

use Color::{Black as B, White as W};

// =============================================================================
// Helper functions
// =============================================================================

fn board_with(stones: &[(usize, usize, Color)]) -> Board {
    let mut board = Board::new(9, 9).unwrap();
    for &(x, y, c) in stones {
        let loc = board.loc(x, y);
        board.set_stone(loc, Some(c));
    }
    board
}

fn vcn(side: Color, level: u8) -> Rules {
    Rules {
        vcn_rule: VcnRule::Vc { side, level },
        ..Rules::gomoku(BasicRule::Freestyle)
    }
}

fn play(board: &mut Board, hist: &mut BoardHistory, x: usize, y: usize, pla: Color) -> Terminal {
    let loc = board.loc(x, y);
    hist.make_connection_move_assume_legal(board, loc, pla, &NoForbidden)
}

fn pass(board: &mut Board, hist: &mut BoardHistory, pla: Color) -> Terminal {
    hist.make_connection_move_assume_legal(board, PASS_LOC, pla, &NoForbidden)
}

fn summary(board: &Board, rules: Rules, next: Color) -> ResultsBeforeNN {
    let hist = BoardHistory::new(board, next, rules).unwrap();
    ResultsBeforeNN::compute(board, &hist, next, false, &NoForbidden, &NoVcf)
}

// =============================================================================
// Terminal checks after a move
// =============================================================================

#[test]
fn test_five_in_a_row_ends_the_game() {
    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, B, Rules::gomoku(BasicRule::Standard)).unwrap();
    for x in 0..4 {
        assert_eq!(play(&mut board, &mut hist, x, 0, B), Terminal::Undecided);
        assert_eq!(play(&mut board, &mut hist, x, 1, W), Terminal::Undecided);
    }
    assert_eq!(play(&mut board, &mut hist, 4, 0, B), Terminal::Win(B));
    assert!(hist.is_game_over());
    assert_eq!(hist.winner(), Some(B));
    assert_eq!(hist.final_white_minus_black_score(), Some(-1.0));
    assert_eq!(hist.result_string(), "B+1");
    assert_eq!(board.move_num(), 9);
}

#[test]
fn test_overline_policy_per_basic_rule() {
    // Filling (3,0) joins five others into six.
    for (basic, pla, expected) in [
        (BasicRule::Freestyle, B, Terminal::Win(B)),
        (BasicRule::Standard, B, Terminal::Undecided),
        (BasicRule::Renju, B, Terminal::Undecided),
        (BasicRule::Renju, W, Terminal::Win(W)),
    ] {
        let mut board = board_with(&[(0, 0, pla), (1, 0, pla), (2, 0, pla), (4, 0, pla), (5, 0, pla)]);
        let mut hist = BoardHistory::new(&board, pla, Rules::gomoku(basic)).unwrap();
        assert_eq!(play(&mut board, &mut hist, 3, 0, pla), expected, "{basic:?} {pla}");
    }
}

#[test]
fn test_renju_forbidden_point_forfeits() {
    let target = |b: &Board| b.loc(4, 4);
    let forbid = move |b: &Board, loc: Loc| b.is_empty_at(loc) && loc == target(b);

    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, B, Rules::gomoku(BasicRule::Renju)).unwrap();
    let loc = board.loc(4, 4);
    assert_eq!(
        hist.make_connection_move_assume_legal(&mut board, loc, B, &forbid),
        Terminal::Win(W)
    );
    assert_eq!(hist.winner(), Some(W));

    // The oracle only binds black under Renju.
    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, W, Rules::gomoku(BasicRule::Renju)).unwrap();
    assert_eq!(
        hist.make_connection_move_assume_legal(&mut board, loc, W, &forbid),
        Terminal::Undecided
    );
    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, B, Rules::gomoku(BasicRule::Freestyle)).unwrap();
    assert_eq!(
        hist.make_connection_move_assume_legal(&mut board, loc, B, &forbid),
        Terminal::Undecided
    );
}

#[test]
fn test_vcn_attacker_pass_loses() {
    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, B, vcn(B, 3)).unwrap();
    assert_eq!(pass(&mut board, &mut hist, B), Terminal::Win(W));
    assert_eq!(hist.winner(), Some(W));
}

#[test]
fn test_vcn_defender_wins_after_enough_passes() {
    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, B, vcn(B, 3)).unwrap();
    for x in 0..2 {
        assert_eq!(play(&mut board, &mut hist, x * 2, 0, B), Terminal::Undecided);
        assert_eq!(pass(&mut board, &mut hist, W), Terminal::Undecided);
    }
    assert_eq!(play(&mut board, &mut hist, 4, 4, B), Terminal::Undecided);
    assert_eq!(pass(&mut board, &mut hist, W), Terminal::Win(W), "third pass reaches 6 - 3");
}

#[test]
fn test_two_passes_draw_or_first_passer_wins() {
    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, B, Rules::gomoku(BasicRule::Freestyle)).unwrap();
    assert_eq!(pass(&mut board, &mut hist, B), Terminal::Undecided);
    assert_eq!(pass(&mut board, &mut hist, W), Terminal::Draw);
    assert!(hist.is_draw());
    assert_eq!(hist.final_white_minus_black_score(), Some(0.0));

    let rules = Rules {
        first_pass_win: true,
        ..Rules::gomoku(BasicRule::Freestyle)
    };
    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, B, rules).unwrap();
    assert_eq!(pass(&mut board, &mut hist, B), Terminal::Undecided);
    assert_eq!(pass(&mut board, &mut hist, W), Terminal::Win(B));
}

#[test]
fn test_move_cutoff_draws() {
    let rules = Rules {
        max_moves: 4,
        ..Rules::gomoku(BasicRule::Standard)
    };
    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, B, rules).unwrap();
    assert_eq!(play(&mut board, &mut hist, 0, 0, B), Terminal::Undecided);
    assert_eq!(play(&mut board, &mut hist, 8, 8, W), Terminal::Undecided);
    assert_eq!(play(&mut board, &mut hist, 0, 8, B), Terminal::Undecided);
    assert_eq!(play(&mut board, &mut hist, 8, 0, W), Terminal::Draw);
    assert!(hist.is_draw());
}

#[test]
fn test_undo_reverts_connection_result() {
    let mut board = board_with(&[(0, 0, B), (1, 0, B), (2, 0, B), (3, 0, B)]);
    let mut hist = BoardHistory::new(&board, B, Rules::gomoku(BasicRule::Freestyle)).unwrap();
    assert_eq!(play(&mut board, &mut hist, 4, 0, B), Terminal::Win(B));
    assert!(hist.undo(&mut board));
    assert!(!hist.is_game_over());
    assert!(board.is_empty_at(board.loc(4, 0)));
}

#[test]
fn test_replay_with_rules_reevaluates_connection_moves() {
    // An overline decides nothing under Standard but wins under Freestyle.
    let mut board = board_with(&[(0, 0, B), (1, 0, B), (2, 0, B), (4, 0, B), (5, 0, B)]);
    let mut hist = BoardHistory::new(&board, B, Rules::gomoku(BasicRule::Standard)).unwrap();
    assert_eq!(play(&mut board, &mut hist, 3, 0, B), Terminal::Undecided);

    let (replayed, freestyle) = hist
        .replay_with_rules(Rules::gomoku(BasicRule::Freestyle), &NoForbidden)
        .unwrap();
    assert_eq!(replayed, board);
    assert!(freestyle.is_game_over(), "overline wins under freestyle");
    assert_eq!(freestyle.winner(), Some(B));

    let (_, standard) = freestyle
        .replay_with_rules(Rules::gomoku(BasicRule::Standard), &NoForbidden)
        .unwrap();
    assert!(!standard.is_game_over());
    assert_eq!(standard.winner(), None);
}

#[test]
fn test_replay_under_renju_asks_the_forbidden_oracle() {
    let forbid = |b: &Board, loc: Loc| b.is_empty_at(loc) && loc == b.loc(4, 4);
    let mut board = Board::new(9, 9).unwrap();
    let mut hist = BoardHistory::new(&board, B, Rules::gomoku(BasicRule::Freestyle)).unwrap();
    assert_eq!(play(&mut board, &mut hist, 4, 4, B), Terminal::Undecided);

    let (_, renju) = hist.replay_with_rules(Rules::gomoku(BasicRule::Renju), &forbid).unwrap();
    assert!(renju.is_game_over());
    assert_eq!(renju.winner(), Some(W));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_unsupported_rule_combinations_are_rejected() {
    let board = Board::new(9, 9).unwrap();
    let cutoff_with_vcn = Rules { max_moves: 10, ..vcn(B, 1) };
    assert!(matches!(
        BoardHistory::new(&board, B, cutoff_with_vcn),
        Err(RulesError::VcnWithMaxMoves { .. })
    ));
    let first_pass_with_vcn = Rules { first_pass_win: true, ..vcn(W, 2) };
    assert!(matches!(
        BoardHistory::new(&board, B, first_pass_with_vcn),
        Err(RulesError::FirstPassWinConflict { .. })
    ));
    let first_pass_with_cutoff = Rules {
        first_pass_win: true,
        max_moves: 50,
        ..Rules::gomoku(BasicRule::Standard)
    };
    assert!(BoardHistory::new(&board, B, first_pass_with_cutoff).is_err());
    assert!(matches!(
        BoardHistory::new(&board, B, vcn(B, 6)),
        Err(RulesError::InvalidVcnLevel(6))
    ));
}

// =============================================================================
// ResultsBeforeNN
// =============================================================================

#[test]
fn test_summary_reports_immediate_win() {
    let board = board_with(&[(1, 0, B), (2, 0, B), (3, 0, B), (4, 0, B)]);
    let r = summary(&board, Rules::gomoku(BasicRule::Freestyle), B);
    assert_eq!(r.winner, Some(B));
    assert_eq!(r.my_only_loc, Some(board.loc(0, 0)));
    assert!(!r.calculated_vcf);
}

#[test]
fn test_summary_forces_block_of_opponent_four() {
    let board = board_with(&[(1, 0, B), (2, 0, B), (3, 0, B), (4, 0, B)]);
    let r = summary(&board, Rules::gomoku(BasicRule::Freestyle), W);
    assert_eq!(r.winner, None);
    assert_eq!(r.my_only_loc, Some(board.loc(5, 0)), "last blocking point in scan order");
}

#[test]
fn test_summary_blocks_last_four_in_column_order() {
    // Fours along row 8 and down column 8. Column 8 is scanned last, so its
    // far end is the reported block.
    let board = board_with(&[
        (1, 8, B),
        (2, 8, B),
        (3, 8, B),
        (4, 8, B),
        (8, 1, B),
        (8, 2, B),
        (8, 3, B),
        (8, 4, B),
    ]);
    let r = summary(&board, Rules::gomoku(BasicRule::Freestyle), W);
    assert_eq!(r.winner, None);
    assert_eq!(r.my_only_loc, Some(board.loc(8, 5)));
}

#[test]
fn test_summary_life_four_needs_remaining_moves() {
    let board = board_with(&[(2, 4, B), (3, 4, B), (4, 4, B)]);
    let r = summary(&board, Rules::gomoku(BasicRule::Freestyle), B);
    assert_eq!(r.winner, Some(B));
    assert_eq!(r.my_only_loc, Some(board.loc(5, 4)));

    let short = Rules {
        max_moves: 2,
        ..Rules::gomoku(BasicRule::Freestyle)
    };
    let r = summary(&board, short, B);
    assert_eq!(r.winner, None, "not enough moves left to finish the four");
    assert_eq!(r.my_only_loc, Some(board.loc(5, 4)));
}

#[test]
fn test_summary_vcn_pass_budget() {
    let empty = Board::new(9, 9).unwrap();

    let r = summary(&empty, vcn(B, 5), W);
    assert_eq!(r.winner, Some(W));
    assert_eq!(r.my_only_loc, Some(PASS_LOC));

    let r = summary(&empty, vcn(B, 5), B);
    assert_eq!(r.winner, Some(W));
    assert_eq!(r.my_only_loc, None);

    let r = summary(&empty, vcn(B, 4), W);
    assert_eq!(r.winner, Some(W));
    assert_eq!(r.my_only_loc, Some(PASS_LOC));

    // A black four overrides the one-pass-short budget.
    let threatened = board_with(&[(1, 0, B), (2, 0, B), (3, 0, B), (4, 0, B)]);
    let r = summary(&threatened, vcn(B, 4), W);
    assert_eq!(r.winner, None);
    assert_eq!(r.my_only_loc, Some(threatened.loc(5, 0)));

    let r = summary(&empty, vcn(B, 3), W);
    assert_eq!(r.winner, None);
}

#[test]
fn test_summary_consults_vcf_oracle() {
    let board = board_with(&[(4, 4, B), (3, 3, W)]);
    let rules = Rules::gomoku(BasicRule::Freestyle);
    let hist = BoardHistory::new(&board, B, rules).unwrap();
    let win_at = board.loc(6, 6);
    let vcf = move |_: &Board, _: &Rules, pla: Color| {
        if pla == B {
            VcfResult::Win(win_at)
        } else {
            VcfResult::NoWin
        }
    };

    let r = ResultsBeforeNN::compute(&board, &hist, B, true, &NoForbidden, &vcf);
    assert!(r.calculated_vcf);
    assert_eq!(r.winner, Some(B));
    assert_eq!(r.my_only_loc, Some(win_at));
    assert_eq!(r.my_vcf_result, Some(VcfResult::Win(win_at)));
    assert_eq!(r.opp_vcf_result, Some(VcfResult::NoWin));

    let r = ResultsBeforeNN::compute(&board, &hist, W, true, &NoForbidden, &vcf);
    assert!(r.calculated_vcf);
    assert_eq!(r.winner, None);
    assert_eq!(r.opp_vcf_result, Some(VcfResult::Win(win_at)));

    let r = ResultsBeforeNN::compute(&board, &hist, B, false, &NoForbidden, &vcf);
    assert!(!r.calculated_vcf);
    assert_eq!(r.winner, None);
    assert_eq!(r.my_vcf_result, None);

    let cutoff = Rules { max_moves: 40, ..rules };
    let hist = BoardHistory::new(&board, B, cutoff).unwrap();
    let r = ResultsBeforeNN::compute(&board, &hist, B, true, &NoForbidden, &vcf);
    assert!(!r.calculated_vcf, "no VCF under a move cutoff");
}

#[test]
fn test_summary_renju_forbidden_four_is_not_winning() {
    let board = board_with(&[(2, 4, B), (3, 4, B), (4, 4, B)]);
    let forbid_all = |_: &Board, _: Loc| true;
    let hist = BoardHistory::new(&board, B, Rules::gomoku(BasicRule::Renju)).unwrap();
    let r = ResultsBeforeNN::compute(&board, &hist, B, false, &forbid_all, &NoVcf);
    assert_eq!(r.winner, None);
    assert_eq!(r.my_only_loc, None);
}
