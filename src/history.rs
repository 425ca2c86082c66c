//! Game line state and the ko/encore/scoring state machine.
//!
//! A [`BoardHistory`] follows one line of play from an initial position. It
//! owns everything the board itself does not know:
//! - the ko-ban fingerprint history used for superko
//! - the encore phase (territory scoring only) and consecutive ending passes
//! - the positions each player has passed in, for Spight-style endings
//! - prisoners taken before the second encore phase
//! - the terminal result once the line ends
//!
//! # Phases
//!
//! Under area scoring two consecutive passes always end the game. Under
//! territory scoring the game runs through phases 0, 1 and 2; a completed
//! pass sequence advances to the next phase and only one completed in
//! phase 2 ends the game. A pass only counts toward a sequence if it is not
//! a *pass for ko*: a pass by a player who is currently barred from a ko
//! recapture (encore phases, or simple/Spight ko rules).
//!
//! # Resurrection
//!
//! Moves may be applied after the game has ended. Every move clears the
//! result, and it is re-derived if the extended line ends again.

use std::fmt;

use log::{debug, trace};

use crate::board::{Board, Color, Loc, MoveRecord};
use crate::constants::{ENDING_PASSES, MAX_ENCORE_PHASE, PASS_LOC};
use crate::error::{IllegalMove, RulesError};
use crate::hash::{self, Hash128};
use crate::oracle::ForbiddenOracle;
use crate::pass_alive::{calculate_area, calculate_pass_alive_territory};
use crate::rules::{KoRule, Rules, ScoringRule};
use crate::win::{self, Terminal};

/// A move: a location (or [`PASS_LOC`]) and the player who made it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub loc: Loc,
    pub pla: Color,
}

#[derive(Clone, Debug)]
struct MoveEntry {
    mv: Move,
    /// Result recorded for a connection-family move. `None` for Go moves.
    connection_result: Option<Terminal>,
}

#[derive(Clone, Debug)]
pub struct BoardHistory {
    rules: Rules,
    initial_board: Board,
    initial_pla: Color,
    initial_encore_phase: u8,
    moves: Vec<MoveEntry>,

    encore_phase: u8,
    /// Ko fingerprints of every position in the current superko window.
    ko_hash_history: Vec<Hash128>,
    hashes_before_black_pass: Vec<Hash128>,
    hashes_before_white_pass: Vec<Hash128>,
    consecutive_ending_passes: u32,
    /// Board at the start of the second encore phase.
    second_encore_start: Option<Board>,
    /// Stones captured by black before the second encore phase.
    black_prisoners: u32,
    /// Stones captured by white before the second encore phase.
    white_prisoners: u32,

    game_over: bool,
    winner: Option<Color>,
    final_white_minus_black_score: Option<f32>,
}

// =============================================================================
// Construction
// =============================================================================

impl BoardHistory {
    /// Start a game line at `board` with `pla` to move.
    pub fn new(board: &Board, pla: Color, rules: Rules) -> Result<Self, RulesError> {
        Self::with_encore_phase(board, pla, rules, 0)
    }

    /// Start a game line that is already in the given encore phase.
    pub fn with_encore_phase(
        board: &Board,
        pla: Color,
        rules: Rules,
        encore_phase: u8,
    ) -> Result<Self, RulesError> {
        rules.validate()?;
        if encore_phase > MAX_ENCORE_PHASE {
            return Err(RulesError::InvalidEncorePhase(encore_phase));
        }
        hash::init();
        Ok(Self::fresh(board, pla, rules, encore_phase))
    }

    fn fresh(board: &Board, pla: Color, rules: Rules, encore_phase: u8) -> Self {
        let mut hist = Self {
            rules,
            initial_board: board.clone(),
            initial_pla: pla,
            initial_encore_phase: encore_phase,
            moves: Vec::new(),
            encore_phase,
            ko_hash_history: Vec::new(),
            hashes_before_black_pass: Vec::new(),
            hashes_before_white_pass: Vec::new(),
            consecutive_ending_passes: 0,
            second_encore_start: (encore_phase >= MAX_ENCORE_PHASE).then(|| board.clone()),
            black_prisoners: 0,
            white_prisoners: 0,
            game_over: false,
            winner: None,
            final_white_minus_black_score: None,
        };
        let h = hist.ko_hash(board, pla);
        hist.ko_hash_history.push(h);
        hist
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl BoardHistory {
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn encore_phase(&self) -> u8 {
        self.encore_phase
    }

    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    pub fn initial_pla(&self) -> Color {
        self.initial_pla
    }

    pub fn moves(&self) -> impl ExactSizeIterator<Item = Move> + '_ {
        self.moves.iter().map(|e| e.mv)
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Player expected to move next, assuming alternation.
    pub fn next_player(&self) -> Color {
        self.moves.last().map_or(self.initial_pla, |e| e.mv.pla.opp())
    }

    pub fn consecutive_ending_passes(&self) -> u32 {
        self.consecutive_ending_passes
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winner of a finished game. `None` while playing and for draws.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_draw(&self) -> bool {
        self.game_over && self.winner.is_none()
    }

    /// White's score minus black's, komi included, once the game is over.
    pub fn final_white_minus_black_score(&self) -> Option<f32> {
        self.final_white_minus_black_score
    }

    /// Prisoners taken before the second encore phase, as `(by black, by white)`.
    pub fn prisoners(&self) -> (u32, u32) {
        (self.black_prisoners, self.white_prisoners)
    }
}

// =============================================================================
// Ko and Legality
// =============================================================================

impl BoardHistory {
    /// Fingerprint compared for superko. Situational-style rules key on the
    /// player to move as well as the stones; each encore phase is its own
    /// space of positions.
    fn ko_hash(&self, board: &Board, next_pla: Color) -> Hash128 {
        let mut h = board.pos_hash() ^ hash::encore_phase(self.encore_phase);
        if matches!(self.rules.ko_rule, KoRule::Situational | KoRule::Simple) {
            h ^= hash::player(next_pla);
        }
        h
    }

    /// Would `pla` at `loc` recreate a position in the superko window?
    ///
    /// Only captures and suicides can shrink the stone count, so only they
    /// can repeat a position.
    fn is_superko_banned(&self, board: &Board, loc: Loc, pla: Color) -> bool {
        if self.rules.ko_rule == KoRule::Simple || loc == PASS_LOC {
            return false;
        }
        if !board.would_be_capture(loc, pla) && !board.is_suicide(loc, pla) {
            return false;
        }
        let mut after = board.clone();
        after.play_assume_legal(loc, pla);
        let banned = self.ko_hash_history.contains(&self.ko_hash(&after, pla.opp()));
        if banned {
            trace!("superko bans {} for {pla}", board.loc_to_string(loc));
        }
        banned
    }

    /// Is `pla` currently barred from some ko recapture?
    fn has_ko_ban(&self, board: &Board, pla: Color) -> bool {
        match self.rules.ko_rule {
            KoRule::Simple => board.ko_loc().is_some(),
            _ => {
                let sui = self.rules.multi_stone_suicide_legal;
                board
                    .locs()
                    .any(|loc| board.is_legal_ignoring_ko(loc, pla, sui) && self.is_superko_banned(board, loc, pla))
            }
        }
    }

    fn is_pass_for_ko(&self, board: &Board, pla: Color) -> bool {
        self.rules.scoring_rule == ScoringRule::Territory
            && (self.encore_phase > 0 || matches!(self.rules.ko_rule, KoRule::Simple | KoRule::Spight))
            && self.has_ko_ban(board, pla)
    }

    fn spightlike_ending_applies(&self) -> bool {
        self.rules.scoring_rule == ScoringRule::Territory
            && (self.encore_phase > 0 || self.rules.ko_rule == KoRule::Spight)
    }

    /// Full legality of a Go-family move: board rules plus ko and superko.
    pub fn is_legal(&self, board: &Board, loc: Loc, pla: Color) -> bool {
        if loc == PASS_LOC {
            return true;
        }
        if !board.is_legal_ignoring_ko(loc, pla, self.rules.multi_stone_suicide_legal) {
            return false;
        }
        if self.rules.ko_rule == KoRule::Simple && board.is_simple_ko_banned(loc) {
            return false;
        }
        !self.is_superko_banned(board, loc, pla)
    }
}

// =============================================================================
// Making Moves
// =============================================================================

impl BoardHistory {
    fn clear_result(&mut self) {
        self.game_over = false;
        self.winner = None;
        self.final_white_minus_black_score = None;
    }

    /// Apply a Go-family move that is already known to be legal.
    pub fn make_board_move_assume_legal(&mut self, board: &mut Board, loc: Loc, pla: Color) -> MoveRecord {
        self.clear_result();
        let is_pass = loc == PASS_LOC;

        let mut pass_for_ko = false;
        let mut spightlike_ending = false;
        if is_pass {
            pass_for_ko = self.is_pass_for_ko(board, pla);
            if self.spightlike_ending_applies() {
                let h = self.ko_hash(board, pla);
                let seen = match pla {
                    Color::Black => &mut self.hashes_before_black_pass,
                    Color::White => &mut self.hashes_before_white_pass,
                };
                spightlike_ending = seen.contains(&h);
                seen.push(h);
            }
            if self.encore_phase > 0 || self.rules.ko_rule == KoRule::Spight {
                self.ko_hash_history.clear();
            }
        }

        let record = board.play_assume_legal(loc, pla);
        self.moves.push(MoveEntry {
            mv: Move { loc, pla },
            connection_result: None,
        });

        if !is_pass {
            self.consecutive_ending_passes = 0;
            if self.encore_phase < MAX_ENCORE_PHASE {
                let captured = record.captured.len() as u32;
                let suicided = record.suicided.len() as u32;
                match pla {
                    Color::Black => {
                        self.black_prisoners += captured;
                        self.white_prisoners += suicided;
                    }
                    Color::White => {
                        self.white_prisoners += captured;
                        self.black_prisoners += suicided;
                    }
                }
            }
        } else if !pass_for_ko {
            self.consecutive_ending_passes += 1;
        }

        let h = self.ko_hash(board, pla.opp());
        self.ko_hash_history.push(h);

        if is_pass && (self.consecutive_ending_passes >= ENDING_PASSES || spightlike_ending) {
            self.end_phase_or_game(board, pla.opp());
        }
        record
    }

    /// Legality-checked move. On failure nothing is modified.
    ///
    /// # Panics
    ///
    /// If the board ends up in a state a legal move cannot produce, which
    /// means the board or history is corrupt. Debug builds also panic when
    /// the line no longer replays to the current board.
    pub fn play(&mut self, board: &mut Board, loc: Loc, pla: Color) -> Result<MoveRecord, IllegalMove> {
        if !self.is_legal(board, loc, pla) {
            return Err(IllegalMove {
                x: board.loc_x(loc),
                y: board.loc_y(loc),
                pla,
            });
        }
        let record = self.make_board_move_assume_legal(board, loc, pla);

        if loc != PASS_LOC {
            assert!(
                board.color_at(loc) == Some(pla) || !record.suicided.is_empty(),
                "board corrupt: {} holds {:?} after {pla} played there",
                board.loc_to_string(loc),
                board.get(loc)
            );
        }
        debug_assert!(
            {
                let (b, h) = self.replay_prefix(self.moves.len());
                b == *board && h.ko_hash_history.last() == self.ko_hash_history.last()
            },
            "line does not replay to the current board and ko history"
        );
        Ok(record)
    }

    fn end_phase_or_game(&mut self, board: &mut Board, next_pla: Color) {
        if self.rules.scoring_rule == ScoringRule::Area || self.encore_phase >= MAX_ENCORE_PHASE {
            self.end_and_score(board);
            return;
        }

        self.encore_phase += 1;
        debug!("entering encore phase {}", self.encore_phase);
        if self.encore_phase == MAX_ENCORE_PHASE {
            self.second_encore_start = Some(board.clone());
        }
        self.consecutive_ending_passes = 0;
        self.hashes_before_black_pass.clear();
        self.hashes_before_white_pass.clear();
        board.clear_ko_loc();
        self.ko_hash_history.clear();
        let h = self.ko_hash(board, next_pla);
        self.ko_hash_history.push(h);
    }

    fn end_and_score(&mut self, board: &Board) {
        let sui = self.rules.multi_stone_suicide_legal;
        let white_minus_black = match self.rules.scoring_rule {
            ScoringRule::Area => {
                let area = calculate_area(board, sui);
                area.count(Color::White) as f32 - area.count(Color::Black) as f32
            }
            ScoringRule::Territory => {
                // Only points that changed hands since the second encore began
                // count: stones standing there already are not territory.
                let owned = calculate_pass_alive_territory(board, sui);
                let start = self.second_encore_start.as_ref().unwrap_or(board);
                let mut diff = i64::from(self.white_prisoners) - i64::from(self.black_prisoners);
                for loc in board.locs() {
                    match owned.get(loc) {
                        Some(c) if start.color_at(loc) != Some(c) => {
                            diff += if c == Color::White { 1 } else { -1 };
                        }
                        _ => {}
                    }
                }
                diff as f32
            }
        };
        let score = white_minus_black + self.rules.komi;
        self.game_over = true;
        self.final_white_minus_black_score = Some(score);
        self.winner = if score > 0.0 {
            Some(Color::White)
        } else if score < 0.0 {
            Some(Color::Black)
        } else {
            None
        };
        debug!("game over after {} moves: {}", self.moves.len(), self.result_string());
    }

    /// Would a pass by `pla` now finish the current phase (or the game)?
    pub fn pass_would_end_phase(&self, board: &Board, pla: Color) -> bool {
        let mut b = board.clone();
        let mut h = self.clone();
        h.make_board_move_assume_legal(&mut b, PASS_LOC, pla);
        h.game_over || h.encore_phase != self.encore_phase
    }

    /// Would a pass by `pla` now end the game?
    pub fn pass_would_end_game(&self, board: &Board, pla: Color) -> bool {
        let mut b = board.clone();
        let mut h = self.clone();
        h.make_board_move_assume_legal(&mut b, PASS_LOC, pla);
        h.game_over
    }
}

// =============================================================================
// Connection Family
// =============================================================================

impl BoardHistory {
    fn apply_terminal(&mut self, result: Terminal) {
        let (winner, score) = match result {
            Terminal::Undecided => return,
            Terminal::Draw => (None, 0.0),
            Terminal::Win(Color::White) => (Some(Color::White), 1.0),
            Terminal::Win(Color::Black) => (Some(Color::Black), -1.0),
        };
        self.game_over = true;
        self.winner = winner;
        self.final_white_minus_black_score = Some(score);
    }

    /// Place a connection-game stone (or pass) and evaluate the result.
    pub fn make_connection_move_assume_legal(
        &mut self,
        board: &mut Board,
        loc: Loc,
        pla: Color,
        forbidden: &dyn ForbiddenOracle,
    ) -> Terminal {
        self.clear_result();
        board.play_connection_move(loc, pla);
        let result = win::check_winner_after_played(board, self, pla, loc, forbidden);
        self.moves.push(MoveEntry {
            mv: Move { loc, pla },
            connection_result: Some(result),
        });
        self.apply_terminal(result);
        if result != Terminal::Undecided {
            debug!("connection game decided by {pla} {}: {result:?}", board.loc_to_string(loc));
        }
        result
    }
}

// =============================================================================
// Replay
// =============================================================================

impl BoardHistory {
    fn replay_entry(&mut self, board: &mut Board, entry: &MoveEntry) {
        let Move { loc, pla } = entry.mv;
        match entry.connection_result {
            None => {
                self.make_board_move_assume_legal(board, loc, pla);
            }
            Some(result) => {
                self.clear_result();
                board.play_connection_move(loc, pla);
                self.moves.push(entry.clone());
                self.apply_terminal(result);
            }
        }
    }

    /// Board and history after the first `n` moves, rebuilt from the
    /// initial position under the same rules.
    fn replay_prefix(&self, n: usize) -> (Board, BoardHistory) {
        let mut b = self.initial_board.clone();
        let mut h = Self::fresh(&self.initial_board, self.initial_pla, self.rules, self.initial_encore_phase);
        for entry in &self.moves[..n] {
            h.replay_entry(&mut b, entry);
        }
        (b, h)
    }

    /// Take back the last move by replaying all earlier moves from the
    /// initial position. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self, board: &mut Board) -> bool {
        let Some(n) = self.moves.len().checked_sub(1) else {
            return false;
        };
        let (b, h) = self.replay_prefix(n);
        *board = b;
        *self = h;
        true
    }

    /// Replay this line under different rules.
    ///
    /// Fails if the rules are invalid or if any Go-family move of the line
    /// would be illegal under them. Connection-family moves are evaluated
    /// again under the new rules, asking `forbidden` about black stones
    /// when those rules are Renju.
    pub fn replay_with_rules(
        &self,
        rules: Rules,
        forbidden: &dyn ForbiddenOracle,
    ) -> Result<(Board, BoardHistory), RulesError> {
        rules.validate()?;
        let mut board = self.initial_board.clone();
        let mut hist = Self::fresh(&self.initial_board, self.initial_pla, rules, self.initial_encore_phase);
        for (index, entry) in self.moves.iter().enumerate() {
            let Move { loc, pla } = entry.mv;
            if entry.connection_result.is_some() {
                hist.make_connection_move_assume_legal(&mut board, loc, pla, forbidden);
                continue;
            }
            if !hist.is_legal(&board, loc, pla) {
                return Err(RulesError::IllegalReplay {
                    index,
                    mv: format!("{pla} {}", board.loc_to_string(loc)),
                    rules: rules.to_string(),
                });
            }
            hist.make_board_move_assume_legal(&mut board, loc, pla);
        }
        Ok((board, hist))
    }
}

// =============================================================================
// Display
// =============================================================================

impl BoardHistory {
    /// `W+3.5`, `B+0.5`, `Draw`, or `ongoing`.
    pub fn result_string(&self) -> String {
        match (self.game_over, self.winner, self.final_white_minus_black_score) {
            (false, _, _) => "ongoing".to_string(),
            (true, None, _) => "Draw".to_string(),
            (true, Some(w), score) => {
                let margin = score.map_or(0.0, f32::abs);
                let letter = if w == Color::White { 'W' } else { 'B' };
                format!("{letter}+{margin}")
            }
        }
    }
}

impl fmt::Display for BoardHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rules {} encore {} moves {} result {}",
            self.rules,
            self.encore_phase,
            self.moves.len(),
            self.result_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::NoForbidden;

    fn empty_hist(x: usize, y: usize, rules: Rules) -> (Board, BoardHistory) {
        let board = Board::new(x, y).unwrap();
        let hist = BoardHistory::new(&board, Color::Black, rules).unwrap();
        (board, hist)
    }

    #[test]
    fn rejects_invalid_rules_and_phase() {
        let board = Board::new(5, 5).unwrap();
        let mut rules = Rules::default();
        rules.komi = 0.3;
        assert!(BoardHistory::new(&board, Color::Black, rules).is_err());
        assert!(matches!(
            BoardHistory::with_encore_phase(&board, Color::Black, Rules::default(), 3),
            Err(RulesError::InvalidEncorePhase(3))
        ));
    }

    #[test]
    fn area_game_ends_on_two_passes() {
        let (mut board, mut hist) = empty_hist(3, 3, Rules::tromp_taylorish());
        assert!(!hist.pass_would_end_game(&board, Color::Black));
        hist.make_board_move_assume_legal(&mut board, PASS_LOC, Color::Black);
        assert!(hist.pass_would_end_game(&board, Color::White));
        hist.make_board_move_assume_legal(&mut board, PASS_LOC, Color::White);
        assert!(hist.is_game_over());
        assert_eq!(hist.winner(), Some(Color::White));
        assert_eq!(hist.final_white_minus_black_score(), Some(7.5));
        assert_eq!(hist.result_string(), "W+7.5");
    }

    #[test]
    fn territory_passes_walk_through_encore() {
        let (mut board, mut hist) = empty_hist(3, 3, Rules::japanese_like());
        for (i, pla) in [Color::Black, Color::White].repeat(3).into_iter().enumerate() {
            assert!(!hist.is_game_over());
            assert_eq!(hist.encore_phase() as usize, i / 2);
            let ends_phase = hist.pass_would_end_phase(&board, pla);
            assert_eq!(ends_phase, i % 2 == 1);
            hist.make_board_move_assume_legal(&mut board, PASS_LOC, pla);
        }
        assert!(hist.is_game_over());
        assert_eq!(hist.encore_phase(), 2);
        assert_eq!(hist.final_white_minus_black_score(), Some(6.5));
    }

    #[test]
    fn checked_play_rejects_occupied_point_without_mutation() {
        let (mut board, mut hist) = empty_hist(3, 3, Rules::default());
        let loc = board.loc(1, 1);
        hist.play(&mut board, loc, Color::Black).unwrap();
        let before_board = board.clone();
        let before_len = hist.move_count();
        let err = hist.play(&mut board, loc, Color::White).unwrap_err();
        assert_eq!(err.to_string(), "Illegal: (1,1) O");
        assert_eq!(board, before_board);
        assert_eq!(hist.move_count(), before_len);
    }

    #[test]
    fn undo_restores_previous_position() {
        let (mut board, mut hist) = empty_hist(4, 4, Rules::default());
        let first = board.loc(0, 0);
        hist.play(&mut board, first, Color::Black).unwrap();
        let after_first = board.clone();
        let second = board.loc(1, 0);
        hist.play(&mut board, second, Color::White).unwrap();
        assert!(hist.undo(&mut board));
        assert_eq!(board, after_first);
        assert_eq!(hist.move_count(), 1);
        assert!(hist.undo(&mut board));
        assert!(!hist.undo(&mut board));
        assert_eq!(board.pos_hash(), Board::new(4, 4).unwrap().pos_hash());
    }

    #[test]
    fn replayed_prefix_matches_live_ko_history() {
        // White takes the ko at (0,0), Black plays elsewhere, White passes.
        let board = Board::parse(4, 2, ".xo.xo..").unwrap();
        let mut hist = BoardHistory::new(&board, Color::White, Rules::japanese_like()).unwrap();
        let mut b = board.clone();
        for (x, y, pla) in [(0, 0, Color::White), (3, 1, Color::Black)] {
            let loc = b.loc(x, y);
            hist.play(&mut b, loc, pla).unwrap();
        }
        hist.play(&mut b, PASS_LOC, Color::White).unwrap();
        let (replayed, h) = hist.replay_prefix(hist.move_count());
        assert_eq!(replayed, b);
        assert_eq!(h.ko_hash_history, hist.ko_hash_history);
        assert_eq!(h.consecutive_ending_passes(), hist.consecutive_ending_passes());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not replay")]
    fn play_notices_board_edited_behind_its_back() {
        let (mut board, mut hist) = empty_hist(4, 4, Rules::default());
        let corner = board.loc(3, 3);
        board.play_connection_move(corner, Color::White);
        let loc = board.loc(0, 0);
        let _ = hist.play(&mut board, loc, Color::Black);
    }

    #[test]
    fn replay_with_rules_detects_newly_illegal_moves() {
        // Black fills its own last liberty: legal only with multi-stone suicide.
        let board = Board::parse(4, 2, ".xo.ooo.").unwrap();
        let mut hist = BoardHistory::new(&board, Color::Black, Rules::tromp_taylorish()).unwrap();
        let mut b = board.clone();
        let fill = b.loc(0, 0);
        hist.play(&mut b, fill, Color::Black).unwrap();
        assert!(b.is_empty_at(b.loc(1, 0)));

        let mut strict = Rules::tromp_taylorish();
        strict.multi_stone_suicide_legal = false;
        assert!(matches!(
            hist.replay_with_rules(strict, &NoForbidden),
            Err(RulesError::IllegalReplay { index: 0, .. })
        ));
        let (replayed, _) = hist.replay_with_rules(Rules::tromp_taylorish(), &NoForbidden).unwrap();
        assert_eq!(replayed, b);
    }

    #[test]
    fn display_summarizes_line() {
        let (mut board, mut hist) = empty_hist(3, 3, Rules::tromp_taylorish());
        hist.make_board_move_assume_legal(&mut board, PASS_LOC, Color::Black);
        assert_eq!(
            hist.to_string(),
            "rules koPOSITIONALscoreAREAsui1komi7.5 encore 0 moves 1 result ongoing"
        );
    }
}
