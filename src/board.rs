//! Board representation and move execution.
//!
//! This module provides the board substrate both rule families run on:
//! - Stone storage in a padded 1D array (see [`crate::constants`])
//! - Chain collection, liberty counting and capture
//! - Suicide detection and simple-ko bookkeeping
//! - Cumulative pass counters and a stone-placement counter
//! - An incrementally maintained position fingerprint
//!
//! A `Board` is a plain value. Clone it to explore a hypothetical future;
//! nothing in the engine keeps references into another branch's board.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ARR_SIZE, MAX_LEN, PASS_LOC};
use crate::error::BoardError;
use crate::hash::{self, Hash128};

/// A location, represented as an index into the 1D board array.
pub type Loc = usize;

/// A player, or the color of a stone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "BLACK")]
    Black,
    #[serde(rename = "WHITE")]
    White,
}

impl Color {
    pub const fn opp(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Content of one cell of the padded array.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Stone(Color),
    /// Padding outside the playable area.
    Wall,
}

impl Cell {
    pub const fn stone(self) -> Option<Color> {
        match self {
            Cell::Stone(c) => Some(c),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Stone(c) => c.to_char(),
            Cell::Wall => ' ',
        }
    }
}

/// Stones removed by a move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveRecord {
    /// Opponent stones captured by the move.
    pub captured: Vec<Loc>,
    /// The mover's own stones removed by a multi-stone suicide.
    pub suicided: Vec<Loc>,
}

/// A board position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    x_size: usize,
    y_size: usize,
    cells: [Cell; MAX_ARR_SIZE],
    pos_hash: Hash128,
    /// Point banned for the next player by the simple ko rule.
    ko_loc: Option<Loc>,
    black_pass_num: u32,
    white_pass_num: u32,
    move_num: u32,
}

// =============================================================================
// Construction
// =============================================================================

impl Board {
    /// Create an empty board.
    pub fn new(x_size: usize, y_size: usize) -> Result<Self, BoardError> {
        if !(1..=MAX_LEN).contains(&x_size) || !(1..=MAX_LEN).contains(&y_size) {
            return Err(BoardError::InvalidSize {
                x_size,
                y_size,
                max: MAX_LEN,
            });
        }
        let mut cells = [Cell::Wall; MAX_ARR_SIZE];
        let stride = x_size + 1;
        for y in 0..y_size {
            for x in 0..x_size {
                cells[(x + 1) + (y + 1) * stride] = Cell::Empty;
            }
        }
        Ok(Self {
            x_size,
            y_size,
            cells,
            pos_hash: hash::board_size(x_size, y_size),
            ko_loc: None,
            black_pass_num: 0,
            white_pass_num: 0,
            move_num: 0,
        })
    }

    /// Parse a board from rows of `.`, `x`/`X` (black) and `o`/`O` (white).
    ///
    /// Whitespace is ignored, so both compact rows and the space-separated
    /// rows produced by `Display` are accepted.
    pub fn parse(x_size: usize, y_size: usize, text: &str) -> Result<Self, BoardError> {
        let mut board = Self::new(x_size, y_size)?;
        let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != x_size * y_size {
            return Err(BoardError::WrongCellCount {
                expected: x_size * y_size,
                found: cells.len(),
            });
        }
        for (i, &c) in cells.iter().enumerate() {
            let color = match c {
                '.' => continue,
                'x' | 'X' => Color::Black,
                'o' | 'O' => Color::White,
                other => return Err(BoardError::BadCell(other)),
            };
            let loc = board.loc(i % x_size, i / x_size);
            board.set_stone(loc, Some(color));
        }
        Ok(board)
    }
}

// =============================================================================
// Geometry
// =============================================================================

impl Board {
    pub fn x_size(&self) -> usize {
        self.x_size
    }

    pub fn y_size(&self) -> usize {
        self.y_size
    }

    /// Array offset between vertically adjacent points.
    #[inline]
    pub fn stride(&self) -> usize {
        self.x_size + 1
    }

    /// Location of `(x, y)`. The coordinates must be on the board.
    #[inline]
    pub fn loc(&self, x: usize, y: usize) -> Loc {
        debug_assert!(x < self.x_size && y < self.y_size);
        (x + 1) + (y + 1) * self.stride()
    }

    /// Location of `(x, y)`, or `None` if off the board.
    pub fn try_loc(&self, x: usize, y: usize) -> Option<Loc> {
        (x < self.x_size && y < self.y_size).then(|| self.loc(x, y))
    }

    #[inline]
    pub fn loc_x(&self, loc: Loc) -> usize {
        (loc % self.stride()).saturating_sub(1)
    }

    #[inline]
    pub fn loc_y(&self, loc: Loc) -> usize {
        (loc / self.stride()).saturating_sub(1)
    }

    #[inline]
    pub fn is_on_board(&self, loc: Loc) -> bool {
        loc < MAX_ARR_SIZE && self.cells[loc] != Cell::Wall
    }

    /// The 4 orthogonal neighbors of an on-board location.
    #[inline]
    pub fn adjacent(&self, loc: Loc) -> [Loc; 4] {
        let stride = self.stride();
        [loc - stride, loc - 1, loc + 1, loc + stride]
    }

    /// Offsets of the four line directions: +x, +y, +x+y, -x+y.
    pub fn line_directions(&self) -> [isize; 4] {
        let stride = self.stride() as isize;
        [1, stride, stride + 1, stride - 1]
    }

    /// All on-board locations in row-major order.
    pub fn locs(&self) -> impl Iterator<Item = Loc> + '_ {
        (0..self.y_size).flat_map(move |y| (0..self.x_size).map(move |x| self.loc(x, y)))
    }

    /// All on-board locations, column by column.
    pub fn locs_by_column(&self) -> impl Iterator<Item = Loc> + '_ {
        (0..self.x_size).flat_map(move |x| (0..self.y_size).map(move |y| self.loc(x, y)))
    }
}

// =============================================================================
// Queries
// =============================================================================

impl Board {
    #[inline]
    pub fn get(&self, loc: Loc) -> Cell {
        self.cells[loc]
    }

    #[inline]
    pub fn color_at(&self, loc: Loc) -> Option<Color> {
        self.cells[loc].stone()
    }

    #[inline]
    pub fn is_empty_at(&self, loc: Loc) -> bool {
        self.cells[loc] == Cell::Empty
    }

    /// Fingerprint of the stone layout and board dimensions.
    pub fn pos_hash(&self) -> Hash128 {
        self.pos_hash
    }

    pub fn ko_loc(&self) -> Option<Loc> {
        self.ko_loc
    }

    pub fn black_pass_num(&self) -> u32 {
        self.black_pass_num
    }

    pub fn white_pass_num(&self) -> u32 {
        self.white_pass_num
    }

    /// Cumulative passes made by `pla`.
    pub fn pass_num(&self, pla: Color) -> u32 {
        match pla {
            Color::Black => self.black_pass_num,
            Color::White => self.white_pass_num,
        }
    }

    /// Number of stones placed so far. Passes are not counted.
    pub fn move_num(&self) -> u32 {
        self.move_num
    }

    /// Collect all stones in the chain containing `start`.
    ///
    /// Uses flood-fill to find all connected stones of the same color.
    pub fn chain(&self, start: Loc) -> Vec<Loc> {
        let color = self.cells[start];
        let mut stack = vec![start];
        let mut visited = [false; MAX_ARR_SIZE];
        let mut out = Vec::new();

        while let Some(loc) = stack.pop() {
            if visited[loc] {
                continue;
            }
            visited[loc] = true;
            if self.cells[loc] == color {
                out.push(loc);
                for n in self.adjacent(loc) {
                    if !visited[n] && self.cells[n] == color {
                        stack.push(n);
                    }
                }
            }
        }
        out
    }

    /// Count the distinct empty points adjacent to the chain at `start`.
    pub fn chain_liberty_count(&self, start: Loc) -> usize {
        let color = self.cells[start];
        if color.stone().is_none() {
            return 0;
        }
        let mut stack = vec![start];
        let mut visited = [false; MAX_ARR_SIZE];
        let mut liberty_visited = [false; MAX_ARR_SIZE];
        let mut libs = 0;

        while let Some(loc) = stack.pop() {
            if visited[loc] {
                continue;
            }
            visited[loc] = true;
            for n in self.adjacent(loc) {
                match self.cells[n] {
                    Cell::Empty => {
                        if !liberty_visited[n] {
                            liberty_visited[n] = true;
                            libs += 1;
                        }
                    }
                    c if c == color && !visited[n] => stack.push(n),
                    _ => {}
                }
            }
        }
        libs
    }

    /// Would `pla` playing at the empty point `loc` capture anything?
    pub fn would_be_capture(&self, loc: Loc, pla: Color) -> bool {
        if !self.is_on_board(loc) || !self.is_empty_at(loc) {
            return false;
        }
        let opp = Cell::Stone(pla.opp());
        self.adjacent(loc)
            .into_iter()
            .any(|n| self.cells[n] == opp && self.chain_liberty_count(n) == 1)
    }

    /// Would `pla` playing at `loc` leave its own stones without liberties
    /// and capture nothing?
    pub fn is_suicide(&self, loc: Loc, pla: Color) -> bool {
        if !self.is_on_board(loc) || !self.is_empty_at(loc) {
            return false;
        }
        for n in self.adjacent(loc) {
            match self.cells[n] {
                Cell::Empty => return false,
                Cell::Stone(c) if c == pla => {
                    if self.chain_liberty_count(n) > 1 {
                        return false;
                    }
                }
                Cell::Stone(_) => {
                    if self.chain_liberty_count(n) == 1 {
                        return false;
                    }
                }
                Cell::Wall => {}
            }
        }
        true
    }

    /// Suicide that the rules forbid. Single-stone suicide is always illegal;
    /// multi-stone suicide is illegal unless `multi_stone_suicide_legal`.
    pub fn is_illegal_suicide(&self, loc: Loc, pla: Color, multi_stone_suicide_legal: bool) -> bool {
        if !self.is_suicide(loc, pla) {
            return false;
        }
        if !multi_stone_suicide_legal {
            return true;
        }
        let own = Cell::Stone(pla);
        !self.adjacent(loc).into_iter().any(|n| self.cells[n] == own)
    }

    /// Legality by board-local rules: on board, empty, not an illegal
    /// suicide. Ko and superko are the history's business.
    pub fn is_legal_ignoring_ko(&self, loc: Loc, pla: Color, multi_stone_suicide_legal: bool) -> bool {
        if loc == PASS_LOC {
            return true;
        }
        self.is_on_board(loc)
            && self.is_empty_at(loc)
            && !self.is_illegal_suicide(loc, pla, multi_stone_suicide_legal)
    }

    pub fn is_simple_ko_banned(&self, loc: Loc) -> bool {
        loc != PASS_LOC && self.ko_loc == Some(loc)
    }
}

// =============================================================================
// Mutation
// =============================================================================

impl Board {
    /// Set or clear a stone without resolving captures. For setting up
    /// positions; the fingerprint is kept consistent.
    pub fn set_stone(&mut self, loc: Loc, color: Option<Color>) {
        debug_assert!(self.is_on_board(loc), "set_stone off board at {loc}");
        if let Some(old) = self.cells[loc].stone() {
            self.pos_hash ^= hash::stone(loc, old);
        }
        self.cells[loc] = match color {
            Some(c) => {
                self.pos_hash ^= hash::stone(loc, c);
                Cell::Stone(c)
            }
            None => Cell::Empty,
        };
    }

    pub fn clear_ko_loc(&mut self) {
        self.ko_loc = None;
    }

    fn record_pass(&mut self, pla: Color) {
        match pla {
            Color::Black => self.black_pass_num += 1,
            Color::White => self.white_pass_num += 1,
        }
    }

    fn remove_chain(&mut self, start: Loc) -> Vec<Loc> {
        let chain = self.chain(start);
        for &s in &chain {
            self.set_stone(s, None);
        }
        chain
    }

    /// Play a Go-family move that is already known to be legal.
    ///
    /// Handles passes, captures, multi-stone suicide and the simple ko point.
    pub fn play_assume_legal(&mut self, loc: Loc, pla: Color) -> MoveRecord {
        self.ko_loc = None;
        if loc == PASS_LOC {
            self.record_pass(pla);
            return MoveRecord::default();
        }
        debug_assert!(self.is_empty_at(loc), "play_assume_legal on occupied point {loc}");

        self.set_stone(loc, Some(pla));
        let opp = Cell::Stone(pla.opp());
        let mut record = MoveRecord::default();
        for n in self.adjacent(loc) {
            if self.cells[n] == opp && self.chain_liberty_count(n) == 0 {
                let captured = self.remove_chain(n);
                record.captured.extend(captured);
            }
        }

        if record.captured.is_empty() {
            if self.chain_liberty_count(loc) == 0 {
                record.suicided = self.remove_chain(loc);
            }
        } else if record.captured.len() == 1
            && self.chain_liberty_count(loc) == 1
            && self.chain(loc).len() == 1
        {
            // A lone stone that took one stone and sits in atari: immediate
            // recapture would repeat the position.
            self.ko_loc = Some(record.captured[0]);
        }

        self.move_num += 1;
        record
    }

    /// Play a connection-family move: stones are never captured.
    pub fn play_connection_move(&mut self, loc: Loc, pla: Color) {
        self.ko_loc = None;
        if loc == PASS_LOC {
            self.record_pass(pla);
            return;
        }
        debug_assert!(self.is_empty_at(loc), "play_connection_move on occupied point {loc}");
        self.set_stone(loc, Some(pla));
        self.move_num += 1;
    }
}

// =============================================================================
// Coordinates
// =============================================================================

const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

impl Board {
    /// Format a location as `(x,y)`, or `pass`.
    pub fn loc_to_string(&self, loc: Loc) -> String {
        if loc == PASS_LOC {
            return "pass".to_string();
        }
        format!("({},{})", self.loc_x(loc), self.loc_y(loc))
    }

    /// Parse `pass`, `(x,y)`, or a letter-number coordinate like `D4`
    /// (columns skip `I`, row 1 is the bottom row).
    pub fn parse_loc(&self, s: &str) -> Result<Loc, BoardError> {
        let s = s.trim();
        let bad = || BoardError::BadLocation(s.to_string());
        if s.eq_ignore_ascii_case("pass") {
            return Ok(PASS_LOC);
        }

        if let Some(inner) = s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
            let (xs, ys) = inner.split_once(',').ok_or_else(bad)?;
            let x: usize = xs.trim().parse().map_err(|_| bad())?;
            let y: usize = ys.trim().parse().map_err(|_| bad())?;
            return self.try_loc(x, y).ok_or_else(bad);
        }

        let mut chars = s.chars();
        let col_char = chars.next().ok_or_else(bad)?.to_ascii_uppercase();
        let x = COLUMN_LETTERS
            .iter()
            .position(|&c| char::from(c) == col_char)
            .ok_or_else(bad)?;
        let row: usize = chars.as_str().parse().map_err(|_| bad())?;
        if row == 0 || row > self.y_size {
            return Err(bad());
        }
        self.try_loc(x, self.y_size - row).ok_or_else(bad)
    }
}

/// Renders a `HASH:` line followed by rows of space-separated cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HASH: {}", self.pos_hash)?;
        for y in 0..self.y_size {
            for x in 0..self.x_size {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[self.loc(x, y)].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
