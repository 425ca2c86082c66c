//! Pass-alive (unconditional life) analysis.
//!
//! A chain is pass-alive when it can never be captured, even if its owner
//! passes forever. This is Benson's algorithm:
//!
//! 1. Split the board into the chains of one color and the maximal
//!    connected regions of everything else (empty points and opponent
//!    stones).
//! 2. A region is *vital* to a bordering chain when the opponent could
//!    never fill it without first capturing: every empty point of the
//!    region touches the chain. When multi-stone suicide is legal, the
//!    opponent stones in the region must touch the chain too, otherwise
//!    they could be sacrificed to fill the eye.
//! 3. Repeatedly discard chains with fewer than two vital regions, and
//!    regions touching a discarded chain, until nothing changes.
//!
//! Surviving chains own their stones. Surviving regions that are vital to
//! at least one surviving chain are owned outright, opponent stones
//! included. Results are recomputed from scratch on every call.

use std::fmt;

use crate::board::{Board, Cell, Color, Loc};
use crate::constants::MAX_ARR_SIZE;

/// Owner of every point, indexed by location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ownership {
    x_size: usize,
    y_size: usize,
    owners: [Option<Color>; MAX_ARR_SIZE],
}

impl Ownership {
    fn empty(board: &Board) -> Self {
        Self {
            x_size: board.x_size(),
            y_size: board.y_size(),
            owners: [None; MAX_ARR_SIZE],
        }
    }

    #[inline]
    pub fn get(&self, loc: Loc) -> Option<Color> {
        self.owners[loc]
    }

    /// Owner of `(x, y)`.
    pub fn at(&self, x: usize, y: usize) -> Option<Color> {
        self.owners[(x + 1) + (y + 1) * (self.x_size + 1)]
    }

    /// Number of points owned by `color`.
    pub fn count(&self, color: Color) -> usize {
        self.owners.iter().filter(|&&o| o == Some(color)).count()
    }
}

/// Renders one row per line, one character per point, no separators.
impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.y_size {
            for x in 0..self.x_size {
                let c = match self.at(x, y) {
                    Some(color) => color.to_char(),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A maximal connected set of points not occupied by `pla`.
struct Region {
    points: Vec<Loc>,
    bordering_chains: Vec<usize>,
    /// Chains for which this region is an eye that cannot be filled.
    vital_for: Vec<usize>,
}

/// Flood-fill one connected component of cells matching `member`.
fn flood(board: &Board, start: Loc, visited: &mut [bool], member: impl Fn(Cell) -> bool) -> Vec<Loc> {
    let mut stack = vec![start];
    let mut out = Vec::new();
    while let Some(loc) = stack.pop() {
        if visited[loc] {
            continue;
        }
        visited[loc] = true;
        out.push(loc);
        for n in board.adjacent(loc) {
            if !visited[n] && member(board.get(n)) {
                stack.push(n);
            }
        }
    }
    out
}

fn find_regions(
    board: &Board,
    pla: Color,
    chain_of: &[usize],
    multi_stone_suicide_legal: bool,
) -> Vec<Region> {
    let own = Cell::Stone(pla);
    let is_region_cell = |c: Cell| c != own && c != Cell::Wall;
    let mut visited = [false; MAX_ARR_SIZE];
    let mut regions = Vec::new();

    for start in board.locs() {
        if visited[start] || !is_region_cell(board.get(start)) {
            continue;
        }
        let points = flood(board, start, &mut visited, is_region_cell);

        let mut bordering_chains = Vec::new();
        for &p in &points {
            for n in board.adjacent(p) {
                if board.get(n) == own && !bordering_chains.contains(&chain_of[n]) {
                    bordering_chains.push(chain_of[n]);
                }
            }
        }

        let vital_for = bordering_chains
            .iter()
            .copied()
            .filter(|&ci| {
                points.iter().all(|&p| {
                    let must_touch = board.is_empty_at(p) || multi_stone_suicide_legal;
                    !must_touch || board.adjacent(p).into_iter().any(|n| board.get(n) == own && chain_of[n] == ci)
                })
            })
            .collect();

        regions.push(Region {
            points,
            bordering_chains,
            vital_for,
        });
    }
    regions
}

/// Mark the pass-alive chains of `pla` and the regions they own.
fn mark_pass_alive(board: &Board, pla: Color, multi_stone_suicide_legal: bool, out: &mut Ownership) {
    let own = Cell::Stone(pla);

    // Step 1: Find all chains of the given color
    let mut visited = [false; MAX_ARR_SIZE];
    let mut chain_of = vec![usize::MAX; MAX_ARR_SIZE];
    let mut chains: Vec<Vec<Loc>> = Vec::new();
    for start in board.locs() {
        if visited[start] || board.get(start) != own {
            continue;
        }
        let chain = flood(board, start, &mut visited, |c| c == own);
        for &s in &chain {
            chain_of[s] = chains.len();
        }
        chains.push(chain);
    }
    if chains.is_empty() {
        return;
    }

    // Step 2: Iterate until stable
    let regions = find_regions(board, pla, &chain_of, multi_stone_suicide_legal);
    let mut chain_alive = vec![true; chains.len()];
    let mut region_alive = vec![true; regions.len()];
    loop {
        let mut vital_counts = vec![0usize; chains.len()];
        for (ri, region) in regions.iter().enumerate() {
            if region_alive[ri] {
                for &ci in &region.vital_for {
                    vital_counts[ci] += 1;
                }
            }
        }

        let mut changed = false;
        for ci in 0..chains.len() {
            if chain_alive[ci] && vital_counts[ci] < 2 {
                chain_alive[ci] = false;
                changed = true;
            }
        }
        for (ri, region) in regions.iter().enumerate() {
            if region_alive[ri] && region.bordering_chains.iter().any(|&ci| !chain_alive[ci]) {
                region_alive[ri] = false;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    for (ci, chain) in chains.iter().enumerate() {
        if chain_alive[ci] {
            for &s in chain {
                out.owners[s] = Some(pla);
            }
        }
    }
    for (ri, region) in regions.iter().enumerate() {
        if region_alive[ri] && region.vital_for.iter().any(|&ci| chain_alive[ci]) {
            for &p in &region.points {
                out.owners[p] = Some(pla);
            }
        }
    }
}

/// Points that are unconditionally settled, per color.
pub fn calculate_pass_alive_territory(board: &Board, multi_stone_suicide_legal: bool) -> Ownership {
    let mut out = Ownership::empty(board);
    mark_pass_alive(board, Color::Black, multi_stone_suicide_legal, &mut out);
    mark_pass_alive(board, Color::White, multi_stone_suicide_legal, &mut out);
    out
}

/// Area ownership for area scoring.
///
/// Pass-alive ownership takes precedence. Remaining stones count for their
/// color, and remaining empty regions count for a color only when every
/// stone bordering them is of that color.
pub fn calculate_area(board: &Board, multi_stone_suicide_legal: bool) -> Ownership {
    let mut out = calculate_pass_alive_territory(board, multi_stone_suicide_legal);
    let mut visited = [false; MAX_ARR_SIZE];

    for start in board.locs() {
        if out.owners[start].is_some() || visited[start] {
            continue;
        }
        match board.get(start) {
            Cell::Stone(c) => out.owners[start] = Some(c),
            Cell::Empty => {
                let free = |loc: Loc| board.is_empty_at(loc) && out.owners[loc].is_none();
                let mut stack = vec![start];
                let mut points = Vec::new();
                let mut borders_black = false;
                let mut borders_white = false;
                while let Some(loc) = stack.pop() {
                    if visited[loc] {
                        continue;
                    }
                    visited[loc] = true;
                    points.push(loc);
                    for n in board.adjacent(loc) {
                        match board.get(n) {
                            Cell::Stone(Color::Black) => borders_black = true,
                            Cell::Stone(Color::White) => borders_white = true,
                            Cell::Empty if !visited[n] && free(n) => stack.push(n),
                            _ => {}
                        }
                    }
                }
                let owner = match (borders_black, borders_white) {
                    (true, false) => Some(Color::Black),
                    (false, true) => Some(Color::White),
                    _ => None,
                };
                for p in points {
                    out.owners[p] = owner;
                }
            }
            Cell::Wall => {}
        }
    }
    out
}
