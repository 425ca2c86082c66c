//! Zobrist hashing for position fingerprints.
//!
//! Fingerprints are 128 bits wide so that superko detection over long game
//! lines never has to worry about collisions. The random tables are built
//! once per process from a fixed seed, so the same position always gets the
//! same fingerprint across runs.
//!
//! The tables live behind a [`LazyLock`]; call [`init`] before spawning
//! worker threads if you want the one-time cost paid up front. After that
//! the tables are read-only.

use std::fmt;
use std::ops::{BitXor, BitXorAssign};
use std::sync::LazyLock;

use crate::board::Color;
use crate::constants::{MAX_ARR_SIZE, MAX_ENCORE_PHASE, MAX_LEN};

const ZOBRIST_SEED: u64 = 0x5354_4f4e_4552_554c;

/// A 128-bit position fingerprint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hash128 {
    pub hash0: u64,
    pub hash1: u64,
}

impl Hash128 {
    pub const ZERO: Hash128 = Hash128 { hash0: 0, hash1: 0 };

    pub const fn new(hash0: u64, hash1: u64) -> Self {
        Self { hash0, hash1 }
    }

    fn random(rng: &mut fastrand::Rng) -> Self {
        Self::new(rng.u64(..), rng.u64(..))
    }
}

impl BitXor for Hash128 {
    type Output = Hash128;

    fn bitxor(self, rhs: Hash128) -> Hash128 {
        Hash128::new(self.hash0 ^ rhs.hash0, self.hash1 ^ rhs.hash1)
    }
}

impl BitXorAssign for Hash128 {
    fn bitxor_assign(&mut self, rhs: Hash128) {
        self.hash0 ^= rhs.hash0;
        self.hash1 ^= rhs.hash1;
    }
}

/// Renders as 32 uppercase hex digits.
impl fmt::Display for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}{:016X}", self.hash0, self.hash1)
    }
}

struct ZobristTables {
    /// Indexed by `[loc][color]`.
    stones: Vec<[Hash128; 2]>,
    size_x: [Hash128; MAX_LEN + 1],
    size_y: [Hash128; MAX_LEN + 1],
    player: [Hash128; 2],
    encore: [Hash128; MAX_ENCORE_PHASE as usize + 1],
}

impl ZobristTables {
    fn generate(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let stones = (0..MAX_ARR_SIZE)
            .map(|_| [Hash128::random(&mut rng), Hash128::random(&mut rng)])
            .collect();
        let size_x = std::array::from_fn(|_| Hash128::random(&mut rng));
        let size_y = std::array::from_fn(|_| Hash128::random(&mut rng));
        let player = std::array::from_fn(|_| Hash128::random(&mut rng));
        // Phase 0 is the normal game and leaves fingerprints untouched.
        let mut encore: [Hash128; MAX_ENCORE_PHASE as usize + 1] =
            std::array::from_fn(|_| Hash128::random(&mut rng));
        encore[0] = Hash128::ZERO;
        Self {
            stones,
            size_x,
            size_y,
            player,
            encore,
        }
    }
}

static ZOBRIST: LazyLock<ZobristTables> = LazyLock::new(|| ZobristTables::generate(ZOBRIST_SEED));

/// Force table construction. Idempotent.
pub fn init() {
    LazyLock::force(&ZOBRIST);
}

#[inline]
fn color_index(color: Color) -> usize {
    match color {
        Color::Black => 0,
        Color::White => 1,
    }
}

/// Hash contribution of a stone of `color` at `loc`.
#[inline]
pub fn stone(loc: usize, color: Color) -> Hash128 {
    ZOBRIST.stones[loc][color_index(color)]
}

/// Hash contribution of the board dimensions.
pub fn board_size(x_size: usize, y_size: usize) -> Hash128 {
    ZOBRIST.size_x[x_size] ^ ZOBRIST.size_y[y_size]
}

/// Hash contribution of the player to move.
#[inline]
pub fn player(pla: Color) -> Hash128 {
    ZOBRIST.player[color_index(pla)]
}

/// Hash contribution of an encore phase. Phase 0 contributes nothing.
#[inline]
pub fn encore_phase(phase: u8) -> Hash128 {
    ZOBRIST.encore[usize::from(phase.min(MAX_ENCORE_PHASE))]
}
