//! Magic-indexed sliding attack tables.
//!
//! For each square and slider kind, the occupancy bits that could block a
//! ray are hashed to a bucket with a single multiply and shift:
//! `((occ & relevant) * magic) >> shift`. The bucket holds the exact
//! attack bitboard for that sub-occupancy. Tables are built once at first
//! use from the relevant masks, the rays, and the magic constants.

mod magics;

use once_cell::sync::Lazy;

use super::masks::{Direction, BETWEEN, BISHOP_RELEVANT, RAYS, ROOK_RELEVANT};
use super::types::{pop_lsb, Bitboard, Square};
use magics::{BISHOP_MAGICS, BISHOP_SHIFTS, ROOK_MAGICS, ROOK_SHIFTS};

/// Per-square attack buckets flattened into one vector
struct SliderTable {
    offsets: [usize; 64],
    attacks: Vec<Bitboard>,
}

impl SliderTable {
    fn build(
        relevant: &[Bitboard; 64],
        magic: &[u64; 64],
        shift: &[u8; 64],
        dirs: [Direction; 4],
    ) -> Self {
        let mut offsets = [0usize; 64];
        let mut attacks: Vec<Bitboard> = Vec::new();

        for sq in 0..64 {
            let mask = relevant[sq];
            let bits = 64 - u32::from(shift[sq]);
            debug_assert_eq!(
                bits,
                mask.popcount(),
                "shift width disagrees with relevant mask on square {sq}"
            );

            let entries = 1usize << bits;
            offsets[sq] = attacks.len();
            attacks.resize(attacks.len() + entries, Bitboard::EMPTY);
            let mut filled = vec![false; entries];

            let mut pattern = 0u64;
            while pattern < entries as u64 {
                let occupancy = occupancy_from_pattern(pattern, mask);
                let attack = ray_attacks(Square::from_index(sq), occupancy, dirs);
                let idx = magic_index(occupancy, magic[sq], shift[sq]);

                // Collisions are fine only when both occupancies produce
                // the same attack set.
                debug_assert!(
                    !filled[idx] || attacks[offsets[sq] + idx] == attack,
                    "destructive magic collision on square {sq}"
                );
                attacks[offsets[sq] + idx] = attack;
                filled[idx] = true;
                pattern += 1;
            }
        }

        SliderTable { offsets, attacks }
    }

    #[inline]
    fn lookup(&self, sq: usize, idx: usize) -> Bitboard {
        self.attacks[self.offsets[sq] + idx]
    }
}

/// Expand the i-th sub-occupancy pattern of a relevant mask
fn occupancy_from_pattern(pattern: u64, mask: Bitboard) -> Bitboard {
    let mut occupancy = Bitboard::EMPTY;
    let mut remaining = mask;
    let mut bit = 0;
    while !remaining.is_empty() {
        let sq = pop_lsb(&mut remaining);
        if pattern & (1 << bit) != 0 {
            occupancy.set(sq);
        }
        bit += 1;
    }
    occupancy
}

/// Exact slider attacks by walking each ray to its first blocker.
/// The reference the magic tables are built (and verified) against.
pub(crate) fn ray_attacks(sq: Square, occupancy: Bitboard, dirs: [Direction; 4]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for dir in dirs {
        let full_ray = RAYS[sq.as_index()][dir.index()];
        let blockers = full_ray & occupancy;
        if blockers.is_empty() {
            attacks |= full_ray;
        } else {
            let nearest = if dir.is_positive() {
                blockers.lsb()
            } else {
                blockers.msb()
            };
            attacks |= BETWEEN[sq.as_index()][nearest.as_index()] | Bitboard::from_square(nearest);
        }
    }
    attacks
}

#[inline]
fn magic_index(occupancy: Bitboard, magic: u64, shift: u8) -> usize {
    (occupancy.0.wrapping_mul(magic) >> shift) as usize
}

static ROOK_TABLE: Lazy<SliderTable> = Lazy::new(|| {
    let table = SliderTable::build(
        &ROOK_RELEVANT,
        &ROOK_MAGICS,
        &ROOK_SHIFTS,
        Direction::ORTHOGONAL,
    );
    #[cfg(feature = "logging")]
    log::debug!("rook attack table built: {} buckets", table.attacks.len());
    table
});

static BISHOP_TABLE: Lazy<SliderTable> = Lazy::new(|| {
    let table = SliderTable::build(
        &BISHOP_RELEVANT,
        &BISHOP_MAGICS,
        &BISHOP_SHIFTS,
        Direction::DIAGONAL,
    );
    #[cfg(feature = "logging")]
    log::debug!("bishop attack table built: {} buckets", table.attacks.len());
    table
});

/// Rook attacks from a square given total board occupancy
#[inline]
pub(crate) fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    let idx = sq.as_index();
    let relevant = occupancy & ROOK_RELEVANT[idx];
    ROOK_TABLE.lookup(idx, magic_index(relevant, ROOK_MAGICS[idx], ROOK_SHIFTS[idx]))
}

/// Bishop attacks from a square given total board occupancy
#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    let idx = sq.as_index();
    let relevant = occupancy & BISHOP_RELEVANT[idx];
    BISHOP_TABLE.lookup(idx, magic_index(relevant, BISHOP_MAGICS[idx], BISHOP_SHIFTS[idx]))
}

/// Queen attacks: union of the rook and bishop lookups
#[inline]
pub(crate) fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    rook_attacks(sq, occupancy) | bishop_attacks(sq, occupancy)
}
