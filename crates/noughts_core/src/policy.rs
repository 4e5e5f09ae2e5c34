//! Computer move policy.

use crate::board::{Board, Coord};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::instrument;

/// Picks a uniformly random empty coordinate.
///
/// Returns `None` when the board is full. Every empty cell has equal
/// probability of selection regardless of position.
#[instrument(skip(rng))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let open = board.empty_cells();
    open.choose(rng).copied()
}
