//! Win detection.

use crate::board::{Board, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three coordinates that form a win when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Coord; 3]);

impl Line {
    /// The coordinates of the line.
    pub fn cells(&self) -> [Coord; 3] {
        self.0
    }

    /// Whether the line passes through the given coordinate.
    pub fn contains(&self, at: Coord) -> bool {
        self.0.contains(&at)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}, {b}, {c}")
    }
}

/// The 8 candidate lines in scan order: rows top to bottom, columns left
/// to right, the top-left diagonal, then the top-right diagonal.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Coord::TopLeft, Coord::Top, Coord::TopRight]),
    Line([Coord::Left, Coord::Center, Coord::Right]),
    Line([Coord::BottomLeft, Coord::Bottom, Coord::BottomRight]),
    // Columns
    Line([Coord::TopLeft, Coord::Left, Coord::BottomLeft]),
    Line([Coord::Top, Coord::Center, Coord::Bottom]),
    Line([Coord::TopRight, Coord::Right, Coord::BottomRight]),
    // Diagonals
    Line([Coord::TopLeft, Coord::Center, Coord::BottomRight]),
    Line([Coord::TopRight, Coord::Center, Coord::BottomLeft]),
];

/// Finds a line completed by `mark`.
///
/// Scans `LINES` in declaration order and returns the first line whose
/// three cells all hold `mark`, so a move completing two lines at once
/// reports the earlier one in scan order.
#[instrument]
pub fn winning_line(board: &Board, mark: Mark) -> Option<Line> {
    LINES
        .iter()
        .copied()
        .find(|line| line.cells().iter().all(|at| board.get(*at).mark() == Some(mark)))
}
