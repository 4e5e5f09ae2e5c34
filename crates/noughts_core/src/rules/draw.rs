//! Full-board detection.

use crate::board::Board;
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board with no completed line is a tie.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_line;
    use super::*;
    use crate::board::{Coord, Mark};

    fn is_tie(board: &Board) -> bool {
        is_full(board)
            && winning_line(board, Mark::X).is_none()
            && winning_line(board, Mark::O).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Coord::Center, Mark::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for at in Coord::ALL {
            board.place(at, Mark::X).unwrap();
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X X O
        // O O X
        // X X O
        let mut board = Board::new();
        for (at, mark) in [
            (Coord::TopLeft, Mark::X),
            (Coord::Top, Mark::X),
            (Coord::TopRight, Mark::O),
            (Coord::Left, Mark::O),
            (Coord::Center, Mark::O),
            (Coord::Right, Mark::X),
            (Coord::BottomLeft, Mark::X),
            (Coord::Bottom, Mark::X),
            (Coord::BottomRight, Mark::O),
        ] {
            board.place(at, mark).unwrap();
        }
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let mut board = Board::new();
        board.place(Coord::TopLeft, Mark::X).unwrap();
        board.place(Coord::Top, Mark::X).unwrap();
        board.place(Coord::TopRight, Mark::X).unwrap();
        board.place(Coord::Left, Mark::O).unwrap();
        board.place(Coord::Center, Mark::O).unwrap();
        assert!(!is_tie(&board));
    }
}
