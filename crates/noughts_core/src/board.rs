//! Core domain types: marks, cells, coordinates, and the 3x3 board.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the other mark. Used when cycling a selection.
    pub fn toggle(self) -> Self {
        self.opponent()
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    Empty,
    /// Cell carrying a mark.
    Marked(Mark),
}

impl Cell {
    /// Whether the cell holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in the cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// A coordinate on the board.
///
/// Variants are declared in scan order (row-major, top-left first), so
/// iteration visits rows top to bottom and cells left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Coord {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    Top,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    Left,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    Right,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    Bottom,
    /// Row 2, column 2.
    BottomRight,
}

impl Coord {
    /// All 9 coordinates in scan order.
    pub const ALL: [Coord; 9] = [
        Coord::TopLeft,
        Coord::Top,
        Coord::TopRight,
        Coord::Left,
        Coord::Center,
        Coord::Right,
        Coord::BottomLeft,
        Coord::Bottom,
        Coord::BottomRight,
    ];

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Coord::TopLeft => 0,
            Coord::Top => 1,
            Coord::TopRight => 2,
            Coord::Left => 3,
            Coord::Center => 4,
            Coord::Right => 5,
            Coord::BottomLeft => 6,
            Coord::Bottom => 7,
            Coord::BottomRight => 8,
        }
    }

    /// Creates a coordinate from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of the coordinate (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of the coordinate (0-2, left to right).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a coordinate from row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Display label for the coordinate.
    pub fn label(self) -> &'static str {
        match self {
            Coord::TopLeft => "top-left",
            Coord::Top => "top",
            Coord::TopRight => "top-right",
            Coord::Left => "left",
            Coord::Center => "center",
            Coord::Right => "right",
            Coord::BottomLeft => "bottom-left",
            Coord::Bottom => "bottom",
            Coord::BottomRight => "bottom-right",
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("cell {} is already marked", _0)]
    Occupied(Coord),
}

impl std::error::Error for PlaceError {}

/// 3x3 board of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.index()]
    }

    /// Whether the cell at the given coordinate is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at).is_empty()
    }

    /// Places a mark, failing if the cell is occupied.
    pub fn place(&mut self, at: Coord, mark: Mark) -> Result<(), PlaceError> {
        if !self.is_empty(at) {
            return Err(PlaceError::Occupied(at));
        }
        self.cells[at.index()] = Cell::Marked(mark);
        Ok(())
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// All cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Empty coordinates in scan order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::iter().filter(|at| self.is_empty(*at)).collect()
    }

    /// Number of cells holding a mark.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let cell = self.cells[row * 3 + col];
                let symbol = match cell.mark() {
                    None => ' ',
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
