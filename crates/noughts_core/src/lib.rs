//! Tic-tac-toe against a uniformly random computer opponent.
//!
//! The crate is pure game logic with no I/O. A [`Session`] owns the board,
//! the turn phase, the computer's move policy, and win tallies that persist
//! across round resets. Frontends drive it through [`Session::place_human`]
//! and [`Session::reset`] and render from the accessors.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Coord, FirstMover, Mark, MoveResult, Session};
//!
//! let mut session = Session::with_seed(FirstMover::Human, Mark::X, 42);
//! match session.place_human(Coord::Center) {
//!     Some(MoveResult::Continue) => {} // the computer has replied
//!     Some(outcome) => println!("round over: {outcome:?}"),
//!     None => println!("placement ignored"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod policy;
mod rules;
mod session;

// Crate-level exports - Board types
pub use board::{Board, Cell, Coord, Mark, PlaceError};

// Crate-level exports - Move policy
pub use policy::choose_move;

// Crate-level exports - Rules
pub use rules::{is_full, winning_line, Line, LINES};

// Crate-level exports - Session
pub use session::{FirstMover, MoveResult, Phase, Scoreboard, Session};
