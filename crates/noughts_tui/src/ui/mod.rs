//! Widget helpers shared by the screens.

pub mod board;
