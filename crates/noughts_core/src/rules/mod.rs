//! Round evaluation: win detection and full-board checks.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{winning_line, Line, LINES};
