//! Screen trait and transition type for the two-screen state machine.

use crossterm::event::KeyEvent;
use noughts_core::{FirstMover, Mark};
use ratatui::Frame;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`Controller`](crate::controller::Controller) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Close the game view and return to setup.
    GoToSetup,
    /// Start a session with the chosen options and show the game view.
    GoToGame {
        /// Who takes the opening move of round one.
        first_mover: FirstMover,
        /// The mark the human plays.
        human_mark: Mark,
    },
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
