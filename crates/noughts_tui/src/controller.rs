//! Controller driving the setup and game screens.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, SetupScreen};

/// How long to wait for input before letting the loop tick.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Setup(SetupScreen),
    Game(GameScreen),
}

/// Controller that drives the screen state machine.
///
/// Call [`Controller::run`] to start the event loop.
#[derive(Debug)]
pub struct Controller {
    seed: Option<u64>,
    reset_delay: Duration,
}

impl Controller {
    /// Creates a new controller.
    #[instrument]
    pub fn new(seed: Option<u64>, reset_delay: Duration) -> Self {
        info!("Creating Controller");
        Self { seed, reset_delay }
    }

    /// Runs the event loop until the user quits.
    ///
    /// The poll timeout doubles as the tick that fires pending auto resets,
    /// so the loop stays responsive without a separate timer.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        info!("Starting event loop");

        let mut screen = ActiveScreen::Setup(SetupScreen::new());

        loop {
            terminal.draw(|f| match &screen {
                ActiveScreen::Setup(s) => s.render(f),
                ActiveScreen::Game(s) => s.render(f),
            })?;

            // Delayed resets fire from the tick, not from input.
            if let ActiveScreen::Game(s) = &mut screen {
                s.on_tick();
            }

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::Setup(s) => s.handle_key(key),
                    ActiveScreen::Game(s) => s.handle_key(key),
                };

                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("Quitting");
                        return Ok(());
                    }
                };
            }
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToSetup => {
                info!("Navigating to Setup");
                Some(ActiveScreen::Setup(SetupScreen::new()))
            }

            ScreenTransition::GoToGame {
                first_mover,
                human_mark,
            } => {
                info!(
                    first_mover = %first_mover.label(),
                    human_mark = %human_mark,
                    "Navigating to Game"
                );
                Some(ActiveScreen::Game(GameScreen::new(
                    first_mover,
                    human_mark,
                    self.seed,
                    self.reset_delay,
                )))
            }

            ScreenTransition::Quit => None,
        }
    }
}
