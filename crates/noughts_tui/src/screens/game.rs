//! Game screen: the board, score bar, status line, and delayed auto reset.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use noughts_core::{Coord, FirstMover, Mark, MoveResult, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::ui::board;

/// State for the game screen.
///
/// Owns the session plus view-side state: the placement cursor and the
/// deadline of the pending auto reset, if a round just ended.
#[derive(Debug, Getters)]
pub struct GameScreen {
    session: Session,
    cursor: Coord,
    status: String,
    reset_at: Option<Instant>,
    reset_delay: Duration,
}

impl GameScreen {
    /// Creates a game screen and starts its session.
    #[instrument]
    pub fn new(
        first_mover: FirstMover,
        human_mark: Mark,
        seed: Option<u64>,
        reset_delay: Duration,
    ) -> Self {
        debug!("Initializing GameScreen");
        let session = match seed {
            Some(seed) => Session::with_seed(first_mover, human_mark, seed),
            None => Session::new(first_mover, human_mark),
        };
        let status = match first_mover {
            FirstMover::Human => format!("You are {human_mark}. Your move."),
            FirstMover::Computer => {
                format!("You are {human_mark}. The computer opened. Your move.")
            }
        };
        Self {
            session,
            cursor: Coord::Center,
            status,
            reset_at: None,
            reset_delay,
        }
    }

    /// Fires the delayed reset once its deadline has passed.
    ///
    /// The controller calls this on every poll tick.
    pub fn on_tick(&mut self) {
        if let Some(deadline) = self.reset_at
            && Instant::now() >= deadline
        {
            self.reset_at = None;
            self.session.reset();
            self.status = "New round. Your move.".to_string();
            info!("Auto reset fired");
        }
    }

    /// Attempts a human placement and updates the status line.
    ///
    /// Rejected placements leave the screen exactly as it was.
    #[instrument(skip(self), fields(at = %at))]
    fn try_place(&mut self, at: Coord) {
        let Some(result) = self.session.place_human(at) else {
            debug!("Placement ignored");
            return;
        };
        match result {
            MoveResult::Continue => {
                self.status = "Computer replied. Your move.".to_string();
            }
            MoveResult::HumanWin(_) => {
                self.status = format!("{} wins!", self.session.human_mark());
                self.arm_reset();
            }
            MoveResult::ComputerWin(_) => {
                self.status = format!("{} wins!", self.session.computer_mark());
                self.arm_reset();
            }
            MoveResult::Tie => {
                self.status = "A tie!".to_string();
                self.arm_reset();
            }
        }
    }

    fn arm_reset(&mut self) {
        self.reset_at = Some(Instant::now() + self.reset_delay);
        debug!(delay_ms = self.reset_delay.as_millis() as u64, "Auto reset armed");
    }

    /// Starts the next round immediately, cancelling any pending auto reset.
    #[instrument(skip(self))]
    fn start_new_round(&mut self) {
        self.reset_at = None;
        self.session.reset();
        self.status = "New round. Your move.".to_string();
    }

    /// Moves the placement cursor, clamped to the board edge.
    fn move_cursor(&mut self, code: KeyCode) {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        let (row, col) = match code {
            KeyCode::Up => (row.saturating_sub(1), col),
            KeyCode::Down => ((row + 1).min(2), col),
            KeyCode::Left => (row, col.saturating_sub(1)),
            KeyCode::Right => (row, (col + 1).min(2)),
            _ => (row, col),
        };
        self.cursor = Coord::from_row_col(row, col).unwrap_or(self.cursor);
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(11),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Noughts")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let scores = self.session.scores();
        let score_text = format!(
            "You ({}) {}   :   {} Computer ({})",
            self.session.human_mark(),
            scores.human(),
            scores.computer(),
            self.session.computer_mark(),
        );
        let score_bar = Paragraph::new(score_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Score"));
        frame.render_widget(score_bar, chunks[1]);

        board::render_board(frame, chunks[2], &self.session, self.cursor);

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[3]);

        let help =
            Paragraph::new("↑↓←→: Move | Enter/Space: Place | 1-9: Place | n: New round | Esc: Setup")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.move_cursor(key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.try_place(self.cursor);
                ScreenTransition::Stay
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(at) = Coord::from_index(index) {
                    self.try_place(at);
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                info!("Manual new round");
                self.start_new_round();
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Leaving game view");
                ScreenTransition::GoToSetup
            }
            _ => ScreenTransition::Stay,
        }
    }
}
