//! Setup screen: choose who opens and which mark the human plays.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use noughts_core::{FirstMover, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::screen::{Screen, ScreenTransition};

/// Rows of the setup menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupItem {
    FirstMover,
    HumanMark,
    Start,
}

impl SetupItem {
    fn all() -> &'static [SetupItem] {
        &[Self::FirstMover, Self::HumanMark, Self::Start]
    }
}

/// State for the setup screen.
///
/// Both options start unset, and starting a game refuses with a warning
/// until each has been chosen.
#[derive(Debug, Getters)]
pub struct SetupScreen {
    first_mover: Option<FirstMover>,
    human_mark: Option<Mark>,
    warning: Option<&'static str>,
    #[getter(skip)]
    list_state: ListState,
}

impl SetupScreen {
    /// Creates a setup screen with nothing chosen yet.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SetupScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            first_mover: None,
            human_mark: None,
            warning: None,
            list_state,
        }
    }

    /// Moves selection up.
    fn select_previous(&mut self) {
        let count = SetupItem::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    fn select_next(&mut self) {
        let count = SetupItem::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected menu row.
    fn selected_item(&self) -> SetupItem {
        let items = SetupItem::all();
        let idx = self.list_state.selected().unwrap_or(0);
        items[idx.min(items.len() - 1)]
    }

    /// Cycles the value of the selected option row.
    ///
    /// The first press picks the leading value, later presses alternate.
    #[instrument(skip(self))]
    fn cycle_selected(&mut self) {
        match self.selected_item() {
            SetupItem::FirstMover => {
                let next = match self.first_mover {
                    None => FirstMover::Human,
                    Some(current) => current.toggle(),
                };
                info!(first_mover = %next.label(), "First mover chosen");
                self.first_mover = Some(next);
            }
            SetupItem::HumanMark => {
                let next = match self.human_mark {
                    None => Mark::X,
                    Some(current) => current.toggle(),
                };
                info!(human_mark = %next, "Human mark chosen");
                self.human_mark = Some(next);
            }
            SetupItem::Start => {}
        }
        self.warning = None;
    }

    /// Starts a game when both options are chosen, otherwise warns.
    #[instrument(skip(self))]
    fn start_game(&mut self) -> ScreenTransition {
        match (self.first_mover, self.human_mark) {
            (Some(first_mover), Some(human_mark)) => {
                info!(
                    first_mover = %first_mover.label(),
                    human_mark = %human_mark,
                    "Starting game"
                );
                ScreenTransition::GoToGame {
                    first_mover,
                    human_mark,
                }
            }
            _ => {
                warn!("Start refused, options incomplete");
                self.warning = Some("Choose both options first!");
                ScreenTransition::Stay
            }
        }
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SetupScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
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

        let first_label = match self.first_mover {
            Some(first) => first.label(),
            None => "choose",
        };
        let mark_label = match self.human_mark {
            Some(Mark::X) => "X",
            Some(Mark::O) => "O",
            None => "choose",
        };
        let items = vec![
            ListItem::new(format!("Who moves first?    [ {first_label} ]")),
            ListItem::new(format!("Your mark           [ {mark_label} ]")),
            ListItem::new("Start Game"),
        ];

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("New Game"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let warning = Paragraph::new(self.warning.unwrap_or(""))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(warning, chunks[2]);

        let help = Paragraph::new("↑↓: Navigate | ←→ / Enter: Choose | s: Start | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.cycle_selected();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.selected_item() {
                SetupItem::Start => self.start_game(),
                _ => {
                    self.cycle_selected();
                    ScreenTransition::Stay
                }
            },
            KeyCode::Char('s') | KeyCode::Char('S') => self.start_game(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Quitting from setup");
                ScreenTransition::Quit
            }
            _ => ScreenTransition::Stay,
        }
    }
}
