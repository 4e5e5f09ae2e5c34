//! Game session: turn state, the computer opponent, and score tallies.

use crate::board::{Board, Coord, Mark};
use crate::policy;
use crate::rules::{self, Line};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which side takes the opening move of the first round.
///
/// Defaults to [`FirstMover::Human`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FirstMover {
    /// The human opens.
    #[default]
    Human,
    /// The computer opens.
    Computer,
}

impl FirstMover {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "You",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Position in the round lifecycle.
///
/// The computer replies synchronously inside a placement call, so callers
/// only ever observe `AwaitingHuman` or `RoundOver`; `AwaitingComputer` is
/// occupied transiently while a computer move resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to place a mark.
    AwaitingHuman,
    /// The computer is due to place a mark.
    AwaitingComputer,
    /// The round has ended in a win or a tie.
    RoundOver,
}

/// Outcome of an accepted human placement, covering the computer's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The round continues and the human is to move.
    Continue,
    /// The human completed the contained line.
    HumanWin(Line),
    /// The computer completed the contained line.
    ComputerWin(Line),
    /// All nine cells are marked with no line completed.
    Tie,
}

/// Win tallies carried across rounds within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize,
)]
pub struct Scoreboard {
    /// Rounds the human has won.
    human: u32,
    /// Rounds the computer has won.
    computer: u32,
}

/// A play session against the random computer opponent.
///
/// Holds the board, the turn phase, the policy RNG, and win tallies that
/// survive round resets. Ties bump neither tally.
#[derive(Debug)]
pub struct Session {
    board: Board,
    human_mark: Mark,
    phase: Phase,
    moves: u8,
    winning_line: Option<Line>,
    scores: Scoreboard,
    rng: StdRng,
}

impl Session {
    /// Creates a session seeded from system entropy.
    ///
    /// When the computer opens, its first move is placed before this
    /// returns, so the human is always the one to move next.
    #[instrument]
    pub fn new(first_mover: FirstMover, human_mark: Mark) -> Self {
        Self::with_rng(first_mover, human_mark, StdRng::from_os_rng())
    }

    /// Creates a session with a fixed seed for reproducible play.
    #[instrument]
    pub fn with_seed(first_mover: FirstMover, human_mark: Mark, seed: u64) -> Self {
        Self::with_rng(first_mover, human_mark, StdRng::seed_from_u64(seed))
    }

    fn with_rng(first_mover: FirstMover, human_mark: Mark, rng: StdRng) -> Self {
        let mut session = Self {
            board: Board::new(),
            human_mark,
            phase: Phase::AwaitingHuman,
            moves: 0,
            winning_line: None,
            scores: Scoreboard::default(),
            rng,
        };
        session.start_round(first_mover);
        info!(?first_mover, %human_mark, "Session created");
        session
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The mark the human plays.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// The mark the computer plays.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Accepted placements in the current round, both sides combined.
    pub fn moves(&self) -> u8 {
        self.moves
    }

    /// The completed line of the current round, if one has been found.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Win tallies for the session.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Places the human mark at `at` and resolves the computer's reply.
    ///
    /// Returns `None` without changing any state when the round is over,
    /// the computer is due to move, or the cell is occupied. Invalid input
    /// is ignored rather than reported.
    #[instrument(skip(self), fields(at = %at, phase = ?self.phase))]
    pub fn place_human(&mut self, at: Coord) -> Option<MoveResult> {
        if self.phase != Phase::AwaitingHuman {
            debug!("Placement ignored, human is not to move");
            return None;
        }
        if self.board.place(at, self.human_mark).is_err() {
            debug!("Placement ignored, cell occupied");
            return None;
        }
        self.moves += 1;
        debug!(moves = self.moves, board = %self.board.display(), "Human placed");

        if let Some(line) = rules::winning_line(&self.board, self.human_mark) {
            self.finish_won(line, true);
            return Some(MoveResult::HumanWin(line));
        }
        if rules::is_full(&self.board) {
            self.finish_tied();
            return Some(MoveResult::Tie);
        }

        self.phase = Phase::AwaitingComputer;
        Some(self.computer_step())
    }

    /// Starts the next round, keeping the score tallies.
    ///
    /// Every round after the first opens with the human, regardless of who
    /// opened round one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.start_round(FirstMover::Human);
        info!("Round reset");
    }

    fn start_round(&mut self, opener: FirstMover) {
        self.board.clear();
        self.moves = 0;
        self.winning_line = None;
        self.phase = match opener {
            FirstMover::Human => Phase::AwaitingHuman,
            FirstMover::Computer => Phase::AwaitingComputer,
        };
        if self.phase == Phase::AwaitingComputer {
            // An opening move cannot end the round, so the result is dropped.
            self.computer_step();
        }
    }

    /// Performs one computer move and evaluates the round.
    fn computer_step(&mut self) -> MoveResult {
        debug_assert_eq!(self.phase, Phase::AwaitingComputer);
        let at = policy::choose_move(&self.board, &mut self.rng)
            .expect("an empty cell remains while the round is live");
        self.board
            .place(at, self.computer_mark())
            .expect("policy only selects empty cells");
        self.moves += 1;
        debug!(at = %at, moves = self.moves, board = %self.board.display(), "Computer placed");

        if let Some(line) = rules::winning_line(&self.board, self.computer_mark()) {
            self.finish_won(line, false);
            return MoveResult::ComputerWin(line);
        }
        if rules::is_full(&self.board) {
            self.finish_tied();
            return MoveResult::Tie;
        }

        self.phase = Phase::AwaitingHuman;
        MoveResult::Continue
    }

    fn finish_won(&mut self, line: Line, human_won: bool) {
        self.winning_line = Some(line);
        self.phase = Phase::RoundOver;
        if human_won {
            self.scores.human += 1;
        } else {
            self.scores.computer += 1;
        }
        info!(%line, human_won, "Round won");
    }

    fn finish_tied(&mut self) {
        self.phase = Phase::RoundOver;
        info!("Round tied");
    }
}
