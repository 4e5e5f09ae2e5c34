//! Property-based tests for session and policy invariants.
//!
//! Increase cases locally with: PROPTEST_CASES=800 cargo test

use std::env;

use noughts_core::{choose_move, Board, Coord, FirstMover, Mark, MoveResult, Phase, Session};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Helper to get proptest config from environment
fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property: the move counter always equals the number of marked cells,
    /// and each result variant implies a fixed advance of the counter.
    #[test]
    fn prop_move_count_tracks_board(
        seed in any::<u64>(),
        first_computer in any::<bool>(),
        picks in proptest::collection::vec(0usize..9, 1..12),
    ) {
        let first = if first_computer {
            FirstMover::Computer
        } else {
            FirstMover::Human
        };
        let mut session = Session::with_seed(first, Mark::X, seed);
        prop_assert_eq!(session.moves() as usize, session.board().marked_count());

        for pick in picks {
            if session.phase() != Phase::AwaitingHuman {
                break;
            }
            let open = session.board().empty_cells();
            let at = open[pick % open.len()];
            let before = session.moves();
            match session.place_human(at) {
                Some(MoveResult::Continue) => {
                    prop_assert_eq!(session.moves(), before + 2);
                    prop_assert_eq!(session.phase(), Phase::AwaitingHuman);
                }
                Some(MoveResult::HumanWin(_)) => prop_assert_eq!(session.moves(), before + 1),
                Some(MoveResult::ComputerWin(_)) => prop_assert_eq!(session.moves(), before + 2),
                Some(MoveResult::Tie) => prop_assert_eq!(session.moves(), 9),
                None => prop_assert!(false, "placement at an empty cell was ignored"),
            }
            prop_assert_eq!(session.moves() as usize, session.board().marked_count());
            prop_assert!(session.moves() <= 9);
        }
    }

    /// Property: placing at an occupied cell returns `None` and leaves the
    /// session untouched.
    #[test]
    fn prop_occupied_rejection_is_pure(
        seed in any::<u64>(),
        pick in 0usize..9,
    ) {
        let mut session = Session::with_seed(FirstMover::Human, Mark::X, seed);
        prop_assert_eq!(
            session.place_human(Coord::ALL[pick]),
            Some(MoveResult::Continue)
        );

        let occupied: Vec<Coord> = Coord::ALL
            .iter()
            .copied()
            .filter(|at| !session.board().is_empty(*at))
            .collect();
        let board_before = session.board().clone();
        let moves_before = session.moves();
        for at in occupied {
            prop_assert_eq!(session.place_human(at), None);
        }
        prop_assert_eq!(session.board(), &board_before);
        prop_assert_eq!(session.moves(), moves_before);
        prop_assert_eq!(session.phase(), Phase::AwaitingHuman);
    }

    /// Property: the policy only ever selects empty cells, and returns
    /// `None` exactly when the board is full.
    #[test]
    fn prop_policy_selects_only_empty_cells(
        cells in proptest::collection::vec(proptest::option::of(any::<bool>()), 9),
        rng_seed in any::<u64>(),
    ) {
        let mut board = Board::new();
        for (i, cell) in cells.iter().enumerate() {
            if let Some(is_x) = cell {
                let mark = if *is_x { Mark::X } else { Mark::O };
                board.place(Coord::from_index(i).unwrap(), mark).unwrap();
            }
        }
        let mut rng = StdRng::seed_from_u64(rng_seed);
        match choose_move(&board, &mut rng) {
            Some(at) => prop_assert!(board.is_empty(at)),
            None => prop_assert!(board.empty_cells().is_empty()),
        }
    }

    /// Property: every finished round is internally consistent. A tie fills
    /// the board with no line; a win records a line held by the winner.
    #[test]
    fn prop_round_end_is_consistent(
        seed in any::<u64>(),
        picks in proptest::collection::vec(0usize..9, 9),
    ) {
        let mut session = Session::with_seed(FirstMover::Human, Mark::X, seed);
        let mut last = None;
        for pick in picks {
            if session.phase() != Phase::AwaitingHuman {
                break;
            }
            let open = session.board().empty_cells();
            let at = open[pick % open.len()];
            last = session.place_human(at);
        }

        prop_assert_eq!(session.phase(), Phase::RoundOver);
        match last {
            Some(MoveResult::Tie) => {
                prop_assert_eq!(session.moves(), 9);
                prop_assert!(session.winning_line().is_none());
            }
            Some(MoveResult::HumanWin(line)) => {
                for at in line.cells() {
                    prop_assert_eq!(session.board().get(at).mark(), Some(session.human_mark()));
                }
                prop_assert_eq!(session.winning_line(), Some(line));
                prop_assert_eq!(*session.scores().human(), 1);
                prop_assert_eq!(*session.scores().computer(), 0);
            }
            Some(MoveResult::ComputerWin(line)) => {
                for at in line.cells() {
                    prop_assert_eq!(
                        session.board().get(at).mark(),
                        Some(session.computer_mark())
                    );
                }
                prop_assert_eq!(session.winning_line(), Some(line));
                prop_assert_eq!(*session.scores().human(), 0);
                prop_assert_eq!(*session.scores().computer(), 1);
            }
            Some(MoveResult::Continue) | None => {
                prop_assert!(false, "round did not finish");
            }
        }
    }

    /// Property: reset always yields an empty board with the human to move
    /// and the score tallies untouched, wherever the round stood.
    #[test]
    fn prop_reset_restores_a_fresh_round(
        seed in any::<u64>(),
        first_computer in any::<bool>(),
        picks in proptest::collection::vec(0usize..9, 0..9),
    ) {
        let first = if first_computer {
            FirstMover::Computer
        } else {
            FirstMover::Human
        };
        let mut session = Session::with_seed(first, Mark::O, seed);
        for pick in picks {
            if session.phase() != Phase::AwaitingHuman {
                break;
            }
            let open = session.board().empty_cells();
            let at = open[pick % open.len()];
            session.place_human(at);
        }

        let scores_before = *session.scores();
        session.reset();
        prop_assert_eq!(session.board(), &Board::new());
        prop_assert_eq!(session.moves(), 0);
        prop_assert_eq!(session.phase(), Phase::AwaitingHuman);
        prop_assert!(session.winning_line().is_none());
        prop_assert_eq!(session.scores(), &scores_before);
    }
}
