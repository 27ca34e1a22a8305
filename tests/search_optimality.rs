//! Test suite for the minimax search agent
//! Validates optimality, purity, and the perfect-play draw guarantee

use noughts::{
    Agent, Board, GameEngine, Player, RandomAgent, SearchAgent, Session, Status,
};

/// Play a game to completion with both sides driven by the search agent,
/// optionally after a forced opening move
fn perfect_play_from(opening: Option<(usize, usize)>) -> Status {
    let mut engine = GameEngine::new();
    if let Some((row, col)) = opening {
        engine.apply_move(row, col).unwrap();
    }

    while engine.status() == Status::InProgress {
        let board = engine.board();
        let ((row, col), _) =
            SearchAgent.best_move(&board, engine.current_player(), engine.turn_count());
        engine.apply_move(row, col).unwrap();
    }
    engine.status()
}

mod perfect_play {
    use super::*;

    #[test]
    fn draws_from_the_empty_board() {
        assert_eq!(perfect_play_from(None), Status::Draw);
    }

    #[test]
    fn draws_from_every_opening() {
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(
                    perfect_play_from(Some((row, col))),
                    Status::Draw,
                    "perfect play after opening ({row}, {col}) should draw"
                );
            }
        }
    }

    #[test]
    fn session_of_two_search_agents_draws() {
        let mut session = Session::new(Box::new(SearchAgent), Box::new(SearchAgent));
        assert_eq!(session.run().unwrap(), Status::Draw);
    }
}

mod purity {
    use super::*;

    /// Random playouts give a spread of mid-game positions; at every one of
    /// them the search must propose an empty cell and leave the board alone
    #[test]
    fn never_mutates_and_never_targets_occupied_cells() {
        for seed in 0..15 {
            let mut engine = GameEngine::new();
            let mut random = RandomAgent::with_seed(seed);

            while engine.status() == Status::InProgress {
                let board = engine.board();
                let before = board;
                let ((row, col), _) =
                    SearchAgent.best_move(&board, engine.current_player(), engine.turn_count());

                assert_eq!(board, before, "search mutated the caller's board");
                assert!(
                    board.is_empty(row, col),
                    "search proposed occupied cell ({row}, {col}) on {}",
                    board.encode()
                );

                // Advance the game with a random move to vary the positions
                let (rand_row, rand_col) = random.select_move(&engine).unwrap();
                engine.apply_move(rand_row, rand_col).unwrap();
            }
        }
    }
}

mod tactics {
    use super::*;

    #[test]
    fn wins_in_one_as_x() {
        // X X . / O O . / . . .  with X to move
        let board = Board::from_string("XX.OO....").unwrap();
        let ((row, col), value) = SearchAgent.best_move(&board, Player::X, 4);
        assert_eq!((row, col), (0, 2));
        assert!(value > 0);
    }

    #[test]
    fn wins_in_one_as_o() {
        // X . X / O O . / X . .  with O to move: O completes the middle row
        let board = Board::from_string("X.XOO.X..").unwrap();
        let ((row, col), value) = SearchAgent.best_move(&board, Player::O, 5);
        assert_eq!((row, col), (1, 2));
        assert!(value > 0);
    }

    #[test]
    fn search_beats_or_draws_random_from_either_seat() {
        for seed in 0..10 {
            let mut session = Session::new(
                Box::new(SearchAgent),
                Box::new(RandomAgent::with_seed(seed)),
            );
            let status = session.run().unwrap();
            assert_ne!(status, Status::Won(Player::O), "random beat minimax as O");

            let mut session = Session::new(
                Box::new(RandomAgent::with_seed(seed)),
                Box::new(SearchAgent),
            );
            let status = session.run().unwrap();
            assert_ne!(status, Status::Won(Player::X), "random beat minimax as X");
        }
    }
}
