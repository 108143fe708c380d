//! Behavioral properties of the game engine: outcomes, rejected moves,
//! time travel and resets.

mod common;

use common::{play, random_cell, random_empty_cell};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe_time_machine::{
    Cell, GameState, Outcome, Player, Snapshot, evaluate,
    tictactoe::{LineAnalyzer, WINNING_LINES},
};

mod outcome_evaluation {
    use super::*;

    #[test]
    fn seed_scenario_is_in_progress_after_five_moves() {
        // X . .    X at 0, 8, 7
        // . O .    O at 4, 1
        // . X X
        let state = play(&[0, 4, 8, 1, 7]);
        assert_eq!(state.current().encode(), "XO..O..XX");
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.to_move(), Player::O);
    }

    #[test]
    fn seed_scenario_completes_bottom_row() {
        let state = play(&[0, 4, 8, 1, 7, 2, 6]);
        assert_eq!(state.outcome(), Outcome::Win(Player::X));
        assert_eq!(state.winning_line(), Some([6, 7, 8]));
    }

    #[test]
    fn every_line_wins_for_both_marks() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut cells = [Cell::Empty; 9];
                for index in line {
                    cells[index] = player.to_cell();
                }
                let board = Snapshot::from_cells(cells);
                assert_eq!(evaluate(&board), Outcome::Win(player), "line {line:?}");
                assert_eq!(LineAnalyzer::winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        // X O X
        // X O O
        // O X X
        assert_eq!(state.current().encode(), "XOXXOOOXX");
        assert_eq!(state.outcome(), Outcome::Draw);
        assert_eq!(state.step_number(), 9);
    }

    #[test]
    fn random_games_report_at_most_one_result() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut state = GameState::new();
            while let Some(index) = random_empty_cell(&state, &mut rng) {
                if state.is_over() {
                    break;
                }
                state = state.try_apply_move(index).unwrap();

                for snapshot in state.history() {
                    let x = LineAnalyzer::has_won(snapshot, Player::X);
                    let o = LineAnalyzer::has_won(snapshot, Player::O);
                    let draw = evaluate(snapshot) == Outcome::Draw;
                    assert!(
                        [x, o, draw].iter().filter(|&&flag| flag).count() <= 1,
                        "conflicting results for\n{snapshot}"
                    );
                }
            }
            assert!(state.is_over());
        }
    }
}

mod rejected_moves {
    use super::*;

    #[test]
    fn occupied_cell_leaves_state_unchanged() {
        let state = play(&[4, 0, 8]);
        for index in [0, 4, 8] {
            let after = state.apply_move(index);
            assert_eq!(after, state);
            assert_eq!(after.history().len(), 4);
            assert_eq!(after.step_number(), 3);
            assert_eq!(after.max_step(), 3);
        }
    }

    #[test]
    fn moves_after_win_leave_state_unchanged() {
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.outcome(), Outcome::Win(Player::X));
        for index in state.current().empty_positions() {
            assert_eq!(state.apply_move(index), state);
        }
    }

    #[test]
    fn random_clicks_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut state = GameState::new();

        for _ in 0..5_000 {
            state = match rng.random_range(0..10) {
                0 => state.new_game(),
                1..=3 => {
                    let step = rng.random_range(0..=state.max_step());
                    state.jump_to(step)
                }
                _ => state.apply_move(random_cell(&mut rng)),
            };

            assert!(state.step_number() <= state.max_step());
            assert_eq!(state.history().len(), state.max_step() + 1);
            assert_eq!(state.to_move(), Player::for_step(state.step_number()));
            assert_eq!(state.current().occupied_count(), state.step_number());
        }
    }
}

mod time_travel {
    use super::*;

    #[test]
    fn replaying_first_move_after_jump_is_deterministic() {
        let original = play(&[4, 0, 8]);
        let first = original.history()[1];

        let replayed = original.jump_to(0).apply_move(4);
        assert_eq!(*replayed.current(), first);
        assert_eq!(replayed.history().len(), 2);
        assert_eq!(replayed.max_step(), 1);
    }

    #[test]
    fn jump_keeps_high_water_mark() {
        let state = play(&[0, 1, 2, 3]);
        let back = state.jump_to(1);
        assert_eq!(back.max_step(), 4);
        assert_eq!(back.history().len(), 5);
        assert_eq!(back.to_move(), Player::O);

        let branched = back.apply_move(5);
        assert_eq!(branched.max_step(), 2);
        assert_eq!(branched.history().len(), 3);
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let state = play(&[0, 1]);
        assert!(state.try_jump_to(3).is_err());
        assert_eq!(state.jump_to(3), state);
    }
}

mod new_game {
    use super::*;

    #[test]
    fn resets_from_any_state() {
        let fresh = GameState::new();
        let cases = [
            play(&[0, 1, 2]),
            play(&[0, 3, 1, 4, 2]).jump_to(2),
            play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]),
        ];
        for state in cases {
            let reset = state.new_game();
            assert_eq!(reset, fresh);
            assert_eq!(reset.history(), &[Snapshot::new()]);
            assert_eq!(reset.step_number(), 0);
            assert_eq!(reset.max_step(), 0);
        }
    }
}
