//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sliding_puzzle::{MoveOutcome, Puzzle, Status};

fn size_strategy() -> impl Strategy<Value = usize> {
    2..=6usize
}

fn shuffle_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Clicks, deliberately including coordinates just off the board.
fn clicks_strategy() -> impl Strategy<Value = Vec<(isize, isize)>> {
    prop::collection::vec((-1isize..=6, -1isize..=6), 0..200)
}

fn sorted_labels(puzzle: &Puzzle) -> Vec<u32> {
    let mut labels = puzzle.tiles().to_vec();
    labels.sort_unstable();
    labels
}

proptest! {
    /// Property: a freshly created puzzle is never already solved
    #[test]
    fn prop_new_is_unsolved(seed in any::<u64>(), size in size_strategy(), moves in shuffle_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let puzzle = Puzzle::with_rng(size, moves, &mut rng).unwrap();
        prop_assert!(!puzzle.is_complete());
        prop_assert_eq!(puzzle.status(), Status::Active);
    }

    /// Property: labels stay a permutation with a single blank through any click sequence
    #[test]
    fn prop_clicks_preserve_permutation(
        seed in any::<u64>(),
        size in size_strategy(),
        moves in shuffle_strategy(),
        clicks in clicks_strategy(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut puzzle = Puzzle::with_rng(size, moves, &mut rng).unwrap();
        let expected: Vec<u32> = (0..(size * size) as u32).collect();

        for (col, row) in clicks {
            let before = puzzle.clone();
            let outcome = puzzle.move_tile(col, row);

            prop_assert_eq!(sorted_labels(&puzzle), expected.clone());
            let blanks = puzzle.tiles().iter().filter(|&&label| label == puzzle.blank_label()).count();
            prop_assert_eq!(blanks, 1);
            let (blank_row, blank_col) = puzzle.blank_position();
            prop_assert_eq!(puzzle.tile(blank_row, blank_col), Some(puzzle.blank_label()));

            match outcome {
                MoveOutcome::Moved { from, to } => {
                    prop_assert_eq!(puzzle.blank_position(), from);
                    prop_assert_eq!(puzzle.tile(to.0, to.1), before.tile(from.0, from.1));
                    let distance = from.0.abs_diff(to.0) + from.1.abs_diff(to.1);
                    prop_assert_eq!(distance, 1);
                }
                _ => {
                    prop_assert_eq!(&puzzle, &before);
                }
            }

            if puzzle.is_complete() {
                prop_assert!(puzzle.completed_status());
            }
        }
    }

    /// Property: once frozen, no click changes the board
    #[test]
    fn prop_frozen_board_ignores_clicks(clicks in clicks_strategy()) {
        let mut puzzle = Puzzle::from_tiles(3, vec![0, 1, 2, 3, 4, 5, 6, 8, 7]).unwrap();
        prop_assert!(puzzle.move_tile(2, 2).is_moved());
        prop_assert!(puzzle.completed_status());

        let frozen = puzzle.clone();
        for (col, row) in clicks {
            prop_assert_eq!(puzzle.move_tile(col, row), MoveOutcome::Frozen);
        }
        prop_assert_eq!(puzzle, frozen);
    }
}
