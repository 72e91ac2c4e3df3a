//! Property tests for the rules the board must never break.

use proptest::prelude::*;

use tui_2048::core::{compress_and_merge, GameState};
use tui_2048::types::Direction;

/// Lines of empty cells and power-of-two tiles, the only values a board can
/// ever hold.
fn tile_line() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(
        prop_oneof![3 => Just(0u32), 2 => (1u32..=11).prop_map(|e| 1 << e)],
        2..=8,
    )
}

proptest! {
    #[test]
    fn compress_preserves_line_sum(line in tile_line()) {
        let before: u64 = line.iter().map(|&v| v as u64).sum();
        let mut work = line.clone();
        compress_and_merge(&mut work);
        let after: u64 = work.iter().map(|&v| v as u64).sum();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn compress_leaves_zeros_only_at_the_tail(line in tile_line()) {
        let mut work = line.clone();
        compress_and_merge(&mut work);
        let filled = work.iter().take_while(|&&v| v != 0).count();
        prop_assert!(work[filled..].iter().all(|&v| v == 0));
    }

    #[test]
    fn settled_lines_are_fixed_points(line in tile_line()) {
        let mut once = line.clone();
        compress_and_merge(&mut once);

        let filled = once.iter().take_while(|&&v| v != 0).count();
        let settled = once[..filled].windows(2).all(|w| w[0] != w[1]);
        if settled {
            let mut twice = once.clone();
            let result = compress_and_merge(&mut twice);
            prop_assert!(!result.changed);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn random_play_upholds_board_invariants(
        seed in any::<u32>(),
        moves in prop::collection::vec(0usize..4, 1..60),
    ) {
        let mut game = GameState::new(4, seed).unwrap();
        let mut last_score = 0;

        for &m in &moves {
            let outcome = game.slide(Direction::ALL[m]);

            // Score is monotone and the best candidate never trails it.
            prop_assert!(game.score() >= last_score);
            prop_assert!(game.best_score() >= game.score());
            last_score = game.score();

            // Every tile is a power of two >= 2 and the total stays even.
            let total: u64 = game.board().cells().iter().map(|&v| v as u64).sum();
            prop_assert_eq!(total % 2, 0);
            for &v in game.board().cells() {
                prop_assert!(v == 0 || (v >= 2 && v.is_power_of_two()));
            }

            // An unchanged move spawns nothing and scores nothing.
            if !outcome.changed {
                prop_assert_eq!(outcome.score_delta, 0);
                prop_assert!(outcome.new_tile.is_none());
            }
        }
    }
}
