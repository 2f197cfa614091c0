use proptest::prelude::*;

use tilehop::core::level::{hazard_kind_for_row, pick_column};
use tilehop::core::{GridState, LevelGenerator, RandomSource, SimpleRng};
use tilehop::types::{GridPos, GRID_SIZE};

/// Replays a fixed list of draws, then repeats the last one forever
struct Scripted {
    draws: Vec<u32>,
    at: usize,
}

impl RandomSource for Scripted {
    fn next_below(&mut self, bound: u32) -> u32 {
        let v = self.draws.get(self.at).or(self.draws.last()).copied().unwrap_or(0);
        self.at += 1;
        v % bound
    }
}

proptest! {
    #[test]
    fn generated_levels_are_valid(seed in any::<u32>()) {
        let mut grid = GridState::new();
        let mut rng = SimpleRng::new(seed);
        LevelGenerator::new().generate_level(&mut grid, &mut rng, 0.0);

        prop_assert_eq!(grid.validate(), Ok(()));
        for row in 0..GRID_SIZE {
            let col = grid.hazard_column(row).unwrap();
            prop_assert_eq!(grid.hazard(GridPos::new(row as i8, col as i8)), hazard_kind_for_row(row));
        }
    }

    #[test]
    fn refresh_keeps_constraints(seed in any::<u32>(), pi in 0i8..10, pj in 0i8..10) {
        let mut grid = GridState::new();
        let mut rng = SimpleRng::new(seed);
        let mut gen = LevelGenerator::new();
        gen.generate_level(&mut grid, &mut rng, 0.0);
        let hazards: Vec<Option<usize>> = (0..GRID_SIZE).map(|r| grid.hazard_column(r)).collect();

        let player = GridPos::new(pi, pj);
        prop_assert!(gen.refresh_obstacles(&mut grid, &mut rng, player, 5.0));

        for row in 0..GRID_SIZE {
            prop_assert_eq!(grid.hazard_column(row), hazards[row]);
            let col = grid.obstacle_column(row).unwrap();
            prop_assert_ne!(Some(col), hazards[row]);
            if row as i8 == player.i {
                prop_assert!((col as i32 - player.j as i32).abs() > 1);
            }
        }
        prop_assert!(!grid.obstacle(GridPos::ORIGIN));
        prop_assert!(!grid.obstacle(GridPos::GOAL));
    }

    #[test]
    fn pick_column_respects_any_draws(
        draws in prop::collection::vec(0u32..10, 1..80),
        banned in prop::collection::vec(any::<bool>(), GRID_SIZE),
    ) {
        let mut rng = Scripted { draws, at: 0 };
        let picked = pick_column(&mut rng, |col| !banned[col]);
        match picked {
            Some(col) => prop_assert!(!banned[col]),
            None => prop_assert!(banned.iter().all(|&b| b)),
        }
    }
}
