//! Integration tests for the game loop through the facade crate

use tilehop::core::{GameState, GridState, MotionKind};
use tilehop::types::{
    Arrow, CameraMode, DeathCause, GameAction, GameEvent, GridPos, Hazard, GRID_STRIDE, MAX_LIVES,
    REST_HEIGHT,
};

const DT: f64 = 0.016;

fn layout(cells: &[(i8, i8, Hazard)], obstacles: &[(i8, i8)]) -> GridState {
    let mut hazards = [[Hazard::Safe; GRID_STRIDE]; GRID_STRIDE];
    let mut obs = [[false; GRID_STRIDE]; GRID_STRIDE];
    for &(i, j, h) in cells {
        hazards[i as usize][j as usize] = h;
    }
    for &(i, j) in obstacles {
        obs[i as usize][j as usize] = true;
    }
    GridState::from_maps(hazards, obs)
}

/// A started game on a fixed layout, clock at `t`
fn game_on(grid: GridState) -> (GameState, f64) {
    let mut game = GameState::new(2024);
    game.tick(0.0);
    game.load_layout(grid, 0.0);
    game.take_events();
    (game, 0.0)
}

fn run_ticks(game: &mut GameState, t: &mut f64, n: u32) {
    for _ in 0..n {
        *t += DT;
        game.tick(*t);
    }
}

#[test]
fn walking_onto_lethal_floor_costs_a_life() {
    let (mut game, mut t) = game_on(layout(&[(1, 0, Hazard::Lethal)], &[]));
    game.apply_action(GameAction::Move(Arrow::Right));
    let ticks = game.speed().ticks_per_tile();
    run_ticks(&mut game, &mut t, ticks);

    assert_eq!(game.player().cell, GridPos::ORIGIN);
    assert_eq!(game.lives_remaining(), MAX_LIVES - 1);
    assert!(game.take_events().contains(&GameEvent::Died {
        cause: DeathCause::Hazard,
        at: GridPos::new(1, 0),
        lives_lost: 1,
    }));
}

#[test]
fn jumping_clears_lethal_floor() {
    let (mut game, mut t) = game_on(layout(&[(1, 0, Hazard::Lethal)], &[]));
    game.apply_action(GameAction::ArmJump);
    game.apply_action(GameAction::Move(Arrow::Right));

    run_ticks(&mut game, &mut t, 15);
    assert_eq!(game.snapshot().motion, MotionKind::Jumping);
    assert!(game.player().world.y > REST_HEIGHT);

    run_ticks(&mut game, &mut t, 15);
    assert_eq!(game.player().cell, GridPos::new(2, 0));
    assert_eq!(game.lives_remaining(), MAX_LIVES);
}

#[test]
fn obstacle_collision_costs_a_life() {
    let (mut game, mut t) = game_on(layout(&[], &[(0, 1)]));
    game.apply_action(GameAction::Move(Arrow::Up));
    let ticks = game.speed().ticks_per_tile();
    run_ticks(&mut game, &mut t, ticks);

    assert_eq!(game.player().cell, GridPos::ORIGIN);
    assert!(game.take_events().iter().any(|e| matches!(
        e,
        GameEvent::Died {
            cause: DeathCause::Obstacle,
            ..
        }
    )));
}

#[test]
fn raised_tile_carries_the_player() {
    let (mut game, mut t) = game_on(layout(&[(1, 0, Hazard::Raised)], &[]));
    // The shared offset starts at 0 and rises, so the tile is walkable.
    game.apply_action(GameAction::Move(Arrow::Right));
    let ticks = game.speed().ticks_per_tile();
    run_ticks(&mut game, &mut t, ticks);
    assert_eq!(game.player().cell, GridPos::new(1, 0));
    assert_eq!(game.player().world.y, REST_HEIGHT + game.tile_offset() as f32);

    run_ticks(&mut game, &mut t, 5);
    assert_eq!(game.player().world.y, REST_HEIGHT + game.tile_offset() as f32);
}

#[test]
fn rotated_camera_turns_up_into_west() {
    let (mut game, mut t) = game_on(layout(&[], &[]));
    game.apply_action(GameAction::Camera(CameraMode::Follow));
    game.apply_action(GameAction::Camera(CameraMode::Follow));
    game.apply_action(GameAction::Move(Arrow::Up));
    let ticks = game.speed().ticks_per_tile();
    run_ticks(&mut game, &mut t, ticks);

    // West of the start is off the grid.
    assert!(game.take_events().contains(&GameEvent::Died {
        cause: DeathCause::OutOfBounds,
        at: GridPos::new(-1, 0),
        lives_lost: 1,
    }));
}

#[test]
fn six_cleared_levels_win_the_run() {
    let mut game = GameState::new(77);
    let mut t = 0.0;
    run_ticks(&mut game, &mut t, 1);

    for level in 1..=6 {
        assert_eq!(game.level(), level);
        game.place_player(GridPos::GOAL);
        run_ticks(&mut game, &mut t, 1);
        assert_eq!(game.score(), level * 100);
        if level < 6 {
            run_ticks(&mut game, &mut t, 1);
            assert_eq!(game.grid().validate(), Ok(()));
        }
    }

    assert!(game.won());
    assert!(game.snapshot().won);
}

#[test]
fn ten_deaths_lose_and_restart_recovers() {
    let mut game = GameState::new(5);
    let mut t = 0.0;
    run_ticks(&mut game, &mut t, 1);

    for _ in 0..MAX_LIVES {
        game.place_player(GridPos::new(0, -1));
        run_ticks(&mut game, &mut t, 1);
    }
    assert!(game.lost());
    assert!(game.snapshot().lost);

    assert!(game.apply_action(GameAction::Restart));
    run_ticks(&mut game, &mut t, 1);
    assert!(!game.is_over());
    assert_eq!(game.lives_remaining(), MAX_LIVES);
    assert_eq!(game.level(), 1);
}

#[test]
fn same_seed_same_levels() {
    let mut a = GameState::new(31337);
    let mut b = GameState::new(31337);
    a.tick(0.0);
    b.tick(0.0);
    assert_eq!(a.grid(), b.grid());

    a.tick(6.0);
    b.tick(6.0);
    assert_eq!(a.grid(), b.grid());
}
