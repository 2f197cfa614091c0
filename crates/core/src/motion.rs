//! Player motion - the per-tick movement state machine
//!
//! The player has a discrete cell and a continuous world position. A move is
//! started from [`Motion::Idle`] by an [`Intent`] and then plays out over several
//! ticks, or resolves instantly when it lands on (or falls through) a raised tile.
//!
//! # Walking
//!
//! Advances `speed` world units per tick. Once a full tile (30 units) has been
//! covered the position snaps to the next cell and the player is idle again, so
//! a walk takes `ceil(30 / speed)` ticks.
//!
//! # Jumping
//!
//! Checked in this order, with `o` the shared raised-tile offset:
//!
//! 1. Tile one away is raised: `o >= 0` hops straight onto it, otherwise the
//!    full arc plays and clears it.
//! 2. Tile two away is raised: `o >= 0` stops short on the tile in between,
//!    `-30 < o < 0` lands on it, `o <= -30` lands on it and falls.
//! 3. Otherwise the full arc: 2 units per tick laterally,
//!    `y = 105 + 20t - 5t²` with `t = 0.1 * step`, landing two cells over
//!    after 30 steps.
//!
//! # Raised tiles
//!
//! Stepping onto a raised tile needs `o >= 0` unless the player is already on a
//! raised tile. A raised tile at `o <= -30` cannot catch a player coming from
//! flat ground: the move commits and the player is marked dying. Leaving a
//! raised tile needs `o >= 0` unless the target is raised or lethal.

use glam::Vec3;

use crate::grid::GridState;
use crate::types::{
    Direction, GridPos, Hazard, Intent, DEFAULT_SPEED, FALL_THRESHOLD, JUMP_DROP,
    JUMP_LATERAL_STEP, JUMP_LAUNCH_SPEED, JUMP_STEPS, JUMP_TIME_STEP, MAX_SPEED, MIN_SPEED,
    REST_HEIGHT, STEP_THRESHOLD, TILE_SIZE,
};

/// Walking speed in world units per tick, always within 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Speed(u8);

impl Speed {
    /// Clamp any requested value into the supported range
    pub fn new(value: i32) -> Self {
        Self(value.clamp(MIN_SPEED as i32, MAX_SPEED as i32) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn faster(self) -> Self {
        Self::new(self.0 as i32 + 1)
    }

    pub fn slower(self) -> Self {
        Self::new(self.0 as i32 - 1)
    }

    pub fn units(self) -> f32 {
        self.0 as f32
    }

    /// Ticks a one-tile walk takes at this speed
    pub fn ticks_per_tile(self) -> u32 {
        (TILE_SIZE as u32).div_ceil(self.0 as u32)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

/// Which half of the arc a jump is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpPhase {
    Rising,
    Falling,
}

impl JumpPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            JumpPhase::Rising => "rising",
            JumpPhase::Falling => "falling",
        }
    }
}

/// Movement in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Idle,
    Walking { direction: Direction, travelled: f32 },
    Jumping { direction: Direction, step: u32 },
}

impl Motion {
    pub fn is_idle(&self) -> bool {
        matches!(self, Motion::Idle)
    }

    /// Arc half for a jump in flight
    pub fn jump_phase(&self) -> Option<JumpPhase> {
        match *self {
            Motion::Jumping { step, .. } => {
                let apex = JUMP_LAUNCH_SPEED / (2.0 * JUMP_DROP);
                if (step as f32 * JUMP_TIME_STEP) < apex {
                    Some(JumpPhase::Rising)
                } else {
                    Some(JumpPhase::Falling)
                }
            }
            _ => None,
        }
    }
}

/// Everything about the player that changes per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub cell: GridPos,
    pub world: Vec3,
    pub motion: Motion,
    /// Set when a move committed onto a tile that cannot hold the player.
    /// The next tick respawns.
    pub dying: bool,
}

impl PlayerState {
    /// Standing on the start cell
    pub fn spawn() -> Self {
        Self::standing_at(GridPos::ORIGIN)
    }

    /// Idle on `cell` at resting height
    pub fn standing_at(cell: GridPos) -> Self {
        let (x, z) = cell.world_xz();
        Self {
            cell,
            world: Vec3::new(x, REST_HEIGHT, z),
            motion: Motion::Idle,
            dying: false,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.motion.is_idle()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::spawn()
    }
}

/// What the motion rules need to know about the world
#[derive(Debug, Clone, Copy)]
pub struct Terrain<'a> {
    pub grid: &'a GridState,
    pub tile_offset: i32,
}

impl Terrain<'_> {
    fn hazard(&self, pos: GridPos) -> Hazard {
        self.grid.hazard(pos)
    }
}

/// Height of the jump arc after `step` ticks
pub fn arc_height(step: u32) -> f32 {
    let t = step as f32 * JUMP_TIME_STEP;
    REST_HEIGHT + JUMP_LAUNCH_SPEED * t - JUMP_DROP * t * t
}

/// Advance the player by one tick.
///
/// `intent` is only looked at when the player is idle; while a move is in
/// progress it is ignored. A rejected intent leaves the player where it is.
pub fn advance(
    state: PlayerState,
    intent: Option<Intent>,
    terrain: &Terrain<'_>,
    speed: Speed,
) -> PlayerState {
    if state.dying {
        return state;
    }

    let mut next = match state.motion {
        Motion::Idle => match intent {
            Some(Intent::Walk(direction)) => begin_walk(state, direction, terrain, speed),
            Some(Intent::Jump(direction)) => begin_jump(state, direction, terrain),
            None => state,
        },
        Motion::Walking { .. } => walk_step(state, speed),
        Motion::Jumping { .. } => arc_step(state),
    };

    ride_raised_tile(&mut next, terrain);
    next
}

fn begin_walk(
    state: PlayerState,
    direction: Direction,
    terrain: &Terrain<'_>,
    speed: Speed,
) -> PlayerState {
    let offset = terrain.tile_offset;
    let source = terrain.hazard(state.cell);
    let target = state.cell.step(direction, 1);
    let dest = terrain.hazard(target);

    let can_leave = source != Hazard::Raised || offset >= STEP_THRESHOLD || !dest.is_safe();
    let falls = dest == Hazard::Raised && source != Hazard::Raised && offset <= FALL_THRESHOLD;
    let can_enter =
        dest != Hazard::Raised || offset >= STEP_THRESHOLD || source == Hazard::Raised || falls;

    if !(can_leave && can_enter) {
        return state;
    }
    if falls {
        return fall_onto(state, target, offset);
    }

    walk_step(
        PlayerState {
            motion: Motion::Walking {
                direction,
                travelled: 0.0,
            },
            ..state
        },
        speed,
    )
}

fn walk_step(mut state: PlayerState, speed: Speed) -> PlayerState {
    let Motion::Walking {
        direction,
        travelled,
    } = state.motion
    else {
        return state;
    };

    let (dx, dz) = direction.world_axis();
    let travelled = travelled + speed.units();
    state.world.x += dx * speed.units();
    state.world.z += dz * speed.units();

    if travelled >= TILE_SIZE {
        land(state, state.cell.step(direction, 1), REST_HEIGHT)
    } else {
        state.motion = Motion::Walking {
            direction,
            travelled,
        };
        state
    }
}

fn begin_jump(state: PlayerState, direction: Direction, terrain: &Terrain<'_>) -> PlayerState {
    let offset = terrain.tile_offset;
    let source = terrain.hazard(state.cell);
    let one = state.cell.step(direction, 1);
    let two = state.cell.step(direction, 2);

    let can_leave = source != Hazard::Raised
        || offset >= STEP_THRESHOLD
        || !terrain.hazard(two).is_safe();
    if !can_leave {
        return state;
    }

    if terrain.hazard(one) == Hazard::Raised {
        if offset >= STEP_THRESHOLD {
            return land(state, one, REST_HEIGHT + offset as f32);
        }
    } else if terrain.hazard(two) == Hazard::Raised {
        return if offset >= STEP_THRESHOLD {
            land(state, one, REST_HEIGHT)
        } else if offset > FALL_THRESHOLD {
            land(state, two, REST_HEIGHT + offset as f32)
        } else {
            fall_onto(state, two, offset)
        };
    }

    arc_step(PlayerState {
        motion: Motion::Jumping { direction, step: 0 },
        ..state
    })
}

fn arc_step(mut state: PlayerState) -> PlayerState {
    let Motion::Jumping { direction, step } = state.motion else {
        return state;
    };

    let step = step + 1;
    let (dx, dz) = direction.world_axis();
    state.world.x += dx * JUMP_LATERAL_STEP;
    state.world.z += dz * JUMP_LATERAL_STEP;
    state.world.y = arc_height(step);

    if step >= JUMP_STEPS {
        land(state, state.cell.step(direction, 2), REST_HEIGHT)
    } else {
        state.motion = Motion::Jumping { direction, step };
        state
    }
}

fn land(mut state: PlayerState, cell: GridPos, height: f32) -> PlayerState {
    let (x, z) = cell.world_xz();
    state.cell = cell;
    state.world = Vec3::new(x, height, z);
    state.motion = Motion::Idle;
    state
}

fn fall_onto(state: PlayerState, cell: GridPos, offset: i32) -> PlayerState {
    let mut state = land(state, cell, offset as f32);
    state.dying = true;
    state
}

/// Standing or walking on a raised tile carries the player up and down with it
fn ride_raised_tile(state: &mut PlayerState, terrain: &Terrain<'_>) {
    if state.dying || matches!(state.motion, Motion::Jumping { .. }) {
        return;
    }
    if terrain.hazard(state.cell) == Hazard::Raised {
        state.world.y = REST_HEIGHT + terrain.tile_offset as f32;
    }
}
