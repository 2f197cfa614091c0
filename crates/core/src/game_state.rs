//! Game state - the aggregate advanced once per logical frame
//!
//! A tick runs, in order:
//!
//! 1. raised tiles move one unit
//! 2. a pending level is generated, otherwise obstacles are re-shuffled when due
//! 3. a player marked dying respawns at the origin (one life lost)
//! 4. the pending intent (if any) is taken and the player advances
//! 5. the player's cell is evaluated (boundary, lethal, obstacle, goal)
//! 6. run bookkeeping: loss at ten deaths, level clear, overall win
//! 7. the camera is recomputed
//!
//! Input arrives between ticks through [`GameState::apply_action`] and is only
//! queued; nothing moves until the next tick.

use arrayvec::ArrayVec;

use crate::camera::{View, ViewDirector};
use crate::command::CommandInterpreter;
use crate::grid::GridState;
use crate::level::LevelGenerator;
use crate::motion::{self, Motion, PlayerState, Speed, Terrain};
use crate::outcome::{self, Outcome, RunProgress, RunState};
use crate::rng::SimpleRng;
use crate::snapshot::{CellSnapshot, GameSnapshot, MotionKind};
use crate::tiles::MovingTileOffset;
use crate::types::{DeathCause, GameAction, GameEvent, GridPos, Hazard};

/// Most events one tick can produce, with room to spare
pub const EVENT_CAPACITY: usize = 16;

pub type EventBuffer = ArrayVec<GameEvent, EVENT_CAPACITY>;

#[derive(Debug, Clone)]
pub struct GameState {
    seed: u32,
    rng: SimpleRng,
    grid: GridState,
    generator: LevelGenerator,
    tiles: MovingTileOffset,
    player: PlayerState,
    run: RunState,
    speed: Speed,
    commands: CommandInterpreter,
    camera: ViewDirector,
    events: EventBuffer,
}

impl GameState {
    /// New run; the first tick lays out level 1
    pub fn new(seed: u32) -> Self {
        Self::with_speed(seed, Speed::default())
    }

    pub fn with_speed(seed: u32, speed: Speed) -> Self {
        let mut camera = ViewDirector::new();
        let player = PlayerState::spawn();
        camera.update(player.world);
        Self {
            seed,
            rng: SimpleRng::new(seed),
            grid: GridState::new(),
            generator: LevelGenerator::new(),
            tiles: MovingTileOffset::new(),
            player,
            run: RunState::new(),
            speed,
            commands: CommandInterpreter::new(),
            camera,
            events: EventBuffer::new(),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn tile_offset(&self) -> i32 {
        self.tiles.offset()
    }

    pub fn camera(&self) -> &ViewDirector {
        &self.camera
    }

    pub fn view(&self) -> View {
        self.camera.current()
    }

    pub fn commands(&self) -> &CommandInterpreter {
        &self.commands
    }

    pub fn level(&self) -> u32 {
        self.run.level()
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn lives_remaining(&self) -> u32 {
        self.run.lives_remaining()
    }

    pub fn won(&self) -> bool {
        self.run.game_won
    }

    pub fn lost(&self) -> bool {
        self.run.game_lost
    }

    pub fn is_over(&self) -> bool {
        self.run.is_over()
    }

    /// Put the player idle on `cell`, cancelling any motion.
    ///
    /// For fixtures and debugging; the next tick evaluates the cell as usual.
    pub fn place_player(&mut self, cell: GridPos) {
        self.player = PlayerState::standing_at(cell);
    }

    /// Replace the current level with a fixed layout.
    ///
    /// Cancels a pending level generation and restarts the obstacle refresh
    /// window at `now_secs`. Used for scripted scenarios and tests.
    pub fn load_layout(&mut self, grid: GridState, now_secs: f64) {
        self.grid = grid;
        self.run.level_transition = false;
        self.generator.reset_window(now_secs);
    }

    /// Queue an input. Returns `false` for input that had no effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(arrow) => {
                self.commands.press(arrow, self.camera.facing());
                true
            }
            GameAction::ArmJump => {
                self.commands.arm_jump();
                true
            }
            GameAction::Camera(mode) => {
                self.camera.select(mode);
                true
            }
            GameAction::DragStart { x, y } => {
                self.camera.drag_start(x, y);
                true
            }
            GameAction::Drag { x, y } => {
                let dragging = self.camera.is_dragging();
                self.camera.drag_to(x, y);
                dragging
            }
            GameAction::DragEnd => {
                self.camera.drag_end();
                true
            }
            GameAction::Zoom(delta) => {
                self.camera.scroll(delta);
                true
            }
            GameAction::SpeedUp => self.set_speed(self.speed.faster()),
            GameAction::SpeedDown => self.set_speed(self.speed.slower()),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    fn set_speed(&mut self, speed: Speed) -> bool {
        let changed = speed != self.speed;
        self.speed = speed;
        changed
    }

    /// Back to level 1 with a fresh run; speed and camera are kept
    pub fn restart(&mut self) {
        self.grid = GridState::new();
        self.run = RunState::new();
        self.player = PlayerState::spawn();
        self.commands.clear();
        self.push_event(GameEvent::Restarted);
    }

    /// Advance one logical frame. `now_secs` is the level clock, sampled once
    /// per frame by the caller.
    pub fn tick(&mut self, now_secs: f64) {
        if self.run.is_over() {
            self.camera.update(self.player.world);
            return;
        }

        self.tiles.step();

        if self.run.level_transition {
            self.generator
                .generate_level(&mut self.grid, &mut self.rng, now_secs);
            self.run.level_transition = false;
            self.push_event(GameEvent::LevelGenerated {
                level: self.run.level(),
            });
        } else if self.generator.refresh_obstacles(
            &mut self.grid,
            &mut self.rng,
            self.player.cell,
            now_secs,
        ) {
            self.push_event(GameEvent::ObstaclesRefreshed);
        }

        if self.player.dying {
            self.respawn(DeathCause::Fell);
        }

        let intent = self.commands.take();
        let terrain = Terrain {
            grid: &self.grid,
            tile_offset: self.tiles.offset(),
        };
        self.player = motion::advance(self.player, intent, &terrain, self.speed);

        match outcome::evaluate(&self.player, &self.grid) {
            Outcome::Continue => {}
            Outcome::Respawn(cause) => self.respawn(cause),
            Outcome::ReachedGoal => self.run.level_won = true,
        }

        match self.run.resolve() {
            RunProgress::Playing => {}
            RunProgress::LevelCleared { level, score } => {
                self.player = PlayerState::spawn();
                self.push_event(GameEvent::LevelCleared { level, score });
            }
            RunProgress::Won { score } => {
                self.player = PlayerState::spawn();
                self.push_event(GameEvent::LevelCleared {
                    level: self.run.levels_cleared,
                    score,
                });
                self.push_event(GameEvent::GameWon { score });
            }
            RunProgress::Lost { score } => self.push_event(GameEvent::GameLost { score }),
        }

        self.camera.update(self.player.world);
    }

    fn respawn(&mut self, cause: DeathCause) {
        let at = self.player.cell;
        self.player = PlayerState::spawn();
        let lives_lost = self.run.lose_life();
        self.push_event(GameEvent::Died {
            cause,
            at,
            lives_lost,
        });
    }

    fn push_event(&mut self, event: GameEvent) {
        // Release builds drop the newest event when nobody is draining.
        let pushed = self.events.try_push(event).is_ok();
        debug_assert!(pushed, "event buffer full, dropped {}", event.name());
    }

    /// Drain events produced since the last call
    pub fn take_events(&mut self) -> EventBuffer {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let offset = self.tiles.offset();
        for (i, row) in out.cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let pos = GridPos::new(i as i8, j as i8);
                let hazard = self.grid.hazard(pos);
                *cell = CellSnapshot {
                    hazard,
                    obstacle: self.grid.obstacle(pos),
                    height: if hazard == Hazard::Raised { offset } else { 0 },
                };
            }
        }

        let view = self.camera.current();
        out.tile_offset = offset;
        out.player_cell = self.player.cell;
        out.player_world = self.player.world;
        out.motion = match self.player.motion {
            Motion::Idle => MotionKind::Idle,
            Motion::Walking { .. } => MotionKind::Walking,
            Motion::Jumping { .. } => MotionKind::Jumping,
        };
        out.jump_phase = self.player.motion.jump_phase();
        out.dying = self.player.dying;
        out.jump_armed = self.commands.is_jump_armed();
        out.eye = view.eye;
        out.target = view.target;
        out.camera = self.camera.mode();
        out.facing = self.camera.facing();
        out.level = self.run.level();
        out.lives_remaining = self.run.lives_remaining();
        out.score = self.run.score;
        out.speed = self.speed.get();
        out.won = self.run.game_won;
        out.lost = self.run.game_lost;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
