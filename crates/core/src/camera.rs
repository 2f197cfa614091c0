//! Camera - mode and rotation to eye/target vectors
//!
//! | Mode | Eye | Target |
//! |------|-----|--------|
//! | TopDown | (149.999, 300, 150) | (150, 0, 150) |
//! | Tower | (-25, 270, 386.3) | (300, 0, 150) |
//! | Adventure | player + offset per facing | player + offset per facing |
//! | Follow | player + offset per facing | player + offset per facing |
//! | Free | dragged | eye / 1.5 |
//!
//! The two fixed presets and the free view can be scaled with the scroll
//! wheel; player-relative views are rebuilt from the player every frame.

use glam::Vec3;

use crate::types::{CameraMode, Facing};

/// Eye and look-at point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct View {
    pub eye: Vec3,
    pub target: Vec3,
}

impl View {
    pub const fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }
}

const TOP_DOWN: View = View::new(Vec3::new(149.999, 300.0, 150.0), Vec3::new(150.0, 0.0, 150.0));
const TOWER: View = View::new(Vec3::new(-25.0, 270.0, 386.3), Vec3::new(300.0, 0.0, 150.0));

// Offsets from the player, indexed by facing quarter turns.
const ADVENTURE_EYE: [Vec3; 4] = [
    Vec3::new(13.0, 30.0, 7.5),
    Vec3::new(7.5, 30.0, 2.0),
    Vec3::new(2.0, 30.0, 7.5),
    Vec3::new(7.5, 30.0, 13.0),
];
const ADVENTURE_TARGET: [Vec3; 4] = [
    Vec3::new(30.0, 20.0, 7.5),
    Vec3::new(7.5, 20.0, -14.5),
    Vec3::new(-14.5, 20.0, 7.5),
    Vec3::new(7.5, 20.0, 30.0),
];
const FOLLOW_EYE: [Vec3; 4] = [
    Vec3::new(-7.5, 35.0, 7.5),
    Vec3::new(7.5, 35.0, 22.5),
    Vec3::new(22.5, 35.0, 7.5),
    Vec3::new(7.5, 35.0, -7.5),
];
const FOLLOW_TARGET: [Vec3; 4] = [
    Vec3::new(0.0, 25.0, 7.5),
    Vec3::new(7.5, 25.0, 15.0),
    Vec3::new(15.0, 25.0, 7.5),
    Vec3::new(7.5, 25.0, 0.0),
];

/// Free-camera drag maps pointer pixels around this centre.
const DRAG_CENTRE: f32 = 150.0;
const FREE_TARGET_DIVISOR: f32 = 1.5;
const ZOOM_STEP_DIVISOR: f32 = 10.0;
const ZOOM_MIN: f32 = 0.9;
const ZOOM_MAX: f32 = 1.5;

/// Preset view for a mode that does not track the player
pub fn preset(mode: CameraMode) -> Option<View> {
    match mode {
        CameraMode::TopDown => Some(TOP_DOWN),
        CameraMode::Tower => Some(TOWER),
        _ => None,
    }
}

/// Player-relative view, `None` for modes that do not follow the player
pub fn player_view(mode: CameraMode, facing: Facing, player: Vec3) -> Option<View> {
    let k = facing.quarter_turns() as usize;
    let (eye, target) = match mode {
        CameraMode::Adventure => (ADVENTURE_EYE[k], ADVENTURE_TARGET[k]),
        CameraMode::Follow => (FOLLOW_EYE[k], FOLLOW_TARGET[k]),
        _ => return None,
    };
    Some(View::new(player + eye, player + target))
}

/// Camera state driven by player input
#[derive(Debug, Clone, PartialEq)]
pub struct ViewDirector {
    mode: CameraMode,
    facing: Facing,
    /// View used by the fixed and free modes.
    fixed: View,
    zoom: f32,
    dragging: bool,
    current: View,
}

impl ViewDirector {
    pub fn new() -> Self {
        Self {
            mode: CameraMode::Tower,
            facing: Facing::Deg0,
            fixed: TOWER,
            zoom: 1.0,
            dragging: false,
            current: TOWER,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Rotation the command table uses; always `Deg0` outside the player-relative modes
    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// View as of the last [`ViewDirector::update`]
    pub fn current(&self) -> View {
        self.current
    }

    /// Switch to `mode`, or rotate by a quarter turn when it is already active
    pub fn select(&mut self, mode: CameraMode) {
        if mode == self.mode {
            if mode.follows_player() {
                self.facing = self.facing.next();
            }
            return;
        }

        self.mode = mode;
        self.facing = Facing::Deg0;
        self.dragging = false;
        if let Some(view) = preset(mode) {
            self.fixed = view;
            self.zoom = 1.0;
        }
    }

    /// Pointer pressed: take over the current view as the free camera
    pub fn drag_start(&mut self, x: f32, y: f32) {
        if self.mode != CameraMode::Free {
            self.fixed = self.current;
            self.mode = CameraMode::Free;
            self.facing = Facing::Deg0;
        }
        self.dragging = true;
        self.drag_to(x, y);
    }

    /// Pointer moved while pressed
    pub fn drag_to(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        self.fixed.eye.x = y - DRAG_CENTRE;
        self.fixed.eye.z = x - DRAG_CENTRE;
        self.fixed.target = self.fixed.eye / FREE_TARGET_DIVISOR;
    }

    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    /// Scroll by `delta` notches
    pub fn scroll(&mut self, delta: f32) {
        self.zoom += delta / ZOOM_STEP_DIVISOR;
        if self.mode.follows_player() || !(ZOOM_MIN..ZOOM_MAX).contains(&self.zoom) {
            return;
        }
        if delta > 0.0 {
            self.fixed.eye /= self.zoom;
            self.fixed.target /= self.zoom;
        } else if delta < 0.0 {
            self.fixed.eye *= self.zoom;
            self.fixed.target *= self.zoom;
        }
    }

    /// Recompute the view for this frame
    pub fn update(&mut self, player: Vec3) -> View {
        self.current = player_view(self.mode, self.facing, player).unwrap_or(self.fixed);
        self.current
    }
}

impl Default for ViewDirector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < EPS
    }

    #[test]
    fn test_starts_in_tower() {
        let mut dir = ViewDirector::new();
        assert_eq!(dir.mode(), CameraMode::Tower);
        let view = dir.update(Vec3::new(7.5, 105.0, 7.5));
        assert_eq!(view, TOWER);
    }

    #[test]
    fn test_follow_rotates_on_repeat_press() {
        let player = Vec3::new(37.5, 105.0, 67.5);
        let mut dir = ViewDirector::new();

        dir.select(CameraMode::Follow);
        assert_eq!(dir.facing(), Facing::Deg0);
        let v = dir.update(player);
        assert!(close(v.eye, Vec3::new(30.0, 140.0, 75.0)));
        assert!(close(v.target, Vec3::new(37.5, 130.0, 75.0)));

        dir.select(CameraMode::Follow);
        assert_eq!(dir.facing(), Facing::Deg90);
        let v = dir.update(player);
        assert!(close(v.eye, Vec3::new(45.0, 140.0, 90.0)));

        dir.select(CameraMode::Follow);
        dir.select(CameraMode::Follow);
        dir.select(CameraMode::Follow);
        assert_eq!(dir.facing(), Facing::Deg0);
    }

    #[test]
    fn test_adventure_table() {
        let player = Vec3::ZERO;
        for (k, facing) in [Facing::Deg0, Facing::Deg90, Facing::Deg180, Facing::Deg270]
            .into_iter()
            .enumerate()
        {
            let v = player_view(CameraMode::Adventure, facing, player).unwrap();
            assert_eq!(v.eye, ADVENTURE_EYE[k]);
            assert_eq!(v.target, ADVENTURE_TARGET[k]);
        }
        assert_eq!(player_view(CameraMode::Tower, Facing::Deg0, player), None);
    }

    #[test]
    fn test_switching_mode_resets_facing() {
        let mut dir = ViewDirector::new();
        dir.select(CameraMode::Adventure);
        dir.select(CameraMode::Adventure);
        assert_eq!(dir.facing(), Facing::Deg90);

        dir.select(CameraMode::Follow);
        assert_eq!(dir.facing(), Facing::Deg0);

        dir.select(CameraMode::TopDown);
        dir.select(CameraMode::TopDown);
        assert_eq!(dir.facing(), Facing::Deg0);
        assert_eq!(dir.update(Vec3::ZERO), TOP_DOWN);
    }

    #[test]
    fn test_drag_positions_free_camera() {
        let mut dir = ViewDirector::new();
        dir.update(Vec3::ZERO);
        dir.drag_start(200.0, 100.0);
        assert_eq!(dir.mode(), CameraMode::Free);
        assert!(dir.is_dragging());

        let v = dir.update(Vec3::ZERO);
        assert!(close(v.eye, Vec3::new(-50.0, 270.0, 50.0)));
        assert!(close(v.target, Vec3::new(-50.0 / 1.5, 180.0, 50.0 / 1.5)));

        dir.drag_end();
        dir.drag_to(0.0, 0.0);
        assert_eq!(dir.update(Vec3::ZERO), v);
    }

    #[test]
    fn test_scroll_scales_fixed_views_only_in_range() {
        let mut dir = ViewDirector::new();
        dir.scroll(1.0);
        assert!((dir.zoom() - 1.1).abs() < EPS);
        let v = dir.update(Vec3::ZERO);
        assert!(close(v.eye, TOWER.eye / 1.1));

        // Out of range: zoom keeps counting but the view stays.
        let mut dir = ViewDirector::new();
        for _ in 0..6 {
            dir.scroll(1.0);
        }
        let before = dir.update(Vec3::ZERO);
        dir.scroll(1.0);
        assert_eq!(dir.update(Vec3::ZERO), before);

        // Player-relative views ignore it.
        let mut dir = ViewDirector::new();
        dir.select(CameraMode::Follow);
        dir.scroll(1.0);
        let v = dir.update(Vec3::ZERO);
        assert_eq!(v.eye, FOLLOW_EYE[0]);
    }
}
