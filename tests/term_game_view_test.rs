use tilehop::core::{GameSnapshot, GameState, JumpPhase, MotionKind};
use tilehop::term::{AnchorY, GameView, Viewport};
use tilehop::types::{GridPos, Hazard};

fn screen_text(fb: &tilehop::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10 cells of 3x1 plus the border => 32x12, too narrow for the panel.
    let (w, h) = view.frame_size();
    assert_eq!((w, h), (32, 12));
    let fb = view.render(&snap, Viewport::new(w, h));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╔');
    assert_eq!(fb.get(w - 1, 0).unwrap().ch, '╗');
    assert_eq!(fb.get(0, h - 1).unwrap().ch, '╚');
    assert_eq!(fb.get(w - 1, h - 1).unwrap().ch, '╝');
}

#[test]
fn term_view_draws_player_and_cells_in_place() {
    let mut snap = GameSnapshot::default();
    snap.cells[2][3].hazard = Hazard::Lethal;
    snap.cells[4][4].obstacle = true;
    snap.player_cell = GridPos::new(1, 1);

    let view = GameView::default();
    let (w, h) = view.frame_size();
    let fb = view.render(&snap, Viewport::new(w, h));

    // Glyphs sit in the middle column of each 3-wide cell.
    let centre = |pos: GridPos| {
        let (x, y) = view.cell_origin(pos).unwrap();
        (x + 1, y)
    };
    let (x, y) = centre(GridPos::new(1, 1));
    assert_eq!(fb.get(x, y).unwrap().ch, '@');
    let (x, y) = centre(GridPos::new(2, 3));
    assert_eq!(fb.get(x, y).unwrap().ch, '░');
    let (x, y) = centre(GridPos::new(4, 4));
    assert_eq!(fb.get(x, y).unwrap().ch, '●');
    let (x, y) = centre(GridPos::GOAL);
    assert_eq!(fb.get(x, y).unwrap().ch, '◎');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.tick(0.0);
    let mut snap = gs.snapshot();
    snap.score = 300;
    snap.level = 4;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(80, 24));
    let all = screen_text(&fb);

    assert!(all.contains("TILEHOP"));
    assert!(all.contains("LEVEL  4/6"));
    assert!(all.contains("SCORE  300"));
    assert!(all.contains("LIVES  10"));
    assert!(all.contains("CAMERA tower @0"));
}

#[test]
fn term_view_omits_panel_when_narrow() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let (w, h) = view.frame_size();
    let fb = view.render(&snap, Viewport::new(w + 10, h));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_end_of_run_overlays() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let mut snap = GameSnapshot::default();
    snap.won = true;
    let all = screen_text(&view.render(&snap, vp));
    assert!(all.contains("YOU WON"));
    assert!(all.contains("n: new run"));

    snap.won = false;
    snap.lost = true;
    let all = screen_text(&view.render(&snap, vp));
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains("YOU WON"));
}

#[test]
fn term_view_shows_jump_phase_in_panel() {
    let mut snap = GameSnapshot::default();
    snap.motion = MotionKind::Jumping;
    snap.jump_phase = Some(JumpPhase::Falling);

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let all = screen_text(&view.render(&snap, Viewport::new(80, 24)));
    assert!(all.contains("MOVE   jumping falling"));

    snap.motion = MotionKind::Idle;
    snap.jump_phase = None;
    let all = screen_text(&view.render(&snap, Viewport::new(80, 24)));
    assert!(all.contains("MOVE   idle"));
    assert!(!all.contains("falling"));
}
