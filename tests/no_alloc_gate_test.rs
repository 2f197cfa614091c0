use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{Event, KeyCode, KeyEvent};
use tilehop::core::{GameSnapshot, GameState};
use tilehop::input::{translate, InputCommand};
use tilehop::term::{FrameBuffer, GameView, Viewport};
use tilehop::types::{Arrow, CameraMode, GameAction, GridPos};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test per binary: the counter is process-global.
#[test]
fn frame_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    gs.tick(0.0);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);
    let mut snap = GameSnapshot::default();
    let key = Event::Key(KeyEvent::from(KeyCode::Right));

    let allocs = with_alloc_counting(|| {
        let mut t = 0.0;
        for n in 0..600u32 {
            t += 0.016;
            if let InputCommand::Action(action) = translate(&key) {
                gs.apply_action(action);
            }
            if n % 40 == 0 {
                gs.apply_action(GameAction::ArmJump);
                gs.apply_action(GameAction::Move(Arrow::Up));
                gs.apply_action(GameAction::Camera(CameraMode::Follow));
            }
            if n % 97 == 0 {
                // Level clear drives generation on the next tick.
                gs.place_player(GridPos::GOAL);
            }
            gs.tick(t);
            let _ = gs.take_events();
            if gs.is_over() {
                gs.apply_action(GameAction::Restart);
            }

            gs.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
