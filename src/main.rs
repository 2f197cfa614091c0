//! Terminal tilehop runner (default binary).
//!
//! Wires the core to a crossterm terminal: input events become game actions,
//! the engine runner ticks the game off a monotonic clock, and the game view
//! draws a top-down rendition through the diffing renderer.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{error, info};

use tilehop::config::AppConfig;
use tilehop::core::{GameSnapshot, GameState};
use tilehop::engine::{Clock, MonotonicClock, Runner};
use tilehop::input::{translate, InputCommand};
use tilehop::journal::{Journal, JournalRecord};
use tilehop::logging;
use tilehop::term::{fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};

/// Redraw interval for the won/lost screens when nothing changes.
const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(
        seed = config.seed,
        speed = config.speed.get(),
        tick_ms = config.tick.as_millis() as u64,
        mouse = config.mouse,
        journal = config.journal_path.is_some(),
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter(config.mouse)?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("exited"),
        Err(err) => error!(error = %err, "exited with error"),
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::with_speed(config.seed, config.speed);
    let mut runner = Runner::new(MonotonicClock::new(), config.tick);
    let mut journal = match config.journal_path.as_deref() {
        Some(path) => Some(Journal::create(path)?),
        None => None,
    };

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    loop {
        // Tick.
        runner.frame(&mut game);
        let now_secs = runner.clock().now_secs();
        for ev in game.take_events() {
            logging::log_event(&ev);
            if let Some(journal) = journal.as_mut() {
                journal.append(&JournalRecord::from_event(now_secs, runner.ticks(), &ev))?;
            }
        }

        // Render.
        game.snapshot_into(&mut snap);
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        let is_static = snap.is_over();
        let fp = if is_static { fingerprint(&snap, size) } else { 0 };
        let now_ms = runner.clock().elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fp, is_static) {
            view.render_into(&snap, Viewport::new(size.0, size.1), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = runner.poll_timeout().max(Duration::from_millis(1));
        if !event::poll(timeout)? {
            continue;
        }
        let ev = event::read()?;
        if let Event::Resize(..) = ev {
            term.invalidate();
        }
        match translate(&ev) {
            InputCommand::Quit => {
                if let Some(journal) = journal.as_mut() {
                    journal.flush()?;
                }
                return Ok(());
            }
            InputCommand::Action(action) => {
                game.apply_action(action);
            }
            InputCommand::Ignored => {}
        }
    }
}
