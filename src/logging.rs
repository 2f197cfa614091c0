//! Diagnostic logging.
//!
//! The terminal belongs to the renderer, so log output only goes to a file,
//! and only when `TILEHOP_LOG_PATH` is set.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::types::GameEvent;

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(true)
}

/// Emit one structured log line for a core event.
pub fn log_event(event: &GameEvent) {
    match *event {
        GameEvent::LevelGenerated { level } => info!(level, "level_generated"),
        GameEvent::ObstaclesRefreshed => debug!("obstacles_refreshed"),
        GameEvent::Died {
            cause,
            at,
            lives_lost,
        } => info!(
            cause = cause.as_str(),
            i = at.i,
            j = at.j,
            lives_lost,
            "died"
        ),
        GameEvent::LevelCleared { level, score } => info!(level, score, "level_cleared"),
        GameEvent::GameWon { score } => info!(score, "game_won"),
        GameEvent::GameLost { score } => warn!(score, "game_lost"),
        GameEvent::Restarted => info!("restarted"),
    }
}
