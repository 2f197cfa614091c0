//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Notes |
//! |----------|---------|-------|
//! | `TILEHOP_SEED` | from system time | level layout seed |
//! | `TILEHOP_SPEED` | 4 | clamped to 1..=10 |
//! | `TILEHOP_TICK_MS` | 16 | at least 1 |
//! | `TILEHOP_LOG_PATH` | unset | diagnostic log file; no logging when unset |
//! | `TILEHOP_LOG` | `info` | tracing filter directives |
//! | `TILEHOP_JOURNAL_PATH` | unset | JSONL event journal |
//! | `TILEHOP_MOUSE` | on | `0`/`false`/`off` disables mouse capture |
//!
//! Unparseable values fall back to the default rather than failing startup.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::Speed;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: u32,
    pub speed: Speed,
    pub tick: Duration,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub journal_path: Option<PathBuf>,
    pub mouse: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), time_seed())
    }

    /// Build from any key lookup; `fallback_seed` is used when no seed is given.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, fallback_seed: u32) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = value("TILEHOP_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(fallback_seed);

        let speed = value("TILEHOP_SPEED")
            .and_then(|s| s.parse::<i64>().ok())
            .map(|v| Speed::new(v.clamp(i32::MIN as i64, i32::MAX as i64) as i32))
            .unwrap_or_default();

        let tick_ms = value("TILEHOP_TICK_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(TICK_MS as u64)
            .max(1);

        let mouse = value("TILEHOP_MOUSE")
            .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(true);

        Self {
            seed,
            speed,
            tick: Duration::from_millis(tick_ms),
            log_path: value("TILEHOP_LOG_PATH").map(PathBuf::from),
            log_filter: value("TILEHOP_LOG").unwrap_or_else(|| "info".to_string()),
            journal_path: value("TILEHOP_JOURNAL_PATH").map(PathBuf::from),
            mouse,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None, 1)
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
