//! Append-only JSONL journal of core events.
//!
//! One JSON object per line, e.g.
//!
//! ```text
//! {"t":12.48,"tick":780,"event":"died","cause":"hazard","i":3,"j":5,"lives_lost":2}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::GameEvent;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalRecord {
    /// Seconds on the game clock.
    pub t: f64,
    pub tick: u64,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub j: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lives_lost: Option<u32>,
}

impl JournalRecord {
    pub fn from_event(t: f64, tick: u64, event: &GameEvent) -> Self {
        let mut rec = Self {
            t,
            tick,
            event: event.name(),
            level: None,
            score: None,
            cause: None,
            i: None,
            j: None,
            lives_lost: None,
        };
        match *event {
            GameEvent::LevelGenerated { level } => rec.level = Some(level),
            GameEvent::Died {
                cause,
                at,
                lives_lost,
            } => {
                rec.cause = Some(cause.as_str());
                rec.i = Some(at.i);
                rec.j = Some(at.j);
                rec.lives_lost = Some(lives_lost);
            }
            GameEvent::LevelCleared { level, score } => {
                rec.level = Some(level);
                rec.score = Some(score);
            }
            GameEvent::GameWon { score } | GameEvent::GameLost { score } => {
                rec.score = Some(score)
            }
            GameEvent::ObstaclesRefreshed | GameEvent::Restarted => {}
        }
        rec
    }
}

pub struct Journal<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl Journal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening journal {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn append(&mut self, record: &JournalRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeathCause, GridPos};

    #[test]
    fn test_writes_one_line_per_event() {
        let mut journal = Journal::new(Vec::new());
        journal
            .append(&JournalRecord::from_event(
                0.0,
                1,
                &GameEvent::LevelGenerated { level: 1 },
            ))
            .unwrap();
        journal
            .append(&JournalRecord::from_event(
                2.5,
                150,
                &GameEvent::Died {
                    cause: DeathCause::Obstacle,
                    at: GridPos::new(3, 4),
                    lives_lost: 1,
                },
            ))
            .unwrap();

        let text = String::from_utf8(journal.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "level_generated");
        assert_eq!(first["level"], 1);
        assert!(first.get("score").is_none());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["cause"], "obstacle");
        assert_eq!(second["i"], 3);
        assert_eq!(second["j"], 4);
        assert_eq!(second["tick"], 150);
    }
}
