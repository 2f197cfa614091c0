//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is diffed against the previous one and only changed runs of
//! cells are written. A size change (or [`TerminalRenderer::invalidate`])
//! forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// A horizontal run of changed cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    out: Vec<u8>,
    runs: Vec<Run>,
    mouse: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            out: Vec::with_capacity(64 * 1024),
            runs: Vec::with_capacity(256),
            mouse: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor; optionally capture the mouse.
    pub fn enter(&mut self, mouse: bool) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        if mouse {
            self.out.queue(EnableMouseCapture)?;
        }
        self.mouse = mouse;
        self.flush()
    }

    /// Undo everything [`TerminalRenderer::enter`] did.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        if self.mouse {
            self.out.queue(DisableMouseCapture)?;
        }
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Draw `fb` and swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents the caller can render over, so no
    /// frame is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        let mut prev = match self.prev.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                changed_runs(&prev, fb, &mut self.runs);
                encode_runs_into(fb, &self.runs, &mut self.out)?;
                prev
            }
            other => {
                encode_full_into(fb, &mut self.out)?;
                let mut prev = other.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush()?;

        std::mem::swap(&mut prev, fb);
        self.prev = Some(prev);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect the runs of cells that differ between two equally sized frames.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer, runs: &mut Vec<Run>) {
    runs.clear();
    if prev.width() != next.width() || prev.height() != next.height() {
        runs.extend((0..next.height()).map(|y| Run {
            x: 0,
            y,
            len: next.width(),
        }));
        return;
    }

    let w = next.width() as usize;
    let rows = prev.cells().chunks(w.max(1)).zip(next.cells().chunks(w.max(1)));
    for (y, (a, b)) in rows.enumerate() {
        let mut start: Option<usize> = None;
        for x in 0..=w {
            let differs = x < w && a[x] != b[x];
            match (start, differs) {
                (None, true) => start = Some(x),
                (Some(s), false) => {
                    runs.push(Run {
                        x: s as u16,
                        y: y as u16,
                        len: (x - s) as u16,
                    });
                    start = None;
                }
                _ => {}
            }
        }
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_cells(fb, 0, y, fb.width(), &mut style, out)?;
    }
    reset_into(out)
}

/// Encode only the given runs of `next` into `out`.
pub fn encode_runs_into(next: &FrameBuffer, runs: &[Run], out: &mut Vec<u8>) -> Result<()> {
    if runs.is_empty() {
        return Ok(());
    }
    let mut style = None;
    for run in runs {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        write_cells(next, run.x, run.y, run.len, &mut style, out)?;
    }
    reset_into(out)
}

fn write_cells(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    style: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        if *style != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *style = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn reset_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_cover_changed_cells_only() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.put_char(x, 0, '#', style);
        }
        b.put_char(5, 1, '@', style);

        let mut runs = Vec::new();
        changed_runs(&a, &b, &mut runs);
        assert_eq!(
            runs,
            vec![Run { x: 1, y: 0, len: 3 }, Run { x: 5, y: 1, len: 1 }]
        );
    }

    #[test]
    fn test_identical_frames_encode_nothing() {
        let a = FrameBuffer::new(4, 4);
        let mut runs = Vec::new();
        changed_runs(&a, &a.clone(), &mut runs);
        assert!(runs.is_empty());

        let mut out = Vec::new();
        encode_runs_into(&a, &runs, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_size_change_marks_every_row() {
        let a = FrameBuffer::new(3, 2);
        let b = FrameBuffer::new(4, 3);
        let mut runs = Vec::new();
        changed_runs(&a, &b, &mut runs);
        assert_eq!(runs.len(), 3);
        assert!(runs.iter().all(|r| r.x == 0 && r.len == 4));
    }

    #[test]
    fn test_full_encode_contains_text() {
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(0, 0, "HOP", CellStyle::default().bold());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("HOP"));
    }
}
