//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a size change) is a full redraw;
//! after that only cells that differ from the previous frame are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// ASCII BEL, the terminal's audible alert.
const BELL: &str = "\x07";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
            entered: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Does nothing if [`enter`](Self::enter) was never called.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Ring the terminal bell.
    pub fn bell(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(BELL))?;
        self.flush_buf()
    }

    /// Draw `fb`, then swap it with the frame previously on screen.
    ///
    /// After the call `fb` holds stale contents; callers redraw it in full
    /// every frame, so the two buffers simply trade places.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut shown = match self.shown.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            other => {
                log::debug!("full redraw at {}x{}", fb.width(), fb.height());
                encode_full_into(fb, &mut self.buf)?;
                other.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()))
            }
        };
        self.flush_buf()?;

        shown.resize(fb.width(), fb.height());
        std::mem::swap(&mut shown, fb);
        self.shown = Some(shown);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queues cells, emitting style changes only when the style differs from
/// the last cell written.
struct CellWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> CellWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            apply_style_into(self.out, cell.style)?;
            self.style = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-screen redraw of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut w = CellWriter::new(out);
    for y in 0..fb.height() {
        w.move_to(0, y)?;
        for x in 0..fb.width() {
            w.cell(fb.get(x, y).unwrap_or_default())?;
        }
    }
    w.finish()
}

/// Encode the cells of `next` that differ from `prev` into `out`.
///
/// Both buffers must have the same size. The cursor is only repositioned at
/// the start of each run of changed cells.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut w = CellWriter::new(out);
    for y in 0..next.height() {
        // Column the terminal cursor is at, while it is on this row.
        let mut cursor_x = None;
        for x in 0..next.width() {
            let cell = next.get(x, y).unwrap_or_default();
            if prev.get(x, y) == Some(cell) {
                continue;
            }
            if cursor_x != Some(x) {
                w.move_to(x, y)?;
            }
            w.cell(cell)?;
            cursor_x = Some(x + 1);
        }
    }
    w.finish()
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.reverse {
        out.queue(SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

fn to_color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::RED;

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    fn queued(cmd: impl crossterm::Command) -> Vec<u8> {
        let mut out = Vec::new();
        out.queue(cmd).unwrap();
        out
    }

    #[test]
    fn test_rgb_maps_to_truecolor() {
        assert_eq!(to_color(RED), Color::Rgb { r: 220, g: 80, b: 80 });
    }

    #[test]
    fn test_full_redraw_positions_every_row() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "AB", CellStyle::default());
        fb.put_str(0, 1, "CD", CellStyle::default());

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let s = text(&out);
        let row0 = text(&queued(cursor::MoveTo(0, 0)));
        let row1 = text(&queued(cursor::MoveTo(0, 1)));
        assert!(s.contains(&row0));
        assert!(s.contains(&format!("{row1}CD")));
        assert!(s.contains("AB"));
    }

    #[test]
    fn test_identical_frames_emit_no_cells() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "word", CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
        assert!(!text(&out).contains("word"));
        assert!(!text(&out).contains('H'));
    }

    #[test]
    fn test_adjacent_changes_share_one_cursor_move() {
        let prev = FrameBuffer::new(6, 1);
        let mut next = FrameBuffer::new(6, 1);
        next.put_str(1, 0, "XYZ", CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&prev, &next, &mut out).unwrap();
        let s = text(&out);
        let jump = text(&queued(cursor::MoveTo(1, 0)));
        assert!(s.contains(&jump));
        assert!(s.contains("XYZ"));
        // MoveTo is the only command ending in 'H'.
        assert_eq!(s.matches('H').count(), 1);
    }

    #[test]
    fn test_separate_runs_move_twice() {
        let prev = FrameBuffer::new(6, 1);
        let mut next = FrameBuffer::new(6, 1);
        next.put_char(0, 0, 'a', CellStyle::default());
        next.put_char(4, 0, 'b', CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&prev, &next, &mut out).unwrap();
        assert_eq!(text(&out).matches('H').count(), 2);
    }

    #[test]
    fn test_reverse_style_emits_reverse_attribute() {
        let mut plain = Vec::new();
        apply_style_into(&mut plain, CellStyle::default()).unwrap();
        let mut rev = Vec::new();
        apply_style_into(&mut rev, CellStyle::default().reversed()).unwrap();

        let reverse = queued(SetAttribute(Attribute::Reverse));
        assert!(rev.ends_with(&reverse));
        assert!(!plain.ends_with(&reverse));
    }
}
