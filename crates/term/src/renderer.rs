//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are encoded as crossterm commands into a byte buffer, then written
//! in one go. After the first frame only runs of changed glyphs are sent.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// Last frame sent; `None` forces a full redraw.
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
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

    /// Force the next draw to be a full redraw, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Send `fb`, diffing against the previous frame when sizes match.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        let same_size = |p: &&mut FrameBuffer| p.width() == fb.width() && p.height() == fb.height();
        if let Some(prev) = self.last.as_mut().filter(same_size) {
            encode_diff_into(prev, fb, &mut self.buf)?;
            prev.clone_from(fb);
        } else {
            encode_full_into(fb, &mut self.buf)?;
            self.last = Some(fb.clone());
        }
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_run(fb, 0, y, fb.width(), &mut pen, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs of `next` relative to `prev` into `out`.
///
/// Both frames must have the same size. Writes nothing when they are equal.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        write_run(next, x, y, len, &mut pen, out)?;
    }
    if pen.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// `(x, y, len)` of each horizontal run where the frames differ.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let w = next.width() as usize;
    let mut runs = Vec::new();
    if w == 0 {
        return runs;
    }
    for (y, (a, b)) in prev
        .glyphs()
        .chunks(w)
        .zip(next.glyphs().chunks(w))
        .enumerate()
    {
        let mut x = 0;
        while x < w {
            if a[x] == b[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && a[x] != b[x] {
                x += 1;
            }
            runs.push((start as u16, y as u16, (x - start) as u16));
        }
    }
    runs
}

/// Print `len` glyphs from `(x, y)`, switching style only when it changes.
fn write_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    pen: &mut Option<Style>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let glyph = fb.get(x + dx, y).unwrap_or(Glyph::BLANK);
        if *pen != Some(glyph.style) {
            apply_style_into(out, glyph.style)?;
            *pen = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
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
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);
        b.put_str(1, 0, "XXX", Style::PLAIN);
        b.put_char(4, 1, 'Y', Style::PLAIN);

        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3), (4, 1, 1)]);
    }

    #[test]
    fn style_change_alone_is_a_change() {
        let a = FrameBuffer::new(3, 1);
        let mut b = FrameBuffer::new(3, 1);
        b.put_char(2, 0, ' ', Style::block(Rgb::new(1, 2, 3)));
        assert_eq!(changed_runs(&a, &b), vec![(2, 0, 1)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "ab", Style::PLAIN);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn full_frame_contains_text() {
        let mut fb = FrameBuffer::new(6, 2);
        fb.put_str(0, 1, "SCORE", Style::PLAIN.bold());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("SCORE"));
    }

    #[test]
    fn draw_sends_full_then_diff() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let mut fb = FrameBuffer::new(8, 2);
        fb.put_str(0, 0, "hello", Style::PLAIN);
        renderer.draw(&fb).unwrap();
        let first = renderer.out.len();
        assert!(first > 0);

        // Unchanged frame writes nothing.
        renderer.draw(&fb).unwrap();
        assert_eq!(renderer.out.len(), first);

        fb.put_char(7, 1, '!', Style::PLAIN);
        renderer.draw(&fb).unwrap();
        let sent = String::from_utf8_lossy(&renderer.out[first..]).into_owned();
        assert!(sent.contains('!'));
        assert!(!sent.contains("hello"));

        renderer.invalidate();
        renderer.draw(&fb).unwrap();
        let out = renderer.into_inner();
        assert!(String::from_utf8_lossy(&out).matches("hello").count() == 2);
    }
}
