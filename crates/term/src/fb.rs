//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(230, 230, 230);
}

/// Foreground, background and weight of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Style {
    /// Light text on black.
    pub const PLAIN: Style = Style {
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        bold: false,
    };

    /// Solid block of `color`, drawn as background behind a space.
    pub const fn block(color: Rgb) -> Self {
        Self {
            fg: Rgb::BLACK,
            bg: color,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        style: Style::PLAIN,
    };
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// 2D grid of styled glyphs, addressed `(x, y)` from the top-left.
///
/// Writes outside the grid are dropped, so drawing code can clip for free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when it is large enough.
    ///
    /// Contents are unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::BLANK);
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::BLANK);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.set(x, y, Glyph { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        for (i, ch) in s.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16).filter(|&cx| cx < self.width) else {
                break;
            };
            self.put_char(cx, y, ch, style);
        }
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: Style) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, &d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, d as char, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Line-drawing frame whose outer size is `w x h`.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
        for dx in 1..w - 1 {
            self.put_char(x.saturating_add(dx), y, '─', style);
            self.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y.saturating_add(dy), '│', style);
            self.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    /// Characters of row `y`, styles dropped.
    pub fn line(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_outside_are_dropped() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(2, 0, "abcdef", Style::PLAIN);
        fb.put_char(9, 9, 'x', Style::PLAIN);
        assert_eq!(fb.line(0), "  ab");
        assert_eq!(fb.line(1), "    ");
        assert_eq!(fb.get(4, 0), None);
    }

    #[test]
    fn put_u32_prints_decimal() {
        let mut fb = FrameBuffer::new(12, 1);
        fb.put_u32(0, 0, 0, Style::PLAIN);
        assert_eq!(fb.line(0).trim_end(), "0");

        fb.clear();
        fb.put_u32(1, 0, 4_294_967_295, Style::PLAIN);
        assert_eq!(fb.line(0).trim_end(), " 4294967295");
    }

    #[test]
    fn draw_box_outlines() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_box(0, 0, 4, 3, Style::PLAIN);
        assert_eq!(fb.line(0), "┌──┐");
        assert_eq!(fb.line(1), "│  │");
        assert_eq!(fb.line(2), "└──┘");
    }

    #[test]
    fn resize_changes_dimensions() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!((fb.width(), fb.height()), (5, 3));
        assert_eq!(fb.glyphs().len(), 15);
    }
}
