//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the framed well, then a column of three boxes for
//! the next piece, the held piece and the score panel. Board cells are two
//! terminal columns wide.

use crate::core::{get_shape, GameSnapshot, Tetromino};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, PieceKind};

/// Outer width of the side boxes.
const SIDE_W: u16 = 10;
/// Outer height of the NEXT and HOLD boxes: a 4-row preview plus frame.
const PREVIEW_H: u16 = 6;
/// Outer height of the score box: three label/value pairs plus frame.
const STATS_H: u16 = 8;
/// Gap between the well and the side column, and between side boxes.
const GAP: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Display color of each kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 205, 205),
        PieceKind::J => Rgb::new(60, 90, 230),
        PieceKind::L => Rgb::new(230, 230, 230),
        PieceKind::O => Rgb::new(230, 210, 0),
        PieceKind::S => Rgb::new(0, 200, 0),
        PieceKind::T => Rgb::new(205, 0, 205),
        PieceKind::Z => Rgb::new(220, 30, 30),
    }
}

/// Screen positions of the well and side boxes for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board_x: u16,
    pub board_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub side_x: u16,
}

impl Layout {
    pub fn next_y(&self) -> u16 {
        self.board_y
    }

    pub fn hold_y(&self) -> u16 {
        self.next_y().saturating_add(PREVIEW_H + GAP)
    }

    pub fn stats_y(&self) -> u16 {
        self.hold_y().saturating_add(PREVIEW_H + GAP)
    }
}

/// Terminal renderer for one game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Centre the well and side column in `viewport`.
    ///
    /// Anything that does not fit is clipped by the framebuffer.
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let frame_w = snap.cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.rows.saturating_add(2);
        let total_w = frame_w.saturating_add(GAP + SIDE_W);
        let board_x = viewport.width.saturating_sub(total_w) / 2;
        let board_y = viewport.height.saturating_sub(frame_h) / 2;
        Layout {
            board_x,
            board_y,
            frame_w,
            frame_h,
            side_x: board_x.saturating_add(frame_w + GAP),
        }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    ///
    /// Callers keep one framebuffer across frames; nothing is allocated once
    /// it has reached the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let layout = self.layout(snap, viewport);
        fb.draw_box(
            layout.board_x,
            layout.board_y,
            layout.frame_w,
            layout.frame_h,
            Style::PLAIN,
        );

        // Stack stays hidden while paused.
        if !snap.paused {
            self.draw_well(fb, snap, &layout);
        }

        self.draw_preview(fb, layout.side_x, layout.next_y(), "NEXT", snap.next);
        self.draw_preview(fb, layout.side_x, layout.hold_y(), "HOLD", snap.stored);
        self.draw_stats(fb, snap, layout.side_x, layout.stats_y());

        if snap.paused {
            self.draw_overlay_text(fb, &layout, "PAUSED");
        } else if snap.game_over {
            self.draw_overlay_text(fb, &layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        for row in 0..snap.rows {
            for col in 0..snap.cols {
                if let Cell::Filled(kind) = snap.cell(row, col) {
                    let x = inner(layout.board_x, col.saturating_mul(self.cell_w));
                    let y = inner(layout.board_y, row);
                    fb.fill_rect(x, y, self.cell_w, 1, ' ', Style::block(piece_color(kind)));
                }
            }
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, title: &str, piece: Option<Tetromino>) {
        fb.draw_box(x, y, SIDE_W, PREVIEW_H, Style::PLAIN);
        fb.put_str(inner(x, 0), y, title, Style::PLAIN.bold());

        let Some(piece) = piece else {
            return;
        };
        let style = Style::block(piece_color(piece.kind));
        for (dr, dc) in get_shape(piece.kind, piece.rotation) {
            let px = inner(x, dc as u16 * self.cell_w);
            let py = inner(y, dr as u16);
            fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
        }
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        fb.draw_box(x, y, SIDE_W, STATS_H, Style::PLAIN);
        let label = Style::PLAIN.bold();
        let rows = [
            ("SCORE", snap.points),
            ("LEVEL", snap.level),
            ("LINES", snap.lines_remaining),
        ];
        for (i, (name, value)) in rows.into_iter().enumerate() {
            let ly = inner(y, 2 * i as u16);
            fb.put_str(inner(x, 0), ly, name, label);
            fb.put_u32(inner(x, 0), ly.saturating_add(1), value, Style::PLAIN);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = layout
            .board_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        let y = layout.board_y.saturating_add(layout.frame_h / 2);
        fb.put_str(x, y, text, Style::PLAIN.bold());
    }
}

/// Position `offset` cells inside a frame whose border starts at `origin`.
fn inner(origin: u16, offset: u16) -> u16 {
    origin.saturating_add(1).saturating_add(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedSequence, GameState};
    use crate::types::Command;

    fn snapshot(kinds: &[PieceKind]) -> GameSnapshot {
        GameState::with_source(22, 10, FixedSequence::new(kinds.iter().copied()))
            .unwrap()
            .snapshot()
    }

    // 22x10 well is 22x24 framed; the side column adds 11.
    const EXACT: Viewport = Viewport {
        width: 33,
        height: 24,
    };

    #[test]
    fn layout_fills_exact_viewport() {
        let snap = snapshot(&[PieceKind::T]);
        let layout = GameView::default().layout(&snap, EXACT);
        assert_eq!((layout.board_x, layout.board_y), (0, 0));
        assert_eq!((layout.frame_w, layout.frame_h), (22, 24));
        assert_eq!(layout.side_x, 23);
        assert_eq!(layout.hold_y(), 7);
        assert_eq!(layout.stats_y(), 14);
    }

    #[test]
    fn layout_centres_in_larger_viewport() {
        let snap = snapshot(&[PieceKind::T]);
        let layout = GameView::default().layout(&snap, Viewport::new(53, 30));
        assert_eq!((layout.board_x, layout.board_y), (10, 3));
    }

    #[test]
    fn falling_piece_is_drawn_in_its_color() {
        let snap = snapshot(&[PieceKind::I, PieceKind::O]);
        let fb = GameView::default().render(&snap, EXACT);

        // I spawns at (0, 3) with its cells on row 1, columns 3..=6.
        let cyan = Style::block(piece_color(PieceKind::I));
        for col in 3..7u16 {
            for half in 0..2 {
                let g = fb.get(1 + col * 2 + half, 2).unwrap();
                assert_eq!(g.style, cyan);
            }
        }
        assert_eq!(fb.get(1, 2).unwrap().style, Style::PLAIN);
    }

    #[test]
    fn side_boxes_show_titles_and_numbers() {
        let snap = GameSnapshot {
            points: 1200,
            level: 3,
            lines_remaining: 7,
            ..snapshot(&[PieceKind::T, PieceKind::O])
        };
        let fb = GameView::default().render(&snap, EXACT);

        assert!(fb.line(0).contains("NEXT"));
        assert!(fb.line(7).contains("HOLD"));
        assert!(fb.line(15).contains("SCORE"));
        assert!(fb.line(16).contains("1200"));
        assert!(fb.line(18).contains('3'));
        assert!(fb.line(20).contains('7'));

        // O preview: offsets (0,1) (0,2) (1,1) (1,2).
        let yellow = Style::block(piece_color(PieceKind::O));
        assert_eq!(fb.get(23 + 1 + 2, 1).unwrap().style, yellow);
        assert_eq!(fb.get(23 + 1, 1).unwrap().style, Style::PLAIN);
    }

    #[test]
    fn empty_hold_box_has_no_blocks() {
        let snap = snapshot(&[PieceKind::T]);
        let fb = GameView::default().render(&snap, EXACT);
        for y in 8..12 {
            for x in 24..32 {
                assert_eq!(fb.get(x, y).unwrap().style, Style::PLAIN);
            }
        }
    }

    #[test]
    fn pause_hides_the_well() {
        let mut snap = snapshot(&[PieceKind::I]);
        snap.paused = true;
        let fb = GameView::default().render(&snap, EXACT);
        assert!(fb.line(12).contains("PAUSED"));
        for x in 1..21 {
            assert_eq!(fb.get(x, 2).unwrap().style, Style::PLAIN);
        }
    }

    #[test]
    fn game_over_overlay() {
        let mut state = GameState::with_source(22, 10, FixedSequence::new([PieceKind::O])).unwrap();
        while state.tick(Command::HardDrop) {}
        let fb = GameView::default().render(&state.snapshot(), EXACT);
        assert!(fb.line(12).contains("GAME OVER"));
    }

    #[test]
    fn tiny_viewport_clips_without_panic() {
        let snap = snapshot(&[PieceKind::L]);
        let mut fb = FrameBuffer::new(0, 0);
        GameView::default().render_into(&snap, Viewport::new(5, 3), &mut fb);
        assert_eq!((fb.width(), fb.height()), (5, 3));
        GameView::new(1).render_into(&snap, Viewport::new(0, 0), &mut fb);
        assert!(fb.glyphs().is_empty());
    }
}
