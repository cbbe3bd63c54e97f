//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot into a
//! framebuffer of styled glyphs, and the renderer flushes that framebuffer to
//! the terminal, sending only what changed since the last frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{piece_color, GameView, Layout, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
