//! Terminal runner for the tick-driven falling-block game.
//!
//! One engine tick per frame: tick with the queued command, draw, then wait
//! out the rest of the frame collecting key presses.

use std::collections::VecDeque;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tick_tetris::core::{GameSnapshot, GameState};
use tick_tetris::input::{is_pause, map_key, should_quit};
use tick_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tick_tetris::types::{Command, DEFAULT_COLS, DEFAULT_FRAME_MS, DEFAULT_ROWS};

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tick-tetris",
    version,
    about = "Falling-block puzzle in the terminal with tick-based gravity.",
    long_about = "Clear full rows to score. Gravity speeds up every ten lines.\n\n\
        CONTROLS:\n  Left/Right  Move       Up / k    Rotate CW    z   Rotate CCW\n  \
        Down / j    Hard drop  Space     Hold         p   Pause      q   Quit"
)]
struct Args {
    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_name = "ROWS")]
    rows: u16,

    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_COLS, value_name = "COLS")]
    cols: u16,

    /// Seed for the piece sequence. Taken from the clock if not set.
    #[arg(long, value_name = "SEED")]
    seed: Option<u32>,

    /// Milliseconds per frame; the engine ticks once per frame.
    #[arg(long, default_value_t = DEFAULT_FRAME_MS, value_name = "MS")]
    frame_ms: u64,
}

/// Options resolved from the command line.
#[derive(Debug, Clone)]
struct GameConfig {
    rows: u16,
    cols: u16,
    seed: u32,
    frame: Duration,
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        Self {
            rows: args.rows,
            cols: args.cols,
            seed: args.seed.unwrap_or_else(clock_seed),
            frame: Duration::from_millis(args.frame_ms),
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let config = GameConfig::from(Args::parse());
    // Validate before touching the terminal so errors print normally.
    let mut game = GameState::new(config.rows, config.cols, config.seed)?;

    let mut screen = Screen::new(TerminalRenderer::stdout());
    screen.term.enter()?;

    let result = run(&mut screen, &mut game, &config);

    if let Err(err) = screen.term.exit() {
        eprintln!("[tick-tetris] failed to restore terminal: {err:#}");
    }
    result?;

    println!(
        "Game over! You finished with {} points on level {}.",
        game.points(),
        game.level()
    );
    Ok(())
}

/// Renderer plus the buffers reused from frame to frame.
struct Screen {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    snap: GameSnapshot,
}

impl Screen {
    fn new(term: TerminalRenderer) -> Self {
        Self {
            term,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            snap: GameSnapshot::default(),
        }
    }

    fn draw(&mut self, game: &GameState, paused: bool) -> Result<()> {
        game.snapshot_into(&mut self.snap);
        self.snap.paused = paused;
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(&self.snap, Viewport::new(w, h), &mut self.fb);
        self.term.draw(&self.fb)
    }
}

fn run(screen: &mut Screen, game: &mut GameState, config: &GameConfig) -> Result<()> {
    let mut pending: VecDeque<Command> = VecDeque::new();
    let mut command = Command::None;

    loop {
        let frame_start = Instant::now();
        let running = game.tick(command);
        screen.draw(game, false)?;
        if !running {
            wait_for_key(screen, game, false)?;
            return Ok(());
        }

        // Collect input until the frame is over.
        loop {
            let timeout = config.frame.saturating_sub(frame_start.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_pause(key) {
                        pending.clear();
                        screen.draw(game, true)?;
                        if !wait_for_key(screen, game, true)? {
                            return Ok(());
                        }
                        break;
                    }
                    match map_key(key) {
                        Command::None => {}
                        c => pending.push_back(c),
                    }
                }
                Event::Resize(..) => screen.term.invalidate(),
                _ => {}
            }
        }

        command = pending.pop_front().unwrap_or_default();
    }
}

/// Block until a key press, redrawing on resize; `false` if that key asks to quit.
fn wait_for_key(screen: &mut Screen, game: &GameState, paused: bool) -> Result<bool> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => return Ok(!should_quit(key)),
            Event::Resize(..) => {
                screen.term.invalidate();
                screen.draw(game, paused)?;
            }
            _ => {}
        }
    }
}
