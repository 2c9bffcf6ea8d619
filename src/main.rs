//! Terminal runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer. The game core
//! never reads the clock: every frame passes it the milliseconds since startup.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use tui_blockfall::config::AppConfig;
use tui_blockfall::core::GameState;
use tui_blockfall::input::{should_quit, KeyTracker};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::GameEvent;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(config.log_path.as_deref())?;
    for (name, raw) in &config.rejected {
        warn!("ignoring {name}={raw:?}, using the default");
    }
    info!(
        "starting: seed {} fps {} timings {:?}",
        config.seed, config.fps, config.timings
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {e:#}");
    }
    if let Err(e) = &result {
        warn!("exiting with error: {e:#}");
    }
    result
}

/// Route `log` output to a file; the terminal is busy with the game.
fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp(None)
        .format_module_path(false)
        .try_init()
        .context("initialising logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::with_timings(config.seed, config.timings);
    let view = GameView::default();
    let mut keys = KeyTracker::new()
        .with_key_release_timeout_ms(config.key_release_timeout_ms)
        .with_repeat_delay_ms(config.repeat_delay_ms);
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(config.frame_ms());
    let start = Instant::now();
    let mut next_frame = start;

    loop {
        // Input with timeout until the next frame.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    keys.handle_key_event(key, elapsed_ms(start));
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Drop missed frames instead of bursting to catch up.
        next_frame += frame;
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }

        let now_ms = elapsed_ms(start);
        let snap = game.run(now_ms, keys.key_state(now_ms));
        for ev in game.drain_events() {
            match ev {
                GameEvent::ScoreChanged {
                    lines,
                    score,
                    level,
                } => debug!("score {score} level {level} lines {lines}"),
                GameEvent::GameOver { score, level } => {
                    info!("final score {score} at level {level}")
                }
                _ => {}
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
