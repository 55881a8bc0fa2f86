use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::Print,
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use blaster::compute::{init_state, take_cues, tick};
use blaster::constants::FRAMES_PER_SECOND;
use blaster::display::{self, Viewport};
use blaster::entities::{Cue, GameState, Input};

/// Log file path. Logging is off unless this is set, since the terminal is
/// busy drawing the game.
const LOG_PATH_ENV: &str = "BLASTER_LOG";

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// OS key-repeat runs at 15 Hz or more, so 8 frames at 60 FPS (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

fn frame_duration() -> Duration {
    Duration::from_secs(1) / FRAMES_PER_SECOND
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| is_held(key_frame, key, frame))
}

/// Sample the held-key map into this frame's input.
fn read_input(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Input {
    use KeyCode::{Char, Down, Left, Right, Up};
    Input {
        left: any_held(key_frame, &[Left, Char('a'), Char('A')], frame),
        right: any_held(key_frame, &[Right, Char('d'), Char('D')], frame),
        up: any_held(key_frame, &[Up, Char('w'), Char('W')], frame),
        down: any_held(key_frame, &[Down, Char('s'), Char('S')], frame),
        fire: any_held(key_frame, &[Char(' ')], frame),
        restart: any_held(key_frame, &[Char('r'), Char('R')], frame),
    }
}

/// The terminal has no mixer; the bell stands in for the loud cues.
fn play_cues<W: Write>(out: &mut W, cues: &[Cue]) -> std::io::Result<()> {
    for cue in cues {
        match cue {
            Cue::Bonus | Cue::GameOver => {
                out.queue(Print("\x07"))?;
            }
            Cue::Shoot | Cue::Explosion => tracing::trace!(?cue, "sound cue"),
        }
    }
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key. Each frame we check which keys are still "fresh"
/// (within `HOLD_WINDOW` frames) and hand them to the simulation as key-down
/// flags, so Space and the arrows can be held at the same time.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let (cols, rows) = terminal::size()?;
    let mut view = Viewport::fit(cols, rows);

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            match event {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code.clone(), frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code.clone(), frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Resize(cols, rows) => {
                    view = Viewport::fit(cols, rows);
                    tracing::debug!(cols, rows, "terminal resized");
                }
                _ => {}
            }
        }

        let input = read_input(&key_frame, frame);
        tick(state, &input, &mut rng);

        play_cues(out, &take_cues(state))?;
        display::render(out, state, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration() {
            thread::sleep(frame_duration() - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging() -> anyhow::Result<()> {
    let Ok(path) = env::var(LOG_PATH_ENV) else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("failed to create log file {path}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    tracing::info!(keyboard_enhanced, "starting");
    let mut state = init_state();
    let result = game_loop(&mut out, &mut state, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    tracing::info!(
        kills = state.sim.progress.kills_total,
        frames = state.frame,
        "quit"
    );
    result.context("terminal I/O failed")
}
