//! Debris Rain entry point
//!
//! Terminal setup, the input-reader thread, and the 60 Hz loop feeding
//! `TickInput`s into the sim.

use std::collections::HashMap;
use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
};

use debris_rain::consts::TICK_HZ;
use debris_rain::render;
use debris_rain::sim::{GameEvent, GameState, TickInput, tick};
use debris_rain::tuning::Tuning;

const FRAME: Duration = Duration::from_nanos(1_000_000_000 / TICK_HZ as u64);

/// A key counts as held if its last press/repeat arrived within this many
/// frames. Covers terminals that never emit key-release events: the OS
/// key-repeat rate refreshes the stamp faster than the window expires.
const HOLD_WINDOW: u64 = 4;

fn is_held(key_frame: &HashMap<KeyCode, u64>, key: KeyCode, frame: u64) -> bool {
    key_frame
        .get(&key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let tuning = Tuning::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Debris Rain starting (seed {seed})");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release and key-repeat events where the terminal supports
    // them; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads happen on a dedicated thread feeding a channel, so the
    // game loop never waits on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx, &tuning, seed);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    tuning: &Tuning,
    seed: u64,
) -> std::io::Result<()> {
    let mut state = GameState::new(seed, tuning);

    // Maps each held key to the frame it was last seen (press or repeat)
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let mut input = TickInput::default();

        // Drain pending events; one-shot keys latch for this frame only
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char(' ') => input.fire = true,
                        KeyCode::Char('p') | KeyCode::Char('P') => input.pause = true,
                        KeyCode::Char('r') | KeyCode::Char('R') => input.restart = true,
                        KeyCode::Enter => input.confirm = true,
                        _ => {}
                    }
                }
                // Repeat refreshes the stamp so the key stays held
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release drops the key immediately (enhanced-keyboard path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        input.left = is_held(&key_frame, KeyCode::Left, frame);
        input.right = is_held(&key_frame, KeyCode::Right, frame);

        for ev in tick(&mut state, &input, tuning) {
            match ev {
                GameEvent::RunStarted => log::info!("run started"),
                GameEvent::LevelUp { level } => log::info!("difficulty level {level}"),
                GameEvent::LauncherAdded { launchers } => {
                    log::info!("rocket upgraded to {launchers} launchers");
                }
                GameEvent::RunEnded { score, level } => {
                    log::info!("run ended: score {score}, level {level}");
                }
                GameEvent::DebrisShot { .. } => {}
            }
        }

        render::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}
