mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use log::{info, warn};

use space_shooter::{ActorKind, Config, GameEvent, TickInput, World};

use display::{Hud, Screen};

/// Terminal front-end for the shooter simulation.
#[derive(Parser, Debug)]
#[command(name = "space_shooter", version, about)]
struct Cli {
    /// JSON file overriding any of the simulation constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation ticks per second.
    #[arg(long)]
    tick_rate: Option<u32>,
}

// ── Held-key input ────────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of ~130 ms is always
/// refreshed before expiry.
const HOLD_WINDOW_MS: u64 = 130;

/// Returns true if `key` was seen within the last `window` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64, window: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= window)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64, window: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame, window))
}

fn sample_input(key_frame: &HashMap<KeyCode, u64>, frame: u64, window: u64) -> TickInput {
    let held = |keys: &[KeyCode]| any_held(key_frame, keys, frame, window);
    TickInput {
        up: held(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
        down: held(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
        left: held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
        right: held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
        fire: held(&[KeyCode::Char(' ')]),
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let lines: &[(&str, Color)] = &[
        ("★  SPACE  SHOOTER  ★", Color::Cyan),
        ("", Color::White),
        ("ENTER : Start", Color::White),
        ("Q     : Quit", Color::White),
        ("", Color::White),
        ("«▼» gunship   fires lasers", Color::Green),
        ("(◎) chaser    homes in when close", Color::Red),
        ("[═] carrier   just drifts", Color::Yellow),
        ("", Color::White),
        ("WASD / arrows : Move   SPACE : Shoot", Color::DarkGrey),
    ];

    for (i, (text, color)) in lines.iter().enumerate() {
        let row = cy.saturating_sub(5) + i as u16;
        out.queue(cursor::MoveTo(
            cx.saturating_sub(text.chars().count() as u16 / 2),
            row,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) => match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(_) => {}
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input model: instead of acting on each key event individually, we keep a
/// `key_frame` map with the frame of the last press/repeat event for every
/// key.  Each frame the keys still "fresh" (within the hold window) become
/// that tick's [`TickInput`], so Space and the direction keys can be held
/// together.  On keyboard-enhancement terminals keys are dropped on
/// release; elsewhere they expire when the OS repeats stop.
fn game_loop<W: Write>(
    out: &mut W,
    world: &mut World,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let frame_time = Duration::from_secs_f32(world.config.dt());
    let window = (HOLD_WINDOW_MS * world.config.tick_rate_hz as u64 / 1000).max(1);

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut hud = Hud::default();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(true);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(true);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if world.is_game_over() => {
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let input = sample_input(&key_frame, frame, window);
        world.tick(&input);

        for event in world.drain_events() {
            match event {
                GameEvent::Exploded { kind, .. } if kind != ActorKind::Player => hud.kills += 1,
                GameEvent::Fired { .. } => hud.shots += 1,
                GameEvent::GameOver => info!("game over: {} kills, {} shots", hud.kills, hud.shots),
                _ => {}
            }
        }

        let (cols, rows) = terminal::size()?;
        let screen = Screen::new(cols, rows, world.config.width, world.config.height);
        display::render(out, world, &hud, &screen)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(rate) = cli.tick_rate {
        config.tick_rate_hz = rate;
    }
    config.validate().context("checking config")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal does not report key releases, using hold window");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal session failed")
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
) -> anyhow::Result<()> {
    loop {
        match show_menu(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let mut world = World::new(config.clone()).context("building world")?;
                if game_loop(out, &mut world, rx)? {
                    break;
                }
                // Otherwise loop back to the menu
            }
        }
    }
    Ok(())
}
