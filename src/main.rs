use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing_subscriber::EnvFilter;

use space_invaders::{Clock, Game, GameConfig, TerminalSurface};

const LOG_FILE: &str = "space_invaders.log";

/// Route tracing output to a log file when debug is on.  Stdout belongs to
/// the game screen, so without the flag events are simply dropped.
fn init_tracing(config: &GameConfig) -> anyhow::Result<()> {
    if !config.debug {
        return Ok(());
    }
    let file = File::create(LOG_FILE).context("creating log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = GameConfig::from_environment();
    init_tracing(&config)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release events so held keys leave the pressed set.
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

    let result = run(&mut out, &rx, config);

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
    config: GameConfig,
) -> anyhow::Result<()> {
    let (width, height) = terminal::size().context("querying terminal size")?;

    let mut game = Game::new(config);
    game.initialise(width, height);
    game.start();

    let clock = Clock::new(game.session.config.fps);
    let quit = clock.handle();
    let mut surface = TerminalSurface::new(&mut *out, height);

    clock.run(|| -> anyhow::Result<()> {
        // Drain all pending input events (non-blocking)
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev {
                match kind {
                    KeyEventKind::Press => match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => quit.cancel(),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            quit.cancel()
                        }
                        _ => game.key_down(code),
                    },
                    KeyEventKind::Release => game.key_up(code),
                    // Repeats carry no new press/release information.
                    KeyEventKind::Repeat => {}
                }
            }
        }

        game.tick(&mut surface)?;
        Ok(())
    })
}
