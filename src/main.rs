mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor, event, terminal, ExecutableCommand};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use terminal_invaders::compute::{init_state, tick};
use terminal_invaders::config::Config;
use terminal_invaders::entities::Action;
use terminal_invaders::input;
use terminal_invaders::signals;

// ── Input ─────────────────────────────────────────────────────────────────────

/// Non-blocking view of the input thread's channel.
struct InputPump {
    rx: mpsc::Receiver<event::Event>,
    closed: bool,
}

impl InputPump {
    /// Next decodable action, skipping events that decode to nothing.
    /// At most one action is taken per call; the rest wait for later ticks.
    fn next_action(&mut self) -> Option<Action> {
        if self.closed {
            return None;
        }
        loop {
            match self.rx.try_recv() {
                Ok(ev) => {
                    if let Some(action) = input::decode(&ev) {
                        return Some(action);
                    }
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    debug!("input channel closed");
                    self.closed = true;
                    return None;
                }
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit action or a termination signal arrives.
fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
    input: &mut InputPump,
    shutdown: &mpsc::Receiver<i32>,
) -> Result<()> {
    let (width, height) = terminal::size().context("could not get terminal size")?;
    info!("terminal is {width}x{height}");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = init_state(width, height);
    let frame_len = config.frame();

    loop {
        let frame_start = Instant::now();

        if let Ok(sig) = shutdown.try_recv() {
            info!("signal {sig} at wave {}, shutting down", state.wave);
            return Ok(());
        }

        let action = input.next_action();
        if action == Some(Action::Quit) {
            info!("quit at wave {}", state.wave);
            return Ok(());
        }

        let (next, frame) = tick(&state, action, &mut rng);
        state = next;
        display::render(out, &frame, width, height)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
}

fn run<W: Write>(out: &mut W, config: &Config) -> Result<()> {
    let shutdown =
        signals::watch_termination().context("could not register signal handlers")?;

    out.execute(terminal::EnterAlternateScreen)
        .context("could not enter the alternate screen")?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads so the tick loop
    // never waits on the keyboard.
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut input = InputPump { rx, closed: false };
    game_loop(out, config, &mut input, &shutdown)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
    let config = Config::parse();

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("could not enable raw mode")?;
    let result = run(&mut out, &config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let restored = terminal::disable_raw_mode().context("could not restore terminal state");

    result?;
    restored?;
    println!("Thank you for playing!");
    Ok(())
}
