use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use jobscout_core::{update, AppState, Msg};
use jobscout_logging::app_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::session::SessionStore;
use super::ui;

/// Events driving the shell loop: core messages from any producer
/// (stdin commands, api completions) plus shell-only control.
pub(crate) enum ShellEvent {
    Core(Msg),
    Quit,
}

pub fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    logging::initialize(LogDestination::Both);

    let session_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let store = SessionStore::new(session_dir);
    let (profile, theme) = store.load();

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let runner = EffectRunner::new(event_tx.clone(), store.clone())?;

    spawn_stdin_reader(event_tx.clone());

    let mut state = AppState::new();
    if let Some(profile) = &profile {
        println!("[ok] Welcome, {}!", profile.name);
    }
    state = dispatch(state, Msg::SessionRestored { profile, theme }, &runner);

    println!("jobscout shell, type `help` for commands");
    app_info!("Shell started");

    while let Ok(event) = event_rx.recv() {
        match event {
            ShellEvent::Quit => break,
            ShellEvent::Core(msg) => {
                state = dispatch(state, msg, &runner);
            }
        }
    }

    app_info!("Shell stopped");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        ui::render(&state.view());
    }
    state
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            match ui::parse(&line) {
                ui::Command::Msgs(msgs) => {
                    for msg in msgs {
                        if event_tx.send(ShellEvent::Core(msg)).is_err() {
                            return;
                        }
                    }
                }
                ui::Command::Quit => {
                    let _ = event_tx.send(ShellEvent::Quit);
                    return;
                }
                ui::Command::Help => println!("{}", ui::HELP),
                ui::Command::Unknown(input) => {
                    println!("unknown command: {input} (try `help`)");
                }
            }
        }
        // stdin closed; shut the loop down as well.
        let _ = event_tx.send(ShellEvent::Quit);
    });
}
