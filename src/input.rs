//! Terminal input decoding.
//!
//! Maps crossterm events onto `GameEvent`s and runs the blocking reader
//! thread that feeds them into the game's event channel.

use crate::runner::GameEvent;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

/// Decode one key press. Unbound keys give `None`.
pub fn map_key(key: KeyEvent) -> Option<GameEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameEvent::Jump),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameEvent::Quit),
        _ => None,
    }
}

/// Decode any terminal event.
pub fn map_event(event: Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(cols, rows) => Some(GameEvent::Resize { cols, rows }),
        _ => None,
    }
}

/// Read terminal events forever, forwarding the mapped ones. Stops after
/// forwarding a quit, or when the receiver is gone.
pub fn spawn_reader(events: Sender<GameEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || loop {
            let raw = match event::read() {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("terminal read failed: {}", e);
                    let _ = events.send(GameEvent::Quit);
                    return;
                }
            };
            let Some(mapped) = map_event(raw) else {
                continue;
            };
            if events.send(mapped).is_err() || mapped == GameEvent::Quit {
                return;
            }
        })
}
