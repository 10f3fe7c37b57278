use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

/// Debounced push-button collaborator. Each directional query consumes the
/// press count accumulated since the last check: true means "pressed since
/// last checked".
pub trait Buttons {
    /// Drain pending device events into the press counters.
    fn poll(&mut self);

    fn up(&mut self) -> bool;
    fn down(&mut self) -> bool;
    fn left(&mut self) -> bool;
    fn right(&mut self) -> bool;
    fn select(&mut self) -> bool;
    fn quit(&mut self) -> bool;

    /// Discard presses accumulated so far, e.g. when entering a screen
    /// that should not react to stale input.
    fn clear(&mut self) {
        self.up();
        self.down();
        self.left();
        self.right();
        self.select();
    }
}

/// Maps the pressed buttons to the next travel direction. A press that would
/// reverse the current direction is ignored; with nothing (valid) pressed the
/// direction stays as it is.
pub fn sample_direction<B: Buttons>(current: Direction, buttons: &mut B) -> Direction {
    use Direction::*;

    if buttons.up() && current != Down {
        Up
    } else if buttons.down() && current != Up {
        Down
    } else if buttons.left() && current != Right {
        Left
    } else if buttons.right() && current != Left {
        Right
    } else {
        current
    }
}

/// Keyboard-backed buttons: arrow keys / WASD steer, Enter or Space is
/// select, q / Esc / CTRL+C quits.
pub struct TermButtons {
    up: u32,
    down: u32,
    left: u32,
    right: u32,
    select: u32,
    quit: bool,
}

impl TermButtons {
    pub fn new() -> Self {
        TermButtons { up: 0, down: 0, left: 0, right: 0, select: 0, quit: false }
    }

    fn record(&mut self, ev: KeyEvent) {
        if let KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL } = ev {
            self.quit = true;
            return;
        }
        match ev.code {
            KeyCode::Up | KeyCode::Char('w') => self.up += 1,
            KeyCode::Down | KeyCode::Char('s') => self.down += 1,
            KeyCode::Left | KeyCode::Char('a') => self.left += 1,
            KeyCode::Right | KeyCode::Char('d') => self.right += 1,
            KeyCode::Enter | KeyCode::Char(' ') => self.select += 1,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }
}

impl Buttons for TermButtons {
    fn poll(&mut self) {
        while event::poll(Duration::from_millis(0)).unwrap_or(false) {
            if let Ok(Event::Key(ev)) = event::read() {
                self.record(ev);
            }
        }
    }

    fn up(&mut self) -> bool {
        take(&mut self.up)
    }

    fn down(&mut self) -> bool {
        take(&mut self.down)
    }

    fn left(&mut self) -> bool {
        take(&mut self.left)
    }

    fn right(&mut self) -> bool {
        take(&mut self.right)
    }

    fn select(&mut self) -> bool {
        take(&mut self.select)
    }

    fn quit(&mut self) -> bool {
        self.quit
    }
}

fn take(count: &mut u32) -> bool {
    let pressed = *count > 0;
    *count = 0;
    pressed
}
