//! Event handling system

use crate::error::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Key press event
    Key(KeyEvent),

    /// Window resize event
    Resize(u16, u16),

    /// No input within one tick
    Tick,

    /// Quit event
    Quit,
}

/// Blocking input poller for the draw loop
pub struct EventLoop {
    /// Tick rate in milliseconds
    tick_rate: u64,
}

impl EventLoop {
    /// Create new event loop
    pub fn new(tick_rate: u64) -> Self {
        Self { tick_rate }
    }

    pub fn tick_rate(&self) -> u64 {
        self.tick_rate
    }

    /// Wait up to one tick for the next event
    pub fn poll_event(&self) -> Result<TuiEvent> {
        if event::poll(Duration::from_millis(self.tick_rate))? {
            return Ok(Self::translate(event::read()?));
        }
        Ok(TuiEvent::Tick)
    }

    /// Map a raw crossterm event onto a dashboard event
    pub fn translate(event: Event) -> TuiEvent {
        match event {
            // Release/repeat events are reported on some platforms; act on presses only
            Event::Key(key) if key.kind != KeyEventKind::Press => TuiEvent::Tick,
            Event::Key(key) if Self::is_quit_key(&key) => TuiEvent::Quit,
            Event::Key(key) => TuiEvent::Key(key),
            Event::Resize(w, h) => TuiEvent::Resize(w, h),
            _ => TuiEvent::Tick,
        }
    }

    /// Ctrl+C quits from anywhere, even while a text field is focused
    fn is_quit_key(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new(250)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    #[test]
    fn test_ctrl_c_is_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(EventLoop::translate(Event::Key(key)), TuiEvent::Quit);
    }

    #[test]
    fn test_plain_keys_pass_through() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(EventLoop::translate(Event::Key(key)), TuiEvent::Key(key));
    }

    #[test]
    fn test_release_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(EventLoop::translate(Event::Key(key)), TuiEvent::Tick);
    }

    #[test]
    fn test_resize_and_other_events() {
        assert_eq!(
            EventLoop::translate(Event::Resize(80, 24)),
            TuiEvent::Resize(80, 24)
        );
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(EventLoop::translate(Event::Mouse(mouse)), TuiEvent::Tick);
    }

    #[test]
    fn test_default_tick_rate() {
        assert_eq!(EventLoop::default().tick_rate(), 250);
    }
}
