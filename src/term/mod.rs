//! Terminal access
//!
//! The game loops only talk to a [`Console`], so they run the same against
//! a real terminal ([`CrosstermConsole`]) or a recorded script
//! ([`ScriptedConsole`]).

pub mod crossterm_console;
pub mod scripted;

pub use crossterm_console::CrosstermConsole;
pub use scripted::ScriptedConsole;

use std::io;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

/// A key as seen by the game loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

/// A single key press with the modifiers held at the time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
        }
    }

    pub fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }

    /// The pressed character, lowercased
    pub fn lower_char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }
}

/// The few terminal capabilities the game loops need
pub trait Console {
    /// Unbuffered, no-echo input
    fn enter_raw_mode(&mut self) -> io::Result<()>;

    fn leave_raw_mode(&mut self) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;

    fn move_cursor(&mut self, col: u16, row: u16) -> io::Result<()>;

    /// Write text at the cursor
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Wait up to `timeout` for a key press
    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<KeyPress>>;

    fn set_cursor_visible(&mut self, _visible: bool) -> io::Result<()> {
        Ok(())
    }

    /// Draw lines starting at the top-left corner, one per row
    fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        for (row, line) in lines.iter().enumerate() {
            self.move_cursor(0, row as u16)?;
            self.write_text(line)?;
        }
        self.flush()
    }
}

/// Keeps a console in raw mode until dropped
pub struct RawModeGuard<'a, C: Console + ?Sized> {
    console: &'a mut C,
}

impl<'a, C: Console + ?Sized> RawModeGuard<'a, C> {
    pub fn new(console: &'a mut C) -> io::Result<Self> {
        console.enter_raw_mode()?;
        Ok(Self { console })
    }
}

impl<C: Console + ?Sized> Deref for RawModeGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.console
    }
}

impl<C: Console + ?Sized> DerefMut for RawModeGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.console
    }
}

impl<C: Console + ?Sized> Drop for RawModeGuard<'_, C> {
    fn drop(&mut self) {
        let _ = self.console.set_cursor_visible(true);
        if let Err(e) = self.console.leave_raw_mode() {
            log::error!("Failed to restore terminal mode: {}", e);
        }
    }
}
