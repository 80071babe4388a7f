//! Console backed by the real terminal

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use super::{Console, Key, KeyPress};

/// Stdout plus crossterm raw mode and event polling
pub struct CrosstermConsole {
    out: Stdout,
}

impl CrosstermConsole {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for CrosstermConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn translate(key: KeyEvent) -> KeyPress {
    let code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    };
    KeyPress {
        key: code,
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
    }
}

impl Console for CrosstermConsole {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn leave_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn move_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn read_key(&mut self, timeout: Duration) -> io::Result<Option<KeyPress>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            // Only handle key press events, not releases
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(translate(key))),
            _ => Ok(None),
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(self.out, Show)
        } else {
            execute!(self.out, Hide)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_keys() {
        let press = translate(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert_eq!(press.key, Key::Char('a'));
        assert!(press.ctrl);
        assert!(!press.shift);

        let esc = translate(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(esc.key, Key::Escape);

        let arrow = translate(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT));
        assert_eq!(arrow.key, Key::Other);
        assert!(arrow.shift);
    }
}
