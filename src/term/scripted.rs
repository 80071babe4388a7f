//! Headless console that replays keys and records the screen

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use super::{Console, KeyPress};

/// Replays a fixed key script and keeps a character screen in memory
///
/// Each `read_key` call consumes one script entry; `None` entries stand for
/// a poll that timed out. Reading past the end of the script is an
/// `UnexpectedEof` error so a loop that never quits fails instead of
/// spinning.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    script: VecDeque<Option<KeyPress>>,
    raw: bool,
    cursor: (u16, u16),
    screen: Vec<Vec<char>>,
    clears: usize,
    /// Every string written, in order
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(keys: Vec<KeyPress>) -> Self {
        Self::with_idle_frames(keys.into_iter().map(Some).collect())
    }

    /// Script that may contain polls with no key
    pub fn with_idle_frames(script: Vec<Option<KeyPress>>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    /// Script made of plain character keys
    pub fn from_chars(keys: &str) -> Self {
        Self::new(keys.chars().map(KeyPress::char).collect())
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn remaining_keys(&self) -> usize {
        self.script.len()
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Current screen contents, one string per row
    pub fn screen(&self) -> Vec<String> {
        self.screen.iter().map(|row| row.iter().collect()).collect()
    }
}

impl Console for ScriptedConsole {
    fn enter_raw_mode(&mut self) -> io::Result<()> {
        self.raw = true;
        Ok(())
    }

    fn leave_raw_mode(&mut self) -> io::Result<()> {
        self.raw = false;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.screen.clear();
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn move_cursor(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.cursor = (col, row);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let (col, row) = (self.cursor.0 as usize, self.cursor.1 as usize);
        if self.screen.len() <= row {
            self.screen.resize(row + 1, Vec::new());
        }
        let line = &mut self.screen[row];
        for (i, c) in text.chars().enumerate() {
            let at = col + i;
            if line.len() <= at {
                line.resize(at + 1, ' ');
            }
            line[at] = c;
        }
        self.cursor.0 += text.chars().count() as u16;
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn read_key(&mut self, _timeout: Duration) -> io::Result<Option<KeyPress>> {
        self.script.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_consumed_in_order() {
        let mut console = ScriptedConsole::from_chars("wq");
        let timeout = Duration::from_millis(0);
        assert_eq!(console.read_key(timeout).unwrap(), Some(KeyPress::char('w')));
        assert_eq!(console.read_key(timeout).unwrap(), Some(KeyPress::char('q')));
        assert_eq!(
            console.read_key(timeout).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_overwrite_at_cursor() {
        let mut console = ScriptedConsole::default();
        console.write_text("hello").unwrap();
        console.move_cursor(1, 0).unwrap();
        console.write_text("EY").unwrap();
        assert_eq!(console.screen(), vec!["hEYlo".to_string()]);

        console.clear().unwrap();
        assert!(console.screen().is_empty());
        assert_eq!(console.clears(), 1);
    }
}
