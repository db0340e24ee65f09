//! Display and input seams between the game loop and the outside world.
//!
//! The session only ever calls [`Console::show`] and [`InputSource::next_line`],
//! so it can be driven by a terminal or by a script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Receives text to render. Fire-and-forget.
pub trait Console {
    fn show(&mut self, text: &str);
}

/// Supplies one line of player input. `None` means input is exhausted.
pub trait InputSource {
    fn next_line(&mut self) -> Option<String>;
}

/// Terminal implementation over stdin/stdout.
pub struct StdioConsole<R: BufRead> {
    reader: R,
}

impl StdioConsole<io::StdinLock<'static>> {
    pub fn new() -> Self {
        StdioConsole {
            reader: io::stdin().lock(),
        }
    }
}

impl Default for StdioConsole<io::StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> Console for StdioConsole<R> {
    fn show(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

impl<R: BufRead> InputSource for StdioConsole<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("console: failed reading input: {}", e);
                None
            }
        }
    }
}

/// Canned input lines plus a transcript of everything shown.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every fragment shown so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// The transcript concatenated into one string.
    pub fn output(&self) -> String {
        self.transcript.concat()
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}

impl InputSource for ScriptedConsole {
    fn next_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdio_reader_strips_line_endings() {
        let mut console = StdioConsole {
            reader: io::Cursor::new("m\r\nx\n"),
        };
        assert_eq!(console.next_line().as_deref(), Some("m"));
        assert_eq!(console.next_line().as_deref(), Some("x"));
        assert_eq!(console.next_line(), None);
    }

    #[test]
    fn scripted_console_records_and_replays() {
        let mut console = ScriptedConsole::new(["b", "rope"]);
        console.show("hello ");
        console.show("world");
        assert_eq!(console.next_line().as_deref(), Some("b"));
        assert_eq!(console.remaining_input(), 1);
        assert_eq!(console.output(), "hello world");
        assert_eq!(console.transcript().len(), 2);
    }
}
