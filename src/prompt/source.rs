//! Line sources for the prompt loop.
//!
//! Production reads stdin on a pump thread so the main thread can wait with
//! a timeout and notice interrupts while the user is still typing. Tests
//! drive the same loop from an in-memory buffer.

use super::interrupt::Interrupt;
use crate::error::{CfnewError, Result};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use tracing::trace;

/// How often a blocked read re-checks the interrupt flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Outcome of one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line of input, without the trailing newline.
    Text(String),
    /// No more input is available.
    EndOfInput,
    /// An interrupt arrived while waiting for input.
    Interrupted,
}

/// Something that yields user input one line at a time.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Line>;
}

/// Reads lines from any `BufRead`. Used for scripted input.
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> Result<Line> {
        let mut buf = String::new();
        let read = self
            .reader
            .read_line(&mut buf)
            .map_err(|e| CfnewError::InputError(format!("failed to read input: {}", e)))?;

        if read == 0 {
            Ok(Line::EndOfInput)
        } else {
            Ok(Line::Text(strip_newline(buf)))
        }
    }
}

enum Pumped {
    Text(String),
    EndOfInput,
    Failed(String),
}

/// Stdin lines raced against an [`Interrupt`].
///
/// The pump thread reads exactly one line per request, so nothing touches
/// stdin between prompts or once prompting is over (an editor launched
/// afterwards owns the terminal).
pub struct StdinLines {
    requests: Sender<()>,
    lines: Receiver<Pumped>,
    pending: bool,
    interrupt: Interrupt,
}

impl StdinLines {
    /// Start the stdin pump thread.
    pub fn spawn(interrupt: Interrupt) -> Self {
        let (req_tx, req_rx) = mpsc::channel::<()>();
        let (line_tx, line_rx) = mpsc::channel();

        thread::spawn(move || {
            let stdin = io::stdin();
            while req_rx.recv().is_ok() {
                let mut buf = String::new();
                let message = match stdin.lock().read_line(&mut buf) {
                    Ok(0) => Pumped::EndOfInput,
                    Ok(_) => Pumped::Text(strip_newline(buf)),
                    Err(e) => Pumped::Failed(e.to_string()),
                };
                if line_tx.send(message).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: req_tx,
            lines: line_rx,
            pending: false,
            interrupt,
        }
    }
}

impl LineSource for StdinLines {
    fn next_line(&mut self) -> Result<Line> {
        if !self.pending {
            if self.requests.send(()).is_err() {
                return Ok(Line::EndOfInput);
            }
            self.pending = true;
        }

        loop {
            if self.interrupt.is_raised() {
                return Ok(Line::Interrupted);
            }

            let message = match self.lines.recv_timeout(POLL_INTERVAL) {
                Ok(message) => message,
                Err(RecvTimeoutError::Timeout) => {
                    trace!("still waiting for input");
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => return Ok(Line::EndOfInput),
            };
            self.pending = false;

            return match message {
                Pumped::Text(text) => Ok(Line::Text(text)),
                Pumped::EndOfInput => Ok(Line::EndOfInput),
                Pumped::Failed(e) => Err(CfnewError::InputError(format!(
                    "failed to read standard input: {}",
                    e
                ))),
            };
        }
    }
}

fn strip_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_lines_yields_text_then_end() {
        let mut source = ReaderLines::new(Cursor::new("2023\r\nA\nlast"));

        assert_eq!(source.next_line().unwrap(), Line::Text("2023".to_string()));
        assert_eq!(source.next_line().unwrap(), Line::Text("A".to_string()));
        assert_eq!(source.next_line().unwrap(), Line::Text("last".to_string()));
        assert_eq!(source.next_line().unwrap(), Line::EndOfInput);
    }

    #[test]
    fn test_reader_lines_empty_input() {
        let mut source = ReaderLines::new(Cursor::new(""));
        assert_eq!(source.next_line().unwrap(), Line::EndOfInput);
    }

    #[test]
    fn test_reader_lines_keeps_blank_lines() {
        let mut source = ReaderLines::new(Cursor::new("\n"));
        assert_eq!(source.next_line().unwrap(), Line::Text(String::new()));
    }

    #[test]
    fn test_strip_newline() {
        assert_eq!(strip_newline("a\n".to_string()), "a");
        assert_eq!(strip_newline("a\r\n".to_string()), "a");
        assert_eq!(strip_newline("a".to_string()), "a");
    }
}
