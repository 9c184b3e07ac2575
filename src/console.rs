//! The single console input source shared, in strict sequence, by every
//! scenario: prompted line reads, whitespace-delimited token reads, and the
//! retry-until-valid integer read.

use std::io::{self, BufRead, Write};
use std::mem;

use crate::error::Report;

/// Ownership-exclusive handle over the console streams.
///
/// Generic over the reader and writer so tests can script a run with
/// `io::Cursor` input and a `Vec<u8>` output and compare bytes.
///
/// A partially consumed input line is kept in `pending`, so token reads and
/// line reads interleave without losing input or re-reading it.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    pending: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: String::new(),
        }
    }

    /// Display a prompt without a trailing newline.
    /// Flushing before the read is what makes the prompt visible.
    pub fn prompt(&mut self, message: &str) -> io::Result<()> {
        write!(self.writer, "{message}")?;
        self.writer.flush()
    }

    /// Read one line, trimmed. Returns the unread remainder of the current
    /// line first, if any. An empty line yields an empty string; end of
    /// input is an `UnexpectedEof` error.
    pub fn read_line(&mut self) -> io::Result<String> {
        if self.pending.trim().is_empty() {
            self.pending.clear();
            self.fill_pending()?;
        }
        let line = mem::take(&mut self.pending);
        Ok(line.trim().to_string())
    }

    /// Read the next whitespace-delimited token, skipping blank lines.
    pub fn read_token(&mut self) -> io::Result<String> {
        loop {
            let rest = self.pending.trim_start();
            if !rest.is_empty() {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                let token = rest[..end].to_string();
                self.pending = rest[end..].to_string();
                return Ok(token);
            }
            self.pending.clear();
            self.fill_pending()?;
        }
    }

    pub fn prompt_line(&mut self, message: &str) -> io::Result<String> {
        self.prompt(message)?;
        self.read_line()
    }

    pub fn prompt_token(&mut self, message: &str) -> io::Result<String> {
        self.prompt(message)?;
        self.read_token()
    }

    /// Prompt and re-read until a well-formed integer token arrives.
    ///
    /// Each malformed token is discarded exactly once, with a retry line
    /// telling the user what went wrong. The only failure exit is a console
    /// I/O error.
    pub fn read_validated_integer(&mut self, message: &str) -> io::Result<i32> {
        loop {
            let token = self.prompt_token(message)?;
            match token.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    writeln!(self.writer, "Input must be an integer. Please try again.")?;
                }
            }
        }
    }

    /// Write a scenario's report line.
    pub fn report(&mut self, report: &Report) -> io::Result<()> {
        writeln!(self.writer, "{report}")?;
        self.writer.flush()
    }

    /// Give the writer back, for tests that inspect a scripted run's output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn fill_pending(&mut self) -> io::Result<()> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input is exhausted",
            ));
        }
        self.pending = line;
        Ok(())
    }
}
