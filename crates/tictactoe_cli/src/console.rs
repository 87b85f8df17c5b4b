//! Line-oriented terminal I/O.

use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Reads lines from an input and writes prompts and messages to an output.
///
/// Generic over both ends so games can run against stdin/stdout or against
/// in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line.
    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    /// Writes a prompt without a newline and flushes it.
    pub fn prompt(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        write!(self.output, "{}", message.as_ref())?;
        self.output.flush()
    }

    /// Reads one line without its terminator. `None` at end of input.
    #[instrument(skip(self))]
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompts and reads a trimmed answer, using `default` for blank input
    /// or end of input.
    pub fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        self.prompt(question)?;
        Ok(match self.read_line()? {
            Some(line) if !line.trim().is_empty() => line.trim().to_string(),
            _ => default.to_string(),
        })
    }

    /// Consumes the console, returning the output.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_and_defaults() {
        let mut console = Console::new(Cursor::new("  Alice  \n\n"), Vec::new());
        assert_eq!(console.ask("Name: ", "Player X").unwrap(), "Alice");
        assert_eq!(console.ask("Name: ", "Player O").unwrap(), "Player O");
        assert_eq!(console.ask("Name: ", "Computer O").unwrap(), "Computer O");

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Name: Name: Name: ");
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut console = Console::new(Cursor::new("1,2\r\n"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("1,2"));
        assert_eq!(console.read_line().unwrap(), None);
    }
}
