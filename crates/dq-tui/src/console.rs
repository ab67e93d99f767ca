//! Console collaborators
//!
//! The game reads whole lines and writes whole lines. [`Console`] is the seam
//! between the session driver and whatever terminal (or script) sits behind it.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Line-oriented terminal used by the game
pub trait Console {
    /// Read one line without its line ending; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write `prompt` without a line ending and flush it
    fn write_prompt(&mut self, prompt: &str) -> io::Result<()>;

    /// Wipe the screen before the next room is shown
    fn clear(&mut self) -> io::Result<()>;

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}

/// Console over a reader and a writer, clearing with crossterm
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Console that never clears the screen
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            clear_screen: false,
        }
    }
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout
    ///
    /// Clearing only happens when requested and stdout is a terminal.
    pub fn stdio(clear_screen: bool) -> Self {
        let clear_screen = clear_screen && atty::is(atty::Stream::Stdout);
        tracing::debug!(clear_screen, "stdio console ready");
        Self {
            reader: io::stdin().lock(),
            writer: io::stdout(),
            clear_screen,
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Console fed from a fixed script, recording everything written
///
/// Used for headless runs and tests. Prompts are recorded as their own
/// output entries.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            clears: 0,
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Everything written, one entry per line
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Number of times the screen was cleared
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Lines of the script not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.output.push(prompt.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_console_reads_lines() {
        let input = io::Cursor::new("e\r\nGardener\n\nlast");
        let mut console = TerminalConsole::new(input, Vec::new());

        assert_eq!(console.read_line().unwrap().as_deref(), Some("e"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Gardener"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_terminal_console_writes() {
        let mut console = TerminalConsole::new(io::Cursor::new(""), Vec::new());
        console.write_line("You are in: Attic").unwrap();
        console.write_prompt("> ").unwrap();
        // Clearing is off for plain writers
        console.clear().unwrap();

        let written = String::from_utf8(console.writer).unwrap();
        assert_eq!(written, "You are in: Attic\n> ");
    }

    #[test]
    fn test_scripted_console() {
        let mut console = ScriptedConsole::new(["d", "s"]);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("d"));
        console.write_lines(&["one".to_string(), "two".to_string()]).unwrap();
        console.clear().unwrap();

        assert_eq!(console.remaining(), 1);
        assert_eq!(console.transcript(), "one\ntwo");
        assert_eq!(console.clears(), 1);
    }
}
