/// Terminal output context that handles colours and prompt flushing
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Write};

pub struct TerminalContext<W: Write> {
    out: W,
    colored: bool,
}

impl<W: Write> TerminalContext<W> {
    /// `colored` should only be set when `out` is an interactive terminal,
    /// otherwise escape sequences end up in pipes and files.
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    /// Print a full line
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print a coloured line, falling back to plain text when colour is off
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if !self.colored {
            return self.print_line(text);
        }
        self.out.queue(SetForegroundColor(color.into()))?;
        write!(self.out, "{}", text)?;
        self.out.queue(ResetColor)?;
        writeln!(self.out)
    }

    /// Print a prompt without newline and flush so it shows before we block on stdin
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Print empty line
    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Hand back the underlying writer, used by tests to inspect output
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}
