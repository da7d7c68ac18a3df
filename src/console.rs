use anyhow::Result;
use crossterm::{
    style::{Print, PrintStyledContent, Stylize},
    QueueableCommand,
};
use std::{
    fmt::Display,
    io::{self, Stdout, Write},
};

/// A `crossterm`-based printer for the demo's labelled output.
pub struct Console {
    out: Stdout,
}

impl Console {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    pub fn heading(&mut self, title: &str) -> Result<()> {
        self.out
            .queue(Print("\n"))?
            .queue(PrintStyledContent(format!("== {title} ==").bold().cyan()))?
            .queue(Print("\n"))?;
        self.flush()
    }

    /// `label` right-aligned in a dim column, then `value`.
    pub fn line(&mut self, label: &str, value: impl Display) -> Result<()> {
        self.out
            .queue(PrintStyledContent(format!("{label:>10}").dark_grey()))?
            .queue(Print(format!("  {value}\n")))?;
        self.flush()
    }

    pub fn warning(&mut self, message: impl Display) -> Result<()> {
        self.styled_line(format!("  ! {message}").yellow())
    }

    pub fn error(&mut self, message: impl Display) -> Result<()> {
        self.styled_line(format!("  x {message}").red())
    }

    /// Pre-formatted multi-line text, e.g. a `{:#?}` stack dump.
    pub fn block(&mut self, text: &str) -> Result<()> {
        for row in text.lines().filter(|row| !row.is_empty()) {
            self.out.queue(Print(format!("    {row}\n")))?;
        }
        self.flush()
    }

    fn styled_line<D: Display>(&mut self, content: crossterm::style::StyledContent<D>) -> Result<()> {
        self.out
            .queue(PrintStyledContent(content))?
            .queue(Print("\n"))?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Show a popped or peeked value, or that there was none.
pub fn show(value: Option<f32>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "<empty>".to_owned(),
    }
}
