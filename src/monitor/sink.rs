//! Terminal paint sink: owns the alternate screen and repaints one composed
//! frame per refresh. This is the only place style tokens become ANSI.

use crate::monitor::error::Result;
use crate::monitor::styled::{Severity, StyleToken, StyledText};
use colored::Colorize;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use tracing::debug;

/// Sink accepting one composed frame per refresh
pub trait RenderSink {
    fn paint(&mut self, frame: &StyledText) -> Result<()>;
}

/// Realize one styled run as an ANSI string
fn render_run(text: &str, token: StyleToken) -> String {
    match token {
        StyleToken::Plain => text.to_string(),
        StyleToken::Dim => text.dimmed().to_string(),
        StyleToken::Title => text.blue().bold().to_string(),
        StyleToken::Emphasis => text.bold().to_string(),
        StyleToken::Notice => text.yellow().to_string(),
        StyleToken::Disconnected => text.red().to_string(),
        StyleToken::Band(Severity::Excellent) => text.green().to_string(),
        StyleToken::Band(Severity::Good) => text.yellow().to_string(),
        StyleToken::Band(Severity::Fair) => text.white().to_string(),
        StyleToken::Band(Severity::Slow) => text.red().to_string(),
        StyleToken::Band(Severity::VerySlow) => text.magenta().to_string(),
    }
}

/// Live dashboard on the alternate screen.
///
/// Enters the alternate screen and hides the cursor on creation; `restore`
/// (also run on drop) puts the terminal back, so an error path never leaves
/// a broken terminal behind.
pub struct TerminalSink {
    out: io::Stdout,
    active: bool,
}

impl TerminalSink {
    pub fn new() -> Result<Self> {
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide)?;
        debug!("Entered alternate screen");
        Ok(Self { out, active: true })
    }

    /// Leave the alternate screen and show the cursor again
    pub fn restore(&mut self) -> Result<()> {
        if self.active {
            execute!(self.out, Show, LeaveAlternateScreen)?;
            self.active = false;
            debug!("Restored terminal");
        }
        Ok(())
    }
}

impl RenderSink for TerminalSink {
    fn paint(&mut self, frame: &StyledText) -> Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::FromCursorDown))?;
        for run in frame.runs() {
            self.out
                .write_all(render_run(&run.text, run.token).as_bytes())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Sink that discards frames. Used for quiet mode and loop tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn paint(&mut self, _frame: &StyledText) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_run_keeps_text() {
        // Whatever escapes wrap it, the run's text must survive verbatim
        for token in [
            StyleToken::Plain,
            StyleToken::Dim,
            StyleToken::Title,
            StyleToken::Emphasis,
            StyleToken::Notice,
            StyleToken::Disconnected,
            StyleToken::Band(Severity::Excellent),
            StyleToken::Band(Severity::VerySlow),
        ] {
            assert!(render_run("42ms", token).contains("42ms"));
        }
    }

    #[test]
    fn test_null_sink_accepts_frames() {
        let mut sink = NullSink;
        let mut frame = StyledText::new();
        frame.push("hello", StyleToken::Plain);
        assert!(sink.paint(&frame).is_ok());
    }
}
