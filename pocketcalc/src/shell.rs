//! Terminal front end
//!
//! Same session, different renderer: every accepted key press prints the
//! display on its own line.

use std::io::{self, BufRead, Write};

use crate::keypad;
use crate::session::{Renderer, Session};

/// Writes each display update as a line. The first write error is kept and
/// later updates are skipped.
pub struct LineRenderer<W: Write> {
    out: W,
    enabled: bool,
    error: Option<io::Error>,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            enabled: true,
            error: None,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn check(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> Renderer for LineRenderer<W> {
    fn render(&mut self, display: &str) {
        if !self.enabled || self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", display).and_then(|_| self.out.flush()) {
            self.error = Some(err);
        }
    }
}

/// Press each label in order. With `quiet` only the final display is
/// printed.
pub fn run_press<W: Write>(labels: &[String], quiet: bool, out: W) -> io::Result<()> {
    let mut session = Session::new(LineRenderer::new(out));
    session.renderer_mut().set_enabled(!quiet);
    for label in labels {
        let word = keypad::label_for_word(label).unwrap_or(label.as_str());
        if !session.press(word) {
            tracing::warn!(label = %label, "not a calculator key");
        }
        session.renderer_mut().check()?;
    }
    if quiet {
        session.renderer_mut().set_enabled(true);
        session.refresh();
        session.renderer_mut().check()?;
    }
    Ok(())
}

/// Interactive loop. A line is either a single key name ("clear", "×")
/// or a run of typed characters ("12+3=").
pub fn run_repl<R: BufRead, W: Write>(input: R, out: W) -> io::Result<()> {
    let mut session = Session::new(LineRenderer::new(out));
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if let Some(label) = keypad::label_for_word(line) {
            session.press(label);
        } else {
            for c in line.chars().filter(|c| !c.is_whitespace()) {
                match keypad::label_for_char(c) {
                    Some(label) => {
                        session.press(label);
                    }
                    None => tracing::debug!(%c, "skipping character"),
                }
            }
        }
        session.renderer_mut().check()?;
    }
    tracing::debug!(display = session.display(), "repl finished");
    Ok(())
}
