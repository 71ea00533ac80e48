//! Terminal confirmation for the multiple-connection escalation.

use std::io::{self, BufRead, IsTerminal, Write};

use cable_validate::{AutoAnswer, ConfirmationProvider};
use tracing::warn;

/// How the escalation question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// Prompt on the terminal.
    Ask,
    Yes,
    No,
}

pub fn provider_for(mode: ConfirmMode) -> Box<dyn ConfirmationProvider> {
    match mode {
        ConfirmMode::Ask => Box::new(TerminalPrompt),
        ConfirmMode::Yes => Box::new(AutoAnswer(true)),
        ConfirmMode::No => Box::new(AutoAnswer(false)),
    }
}

/// Asks on stderr and reads one line from stdin.
///
/// Answers "no" when stdin is not a terminal or cannot be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl ConfirmationProvider for TerminalPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            warn!("stdin is not a terminal; treating confirmation as declined");
            return false;
        }
        let mut stderr = io::stderr().lock();
        if write!(stderr, "{prompt} [y/N] ").and_then(|()| stderr.flush()).is_err() {
            return false;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(_) => is_yes(&line),
            Err(error) => {
                warn!(%error, "failed to read confirmation");
                false
            }
        }
    }
}

/// `y` or `yes` in any case, surrounding whitespace ignored.
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
