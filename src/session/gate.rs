//! Yes/no confirmation asked before clearing a short link

use std::cell::RefCell;
use std::io::{BufRead, Write};

/// Prompt shown before a short URL is removed
pub const REMOVE_PROMPT: &str = "Are you sure you want to remove the short URL?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    /// Parse a typed answer; anything but yes cancels
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" | "confirm" => Self::Confirmed,
            _ => Self::Cancelled,
        }
    }
}

pub trait UserConfirmationGate {
    fn ask(&self, prompt: &str) -> Confirmation;
}

/// Gate that always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedGate(pub Confirmation);

impl UserConfirmationGate for FixedGate {
    fn ask(&self, _prompt: &str) -> Confirmation {
        self.0
    }
}

/// Interactive gate for the CLI: prints the prompt and reads one line
///
/// Reads from the caller's own reader so it can share an already locked
/// stdin with the surrounding loop.
pub struct LineGate<'a> {
    io: RefCell<(&'a mut dyn BufRead, &'a mut dyn Write)>,
}

impl<'a> LineGate<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self {
            io: RefCell::new((input, output)),
        }
    }
}

impl UserConfirmationGate for LineGate<'_> {
    fn ask(&self, prompt: &str) -> Confirmation {
        let mut io = self.io.borrow_mut();
        let (input, output) = &mut *io;

        if write!(output, "{} [y/N]: ", prompt)
            .and_then(|_| output.flush())
            .is_err()
        {
            return Confirmation::Cancelled;
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => Confirmation::Cancelled,
            Ok(_) => Confirmation::from_answer(&line),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                Confirmation::Cancelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_answer() {
        assert_eq!(Confirmation::from_answer("y"), Confirmation::Confirmed);
        assert_eq!(Confirmation::from_answer(" YES\n"), Confirmation::Confirmed);
        assert_eq!(Confirmation::from_answer("n"), Confirmation::Cancelled);
        assert_eq!(Confirmation::from_answer(""), Confirmation::Cancelled);
        assert_eq!(Confirmation::from_answer("maybe"), Confirmation::Cancelled);
    }

    #[test]
    fn test_line_gate_reads_one_answer() {
        let mut input = std::io::Cursor::new(b"yes\nn\n".to_vec());
        let mut output = Vec::new();
        {
            let gate = LineGate::new(&mut input, &mut output);
            assert_eq!(gate.ask(REMOVE_PROMPT), Confirmation::Confirmed);
            assert_eq!(gate.ask(REMOVE_PROMPT), Confirmation::Cancelled);
            // 输入结束视为取消
            assert_eq!(gate.ask(REMOVE_PROMPT), Confirmation::Cancelled);
        }
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("Are you sure you want to remove the short URL? [y/N]: "));
    }
}
