//! Interactive prompts
//!
//! Operations that need the user's input mid-flight (project name,
//! destructive confirmations) ask through this trait instead of reading a
//! terminal directly.

use std::io::{self, BufRead, Write};

/// Source of interactive answers
pub trait Prompt {
    /// Ask for a line of text; `None` means the user cancelled
    fn ask(&mut self, message: &str) -> Option<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;
}

/// Prompt on a line-oriented reader/writer pair (stdin/stdout in the binary)
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Prompt on arbitrary streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, message: &str) -> Option<String> {
        write!(self.output, "{message} ").ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None, // EOF counts as cancel
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, message: &str) -> Option<String> {
        self.read_line(message)
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.read_line(&format!("{message} [y/N]"))
            .map(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }
}
