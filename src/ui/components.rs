// Reusable terminal UI components
// Status badges, confidence labels and the output buffer

use crate::state::AgentStatus;
use std::collections::VecDeque;
use std::io::{self, Write};

/// Render a status badge as an icon
/// Icons: Completed (✅), Pending (⏳), Error (⚠️), Idle (⭕)
pub fn status_badge(status: AgentStatus) -> &'static str {
    match status {
        AgentStatus::Completed => "✅",
        AgentStatus::Pending => "⏳",
        AgentStatus::Error => "⚠️",
        AgentStatus::Idle => "⭕",
    }
}

/// Confidence band used to tint the percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    /// Shown green
    High,
    /// Shown yellow
    Medium,
    /// Shown red
    Low,
}

impl ConfidenceLevel {
    /// Band of an agent confidence
    pub fn of(confidence: f64) -> Self {
        Self::banded(confidence, 0.7, 0.4)
    }

    /// Band of a paper relevance score (stricter than agent confidence)
    pub fn of_paper(score: f64) -> Self {
        Self::banded(score, 0.8, 0.6)
    }

    fn banded(value: f64, high: f64, medium: f64) -> Self {
        if value > high {
            ConfidenceLevel::High
        } else if value > medium {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "\x1b[32m",   // green
            ConfidenceLevel::Medium => "\x1b[33m", // yellow
            ConfidenceLevel::Low => "\x1b[31m",    // red
        }
    }
}

/// Confidence as a percentage with one decimal, e.g. `87.0%`
pub fn confidence_label(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Confidence label wrapped in the color of its band
pub fn colored_confidence(confidence: f64) -> String {
    format!(
        "{}{}\x1b[0m",
        ConfidenceLevel::of(confidence).ansi(),
        confidence_label(confidence)
    )
}

/// Paper score label wrapped in the color of its band
pub fn colored_paper_score(score: f64) -> String {
    format!(
        "{}{}\x1b[0m",
        ConfidenceLevel::of_paper(score).ansi(),
        confidence_label(score)
    )
}

/// Terminal output buffer
/// Collects rendered lines before they are flushed to the terminal
pub struct TerminalOutput {
    /// Buffer of output lines
    lines: VecDeque<String>,
    /// Maximum number of lines to keep (0 = unlimited)
    max_lines: usize,
}

impl TerminalOutput {
    /// Create a new output buffer
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines,
        }
    }

    /// Add a line to the output
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        if self.max_lines > 0 && self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }

    /// Add an empty line
    pub fn blank(&mut self) {
        self.add_line(String::new());
    }

    /// Clear all output
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of buffered lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write every buffered line to `out` and empty the buffer
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for line in self.lines.drain(..) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new(1000) // Default to 1000 lines
    }
}
