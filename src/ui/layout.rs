// Dashboard layout
// Renders the context banner, agent cards and the supporting pages

use crate::dashboard::{
    ComparisonRow, EvidenceSummary, InvocationState, QuestionContext, ResultsSummary,
};
use crate::state::{AgentStatus, Profile, Session};
use crate::ui::components::*;
use theioptera_backend::agents::{AgentKind, EvidenceResult, Paper, Stance};

const RULE: &str = "────────────────────────────────────────────────────────────";

/// Render a page title with the question banner
pub fn render_header(out: &mut TerminalOutput, title: &str, context: &QuestionContext) {
    out.add_line(title);
    out.add_line(RULE);
    out.add_line(context.banner());
    out.blank();
}

/// Render the "Current Results" block; nothing when no result was collected
pub fn render_summary(out: &mut TerminalOutput, summary: Option<&ResultsSummary>) {
    let Some(summary) = summary else {
        return;
    };
    out.add_line("Current Results");
    out.add_line(format!("  Completed Agents: {}", summary.completed));
    out.add_line(format!("  Average Confidence: {}%", summary.average_percent));
    out.blank();
}

/// Render one agent card
pub fn render_card(
    out: &mut TerminalOutput,
    kind: AgentKind,
    status: AgentStatus,
    state: &InvocationState,
) {
    out.add_line(format!(
        "{} {} [{}]",
        status_badge(status),
        kind.display_name(),
        status
    ));
    out.add_line(format!("  {}", kind.description()));

    if state.loading || status.is_pending() {
        out.add_line("  Running...");
    }

    if let Some(error) = &state.error {
        out.add_line(format!("  Error: {error}"));
    }

    if let Some(data) = &state.data {
        out.add_line(format!("  Result: {}", data.result));
        out.add_line(format!("  Confidence: {}", colored_confidence(data.confidence)));
        if !data.warnings.is_empty() {
            out.add_line("  Warnings:");
            for warning in &data.warnings {
                out.add_line(format!("    - {warning}"));
            }
        }
        if !data.sources.is_empty() {
            out.add_line(format!("  Sources: {}", data.sources.join(", ")));
        }
    }
    out.blank();
}

/// Render the numbered list of saved sessions, marking the selected ones
pub fn render_session_list<F>(out: &mut TerminalOutput, sessions: &[Session], is_selected: F)
where
    F: Fn(&str) -> bool,
{
    if sessions.is_empty() {
        out.add_line("No saved sessions yet. Run some agents on the dashboard and save them.");
        out.blank();
        return;
    }
    for (index, session) in sessions.iter().enumerate() {
        let mark = if is_selected(&session.id) { "[x]" } else { "[ ]" };
        out.add_line(format!(
            "{mark} {}. {} | score {} | {} agents | {}",
            index + 1,
            session.project_name,
            confidence_label(session.score),
            session.agents.len(),
            session.timestamp.format("%Y-%m-%d %H:%M"),
        ));
        out.add_line(format!("      {}", session.question));
    }
    out.blank();
}

/// Render a comparison table of selected sessions
pub fn render_comparison(out: &mut TerminalOutput, rows: &[ComparisonRow]) {
    out.add_line("Session Comparison");
    out.add_line(RULE);
    for row in rows {
        out.add_line(format!(
            "{} | {} | score {} | {} agents | {}",
            row.project_name,
            row.question,
            confidence_label(row.score),
            row.agent_count,
            row.timestamp.format("%Y-%m-%d %H:%M"),
        ));
    }
    out.blank();
}

/// Render the stored profile
pub fn render_profile(out: &mut TerminalOutput, profile: &Profile) {
    let or_unset = |value: &str| {
        if value.is_empty() {
            "Not specified".to_string()
        } else {
            value.to_string()
        }
    };
    out.add_line(format!("  Name: {}", profile.name));
    out.add_line(format!("  Email: {}", profile.email));
    out.add_line(format!("  Research Field: {}", or_unset(&profile.field)));
    out.add_line(format!("  Institution: {}", or_unset(&profile.institution)));
    out.blank();
}

/// Render a numbered list of Socratic questions
pub fn render_questions(out: &mut TerminalOutput, questions: &[String]) {
    for (index, question) in questions.iter().enumerate() {
        out.add_line(format!("  {}. {question}", index + 1));
    }
    out.blank();
}

fn render_papers(out: &mut TerminalOutput, title: &str, papers: &[Paper], empty: &str) {
    out.add_line(format!("{title} ({})", papers.len()));
    if papers.is_empty() {
        out.add_line(format!("  {empty}"));
    }
    for paper in papers {
        let stance = match paper.stance {
            Stance::Support => "SUPPORT",
            Stance::Oppose => "OPPOSE",
        };
        let year = paper
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        out.add_line(format!(
            "  - {} | {} | {} | {} | {}",
            paper.title,
            stance,
            colored_paper_score(paper.score),
            paper.authors.as_deref().unwrap_or("N/A"),
            year,
        ));
    }
    out.blank();
}

/// Render an evidence analysis: counts, paper tables and the verdict
pub fn render_evidence(out: &mut TerminalOutput, evidence: &EvidenceResult) {
    let summary = EvidenceSummary::of(evidence);
    out.add_line("Evidence Summary");
    out.add_line(format!(
        "  Supporting: {} | Opposing: {} | Total: {} | Balance: {}",
        summary.supporting,
        summary.opposing,
        summary.total(),
        summary.verdict.icon()
    ));
    out.blank();

    render_papers(
        out,
        "Supporting Evidence",
        &evidence.supporting,
        "No supporting evidence found.",
    );
    render_papers(
        out,
        "Opposing Evidence",
        &evidence.opposing,
        "No opposing evidence found.",
    );

    out.add_line("Interpretation");
    out.add_line(format!("  {}", summary.interpretation()));
    out.blank();
}
