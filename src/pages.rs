//! Terminal pages
//!
//! One driver per page of the dashboard. Each reads answers from a
//! [`Prompt`], renders through [`TerminalOutput`] and writes to any
//! `io::Write`, so the binary runs them on stdio and tests on buffers.

use crate::dashboard::{
    set_question, AgentInvoker, AgentTransport, EvidenceError, EvidenceExplorer, ProfileEditor,
    ProfileError, ProfileField, Prompt, QuestionContext, ReflectionError, ReflectionJournal,
    SessionAggregator, SessionBrowser, SessionError, RESEARCH_FIELDS,
};
use crate::state::StateStore;
use crate::ui::{
    render_card, render_comparison, render_evidence, render_header, render_profile,
    render_questions, render_session_list, render_summary, TerminalOutput,
};
use futures_util::future::join_all;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use theioptera_backend::agents::AgentKind;
use tracing::warn;

/// Page selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run every agent; a non-empty question replaces the current one
    Dashboard {
        /// Question words joined by spaces
        question: String,
    },
    /// Browse, compare, load and delete saved sessions
    Sessions,
    /// View and edit the researcher profile
    Profile,
    /// Socratic questions and reflections
    Thinking,
    /// Supporting and opposing evidence
    Evidence,
    /// Print usage
    Help,
}

/// Usage text of the binary
pub const USAGE: &str = "\
Usage: theioptera [COMMAND | QUESTION...]

Commands:
  dashboard [QUESTION...]  Run every research agent (default)
  sessions                 Browse, compare, load and delete saved sessions
  profile                  View and edit your researcher profile
  thinking                 Generate Socratic questions and save a reflection
  evidence                 Analyze supporting and opposing evidence
  help                     Show this message

Any other words are taken as the research question for the dashboard.";

impl Command {
    /// Parse the arguments after the program name
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(first) = args.next() else {
            return Command::Dashboard {
                question: String::new(),
            };
        };
        match first.as_str() {
            "sessions" => Command::Sessions,
            "profile" => Command::Profile,
            "thinking" => Command::Thinking,
            "evidence" => Command::Evidence,
            "help" | "--help" | "-h" => Command::Help,
            "dashboard" => Command::Dashboard {
                question: args.collect::<Vec<_>>().join(" "),
            },
            _ => Command::Dashboard {
                question: std::iter::once(first).chain(args).collect::<Vec<_>>().join(" "),
            },
        }
    }
}

/// Run every agent concurrently, show the cards and offer to save a session
///
/// A card whose status cannot be persisted is reported and skipped; the
/// other cards still render.
pub async fn dashboard<W: Write>(
    store: &StateStore,
    transport: Arc<dyn AgentTransport>,
    question: &str,
    prompt: &mut dyn Prompt,
    writer: &mut W,
) -> anyhow::Result<()> {
    set_question(store, question)?;

    let mut out = TerminalOutput::default();
    render_header(&mut out, "🔬 Research Dashboard", &QuestionContext::load(store)?);
    out.flush_to(writer)?;

    let aggregator = Arc::new(Mutex::new(SessionAggregator::new()));
    let mut invokers: Vec<AgentInvoker> = AgentKind::ALL
        .iter()
        .map(|&kind| AgentInvoker::new(kind, transport.clone(), store.clone()))
        .collect();

    let runs = invokers.iter_mut().map(|invoker| {
        let aggregator = aggregator.clone();
        async move {
            invoker
                .run(move |result| aggregator.lock().record(result))
                .await
        }
    });
    let outcomes = join_all(runs).await;

    for (invoker, outcome) in invokers.iter().zip(outcomes) {
        // A card that failed to persist shows whatever status it last reached
        let status = match outcome {
            Ok(status) => status,
            Err(e) => {
                warn!(agent = invoker.kind().display_name(), error = %e, "Card state lost");
                invoker.displayed_status().unwrap_or_default()
            }
        };
        render_card(&mut out, invoker.kind(), status, invoker.state());
    }

    let aggregator = aggregator.lock().clone();
    render_summary(&mut out, aggregator.summary().as_ref());
    out.flush_to(writer)?;

    match aggregator.save(store, prompt) {
        Ok(session) => writeln!(
            writer,
            "Session \"{}\" saved with {} agents (score {:.2}).",
            session.project_name,
            session.agents.len(),
            session.score
        )?,
        Err(e @ (SessionError::NoResults | SessionError::MissingProjectName)) => {
            writeln!(writer, "{e}")?
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Session browser loop
pub fn sessions<W: Write>(
    store: &StateStore,
    prompt: &mut dyn Prompt,
    writer: &mut W,
) -> anyhow::Result<()> {
    let mut browser = SessionBrowser::open(store.clone())?;
    let mut out = TerminalOutput::default();
    render_header(&mut out, "📚 Research Sessions", &QuestionContext::load(store)?);

    loop {
        render_session_list(&mut out, browser.sessions(), |id| browser.is_selected(id));
        out.flush_to(writer)?;

        let Some(line) = prompt.ask("Command [select N | compare | load N | delete N | quit]:")
        else {
            break;
        };
        let mut words = line.split_whitespace();
        let action = words.next().unwrap_or("quit");
        let target = words
            .next()
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| browser.sessions().get(i))
            .map(|s| s.id.clone());

        match (action, target) {
            ("quit" | "q", _) => break,
            ("compare", _) => match browser.compare() {
                Ok(rows) => render_comparison(&mut out, &rows),
                Err(SessionError::NotEnoughSelected) => {
                    out.add_line(SessionError::NotEnoughSelected.to_string())
                }
                Err(e) => return Err(e.into()),
            },
            ("select", Some(id)) => {
                browser.toggle(&id);
            }
            ("load", Some(id)) => {
                if let Some(question) = browser.load(&id, prompt)? {
                    out.add_line(format!("Research question set to: {question}"));
                }
            }
            ("delete", Some(id)) => {
                if browser.delete(&id, prompt)? {
                    out.add_line("Session deleted.");
                }
            }
            ("select" | "load" | "delete", None) => out.add_line("No session with that number."),
            _ => out.add_line(format!("Unknown command: {line}")),
        }
        out.blank();
    }
    out.flush_to(writer)?;
    Ok(())
}

fn ask_field(prompt: &mut dyn Prompt, label: &str, current: &str) -> Option<String> {
    let answer = prompt.ask(&format!("{label} [{current}]:"))?;
    let answer = answer.trim();
    Some(if answer.is_empty() {
        current.to_string()
    } else {
        answer.to_string()
    })
}

/// Fill the editor's draft field by field; `None` when the user cancelled
fn edit_profile(
    editor: &mut ProfileEditor,
    prompt: &mut dyn Prompt,
    out: &mut TerminalOutput,
) -> Option<()> {
    let draft = editor.profile().clone();
    let name = ask_field(prompt, "Full Name *", &draft.name)?;
    editor.set(ProfileField::Name, name);
    let email = ask_field(prompt, "Email Address *", &draft.email)?;
    editor.set(ProfileField::Email, email);

    for (index, field) in RESEARCH_FIELDS.iter().enumerate() {
        out.add_line(format!("  {}. {field}", index + 1));
    }
    let field = ask_field(prompt, "Research Field (number or name)", &draft.field)?;
    let field = field
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| RESEARCH_FIELDS.get(i))
        .map(|f| f.to_string())
        .unwrap_or(field);
    editor.set(ProfileField::Field, field);

    let institution = ask_field(prompt, "Institution", &draft.institution)?;
    editor.set(ProfileField::Institution, institution);
    Some(())
}

/// Profile view/edit loop
pub fn profile<W: Write>(
    store: &StateStore,
    prompt: &mut dyn Prompt,
    writer: &mut W,
) -> anyhow::Result<()> {
    let mut editor = ProfileEditor::open(store.clone())?;
    let mut out = TerminalOutput::default();
    out.add_line("👤 Researcher Profile");
    out.blank();

    loop {
        if editor.is_editing() {
            out.flush_to(writer)?;
            if edit_profile(&mut editor, prompt, &mut out).is_none() {
                editor.cancel()?;
                break;
            }
            match editor.save() {
                Ok(()) => out.add_line("Profile saved successfully!"),
                Err(ProfileError::MissingRequiredFields) => {
                    out.add_line(ProfileError::MissingRequiredFields.to_string());
                    out.flush_to(writer)?;
                    if !prompt.confirm("Try again?") {
                        editor.cancel()?;
                        break;
                    }
                }
                Err(e) => return Err(e.into()),
            }
            continue;
        }

        render_profile(&mut out, editor.profile());
        out.flush_to(writer)?;
        match prompt.ask("Command [edit | clear | quit]:").as_deref().map(str::trim) {
            Some("edit") => editor.edit(),
            Some("clear") => {
                if editor.clear(prompt)? {
                    out.add_line("Profile cleared.");
                }
            }
            Some("quit" | "q" | "") | None => break,
            Some(other) => out.add_line(format!("Unknown command: {other}")),
        }
    }
    out.flush_to(writer)?;
    Ok(())
}

/// Socratic questions and one reflection
pub async fn thinking<W: Write>(
    store: &StateStore,
    transport: Arc<dyn AgentTransport>,
    prompt: &mut dyn Prompt,
    writer: &mut W,
) -> anyhow::Result<()> {
    let mut journal = ReflectionJournal::new(transport, store.clone());
    let mut out = TerminalOutput::default();
    render_header(&mut out, "🤔 Critical Thinking", &QuestionContext::load(store)?);

    match journal.generate_questions().await {
        Ok(questions) => render_questions(&mut out, questions),
        Err(e @ ReflectionError::Fetch(_)) => {
            out.add_line(e.to_string());
            out.flush_to(writer)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }
    out.flush_to(writer)?;

    if let Some(text) = prompt.ask("Your reflection:") {
        match journal.save(&text) {
            Ok(_) => out.add_line("Reflection saved successfully!"),
            Err(ReflectionError::Empty) => out.add_line(ReflectionError::Empty.to_string()),
            Err(e) => return Err(e.into()),
        }
    }
    out.flush_to(writer)?;
    Ok(())
}

/// Evidence analysis for the current question
pub async fn evidence<W: Write>(
    store: &StateStore,
    transport: Arc<dyn AgentTransport>,
    writer: &mut W,
) -> anyhow::Result<()> {
    let mut explorer = EvidenceExplorer::new(transport, store.clone());
    let mut out = TerminalOutput::default();
    render_header(&mut out, "📊 Evidence Analysis", &QuestionContext::load(store)?);

    match explorer.analyze().await {
        Ok(_) => {
            if let Some(evidence) = explorer.evidence() {
                render_evidence(&mut out, evidence);
            }
        }
        Err(e @ (EvidenceError::MissingQuestion | EvidenceError::Fetch(_))) => {
            out.add_line(e.to_string())
        }
        Err(e) => return Err(e.into()),
    }
    out.flush_to(writer)?;
    Ok(())
}
