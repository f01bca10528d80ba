// Dashboard components
// Agent cards, session aggregation and the supporting pages

pub mod aggregator;
/// Current research question and its banner
pub mod context;
pub mod error;
pub mod evidence;
pub mod invocation;
pub mod profile;
pub mod prompt;
pub mod reflection;
pub mod sessions;
pub mod transport;

pub use aggregator::{ResultsSummary, SessionAggregator};
pub use context::{set_question, QuestionContext};
pub use error::{EvidenceError, InvocationError, ProfileError, ReflectionError, SessionError};
pub use evidence::{EvidenceExplorer, EvidenceSummary, Verdict};
pub use invocation::{AgentInvoker, InvocationState};
pub use profile::{ProfileEditor, ProfileField, RESEARCH_FIELDS};
pub use prompt::{LinePrompt, Prompt};
pub use reflection::ReflectionJournal;
pub use sessions::{ComparisonRow, SessionBrowser};
pub use transport::{fetch_agent, AgentTransport, HttpTransport};
