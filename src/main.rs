//! Theioptera terminal dashboard
//!
//! Runs the research agents against the current question and gives access
//! to saved sessions, the researcher profile, the reflection journal and the
//! evidence explorer.

use std::io;
use std::sync::Arc;
use theioptera::config::Config;
use theioptera::dashboard::{AgentTransport, HttpTransport, LinePrompt};
use theioptera::pages::{self, Command, USAGE};
use theioptera::state::StateStore;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr keeps stdout for the pages)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let command = Command::parse(std::env::args().skip(1));
    if command == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let store = StateStore::open(&config.data_dir);
    let transport: Arc<dyn AgentTransport> = Arc::new(HttpTransport::new(&config.api_base_url)?);
    let mut prompt = LinePrompt::stdio();
    let mut stdout = io::stdout();

    match command {
        Command::Dashboard { question } => {
            pages::dashboard(&store, transport, &question, &mut prompt, &mut stdout).await
        }
        Command::Sessions => pages::sessions(&store, &mut prompt, &mut stdout),
        Command::Profile => pages::profile(&store, &mut prompt, &mut stdout),
        Command::Thinking => pages::thinking(&store, transport, &mut prompt, &mut stdout).await,
        Command::Evidence => pages::evidence(&store, transport, &mut stdout).await,
        Command::Help => Ok(()),
    }
}
