//! Dashboard error types
//!
//! Every failure here is local to the action that raised it; none of them
//! leaves the dashboard unusable.

use crate::state::StoreError;
use thiserror::Error;

/// Errors that can occur while fetching an agent endpoint
#[derive(Error, Debug)]
pub enum InvocationError {
    /// Request could not be sent or the response body could not be read
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Body was not a well-formed agent payload
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Endpoint base URL and path could not be joined
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Status could not be persisted
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur while saving a session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Nothing has been collected yet
    #[error("No results to save. Please run some agents first.")]
    NoResults,

    /// The user cancelled the project-name prompt or left it blank
    #[error("Session save cancelled: no project name given")]
    MissingProjectName,

    /// Comparison needs at least two selected sessions
    #[error("Please select at least 2 sessions to compare.")]
    NotEnoughSelected,

    /// Persisting the session failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur while saving a profile
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Name or email is blank
    #[error("Please fill in at least your name and email.")]
    MissingRequiredFields,

    /// Persisting the profile failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur in the reflection journal
#[derive(Error, Debug)]
pub enum ReflectionError {
    /// Reflection text is blank
    #[error("Please write your reflection first.")]
    Empty,

    /// Fetching Socratic questions failed
    #[error("Failed to generate Socratic questions: {0}")]
    Fetch(#[from] InvocationError),

    /// Persisting the reflection failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur on the evidence page
#[derive(Error, Debug)]
pub enum EvidenceError {
    /// Analysis needs a research question
    #[error("No research question set. Set one before analyzing evidence.")]
    MissingQuestion,

    /// Fetching the evidence payload failed
    #[error("Failed to analyze evidence: {0}")]
    Fetch(#[from] InvocationError),

    /// Reading the current question failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
