// State management module
// Handles the client state store, its storage backends and persisted models

/// Raw key-value storage backends
pub mod backend;
/// Persisted data model
pub mod models;
/// Typed state store over a backend
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StoreError};
pub use models::{AgentStatus, AgentStatusMap, InvocationEvent, Profile, Reflection, Session};
pub use store::StateStore;
