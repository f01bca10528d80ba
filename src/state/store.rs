// Typed client state store
// JSON values under fixed keys on top of a `StorageBackend`

use super::backend::{FileBackend, MemoryBackend, StorageBackend, StoreError};
use super::models::{AgentStatus, AgentStatusMap, Profile, Reflection, Session};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use theioptera_backend::agents::AgentKind;
use tracing::debug;

/// Key of the researcher profile
pub const PROFILE_KEY: &str = "researcher_profile";
/// Key of the saved sessions (newest first)
pub const SESSIONS_KEY: &str = "research_sessions";
/// Key of the agent status map
pub const AGENT_STATUS_KEY: &str = "agent_status";
/// Key of the current research question
pub const CURRENT_QUESTION_KEY: &str = "current_question";
/// Key of the saved reflections (newest first)
pub const REFLECTIONS_KEY: &str = "reflections";

/// Client state store
///
/// Cheap to clone; clones share the same backend. Every read before the
/// first write returns the entity's empty value. Read-modify-write
/// operations (status merge, session append) are not atomic.
#[derive(Clone)]
pub struct StateStore {
    backend: Arc<dyn StorageBackend>,
}

impl StateStore {
    /// Wrap an existing backend
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by process memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Store backed by JSON files in `dir`
    pub fn open<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(Arc::new(FileBackend::new(dir)))
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Json {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &raw)?;
        debug!(key, bytes = raw.len(), "Store write");
        Ok(())
    }

    // Profile

    /// Saved profile, if any
    pub fn profile(&self) -> Result<Option<Profile>, StoreError> {
        self.read(PROFILE_KEY)
    }

    /// Overwrite the profile
    pub fn set_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.write(PROFILE_KEY, profile)
    }

    /// Delete the profile
    pub fn clear_profile(&self) -> Result<(), StoreError> {
        self.backend.remove(PROFILE_KEY)
    }

    // Sessions

    /// Saved sessions, newest first
    pub fn sessions(&self) -> Result<Vec<Session>, StoreError> {
        Ok(self.read(SESSIONS_KEY)?.unwrap_or_default())
    }

    /// Prepend `session` to the saved sessions
    pub fn add_session(&self, session: Session) -> Result<(), StoreError> {
        let mut sessions = self.sessions()?;
        sessions.insert(0, session);
        self.write(SESSIONS_KEY, &sessions)
    }

    /// Remove the session with `id`; returns whether one was removed
    pub fn delete_session(&self, id: &str) -> Result<bool, StoreError> {
        let mut sessions = self.sessions()?;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Ok(false);
        }
        self.write(SESSIONS_KEY, &sessions)?;
        Ok(true)
    }

    // Agent status

    /// Status of every known agent (all idle before the first write)
    pub fn agent_status(&self) -> Result<AgentStatusMap, StoreError> {
        Ok(self
            .read::<AgentStatusMap>(AGENT_STATUS_KEY)?
            .map(AgentStatusMap::with_known_agents)
            .unwrap_or_default())
    }

    /// Set one agent's status, leaving the others untouched
    pub fn set_agent_status(&self, kind: AgentKind, status: AgentStatus) -> Result<(), StoreError> {
        let mut map = self.agent_status()?;
        map.set(kind, status);
        self.write(AGENT_STATUS_KEY, &map)
    }

    // Current question

    /// Current research question (empty when none was set)
    pub fn current_question(&self) -> Result<String, StoreError> {
        Ok(self.read(CURRENT_QUESTION_KEY)?.unwrap_or_default())
    }

    /// Overwrite the current research question
    pub fn set_current_question(&self, question: &str) -> Result<(), StoreError> {
        self.write(CURRENT_QUESTION_KEY, &question)
    }

    // Reflections

    /// Saved reflections, newest first
    pub fn reflections(&self) -> Result<Vec<Reflection>, StoreError> {
        Ok(self.read(REFLECTIONS_KEY)?.unwrap_or_default())
    }

    /// Prepend `reflection` to the saved reflections
    pub fn add_reflection(&self, reflection: Reflection) -> Result<(), StoreError> {
        let mut reflections = self.reflections()?;
        reflections.insert(0, reflection);
        self.write(REFLECTIONS_KEY, &reflections)
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;
    use theioptera_backend::agents::AgentResult;

    fn session(id: &str) -> Session {
        Session {
            id: id.to_string(),
            project_name: format!("Project {id}"),
            question: "q".to_string(),
            score: 0.8,
            timestamp: Utc::now(),
            agents: vec![AgentResult {
                result: "r".to_string(),
                input_used: "q".to_string(),
                confidence: 0.8,
                warnings: vec![],
                sources: vec![],
            }],
        }
    }

    #[test]
    fn test_reads_before_any_write_are_empty() {
        let store = StateStore::in_memory();
        assert!(store.profile().unwrap().is_none());
        assert!(store.sessions().unwrap().is_empty());
        assert_eq!(store.current_question().unwrap(), "");
        assert!(store.reflections().unwrap().is_empty());

        let status = store.agent_status().unwrap();
        assert_eq!(status, AgentStatusMap::default());
        assert_eq!(status.len(), 9);
    }

    #[test]
    fn test_profile_set_and_clear() {
        let store = StateStore::in_memory();
        let profile = Profile {
            name: "Dr. Jane Smith".to_string(),
            email: "jane@uni.edu".to_string(),
            ..Default::default()
        };
        store.set_profile(&profile).unwrap();
        assert_eq!(store.profile().unwrap(), Some(profile));

        store.clear_profile().unwrap();
        assert!(store.profile().unwrap().is_none());
    }

    #[test]
    fn test_sessions_are_newest_first() {
        let store = StateStore::in_memory();
        store.add_session(session("1")).unwrap();
        store.add_session(session("2")).unwrap();
        store.add_session(session("3")).unwrap();

        let ids: Vec<String> = store.sessions().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_delete_session_removes_exactly_one() {
        let store = StateStore::in_memory();
        for id in ["1", "2", "3"] {
            store.add_session(session(id)).unwrap();
        }

        assert!(store.delete_session("2").unwrap());
        assert!(!store.delete_session("2").unwrap());

        let ids: Vec<String> = store.sessions().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_status_merge_on_write() {
        let store = StateStore::in_memory();
        store
            .set_agent_status(AgentKind::Search, AgentStatus::Pending)
            .unwrap();
        store
            .set_agent_status(AgentKind::Evidence, AgentStatus::Completed)
            .unwrap();
        store
            .set_agent_status(AgentKind::Search, AgentStatus::Error)
            .unwrap();

        let status = store.agent_status().unwrap();
        assert_eq!(status.len(), 9);
        assert_eq!(status.get(AgentKind::Search), AgentStatus::Error);
        assert_eq!(status.get(AgentKind::Evidence), AgentStatus::Completed);
        assert_eq!(status.get(AgentKind::Map), AgentStatus::Idle);
    }

    #[test]
    fn test_question_overwrite() {
        let store = StateStore::in_memory();
        store.set_current_question("first").unwrap();
        store.set_current_question("second").unwrap();
        assert_eq!(store.current_question().unwrap(), "second");
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp = TempDir::new().unwrap();
        {
            let store = StateStore::open(temp.path());
            store.set_current_question("glymphatic clearance").unwrap();
            store.add_session(session("42")).unwrap();
            store
                .set_agent_status(AgentKind::Thesis, AgentStatus::Completed)
                .unwrap();
        }

        let reopened = StateStore::open(temp.path());
        assert_eq!(reopened.current_question().unwrap(), "glymphatic clearance");
        assert_eq!(reopened.sessions().unwrap()[0].id, "42");
        assert_eq!(
            reopened.agent_status().unwrap().get(AgentKind::Thesis),
            AgentStatus::Completed
        );
        assert!(temp.path().join("research_sessions.json").exists());
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set(SESSIONS_KEY, "not json").unwrap();
        let store = StateStore::new(backend);

        match store.sessions() {
            Err(StoreError::Json { key, .. }) => assert_eq!(key, SESSIONS_KEY),
            other => panic!("Expected JSON error, got: {:?}", other),
        }
    }
}
