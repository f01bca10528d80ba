//! Researcher profile editor

use super::error::ProfileError;
use super::prompt::Prompt;
use crate::state::{Profile, StateStore};
use tracing::info;

/// Fields offered for `Profile::field`
pub const RESEARCH_FIELDS: [&str; 14] = [
    "Biomedical Sciences",
    "Neuroscience",
    "Pharmacology",
    "Genetics",
    "Biochemistry",
    "Molecular Biology",
    "Immunology",
    "Oncology",
    "Cardiology",
    "Infectious Diseases",
    "Public Health",
    "Bioinformatics",
    "Systems Biology",
    "Other",
];

/// Editable profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    /// Full name, required
    Name,
    /// Contact email, required
    Email,
    /// Research field, one of [`RESEARCH_FIELDS`]
    Field,
    /// Institution, optional
    Institution,
}

/// Edit/view state over the stored profile
pub struct ProfileEditor {
    store: StateStore,
    draft: Profile,
    editing: bool,
    dirty: bool,
}

impl ProfileEditor {
    /// Open the editor; with no stored profile it starts editing an empty one
    pub fn open(store: StateStore) -> Result<Self, ProfileError> {
        let (draft, editing) = match store.profile()? {
            Some(profile) => (profile, false),
            None => (Profile::default(), true),
        };
        Ok(Self {
            store,
            draft,
            editing,
            dirty: false,
        })
    }

    /// The draft being viewed or edited
    pub fn profile(&self) -> &Profile {
        &self.draft
    }

    /// Whether the editor is in edit mode
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether the draft differs from what was last loaded or saved
    pub fn has_changes(&self) -> bool {
        self.dirty
    }

    /// Switch to edit mode
    pub fn edit(&mut self) {
        self.editing = true;
    }

    /// Update one field of the draft
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            ProfileField::Name => &mut self.draft.name,
            ProfileField::Email => &mut self.draft.email,
            ProfileField::Field => &mut self.draft.field,
            ProfileField::Institution => &mut self.draft.institution,
        };
        *slot = value;
        self.dirty = true;
    }

    /// Persist the draft and leave edit mode
    pub fn save(&mut self) -> Result<(), ProfileError> {
        if self.draft.name.trim().is_empty() || self.draft.email.trim().is_empty() {
            return Err(ProfileError::MissingRequiredFields);
        }
        self.store.set_profile(&self.draft)?;
        self.editing = false;
        self.dirty = false;
        info!(name = %self.draft.name, "Profile saved");
        Ok(())
    }

    /// Discard the draft; has no effect until a profile has been saved
    pub fn cancel(&mut self) -> Result<(), ProfileError> {
        if let Some(saved) = self.store.profile()? {
            self.draft = saved;
            self.editing = false;
            self.dirty = false;
        }
        Ok(())
    }

    /// Delete the stored profile after confirmation; returns whether it was cleared
    pub fn clear(&mut self, prompt: &mut dyn Prompt) -> Result<bool, ProfileError> {
        if !prompt.confirm("Are you sure you want to clear your profile? This action cannot be undone.") {
            return Ok(false);
        }
        self.store.clear_profile()?;
        self.draft = Profile::default();
        self.editing = true;
        self.dirty = false;
        info!("Profile cleared");
        Ok(true)
    }
}
