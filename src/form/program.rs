use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One selectable program offered by an institute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramChoice {
    pub id: String,
    pub name: String,
}

impl ProgramChoice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Why a preference could not be added. Enforced at insert time so the
/// stored list never violates its invariants.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("you can only select up to {max} preferences", max = ProgramSelection::MAX_PREFERENCES)]
    ListFull,
    #[error("this program is already selected")]
    Duplicate,
}

/// The program step's slice of form state.
///
/// `preferences` holds the applicant's ranked choices: rank 1 is the first
/// element, ids are unique, and the list never exceeds [`Self::MAX_PREFERENCES`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramSelection {
    pub selected_institute: String,
    pub selected_program: Option<String>,
    pub preferences: Vec<ProgramChoice>,
}

impl ProgramSelection {
    pub const MAX_PREFERENCES: usize = 8;

    /// Changes the institute. A different institute invalidates the pending
    /// program pick and every collected preference.
    pub fn set_institute(&mut self, institute: impl Into<String>) {
        let institute = institute.into();
        if self.selected_institute != institute {
            self.selected_program = None;
            self.preferences.clear();
        }
        self.selected_institute = institute;
    }

    pub fn add_preference(&mut self, choice: ProgramChoice) -> Result<(), PreferenceError> {
        if self.preferences.len() >= Self::MAX_PREFERENCES {
            return Err(PreferenceError::ListFull);
        }
        if self.preferences.iter().any(|p| p.id == choice.id) {
            return Err(PreferenceError::Duplicate);
        }
        self.preferences.push(choice);
        Ok(())
    }

    pub fn remove_preference(&mut self, id: &str) {
        self.preferences.retain(|p| p.id != id);
    }
}
