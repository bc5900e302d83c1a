use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    CategorySelection, Declarations, EducationRecord, EligibilityCriteria, EntranceDetails,
    PersonalDetails, ProgramSelection, UploadDocuments,
};

/// The fixed set of section keys. Each key owns exactly one slice of
/// [`FormState`]; updating one never touches another.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    PersonalDetails,
    EducationHistory,
    CategorySelection,
    ProgramSelection,
    EligibilityCriteria,
    EntranceDetails,
    UploadDocuments,
    SelectedFaculty,
    Declarations,
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKey::PersonalDetails => "personalDetails",
            SectionKey::EducationHistory => "educationHistory",
            SectionKey::CategorySelection => "categorySelection",
            SectionKey::ProgramSelection => "programSelection",
            SectionKey::EligibilityCriteria => "eligibilityCriteria",
            SectionKey::EntranceDetails => "entranceDetails",
            SectionKey::UploadDocuments => "uploadDocuments",
            SectionKey::SelectedFaculty => "selectedFaculty",
            SectionKey::Declarations => "declarations",
        };
        f.write_str(name)
    }
}

/// One section's blob, tagged by its key so the compiler enforces the shape
/// each validator expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SectionData {
    PersonalDetails(PersonalDetails),
    EducationHistory(Vec<EducationRecord>),
    CategorySelection(CategorySelection),
    ProgramSelection(ProgramSelection),
    EligibilityCriteria(EligibilityCriteria),
    EntranceDetails(EntranceDetails),
    UploadDocuments(UploadDocuments),
    SelectedFaculty(String),
    Declarations(Declarations),
}

impl SectionData {
    pub fn key(&self) -> SectionKey {
        match self {
            SectionData::PersonalDetails(_) => SectionKey::PersonalDetails,
            SectionData::EducationHistory(_) => SectionKey::EducationHistory,
            SectionData::CategorySelection(_) => SectionKey::CategorySelection,
            SectionData::ProgramSelection(_) => SectionKey::ProgramSelection,
            SectionData::EligibilityCriteria(_) => SectionKey::EligibilityCriteria,
            SectionData::EntranceDetails(_) => SectionKey::EntranceDetails,
            SectionData::UploadDocuments(_) => SectionKey::UploadDocuments,
            SectionData::SelectedFaculty(_) => SectionKey::SelectedFaculty,
            SectionData::Declarations(_) => SectionKey::Declarations,
        }
    }
}

/// The whole application, one typed slice per section.
///
/// Created empty at session start and discarded at logout; only the selected
/// faculty survives across sessions (persisted by the session manager).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub personal_details: PersonalDetails,
    pub education_history: Vec<EducationRecord>,
    pub category_selection: CategorySelection,
    pub program_selection: ProgramSelection,
    pub eligibility_criteria: EligibilityCriteria,
    pub entrance_details: EntranceDetails,
    pub upload_documents: UploadDocuments,
    pub selected_faculty: String,
    pub declarations: Declarations,
}

type ChangeListener = Box<dyn FnMut(SectionKey)>;

/// The single mutable aggregate shared by every section.
///
/// `update` replaces the named key's blob wholesale; there is no deep merge
/// and no validation here. Sections read any other section's data through
/// `read` or the typed `state()` accessor (needed for the review step).
#[derive(Default)]
pub struct FormStateStore {
    state: FormState,
    listeners: Vec<ChangeListener>,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the blob owned by `data`'s key and notifies subscribers.
    pub fn update(&mut self, data: SectionData) {
        let key = data.key();
        match data {
            SectionData::PersonalDetails(value) => self.state.personal_details = value,
            SectionData::EducationHistory(value) => self.state.education_history = value,
            SectionData::CategorySelection(value) => self.state.category_selection = value,
            SectionData::ProgramSelection(value) => self.state.program_selection = value,
            SectionData::EligibilityCriteria(value) => self.state.eligibility_criteria = value,
            SectionData::EntranceDetails(value) => self.state.entrance_details = value,
            SectionData::UploadDocuments(value) => self.state.upload_documents = value,
            SectionData::SelectedFaculty(value) => self.state.selected_faculty = value,
            SectionData::Declarations(value) => self.state.declarations = value,
        }
        for listener in &mut self.listeners {
            listener(key);
        }
    }

    /// Changes the selected faculty. A different faculty invalidates the
    /// chosen institute and everything downstream of it, the same
    /// reset-on-change rule the institute and category records apply to
    /// their own dependents. The faculty has no owning record of its own,
    /// so the cascade lives here.
    pub fn set_faculty(&mut self, faculty: impl Into<String>) {
        let faculty = faculty.into();
        if self.state.selected_faculty != faculty {
            self.update(SectionData::ProgramSelection(ProgramSelection::default()));
        }
        self.update(SectionData::SelectedFaculty(faculty));
    }

    /// Returns the current blob for `key` (the empty default until first set).
    pub fn read(&self, key: SectionKey) -> SectionData {
        match key {
            SectionKey::PersonalDetails => {
                SectionData::PersonalDetails(self.state.personal_details.clone())
            }
            SectionKey::EducationHistory => {
                SectionData::EducationHistory(self.state.education_history.clone())
            }
            SectionKey::CategorySelection => {
                SectionData::CategorySelection(self.state.category_selection.clone())
            }
            SectionKey::ProgramSelection => {
                SectionData::ProgramSelection(self.state.program_selection.clone())
            }
            SectionKey::EligibilityCriteria => {
                SectionData::EligibilityCriteria(self.state.eligibility_criteria.clone())
            }
            SectionKey::EntranceDetails => {
                SectionData::EntranceDetails(self.state.entrance_details.clone())
            }
            SectionKey::UploadDocuments => {
                SectionData::UploadDocuments(self.state.upload_documents.clone())
            }
            SectionKey::SelectedFaculty => {
                SectionData::SelectedFaculty(self.state.selected_faculty.clone())
            }
            SectionKey::Declarations => SectionData::Declarations(self.state.declarations),
        }
    }

    /// Read-only view of the whole aggregate, for validators and the review
    /// step.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Registers a change listener invoked after every successful update.
    pub fn subscribe(&mut self, listener: impl FnMut(SectionKey) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}
