use crate::form::FormState;
use crate::validation;

/// Per-section "may advance" predicate.
pub type SectionValidator = fn(&FormState) -> bool;

/// One page of a wizard: position, title, and its validity predicate.
#[derive(Clone, Copy)]
pub struct SectionDescriptor {
    pub ordinal: u8,
    pub title: &'static str,
    pub validate: SectionValidator,
}

/// The fixed ordered sequence of sections for one flow.
///
/// Two distinct registries exist, selected by role: the applicant-facing
/// admission flow and the reviewer panel. They are separate instances, never
/// branches inside one shared component.
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    fn build(entries: &[(&'static str, SectionValidator)]) -> Self {
        let sections = entries
            .iter()
            .enumerate()
            .map(|(index, (title, validate))| SectionDescriptor {
                ordinal: index as u8 + 1,
                title,
                validate: *validate,
            })
            .collect();
        Self { sections }
    }

    /// The applicant-facing 11-step admission flow.
    pub fn admission() -> Self {
        Self::build(&[
            ("Guidelines", validation::always_valid),
            ("Program Selection", validation::program_selection_valid),
            ("Personal Details", validation::personal_details_valid),
            ("Eligibility Criteria", validation::eligibility_valid),
            ("Category Selection", validation::category_valid),
            ("Education History", validation::education_history_valid),
            ("Entrance Details", validation::entrance_details_valid),
            ("Upload Documents", validation::upload_documents_valid),
            ("Declarations", validation::declarations_valid),
            ("Review & Submit", validation::always_valid),
            ("Make Payment", validation::always_valid),
        ])
    }

    /// The administrative 5-view reviewer panel. Reviewers browse freely, so
    /// every predicate passes.
    pub fn review() -> Self {
        Self::build(&[
            ("Enquiry", validation::always_valid),
            ("View All Forms", validation::always_valid),
            ("View Accepted Forms", validation::always_valid),
            ("View Rejected Forms", validation::always_valid),
            ("Merit List", validation::always_valid),
        ])
    }

    pub fn len(&self) -> u8 {
        self.sections.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, ordinal: u8) -> Option<&SectionDescriptor> {
        if ordinal == 0 {
            return None;
        }
        self.sections.get(ordinal as usize - 1)
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }
}
