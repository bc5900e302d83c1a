//! Typed per-section form records and the shared form-state aggregate.

pub mod category;
pub mod declarations;
pub mod education;
pub mod eligibility;
pub mod entrance;
pub mod personal;
pub mod program;
mod store;
pub mod uploads;

pub use category::{Category, CategorySelection};
pub use declarations::Declarations;
pub use education::EducationRecord;
pub use eligibility::EligibilityCriteria;
pub use entrance::EntranceDetails;
pub use personal::PersonalDetails;
pub use program::{PreferenceError, ProgramChoice, ProgramSelection};
pub use store::{FormState, FormStateStore, SectionData, SectionKey};
pub use uploads::UploadDocuments;
