use serde::{Deserialize, Serialize};

/// Raw eligibility answers exactly as typed.
///
/// Numeric fields stay as strings here; the validation engine parses them and
/// treats non-numeric input as "not eligible", never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EligibilityCriteria {
    pub age: String,
    pub qualifying_exam: String,
    pub percentage: String,
    pub entrance_exam: String,
    pub entrance_score: String,
    pub residency: bool,
}
