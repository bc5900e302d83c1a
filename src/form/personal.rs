use serde::{Deserialize, Serialize};

/// Identity and demographic details collected in the third wizard step.
///
/// Every field except `middle_name` is required; the validation engine
/// treats a field as filled only when it is non-blank after trimming.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalDetails {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub student_name: String,
    pub mother_name: String,
    pub personal_email: String,
    pub mobile_number: String,
    pub address: String,
    pub date_of_birth: String,
    pub birth_place: String,
    pub gender: String,
    pub aadhar_number: String,
    pub category: String,
    pub religion: String,
    pub nationality: String,
    pub domicile: String,
    pub family_income: String,
    pub rural_urban: String,
    pub admission_source: String,
}

impl PersonalDetails {
    /// The 18 fields that must be non-blank for the section to pass.
    pub fn required_fields(&self) -> [&str; 18] {
        [
            &self.first_name,
            &self.last_name,
            &self.student_name,
            &self.mother_name,
            &self.personal_email,
            &self.mobile_number,
            &self.address,
            &self.date_of_birth,
            &self.birth_place,
            &self.gender,
            &self.aadhar_number,
            &self.category,
            &self.religion,
            &self.nationality,
            &self.domicile,
            &self.family_income,
            &self.rural_urban,
            &self.admission_source,
        ]
    }
}
