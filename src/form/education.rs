use serde::{Deserialize, Serialize};

/// One completed qualification in the applicant's education history.
///
/// Records are kept in the order they were entered and are not deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EducationRecord {
    pub level: String,
    pub institution: String,
    pub board: String,
    pub year_of_passing: String,
    pub percentage: String,
    /// Optional free-form subject list; never required.
    pub subjects: String,
}

impl EducationRecord {
    /// True when every required field is non-blank after trimming.
    pub fn is_complete(&self) -> bool {
        !self.level.trim().is_empty()
            && !self.institution.trim().is_empty()
            && !self.board.trim().is_empty()
            && !self.year_of_passing.trim().is_empty()
            && !self.percentage.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_record_is_incomplete() {
        assert!(!EducationRecord::default().is_complete());
    }

    #[test]
    fn subjects_are_optional() {
        let record = EducationRecord {
            level: "10+2".into(),
            institution: "City Senior Secondary".into(),
            board: "CBSE".into(),
            year_of_passing: "2024".into(),
            percentage: "88".into(),
            subjects: String::new(),
        };
        assert!(record.is_complete());
    }

    #[test]
    fn whitespace_only_field_is_incomplete() {
        let record = EducationRecord {
            level: "   ".into(),
            institution: "City Senior Secondary".into(),
            board: "CBSE".into(),
            year_of_passing: "2024".into(),
            percentage: "88".into(),
            subjects: String::new(),
        };
        assert!(!record.is_complete());
    }
}
