//! Read-only reviewer views over submitted applications.
//!
//! The review panel consumes form data for display and never feeds back into
//! the wizard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::FormState;
use crate::session::SessionProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Accepted,
    Rejected,
}

/// One submitted application as the reviewer panel sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationSummary {
    pub id: Uuid,
    pub applicant_name: String,
    pub email: String,
    pub faculty: String,
    pub institute: String,
    pub first_preference: Option<String>,
    pub merit_score: Option<f64>,
    pub status: ReviewStatus,
    pub submitted_at: DateTime<Utc>,
}

impl ApplicationSummary {
    /// Snapshot of a completed form, taken at submit time.
    pub fn from_form(profile: &SessionProfile, state: &FormState) -> Self {
        let merit_score = state
            .eligibility_criteria
            .entrance_score
            .trim()
            .parse::<f64>()
            .ok();
        Self {
            id: Uuid::new_v4(),
            applicant_name: profile.name.clone(),
            email: profile.email.clone(),
            faculty: state.selected_faculty.clone(),
            institute: state.program_selection.selected_institute.clone(),
            first_preference: state
                .program_selection
                .preferences
                .first()
                .map(|p| p.name.clone()),
            merit_score,
            status: ReviewStatus::Pending,
            submitted_at: Utc::now(),
        }
    }
}

/// Holds every submitted application for the reviewer panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewBoard {
    applications: Vec<ApplicationSummary>,
}

impl ReviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, application: ApplicationSummary) -> Uuid {
        let id = application.id;
        self.applications.push(application);
        id
    }

    pub fn all(&self) -> &[ApplicationSummary] {
        &self.applications
    }

    pub fn accepted(&self) -> Vec<&ApplicationSummary> {
        self.with_status(ReviewStatus::Accepted)
    }

    pub fn rejected(&self) -> Vec<&ApplicationSummary> {
        self.with_status(ReviewStatus::Rejected)
    }

    fn with_status(&self, status: ReviewStatus) -> Vec<&ApplicationSummary> {
        self.applications
            .iter()
            .filter(|application| application.status == status)
            .collect()
    }

    pub fn set_status(&mut self, id: Uuid, status: ReviewStatus) -> bool {
        match self.applications.iter_mut().find(|a| a.id == id) {
            Some(application) => {
                application.status = status;
                true
            }
            None => false,
        }
    }

    /// Accepted applications ranked by merit score, highest first.
    /// Applications without a parseable score sort last.
    pub fn merit_list(&self) -> Vec<&ApplicationSummary> {
        let mut ranked = self.accepted();
        ranked.sort_by(|a, b| {
            b.merit_score
                .partial_cmp(&a.merit_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, score: Option<f64>, status: ReviewStatus) -> ApplicationSummary {
        ApplicationSummary {
            id: Uuid::new_v4(),
            applicant_name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            faculty: "Engineering & Technology".into(),
            institute: "Jawaharlal Nehru Engineering College".into(),
            first_preference: Some("Computer Science & Engineering".into()),
            merit_score: score,
            status,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn status_views_partition_applications() {
        let mut board = ReviewBoard::new();
        board.add(summary("Asha", Some(182.0), ReviewStatus::Accepted));
        board.add(summary("Ravi", Some(120.0), ReviewStatus::Rejected));
        board.add(summary("Neha", Some(150.0), ReviewStatus::Pending));

        assert_eq!(board.all().len(), 3);
        assert_eq!(board.accepted().len(), 1);
        assert_eq!(board.rejected().len(), 1);
    }

    #[test]
    fn merit_list_ranks_accepted_by_score_descending() {
        let mut board = ReviewBoard::new();
        board.add(summary("Asha", Some(182.0), ReviewStatus::Accepted));
        board.add(summary("Ravi", Some(201.0), ReviewStatus::Accepted));
        board.add(summary("Neha", None, ReviewStatus::Accepted));
        board.add(summary("Kiran", Some(999.0), ReviewStatus::Rejected));

        let names: Vec<&str> = board
            .merit_list()
            .iter()
            .map(|a| a.applicant_name.as_str())
            .collect();
        assert_eq!(names, ["Ravi", "Asha", "Neha"]);
    }

    #[test]
    fn set_status_finds_applications_by_id() {
        let mut board = ReviewBoard::new();
        let id = board.add(summary("Asha", Some(182.0), ReviewStatus::Pending));
        assert!(board.set_status(id, ReviewStatus::Accepted));
        assert_eq!(board.accepted().len(), 1);
        assert!(!board.set_status(Uuid::new_v4(), ReviewStatus::Accepted));
    }
}
