mod common;

use admission_core::errors::AdmissionError;
use admission_core::review::{ApplicationSummary, ReviewBoard, ReviewStatus};
use admission_core::session::SessionManager;
use admission_core::wizard::{SectionRegistry, WizardController};
use chrono::Utc;
use uuid::Uuid;

#[test]
fn test_profile_survives_a_restart_and_logout_keeps_the_faculty() {
    let (store, mut session) = common::setup_test_env();
    assert!(session
        .login("ravi@example.com", "password", "Ravi", "Performing Arts")
        .expect("login"));

    let restarted = SessionManager::new(store.clone()).expect("reopen session");
    assert_eq!(
        restarted.profile().map(|p| p.email.as_str()),
        Some("ravi@example.com")
    );

    session.logout().expect("logout");
    let after_logout = SessionManager::new(store).expect("reopen session");
    assert!(after_logout.profile().is_none());
    assert_eq!(
        after_logout
            .remembered_faculty()
            .expect("faculty")
            .as_deref(),
        Some("Performing Arts")
    );
}

#[test]
fn test_wizard_entry_is_refused_without_a_session() {
    let (_store, session) = common::setup_test_env();
    assert!(matches!(
        session.require_profile(),
        Err(AdmissionError::SessionRequired)
    ));
}

fn submitted(name: &str, score: Option<f64>) -> ApplicationSummary {
    ApplicationSummary {
        id: Uuid::new_v4(),
        applicant_name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        faculty: "Design".into(),
        institute: "School of Design".into(),
        first_preference: Some("Product Design".into()),
        merit_score: score,
        status: ReviewStatus::Pending,
        submitted_at: Utc::now(),
    }
}

#[test]
fn test_reviewer_moderation_round_trips_through_the_store() {
    let (store, _session) = common::setup_test_env();
    let mut board = ReviewBoard::new();
    let asha = board.add(submitted("Asha", Some(182.0)));
    let ravi = board.add(submitted("Ravi", Some(201.0)));
    board.add(submitted("Neha", None));

    board.set_status(asha, ReviewStatus::Accepted);
    board.set_status(ravi, ReviewStatus::Rejected);
    store.put_json("applications", &board).expect("persist board");

    let reloaded: ReviewBoard = store
        .get_json("applications")
        .expect("load board")
        .expect("board present");
    assert_eq!(reloaded.all().len(), 3);
    assert_eq!(reloaded.accepted().len(), 1);
    assert_eq!(reloaded.rejected().len(), 1);
    assert_eq!(reloaded.accepted()[0].applicant_name, "Asha");
}

#[test]
fn test_reviewer_panel_allows_free_navigation() {
    let mut controller = WizardController::new(SectionRegistry::review());
    let titles: Vec<&str> = controller
        .registry()
        .sections()
        .iter()
        .map(|section| section.title)
        .collect();
    assert_eq!(
        titles,
        [
            "Enquiry",
            "View All Forms",
            "View Accepted Forms",
            "View Rejected Forms",
            "Merit List",
        ]
    );

    // Reviewers jump anywhere; no section gates another.
    assert!(controller.select(5));
    assert_eq!(controller.current_section().title, "Merit List");
    assert!(controller.select(2));
    assert_eq!(controller.current_section().title, "View All Forms");
}
