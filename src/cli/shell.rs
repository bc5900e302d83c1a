use std::path::Path;

use dialoguer::theme::ColorfulTheme;
use tracing::info;

use crate::attachment::{load_attachment, AttachmentLoader, IMAGE_POLICY};
use crate::catalog;
use crate::errors::AdmissionError;
use crate::form::{FormState, FormStateStore};
use crate::review::{ApplicationSummary, ReviewBoard, ReviewStatus};
use crate::session::{DashboardUploads, SessionManager, SessionProfile};
use crate::storage::LocalStore;
use crate::wizard::{SectionRegistry, WizardController};

use super::sections::SectionOutcome;
use super::{io, output, sections};

const APPLICATIONS_KEY: &str = "applications";

/// Entry point for the interactive shell.
pub fn run_cli() -> Result<(), AdmissionError> {
    let store = LocalStore::open_default()?;
    let mut session = SessionManager::new(store.clone())?;
    let theme = ColorfulTheme::default();

    loop {
        if session.profile().is_none() && !login_screen(&mut session, &theme)? {
            return Ok(());
        }
        match home_menu(&session, &theme)? {
            HomeAction::Apply => {
                if dashboard_gate(&theme)? {
                    if let Some(summary) = run_wizard(&session, &theme)? {
                        let mut board: ReviewBoard =
                            store.get_json(APPLICATIONS_KEY)?.unwrap_or_default();
                        board.add(summary);
                        store.put_json(APPLICATIONS_KEY, &board)?;
                        output::success("application stored for review");
                    }
                }
            }
            HomeAction::ReviewPanel => run_review_panel(&store, &theme)?,
            HomeAction::Logout => {
                session.logout()?;
                output::info("logged out");
            }
            HomeAction::Exit => return Ok(()),
        }
    }
}

enum HomeAction {
    Apply,
    ReviewPanel,
    Logout,
    Exit,
}

fn login_screen(
    session: &mut SessionManager,
    theme: &ColorfulTheme,
) -> Result<bool, AdmissionError> {
    output::info("Login to MGM University");
    output::info("use any email and password \"password\" to login");
    if let Some(faculty) = session.remembered_faculty()? {
        output::info(format!("previously selected faculty: {faculty}"));
    }

    loop {
        let email = io::prompt_text(theme, "Email")?;
        let name = io::prompt_text(theme, "Name")?;
        let faculty_index = io::choose(theme, "Faculty", &catalog::FACULTIES)?;
        let faculty = catalog::FACULTIES[faculty_index];
        session.remember_faculty(faculty)?;
        let password = io::prompt_password(theme, "Password")?;

        if session.login(&email, &password, &name, faculty)? {
            output::success(format!("welcome, {name}"));
            return Ok(true);
        }
        output::error("Invalid credentials");
        if !io::confirm(theme, "Try again?", true)? {
            return Ok(false);
        }
    }
}

fn home_menu(
    session: &SessionManager,
    theme: &ColorfulTheme,
) -> Result<HomeAction, AdmissionError> {
    let profile = session.require_profile()?;
    output::info(format!(
        "logged in as {} <{}> ({})",
        profile.name, profile.email, profile.selected_faculty
    ));
    let items = [
        "Continue application",
        "Review panel",
        "Logout",
        "Exit",
    ];
    Ok(match io::choose(theme, "Home", &items)? {
        0 => HomeAction::Apply,
        1 => HomeAction::ReviewPanel,
        2 => HomeAction::Logout,
        _ => HomeAction::Exit,
    })
}

/// Photo + signature prerequisite before the wizard opens.
fn dashboard_gate(theme: &ColorfulTheme) -> Result<bool, AdmissionError> {
    let mut uploads = DashboardUploads::default();
    output::info("upload a profile photo and signature to continue (PNG/JPG, max 1 MB)");

    while !uploads.can_continue() {
        let slot = if uploads.photo.is_none() {
            "profile photo"
        } else {
            "signature"
        };
        let path = io::prompt_text(theme, &format!("Path to {slot}"))?;
        if path.trim().is_empty() {
            output::warning("upload profile photo and signature to continue the application");
            if !io::confirm(theme, "Keep going?", true)? {
                return Ok(false);
            }
            continue;
        }
        match load_attachment(Path::new(path.trim()), &IMAGE_POLICY) {
            Ok(attachment) => {
                output::success(format!("attached {}", attachment.file_name));
                if uploads.photo.is_none() {
                    uploads.photo = Some(attachment);
                } else {
                    uploads.signature = Some(attachment);
                }
                output::info(format!("{}% completed", uploads.progress_percent()));
            }
            Err(rejection) => output::field_error(rejection),
        }
    }
    Ok(true)
}

fn run_wizard(
    session: &SessionManager,
    theme: &ColorfulTheme,
) -> Result<Option<ApplicationSummary>, AdmissionError> {
    let profile = session.require_profile()?.clone();
    let mut store = FormStateStore::new();
    store.set_faculty(profile.selected_faculty.clone());
    let mut loader = AttachmentLoader::new();
    let mut controller = WizardController::new(SectionRegistry::admission());
    info!(faculty = %profile.selected_faculty, "admission wizard opened");

    loop {
        let ordinal = controller.current_ordinal();
        let title = controller.current_section().title;
        output::section_header(
            ordinal,
            controller.registry().len(),
            title,
            controller.progress_percent(),
        );
        let outcome = sections::run_section(ordinal, &mut store, &mut loader, theme)?;

        let can_advance = controller.can_advance(store.state());
        if controller.at_end() && can_advance {
            if let Some(summary) = submission(outcome, &profile, store.state()) {
                return Ok(Some(summary));
            }
            output::warning("the application is stored for review only after the fee is paid");
        }

        let mut items = Vec::new();
        if can_advance && !controller.at_end() {
            items.push("Next");
        }
        if !controller.at_start() {
            items.push("Previous");
        }
        items.push("Edit this section again");
        items.push("Leave the wizard");

        match items[io::choose(theme, "Navigation", &items)?] {
            "Next" => {
                if !controller.advance(store.state()) {
                    output::warning("this section is incomplete; Next is disabled");
                }
            }
            "Previous" => {
                controller.retreat();
            }
            "Edit this section again" => {}
            _ => return Ok(None),
        }
    }
}

/// The terminal gate: a review snapshot exists only once the fee is paid.
fn submission(
    outcome: SectionOutcome,
    profile: &SessionProfile,
    state: &FormState,
) -> Option<ApplicationSummary> {
    matches!(outcome, SectionOutcome::FeePaid)
        .then(|| ApplicationSummary::from_form(profile, state))
}

fn run_review_panel(store: &LocalStore, theme: &ColorfulTheme) -> Result<(), AdmissionError> {
    let mut board: ReviewBoard = store.get_json(APPLICATIONS_KEY)?.unwrap_or_default();
    let mut controller = WizardController::new(SectionRegistry::review());

    loop {
        let registry_titles: Vec<&str> = controller
            .registry()
            .sections()
            .iter()
            .map(|section| section.title)
            .collect();
        let mut items = registry_titles.clone();
        items.push("Back to home");
        let choice = io::choose(theme, "Review panel", &items)?;
        if choice == registry_titles.len() {
            store.put_json(APPLICATIONS_KEY, &board)?;
            return Ok(());
        }
        controller.select(choice as u8 + 1);

        match controller.current_section().title {
            "Enquiry" => {
                output::info(format!("applications received: {}", board.all().len()));
                output::info(format!("accepted: {}", board.accepted().len()));
                output::info(format!("rejected: {}", board.rejected().len()));
            }
            "View All Forms" => {
                list_applications(board.all().iter().collect());
                moderate(&mut board, theme)?;
            }
            "View Accepted Forms" => list_applications(board.accepted()),
            "View Rejected Forms" => list_applications(board.rejected()),
            "Merit List" => {
                for (rank, application) in board.merit_list().iter().enumerate() {
                    output::info(format!(
                        "{}. {} - {} ({})",
                        rank + 1,
                        application.applicant_name,
                        application
                            .merit_score
                            .map(|score| score.to_string())
                            .unwrap_or_else(|| "unscored".into()),
                        application.institute
                    ));
                }
            }
            _ => {}
        }
    }
}

fn list_applications(applications: Vec<&ApplicationSummary>) {
    if applications.is_empty() {
        output::info("no applications in this view");
        return;
    }
    for application in applications {
        output::info(format!(
            "{} <{}> - {} / {} [{:?}]",
            application.applicant_name,
            application.email,
            application.faculty,
            application.institute,
            application.status
        ));
    }
}

fn moderate(board: &mut ReviewBoard, theme: &ColorfulTheme) -> Result<(), AdmissionError> {
    let pending: Vec<_> = board
        .all()
        .iter()
        .filter(|application| application.status == ReviewStatus::Pending)
        .map(|application| (application.id, application.applicant_name.clone()))
        .collect();
    if pending.is_empty() {
        return Ok(());
    }
    if !io::confirm(theme, "Moderate a pending application?", false)? {
        return Ok(());
    }
    let names: Vec<&str> = pending.iter().map(|(_, name)| name.as_str()).collect();
    let picked = io::choose(theme, "Pending applications", &names)?;
    let verdicts = ["Accept", "Reject", "Leave pending"];
    let verdict = io::choose(theme, "Verdict", &verdicts)?;
    let status = match verdict {
        0 => ReviewStatus::Accepted,
        1 => ReviewStatus::Rejected,
        _ => return Ok(()),
    };
    board.set_status(pending[picked].0, status);
    output::success("status updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn profile() -> SessionProfile {
        SessionProfile {
            id: Uuid::new_v4(),
            name: "Asha Kulkarni".into(),
            email: "asha@example.com".into(),
            selected_faculty: "Design".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn declined_fee_does_not_produce_a_submission() {
        let state = FormState::default();
        assert!(submission(SectionOutcome::FeeDeclined, &profile(), &state).is_none());
        assert!(submission(SectionOutcome::Continue, &profile(), &state).is_none());
    }

    #[test]
    fn paid_fee_produces_the_review_snapshot() {
        let mut state = FormState::default();
        state.selected_faculty = "Design".into();
        let summary =
            submission(SectionOutcome::FeePaid, &profile(), &state).expect("summary");
        assert_eq!(summary.applicant_name, "Asha Kulkarni");
        assert_eq!(summary.faculty, "Design");
    }
}
