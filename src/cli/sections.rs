//! Interactive editors, one per admission section.
//!
//! Editors only collect input and write it into the store; whether the
//! applicant may move on is always answered by the validation engine, the
//! same predicates the navigation gate uses.

use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use crate::attachment::{
    AttachmentLoader, AttachmentSlot, CERTIFICATE_POLICY, DOCUMENT_POLICY, SCORECARD_POLICY,
};
use crate::catalog;
use crate::errors::AdmissionError;
use crate::form::{
    Category, Declarations, EducationRecord, FormStateStore, ProgramChoice, SectionData,
};
use crate::validation;

use super::{io, output};

type SectionResult = Result<SectionOutcome, AdmissionError>;

/// What a section visit decided. Only the terminal payment step can decline;
/// every other section just hands control back to the navigation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOutcome {
    Continue,
    FeePaid,
    FeeDeclined,
}

/// Runs the editor for the admission section at `ordinal`.
pub fn run_section(
    ordinal: u8,
    store: &mut FormStateStore,
    loader: &mut AttachmentLoader,
    theme: &ColorfulTheme,
) -> SectionResult {
    match ordinal {
        1 => guidelines(),
        2 => program_selection(store, theme),
        3 => personal_details(store, theme),
        4 => eligibility_criteria(store, theme),
        5 => category_selection(store, loader, theme),
        6 => education_history(store, theme),
        7 => entrance_details(store, loader, theme),
        8 => upload_documents(store, loader, theme),
        9 => declarations(store, theme),
        10 => review_summary(store),
        11 => make_payment(store, theme),
        _ => Err(AdmissionError::InvalidRef(format!(
            "no admission section at ordinal {ordinal}"
        ))),
    }
}

fn guidelines() -> SectionResult {
    output::info("Keep your identity details, marksheets, and entrance scorecard at hand.");
    output::info("Uploads are accepted as PNG, JPG, or PDF within the stated size limits.");
    output::info("You can return to any completed section without losing its data.");
    Ok(SectionOutcome::Continue)
}

fn program_selection(store: &mut FormStateStore, theme: &ColorfulTheme) -> SectionResult {
    let faculty = store.state().selected_faculty.clone();
    let institutes = catalog::institutes_for(&faculty);
    if institutes.is_empty() {
        output::warning(format!("no institutes found for faculty `{faculty}`"));
        return Ok(SectionOutcome::Continue);
    }

    let mut selection = store.state().program_selection.clone();
    let picked = io::choose(theme, "Select institute", institutes)?;
    selection.set_institute(institutes[picked]);

    loop {
        let programs = catalog::programs_for(&selection.selected_institute);
        let mut items: Vec<&str> = programs.iter().map(|p| p.name.as_str()).collect();
        items.push("Done");
        let choice = io::choose(theme, "Add a program preference", &items)?;
        if choice == programs.len() {
            break;
        }
        let program: &ProgramChoice = &programs[choice];
        selection.selected_program = Some(program.id.clone());
        match selection.add_preference(program.clone()) {
            Ok(()) => output::success(format!(
                "preference {} added: {}",
                selection.preferences.len(),
                program.name
            )),
            Err(reason) => output::field_error(reason),
        }
        selection.selected_program = None;
    }

    store.update(SectionData::ProgramSelection(selection));
    section_feedback(validation::program_selection_valid(store.state()));
    Ok(SectionOutcome::Continue)
}

fn personal_details(store: &mut FormStateStore, theme: &ColorfulTheme) -> SectionResult {
    let mut details = store.state().personal_details.clone();
    details.first_name = io::prompt_text(theme, "First name")?;
    details.middle_name = io::prompt_text(theme, "Middle name (optional)")?;
    details.last_name = io::prompt_text(theme, "Last name")?;
    details.student_name = io::prompt_text(theme, "Student name (as on marksheet)")?;
    details.mother_name = io::prompt_text(theme, "Mother's name")?;
    details.personal_email = io::prompt_text(theme, "Personal email")?;
    details.mobile_number = io::prompt_text(theme, "Mobile number")?;
    details.address = io::prompt_text(theme, "Address")?;
    details.date_of_birth = io::prompt_text(theme, "Date of birth (YYYY-MM-DD)")?;
    details.birth_place = io::prompt_text(theme, "Birth place")?;
    details.gender = io::prompt_text(theme, "Gender")?;
    details.aadhar_number = io::prompt_text(theme, "Aadhar number")?;
    details.category = io::prompt_text(theme, "Category")?;
    details.religion = io::prompt_text(theme, "Religion")?;
    details.nationality = io::prompt_text(theme, "Nationality")?;
    details.domicile = io::prompt_text(theme, "Domicile state")?;
    details.family_income = io::prompt_text(theme, "Annual family income")?;
    details.rural_urban = io::prompt_text(theme, "Rural or urban")?;
    details.admission_source = io::prompt_text(theme, "How did you hear about us")?;
    store.update(SectionData::PersonalDetails(details));
    section_feedback(validation::personal_details_valid(store.state()));
    Ok(SectionOutcome::Continue)
}

fn eligibility_criteria(store: &mut FormStateStore, theme: &ColorfulTheme) -> SectionResult {
    output::info(format!(
        "Requirements: age >= {}, qualifying percentage >= {}, entrance score >= {}.",
        validation::MIN_AGE,
        validation::MIN_PERCENTAGE,
        validation::MIN_ENTRANCE_SCORE
    ));
    let mut criteria = store.state().eligibility_criteria.clone();
    criteria.age = io::prompt_text(theme, "Your age (years)")?;
    let exams = ["highSchool", "diploma", "bachelor"];
    criteria.qualifying_exam = exams[io::choose(theme, "Qualifying examination", &exams)?].into();
    criteria.percentage = io::prompt_text(theme, "Percentage in qualifying exam")?;
    let entrance = ["jee", "neet", "cat", "gate", "other"];
    criteria.entrance_exam = entrance[io::choose(theme, "Entrance examination", &entrance)?].into();
    criteria.entrance_score = io::prompt_text(theme, "Entrance examination score")?;
    criteria.residency = io::confirm(theme, "Are you a resident of the state?", false)?;
    store.update(SectionData::EligibilityCriteria(criteria));

    if validation::eligibility_valid(store.state()) {
        output::success("you appear to be eligible for the program");
    } else {
        output::warning("you may not meet all eligibility criteria; review the requirements");
    }
    Ok(SectionOutcome::Continue)
}

fn category_selection(
    store: &mut FormStateStore,
    loader: &mut AttachmentLoader,
    theme: &ColorfulTheme,
) -> SectionResult {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let picked = Category::ALL[io::choose(theme, "Select category", &labels)?];

    let mut selection = store.state().category_selection.clone();
    selection.set_category(Some(picked));

    if catalog::subcategory_required(picked) {
        let subcategories = catalog::subcategories_for(picked);
        let sub_labels: Vec<&str> = subcategories.iter().map(|s| s.label).collect();
        let choice = io::choose(theme, "Select sub-category", &sub_labels)?;
        selection.subcategory = subcategories[choice].id.to_string();
    }
    store.update(SectionData::CategorySelection(selection));

    if catalog::certificate_required(picked) {
        output::info("a category certificate issued by a competent authority is required");
        let path = io::prompt_text(theme, "Path to category certificate")?;
        if !path.trim().is_empty() {
            loader.request(
                AttachmentSlot::CategoryCertificate,
                PathBuf::from(path.trim()),
                CERTIFICATE_POLICY,
            );
            report_outcomes(loader, store);
        }
    }
    section_feedback(validation::category_valid(store.state()));
    Ok(SectionOutcome::Continue)
}

fn education_history(store: &mut FormStateStore, theme: &ColorfulTheme) -> SectionResult {
    let mut records = store.state().education_history.clone();
    loop {
        output::info(format!("education records so far: {}", records.len()));
        let record = EducationRecord {
            level: io::prompt_text(theme, "Education level (e.g. 10th, 10+2)")?,
            institution: io::prompt_text(theme, "Institution")?,
            board: io::prompt_text(theme, "Board/University")?,
            year_of_passing: io::prompt_text(theme, "Year of passing")?,
            percentage: io::prompt_text(theme, "Percentage")?,
            subjects: io::prompt_text(theme, "Subjects (optional)")?,
        };
        if record.is_complete() {
            records.push(record);
        } else {
            output::field_error("record discarded: every field except subjects is required");
        }
        if !io::confirm(theme, "Add another record?", false)? {
            break;
        }
    }
    store.update(SectionData::EducationHistory(records));
    section_feedback(validation::education_history_valid(store.state()));
    Ok(SectionOutcome::Continue)
}

fn entrance_details(
    store: &mut FormStateStore,
    loader: &mut AttachmentLoader,
    theme: &ColorfulTheme,
) -> SectionResult {
    let mut details = store.state().entrance_details.clone();
    let exams = [
        "jee-main", "jee-adv", "neet", "gate", "cat", "cet", "other",
    ];
    details.exam_type = exams[io::choose(theme, "Entrance examination", &exams)?].into();
    details.roll_number = io::prompt_text(theme, "Roll/registration number")?;
    details.year_of_exam = io::prompt_text(theme, "Year of examination")?;
    let score_types = ["percentile", "percentage", "marks", "rank"];
    details.score_type = score_types[io::choose(theme, "Score type", &score_types)?].into();
    details.score = io::prompt_text(theme, "Score")?;
    details.rank = io::prompt_text(theme, "Rank (optional)")?;
    details.validity_period = io::prompt_text(theme, "Validity period (optional)")?;
    store.update(SectionData::EntranceDetails(details));

    output::info("scorecard must be PNG/JPG/PDF, strictly between 50 and 150 KB");
    let path = io::prompt_text(theme, "Path to entrance scorecard")?;
    if !path.trim().is_empty() {
        loader.request(
            AttachmentSlot::Scorecard,
            PathBuf::from(path.trim()),
            SCORECARD_POLICY,
        );
        report_outcomes(loader, store);
    }
    section_feedback(validation::entrance_details_valid(store.state()));
    Ok(SectionOutcome::Continue)
}

fn upload_documents(
    store: &mut FormStateStore,
    loader: &mut AttachmentLoader,
    theme: &ColorfulTheme,
) -> SectionResult {
    output::info("upload all four documents as PNG, JPG, or PDF (max 300 KB each)");
    let slots = [
        (AttachmentSlot::MatricMarksheet, "10th (Matric) marksheet"),
        (AttachmentSlot::SeniorMarksheet, "12th (Senior) marksheet"),
        (AttachmentSlot::EntranceScorecard, "Entrance exam scorecard"),
        (AttachmentSlot::TransferCertificate, "Transfer certificate"),
    ];
    for (slot, label) in slots {
        let path = io::prompt_text(theme, &format!("Path to {label}"))?;
        if !path.trim().is_empty() {
            loader.request(slot, PathBuf::from(path.trim()), DOCUMENT_POLICY);
        }
    }
    report_outcomes(loader, store);
    section_feedback(validation::upload_documents_valid(store.state()));
    Ok(SectionOutcome::Continue)
}

fn declarations(store: &mut FormStateStore, theme: &ColorfulTheme) -> SectionResult {
    output::info(
        "I hereby declare that the information provided in this application is true, \
         correct, and complete to the best of my knowledge.",
    );
    let agreed = io::confirm(theme, "Do you agree to the declaration?", false)?;
    store.update(SectionData::Declarations(Declarations { agreed }));
    section_feedback(validation::declarations_valid(store.state()));
    Ok(SectionOutcome::Continue)
}

fn review_summary(store: &FormStateStore) -> SectionResult {
    let state = store.state();
    output::info(format!("Faculty: {}", display_or_na(&state.selected_faculty)));
    output::info(format!(
        "Institute: {}",
        display_or_na(&state.program_selection.selected_institute)
    ));
    for (rank, preference) in state.program_selection.preferences.iter().enumerate() {
        output::info(format!("  preference {}: {}", rank + 1, preference.name));
    }
    output::info(format!(
        "Applicant: {} {}",
        state.personal_details.first_name, state.personal_details.last_name
    ));
    output::info(format!(
        "Education records: {}",
        state.education_history.len()
    ));
    output::info(format!(
        "Category: {}",
        state
            .category_selection
            .category
            .map(|c| c.label())
            .unwrap_or("N/A")
    ));
    output::info(format!(
        "Documents attached: {}",
        if state.upload_documents.all_attached() {
            "all four"
        } else {
            "incomplete"
        }
    ));
    Ok(SectionOutcome::Continue)
}

fn make_payment(store: &FormStateStore, theme: &ColorfulTheme) -> SectionResult {
    let name = &store.state().personal_details.student_name;
    output::info(format!("application fee payment for {}", display_or_na(name)));
    if io::confirm(theme, "Pay the application fee now?", true)? {
        output::success("payment recorded; your application is submitted");
        Ok(SectionOutcome::FeePaid)
    } else {
        output::warning("payment pending; the application is not submitted yet");
        Ok(SectionOutcome::FeeDeclined)
    }
}

fn report_outcomes(loader: &mut AttachmentLoader, store: &mut FormStateStore) {
    for outcome in loader.drain(store) {
        match outcome.result {
            Ok(attachment) => output::success(format!("attached {}", attachment.file_name)),
            Err(rejection) => output::field_error(rejection),
        }
    }
}

fn section_feedback(valid: bool) {
    if valid {
        output::success("section complete; you can proceed");
    } else {
        output::warning("section incomplete; Next stays disabled until it is");
    }
}

fn display_or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}
