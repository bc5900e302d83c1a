//! One pure predicate per wizard section.
//!
//! Every predicate consumes the current [`FormState`] and answers "may the
//! applicant advance past this section". Predicates are re-evaluated on every
//! relevant change; nothing is cached. A `false` is an ordinary outcome, not
//! an error, and it never propagates past the section boundary: the
//! controller only ever sees the boolean.

use crate::attachment::SCORECARD_POLICY;
use crate::catalog;
use crate::form::{Category, FormState};

/// Minimum age in years.
pub const MIN_AGE: u32 = 17;
/// Minimum percentage in the qualifying examination.
pub const MIN_PERCENTAGE: f64 = 60.0;
/// Minimum entrance examination score.
pub const MIN_ENTRANCE_SCORE: u32 = 100;

/// Institute chosen and at least one ranked preference. The upper bound of
/// eight is enforced when preferences are inserted, not here.
pub fn program_selection_valid(state: &FormState) -> bool {
    let selection = &state.program_selection;
    !selection.selected_institute.is_empty() && !selection.preferences.is_empty()
}

/// All 18 required identity fields non-blank after trimming.
pub fn personal_details_valid(state: &FormState) -> bool {
    state
        .personal_details
        .required_fields()
        .iter()
        .all(|field| !field.trim().is_empty())
}

/// Age, percentage, and entrance score clear their thresholds and both exams
/// are selected. Non-numeric input fails the comparison quietly.
pub fn eligibility_valid(state: &FormState) -> bool {
    let criteria = &state.eligibility_criteria;
    let age = criteria.age.trim().parse::<u32>();
    let percentage = criteria.percentage.trim().parse::<f64>();
    let score = criteria.entrance_score.trim().parse::<u32>();
    !criteria.qualifying_exam.is_empty()
        && age.map(|value| value >= MIN_AGE).unwrap_or(false)
        && percentage.map(|value| value >= MIN_PERCENTAGE).unwrap_or(false)
        && !criteria.entrance_exam.is_empty()
        && score.map(|value| value >= MIN_ENTRANCE_SCORE).unwrap_or(false)
}

/// General passes outright. Everyone else needs a certificate, and OBC/PwD
/// additionally need a subcategory.
pub fn category_valid(state: &FormState) -> bool {
    let selection = &state.category_selection;
    let category = match selection.category {
        Some(category) => category,
        None => return false,
    };
    if category == Category::General {
        return true;
    }
    if selection.certificate.is_none() {
        return false;
    }
    !catalog::subcategory_required(category) || !selection.subcategory.trim().is_empty()
}

/// At least one record, and every record complete.
pub fn education_history_valid(state: &FormState) -> bool {
    !state.education_history.is_empty()
        && state.education_history.iter().all(|record| record.is_complete())
}

/// All mandatory text fields filled and a policy-valid scorecard attached.
pub fn entrance_details_valid(state: &FormState) -> bool {
    let details = &state.entrance_details;
    let fields_filled = !details.exam_type.trim().is_empty()
        && !details.roll_number.trim().is_empty()
        && !details.year_of_exam.trim().is_empty()
        && !details.score_type.trim().is_empty()
        && !details.score.trim().is_empty();
    let scorecard_ok = details
        .scorecard
        .as_ref()
        .map(|scorecard| SCORECARD_POLICY.check(scorecard).is_ok())
        .unwrap_or(false);
    fields_filled && scorecard_ok
}

/// All four named documents attached.
pub fn upload_documents_valid(state: &FormState) -> bool {
    state.upload_documents.all_attached()
}

pub fn declarations_valid(state: &FormState) -> bool {
    state.declarations.agreed
}

/// Informational sections (guidelines, review, payment, reviewer views).
pub fn always_valid(_state: &FormState) -> bool {
    true
}
