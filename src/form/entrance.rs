use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// Entrance examination details, including the scorecard upload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntranceDetails {
    pub exam_type: String,
    pub roll_number: String,
    pub year_of_exam: String,
    pub score_type: String,
    pub score: String,
    pub rank: String,
    pub validity_period: String,
    /// Scorecard upload; bound to the scorecard size/type policy.
    pub scorecard: Option<Attachment>,
}
