use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// The four mandatory document uploads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadDocuments {
    pub matric_marksheet: Option<Attachment>,
    pub senior_marksheet: Option<Attachment>,
    pub entrance_scorecard: Option<Attachment>,
    pub transfer_certificate: Option<Attachment>,
}

impl UploadDocuments {
    pub fn all_attached(&self) -> bool {
        self.matric_marksheet.is_some()
            && self.senior_marksheet.is_some()
            && self.entrance_scorecard.is_some()
            && self.transfer_certificate.is_some()
    }
}
