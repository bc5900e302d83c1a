use serde::{Deserialize, Serialize};

/// The applicant's declaration of truthfulness.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Declarations {
    pub agreed: bool,
}
