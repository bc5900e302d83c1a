use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// Reservation categories recognised by the admission flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Sc,
    St,
    Obc,
    Pwd,
    Ews,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Sc,
        Category::St,
        Category::Obc,
        Category::Pwd,
        Category::Ews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Sc => "sc",
            Category::St => "st",
            Category::Obc => "obc",
            Category::Pwd => "pwd",
            Category::Ews => "ews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Sc => "Scheduled Caste (SC)",
            Category::St => "Scheduled Tribe (ST)",
            Category::Obc => "Other Backward Class (OBC)",
            Category::Pwd => "Person with Disability (PwD)",
            Category::Ews => "Economically Weaker Section (EWS)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| format!("unknown category `{value}`"))
    }
}

/// The category step's slice of form state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySelection {
    pub category: Option<Category>,
    pub subcategory: String,
    pub certificate: Option<Attachment>,
}

impl CategorySelection {
    /// Changes the category. Any downstream choices (subcategory, certificate)
    /// are cleared so stale combinations cannot survive the switch.
    pub fn set_category(&mut self, category: Option<Category>) {
        if self.category != category {
            self.subcategory.clear();
            self.certificate = None;
        }
        self.category = category;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::FileKind;

    #[test]
    fn category_codes_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().ok(), Some(category));
        }
    }

    #[test]
    fn changing_category_resets_downstream_fields() {
        let mut selection = CategorySelection {
            category: Some(Category::Obc),
            subcategory: "obc-ncl".into(),
            certificate: Some(Attachment::new("cert.pdf", FileKind::Pdf, 40_000)),
        };
        selection.set_category(Some(Category::Sc));
        assert_eq!(selection.category, Some(Category::Sc));
        assert!(selection.subcategory.is_empty());
        assert!(selection.certificate.is_none());
    }

    #[test]
    fn reselecting_same_category_keeps_fields() {
        let mut selection = CategorySelection {
            category: Some(Category::Pwd),
            subcategory: "pwd-visual".into(),
            certificate: None,
        };
        selection.set_category(Some(Category::Pwd));
        assert_eq!(selection.subcategory, "pwd-visual");
    }
}
