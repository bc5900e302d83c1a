//! Static option tables and the conditional-field rules derived from them.
//!
//! Faculty filters institutes, institute filters programs, and category
//! decides whether a subcategory and a certificate are required. All lookups
//! are pure; resetting downstream selections when an upstream one changes is
//! the owning record's job (see `form::program` and `form::category`).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::form::{Category, ProgramChoice};

/// Top-level academic groupings offered on the login page.
pub const FACULTIES: [&str; 7] = [
    "Engineering & Technology",
    "Management & Commerce",
    "Basic & Applied Science",
    "Social Science & Humanities",
    "Interdisciplinary Studies",
    "Design",
    "Performing Arts",
];

static INSTITUTES: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            "Engineering & Technology",
            vec![
                "Jawaharlal Nehru Engineering College",
                "College of Polytechnic",
            ],
        ),
        (
            "Management & Commerce",
            vec!["Institute of Management & Research", "College of Commerce"],
        ),
        (
            "Basic & Applied Science",
            vec![
                "Institute of Biosciences & Technology",
                "College of Basic Sciences",
            ],
        ),
        (
            "Social Science & Humanities",
            vec![
                "College of Social Sciences",
                "College of Journalism & Mass Communication",
            ],
        ),
        (
            "Interdisciplinary Studies",
            vec!["School of Interdisciplinary Studies"],
        ),
        ("Design", vec!["School of Design"]),
        (
            "Performing Arts",
            vec!["College of Performing Arts", "School of Film Arts"],
        ),
    ])
});

static PROGRAMS: Lazy<HashMap<&'static str, Vec<ProgramChoice>>> = Lazy::new(|| {
    let program = ProgramChoice::new;
    HashMap::from([
        (
            "Jawaharlal Nehru Engineering College",
            vec![
                program("cs", "Computer Science & Engineering"),
                program("me", "Mechanical Engineering"),
                program("ee", "Electrical Engineering"),
                program("ce", "Civil Engineering"),
            ],
        ),
        (
            "College of Polytechnic",
            vec![
                program("dme", "Diploma in Mechanical Engineering"),
                program("dce", "Diploma in Civil Engineering"),
                program("dcs", "Diploma in Computer Engineering"),
            ],
        ),
        (
            "Institute of Management & Research",
            vec![
                program("bba", "Bachelor of Business Administration"),
                program("mba", "Master of Business Administration"),
                program("bcom", "Bachelor of Commerce"),
            ],
        ),
        (
            "College of Commerce",
            vec![
                program("acc", "Accounting"),
                program("fin", "Finance"),
                program("mkt", "Marketing"),
            ],
        ),
        (
            "Institute of Biosciences & Technology",
            vec![
                program("bio", "Biotechnology"),
                program("micro", "Microbiology"),
                program("chem", "Industrial Chemistry"),
            ],
        ),
        (
            "College of Basic Sciences",
            vec![
                program("phy", "Physics"),
                program("math", "Mathematics"),
                program("stat", "Statistics"),
            ],
        ),
        (
            "College of Social Sciences",
            vec![
                program("pol", "Political Science"),
                program("soc", "Sociology"),
                program("psy", "Psychology"),
            ],
        ),
        (
            "College of Journalism & Mass Communication",
            vec![
                program("jmc", "Journalism"),
                program("mc", "Mass Communication"),
            ],
        ),
        (
            "School of Interdisciplinary Studies",
            vec![
                program("la", "Liberal Arts"),
                program("cogs", "Cognitive Science"),
            ],
        ),
        (
            "School of Design",
            vec![
                program("pd", "Product Design"),
                program("cd", "Communication Design"),
                program("fd", "Fashion Design"),
            ],
        ),
        (
            "College of Performing Arts",
            vec![
                program("voc", "Vocal Music"),
                program("perc", "Percussion"),
            ],
        ),
        (
            "School of Film Arts",
            vec![program("fm", "Film Making"), program("act", "Acting")],
        ),
    ])
});

/// A selectable subcategory within a reservation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subcategory {
    pub id: &'static str,
    pub label: &'static str,
}

const OBC_SUBCATEGORIES: [Subcategory; 2] = [
    Subcategory {
        id: "obc-ncl",
        label: "OBC (Non-Creamy Layer)",
    },
    Subcategory {
        id: "obc-cl",
        label: "OBC (Creamy Layer)",
    },
];

const PWD_SUBCATEGORIES: [Subcategory; 3] = [
    Subcategory {
        id: "pwd-locomotor",
        label: "Locomotor Disability",
    },
    Subcategory {
        id: "pwd-visual",
        label: "Visual Impairment",
    },
    Subcategory {
        id: "pwd-hearing",
        label: "Hearing Impairment",
    },
];

/// Institutes selectable under `faculty`, in catalog order. Empty when the
/// faculty is unset or unknown.
pub fn institutes_for(faculty: &str) -> &'static [&'static str] {
    INSTITUTES
        .get(faculty)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Programs offered by `institute`, in catalog order. Empty when the
/// institute is unset or unknown.
pub fn programs_for(institute: &str) -> &'static [ProgramChoice] {
    PROGRAMS
        .get(institute)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Subcategories selectable under `category` (only OBC and PwD have any).
pub fn subcategories_for(category: Category) -> &'static [Subcategory] {
    match category {
        Category::Obc => &OBC_SUBCATEGORIES,
        Category::Pwd => &PWD_SUBCATEGORIES,
        _ => &[],
    }
}

/// True only for categories that branch into subcategories.
pub fn subcategory_required(category: Category) -> bool {
    matches!(category, Category::Obc | Category::Pwd)
}

/// Every category except `general` must attach a certificate.
pub fn certificate_required(category: Category) -> bool {
    category != Category::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_faculty_has_institutes() {
        for faculty in FACULTIES {
            assert!(
                !institutes_for(faculty).is_empty(),
                "faculty `{faculty}` has no institutes"
            );
        }
    }

    #[test]
    fn design_maps_to_exactly_one_exclusive_institute() {
        let design = institutes_for("Design");
        assert_eq!(design.len(), 1);
        for faculty in FACULTIES.iter().filter(|f| **f != "Design") {
            assert!(
                !institutes_for(faculty).contains(&design[0]),
                "`{}` leaked into faculty `{faculty}`",
                design[0]
            );
        }
    }

    #[test]
    fn every_institute_has_programs_with_unique_ids() {
        for faculty in FACULTIES {
            for institute in institutes_for(faculty) {
                let programs = programs_for(institute);
                assert!(
                    !programs.is_empty(),
                    "institute `{institute}` has no programs"
                );
                let mut ids: Vec<&str> = programs.iter().map(|p| p.id.as_str()).collect();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), programs.len(), "duplicate ids in `{institute}`");
            }
        }
    }

    #[test]
    fn unknown_faculty_and_institute_yield_empty_lists() {
        assert!(institutes_for("").is_empty());
        assert!(institutes_for("Astrology").is_empty());
        assert!(programs_for("").is_empty());
        assert!(programs_for("Unknown Institute").is_empty());
    }

    #[test]
    fn certificate_required_for_every_non_general_category() {
        for category in Category::ALL {
            assert_eq!(
                certificate_required(category),
                category != Category::General
            );
        }
    }

    #[test]
    fn subcategory_required_only_for_obc_and_pwd() {
        for category in Category::ALL {
            let expected = matches!(category, Category::Obc | Category::Pwd);
            assert_eq!(subcategory_required(category), expected);
            assert_eq!(!subcategories_for(category).is_empty(), expected);
        }
    }
}
