use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use crate::errors::AdmissionError;

fn map_err(err: dialoguer::Error) -> AdmissionError {
    match err {
        dialoguer::Error::IO(inner) => AdmissionError::Io(inner),
    }
}

/// Prompt for free-form text; empty input is allowed (fields may be filled
/// later, validity is checked at the section gate).
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, AdmissionError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(map_err)
}

pub fn prompt_password(theme: &ColorfulTheme, prompt: &str) -> Result<String, AdmissionError> {
    Password::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(map_err)
}

/// Single choice from a list; returns the selected index.
pub fn choose(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[&str],
) -> Result<usize, AdmissionError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(map_err)
}

pub fn confirm(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, AdmissionError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(map_err)
}
