use colored::Colorize;
use std::fmt;

/// Standard CLI output helpers. Everything user-visible in the shell goes
/// through these so styling stays in one place.

pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[ok]".green(), message);
}

pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

/// Section banner with the wizard's position and derived progress.
pub fn section_header(ordinal: u8, total: u8, title: &str, progress_percent: u8) {
    println!();
    println!(
        "{}  {}",
        format!("[{ordinal}/{total}]").bold(),
        title.bold()
    );
    println!("{}", format!("{progress_percent}% completed").dimmed());
}

pub fn field_error(message: impl fmt::Display) {
    println!("{} {}", "  ->".red(), message);
}
