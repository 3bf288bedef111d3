//! Terminal rendering of registration state.

use console::{Term, style};
use portal::features::auth::{ErrorKey, FieldErrors, PasswordRequirements};
use std::io;

pub fn success(term: &Term, message: &str) -> io::Result<()> {
    term.write_line(&format!("{} {message}", style("✔").green().bold()))
}

pub fn info(term: &Term, message: &str) -> io::Result<()> {
    term.write_line(&format!("{} {message}", style("ℹ").cyan()))
}

pub fn error(term: &Term, message: &str) -> io::Result<()> {
    term.write_line(&format!("{} {message}", style("✖").red().bold()))
}

/// Caption shown next to errors of a bucket.
pub const fn error_label(key: ErrorKey) -> &'static str {
    match key {
        ErrorKey::Username => "Nume de utilizator",
        ErrorKey::Email => "Adresa de email",
        ErrorKey::Password => "Parolă",
        ErrorKey::General => "Eroare",
    }
}

pub fn checklist_lines(requirements: &PasswordRequirements) -> Vec<String> {
    requirements
        .checklist()
        .map(|(requirement, met)| {
            let mark = if met { style("✔").green() } else { style("✖").red() };
            format!("  {mark} {}", requirement.label())
        })
        .collect()
}

pub fn error_lines(errors: &FieldErrors) -> Vec<String> {
    errors
        .iter()
        .flat_map(|(key, messages)| {
            messages.iter().map(move |message| {
                format!("  {} {}: {message}", style("✖").red(), style(error_label(key)).bold())
            })
        })
        .collect()
}

pub fn write_lines(term: &Term, lines: &[String]) -> io::Result<()> {
    lines.iter().try_for_each(|line| term.write_line(line))
}
