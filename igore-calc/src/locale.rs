//! User-facing words, in English and in French.

use crate::calculator::{format_value, CalcError};
use crate::keypad::Status;
use serde::{Deserialize, Serialize};

/// Longest panic detail echoed on the status line.
const DETAIL_LIMIT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[value(name = "en", alias = "english")]
    English,
    #[value(name = "fr", alias = "french")]
    French,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::French];

    /// Name of the language in that language, for the menu.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::French => "Français",
        }
    }

    /// Replaces the error sentinel on screen.
    pub fn error_word(self) -> &'static str {
        match self {
            Locale::English => "Error",
            Locale::French => "Erreur",
        }
    }

    pub fn status_text(self, status: &Status) -> String {
        match self {
            Locale::English => english(status),
            Locale::French => french(status),
        }
    }
}

fn english(status: &Status) -> String {
    match status {
        Status::Ready => "Ready".to_string(),
        Status::Digit(d) => format!("Entered digit: {}", d.as_char()),
        Status::Decimal => "Decimal point added".to_string(),
        Status::Operator(op) => format!("Operation: {}", op.symbol()),
        Status::Result => "Result computed".to_string(),
        Status::CalcFailed(e) => match e {
            CalcError::DivisionByZero => "Cannot divide by zero".to_string(),
            CalcError::NegativeSquareRoot => "No square root of a negative number".to_string(),
            CalcError::Overflow => "Result too large".to_string(),
            CalcError::InvalidNumber(_) => "Calculation error".to_string(),
        },
        Status::Locked => "Press AC to continue".to_string(),
        Status::Cleared => "Calculator reset".to_string(),
        Status::Negated => "Sign inverted".to_string(),
        Status::SquareRoot { input, output } => {
            format!("√{} = {}", format_value(*input), format_value(*output))
        }
        Status::Squared { input, output } => {
            format!("{}² = {}", format_value(*input), format_value(*output))
        }
        Status::Internal(detail) => format!("Error: {}", truncate(detail)),
    }
}

fn french(status: &Status) -> String {
    match status {
        Status::Ready => "Prêt".to_string(),
        Status::Digit(d) => format!("Nombre saisi : {}", d.as_char()),
        Status::Decimal => "Point décimal ajouté".to_string(),
        Status::Operator(op) => format!("Opération : {}", op.symbol()),
        Status::Result => "Résultat calculé".to_string(),
        Status::CalcFailed(e) => match e {
            CalcError::DivisionByZero => "Division par zéro impossible".to_string(),
            CalcError::NegativeSquareRoot => "Racine de nombre négatif impossible".to_string(),
            CalcError::Overflow => "Résultat trop grand".to_string(),
            CalcError::InvalidNumber(_) => "Erreur de calcul".to_string(),
        },
        Status::Locked => "Appuyez sur AC pour continuer".to_string(),
        Status::Cleared => "Calculatrice remise à zéro".to_string(),
        Status::Negated => "Signe inversé".to_string(),
        Status::SquareRoot { input, output } => {
            format!("√{} = {}", format_value(*input), format_value(*output))
        }
        Status::Squared { input, output } => {
            format!("{}² = {}", format_value(*input), format_value(*output))
        }
        Status::Internal(detail) => format!("Erreur : {}", truncate(detail)),
    }
}

fn truncate(detail: &str) -> String {
    detail.chars().take(DETAIL_LIMIT).collect()
}
