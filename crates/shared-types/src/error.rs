use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    UnknownSection,
    InvalidConfig,
    InvalidDate,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::UnknownSection => write!(f, "UnknownSection"),
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            AppErrorKind::InvalidDate => write!(f, "InvalidDate"),
        }
    }
}

/// Structured error for the few fallible boundaries of the dashboard
/// (section ids, config parsing, display dates). None of these reach the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn unknown_section(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::UnknownSection,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidDate,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::invalid_config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::unknown_section("no section named 'billing'");
        assert_eq!(err.to_string(), "UnknownSection: no section named 'billing'");
    }

    #[test]
    fn json_payload_roundtrips() {
        let err = AppError::invalid_date("32.13.2025");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, err);
    }

    #[test]
    fn toml_errors_become_invalid_config() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: AppError = toml_err.into();
        assert_eq!(err.kind, AppErrorKind::InvalidConfig);
    }
}
