use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Empty email or password at login.
    InvalidCredentials,
    /// A login was attempted while another one was still pending.
    LoginInProgress,
    /// The pending login was discarded by a logout before it resolved.
    LoginCancelled,
    /// The authenticator did not answer within the configured timeout.
    Timeout,
    /// Core platform modules cannot be switched off.
    ModuleLocked,
    NotFound,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidCredentials => write!(f, "InvalidCredentials"),
            AppErrorKind::LoginInProgress => write!(f, "LoginInProgress"),
            AppErrorKind::LoginCancelled => write!(f, "LoginCancelled"),
            AppErrorKind::Timeout => write!(f, "Timeout"),
            AppErrorKind::ModuleLocked => write!(f, "ModuleLocked"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
        }
    }
}

/// Structured application error shared by the session core and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidCredentials,
            message: message.into(),
        }
    }

    pub fn login_in_progress(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::LoginInProgress,
            message: message.into(),
        }
    }

    pub fn login_cancelled(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::LoginCancelled,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Timeout,
            message: message.into(),
        }
    }

    pub fn module_locked(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ModuleLocked,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    /// True for errors the login form reports as a failed attempt.
    pub fn is_login_failure(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::InvalidCredentials | AppErrorKind::Timeout
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_has_correct_kind() {
        let err = AppError::invalid_credentials("Invalid credentials");
        assert_eq!(err.kind, AppErrorKind::InvalidCredentials);
        assert_eq!(err.message, "Invalid credentials");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::module_locked("Dashboard is a core module");
        assert_eq!(format!("{}", err), "ModuleLocked: Dashboard is a core module");
    }

    #[test]
    fn login_failure_classification() {
        assert!(AppError::invalid_credentials("").is_login_failure());
        assert!(AppError::timeout("").is_login_failure());
        assert!(!AppError::login_in_progress("").is_login_failure());
        assert!(!AppError::login_cancelled("").is_login_failure());
        assert!(!AppError::not_found("").is_login_failure());
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::login_in_progress("A login is already in progress");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""kind":"LoginInProgress""#));
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
