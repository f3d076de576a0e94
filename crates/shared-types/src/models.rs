use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AppError;

/// Platform role selected on the entry screen before signing in.
///
/// - `Admin`: platform administration (users, modules, reports, logs).
/// - `Teacher`: runs classes and publishes teaching materials.
/// - `Student`: attends classes and reads learning materials.
///
/// The role is asserted by the client at login time; it is never derived
/// from the credentials.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
}

/// All roles in the order the entry screen offers them.
pub const ALL_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Teacher, UserRole::Student];

impl UserRole {
    /// Lowercase key used in paths and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }

    /// Human-readable name shown in the header and on the login card.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Teacher => "Teacher",
            UserRole::Student => "Student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    /// Exact lowercase key, the inverse of `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "teacher" => Ok(UserRole::Teacher),
            "student" => Ok(UserRole::Student),
            other => Err(AppError::not_found(format!("Unknown role `{other}`"))),
        }
    }
}

/// Email/password pair typed into the login form. Consumed by a single login.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty; no other format check is made.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The signed-in user as seen by every view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub display_name: String,
}

impl AuthUser {
    /// Build the user a simulated sign-in produces: the display name is the
    /// part of the email before the first `@` (the whole email if there is none).
    pub fn from_email(id: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        let email = email.into();
        let display_name = display_name_from_email(&email).to_string();
        Self {
            id: id.into(),
            email,
            role,
            display_name,
        }
    }
}

/// Local part of an email address.
pub fn display_name_from_email(email: &str) -> &str {
    email.split_once('@').map_or(email, |(name, _)| name)
}
