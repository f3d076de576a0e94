//! User-visible feedback for session changes.
//!
//! The controller only returns results; this module turns them into
//! [`Notice`]s and hands them to whatever [`Notifier`] the UI provides
//! (toasts in the app, a recording list in tests).

use std::sync::Mutex;

use shared_types::{AppError, Destination, LoginCredentials, UserRole};

use crate::authenticator::Authenticator;
use crate::controller::{LoginOutcome, SessionController};

pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const LOGGED_OUT: &str = "Logged out successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Feedback for a finished login attempt.
    pub fn for_login(result: &Result<LoginOutcome, AppError>) -> Self {
        match result {
            Ok(_) => Notice::success(LOGIN_SUCCEEDED),
            Err(e) if e.is_login_failure() => Notice::error(LOGIN_FAILED),
            Err(e) => Notice::error(e.message.clone()),
        }
    }

    pub fn logged_out() -> Self {
        Notice::success(LOGGED_OUT)
    }
}

/// Presentation sink for notices.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Notifier that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeLevel::Error => tracing::warn!(message = %notice.message, "notice"),
        }
    }
}

/// Notifier that keeps every notice, oldest first.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

impl<A: Authenticator> SessionController<A> {
    /// [`login`](Self::login), then report the outcome through `notifier`.
    ///
    /// The failure notice is emitted before the error is handed back, and the
    /// error is still returned so callers cannot carry on as if signed in.
    pub async fn login_with_notice<N: Notifier + ?Sized>(
        &self,
        notifier: &N,
        credentials: LoginCredentials,
        role: UserRole,
    ) -> Result<LoginOutcome, AppError> {
        let result = self.login(credentials, role).await;
        notifier.notify(Notice::for_login(&result));
        result
    }

    /// [`logout`](Self::logout), then announce it through `notifier`.
    pub fn logout_with_notice<N: Notifier + ?Sized>(&self, notifier: &N) -> Destination {
        let destination = self.logout();
        notifier.notify(Notice::logged_out());
        destination
    }
}
