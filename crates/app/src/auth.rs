use dioxus::prelude::*;
use session::{LogNotifier, Notice, NoticeLevel, Notifier, SessionController};
use shared_types::{AppError, AuthUser, Destination, LoginCredentials, UserRole};
use shared_ui::{ToastOptions, Toasts};

/// Global authentication state.
///
/// The session controller owns the truth; `current_user` mirrors it so
/// components re-render when someone signs in or out.
#[derive(Clone)]
pub struct AuthState {
    session: SessionController,
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        let settings = session::config::load_settings();
        Self {
            session: SessionController::from_settings(settings),
            current_user: Signal::new(None),
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current_user.read().as_ref().map(|u| u.role)
    }

    /// Sign in, toast the outcome and return the page to open next.
    pub async fn login(
        &self,
        notifier: &impl Notifier,
        credentials: LoginCredentials,
        role: UserRole,
    ) -> Result<Destination, AppError> {
        let result = self
            .session
            .login_with_notice(notifier, credentials, role)
            .await;
        self.sync();
        result.map(|outcome| outcome.destination)
    }

    /// Sign out, toast it and return the page to open next.
    pub fn logout(&self, notifier: &impl Notifier) -> Destination {
        let destination = self.session.logout_with_notice(notifier);
        self.sync();
        destination
    }

    /// Where a request for `requested` actually lands for this viewer.
    pub fn resolve(&self, requested: Destination) -> Destination {
        self.session.resolve(requested)
    }

    fn sync(&self) {
        let mut current_user = self.current_user;
        let user = self.session.current_user();
        if *current_user.peek() != user {
            current_user.set(user);
        }
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Shows session notices as toasts and records them in the log.
#[derive(Clone, Copy)]
pub struct ToastNotifier(pub Toasts);

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        LogNotifier.notify(notice.clone());
        match notice.level {
            NoticeLevel::Success => {
                self.0.success(notice.message, ToastOptions::new());
            }
            NoticeLevel::Error => {
                self.0.error(notice.message, ToastOptions::new());
            }
        }
    }
}

/// Hook returning a notifier bound to the toast stack.
pub fn use_toast_notifier() -> ToastNotifier {
    ToastNotifier(shared_ui::use_toast())
}
