use std::sync::Arc;
use std::time::Duration;

use session::{Authenticator, SessionController, SimulatedAuthenticator};
use shared_types::{AppError, AuthUser, LoginCredentials, UserRole};
use tokio::sync::Notify;

/// The delay the app ships with.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// A fresh session backed by the simulated authenticator. Tests using it
/// should run with `start_paused = true` so the delay costs nothing.
pub fn session() -> SessionController {
    SessionController::new(SimulatedAuthenticator::new(LOGIN_DELAY))
}

pub fn creds(email: &str, password: &str) -> LoginCredentials {
    LoginCredentials::new(email, password)
}

/// Sign in with the default test password and return the installed user.
pub async fn signed_in(session: &SessionController, email: &str, role: UserRole) -> AuthUser {
    session
        .login(creds(email, "secret"), role)
        .await
        .expect("login should succeed")
        .user
}

/// Authenticator that answers only when the test opens the gate, so a login
/// can be held in `Authenticating` for as long as needed.
#[derive(Clone, Default)]
pub struct GatedAuthenticator {
    gate: Arc<Notify>,
}

impl GatedAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let one waiting (or the next) authentication through.
    pub fn open(&self) {
        self.gate.notify_one();
    }
}

impl Authenticator for GatedAuthenticator {
    async fn authenticate(
        &self,
        credentials: LoginCredentials,
        role: UserRole,
    ) -> Result<AuthUser, AppError> {
        self.gate.notified().await;
        if !credentials.is_complete() {
            return Err(AppError::invalid_credentials("Invalid credentials"));
        }
        Ok(AuthUser::from_email("1", credentials.email, role))
    }
}

pub fn gated_session() -> (SessionController<GatedAuthenticator>, GatedAuthenticator) {
    let auth = GatedAuthenticator::new();
    (SessionController::new(auth.clone()), auth)
}
