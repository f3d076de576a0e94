use std::future::Future;
use std::time::Duration;

use shared_types::{AppError, AuthUser, LoginCredentials, SessionSettings, UserRole};

/// Id given to every simulated user.
pub const SIMULATED_USER_ID: &str = "1";

/// Verifies credentials and produces the user to install in the session.
///
/// The controller only depends on this trait, so the simulated round trip
/// can be swapped for a real network call without touching its contract.
/// Implementations are awaited while the session is `Authenticating`; if the
/// returned future is dropped the attempt is treated as abandoned.
pub trait Authenticator: Send + Sync + 'static {
    fn authenticate(
        &self,
        credentials: LoginCredentials,
        role: UserRole,
    ) -> impl Future<Output = Result<AuthUser, AppError>> + Send;
}

/// Stand-in for a sign-in service: waits a fixed delay, accepts any
/// non-empty email/password pair and trusts the role picked by the user.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self::new(Duration::from_millis(settings.login_delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::from_settings(&SessionSettings::default())
    }
}

impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(
        &self,
        credentials: LoginCredentials,
        role: UserRole,
    ) -> Result<AuthUser, AppError> {
        tokio::time::sleep(self.delay).await;

        if !credentials.is_complete() {
            return Err(AppError::invalid_credentials("Invalid credentials"));
        }

        Ok(AuthUser::from_email(
            SIMULATED_USER_ID,
            credentials.email,
            role,
        ))
    }
}
