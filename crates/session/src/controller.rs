use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use shared_types::{AppError, AuthUser, Destination, LoginCredentials, SessionSettings, UserRole};
use tokio::sync::watch;

use crate::authenticator::{Authenticator, SimulatedAuthenticator};

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    /// A login is waiting on the authenticator.
    Authenticating { role: UserRole },
    Authenticated(AuthUser),
}

impl SessionState {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self, SessionState::Authenticating { .. })
    }
}

/// Result of a successful login: the installed user and where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user: AuthUser,
    pub destination: Destination,
}

/// Single authority for who is signed in and as what role.
///
/// Cloning is cheap; clones share one session. Views read the user through
/// [`current_user`](Self::current_user) or [`subscribe`](Self::subscribe) and
/// can only change it through [`login`](Self::login) and [`logout`](Self::logout).
///
/// Only one login may be pending at a time: a second call made while the
/// first is still authenticating fails with `LoginInProgress`.
pub struct SessionController<A = SimulatedAuthenticator> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    authenticator: A,
    login_timeout: Option<Duration>,
    state: watch::Sender<SessionState>,
    /// Bumped by every login start and every logout; an attempt may only
    /// commit while the epoch it started with is still current.
    epoch: AtomicU64,
}

impl<A> Clone for SessionController<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> std::fmt::Debug for SessionController<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &*self.inner.state.borrow())
            .field("login_timeout", &self.inner.login_timeout)
            .finish()
    }
}

impl SessionController<SimulatedAuthenticator> {
    /// Controller backed by the simulated authenticator, tuned by `settings`.
    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self::with_login_timeout(
            SimulatedAuthenticator::from_settings(settings),
            settings.login_timeout_ms.map(Duration::from_millis),
        )
    }
}

impl<A: Authenticator> SessionController<A> {
    pub fn new(authenticator: A) -> Self {
        Self::with_login_timeout(authenticator, None)
    }

    pub fn with_login_timeout(authenticator: A, login_timeout: Option<Duration>) -> Self {
        let (state, _) = watch::channel(SessionState::Unauthenticated);
        Self {
            inner: Arc::new(Inner {
                authenticator,
                login_timeout,
                state,
                epoch: AtomicU64::new(0),
            }),
        }
    }

    /// Sign in as `role`.
    ///
    /// Suspends while the authenticator runs. On success the user is
    /// installed and the outcome names the role's home page. On failure the
    /// session is back where it was before the call.
    #[tracing::instrument(skip(self, credentials))]
    pub async fn login(
        &self,
        credentials: LoginCredentials,
        role: UserRole,
    ) -> Result<LoginOutcome, AppError> {
        let pending = self.begin_login(role)?;

        let attempt = self.inner.authenticator.authenticate(credentials, role);
        let result = match self.inner.login_timeout {
            Some(limit) => tokio::time::timeout(limit, attempt)
                .await
                .unwrap_or_else(|_| {
                    Err(AppError::timeout(format!(
                        "No answer from the sign-in service after {}ms",
                        limit.as_millis()
                    )))
                }),
            None => attempt.await,
        };

        let outcome = pending.finish(result);
        match &outcome {
            Ok(done) => tracing::info!(
                user = %done.user.email,
                destination = %done.destination,
                "login succeeded"
            ),
            Err(e) => tracing::warn!(error = %e, "login failed"),
        }
        outcome
    }

    /// Move to `Authenticating`, unless a login is already pending.
    fn begin_login(&self, role: UserRole) -> Result<PendingLogin<'_, A>, AppError> {
        let mut started = None;
        self.inner.state.send_if_modified(|state| {
            if state.is_authenticating() {
                return false;
            }
            let epoch = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
            let previous = std::mem::replace(state, SessionState::Authenticating { role });
            started = Some((epoch, previous));
            true
        });

        let (epoch, previous) = started.ok_or_else(|| {
            tracing::debug!("rejecting login while another is pending");
            AppError::login_in_progress("A sign-in is already in progress")
        })?;

        Ok(PendingLogin {
            inner: &self.inner,
            epoch,
            previous: Some(previous),
        })
    }

    /// Sign out. Always succeeds and always sends the viewer to the root.
    ///
    /// A login still pending is abandoned: it resolves with `LoginCancelled`
    /// and installs nothing.
    #[tracing::instrument(skip(self))]
    pub fn logout(&self) -> Destination {
        self.inner.state.send_modify(|state| {
            self.inner.epoch.fetch_add(1, Ordering::SeqCst);
            *state = SessionState::Unauthenticated;
        });
        tracing::info!("logged out");
        Destination::Root
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.inner.state.borrow().user().cloned()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.inner.state.borrow().user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().user().is_some()
    }

    /// Change feed of the session state; starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Route guard: `requested` if the signed-in role owns it, else the root.
    pub fn resolve(&self, requested: Destination) -> Destination {
        let resolved = requested.guarded(self.role());
        if resolved != requested {
            tracing::debug!(%requested, "redirecting to root");
        }
        resolved
    }
}

/// An in-flight login. Dropping it before [`finish`](Self::finish) puts the
/// session back to its pre-login state, unless a logout or newer login has
/// taken over since.
struct PendingLogin<'a, A> {
    inner: &'a Inner<A>,
    epoch: u64,
    previous: Option<SessionState>,
}

impl<A> PendingLogin<'_, A> {
    fn finish(mut self, result: Result<AuthUser, AppError>) -> Result<LoginOutcome, AppError> {
        let epoch = self.epoch;
        let previous = self.previous.take().unwrap_or(SessionState::Unauthenticated);
        let epoch_counter = &self.inner.epoch;

        let mut outcome = Err(AppError::login_cancelled("Signed out before the sign-in finished"));
        self.inner.state.send_if_modified(|state| {
            if !state.is_authenticating() || epoch_counter.load(Ordering::SeqCst) != epoch {
                return false;
            }
            match result {
                Ok(user) => {
                    outcome = Ok(LoginOutcome {
                        destination: Destination::home(user.role),
                        user: user.clone(),
                    });
                    *state = SessionState::Authenticated(user);
                }
                Err(e) => {
                    outcome = Err(e);
                    *state = previous;
                }
            }
            true
        });
        outcome
    }
}

impl<A> Drop for PendingLogin<'_, A> {
    fn drop(&mut self) {
        let Some(previous) = self.previous.take() else {
            return;
        };
        let epoch = self.epoch;
        let epoch_counter = &self.inner.epoch;
        let restored = self.inner.state.send_if_modified(|state| {
            if !state.is_authenticating() || epoch_counter.load(Ordering::SeqCst) != epoch {
                return false;
            }
            *state = previous;
            true
        });
        if restored {
            tracing::debug!("login abandoned; session restored");
        }
    }
}
