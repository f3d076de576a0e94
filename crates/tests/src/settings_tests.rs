use std::time::Duration;

use pretty_assertions::assert_eq;
use session::config::{apply_env_overrides, parse_config, LOGIN_DELAY_ENV};
use session::{SessionController, SimulatedAuthenticator};
use shared_types::{AppErrorKind, UserRole};

use crate::common::creds;

#[tokio::test(start_paused = true)]
async fn configured_timeout_applies_to_logins() {
    let settings =
        parse_config("[session]\nlogin_delay_ms = 5000\nlogin_timeout_ms = 1000\n").unwrap();
    let session = SessionController::from_settings(&settings);

    let err = session
        .login(creds("a@b.com", "x"), UserRole::Student)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Timeout);
    assert!(!session.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn environment_can_remove_the_delay() {
    let mut settings = parse_config("[session]\nlogin_delay_ms = 5000\n").unwrap();
    apply_env_overrides(&mut settings, |key| {
        (key == LOGIN_DELAY_ENV).then(|| "0".to_string())
    });
    assert_eq!(
        SimulatedAuthenticator::from_settings(&settings).delay(),
        Duration::ZERO
    );

    let session = SessionController::from_settings(&settings);
    let started = tokio::time::Instant::now();
    session
        .login(creds("a@b.com", "x"), UserRole::Student)
        .await
        .unwrap();
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[test]
fn empty_file_means_defaults() {
    let settings = parse_config("").unwrap();
    assert_eq!(settings.login_delay_ms, shared_types::DEFAULT_LOGIN_DELAY_MS);
    assert_eq!(settings.login_timeout_ms, None);
}
