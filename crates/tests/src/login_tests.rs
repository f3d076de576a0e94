use pretty_assertions::assert_eq;
use session::SessionState;
use shared_types::{AppErrorKind, AuthUser, Destination, Section, UserRole, ALL_ROLES};

use crate::common::{self, creds, LOGIN_DELAY};

#[tokio::test(start_paused = true)]
async fn admin_login_installs_user_and_goes_home() {
    let session = common::session();

    let outcome = session
        .login(creds("alex@example.com", "secret"), UserRole::Admin)
        .await
        .unwrap();

    let expected = AuthUser {
        id: "1".to_string(),
        email: "alex@example.com".to_string(),
        role: UserRole::Admin,
        display_name: "alex".to_string(),
    };
    assert_eq!(outcome.user, expected);
    assert_eq!(outcome.destination.path(), "/admin/dashboard");
    assert_eq!(session.current_user(), Some(expected));
    assert!(session.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn every_role_lands_on_its_own_dashboard() {
    for role in ALL_ROLES.iter().copied() {
        let session = common::session();
        let outcome = session.login(creds("a@b.com", "x"), role).await.unwrap();
        assert_eq!(
            outcome.destination,
            Destination::Page {
                role,
                section: Section::Dashboard,
            }
        );
        assert_eq!(session.role(), Some(role));
    }
}

#[tokio::test(start_paused = true)]
async fn display_name_is_the_part_before_the_at_sign() {
    let session = common::session();
    let cases = [
        ("maria.lopez@school.edu", "maria.lopez"),
        ("no-at-sign", "no-at-sign"),
        ("@school.edu", ""),
    ];
    for (email, name) in cases {
        let user = common::signed_in(&session, email, UserRole::Student).await;
        assert_eq!(user.display_name, name, "email {email}");
    }
}

#[tokio::test(start_paused = true)]
async fn empty_email_is_rejected_and_nobody_is_signed_in() {
    let session = common::session();

    let err = session
        .login(creds("", "secret"), UserRole::Teacher)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InvalidCredentials);
    assert_eq!(session.current_user(), None);
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[tokio::test(start_paused = true)]
async fn empty_password_is_rejected() {
    let session = common::session();
    let err = session
        .login(creds("a@b.com", ""), UserRole::Student)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidCredentials);
    assert!(!session.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn relogin_replaces_the_user_and_role() {
    let session = common::session();
    common::signed_in(&session, "t@school.edu", UserRole::Teacher).await;
    let admin = common::signed_in(&session, "root@school.edu", UserRole::Admin).await;

    assert_eq!(session.current_user(), Some(admin));
    assert_eq!(session.role(), Some(UserRole::Admin));
}

#[tokio::test(start_paused = true)]
async fn login_suspends_for_the_simulated_delay() {
    let session = common::session();
    let started = tokio::time::Instant::now();

    session.login(creds("a@b.com", "x"), UserRole::Student).await.unwrap();

    assert!(started.elapsed() >= LOGIN_DELAY);
}
