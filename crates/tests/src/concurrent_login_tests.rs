use std::time::Duration;

use pretty_assertions::assert_eq;
use session::{SessionController, SessionState};
use shared_types::{AppErrorKind, UserRole};

use crate::common::{self, creds, GatedAuthenticator};

#[tokio::test]
async fn second_login_is_rejected_while_the_first_is_pending() {
    let (session, gate) = common::gated_session();
    let mut changes = session.subscribe();

    let first = {
        let session = session.clone();
        tokio::spawn(async move { session.login(creds("t@school.edu", "x"), UserRole::Teacher).await })
    };
    changes.wait_for(|s| s.is_authenticating()).await.unwrap();

    let err = session
        .login(creds("root@school.edu", "x"), UserRole::Admin)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::LoginInProgress);
    assert_eq!(
        session.state(),
        SessionState::Authenticating {
            role: UserRole::Teacher
        }
    );

    gate.open();
    let outcome = first.await.unwrap().unwrap();
    assert_eq!(outcome.user.role, UserRole::Teacher);
    assert_eq!(session.role(), Some(UserRole::Teacher));
}

#[tokio::test]
async fn a_new_login_is_accepted_once_the_previous_one_settles() {
    let (session, gate) = common::gated_session();

    gate.open();
    session
        .login(creds("", "x"), UserRole::Student)
        .await
        .unwrap_err();

    gate.open();
    let outcome = session
        .login(creds("s@school.edu", "x"), UserRole::Student)
        .await
        .unwrap();
    assert_eq!(outcome.user.display_name, "s");
}

#[tokio::test]
async fn abandoned_login_puts_the_session_back() {
    let (session, gate) = common::gated_session();
    gate.open();
    let teacher = session
        .login(creds("t@school.edu", "x"), UserRole::Teacher)
        .await
        .unwrap()
        .user;

    let mut changes = session.subscribe();
    let pending = {
        let session = session.clone();
        tokio::spawn(async move { session.login(creds("root@school.edu", "x"), UserRole::Admin).await })
    };
    changes.wait_for(|s| s.is_authenticating()).await.unwrap();

    pending.abort();
    assert!(pending.await.unwrap_err().is_cancelled());

    assert_eq!(session.state(), SessionState::Authenticated(teacher));
}

#[tokio::test]
async fn observers_see_every_transition() {
    let (session, gate) = common::gated_session();
    let mut changes = session.subscribe();
    assert_eq!(*changes.borrow_and_update(), SessionState::Unauthenticated);

    let pending = {
        let session = session.clone();
        tokio::spawn(async move { session.login(creds("a@b.com", "x"), UserRole::Admin).await })
    };

    changes.changed().await.unwrap();
    assert_eq!(
        *changes.borrow_and_update(),
        SessionState::Authenticating {
            role: UserRole::Admin
        }
    );

    gate.open();
    let user = pending.await.unwrap().unwrap().user;
    changes.changed().await.unwrap();
    assert_eq!(*changes.borrow_and_update(), SessionState::Authenticated(user));

    session.logout();
    changes.changed().await.unwrap();
    assert_eq!(*changes.borrow_and_update(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn rejected_login_passes_through_authenticating_and_back() {
    let (session, gate) = common::gated_session();
    let mut changes = session.subscribe();
    assert_eq!(*changes.borrow_and_update(), SessionState::Unauthenticated);

    let pending = {
        let session = session.clone();
        tokio::spawn(async move { session.login(creds("", "x"), UserRole::Teacher).await })
    };

    changes.changed().await.unwrap();
    assert_eq!(
        *changes.borrow_and_update(),
        SessionState::Authenticating {
            role: UserRole::Teacher
        }
    );

    gate.open();
    let err = pending.await.unwrap().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidCredentials);

    changes.changed().await.unwrap();
    assert_eq!(*changes.borrow_and_update(), SessionState::Unauthenticated);
    assert!(session.current_user().is_none());
}

#[tokio::test(start_paused = true)]
async fn timed_out_relogin_keeps_the_previous_user() {
    let gate = GatedAuthenticator::new();
    let session = SessionController::with_login_timeout(gate.clone(), Some(Duration::from_secs(2)));

    gate.open();
    let teacher = session
        .login(creds("t@school.edu", "x"), UserRole::Teacher)
        .await
        .unwrap()
        .user;

    let err = session
        .login(creds("root@school.edu", "x"), UserRole::Admin)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Timeout);
    assert_eq!(session.state(), SessionState::Authenticated(teacher));
    assert_eq!(session.role(), Some(UserRole::Teacher));
}
