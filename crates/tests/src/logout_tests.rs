use pretty_assertions::assert_eq;
use session::SessionState;
use shared_types::{Destination, UserRole};

use crate::common::{self, creds};

#[tokio::test(start_paused = true)]
async fn student_login_then_logout_ends_signed_out_at_root() {
    let session = common::session();
    session
        .login(creds("a@b.com", "x"), UserRole::Student)
        .await
        .unwrap();

    let destination = session.logout();

    assert_eq!(destination, Destination::Root);
    assert_eq!(destination.path(), "/");
    assert_eq!(session.current_user(), None);
}

#[tokio::test(start_paused = true)]
async fn login_then_logout_restores_the_initial_state() {
    let session = common::session();
    let before = session.state();

    common::signed_in(&session, "t@school.edu", UserRole::Teacher).await;
    session.logout();

    assert_eq!(session.state(), before);
}

#[test]
fn logout_is_idempotent() {
    let session = common::session();

    assert_eq!(session.logout(), Destination::Root);
    assert_eq!(session.logout(), Destination::Root);
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[tokio::test(start_paused = true)]
async fn signing_in_again_after_logout_works() {
    let session = common::session();
    common::signed_in(&session, "a@b.com", UserRole::Admin).await;
    session.logout();

    let user = common::signed_in(&session, "s@school.edu", UserRole::Student).await;

    assert_eq!(session.current_user(), Some(user));
}

#[tokio::test]
async fn logout_while_authenticating_cancels_the_login() {
    let (session, gate) = common::gated_session();
    let mut changes = session.subscribe();

    let pending = {
        let session = session.clone();
        tokio::spawn(async move { session.login(creds("a@b.com", "x"), UserRole::Admin).await })
    };
    changes.wait_for(|s| s.is_authenticating()).await.unwrap();

    assert_eq!(session.logout(), Destination::Root);
    gate.open();

    let err = pending.await.unwrap().unwrap_err();
    assert_eq!(err.kind, shared_types::AppErrorKind::LoginCancelled);
    assert_eq!(session.state(), SessionState::Unauthenticated);
}
