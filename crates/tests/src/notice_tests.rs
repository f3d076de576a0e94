use pretty_assertions::assert_eq;
use session::{Notice, RecordingNotifier};
use shared_types::UserRole;

use crate::common::{self, creds};

#[tokio::test(start_paused = true)]
async fn a_session_reports_each_step_in_order() {
    let session = common::session();
    let notifier = RecordingNotifier::new();

    session
        .login_with_notice(&notifier, creds("", "secret"), UserRole::Teacher)
        .await
        .unwrap_err();
    session
        .login_with_notice(&notifier, creds("t@school.edu", "secret"), UserRole::Teacher)
        .await
        .unwrap();
    session.logout_with_notice(&notifier);

    assert_eq!(
        notifier.notices(),
        vec![
            Notice::error("Login failed. Please try again."),
            Notice::success("Login successful!"),
            Notice::success("Logged out successfully"),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn notices_do_not_change_the_outcome() {
    let quiet = common::session();
    let noisy = common::session();
    let notifier = RecordingNotifier::new();

    let plain = quiet.login(creds("a@b.com", "x"), UserRole::Admin).await.unwrap();
    let reported = noisy
        .login_with_notice(&notifier, creds("a@b.com", "x"), UserRole::Admin)
        .await
        .unwrap();

    assert_eq!(plain, reported);
    assert_eq!(quiet.state(), noisy.state());
}
