use pretty_assertions::assert_eq;
use shared_types::{Destination, Section, UserRole, ALL_ROLES};

use crate::common;

/// Every page of every route group.
fn all_pages() -> Vec<Destination> {
    ALL_ROLES
        .iter()
        .flat_map(|role| {
            role.sections().iter().map(move |section| Destination::Page {
                role: *role,
                section: *section,
            })
        })
        .collect()
}

#[test]
fn signed_out_viewers_only_reach_the_root() {
    let session = common::session();
    for page in all_pages() {
        assert_eq!(session.resolve(page), Destination::Root, "{page}");
    }
    assert_eq!(session.resolve(Destination::Root), Destination::Root);
}

#[tokio::test(start_paused = true)]
async fn student_never_reaches_admin_or_teacher_pages() {
    let session = common::session();
    common::signed_in(&session, "s@school.edu", UserRole::Student).await;

    for page in all_pages() {
        let resolved = session.resolve(page);
        match page.role() {
            Some(UserRole::Student) => assert_eq!(resolved, page),
            _ => assert_eq!(resolved, Destination::Root, "{page}"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn each_role_owns_exactly_its_own_group() {
    for role in ALL_ROLES.iter().copied() {
        let session = common::session();
        common::signed_in(&session, "user@school.edu", role).await;

        let reachable: Vec<_> = all_pages()
            .into_iter()
            .filter(|page| session.resolve(*page) == *page)
            .collect();

        assert!(!reachable.is_empty());
        assert!(reachable.iter().all(|page| page.role() == Some(role)));
        assert_eq!(reachable.len(), role.sections().len());
    }
}

#[tokio::test(start_paused = true)]
async fn logging_out_closes_the_group_again() {
    let session = common::session();
    common::signed_in(&session, "t@school.edu", UserRole::Teacher).await;
    let home = Destination::home(UserRole::Teacher);
    assert_eq!(session.resolve(home), home);

    session.logout();

    assert_eq!(session.resolve(home), Destination::Root);
}

#[test]
fn paths_and_destinations_agree_for_the_whole_surface() {
    for page in all_pages() {
        let parsed: Destination = page.path().parse().unwrap();
        assert_eq!(parsed, page);
    }
    assert_eq!("/".parse::<Destination>().unwrap(), Destination::Root);
}

#[test]
fn pages_outside_a_group_do_not_parse() {
    for path in ["/student/users", "/teacher/modules", "/admin/classes", "/guest/dashboard"] {
        assert!(path.parse::<Destination>().is_err(), "{path}");
    }
}

#[test]
fn surface_matches_the_route_table() {
    let paths: Vec<String> = UserRole::Admin
        .sections()
        .iter()
        .map(|s| Destination::Page {
            role: UserRole::Admin,
            section: *s,
        })
        .map(|d| d.path())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/admin/dashboard",
            "/admin/users",
            "/admin/modules",
            "/admin/reports",
            "/admin/logs",
            "/admin/settings",
            "/admin/notifications",
        ]
    );
    assert!(UserRole::Student.has_section(Section::Materials));
    assert!(!UserRole::Student.has_section(Section::Reports));
}
