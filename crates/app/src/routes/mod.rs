pub mod dashboard;
pub mod index;
pub mod modules;
pub mod not_found;
pub mod notification_bell;
pub mod workspace;

use crate::auth::{use_auth, use_toast_notifier};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdClock, LdFileText, LdFolder, LdLayoutDashboard, LdLogOut, LdMenu,
    LdMessageSquare, LdPackage, LdSettings, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{nav_items, Destination, Section, UserRole};
use shared_ui::{Button, ButtonSize, ButtonVariant};

use index::Index;
use not_found::NotFound;
use notification_bell::NotificationBell;
use workspace::Workspace;

/// Application routes.
///
/// Every signed-in page lives at `/{role}/{section}` behind [`RoleLayout`].
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},
    #[layout(RoleLayout)]
    #[route("/:role/:section")]
    Workspace { role: UserRole, section: Section },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Root => Route::Index {},
            Destination::Page { role, section } => Route::Workspace { role, section },
        }
    }
}

fn section_icon(section: Section) -> Element {
    match section {
        Section::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        Section::Classes => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        Section::Materials => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        Section::Messages => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
        Section::Profile => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        Section::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        Section::Notifications => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
        Section::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        Section::Modules => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        Section::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        Section::Logs => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
    }
}

/// Role guard plus the dashboard shell.
///
/// A viewer whose role does not own the requested route group (including
/// nobody signed in) is sent back to `/`.
#[component]
fn RoleLayout() -> Element {
    let auth = use_auth();
    let notifier = use_toast_notifier();
    let route: Route = use_route();
    let mut sidebar_open = use_signal(|| false);

    let Route::Workspace { role, section } = route else {
        return rsx! { Outlet::<Route> {} };
    };

    let requested = Destination::Page { role, section };
    let allowed = auth.resolve(requested) == requested;
    let user = auth.current_user.read().clone();
    let Some(user) = user.filter(|_| allowed) else {
        navigator().replace(Route::Index {});
        return rsx! {
            div { class: "guard-message",
                p { "Redirecting..." }
            }
        };
    };

    let handle_logout = move |_: MouseEvent| {
        let destination = auth.logout(&notifier);
        navigator().push(Route::from(destination));
    };

    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                div { class: "shell-header-left",
                    Button {
                        class: "shell-menu-toggle",
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        onclick: move |_| sidebar_open.set(!sidebar_open()),
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    h1 { class: "shell-brand", "Dija Connect" }
                    span { class: "shell-role", "{role.display_name()} Dashboard" }
                }
                div { class: "shell-header-right",
                    NotificationBell { role }
                    span { class: "shell-email", "{user.email}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: handle_logout.clone(),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }

            div { class: "shell-body",
                aside { class: "shell-sidebar", "data-open": "{sidebar_open}",
                    nav { class: "shell-nav",
                        for item in nav_items(role).iter() {
                            Link {
                                key: "{item.section}",
                                to: Route::Workspace { role, section: item.section },
                                active_class: "active",
                                onclick: move |_| sidebar_open.set(false),
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    {section_icon(item.section)}
                                    "{item.label}"
                                }
                            }
                        }
                    }
                    div { class: "shell-sidebar-footer",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: handle_logout,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Logout"
                        }
                    }
                }

                main { class: "shell-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
