use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{nav_items, Section, UserRole};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

struct Stat {
    title: &'static str,
    value: &'static str,
    change: &'static str,
    description: &'static str,
}

const ADMIN_STATS: &[Stat] = &[
    Stat {
        title: "Total Users",
        value: "1,245",
        change: "+12%",
        description: "Active users across all roles",
    },
    Stat {
        title: "Teachers",
        value: "156",
        change: "+5%",
        description: "Registered teachers",
    },
    Stat {
        title: "Students",
        value: "1,089",
        change: "+14%",
        description: "Registered students",
    },
    Stat {
        title: "Classes",
        value: "342",
        change: "+8%",
        description: "Total classes created",
    },
];

/// Landing page of every route group.
#[component]
pub fn Dashboard(role: UserRole) -> Element {
    let auth = use_auth();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_else(|| role.display_name().to_string());

    let (heading, subtitle) = match role {
        UserRole::Admin => ("Admin Dashboard".to_string(), "Platform overview"),
        UserRole::Teacher => (format!("Welcome back, {name}"), "Here's what is happening in your classes"),
        UserRole::Student => (format!("Welcome back, {name}"), "Here's an overview of your learning journey"),
    };

    rsx! {
        h1 { class: "page-title", "{heading}" }
        p { class: "page-subtitle", "{subtitle}" }

        if role == UserRole::Admin {
            div { class: "module-grid",
                for stat in ADMIN_STATS {
                    Card { key: "{stat.title}",
                        CardHeader {
                            CardDescription { "{stat.title}" }
                            CardTitle { "{stat.value}" }
                        }
                        CardContent {
                            p { class: "page-subtitle", "{stat.description} ({stat.change})" }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Quick Access" }
                CardDescription { "Jump to a section" }
            }
            CardContent {
                div { class: "module-tabs",
                    for item in nav_items(role).iter().filter(|item| item.section != Section::Dashboard) {
                        Link { key: "{item.section}", to: Route::Workspace { role, section: item.section },
                            Button { variant: ButtonVariant::Outline, "{item.label}" }
                        }
                    }
                }
            }
        }
    }
}
