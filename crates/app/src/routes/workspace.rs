use dioxus::prelude::*;
use shared_types::{nav_items, Section, UserRole};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::dashboard::Dashboard;
use super::modules::Modules;
use super::not_found::NotFound;

/// Body of `/{role}/{section}`. Sections outside the role's route group
/// render the 404 page.
#[component]
pub fn Workspace(role: UserRole, section: Section) -> Element {
    if !role.has_section(section) {
        return rsx! {
            NotFound { route: vec![role.to_string(), section.to_string()] }
        };
    }

    match section {
        Section::Dashboard => rsx! { Dashboard { role } },
        Section::Modules => rsx! { Modules {} },
        Section::Notifications => rsx! { ComingSoon { title: "Notifications" } },
        _ => rsx! { SectionPage { role, section } },
    }
}

/// Heading shown on a section page; the sidebar label when there is one.
fn page_title(role: UserRole, section: Section) -> &'static str {
    match (role, section) {
        (UserRole::Admin, Section::Reports) => "Analytics & Reports",
        (UserRole::Admin, Section::Settings) => "Platform Settings",
        (_, Section::Profile) => "My Profile",
        _ => nav_items(role)
            .iter()
            .find(|item| item.section == section)
            .map(|item| item.label)
            .unwrap_or_else(|| section.title()),
    }
}

fn page_subtitle(role: UserRole, section: Section) -> &'static str {
    match (role, section) {
        (UserRole::Admin, Section::Users) => "Manage accounts across all roles",
        (UserRole::Admin, Section::Reports) => "View detailed analytics and generate reports",
        (UserRole::Admin, Section::Logs) => "Monitor system activities and events",
        (UserRole::Admin, Section::Settings) => {
            "Configure global settings for your Dija Connect platform"
        }
        (UserRole::Teacher, Section::Classes) => "Schedule and run your classes",
        (UserRole::Teacher, Section::Materials) => "Manage and organize your teaching resources",
        (UserRole::Student, Section::Classes) => "Your upcoming and past classes",
        (UserRole::Student, Section::Materials) => {
            "Access all your learning resources in one place"
        }
        (_, Section::Messages) => "Conversations with your classes",
        (_, Section::Profile) => "Manage your personal information and preferences",
        (_, Section::Settings) => "Manage your account settings and preferences",
        _ => "",
    }
}

const ADMIN_USERS: &[(&str, &str)] = &[
    ("Alex Johnson", "alex@example.com · Admin · active"),
    ("Maria Garcia", "maria@example.com · Teacher · active"),
    ("John Smith", "john@example.com · Teacher · inactive"),
    ("Emma Wilson", "emma@example.com · Student · active"),
    ("Michael Brown", "michael@example.com · Student · active"),
];

const ADMIN_LOGS: &[(&str, &str)] = &[
    ("info · system", "Daily backup completed successfully"),
    ("error · auth", "Failed login attempt from IP 192.168.0.1"),
    ("warning · module", "Video conferencing module resource usage at 80%"),
    ("error · database", "Connection timeout with primary database"),
    ("warning · storage", "File storage usage above 75% threshold"),
];

const CLASS_SESSIONS: &[(&str, &str)] = &[
    ("Vocabulary Building", "Today"),
    ("Conversation Practice", "Tomorrow"),
    ("Grammar Review", "In 3 days"),
    ("Cultural Discussion", "In 5 days"),
    ("Reading Comprehension", "2 days ago"),
    ("Writing Workshop", "5 days ago"),
];

const TEACHER_MATERIALS: &[(&str, &str)] = &[
    ("Spanish Grammar Basics", "Document"),
    ("Conversation Practice Audio", "Audio"),
    ("Vocabulary Flashcards Set 1", "Document"),
    ("Spanish Culture Presentation", "Presentation"),
    ("Verb Conjugation Workshop", "Video"),
];

const STUDENT_MATERIALS: &[(&str, &str)] = &[
    ("Beginner's Guide to Grammar", "E-book"),
    ("Everyday Conversations", "Audio"),
    ("Advanced Vocabulary Workbook", "E-book"),
    ("Pronunciation Workshop", "Video"),
    ("Writing Essentials", "E-book"),
];

const TEACHER_CONVERSATIONS: &[(&str, &str)] = &[
    ("John Smith", "I have a question about the homework assignment"),
    ("Emma Wang", "Thank you for the feedback on my essay"),
    ("Carlos Mendez", "Will we have a review session before the exam?"),
    ("Sarah Johnson", "I've submitted my project on the portal"),
    ("Michael Brown", "Can I schedule a meeting to discuss my progress?"),
];

const STUDENT_CONVERSATIONS: &[(&str, &str)] = &[
    ("Mrs. Johnson", "Conversation Practice"),
    ("Mr. Davis", "Grammar"),
    ("Ms. Anderson", "Vocabulary"),
    ("Mr. Wilson", "Reading Comprehension"),
    ("Mrs. Taylor", "Writing"),
];

/// Sample entries listed on a section page, as `(title, detail)` pairs.
fn sample_rows(role: UserRole, section: Section) -> &'static [(&'static str, &'static str)] {
    match (role, section) {
        (UserRole::Admin, Section::Users) => ADMIN_USERS,
        (UserRole::Admin, Section::Logs) => ADMIN_LOGS,
        (_, Section::Classes) => CLASS_SESSIONS,
        (UserRole::Teacher, Section::Materials) => TEACHER_MATERIALS,
        (UserRole::Student, Section::Materials) => STUDENT_MATERIALS,
        (UserRole::Teacher, Section::Messages) => TEACHER_CONVERSATIONS,
        (UserRole::Student, Section::Messages) => STUDENT_CONVERSATIONS,
        _ => &[],
    }
}

#[component]
fn SectionPage(role: UserRole, section: Section) -> Element {
    let title = page_title(role, section);
    let subtitle = page_subtitle(role, section);
    let rows = sample_rows(role, section);

    rsx! {
        h1 { class: "page-title", "{title}" }
        p { class: "page-subtitle", "{subtitle}" }
        Card {
            CardHeader {
                CardTitle { "{section.title()}" }
                if rows.is_empty() {
                    CardDescription { "Nothing here yet." }
                } else {
                    CardDescription { "{rows.len()} entries" }
                }
            }
            if !rows.is_empty() {
                CardContent {
                    ul { class: "section-rows",
                        for (name, detail) in rows.iter() {
                            li { key: "{name}",
                                span { class: "section-row-title", "{name}" }
                                span { class: "section-row-detail", "{detail}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComingSoon(title: String) -> Element {
    rsx! {
        h1 { class: "page-title", "{title}" }
        Card { class: "page-placeholder",
            CardContent {
                h2 { "Coming Soon" }
                p { class: "page-subtitle", "This page is still being built." }
            }
        }
    }
}
