use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{AppError, UserRole};

/// A named page inside a role's route group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Classes,
    Materials,
    Messages,
    Profile,
    Settings,
    Notifications,
    Users,
    Modules,
    Reports,
    Logs,
}

const ADMIN_SECTIONS: &[Section] = &[
    Section::Dashboard,
    Section::Users,
    Section::Modules,
    Section::Reports,
    Section::Logs,
    Section::Settings,
    Section::Notifications,
];

const TEACHER_SECTIONS: &[Section] = &[
    Section::Dashboard,
    Section::Classes,
    Section::Materials,
    Section::Messages,
    Section::Profile,
    Section::Settings,
    Section::Notifications,
];

// Students see the same pages as teachers, with different content.
const STUDENT_SECTIONS: &[Section] = TEACHER_SECTIONS;

impl Section {
    /// Path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Classes => "classes",
            Section::Materials => "materials",
            Section::Messages => "messages",
            Section::Profile => "profile",
            Section::Settings => "settings",
            Section::Notifications => "notifications",
            Section::Users => "users",
            Section::Modules => "modules",
            Section::Reports => "reports",
            Section::Logs => "logs",
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Classes => "Classes",
            Section::Materials => "Materials",
            Section::Messages => "Messages",
            Section::Profile => "Profile",
            Section::Settings => "Settings",
            Section::Notifications => "Notifications",
            Section::Users => "Users",
            Section::Modules => "Modules",
            Section::Reports => "Reports",
            Section::Logs => "Logs",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let section = match s {
            "dashboard" => Section::Dashboard,
            "classes" => Section::Classes,
            "materials" => Section::Materials,
            "messages" => Section::Messages,
            "profile" => Section::Profile,
            "settings" => Section::Settings,
            "notifications" => Section::Notifications,
            "users" => Section::Users,
            "modules" => Section::Modules,
            "reports" => Section::Reports,
            "logs" => Section::Logs,
            other => return Err(AppError::not_found(format!("Unknown page `{other}`"))),
        };
        Ok(section)
    }
}

impl UserRole {
    /// Every page in this role's route group.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            UserRole::Admin => ADMIN_SECTIONS,
            UserRole::Teacher => TEACHER_SECTIONS,
            UserRole::Student => STUDENT_SECTIONS,
        }
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.sections().contains(&section)
    }
}

/// Where the router should go next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The public entry screen at `/`.
    Root,
    Page { role: UserRole, section: Section },
}

impl Destination {
    /// The role's landing page after a successful login.
    pub fn home(role: UserRole) -> Self {
        Destination::Page {
            role,
            section: Section::Dashboard,
        }
    }

    /// A page in a role's route group; fails when the group has no such page.
    pub fn page(role: UserRole, section: Section) -> Result<Self, AppError> {
        if role.has_section(section) {
            Ok(Destination::Page { role, section })
        } else {
            Err(AppError::not_found(format!(
                "/{role}/{section} is not part of the {role} pages"
            )))
        }
    }

    /// The route group this destination belongs to, if any.
    pub fn role(&self) -> Option<UserRole> {
        match self {
            Destination::Root => None,
            Destination::Page { role, .. } => Some(*role),
        }
    }

    pub fn path(&self) -> String {
        self.to_string()
    }

    /// Apply the route-group guard for a viewer with `viewer` role (or none).
    ///
    /// The root is open to everyone. A page is reachable only when the viewer's
    /// role owns its route group; anything else redirects to the root.
    pub fn guarded(self, viewer: Option<UserRole>) -> Self {
        match self {
            Destination::Root => Destination::Root,
            Destination::Page { role, .. } if viewer == Some(role) => self,
            Destination::Page { .. } => Destination::Root,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Root => f.write_str("/"),
            Destination::Page { role, section } => write!(f, "/{role}/{section}"),
        }
    }
}

impl FromStr for Destination {
    type Err = AppError;

    /// Parse `/` or `/{role}/{section}`; a single trailing slash is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('/').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Destination::Root);
        }

        let rest = trimmed
            .strip_prefix('/')
            .ok_or_else(|| AppError::not_found(format!("`{s}` is not an absolute path")))?;

        let mut segments = rest.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(role), Some(section), None) => {
                Destination::page(role.parse()?, section.parse()?)
            }
            _ => Err(AppError::not_found(format!("No page at `{s}`"))),
        }
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: Section,
}

impl NavItem {
    const fn new(label: &'static str, section: Section) -> Self {
        Self { label, section }
    }
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem::new("Dashboard", Section::Dashboard),
    NavItem::new("User Management", Section::Users),
    NavItem::new("Modules", Section::Modules),
    NavItem::new("Reports", Section::Reports),
    NavItem::new("System Logs", Section::Logs),
    NavItem::new("Settings", Section::Settings),
];

const TEACHER_NAV: &[NavItem] = &[
    NavItem::new("Dashboard", Section::Dashboard),
    NavItem::new("My Classes", Section::Classes),
    NavItem::new("Teaching Materials", Section::Materials),
    NavItem::new("Messages", Section::Messages),
    NavItem::new("Profile", Section::Profile),
    NavItem::new("Settings", Section::Settings),
];

const STUDENT_NAV: &[NavItem] = &[
    NavItem::new("Dashboard", Section::Dashboard),
    NavItem::new("My Classes", Section::Classes),
    NavItem::new("Learning Materials", Section::Materials),
    NavItem::new("Messages", Section::Messages),
    NavItem::new("Profile", Section::Profile),
    NavItem::new("Settings", Section::Settings),
];

/// Sidebar entries for a role, top to bottom.
pub fn nav_items(role: UserRole) -> &'static [NavItem] {
    match role {
        UserRole::Admin => ADMIN_NAV,
        UserRole::Teacher => TEACHER_NAV,
        UserRole::Student => STUDENT_NAV,
    }
}
