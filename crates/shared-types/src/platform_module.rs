use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AppError;

/// Grouping used by the tabs on the admin Modules page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Learning,
    Communication,
    Assessment,
    Administrative,
}

pub const ALL_CATEGORIES: &[ModuleCategory] = &[
    ModuleCategory::Learning,
    ModuleCategory::Communication,
    ModuleCategory::Assessment,
    ModuleCategory::Administrative,
];

impl ModuleCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleCategory::Learning => "Learning",
            ModuleCategory::Communication => "Communication",
            ModuleCategory::Assessment => "Assessment",
            ModuleCategory::Administrative => "Administrative",
        }
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A switchable platform feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    /// Core modules are always on.
    pub is_core: bool,
    pub category: ModuleCategory,
}

impl ModuleConfig {
    fn seed(
        id: &str,
        name: &str,
        description: &str,
        enabled: bool,
        is_core: bool,
        category: ModuleCategory,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            enabled,
            is_core,
            category,
        }
    }

    /// Toast text after a toggle ("Enabled X module").
    pub fn toggle_message(&self) -> String {
        let verb = if self.enabled { "Enabled" } else { "Disabled" };
        format!("{verb} {} module", self.name)
    }
}

/// The admin-side module table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleRegistry {
    modules: Vec<ModuleConfig>,
}

impl ModuleRegistry {
    pub fn new(modules: Vec<ModuleConfig>) -> Self {
        Self { modules }
    }

    pub fn with_sample_data() -> Self {
        use ModuleCategory::*;
        Self::new(vec![
            ModuleConfig::seed(
                "core-dashboard",
                "Dashboard",
                "Main dashboard and activity overview",
                true,
                true,
                Administrative,
            ),
            ModuleConfig::seed(
                "class-management",
                "Class Management",
                "Create and manage classes, attendance, and schedules",
                true,
                true,
                Learning,
            ),
            ModuleConfig::seed(
                "video-conferencing",
                "Video Conferencing",
                "Real-time video classes with screen sharing",
                true,
                false,
                Communication,
            ),
            ModuleConfig::seed(
                "assignments",
                "Assignments",
                "Create, distribute, and grade assignments",
                true,
                false,
                Assessment,
            ),
            ModuleConfig::seed(
                "messaging",
                "Messaging System",
                "Instant messaging between teachers and students",
                true,
                false,
                Communication,
            ),
            ModuleConfig::seed(
                "progress-tracking",
                "Progress Tracking",
                "Track and visualize student progress over time",
                true,
                false,
                Assessment,
            ),
            ModuleConfig::seed(
                "file-management",
                "File Management",
                "Upload and share learning materials",
                true,
                true,
                Learning,
            ),
            ModuleConfig::seed(
                "user-management",
                "User Management",
                "Manage users, roles, and permissions",
                true,
                true,
                Administrative,
            ),
            ModuleConfig::seed(
                "reports",
                "Advanced Reports",
                "Generate detailed reports on platform usage and performance",
                false,
                false,
                Administrative,
            ),
            ModuleConfig::seed(
                "ai-assistant",
                "AI Learning Assistant",
                "AI-powered learning assistance and content generation",
                false,
                false,
                Learning,
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleConfig> {
        self.modules.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ModuleConfig> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn enabled_count(&self) -> usize {
        self.modules.iter().filter(|m| m.enabled).count()
    }

    /// Flip a module on or off and return its new state.
    pub fn toggle(&mut self, id: &str) -> Result<ModuleConfig, AppError> {
        let module = self
            .modules
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::not_found(format!("Module `{id}` not found")))?;

        if module.is_core {
            return Err(AppError::module_locked(format!(
                "{} is a core module and cannot be disabled",
                module.name
            )));
        }

        module.enabled = !module.enabled;
        Ok(module.clone())
    }

    /// Pretty-printed JSON of every module, as offered by "Export Configuration".
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.modules)
    }

    /// Modules whose name contains `search` (case-insensitive), limited to
    /// `category` when one is given.
    pub fn filter(&self, search: &str, category: Option<ModuleCategory>) -> Vec<&ModuleConfig> {
        let needle = search.to_lowercase();
        self.modules
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect()
    }
}
