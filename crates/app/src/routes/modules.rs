use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::{ModuleCategory, ModuleConfig, ModuleRegistry, ALL_CATEGORIES};
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Input, ToastOptions, Toggle,
};

/// Admin module management: search, category tabs, on/off switches.
#[component]
pub fn Modules() -> Element {
    let toast = use_toast();
    let mut registry = use_signal(ModuleRegistry::with_sample_data);
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| Option::<ModuleCategory>::None);
    let mut exported = use_signal(|| Option::<String>::None);

    let visible: Vec<ModuleConfig> = registry
        .read()
        .filter(&search.read(), category())
        .into_iter()
        .cloned()
        .collect();
    let enabled = registry.read().enabled_count();

    let mut toggle = move |id: String| {
        let result = registry.write().toggle(&id);
        match result {
            Ok(module) => {
                tracing::info!(module = %module.id, enabled = module.enabled, "module toggled");
                toast.success(module.toggle_message(), ToastOptions::new());
            }
            Err(e) => {
                toast.error(e.message, ToastOptions::new());
            }
        }
    };

    let export = move |_: MouseEvent| match registry.read().export_json() {
        Ok(json) => {
            exported.set(Some(json));
            toast.success(
                "Module configuration exported successfully".to_string(),
                ToastOptions::new(),
            );
        }
        Err(e) => {
            toast.error(format!("Export failed: {e}"), ToastOptions::new());
        }
    };

    rsx! {
        h1 { class: "page-title", "Module Management" }
        p { class: "page-subtitle",
            "Configure which modules are available in your Dija Connect installation ({enabled} enabled)"
        }

        div { class: "module-toolbar",
            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
            Input {
                placeholder: "Search modules...",
                value: search(),
                on_input: move |e: FormEvent| search.set(e.value()),
            }
            Button { variant: ButtonVariant::Outline, onclick: export,
                Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                "Export Configuration"
            }
        }

        div { class: "module-tabs",
            CategoryTab {
                label: "All Modules",
                active: category().is_none(),
                onclick: move |_| category.set(None),
            }
            for c in ALL_CATEGORIES.iter().copied() {
                CategoryTab {
                    key: "{c}",
                    label: c.label(),
                    active: category() == Some(c),
                    onclick: move |_| category.set(Some(c)),
                }
            }
        }

        div { class: "module-grid",
            for module in visible {
                ModuleCard {
                    key: "{module.id}",
                    module: module.clone(),
                    on_toggle: move |id: String| toggle(id),
                }
            }
        }

        if let Some(json) = exported() {
            Card {
                CardHeader {
                    CardTitle { "Exported configuration" }
                }
                CardContent {
                    pre { "{json}" }
                }
            }
        }
    }
}

#[component]
fn CategoryTab(label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let variant = if active {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };
    rsx! {
        Button { variant: variant, size: ButtonSize::Small, onclick: move |e| onclick.call(e), "{label}" }
    }
}

fn category_tone(category: ModuleCategory) -> BadgeTone {
    match category {
        ModuleCategory::Learning => BadgeTone::Success,
        ModuleCategory::Communication => BadgeTone::Accent,
        ModuleCategory::Assessment => BadgeTone::Warning,
        ModuleCategory::Administrative => BadgeTone::Neutral,
    }
}

#[component]
fn ModuleCard(module: ModuleConfig, on_toggle: EventHandler<String>) -> Element {
    let id = module.id.clone();

    rsx! {
        Card {
            CardHeader {
                div { class: "module-row",
                    div {
                        CardTitle { "{module.name}" }
                        CardDescription { "{module.description}" }
                    }
                    Toggle {
                        checked: module.enabled,
                        disabled: module.is_core,
                        title: format!("Toggle {}", module.name),
                        on_toggle: move |_: bool| on_toggle.call(id.clone()),
                    }
                }
            }
            CardContent {
                div { class: "module-meta",
                    Badge { tone: category_tone(module.category), "{module.category}" }
                    if module.is_core {
                        Badge { tone: BadgeTone::Info, "Core" }
                    }
                }
            }
        }
    }
}
