use dioxus::prelude::*;

/// Colour family of a badge. Module categories each get their own tone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Accent,
    Success,
    Warning,
    Info,
}

impl BadgeTone {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Accent => "accent",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Info => "info",
        }
    }
}

/// Rounded tag such as a module category or "Core".
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "badge", None, false),
            Attribute::new("data-tone", tone.as_str(), None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..merged, {children} }
    }
}
