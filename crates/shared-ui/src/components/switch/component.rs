use dioxus::prelude::*;
use dioxus_primitives::switch::{Switch, SwitchThumb};

/// On/off switch reporting the requested state through `on_toggle`.
/// The caller decides whether to apply it, so `checked` stays authoritative.
#[component]
pub fn Toggle(
    checked: bool,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    on_toggle: EventHandler<bool>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Switch {
            class: "switch",
            title: title,
            checked: Some(checked),
            disabled: disabled,
            on_checked_change: move |value: bool| on_toggle.call(value),
            SwitchThumb { class: "switch-thumb" }
        }
    }
}
