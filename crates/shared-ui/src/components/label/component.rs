use dioxus::prelude::*;
use dioxus_primitives::label::Label as PrimLabel;

/// A labelled form row. `id` ties the label to the control passed as children.
#[component]
pub fn Field(id: String, label: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            PrimLabel { class: "label", html_for: id, "{label}" }
            {children}
        }
    }
}
