use crate::auth::{use_auth, use_toast_notifier};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use shared_types::{Destination, LoginCredentials, UserRole, ALL_ROLES};
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, Field, Input};

/// Public entry screen: pick a role, then sign in as it.
#[component]
pub fn Index() -> Element {
    let signed_in_as = use_auth().role();
    let mut selected_role = use_signal(|| Option::<UserRole>::None);

    rsx! {
        div { class: "entry-page",
            div { class: "entry-column",
                div { class: "entry-brand",
                    h1 { "Dija Connect" }
                    p { "Streamlined education platform" }
                }

                if let Some(role) = signed_in_as {
                    div { class: "entry-resume",
                        Link { to: Route::from(Destination::home(role)),
                            "Continue as {role.display_name()}"
                        }
                    }
                }

                {match selected_role() {
                    None => rsx! {
                        RolePicker { on_pick: move |role| selected_role.set(Some(role)) }
                    },
                    Some(role) => rsx! {
                        LoginForm { role, on_back: move |_| selected_role.set(None) }
                    },
                }}
            }
        }
    }
}

#[component]
fn RolePicker(on_pick: EventHandler<UserRole>) -> Element {
    rsx! {
        Card {
            CardContent {
                h2 { class: "login-heading", "Choose your role" }
                div { class: "role-picker",
                    for role in ALL_ROLES.iter().copied() {
                        Button {
                            key: "{role}",
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_pick.call(role),
                            "{role.display_name()}"
                        }
                    }
                }
            }
        }
    }
}

/// Credentials form for one role. The submit button stays disabled while
/// the login is pending.
#[component]
fn LoginForm(role: UserRole, on_back: EventHandler<()>) -> Element {
    let auth = use_auth();
    let notifier = use_toast_notifier();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let auth = auth.clone();
        async move {
            evt.prevent_default();
            loading.set(true);

            let credentials = LoginCredentials::new(email(), password());
            let result = auth.login(&notifier, credentials, role).await;
            loading.set(false);

            if let Ok(destination) = result {
                navigator().push(Route::from(destination));
            }
        }
    };

    rsx! {
        Card {
            CardContent {
                div { class: "login-heading",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        disabled: loading(),
                        onclick: move |_| on_back.call(()),
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    }
                    h2 { "{role.display_name()} Login" }
                }

                form { class: "login-form", onsubmit: handle_login,
                    Field { id: "email", label: "Email",
                        Input {
                            input_type: "email",
                            id: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    Field { id: "password", label: "Password",
                        Input {
                            input_type: "password",
                            id: "password",
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    Button {
                        button_type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }
            }
        }
    }
}
