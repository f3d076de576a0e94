use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdCalendar, LdCheck, LdClock, LdFileText, LdFolder, LdMessageSquare, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{Notification, NotificationInbox, NotificationKind, Section, UserRole};
use shared_ui::{use_toast, Button, ButtonSize, ButtonVariant, ToastOptions};

fn kind_icon(kind: NotificationKind) -> Element {
    match kind {
        NotificationKind::Assignment => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 } },
        NotificationKind::Reminder => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 } },
        NotificationKind::Grade => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 16, height: 16 } },
        NotificationKind::Message => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 16, height: 16 } },
        NotificationKind::Material => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 16, height: 16 } },
    }
}

/// Header bell with an unread dot and a popover listing the inbox.
#[component]
pub fn NotificationBell(role: UserRole) -> Element {
    let toast = use_toast();
    let mut inbox = use_signal(NotificationInbox::with_sample_data);
    let mut open = use_signal(|| false);

    let unread = inbox.read().unread_count();
    let items: Vec<Notification> = inbox.read().iter().cloned().collect();

    let mark_all = move |_: MouseEvent| {
        inbox.write().mark_all_read();
        toast.success(
            "All notifications marked as read".to_string(),
            ToastOptions::new(),
        );
    };

    rsx! {
        div { class: "bell",
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                title: "Notifications",
                onclick: move |_| open.set(!open()),
                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                if unread > 0 {
                    span { class: "bell-dot" }
                }
            }

            if open() {
                div { class: "bell-panel",
                    div { class: "bell-panel-header",
                        h4 { "Notifications" }
                        if unread > 0 {
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Small,
                                onclick: mark_all,
                                "Mark all as read"
                            }
                        }
                    }

                    if items.is_empty() {
                        div { class: "bell-empty", "No notifications" }
                    } else {
                        div { class: "bell-list",
                            for item in items {
                                div {
                                    key: "{item.id}",
                                    class: "bell-item",
                                    "data-unread": "{!item.read}",
                                    div {
                                        p { class: "bell-item-title",
                                            {kind_icon(item.kind)}
                                            " {item.title}"
                                        }
                                        p { class: "bell-item-message", "{item.message}" }
                                        p { class: "bell-item-time",
                                            Icon::<LdClock> { icon: LdClock, width: 12, height: 12 }
                                            "{item.time}"
                                        }
                                    }
                                    div {
                                        if !item.read {
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                size: ButtonSize::Icon,
                                                title: "Mark as read",
                                                onclick: move |_| {
                                                    if let Err(e) = inbox.write().mark_read(item.id) {
                                                        toast.error(e.message, ToastOptions::new());
                                                    }
                                                },
                                                Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                                            }
                                        }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            size: ButtonSize::Icon,
                                            title: "Remove",
                                            onclick: move |_| {
                                                let removed = inbox.write().remove(item.id);
                                                match removed {
                                                    Ok(_) => {
                                                        toast.success("Notification removed".to_string(), ToastOptions::new());
                                                    }
                                                    Err(e) => {
                                                        toast.error(e.message, ToastOptions::new());
                                                    }
                                                }
                                            },
                                            Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "bell-panel-footer",
                        Link {
                            to: Route::Workspace { role, section: Section::Notifications },
                            onclick: move |_| open.set(false),
                            "View all notifications"
                        }
                    }
                }
            }
        }
    }
}
