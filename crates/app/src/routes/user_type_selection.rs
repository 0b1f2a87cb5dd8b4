use crate::onboarding::{self, InFlight, Selection, ServerIdentity, ServerProfileStore};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdMusic, LdPen, LdShoppingBag, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{UserType, ALL_USER_TYPES};
use shared_ui::{
    notify, use_toast, Button, CardContent, CardDescription, CardHeader, CardTitle, RadioGroup,
    RadioGroupItem,
};

/// Icon shown on a user type's card.
#[component]
fn UserTypeIcon(user_type: UserType) -> Element {
    let icon = match user_type {
        UserType::Artist => rsx! { Icon::<LdMusic> { icon: LdMusic, width: 32, height: 32 } },
        UserType::Blogger => rsx! { Icon::<LdPen> { icon: LdPen, width: 32, height: 32 } },
        UserType::EventsManager => {
            rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 32, height: 32 } }
        }
        UserType::Merchandiser => {
            rsx! { Icon::<LdShoppingBag> { icon: LdShoppingBag, width: 32, height: 32 } }
        }
        UserType::Fan => rsx! { Icon::<LdUser> { icon: LdUser, width: 32, height: 32 } },
    };

    rsx! {
        span { class: "user-type-icon", {icon} }
    }
}

/// Onboarding step where a new user picks their user type.
#[component]
pub fn UserTypeSelection() -> Element {
    let mut selection = use_signal(Selection::default);
    let mut in_flight = use_signal(InFlight::default);
    let toast = use_toast();

    let handle_continue = move |_: MouseEvent| {
        if !in_flight.write().try_begin() {
            return;
        }
        spawn(async move {
            let result =
                onboarding::submit(selection(), &ServerIdentity, &ServerProfileStore).await;
            in_flight.write().finish();

            match result {
                Ok(path) => match path.parse::<Route>() {
                    Ok(route) => {
                        navigator().push(route);
                    }
                    Err(e) => tracing::error!(path, error = %e, "Onboarding path has no route"),
                },
                Err(e) => notify(&toast, e.notice()),
            }
        });
    };

    let submitting = in_flight.read().is_active();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./onboarding.css") }

        div { class: "onboarding-page",
            div { class: "onboarding-container",
                h1 { class: "onboarding-title", "Select Your User Type" }

                RadioGroup {
                    default_value: String::new(),
                    on_value_change: move |id: String| selection.write().select_id(&id),
                    div { class: "user-type-grid",
                        for (index, user_type) in ALL_USER_TYPES.iter().copied().enumerate() {
                            RadioGroupItem {
                                key: "{user_type}",
                                value: user_type.as_str(),
                                index,
                                CardHeader {
                                    UserTypeIcon { user_type }
                                    CardTitle { "{user_type.display_name()}" }
                                }
                                CardContent {
                                    CardDescription { "{user_type.description()}" }
                                }
                            }
                        }
                    }
                }

                div { class: "onboarding-actions",
                    Button {
                        loading: submitting,
                        onclick: handle_continue,
                        if submitting { "Saving..." } else { "Continue" }
                    }
                }
            }
        }
    }
}
