use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::UserType;

/// First onboarding step for artists.
#[component]
pub fn BasicInfo() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./onboarding.css") }

        div { class: "onboarding-page",
            div { class: "onboarding-container onboarding-step",
                p { class: "onboarding-step-eyebrow", "Artist onboarding" }
                h1 { class: "onboarding-title", "Tell us about yourself" }
                p { class: "onboarding-step-copy",
                    "Next we'll collect your artist name, genre and location so fans can find you."
                }
                Link { to: Route::UserTypeSelection {},
                    class: "onboarding-back-link",
                    "Choose a different user type"
                }
            }
        }
    }
}

/// Per-role onboarding step at `/onboarding/{step}`.
#[component]
pub fn OnboardingStep(step: String) -> Element {
    let Some(user_type) = UserType::parse(&step) else {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./onboarding.css") }

            div { class: "onboarding-page",
                div { class: "onboarding-container onboarding-step",
                    h1 { class: "onboarding-title", "Onboarding step not found" }
                    p { class: "onboarding-step-copy",
                        "There is no onboarding step called "
                        code { "{step}" }
                        "."
                    }
                    Link { to: Route::UserTypeSelection {},
                        class: "onboarding-back-link",
                        "Back to user type selection"
                    }
                }
            }
        };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./onboarding.css") }

        div { class: "onboarding-page",
            div { class: "onboarding-container onboarding-step",
                p { class: "onboarding-step-eyebrow", "{user_type.display_name()} onboarding" }
                h1 { class: "onboarding-title", "{step_heading(user_type)}" }
                p { class: "onboarding-step-copy", "{user_type.description()}" }
                Link { to: Route::UserTypeSelection {},
                    class: "onboarding-back-link",
                    "Choose a different user type"
                }
            }
        }
    }
}

fn step_heading(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Artist => "Tell us about yourself",
        UserType::Blogger => "Set up your blog",
        UserType::EventsManager => "Set up your events",
        UserType::Merchandiser => "Set up your store",
        UserType::Fan => "Find artists you love",
    }
}
