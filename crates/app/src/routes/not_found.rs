use dioxus::prelude::*;
use shared_types::FeatureFlags;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    let flags = use_context::<FeatureFlags>();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::UserTypeSelection {},
                    class: "not-found-link",
                    "Start onboarding"
                }
                if flags.docs && path.starts_with("/api") {
                    p { class: "not-found-message",
                        "Looking for the API? See the "
                        a { href: "/docs", class: "not-found-link", "API reference" }
                        "."
                    }
                }
            }
        }
    }
}
