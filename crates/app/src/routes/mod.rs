pub mod not_found;
pub mod onboarding_step;
pub mod user_type_selection;

use dioxus::prelude::*;

use not_found::NotFound;
use onboarding_step::{BasicInfo, OnboardingStep};
use user_type_selection::UserTypeSelection;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::UserTypeSelection {})]
    #[route("/user-type-selection")]
    UserTypeSelection {},
    #[route("/onboarding/basic-info")]
    BasicInfo {},
    #[route("/onboarding/:step")]
    OnboardingStep { step: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
