use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// How loudly a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Warning,
    Error,
}

/// A user-facing notification: short title plus one line of detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: NoticeSeverity,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: NoticeSeverity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }
}

/// Show a notice as a toast. Fire-and-forget.
pub fn notify(toasts: &Toasts, notice: Notice) {
    let options = ToastOptions::new().description(notice.description);
    match notice.severity {
        NoticeSeverity::Warning => toasts.warning(notice.title, options),
        NoticeSeverity::Error => toasts.error(notice.title, options),
    }
}
