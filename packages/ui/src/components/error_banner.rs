use dioxus::prelude::*;

/// The page's single error slot. Renders nothing when empty.
#[component]
pub fn ErrorBanner(#[props(!optional)] message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div {
                class: "px-2.5 py-2.5 mb-4 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                role: "alert",
                "{message}"
            }
        }
    }
}
